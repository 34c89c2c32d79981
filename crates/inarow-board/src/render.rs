//! Text rendering of a board.

use crate::board::Board;

/// Render `board` as rows of ` X | O |   ` separated by `---+---+---`.
pub(crate) fn render(board: &Board<'_>) -> String {
    let size = board.size();
    let separator = vec!["---"; size].join("+");
    let mut out = String::with_capacity((size * 4 + 1) * size * 2);

    for row in 0..size {
        let line: Vec<String> = board.row(row).map(|c| format!(" {} ", c.symbol())).collect();
        out.push_str(&line.join("|"));
        out.push('\n');
        if row + 1 < size {
            out.push_str(&separator);
            out.push('\n');
        }
    }
    out.push('\n');
    out
}
