use crate::{Cell, Stage};

/// Draws the board as a box with column and row indices.
///
/// Stones are `●`, selected stones are `○`.
pub fn render(stage: &Stage) -> String {
    let size = stage.size();

    // Draw the column indices and the top of the box
    let mut header = String::from("    ");
    for j in 0..size {
        header += &format!("{:<2}", j);
    }
    let mut result = String::from(header.trim_end());
    result += "\n   ╭";
    for _ in 0..size {
        result += "──";
    }
    result += "╮";

    for (i, row) in stage.cells().chunks(size).enumerate() {
        result += &format!("\n{:>2} │", i);
        for cell in row {
            result += match cell {
                Cell::Empty => "  ",
                Cell::Stone => "● ",
                Cell::Selected => "○ ",
            };
        }
        result += "│";
    }

    // Draw the bottom of the box
    result += "\n   ╰";
    for _ in 0..size {
        result += "──";
    }
    result += "╯";
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage;

    #[test]
    fn render_small_board() {
        let expected = [
            "    0 1",
            "   ╭────╮",
            " 0 │●   │",
            " 1 │○   │",
            "   ╰────╯",
        ]
        .join("\n");
        assert_eq!(render(&stage!("1020")), expected);
    }

    #[test]
    fn render_has_one_line_per_row() {
        let stage = stage!("000000010000001100001100000000001000");
        let text = render(&stage);
        assert_eq!(text.lines().count(), 6 + 3);
        assert_eq!(text.matches('●').count(), 6);
    }
}
