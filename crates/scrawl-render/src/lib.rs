//! Terminal renderer for a finished canvas. Row 0 of the canvas is the
//! bottom of the image, so rows print in reverse; cells still holding the
//! fill character take the fill color, everything else the draw color.

use crossterm::style::{style, Color, Stylize};
use scrawl_lang::{Canvas, ColorTag};

fn terminal_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Black => Color::Black,
        ColorTag::White => Color::White,
        ColorTag::Red => Color::DarkRed,
        ColorTag::Green => Color::DarkGreen,
    }
}

/// Render with ANSI color sequences for direct terminal output.
pub fn render_styled(canvas: &Canvas) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for row in canvas.rows().iter().rev() {
        for &ch in row {
            let tag = if ch == canvas.fill_char() {
                canvas.fill_color()
            } else {
                canvas.draw_color()
            };
            let _ = write!(out, "{}", style(ch).with(terminal_color(tag)));
        }
        out.push('\n');
    }
    out
}

/// Render the bare character grid, one line per row, top row first.
pub fn render_plain(canvas: &Canvas) -> String {
    let mut out = String::new();
    for row in canvas.rows().iter().rev() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal_canvas() -> Canvas {
        scrawl_lang::run(
            r##"set_size(3,3);set_background("#", BLACK);set_color(RED);plot("c",(0,0),(2,2),LINEAR);"##,
        )
        .expect("script failed")
    }

    #[test]
    fn plain_output_reverses_row_order() {
        // cell (0,0) is bottom-left, so it lands on the LAST printed line
        let out = render_plain(&diagonal_canvas());
        assert_eq!(out, "###\n#c#\nc##\n");
    }

    #[test]
    fn plain_output_of_empty_canvas_is_empty() {
        let canvas = scrawl_lang::run("set_size(0, 0);").expect("script failed");
        assert_eq!(render_plain(&canvas), "");
    }

    #[test]
    fn styled_output_carries_color_sequences() {
        let out = render_styled(&diagonal_canvas());
        assert!(out.contains('\u{1b}'));
        // the characters survive styling, in the same order as the plain render
        let stripped: String = out.chars().filter(|c| "#c\n".contains(*c)).collect();
        assert_eq!(stripped, "###\n#c#\nc##\n");
    }
}
