use crate::buffer::FrameBuffer;
use crate::palette;
use crate::rng::RandomSource;
use crossterm::{
    cursor, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};
use std::io::{self, Write};

/// Full redraw of the active viewport: clear, home, every row, reset color.
pub(crate) fn draw_frame<W: Write, R: RandomSource>(
    out: &mut W,
    buf: &FrameBuffer,
    rng: &mut R,
) -> io::Result<()> {
    queue!(out, BeginSynchronizedUpdate, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    for y in 0..buf.height() {
        let mut current: Option<usize> = None;
        for x in 0..buf.width() {
            let (xi, yi) = (x as i32, y as i32);
            let Some(cell) = buf.get(xi, yi) else {
                queue!(out, Print(' '))?;
                continue;
            };
            let color = buf.render_color(xi, yi, rng).unwrap_or(cell.color);
            if current != Some(color) {
                queue!(out, SetForegroundColor(palette::color_at(color)))?;
                current = Some(color);
            }
            queue!(out, Print(cell.glyph.as_char()))?;
        }
        // raw mode: no implicit carriage return, and no trailing newline so
        // the last row never scrolls the screen
        if y + 1 < buf.height() {
            queue!(out, Print("\r\n"))?;
        }
    }

    queue!(out, ResetColor, EndSynchronizedUpdate)?;
    out.flush()
}
