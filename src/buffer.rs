use crate::glyph::Glyph;
use crate::palette::COLOR_COUNT;
use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) glyph: Glyph,
    pub(crate) color: usize,
}

/// Committed trail glyphs for the active viewport. A color only exists
/// alongside a glyph, so an empty cell has nothing to render but a blank.
pub(crate) struct FrameBuffer {
    w: usize,
    h: usize,
    cells: Vec<Option<Cell>>,
    flicker: bool,
}

impl FrameBuffer {
    pub(crate) fn new(w: u16, h: u16, flicker: bool) -> Self {
        let (w, h) = (w as usize, h as usize);
        Self {
            w,
            h,
            cells: vec![None; w * h],
            flicker,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.w
    }

    pub(crate) fn height(&self) -> usize {
        self.h
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.w || y >= self.h {
            return None;
        }
        Some(y * self.w + x)
    }

    pub(crate) fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).and_then(|i| self.cells[i])
    }

    pub(crate) fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).is_some_and(|i| self.cells[i].is_none())
    }

    /// Write-once: lands only on an empty in-bounds cell. Returns whether it did.
    pub(crate) fn write(&mut self, x: i32, y: i32, glyph: Glyph, color: usize) -> bool {
        match self.idx(x, y) {
            Some(i) if self.cells[i].is_none() => {
                self.cells[i] = Some(Cell { glyph, color });
                true
            }
            _ => false,
        }
    }

    pub(crate) fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub(crate) fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Color to draw a cell with this frame. Flicker ignores the stored color
    /// and rolls a fresh one on every call.
    pub(crate) fn render_color<R: RandomSource>(
        &self,
        x: i32,
        y: i32,
        rng: &mut R,
    ) -> Option<usize> {
        let cell = self.get(x, y)?;
        if self.flicker {
            Some(rng.below(COLOR_COUNT as u32) as usize)
        } else {
            Some(cell.color)
        }
    }
}
