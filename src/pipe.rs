use crate::buffer::FrameBuffer;
use crate::config::{ColorMode, SimParams};
use crate::glyph::{resolve_glyph, Direction};
use crate::palette::COLOR_COUNT;
use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    Straight,
    Turned,
    Respawned,
}

#[derive(Clone, Debug)]
pub(crate) struct Pipe {
    pub(crate) pos: (i32, i32),
    /// Last cell the head occupied; gets the corner glyph once a turn is known.
    pub(crate) prev_pos: (i32, i32),
    pub(crate) dir: Direction,
    pub(crate) prev_dir: Direction,
    pub(crate) steps_since_turn: u32,
    pub(crate) first_move: bool,
    pub(crate) color_id: usize,
}

fn interior_coord<R: RandomSource>(rng: &mut R, dim: i32, pad: i32) -> i32 {
    // Viewports too small for the padding fall back to the whole axis.
    let (lo, hi) = if dim > 2 * pad { (pad, dim - pad) } else { (0, dim) };
    lo + rng.below((hi - lo).max(0) as u32) as i32
}

/// Random heading plus a point inside the padded interior of a `w`x`h` grid.
pub(crate) fn random_start<R: RandomSource>(
    rng: &mut R,
    w: i32,
    h: i32,
    pad: i32,
) -> ((i32, i32), Direction) {
    let dir = Direction::from_index(rng.below(4));
    let x = interior_coord(rng, w, pad);
    let y = interior_coord(rng, h, pad);
    ((x, y), dir)
}

fn lifetime_color<R: RandomSource>(rng: &mut R, mode: ColorMode) -> usize {
    match mode {
        ColorMode::Fixed(i) => i,
        ColorMode::Rainbow => rng.below(COLOR_COUNT as u32) as usize,
    }
}

impl Pipe {
    pub(crate) fn spawn<R: RandomSource>(
        rng: &mut R,
        buf: &FrameBuffer,
        params: &SimParams,
        mode: ColorMode,
    ) -> Self {
        let (pos, dir) = random_start(
            rng,
            buf.width() as i32,
            buf.height() as i32,
            params.border_padding,
        );
        Self {
            pos,
            prev_pos: pos,
            dir,
            prev_dir: dir,
            steps_since_turn: 0,
            first_move: true,
            color_id: lifetime_color(rng, mode),
        }
    }

    /// Fresh position and heading; the color is only re-rolled in rainbow mode.
    pub(crate) fn respawn<R: RandomSource>(
        &mut self,
        rng: &mut R,
        buf: &FrameBuffer,
        params: &SimParams,
        mode: ColorMode,
    ) {
        let (pos, dir) = random_start(
            rng,
            buf.width() as i32,
            buf.height() as i32,
            params.border_padding,
        );
        self.pos = pos;
        self.prev_pos = pos;
        self.dir = dir;
        self.prev_dir = dir;
        self.steps_since_turn = 0;
        self.first_move = true;
        if mode == ColorMode::Rainbow {
            self.color_id = lifetime_color(rng, mode);
        }
    }

    fn stroke_color<R: RandomSource>(&self, rng: &mut R, mode: ColorMode) -> usize {
        match mode {
            ColorMode::Fixed(_) => self.color_id,
            ColorMode::Rainbow => rng.below(COLOR_COUNT as u32) as usize,
        }
    }

    fn in_margin(&self, w: i32, h: i32, pad: i32) -> bool {
        let (x, y) = self.pos;
        x < pad || x >= w - pad || y < pad || y >= h - pad
    }

    /// Advance one tick. The glyph is drawn into the new cell before the margin
    /// check runs, so a pipe can leave one segment inside the padding.
    pub(crate) fn step<R: RandomSource>(
        &mut self,
        buf: &mut FrameBuffer,
        rng: &mut R,
        params: &SimParams,
        mode: ColorMode,
    ) -> StepOutcome {
        // Corners only land on a trailing cell nobody has drawn yet; the
        // straight segment from the previous tick is never replaced.
        let (x, y) = self.prev_pos;
        if !self.first_move && self.prev_dir != self.dir && buf.is_empty_at(x, y) {
            let color = self.stroke_color(rng, mode);
            buf.write(x, y, resolve_glyph(self.prev_dir, self.dir), color);
        }

        let (dx, dy) = self.dir.delta();
        self.pos = (self.pos.0 + dx, self.pos.1 + dy);

        let (x, y) = self.pos;
        if buf.is_empty_at(x, y) {
            let color = self.stroke_color(rng, mode);
            buf.write(x, y, resolve_glyph(self.dir, self.dir), color);
        }

        self.prev_pos = self.pos;
        self.prev_dir = self.dir;
        self.first_move = false;

        let mut outcome = StepOutcome::Straight;
        if self.steps_since_turn >= params.turn_delay {
            match rng.below(6) {
                0 => {
                    self.dir = self.dir.right();
                    self.steps_since_turn = 0;
                    outcome = StepOutcome::Turned;
                }
                1 => {
                    self.dir = self.dir.left();
                    self.steps_since_turn = 0;
                    outcome = StepOutcome::Turned;
                }
                _ => self.steps_since_turn += 1,
            }
        } else {
            self.steps_since_turn += 1;
        }

        let (w, h) = (buf.width() as i32, buf.height() as i32);
        if self.in_margin(w, h, params.border_padding) {
            tracing::trace!(x, y, "pipe reached margin, respawning");
            self.respawn(rng, buf, params, mode);
            outcome = StepOutcome::Respawned;
        }
        outcome
    }
}
