use crate::buffer::FrameBuffer;
use crate::config::{ColorMode, RunConfig, SimParams};
use crate::pipe::{Pipe, StepOutcome};
use crate::render;
use crate::rng::RandomSource;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TickReport {
    pub(crate) respawns: usize,
    /// The screen filled up this tick and everything was started over.
    pub(crate) reset: bool,
}

/// Owns every pipe, the frame buffer and the random stream. One `tick`
/// steps all pipes in order, then restarts the board if it filled up.
pub(crate) struct Simulation<R: RandomSource> {
    pub(crate) buffer: FrameBuffer,
    pub(crate) pipes: Vec<Pipe>,
    params: SimParams,
    mode: ColorMode,
    rng: R,
    pub(crate) ticks: u64,
    pub(crate) cycles: u64,
}

impl<R: RandomSource> Simulation<R> {
    pub(crate) fn new(w: u16, h: u16, cfg: &RunConfig, params: SimParams, mut rng: R) -> Self {
        let mode = if cfg.rainbow() {
            ColorMode::Rainbow
        } else {
            cfg.color
        };
        let buffer = FrameBuffer::new(w, h, cfg.flicker);
        let pipes = (0..cfg.pipe_count)
            .map(|_| Pipe::spawn(&mut rng, &buffer, &params, mode))
            .collect();
        Self {
            buffer,
            pipes,
            params,
            mode,
            rng,
            ticks: 0,
            cycles: 0,
        }
    }

    pub(crate) fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        for pipe in &mut self.pipes {
            let outcome = pipe.step(&mut self.buffer, &mut self.rng, &self.params, self.mode);
            if outcome == StepOutcome::Respawned {
                report.respawns += 1;
            }
        }
        self.ticks += 1;

        if self.buffer.is_filled() {
            self.restart();
            report.reset = true;
        }
        report
    }

    fn restart(&mut self) {
        self.cycles += 1;
        self.buffer.clear();
        for pipe in &mut self.pipes {
            *pipe = Pipe::spawn(&mut self.rng, &self.buffer, &self.params, self.mode);
        }
    }

    pub(crate) fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        render::draw_frame(out, &self.buffer, &mut self.rng)
    }
}
