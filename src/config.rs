use std::time::Duration;

/// Upper bound on concurrently simulated pipes.
pub(crate) const MAX_PIPES: usize = 16;
/// Largest viewport the frame buffer will cover; bigger terminals are cropped.
pub(crate) const MAX_WIDTH: u16 = 512;
pub(crate) const MAX_HEIGHT: u16 = 256;
/// Ticks a pipe travels straight before it may turn again.
pub(crate) const TURN_DELAY: u32 = 3;
/// Cells kept clear along every edge when (re)spawning.
pub(crate) const BORDER_PADDING: i32 = 2;

pub(crate) const DEFAULT_DELAY_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ColorMode {
    /// Every pipe draws with this palette index.
    Fixed(usize),
    /// Each written cell gets its own random palette index.
    Rainbow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SimParams {
    pub(crate) turn_delay: u32,
    pub(crate) border_padding: i32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            turn_delay: TURN_DELAY,
            border_padding: BORDER_PADDING,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct RunConfig {
    pub(crate) pipe_count: usize,
    pub(crate) delay: Duration,
    pub(crate) color: ColorMode,
    pub(crate) flicker: bool,
    pub(crate) seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pipe_count: 1,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            color: ColorMode::Fixed(0),
            flicker: false,
            seed: None,
        }
    }
}

impl RunConfig {
    pub(crate) fn rainbow(&self) -> bool {
        self.flicker || self.color == ColorMode::Rainbow
    }
}

/// Pipe counts outside 1..=MAX_PIPES are pulled back into range.
pub(crate) fn clamp_pipe_count(requested: usize) -> usize {
    let n = requested.clamp(1, MAX_PIPES);
    if n != requested {
        tracing::warn!(requested, clamped = n, "pipe count out of range");
    }
    n
}

/// Crop a terminal size to what the frame buffer supports.
pub(crate) fn clamp_viewport(cols: u16, rows: u16) -> (u16, u16) {
    let w = cols.min(MAX_WIDTH);
    let h = rows.min(MAX_HEIGHT);
    if (w, h) != (cols, rows) {
        tracing::warn!(cols, rows, w, h, "viewport larger than supported, cropping");
    }
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_count_is_clamped_both_ways() {
        assert_eq!(clamp_pipe_count(0), 1);
        assert_eq!(clamp_pipe_count(5), 5);
        assert_eq!(clamp_pipe_count(16), 16);
        assert_eq!(clamp_pipe_count(400), MAX_PIPES);
    }

    #[test]
    fn viewport_is_cropped_to_maximum() {
        assert_eq!(clamp_viewport(80, 24), (80, 24));
        assert_eq!(clamp_viewport(1000, 24), (MAX_WIDTH, 24));
        assert_eq!(clamp_viewport(80, 999), (80, MAX_HEIGHT));
    }

    #[test]
    fn flicker_implies_rainbow() {
        let cfg = RunConfig {
            flicker: true,
            ..RunConfig::default()
        };
        assert!(cfg.rainbow());
        assert!(!RunConfig::default().rainbow());
    }
}
