use crate::config::{clamp_pipe_count, ColorMode, RunConfig, DEFAULT_DELAY_MS};
use crate::palette;
use clap::Parser;
use std::{path::PathBuf, time::Duration};

/// Terminal screensaver: pipes grow and turn until the screen is full, then start over.
#[derive(Parser, Debug)]
#[command(name = "pipes", version)]
pub(crate) struct Args {
    /// run in the terminal (default)
    #[arg(long, overrides_with = "gui")]
    cli: bool,

    /// 3D mode (not implemented yet)
    #[arg(long, overrides_with = "cli")]
    gui: bool,

    /// red, green, yellow, blue, magenta, cyan, white, gray or rainbow
    #[arg(long, value_name = "NAME", value_parser = parse_color, default_value = "red")]
    color: ColorMode,

    /// re-roll every glyph's color each frame (implies rainbow)
    #[arg(long)]
    flicker: bool,

    /// milliseconds between frames
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DELAY_MS)]
    speed: u64,

    /// how many pipes to run at once (max 16)
    #[arg(long, value_name = "N", default_value_t = 1)]
    hm: usize,

    /// seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// write tracing output to this file (filter with PIPES_LOG)
    #[arg(long, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,
}

fn parse_color(s: &str) -> Result<ColorMode, String> {
    if s.eq_ignore_ascii_case("rainbow") {
        return Ok(ColorMode::Rainbow);
    }
    palette::index_of(s)
        .map(ColorMode::Fixed)
        .ok_or_else(|| {
            let names: Vec<&str> = palette::PALETTE.iter().map(|p| p.name).collect();
            format!("unknown color '{s}', expected one of {}, rainbow", names.join(", "))
        })
}

#[derive(Debug)]
pub(crate) enum Launch {
    Gui,
    Cli(RunConfig),
}

#[derive(Debug)]
pub(crate) struct LaunchPlan {
    pub(crate) mode: Launch,
    pub(crate) notices: Vec<String>,
}

impl Args {
    pub(crate) fn into_launch(self) -> LaunchPlan {
        let mut notices = Vec::new();
        // the two flags override each other, so at most one is set; the
        // flicker warning follows the final mode, not the flag order
        if self.gui && !self.cli {
            if self.flicker {
                notices.push("Warning: --flicker is not supported in GUI mode. Ignoring.".to_string());
            }
            return LaunchPlan {
                mode: Launch::Gui,
                notices,
            };
        }

        let cfg = RunConfig {
            pipe_count: clamp_pipe_count(self.hm),
            delay: Duration::from_millis(self.speed),
            color: if self.flicker {
                ColorMode::Rainbow
            } else {
                self.color
            },
            flicker: self.flicker,
            seed: self.seed,
        };
        LaunchPlan {
            mode: Launch::Cli(cfg),
            notices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(argv: &[&str]) -> LaunchPlan {
        let mut full = vec!["pipes"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap().into_launch()
    }

    fn cli_config(argv: &[&str]) -> RunConfig {
        match plan(argv).mode {
            Launch::Cli(cfg) => cfg,
            other => panic!("expected terminal mode, got {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let cfg = cli_config(&["--cli"]);
        assert_eq!(cfg.pipe_count, 1);
        assert_eq!(cfg.delay, Duration::from_millis(100));
        assert_eq!(cfg.color, ColorMode::Fixed(0));
        assert!(!cfg.flicker);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn color_names() {
        assert_eq!(cli_config(&["--color", "cyan"]).color, ColorMode::Fixed(5));
        assert_eq!(cli_config(&["--color", "gray"]).color, ColorMode::Fixed(7));
        assert_eq!(cli_config(&["--color", "rainbow"]).color, ColorMode::Rainbow);
        assert!(Args::try_parse_from(["pipes", "--color", "mauve"]).is_err());
    }

    #[test]
    fn pipe_count_is_clamped() {
        assert_eq!(cli_config(&["--hm", "40"]).pipe_count, 16);
        assert_eq!(cli_config(&["--hm", "0"]).pipe_count, 1);
        assert_eq!(cli_config(&["--hm", "7", "--speed", "0"]).pipe_count, 7);
    }

    #[test]
    fn flicker_forces_rainbow() {
        let cfg = cli_config(&["--color", "blue", "--flicker"]);
        assert!(cfg.flicker);
        assert_eq!(cfg.color, ColorMode::Rainbow);
    }

    #[test]
    fn gui_short_circuits_and_warns_about_flicker() {
        let p = plan(&["--gui", "--flicker"]);
        assert!(matches!(p.mode, Launch::Gui));
        assert_eq!(p.notices.len(), 1);
    }

    #[test]
    fn flicker_warning_does_not_depend_on_flag_order() {
        for argv in [["--gui", "--flicker"], ["--flicker", "--gui"]] {
            let p = plan(&argv);
            assert!(matches!(p.mode, Launch::Gui));
            assert_eq!(p.notices, ["Warning: --flicker is not supported in GUI mode. Ignoring."]);
        }
    }

    #[test]
    fn last_mode_flag_wins() {
        assert!(matches!(plan(&["--gui", "--cli"]).mode, Launch::Cli(_)));
        assert!(matches!(plan(&["--cli", "--gui"]).mode, Launch::Gui));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert!(Args::try_parse_from(["pipes", "--speed", "fast"]).is_err());
        assert!(Args::try_parse_from(["pipes", "--hm", "-3"]).is_err());
    }
}
