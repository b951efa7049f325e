use crate::config::{clamp_viewport, RunConfig, SimParams};
use crate::rng::make_rng;
use crate::sim::Simulation;
use anyhow::{bail, Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    style::ResetColor,
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io::{self, Write},
    time::Duration,
};

/// Puts the terminal into screensaver mode and undoes it on drop, including
/// when the frame loop bails out with an error.
struct TerminalSession;

impl TerminalSession {
    fn begin(out: &mut impl Write) -> io::Result<Self> {
        execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap)?;
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = terminal::disable_raw_mode();
        let _ = execute!(out, ResetColor, EnableLineWrap, cursor::Show, LeaveAlternateScreen);
    }
}

fn quit_requested() -> io::Result<bool> {
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(k) = event::read()? {
            if k.kind != KeyEventKind::Press {
                continue;
            }
            match (k.code, k.modifiers) {
                (KeyCode::Char('q'), _) | (KeyCode::Char('Q'), _) | (KeyCode::Esc, _) => {
                    return Ok(true)
                }
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => return Ok(true),
                // resizes are ignored: the viewport is fixed at startup
                _ => {}
            }
        }
    }
    Ok(false)
}

pub(crate) fn run(cfg: RunConfig) -> Result<()> {
    let (cols, rows) = terminal::size().context("could not query terminal size")?;
    if cols == 0 || rows == 0 {
        bail!("terminal reported an empty viewport ({cols}x{rows})");
    }
    let (w, h) = clamp_viewport(cols, rows);

    tracing::info!(
        w,
        h,
        pipes = cfg.pipe_count,
        delay_ms = cfg.delay.as_millis() as u64,
        color = ?cfg.color,
        flicker = cfg.flicker,
        seed = ?cfg.seed,
        "starting"
    );

    let mut sim = Simulation::new(w, h, &cfg, SimParams::default(), make_rng(cfg.seed));

    let mut out = io::stdout();
    let session = TerminalSession::begin(&mut out)?;

    loop {
        if quit_requested()? {
            break;
        }

        let report = sim.tick();
        if report.reset {
            tracing::info!(cycle = sim.cycles, tick = sim.ticks, "screen filled, starting over");
        } else if report.respawns > 0 {
            tracing::debug!(tick = sim.ticks, respawns = report.respawns, "respawned pipes");
        }

        sim.render(&mut out)?;
        std::thread::sleep(cfg.delay);
    }

    drop(session);
    tracing::info!(
        ticks = sim.ticks,
        cycles = sim.cycles,
        occupied = sim.buffer.occupied(),
        "stopped"
    );
    Ok(())
}
