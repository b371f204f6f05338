//! Paced terminal output for sweeps and episodes.

use crate::board::board;
use crossterm::{cursor, queue, terminal};
use forest_mdp::{EpisodeReport, Observer, StepRecord, SweepMetrics, WorldView};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// How frames are drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Pause after every frame. Default: 500 ms.
    pub pause: Duration,
    /// Clear the screen before each frame. Default: true.
    pub clear: bool,
    /// Emit ANSI colours. Default: true.
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pause: Duration::from_millis(500),
            clear: true,
            color: true,
        }
    }
}

/// [`Observer`] that draws every sweep and move to a terminal.
///
/// Write failures are logged and otherwise ignored; a broken pipe should
/// not stop the solver.
pub struct TerminalObserver<W: Write = io::Stdout> {
    out: W,
    config: RenderConfig,
}

impl TerminalObserver<io::Stdout> {
    /// Draw to standard output.
    pub fn stdout(config: RenderConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> TerminalObserver<W> {
    /// Draw to `out`.
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self { out, config }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn frame(&mut self, view: &WorldView<'_>, footer: &[String]) {
        if let Err(error) = self.draw(view, footer) {
            warn!(%error, "failed to draw frame");
        }
        if !self.config.pause.is_zero() {
            thread::sleep(self.config.pause);
        }
    }

    fn draw(&mut self, view: &WorldView<'_>, footer: &[String]) -> io::Result<()> {
        if self.config.clear {
            queue!(
                self.out,
                cursor::MoveTo(0, 0),
                terminal::Clear(terminal::ClearType::All)
            )?;
        }
        writeln!(self.out)?;
        self.out.write_all(board(view, self.config.color).as_bytes())?;
        for line in footer {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Observer for TerminalObserver<W> {
    fn on_sweep(
        &mut self,
        view: &WorldView<'_>,
        _metrics: &SweepMetrics,
        iteration: usize,
        total: usize,
    ) {
        self.frame(view, &[format!("ITERATION: {iteration} / {total}")]);
    }

    fn on_episode_start(&mut self, view: &WorldView<'_>) {
        self.frame(view, &["GO!!!".to_string()]);
    }

    fn on_step(&mut self, view: &WorldView<'_>, record: &StepRecord, cost_so_far: f64) {
        self.frame(
            view,
            &[
                format!("ACTION: {}", record.executed),
                format!("CURRENT COST: {}", round2(cost_so_far)),
            ],
        );
    }

    fn on_episode_end(&mut self, _view: &WorldView<'_>, report: &EpisodeReport) {
        let result = writeln!(
            self.out,
            "\nGoal reached in {} moves with a total cost of {}.",
            report.moves,
            round2(report.total_cost)
        )
        .and_then(|()| self.out.flush());
        if let Err(error) = result {
            warn!(%error, "failed to write summary");
        }
    }
}

/// Round to two decimals for display.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
