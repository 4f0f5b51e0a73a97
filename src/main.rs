//! Terminal runner (default binary).
//!
//! crossterm drives input and output; the picture is drawn through the
//! framebuffer renderer in `tui_blockfall::term`.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, LevelFilter};
use simplelog::{ConfigBuilder, WriteLogger};

use tui_blockfall::core::{Field, FieldObserver, GameConfig, GameStatus, Scoreboard};
use tui_blockfall::input::{control_for_key, handle_key_event, Control};
use tui_blockfall::term::{GameView, Hud, TerminalRenderer, ViewState, Viewport};
use tui_blockfall::types::TICK_MS;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tui-blockfall",
    version,
    about = "Falling-block puzzle in the terminal. Fill a row edge to edge to clear it.",
    long_about = "Falling-block puzzle in the terminal.\n\n\
        CONTROLS:\n  Left/Right  Move    Up  Rotate    Down  Drop one row\n  \
        P  Pause    R  Restart after game over    Q / Esc / Ctrl-C  Quit"
)]
struct Args {
    /// JSON config file; flags given on the command line take precedence.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Field width in cells.
    #[arg(long, value_name = "COLS")]
    width: Option<u16>,

    /// Field height in cells.
    #[arg(long, value_name = "ROWS")]
    height: Option<u16>,

    /// Number of upcoming figures kept in the queue.
    #[arg(long, value_name = "N")]
    next: Option<usize>,

    /// Seed for figure selection. Taken from the clock if unset.
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file. Nothing is logged otherwise.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[arg(long, default_value = "info", value_name = "LEVEL")]
    log_level: LevelFilter,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(next) = self.next {
            config.displayed_figures = next;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if config.seed.is_none() {
            config.seed = Some(clock_seed());
        }

        config.validate().context("invalid game configuration")?;
        Ok(config)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn setup_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(
        args.log_level,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    )
    .context("installing logger")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args)?;
    let config = args.game_config()?;
    info!("starting with {config:?}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Forwards each field event to both the scoreboard and the view.
struct Observers<'a> {
    scoreboard: &'a mut Scoreboard,
    view: &'a mut ViewState,
}

impl FieldObserver for Observers<'_> {
    fn on_field_changed(&mut self, snapshot: &tui_blockfall::core::FieldSnapshot) {
        self.view.on_field_changed(snapshot);
    }

    fn on_row_filled(&mut self, count: u32) {
        self.scoreboard.on_row_filled(count);
    }

    fn on_next_figure_changed(&mut self, figure: &tui_blockfall::core::Figure) {
        self.view.on_next_figure_changed(figure);
    }

    fn on_top_row_filled(&mut self) {
        self.view.on_top_row_filled();
    }
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut field = Field::new(config).context("building field")?;
    let mut scoreboard = Scoreboard::new(config.score_multiplier);
    let mut state = ViewState {
        snapshot: field.snapshot(),
        next: field.next_figure().cloned(),
        dirty: true,
    };
    field.start_descent();

    let view = GameView::new(field.catalog(), 2, 1);
    let mut frame = tui_blockfall::term::FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();
    let mut last_size = (0, 0);

    loop {
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        if size != last_size {
            term.invalidate();
            last_size = size;
            state.dirty = true;
        }
        if state.dirty {
            // Status changes (pause) do not produce events; resync it here.
            state.snapshot.status = field.status();
            let hud = Hud {
                score: scoreboard.score(),
                rows: scoreboard.rows(),
                interval_ms: field.timer().interval_ms(),
            };
            view.render_into(&state, hud, Viewport::new(size.0, size.1), &mut frame);
            term.present(&mut frame)?;
            state.dirty = false;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                    match control_for_key(key) {
                        Some(Control::Quit) => return Ok(()),
                        Some(Control::TogglePause) => {
                            field.toggle_pause();
                            state.dirty = true;
                        }
                        Some(Control::Restart) if field.status() == GameStatus::GameOver => {
                            field.restart();
                            scoreboard.reset();
                            field.start_descent();
                        }
                        Some(Control::Restart) => {}
                        None => {
                            if let Some(action) = handle_key_event(key) {
                                field.apply_action(action);
                            }
                        }
                    }
                }
                Event::Resize(..) => state.dirty = true,
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            field.tick(TICK_MS);
        }

        field.dispatch(&mut Observers {
            scoreboard: &mut scoreboard,
            view: &mut state,
        });
    }
}
