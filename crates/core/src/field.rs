//! Field module - the game state machine
//!
//! The field owns the grid, the current figure, the lookahead queue and the
//! descent timer. All mutation happens synchronously inside the inbound
//! operations; notifications are queued (see [`crate::events`]).
//!
//! # Landing
//!
//! When the current figure cannot move down:
//!
//! 1. If it is still at its spawn anchor, or any of its cells is above the
//!    field, the game is over: the timer stops, `TopRowFilled` is emitted and
//!    nothing is merged.
//! 2. Otherwise its cells are merged into the grid, the next figure comes off
//!    the queue, full rows are removed (`RowFilled`), then `NextFigureChanged`
//!    and `Changed` are emitted.

use std::collections::VecDeque;

use log::{debug, info};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::{ConfigError, GameConfig};
use crate::events::{FieldEvent, FieldObserver};
use crate::figure::Figure;
use crate::grid::Grid;
use crate::rng::FigureGenerator;
use crate::snapshot::FieldSnapshot;
use crate::timer::DescentTimer;
use crate::types::{Action, Direction};

/// Lifecycle of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    /// Timer stopped, input ignored
    Paused,
    /// Timer running, input accepted
    Playing,
    /// A figure could not enter the field. Terminal until `restart`.
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Field {
    config: GameConfig,
    grid: Grid,
    /// Upcoming figures; new ones enter at the front, the back is played next.
    queue: VecDeque<Figure>,
    current: Figure,
    generator: FigureGenerator,
    timer: DescentTimer,
    status: GameStatus,
    events: VecDeque<FieldEvent>,
}

impl Field {
    /// Build a paused field with an empty grid
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, Grid::new(config.size())))
    }

    /// Build a paused field on top of an existing grid
    pub fn with_grid(config: &GameConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.size() != config.size() {
            return Err(ConfigError::Invalid {
                field: "grid",
                reason: format!(
                    "grid is {}x{}, config expects {}x{}",
                    grid.width(),
                    grid.height(),
                    config.width,
                    config.height
                ),
            });
        }
        Ok(Self::build(config, grid))
    }

    /// Default-sized field with the given seed
    pub fn with_seed(seed: u32) -> Self {
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        };
        Self::build(&config, Grid::new(config.size()))
    }

    fn build(config: &GameConfig, grid: Grid) -> Self {
        let mut generator =
            FigureGenerator::new(Catalog::standard(), config.size(), config.seed_or_default());
        let mut queue: VecDeque<Figure> = (0..config.displayed_figures)
            .map(|_| generator.generate())
            .collect();
        let current = Self::advance_queue(&mut queue, &mut generator);

        Self {
            config: config.clone(),
            grid,
            queue,
            current,
            generator,
            timer: DescentTimer::new(config.start_speed, config.max_speed),
            status: GameStatus::Paused,
            events: VecDeque::new(),
        }
    }

    /// Push a fresh figure to the front, take the next one off the back
    fn advance_queue(queue: &mut VecDeque<Figure>, generator: &mut FigureGenerator) -> Figure {
        queue.push_front(generator.generate());
        queue.pop_back().unwrap_or_else(|| generator.generate())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.generator.catalog()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_figure(&self) -> &Figure {
        &self.current
    }

    /// The figure that becomes current on the next landing
    pub fn next_figure(&self) -> Option<&Figure> {
        self.queue.back()
    }

    /// Upcoming figures in play order
    pub fn upcoming(&self) -> impl Iterator<Item = &Figure> {
        self.queue.iter().rev()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn timer(&self) -> &DescentTimer {
        &self.timer
    }

    pub fn start_descent(&mut self) {
        if self.status != GameStatus::Paused {
            return;
        }
        self.status = GameStatus::Playing;
        self.timer.start();
        info!("descent started at speed {}", self.timer.speed());
    }

    pub fn pause_descent(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.status = GameStatus::Paused;
        self.timer.pause();
        info!("descent paused");
    }

    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Playing => self.pause_descent(),
            GameStatus::Paused => self.start_descent(),
            GameStatus::GameOver => {}
        }
    }

    /// Start over on an empty grid with a fresh lookahead. The field comes back
    /// paused at the start speed.
    pub fn restart(&mut self) {
        self.grid = Grid::new(self.config.size());
        self.queue = (0..self.config.displayed_figures)
            .map(|_| self.generator.generate())
            .collect();
        self.current = Self::advance_queue(&mut self.queue, &mut self.generator);
        self.timer.reset();
        self.timer.pause();
        self.status = GameStatus::Paused;
        self.events.clear();
        info!("field restarted");

        if let Some(next) = self.queue.back() {
            self.events.push_back(FieldEvent::NextFigureChanged(next.clone()));
        }
        self.emit_changed();
    }

    /// Advance the descent timer; every fire moves the figure down once
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.status != GameStatus::Playing {
            return;
        }
        let fires = self.timer.advance(elapsed_ms);
        for _ in 0..fires {
            if self.status != GameStatus::Playing {
                break;
            }
            self.move_figure(Direction::Down);
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action.direction() {
            Some(direction) => self.move_figure(direction),
            None => self.rotate_figure(),
        }
    }

    /// Move the current figure one cell. A blocked downward move lands it;
    /// other blocked moves do nothing. `Up` is accepted and ignored.
    pub fn move_figure(&mut self, direction: Direction) {
        if self.status != GameStatus::Playing || direction == Direction::Up {
            return;
        }

        if self.current.can_move(direction, &self.grid) {
            self.current.move_by(direction);
            self.emit_changed();
            return;
        }

        if direction == Direction::Down {
            self.land();
        }
    }

    pub fn rotate_figure(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        if self.current.can_rotate(&self.grid) {
            self.current.rotate();
            self.emit_changed();
        }
    }

    fn land(&mut self) {
        let sticks_out = self.current.occupied_cells().iter().any(|c| c.y() < 0);
        if self.current.is_at_spawn() || sticks_out {
            self.game_over();
            return;
        }

        let merged = self.grid.merge(self.current.occupied_cells().iter());
        debug!(
            "{:?} landed at ({}, {}), {} cells merged",
            self.current.kind(),
            self.current.x(),
            self.current.y(),
            merged
        );

        self.current = Self::advance_queue(&mut self.queue, &mut self.generator);
        debug!("spawned {:?}", self.current.kind());

        let cleared = self.grid.clear_filled_rows();
        if cleared > 0 {
            debug!("cleared {} row(s)", cleared);
            self.events.push_back(FieldEvent::RowFilled(cleared));
        }

        if let Some(next) = self.queue.back() {
            self.events.push_back(FieldEvent::NextFigureChanged(next.clone()));
        }
        self.emit_changed();
    }

    fn game_over(&mut self) {
        self.timer.pause();
        self.status = GameStatus::GameOver;
        info!(
            "game over: {:?} stuck at ({}, {})",
            self.current.kind(),
            self.current.x(),
            self.current.y()
        );
        self.events.push_back(FieldEvent::TopRowFilled);
    }

    fn emit_changed(&mut self) {
        let snapshot = self.snapshot();
        self.events.push_back(FieldEvent::Changed(snapshot));
    }

    pub fn snapshot_into(&self, out: &mut FieldSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        self.grid.write_content(&mut out.cells);
        out.figure = Some(self.current.clone());
        out.next = self.queue.back().cloned();
        out.status = self.status;
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        let mut s = FieldSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Take queued notifications in emission order
    pub fn drain_events(&mut self) -> impl Iterator<Item = FieldEvent> + '_ {
        self.events.drain(..)
    }

    /// Hand queued notifications to `observer`
    pub fn dispatch<O: FieldObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.events.drain(..) {
            event.notify(observer);
        }
    }
}
