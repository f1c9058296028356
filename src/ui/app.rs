use crate::config::Config;
use crate::game::rules::STARTING_TILES;
use crate::game::{Direction, GameState, GameStatus, SpawnRoll, TileSource};
use crate::ui::game::{GameIntent, GameReducer};
use crate::ui::mvi::Reducer;
use crate::ui::throttle::MoveThrottle;
use std::time::{Duration, Instant};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Game parameters the front end runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub board_size: usize,
    pub win_value: u64,
    /// Length of one tile animation; cleanup and spawn wait this long.
    pub animation: Duration,
}

impl GameSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            board_size: config.game.board_size,
            win_value: config.game.win_value,
            animation: Duration::from_millis(config.ui.animation_ms),
        }
    }
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Board changed; cleanup and spawn are now pending.
    Accepted { merges: usize, score_delta: u64 },
    /// Nothing could slide or merge that way.
    Unchanged,
    /// Arrived inside the throttle window and was dropped.
    Throttled,
    /// Previous move's cleanup + spawn hasn't run yet; dropped.
    Pending,
    /// Game already won or lost.
    Blocked,
}

pub struct App<S> {
    should_quit: bool,
    game: GameState,
    source: S,
    settings: GameSettings,
    throttle: MoveThrottle,
    /// When the running animation ends and cleanup + spawn may run.
    settle_at: Option<Instant>,
}

impl<S: TileSource> App<S> {
    /// Builds the app and starts a game at the configured size.
    pub fn new(settings: GameSettings, source: S, now: Instant) -> Self {
        let mut app = Self {
            should_quit: false,
            game: GameState::default(),
            source,
            throttle: MoveThrottle::for_animation(settings.animation),
            settings,
            settle_at: None,
        };
        app.start_game(app.settings.board_size, now);
        app
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// True between an accepted move and its cleanup + spawn.
    pub fn is_settling(&self) -> bool {
        self.settle_at.is_some()
    }

    /// Throws the current game away and starts one of `size`.
    pub fn start_game(&mut self, size: usize, now: Instant) {
        let rolls = self.starting_rolls(size);
        self.settle_at = None;
        dispatch_mvi!(self, game, GameReducer, GameIntent::Init { size, rolls });
        tracing::info!(size, "game started");
        self.after_transition(now);
    }

    /// Starts over at the current size.
    pub fn reset(&mut self, now: Instant) {
        let rolls = self.starting_rolls(self.game.board_size());
        self.settle_at = None;
        dispatch_mvi!(self, game, GameReducer, GameIntent::Reset { rolls });
        tracing::info!(size = self.game.board_size(), "game reset");
        self.after_transition(now);
    }

    pub fn on_move(&mut self, direction: Direction, now: Instant) -> MoveResult {
        if self.game.status().is_terminal() {
            return MoveResult::Blocked;
        }
        if self.settle_at.is_some() {
            tracing::trace!(%direction, "move ignored while settling");
            return MoveResult::Pending;
        }
        if !self.throttle.try_acquire(now) {
            tracing::trace!(%direction, "move throttled");
            return MoveResult::Throttled;
        }

        let score_before = self.game.score();
        let tiles_before = self.game.occupied_count();
        dispatch_mvi!(self, game, GameReducer, GameIntent::Move(direction));

        let result = if self.game.has_changed() {
            let merges = tiles_before - self.game.occupied_count();
            let score_delta = self.game.score() - score_before;
            tracing::debug!(
                %direction,
                merges,
                score_delta,
                score = self.game.score(),
                "move accepted"
            );
            MoveResult::Accepted {
                merges,
                score_delta,
            }
        } else {
            tracing::debug!(%direction, "move changed nothing");
            MoveResult::Unchanged
        };
        self.after_transition(now);
        result
    }

    /// Runs the deferred cleanup + spawn once its deadline has passed.
    pub fn on_tick(&mut self, now: Instant) {
        if matches!(self.settle_at, Some(deadline) if now >= deadline) {
            self.settle(now);
        }
    }

    fn settle(&mut self, now: Instant) {
        self.settle_at = None;
        dispatch_mvi!(self, game, GameReducer, GameIntent::CleanUp);
        let empty = self.game.empty_cells().len();
        if empty > 0 {
            let roll = self.source.roll(empty);
            dispatch_mvi!(self, game, GameReducer, GameIntent::Spawn(roll));
        }
        self.after_transition(now);
    }

    fn after_transition(&mut self, now: Instant) {
        if self.game.has_changed() {
            self.settle_at = Some(now + self.settings.animation);
            return;
        }

        let previous = self.game.status();
        let win_value = self.settings.win_value;
        dispatch_mvi!(
            self,
            game,
            GameReducer,
            GameIntent::EvaluateTerminal { win_value }
        );
        let status = self.game.status();
        if status == previous {
            return;
        }
        match status {
            GameStatus::Won => tracing::info!(
                score = self.game.score(),
                max_tile = self.game.max_tile(),
                "game won"
            ),
            GameStatus::Lost => tracing::info!(
                score = self.game.score(),
                max_tile = self.game.max_tile(),
                "game lost"
            ),
            GameStatus::Ongoing => {}
        }
    }

    fn starting_rolls(&mut self, size: usize) -> [SpawnRoll; STARTING_TILES] {
        let cells = size * size;
        [self.source.roll(cells), self.source.roll(cells.saturating_sub(1))]
    }
}
