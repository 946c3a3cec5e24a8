use serde::{Deserialize, Serialize};

use crate::*;

/// Owner of the live board: applies toggles, answers the win query, and
/// restarts games.
///
/// The machine never refuses a toggle, winning included; deciding when to
/// stop offering moves is the presentation layer's call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
}

impl Game {
    /// Start a game on a freshly generated board.
    pub fn new(config: GameConfig, generator: impl BoardGenerator) -> Self {
        let board = generator.generate(config);
        Self { config, board }
    }

    /// Validated construction straight from the collaborator's parameters.
    pub fn random(size: Coord2, light_chance: f64, seed: u64) -> Result<Self> {
        let config = GameConfig::new(size, light_chance)?;
        Ok(Self::new(config, RandomBoardGenerator::new(seed)))
    }

    /// Adopt an existing board, e.g. a fixture or a restored snapshot.
    pub fn from_board(board: Board) -> Self {
        let config = GameConfig {
            size: board.size(),
            ..GameConfig::default()
        };
        Self { config, board }
    }

    pub const fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn is_lit_at(&self, coords: Coord2) -> bool {
        self.board.is_lit(coords)
    }

    /// True iff every light is off. Pure query; the collaborator re-checks it
    /// after each toggle.
    pub fn is_won(&self) -> bool {
        self.board.is_dark()
    }

    /// Flips the cell at `coords` together with its orthogonal neighbors,
    /// replacing the held board with the new value. A cross that lies fully
    /// outside the board leaves the game untouched.
    pub fn toggle_around(&mut self, coords: Coord2) -> ToggleOutcome {
        let next = self.board.toggled_around(coords);
        if next == self.board {
            log::debug!("toggle at {:?} hit nothing on a {:?} board", coords, self.size());
            return ToggleOutcome::NoChange;
        }

        self.board = next;
        if self.board.is_dark() {
            ToggleOutcome::Won
        } else {
            ToggleOutcome::Flipped
        }
    }

    /// Restart on a fresh random board drawn from the stored config.
    pub fn reset(&mut self, seed: u64) {
        self.reset_with(RandomBoardGenerator::new(seed).generate(self.config));
    }

    /// Restart onto a specific board.
    pub fn reset_with(&mut self, board: Board) {
        self.config.size = board.size();
        self.board = board;
    }
}
