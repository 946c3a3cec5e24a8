use ndarray::Array2;

use super::*;

/// Generation strategy that lights each cell with an independent Bernoulli
/// trial, reproducible for a given seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let size = config.size;

        // validated configs never get here with a bad chance, but
        // new_unchecked leaves the fields open
        let chance = if config.light_chance.is_nan() {
            log::warn!("light chance is NaN, generating a dark board");
            0.0
        } else if !(0.0..=1.0).contains(&config.light_chance) {
            log::warn!(
                "light chance {} outside 0.0..=1.0, clamping",
                config.light_chance
            );
            config.light_chance.clamp(0.0, 1.0)
        } else {
            config.light_chance
        };

        // the degenerate chances need no randomness at all
        if chance <= 0.0 {
            return Board::dark(size);
        }
        if chance >= 1.0 {
            return Board::from_light_mask(Array2::from_elem(size.to_nd_index(), true));
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let lights = Array2::from_shape_simple_fn(size.to_nd_index(), || rng.random_bool(chance));

        let board = Board::from_light_mask(lights);
        log::debug!(
            "generated {}x{} board with {} of {} cells lit",
            size.0,
            size.1,
            board.lit_count(),
            board.total_cells()
        );
        board
    }
}
