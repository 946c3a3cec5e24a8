#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub light_chance: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, light_chance: f64) -> Self {
        Self { size, light_chance }
    }

    pub fn new((rows, cols): Coord2, light_chance: f64) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(GameError::InvalidSize(rows, cols));
        }
        if !(0.0..=1.0).contains(&light_chance) {
            return Err(GameError::InvalidChance(light_chance));
        }
        Ok(Self::new_unchecked((rows, cols), light_chance))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((3, 3), 0.5)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    lights: Array2<bool>,
    lit_count: CellCount,
}

impl Board {
    /// Board of the given size with every light off.
    pub fn dark(size: Coord2) -> Self {
        Self {
            lights: Array2::default(size.to_nd_index()),
            lit_count: 0,
        }
    }

    pub fn from_light_mask(lights: Array2<bool>) -> Self {
        let lit_count = lights
            .iter()
            .filter(|&&is_lit| is_lit)
            .count()
            .try_into()
            .unwrap();
        Self { lights, lit_count }
    }

    /// Board with exactly the listed cells lit. Positions outside the board
    /// are skipped, the same policy toggling uses.
    pub fn from_lit_coords(size: Coord2, lit: &[Coord2]) -> Self {
        let mut lights: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in lit {
            if coords.0 < size.0 && coords.1 < size.1 {
                lights[coords.to_nd_index()] = true;
            }
        }

        Self::from_light_mask(lights)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.lights.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.lights.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.lit_count
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// True iff every light is off, the winning configuration.
    pub fn is_dark(&self) -> bool {
        self.lit_count == 0
    }

    /// Returns a new board with the light at `coords` and its four orthogonal
    /// neighbors flipped. Positions falling outside the board are skipped; an
    /// origin whose whole cross is out of bounds yields an unchanged copy.
    ///
    /// The receiver is never mutated, so existing snapshots stay valid.
    #[must_use]
    pub fn toggled_around(&self, coords: Coord2) -> Self {
        let mut next = self.clone();

        for pos in self.lights.iter_flip_cross(coords) {
            let cell = &mut next.lights[pos.to_nd_index()];
            *cell = !*cell;
            if *cell {
                next.lit_count += 1;
            } else {
                next.lit_count -= 1;
            }
        }

        next
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.lights[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    NoChange,
    Flipped,
    Won,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            NoChange => false,
            Flipped => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn default_config_is_three_by_three_half_chance() {
        let config = GameConfig::default();

        assert_eq!(config.size, (3, 3));
        assert_eq!(config.light_chance, 0.5);
        assert_eq!(config.total_cells(), 9);
    }

    #[test]
    fn zero_rows_is_an_invalid_size() {
        assert_eq!(
            GameConfig::new((0, 3), 0.5),
            Err(GameError::InvalidSize(0, 3))
        );
    }

    #[test]
    fn out_of_range_chance_is_invalid() {
        assert_eq!(
            GameConfig::new((3, 3), 1.5),
            Err(GameError::InvalidChance(1.5))
        );
        assert!(matches!(
            GameConfig::new((3, 3), f64::NAN),
            Err(GameError::InvalidChance(_))
        ));
    }

    #[test]
    fn dark_board_counts_no_lights() {
        let board = Board::dark((3, 4));

        assert_eq!(board.size(), (3, 4));
        assert_eq!(board.total_cells(), 12);
        assert_eq!(board.lit_count(), 0);
        assert!(board.is_dark());
    }

    #[test]
    fn lit_coords_outside_the_board_are_skipped() {
        let board = Board::from_lit_coords((2, 2), &[(0, 0), (5, 5)]);

        assert_eq!(board.lit_count(), 1);
        assert!(board.is_lit((0, 0)));
        assert!(!board.is_dark());
    }

    #[test]
    fn toggle_flips_only_the_inbounds_cross() {
        let board = Board::dark((3, 3));

        let toggled = board.toggled_around((1, 1));

        let expected_lit = [(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)];
        for row in 0..3 {
            for col in 0..3 {
                let should_be_lit = expected_lit.contains(&(row, col));
                assert_eq!(toggled.is_lit((row, col)), should_be_lit);
            }
        }
        assert_eq!(toggled.lit_count(), 5);
        assert!(board.is_dark());
    }

    #[test]
    fn corner_toggle_flips_exactly_three_cells() {
        let board = Board::dark((3, 3));

        let toggled = board.toggled_around((0, 0));

        let lit: Vec<Coord2> = (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .filter(|&coords| toggled.is_lit(coords))
            .collect();
        assert_eq!(lit, [(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn double_toggle_is_an_involution() {
        let board = Board::from_lit_coords((3, 3), &[(0, 2), (2, 0)]);

        let twice = board.toggled_around((1, 1)).toggled_around((1, 1));

        assert_eq!(twice, board);
    }

    #[test]
    fn toggles_commute() {
        let board = Board::from_lit_coords((3, 3), &[(0, 0), (1, 2)]);
        let coords: Vec<Coord2> = (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .collect();

        for &a in &coords {
            for &b in &coords {
                let ab = board.toggled_around(a).toggled_around(b);
                let ba = board.toggled_around(b).toggled_around(a);
                assert_eq!(ab, ba);
            }
        }
    }
}
