use ndarray::Array2;

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for lit-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait FlipCrossIterExt {
    fn iter_flip_cross(&self, index: Coord2) -> FlipCrossIter;
}

impl<T> FlipCrossIterExt for Array2<T> {
    fn iter_flip_cross(&self, index: Coord2) -> FlipCrossIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        FlipCrossIter::new(index, size)
    }
}

/// One toggle flips the origin cell plus its orthogonal neighbors.
const DISPLACEMENTS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (drow, dcol) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(drow.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dcol.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct FlipCrossIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl FlipCrossIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for FlipCrossIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn cross_of(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        let grid: Array2<bool> = Array2::default(bounds.to_nd_index());
        grid.iter_flip_cross(center).collect()
    }

    #[test]
    fn interior_cross_has_five_positions() {
        assert_eq!(
            cross_of((1, 1), (3, 3)),
            [(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]
        );
    }

    #[test]
    fn corner_cross_is_clipped_to_three() {
        assert_eq!(cross_of((0, 0), (3, 3)), [(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn far_out_of_bounds_center_yields_nothing() {
        assert!(cross_of((200, 200), (3, 3)).is_empty());
    }

    #[test]
    fn center_just_past_the_edge_still_reaches_inside() {
        assert_eq!(cross_of((3, 0), (3, 3)), [(2, 0)]);
    }
}
