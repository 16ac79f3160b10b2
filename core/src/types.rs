use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait AsIndex {
    type Output;
    fn as_index(self) -> Self::Output;
}

impl AsIndex for Coord2 {
    type Output = [usize; 2];

    fn as_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Dimensions of a grid as `(rows, cols)`.
pub(crate) fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (rows.try_into().unwrap(), cols.try_into().unwrap())
}

const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// All 8-connected neighbors of `center` that lie inside a `size` grid.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.iter().filter_map(move |&(dr, dc)| {
        let row = i16::from(center.0) + dr;
        let col = i16::from(center.1) + dc;
        let in_bounds = (0..i16::from(size.0)).contains(&row) && (0..i16::from(size.1)).contains(&col);
        in_bounds.then(|| (row as Coord, col as Coord))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(center: Coord2, size: Coord2) -> Vec<Coord2> {
        neighbors(center, size).collect()
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let found = collect((0, 0), (8, 8));
        assert_eq!(found, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(collect((0, 3), (8, 8)).len(), 5);
        assert_eq!(collect((4, 7), (8, 8)).len(), 5);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let found = collect((4, 4), (8, 8));
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(4, 4)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(collect((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn mult_covers_the_largest_board() {
        assert_eq!(mult(255, 255), 65025);
        assert_eq!(mult(16, 30), 480);
    }
}
