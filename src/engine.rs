use crate::grid::Grid;
use crate::rule_set::RuleSet;

/// Advance the board by one generation under the default [`B3S23`] rules.
///
/// [`B3S23`]: crate::rule_set::B3S23
pub fn step(grid: &Grid) -> Grid {
    step_with(grid, RuleSet::default())
}

/// Advance the board by one generation.
///
/// Every neighbor count is taken from `grid` before any cell of the result is
/// written, so no cell ever sees a half-updated board. The input is left
/// untouched and the result always has the same dimensions.
pub fn step_with(grid: &Grid, set: RuleSet) -> Grid {
    let (rows, cols) = grid.dims();
    let mut next = Grid::dead(rows, cols);

    for row in 0..rows {
        for col in 0..cols {
            let neighbors = grid.live_neighbors(row, col);
            let cell = set.next_state(grid.get(row, col), neighbors);

            next.set(row, col, cell);
        }
    }

    next
}

#[cfg(test)]
mod test {
    use super::step;
    use super::step_with;
    use crate::grid::Grid;

    #[test]
    fn empty_boards_do_not_fault() {
        for (rows, cols) in [(0, 0), (0, 4), (4, 0)] {
            let grid = Grid::dead(rows, cols);
            let next = step(&grid);

            assert_eq!(next.dims(), (rows, cols));
        }
    }

    #[test]
    fn single_cell_always_dies() {
        let grid = Grid::from_rows(&[vec![1]]).unwrap();
        let next = step(&grid);

        assert_eq!(next.population(), 0);
    }

    #[test]
    fn seeds_rule_keeps_nothing_alive() {
        // b2s: birth on 2 neighbors, survival never
        let set = "b2s".parse().unwrap();
        let grid = Grid::from_rows(&[vec![1, 0, 1]]).unwrap();

        let next = step_with(&grid, set);

        // Both live cells die, the dead cell between them is born
        assert!(!next.is_alive(0, 0));
        assert!(next.is_alive(0, 1));
        assert!(!next.is_alive(0, 2));
    }
}
