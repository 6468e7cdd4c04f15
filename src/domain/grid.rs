use super::Cell;
use rand::Rng;

/// Grid manages the 2D cellular automaton state.
/// Dimensions are fixed for the lifetime of the grid; generations advance by
/// building a complete replacement grid from an immutable snapshot, so a
/// cell's update can never leak into its neighbors' computations.
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![Cell::Dead; columns * rows],
        }
    }

    /// Create a grid where each cell is independently alive with
    /// probability `p_alive`. The caller supplies the randomness source so
    /// seeded runs are reproducible.
    pub fn random(columns: usize, rows: usize, p_alive: f64, rng: &mut impl Rng) -> Self {
        let mut grid = Self::new(columns, rows);
        grid.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(p_alive) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        grid
    }

    /// Get grid dimensions as (columns, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.columns && y < self.rows).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.columns && y < self.rows {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live cells in the Moore neighborhood of (x, y).
    /// The grid does not wrap: offsets falling outside the grid contribute
    /// zero, so edge and corner cells simply see fewer neighbors.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1i64..=1)
            .flat_map(|dy| (-1i64..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 {
                    return None;
                }
                self.get(nx as usize, ny as usize)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance one generation. Every cell's next state is computed against
    /// this grid as a read-only snapshot and written to a fresh grid, which
    /// replaces the current one in whole; no mixed-generation state is ever
    /// observable.
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|y| (0..self.columns).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                current.evolve(self.count_live_neighbors(x, y))
            })
            .collect();

        Self {
            columns: self.columns,
            rows: self.rows,
            cells,
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |y| (0..self.columns).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with_alive(columns: usize, rows: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(columns, rows);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_neighbor_count_ignores_self() {
        let grid = grid_with_alive(3, 3, &[(1, 1)]);
        assert_eq!(grid.count_live_neighbors(1, 1), 0);
    }

    #[test]
    fn test_neighbor_count_full_interior() {
        let all: Vec<(usize, usize)> = (0..3).flat_map(|y| (0..3).map(move |x| (x, y))).collect();
        let grid = grid_with_alive(3, 3, &all);
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_neighbor_count_clamps_at_corner() {
        // All nine cells alive; the corner only sees its three in-bounds
        // neighbors because the grid does not wrap.
        let all: Vec<(usize, usize)> = (0..3).flat_map(|y| (0..3).map(move |x| (x, y))).collect();
        let grid = grid_with_alive(3, 3, &all);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(2, 2), 3);
        assert_eq!(grid.count_live_neighbors(1, 0), 5);
    }

    #[test]
    fn test_all_dead_stays_dead() {
        let mut grid = Grid::new(8, 6);
        for _ in 0..5 {
            grid = grid.step();
        }
        assert!(alive_cells(&grid).is_empty());
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = grid_with_alive(5, 5, &[(2, 2)]);
        assert!(alive_cells(&grid.step()).is_empty());
    }

    #[test]
    fn test_blinker_oscillates() {
        // Horizontal blinker flips to vertical and back, period 2.
        let horizontal = vec![(1, 2), (2, 2), (3, 2)];
        let vertical = vec![(2, 1), (2, 2), (2, 3)];

        let grid = grid_with_alive(5, 5, &horizontal);
        let after_one = grid.step();
        assert_eq!(alive_cells(&after_one), vertical);

        let after_two = after_one.step();
        assert_eq!(alive_cells(&after_two), horizontal);
    }

    #[test]
    fn test_block_is_stable() {
        let block = vec![(1, 1), (2, 1), (1, 2), (2, 2)];
        let grid = grid_with_alive(4, 4, &block);
        assert_eq!(alive_cells(&grid.step()), block);
    }

    #[test]
    fn test_step_reads_only_the_snapshot() {
        // The glider's next generation is a pure function of the previous
        // one; if any updated cell leaked into neighbor counting the result
        // would differ from the known next generation.
        let glider = vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let expected = vec![(0, 1), (2, 1), (1, 2), (2, 2), (1, 3)];

        let grid = grid_with_alive(6, 6, &glider);
        let next = grid.step();

        assert_eq!(alive_cells(&next), expected);
        // The snapshot itself is untouched.
        assert_eq!(alive_cells(&grid), glider);
    }

    #[test]
    fn test_random_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let dead = Grid::random(10, 10, 0.0, &mut rng);
        assert!(alive_cells(&dead).is_empty());

        let alive = Grid::random(10, 10, 1.0, &mut rng);
        assert_eq!(alive_cells(&alive).len(), 100);
    }

    #[test]
    fn test_random_is_seed_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = Grid::random(16, 12, 0.3, &mut a);
        let second = Grid::random(16, 12, 0.3, &mut b);
        assert_eq!(alive_cells(&first), alive_cells(&second));
    }
}
