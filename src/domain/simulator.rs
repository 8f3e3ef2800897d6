use super::{Cell, Grid, Transition};
use crate::error::EngineError;
use rayon::prelude::*;

/// Simulator advances the grid by one synchronous generation at a time.
/// Every cell's next state is computed from the current buffer only and
/// written into the next buffer; the buffers swap after the full pass, so
/// a failed or interrupted step never leaves a half-updated generation
/// visible.
#[derive(Debug)]
pub struct Simulator {
    grid: Grid,
    transitions: Vec<Transition>,
}

impl Simulator {
    /// Create a simulator with an all-dead grid of the given size
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let grid = Grid::new(width, height)?;
        let transitions = vec![Transition::Unchanged; width * height];
        Ok(Self { grid, transitions })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Transition tags for the generation computed by the last step.
    /// Overwritten on every step; all Unchanged before the first one.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Advance one generation (serial)
    pub fn step(&mut self) {
        let (width, height) = self.grid.dimensions();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let current = self.grid.get(x, y);
                let neighbors = self.grid.neighbor_count(x, y);
                let next = current.evolve(neighbors);
                self.grid.set_next(x, y, next);
                self.transitions[y as usize * width + x as usize] =
                    current.transition_to(next);
            }
        }
        self.grid.swap_buffers();
    }

    /// Advance one generation using rayon for large grids.
    /// Bit-identical to `step()`, rows computed in parallel.
    pub fn step_parallel(&mut self) {
        let (width, height) = self.grid.dimensions();
        let grid = &self.grid;
        let (next, transitions): (Vec<Cell>, Vec<Transition>) = (0..height as i32)
            .into_par_iter()
            .flat_map(|y| (0..width as i32).into_par_iter().map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = grid.get(x, y);
                let next = current.evolve(grid.neighbor_count(x, y));
                (next, current.transition_to(next))
            })
            .unzip();
        self.grid.store_next(next);
        self.transitions = transitions;
        self.grid.swap_buffers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(sim: &Simulator) -> Vec<(i32, i32)> {
        sim.grid()
            .iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut sim = Simulator::new(8, 8).unwrap();
        sim.step();
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut sim = Simulator::new(5, 5).unwrap();
        for x in 1..=3 {
            sim.grid_mut().set(x, 2, Cell::Alive);
        }
        sim.step();
        assert_eq!(alive_cells(&sim), vec![(2, 1), (2, 2), (2, 3)]);
        sim.step();
        assert_eq!(alive_cells(&sim), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut sim = Simulator::new(6, 6).unwrap();
        for &(x, y) in &[(2, 2), (3, 2), (2, 3), (3, 3)] {
            sim.grid_mut().set(x, y, Cell::Alive);
        }
        sim.step();
        assert_eq!(alive_cells(&sim), vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
        assert!(sim.transitions().iter().all(|&t| t == Transition::Unchanged));
    }

    #[test]
    fn test_lone_cell_dies_on_1x1_torus() {
        let mut sim = Simulator::new(1, 1).unwrap();
        sim.grid_mut().set(0, 0, Cell::Alive);
        sim.step();
        assert_eq!(sim.grid().get(0, 0), Cell::Dead);
    }

    #[test]
    fn test_lone_cell_dies_on_1xn_torus() {
        let mut sim = Simulator::new(1, 3).unwrap();
        sim.grid_mut().set(0, 1, Cell::Alive);
        sim.step();
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_transitions_tag_births_and_deaths() {
        // Blinker: ends of the bar die, cells above/below center are born
        let mut sim = Simulator::new(5, 5).unwrap();
        for x in 1..=3 {
            sim.grid_mut().set(x, 2, Cell::Alive);
        }
        sim.step();
        let (width, _) = sim.grid().dimensions();
        let at = |x: usize, y: usize| sim.transitions()[y * width + x];
        assert_eq!(at(2, 1), Transition::Born);
        assert_eq!(at(2, 3), Transition::Born);
        assert_eq!(at(1, 2), Transition::Died);
        assert_eq!(at(3, 2), Transition::Died);
        assert_eq!(at(2, 2), Transition::Unchanged);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = rand::rng();
        let mut serial = Simulator::new(32, 17).unwrap();
        serial.grid_mut().randomize(&mut rng);

        let mut parallel = Simulator::new(32, 17).unwrap();
        for (x, y, c) in serial.grid().iter_cells().collect::<Vec<_>>() {
            parallel.grid_mut().set(x, y, c);
        }

        for _ in 0..5 {
            serial.step();
            parallel.step_parallel();
        }
        assert_eq!(
            serial.grid().iter_cells().collect::<Vec<_>>(),
            parallel.grid().iter_cells().collect::<Vec<_>>()
        );
        assert_eq!(serial.transitions(), parallel.transitions());
    }
}
