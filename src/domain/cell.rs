/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Toggle the cell state (used for tap editing)
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Classify the change from `self` to `next` for one generation step
    pub const fn transition_to(self, next: Cell) -> Transition {
        match (self, next) {
            (Cell::Dead, Cell::Alive) => Transition::Born,
            (Cell::Alive, Cell::Dead) => Transition::Died,
            _ => Transition::Unchanged,
        }
    }
}

/// Per-cell classification of what happened in the generation just
/// computed. Valid only until the next step overwrites it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Transition {
    #[default]
    Unchanged,
    Born,
    Died,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Alive.evolve(4), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(8), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_transition_classification() {
        assert_eq!(Cell::Dead.transition_to(Cell::Alive), Transition::Born);
        assert_eq!(Cell::Alive.transition_to(Cell::Dead), Transition::Died);
        assert_eq!(Cell::Alive.transition_to(Cell::Alive), Transition::Unchanged);
        assert_eq!(Cell::Dead.transition_to(Cell::Dead), Transition::Unchanged);
    }
}
