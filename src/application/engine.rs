use crate::domain::{Pattern, Simulator};
use crate::error::EngineError;
use crate::rendering::{self, PixelBuffer, RenderSettings};
use rand::Rng;
use tracing::{debug, info};

/// LifeEngine is the command surface the surrounding application drives:
/// create/recreate, iterate, render, destroy, plus the generation counter.
///
/// The engine is single-threaded and takes no internal locks; the caller
/// serializes iterate/render/destroy against each other. Destroy is
/// idempotent, and any call after it fails with `NotInitialized` instead
/// of touching freed state.
#[derive(Debug)]
pub struct LifeEngine {
    simulator: Option<Simulator>,
    generation: u64,
}

impl LifeEngine {
    /// Create an engine with an all-dead grid of the given size
    pub fn create(width: usize, height: usize) -> Result<Self, EngineError> {
        info!(width, height, "creating life engine");
        Ok(Self {
            simulator: Some(Simulator::new(width, height)?),
            generation: 0,
        })
    }

    /// Replace the grid with a fresh one and reset the generation counter.
    /// On invalid dimensions the running engine is left untouched.
    pub fn recreate(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        info!(width, height, "recreating life engine");
        self.simulator = Some(Simulator::new(width, height)?);
        self.generation = 0;
        Ok(())
    }

    /// Release all simulation state. Calling twice is a no-op.
    pub fn destroy(&mut self) {
        info!("destroying life engine");
        self.simulator = None;
        self.generation = 0;
    }

    /// Generations completed since create/recreate
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Grid dimensions, if the engine is live
    pub fn dimensions(&self) -> Result<(usize, usize), EngineError> {
        Ok(self.simulator()?.grid().dimensions())
    }

    pub fn is_alive(&self, x: i32, y: i32) -> Result<bool, EngineError> {
        Ok(self.simulator()?.grid().get(x, y).is_alive())
    }

    /// Advance one generation, returning the new counter value
    pub fn iterate(&mut self) -> Result<u64, EngineError> {
        self.simulator_mut()?.step();
        self.generation += 1;
        debug!(generation = self.generation, "iterated");
        Ok(self.generation)
    }

    /// Advance one generation with row-parallel evaluation.
    /// Identical results to `iterate`, worth it on large grids.
    pub fn iterate_parallel(&mut self) -> Result<u64, EngineError> {
        self.simulator_mut()?.step_parallel();
        self.generation += 1;
        debug!(generation = self.generation, "iterated (parallel)");
        Ok(self.generation)
    }

    /// Encode the current generation into `frame`
    pub fn render(
        &self,
        frame: &mut PixelBuffer,
        settings: RenderSettings,
    ) -> Result<(), EngineError> {
        rendering::render(self.simulator()?, settings, frame)
    }

    /// Flip a single cell on the current buffer, toroidal wrap.
    /// An edit, not a generation: the counter is untouched.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        let grid = self.simulator_mut()?.grid_mut();
        let cell = grid.get(x, y).toggle();
        grid.set(x, y, cell);
        debug!(x, y, alive = cell.is_alive(), "toggled cell");
        Ok(())
    }

    /// Stamp a preset pattern with its origin at (x, y), toroidal wrap.
    /// An edit like `toggle_cell`: the generation counter is untouched.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: i32, y: i32) -> Result<(), EngineError> {
        pattern.place_on(self.simulator_mut()?.grid_mut(), x, y);
        debug!(pattern = pattern.name, description = pattern.description, "placed pattern");
        Ok(())
    }

    /// Reseed the grid at random (about one cell in three alive) and
    /// restart the generation counter
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.simulator_mut()?.grid_mut().randomize(rng);
        self.generation = 0;
        Ok(())
    }

    fn simulator(&self) -> Result<&Simulator, EngineError> {
        self.simulator.as_ref().ok_or(EngineError::NotInitialized)
    }

    fn simulator_mut(&mut self) -> Result<&mut Simulator, EngineError> {
        self.simulator.as_mut().ok_or(EngineError::NotInitialized)
    }
}
