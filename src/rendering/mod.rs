//! Pixel encoding: turns the simulation grid into an RGBA buffer with one
//! pixel per cell. Any upscaling or letterboxing happens later, when the
//! caller blits the buffer through a [`ViewTransform`](crate::ViewTransform).

use crate::domain::{Simulator, Transition};
use crate::error::EngineError;
use bitflags::bitflags;

bitflags! {
    /// Render option flags passed to every render call
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    pub struct RenderSettings: u32 {
        /// Highlight cells that were born or died in the last generation
        const SHOW_DEATHBIRTH = 1 << 0;
    }
}

/// RGBA color, 4 bytes per pixel
pub type Rgba = [u8; 4];

/// Android-green alive cells on black
pub const COLOR_ALIVE: Rgba = [0xA4, 0xC6, 0x39, 0xFF];
/// Freshly born cells render at half the alive intensity
pub const COLOR_BORN: Rgba = [0xA4 >> 1, 0xC6 >> 1, 0x39 >> 1, 0xFF];
pub const COLOR_DEAD: Rgba = [0x00, 0x00, 0x00, 0xFF];
/// Freshly died cells leave a dim red afterglow
pub const COLOR_DIED: Rgba = [0x63, 0x1C, 0x1C, 0xFF];

/// A caller-owned RGBA pixel buffer sized to the grid
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate an opaque-black buffer of width x height pixels
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes: COLOR_DEAD.repeat(width * height),
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Color of the pixel at (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let i = (y * self.width + x) * 4;
        self.bytes[i..i + 4].try_into().unwrap()
    }
}

/// Encode the current generation into `frame`.
///
/// Overwrites every pixel; deterministic for a given grid, transition set
/// and settings. Fails with `SizeMismatch` when the buffer does not match
/// the grid dimensions, leaving the buffer contents untouched.
pub fn render(
    simulator: &Simulator,
    settings: RenderSettings,
    frame: &mut PixelBuffer,
) -> Result<(), EngineError> {
    let expected = simulator.grid().dimensions();
    let actual = frame.dimensions();
    if expected != actual {
        return Err(EngineError::SizeMismatch { expected, actual });
    }

    let highlight = settings.contains(RenderSettings::SHOW_DEATHBIRTH);
    let transitions = simulator.transitions();

    for (i, (_, _, cell)) in simulator.grid().iter_cells().enumerate() {
        let color = match (cell.is_alive(), transitions[i]) {
            (true, Transition::Born) if highlight => COLOR_BORN,
            (false, Transition::Died) if highlight => COLOR_DIED,
            (true, _) => COLOR_ALIVE,
            (false, _) => COLOR_DEAD,
        };
        frame.bytes[i * 4..i * 4 + 4].copy_from_slice(&color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Simulator};

    #[test]
    fn test_size_mismatch_is_rejected() {
        let sim = Simulator::new(4, 4).unwrap();
        let mut frame = PixelBuffer::new(4, 5);
        assert_eq!(
            render(&sim, RenderSettings::empty(), &mut frame).unwrap_err(),
            EngineError::SizeMismatch { expected: (4, 4), actual: (4, 5) }
        );
    }

    #[test]
    fn test_alive_and_dead_colors() {
        let mut sim = Simulator::new(3, 3).unwrap();
        sim.grid_mut().set(1, 1, Cell::Alive);
        let mut frame = PixelBuffer::new(3, 3);
        render(&sim, RenderSettings::empty(), &mut frame).unwrap();
        assert_eq!(frame.pixel(1, 1), COLOR_ALIVE);
        assert_eq!(frame.pixel(0, 0), COLOR_DEAD);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut sim = Simulator::new(6, 6).unwrap();
        sim.grid_mut().set(2, 2, Cell::Alive);
        sim.grid_mut().set(3, 2, Cell::Alive);
        sim.grid_mut().set(2, 3, Cell::Alive);
        sim.step();

        let mut first = PixelBuffer::new(6, 6);
        let mut second = PixelBuffer::new(6, 6);
        render(&sim, RenderSettings::SHOW_DEATHBIRTH, &mut first).unwrap();
        render(&sim, RenderSettings::SHOW_DEATHBIRTH, &mut second).unwrap();
        assert_eq!(first.bytes(), second.bytes());
    }

    #[test]
    fn test_deathbirth_highlighting() {
        // Blinker flip: (2,1) is born, (1,2) dies, (2,2) survives
        let mut sim = Simulator::new(5, 5).unwrap();
        for x in 1..=3 {
            sim.grid_mut().set(x, 2, Cell::Alive);
        }
        sim.step();

        let mut frame = PixelBuffer::new(5, 5);
        render(&sim, RenderSettings::SHOW_DEATHBIRTH, &mut frame).unwrap();
        assert_eq!(frame.pixel(2, 1), COLOR_BORN);
        assert_eq!(frame.pixel(1, 2), COLOR_DIED);
        assert_eq!(frame.pixel(2, 2), COLOR_ALIVE);

        // Flag off: born renders as alive, died as dead
        render(&sim, RenderSettings::empty(), &mut frame).unwrap();
        assert_eq!(frame.pixel(2, 1), COLOR_ALIVE);
        assert_eq!(frame.pixel(1, 2), COLOR_DEAD);
    }
}
