use crate::application::{LifeEngine, ViewTransform};
use crate::error::EngineError;
use macroquad::prelude::*;

const WHEEL_ZOOM_STEP: f32 = 1.1;

/// Handle zoom with the mouse wheel, scaling about the cursor
pub fn handle_zoom(view: &mut ViewTransform) {
    let wheel = mouse_wheel().1;
    if wheel == 0.0 {
        return;
    }
    let (mx, my) = mouse_position();
    if wheel > 0.0 {
        view.zoom(mx, my, WHEEL_ZOOM_STEP);
    } else {
        view.zoom(mx, my, 1.0 / WHEEL_ZOOM_STEP);
    }
}

/// Tracks the previous cursor position of an in-progress pan drag
#[derive(Default)]
pub struct PanDrag {
    last: Option<(f32, f32)>,
}

/// Handle pan with middle or right mouse button drag.
/// Dragging moves the content with the cursor.
pub fn handle_pan(view: &mut ViewTransform, drag: &mut PanDrag) {
    let pos = mouse_position();
    if is_mouse_button_down(MouseButton::Middle) || is_mouse_button_down(MouseButton::Right) {
        if let Some((lx, ly)) = drag.last {
            view.pan(lx - pos.0, ly - pos.1);
        }
        drag.last = Some(pos);
    } else {
        drag.last = None;
    }
}

/// Toggle the cell under the cursor on left click.
/// Clicks on the letterbox outside the content are ignored.
pub fn handle_cell_toggle(
    engine: &mut LifeEngine,
    view: &ViewTransform,
) -> Result<(), EngineError> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return Ok(());
    }
    let (mx, my) = mouse_position();
    let (gx, gy) = view.to_grid(mx, my);
    let (width, height) = engine.dimensions()?;
    if gx < 0.0 || gy < 0.0 || gx >= width as f32 || gy >= height as f32 {
        return Ok(());
    }
    engine.toggle_cell(gx as i32, gy as i32)
}
