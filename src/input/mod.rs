use macroquad::prelude::*;
use ::rand::Rng;

use crate::application::{Simulation, Viewport};

/// Zoom step per key press or wheel notch
const ZOOM_STEP: f64 = 1.2;
/// Cells panned per frame while an arrow key is held
const PAN_CELLS_PER_FRAME: f64 = 1.0;

/// Pointer position of the previous frame while a middle-button drag is active
#[derive(Default)]
pub struct DragState {
    last: Option<(f32, f32)>,
}

/// Handle zoom with mouse wheel and +/- keys
pub fn handle_zoom(viewport: &mut Viewport, area: (f32, f32)) {
    let wheel = mouse_wheel().1;
    let zoom_in = wheel > 0.0 || is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd);
    let zoom_out = wheel < 0.0 || is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract);

    let (w, h) = (area.0 as f64, area.1 as f64);
    if zoom_in {
        viewport.zoom(ZOOM_STEP, w, h);
    } else if zoom_out {
        viewport.zoom(1.0 / ZOOM_STEP, w, h);
    }
}

/// Handle pan with arrow/WASD keys and middle mouse button drag
pub fn handle_pan(viewport: &mut Viewport, drag: &mut DragState, mouse_pos: (f32, f32)) {
    let held = |keys: [KeyCode; 2]| keys.iter().any(|&k| is_key_down(k));

    let mut dx = 0.0;
    let mut dy = 0.0;
    if held([KeyCode::Left, KeyCode::A]) { dx -= PAN_CELLS_PER_FRAME; }
    if held([KeyCode::Right, KeyCode::D]) { dx += PAN_CELLS_PER_FRAME; }
    if held([KeyCode::Up, KeyCode::W]) { dy -= PAN_CELLS_PER_FRAME; }
    if held([KeyCode::Down, KeyCode::S]) { dy += PAN_CELLS_PER_FRAME; }
    viewport.pan(dx, dy);

    if is_mouse_button_down(MouseButton::Middle) {
        if let Some(last) = drag.last {
            viewport.pan_pixels((mouse_pos.0 - last.0) as f64, (mouse_pos.1 - last.1) as f64);
        }
        drag.last = Some(mouse_pos);
    } else {
        drag.last = None;
    }
}

/// What the loop should do after processing this frame's keys
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    Continue,
    Quit,
}

/// Process keyboard input functionally
pub fn process_keyboard_input<R: Rng + ?Sized>(
    state: Simulation,
    area: (f32, f32),
    rng: &mut R,
) -> (Simulation, Control) {
    if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
        return (state, Control::Quit);
    }

    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::RightBracket, |s| s.adjust_speed(1.0)),
        (KeyCode::LeftBracket, |s| s.adjust_speed(-1.0)),
    ];

    let mut state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::R) {
        state = state.restart(rng);
    }
    if is_key_pressed(KeyCode::N) && !state.is_running {
        state.step();
    }

    let (w, h) = (area.0 as f64, area.1 as f64);
    if is_key_pressed(KeyCode::C) {
        state.center_view(w, h);
    }
    if is_key_pressed(KeyCode::F) {
        state.fit_view(w, h);
    }

    (state, Control::Continue)
}
