//! Leptos Reorder Utilities
//!
//! Drag/touch list reordering for Leptos. Native pointer drags activate
//! immediately; touch uses a long press. Transition logic lives in the
//! pure `machine` module, this module wires it to browser events.

pub mod machine;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub use machine::{Action, DragPhase};

/// Reorder controller state. Copy, so handler factories can capture it.
#[derive(Clone, Copy)]
pub struct ReorderSignals {
    pub phase_read: ReadSignal<DragPhase>,
    pub phase_write: WriteSignal<DragPhase>,
    /// Pending long-press timer; dropping the handle cancels it.
    press_timer: StoredValue<Option<Timeout>, LocalStorage>,
    /// Called with (from, to) flattened indices for each committed move.
    on_move: Callback<(usize, usize)>,
}

pub fn create_reorder_signals(on_move: Callback<(usize, usize)>) -> ReorderSignals {
    let (phase_read, phase_write) = signal(DragPhase::Idle);
    ReorderSignals {
        phase_read,
        phase_write,
        press_timer: StoredValue::new_local(None),
        on_move,
    }
}

/// Flattened index of the item being dragged, if any. Reactive.
pub fn dragging_index(sig: &ReorderSignals) -> Option<usize> {
    match sig.phase_read.get() {
        DragPhase::Dragging { index } => Some(index),
        _ => None,
    }
}

/// Run one transition and apply the actions it requests.
fn transition(sig: ReorderSignals, step: impl FnOnce(DragPhase) -> (DragPhase, Vec<Action>)) {
    let (next, actions) = step(sig.phase_read.get_untracked());
    sig.phase_write.set(next);
    apply_actions(sig, actions);
}

fn apply_actions(sig: ReorderSignals, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::ArmPressTimer => {
                let timer = Timeout::new(machine::LONG_PRESS_MS, move || {
                    sig.press_timer.set_value(None);
                    transition(sig, machine::press_timer_fired);
                });
                sig.press_timer.set_value(Some(timer));
            }
            Action::ClearPressTimer => {
                // Drop cancels the underlying setTimeout.
                sig.press_timer.set_value(None);
            }
            Action::Haptic(ms) => haptic(ms),
            Action::Move { from, to } => sig.on_move.run((from, to)),
        }
    }
}

/// Create dragstart handler for the item at flattened index `index`.
pub fn make_on_drag_start(
    sig: ReorderSignals,
    index: usize,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        transition(sig, |phase| machine::drag_start(phase, index));
    }
}

/// Create dragover handler for the item at flattened index `index`.
/// Commits the move live; the drop itself carries no extra meaning.
pub fn make_on_drag_over(
    sig: ReorderSignals,
    index: usize,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        transition(sig, |phase| machine::drag_over(phase, index));
    }
}

/// Create dragend handler.
pub fn make_on_drag_end(sig: ReorderSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        transition(sig, machine::gesture_end);
    }
}

/// Create touchstart handler for the item at flattened index `index`.
/// Arms the long-press timer.
pub fn make_on_touch_start(
    sig: ReorderSignals,
    index: usize,
) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| {
        transition(sig, |phase| machine::touch_start(phase, index));
    }
}

/// Create touchmove handler. `resolve` maps a row's `data-id` value back
/// to its current flattened index; a hit-test miss is ignored.
pub fn make_on_touch_move(
    sig: ReorderSignals,
    resolve: Callback<String, Option<usize>>,
) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        ev.prevent_default();
        let phase = sig.phase_read.get_untracked();
        let target = if matches!(phase, DragPhase::Dragging { .. }) {
            ev.target_touches()
                .get(0)
                .and_then(|touch| hit_test_item_id(touch.client_x(), touch.client_y()))
                .and_then(|id| resolve.run(id))
        } else {
            None
        };
        transition(sig, |phase| machine::touch_move(phase, target));
    }
}

/// Create touchend handler.
pub fn make_on_touch_end(sig: ReorderSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| {
        transition(sig, machine::gesture_end);
    }
}

/// Find the `data-id` of the list row under the given client coordinates.
pub fn hit_test_item_id(x: i32, y: i32) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc.element_from_point(x as f32, y as f32)?;
    let row = el.closest("[data-id]").ok().flatten()?;
    row.get_attribute("data-id")
}

/// Vibrate for `duration_ms`, silently skipped where unsupported.
pub fn haptic(duration_ms: u32) {
    if let Some(win) = web_sys::window() {
        let nav = win.navigator();
        let has_vibrate =
            js_sys::Reflect::has(nav.as_ref(), &wasm_bindgen::JsValue::from_str("vibrate"))
                .unwrap_or(false);
        if has_vibrate {
            let _ = nav.vibrate_with_duration(duration_ms);
        }
    }
}
