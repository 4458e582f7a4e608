//! Reorder Gesture State Machine
//!
//! Pure transition logic for pointer-drag and long-press touch reordering.
//! Browser side effects (timer, vibration, the actual list move) are
//! returned as `Action`s and applied by the caller in lib.rs.

/// How long a touch must stay put before it turns into a drag.
pub const LONG_PRESS_MS: u32 = 100;
/// Vibration pulse when a long press activates a drag.
pub const HAPTIC_PRESS_MS: u32 = 100;
/// Vibration pulse for each reorder step while dragging.
pub const HAPTIC_STEP_MS: u32 = 50;
/// Vibration pulse when a drag ends.
pub const HAPTIC_END_MS: u32 = 100;

/// Current gesture phase. Indices are into the flattened display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture in progress.
    Idle,
    /// Touch is down, long-press timer pending, not yet dragging.
    ArmedTouch { index: usize, moved: bool },
    /// Actively dragging the item currently at `index`.
    Dragging { index: usize },
}

impl Default for DragPhase {
    fn default() -> Self {
        DragPhase::Idle
    }
}

/// Side effects requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Schedule the long-press timer.
    ArmPressTimer,
    /// Cancel a pending long-press timer.
    ClearPressTimer,
    /// Vibrate for the given duration, if the device can.
    Haptic(u32),
    /// Move the item at `from` to `to` in the flattened display order.
    Move { from: usize, to: usize },
}

/// Native pointer drag started on the item at `index`. Fires immediately,
/// no long-press delay.
pub fn drag_start(_phase: DragPhase, index: usize) -> (DragPhase, Vec<Action>) {
    (DragPhase::Dragging { index }, vec![])
}

/// Touch went down on the item at `index`. Arms the long-press timer.
pub fn touch_start(_phase: DragPhase, index: usize) -> (DragPhase, Vec<Action>) {
    (
        DragPhase::ArmedTouch { index, moved: false },
        vec![Action::ArmPressTimer],
    )
}

/// The long-press timer fired. Activates the drag unless the touch moved
/// first (a fired-but-stale timer must not start a drag).
pub fn press_timer_fired(phase: DragPhase) -> (DragPhase, Vec<Action>) {
    match phase {
        DragPhase::ArmedTouch { index, moved: false } => (
            DragPhase::Dragging { index },
            vec![Action::Haptic(HAPTIC_PRESS_MS)],
        ),
        other => (other, vec![]),
    }
}

/// Pointer is over the item at flattened index `target` while dragging.
/// Commits the move live and follows the dragged item to its new index.
/// A self-move is a no-op.
pub fn drag_over(phase: DragPhase, target: usize) -> (DragPhase, Vec<Action>) {
    match phase {
        DragPhase::Dragging { index } if index != target => (
            DragPhase::Dragging { index: target },
            vec![
                Action::Move { from: index, to: target },
                Action::Haptic(HAPTIC_STEP_MS),
            ],
        ),
        other => (other, vec![]),
    }
}

/// Touch moved. Before the timer fires this cancels the pending long-press
/// activation; while dragging it behaves as `drag_over` on the resolved
/// target. An unresolved target (hit-test miss) is ignored.
pub fn touch_move(phase: DragPhase, target: Option<usize>) -> (DragPhase, Vec<Action>) {
    match phase {
        DragPhase::ArmedTouch { index, .. } => (
            DragPhase::ArmedTouch { index, moved: true },
            vec![Action::ClearPressTimer],
        ),
        DragPhase::Dragging { .. } => match target {
            Some(t) => drag_over(phase, t),
            None => (phase, vec![]),
        },
        DragPhase::Idle => (phase, vec![]),
    }
}

/// Gesture ended (drag end, touch end, or touch cancel). Always clears any
/// pending timer; confirms with a pulse only if a drag was active.
pub fn gesture_end(phase: DragPhase) -> (DragPhase, Vec<Action>) {
    let mut actions = vec![Action::ClearPressTimer];
    if let DragPhase::Dragging { .. } = phase {
        actions.push(Action::Haptic(HAPTIC_END_MS));
    }
    (DragPhase::Idle, actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_start_enters_dragging_immediately() {
        let (phase, actions) = drag_start(DragPhase::Idle, 3);
        assert_eq!(phase, DragPhase::Dragging { index: 3 });
        assert!(actions.is_empty());
    }

    #[test]
    fn touch_start_arms_timer() {
        let (phase, actions) = touch_start(DragPhase::Idle, 1);
        assert_eq!(phase, DragPhase::ArmedTouch { index: 1, moved: false });
        assert_eq!(actions, vec![Action::ArmPressTimer]);
    }

    #[test]
    fn timer_fire_without_move_activates_drag_with_haptic() {
        let (phase, _) = touch_start(DragPhase::Idle, 2);
        let (phase, actions) = press_timer_fired(phase);
        assert_eq!(phase, DragPhase::Dragging { index: 2 });
        assert_eq!(actions, vec![Action::Haptic(HAPTIC_PRESS_MS)]);
    }

    #[test]
    fn touch_move_before_fire_cancels_activation() {
        let (phase, _) = touch_start(DragPhase::Idle, 2);
        let (phase, actions) = touch_move(phase, None);
        assert_eq!(phase, DragPhase::ArmedTouch { index: 2, moved: true });
        assert_eq!(actions, vec![Action::ClearPressTimer]);

        // A stale timer callback must not start a drag.
        let (phase, actions) = press_timer_fired(phase);
        assert_eq!(phase, DragPhase::ArmedTouch { index: 2, moved: true });
        assert!(actions.is_empty());
    }

    #[test]
    fn drag_over_self_is_noop() {
        let (phase, actions) = drag_over(DragPhase::Dragging { index: 4 }, 4);
        assert_eq!(phase, DragPhase::Dragging { index: 4 });
        assert!(actions.is_empty());
    }

    #[test]
    fn drag_over_commits_move_and_follows() {
        let (phase, actions) = drag_over(DragPhase::Dragging { index: 2 }, 0);
        assert_eq!(phase, DragPhase::Dragging { index: 0 });
        assert_eq!(
            actions,
            vec![
                Action::Move { from: 2, to: 0 },
                Action::Haptic(HAPTIC_STEP_MS)
            ]
        );
    }

    #[test]
    fn drag_over_while_idle_is_ignored() {
        let (phase, actions) = drag_over(DragPhase::Idle, 1);
        assert_eq!(phase, DragPhase::Idle);
        assert!(actions.is_empty());
    }

    #[test]
    fn touch_move_hit_test_miss_is_ignored() {
        let (phase, actions) = touch_move(DragPhase::Dragging { index: 1 }, None);
        assert_eq!(phase, DragPhase::Dragging { index: 1 });
        assert!(actions.is_empty());
    }

    #[test]
    fn long_press_then_move_issues_one_move_per_index_crossed() {
        // Long press on index 2, timer fires, then a stream of touch-move
        // events that all resolve to index 0: exactly one Move(2, 0).
        let (phase, _) = touch_start(DragPhase::Idle, 2);
        let (phase, _) = press_timer_fired(phase);
        assert_eq!(phase, DragPhase::Dragging { index: 2 });

        let (phase, actions) = touch_move(phase, Some(0));
        let moves: Vec<_> = actions
            .iter()
            .filter(|a| matches!(a, Action::Move { .. }))
            .collect();
        assert_eq!(moves, vec![&Action::Move { from: 2, to: 0 }]);
        assert_eq!(phase, DragPhase::Dragging { index: 0 });

        // Further pixels over the same item produce no further moves.
        let (phase, actions) = touch_move(phase, Some(0));
        assert_eq!(phase, DragPhase::Dragging { index: 0 });
        assert!(actions.is_empty());
    }

    #[test]
    fn end_while_dragging_confirms_with_haptic() {
        let (phase, actions) = gesture_end(DragPhase::Dragging { index: 0 });
        assert_eq!(phase, DragPhase::Idle);
        assert_eq!(
            actions,
            vec![Action::ClearPressTimer, Action::Haptic(HAPTIC_END_MS)]
        );
    }

    #[test]
    fn end_without_drag_only_clears_timer() {
        let (phase, actions) = gesture_end(DragPhase::ArmedTouch { index: 1, moved: false });
        assert_eq!(phase, DragPhase::Idle);
        assert_eq!(actions, vec![Action::ClearPressTimer]);

        let (phase, actions) = gesture_end(DragPhase::Idle);
        assert_eq!(phase, DragPhase::Idle);
        assert_eq!(actions, vec![Action::ClearPressTimer]);
    }
}
