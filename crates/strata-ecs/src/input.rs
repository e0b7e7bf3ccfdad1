//! Aggregated input state resource for the current frame.

use bevy_ecs::prelude::*;
use std::collections::HashSet;

/// Action-based input state for the current frame. Written by the
/// `PreUpdate` stage (or by a headless driver), read by controllers.
///
/// Controllers query named actions rather than raw key codes, so the
/// mapping from physical keys to actions stays outside the simulation.
#[derive(Resource, Clone, Debug, Default)]
pub struct InputState {
    /// Actions that are currently held down.
    pub active_actions: HashSet<String>,
    /// Actions that were first pressed this frame.
    pub just_pressed: HashSet<String>,
    /// Actions that were released this frame.
    pub just_released: HashSet<String>,
}

impl InputState {
    /// Returns true if the named action is currently held down.
    pub fn is_active(&self, action: &str) -> bool {
        self.active_actions.contains(action)
    }

    /// Returns true if the named action was first pressed this frame.
    pub fn just_pressed(&self, action: &str) -> bool {
        self.just_pressed.contains(action)
    }

    /// Returns true if the named action was released this frame.
    pub fn just_released(&self, action: &str) -> bool {
        self.just_released.contains(action)
    }

    /// Marks `action` as held. Records a press edge if it was not held.
    pub fn press(&mut self, action: &str) {
        if self.active_actions.insert(action.to_string()) {
            self.just_pressed.insert(action.to_string());
        }
    }

    /// Marks `action` as released. Records a release edge if it was held.
    pub fn release(&mut self, action: &str) {
        if self.active_actions.remove(action) {
            self.just_released.insert(action.to_string());
        }
    }

    /// Clear per-frame transient state. Called at the start of each frame
    /// before new input events are applied.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_active_and_edge() {
        let mut input = InputState::default();
        input.press("move_forward");

        assert!(input.is_active("move_forward"));
        assert!(input.just_pressed("move_forward"));
        assert!(!input.is_active("move_back"));
    }

    #[test]
    fn test_repeated_press_has_single_edge() {
        let mut input = InputState::default();
        input.press("gear_up");
        input.clear_transients();
        input.press("gear_up");

        assert!(input.is_active("gear_up"));
        assert!(!input.just_pressed("gear_up"));
    }

    #[test]
    fn test_release_clears_active() {
        let mut input = InputState::default();
        input.press("turn_left");
        input.release("turn_left");

        assert!(!input.is_active("turn_left"));
        assert!(input.just_released("turn_left"));
    }

    #[test]
    fn test_release_of_idle_action_is_ignored() {
        let mut input = InputState::default();
        input.release("turn_left");
        assert!(!input.just_released("turn_left"));
    }

    #[test]
    fn test_input_state_clear_transients() {
        let mut input = InputState::default();
        input.press("move_up");
        input.release("move_up");
        input.press("move_down");

        input.clear_transients();

        assert!(input.just_pressed.is_empty());
        assert!(input.just_released.is_empty());
        assert!(input.is_active("move_down"));
    }
}
