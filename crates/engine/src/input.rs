use bevy_ecs::prelude::*;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Resource that tracks keyboard and mouse input state
#[derive(Resource, Default)]
pub struct InputState {
    /// Currently pressed keys
    pub keys_pressed: HashSet<KeyCode>,
    /// Keys that went down since the last frame
    pub keys_just_pressed: HashSet<KeyCode>,
    /// Keys that went up since the last frame
    pub keys_just_released: HashSet<KeyCode>,
    /// Mouse delta since last frame (x, y)
    pub mouse_delta: (f32, f32),
    /// Mouse position in window coordinates
    pub mouse_position: (f32, f32),
    /// Whether the mouse is captured for camera control
    pub mouse_captured: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key went down this frame
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Check if a key went up this frame
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.keys_just_released.contains(&key)
    }

    /// Reset per-frame state (call once the frame has been processed)
    pub fn reset_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
    }

    /// Handle key press
    pub fn press_key(&mut self, key: KeyCode) {
        // Key repeat delivers repeated Pressed events while held
        if self.keys_pressed.insert(key) {
            self.keys_just_pressed.insert(key);
        }
    }

    /// Handle key release
    pub fn release_key(&mut self, key: KeyCode) {
        if self.keys_pressed.remove(&key) {
            self.keys_just_released.insert(key);
        }
    }

    /// Add mouse delta movement
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        if self.mouse_captured {
            self.mouse_delta.0 += dx;
            self.mouse_delta.1 += dy;
        }
    }

    /// Update mouse position
    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = (x, y);
    }

    /// Toggle mouse capture
    pub fn toggle_mouse_capture(&mut self) {
        self.mouse_captured = !self.mouse_captured;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_only_fires_once() {
        let mut input = InputState::new();
        input.press_key(KeyCode::Space);
        assert!(input.is_key_pressed(KeyCode::Space));
        assert!(input.is_key_just_pressed(KeyCode::Space));

        input.reset_frame();
        // Key repeat while held must not produce a new edge
        input.press_key(KeyCode::Space);
        assert!(input.is_key_pressed(KeyCode::Space));
        assert!(!input.is_key_just_pressed(KeyCode::Space));
    }

    #[test]
    fn test_release_edge() {
        let mut input = InputState::new();
        input.press_key(KeyCode::KeyC);
        input.reset_frame();

        input.release_key(KeyCode::KeyC);
        assert!(!input.is_key_pressed(KeyCode::KeyC));
        assert!(input.is_key_just_released(KeyCode::KeyC));

        input.reset_frame();
        assert!(!input.is_key_just_released(KeyCode::KeyC));
    }

    #[test]
    fn test_mouse_delta_requires_capture() {
        let mut input = InputState::new();
        input.add_mouse_delta(3.0, 4.0);
        assert_eq!(input.mouse_delta, (0.0, 0.0));

        input.toggle_mouse_capture();
        input.add_mouse_delta(3.0, 4.0);
        assert_eq!(input.mouse_delta, (3.0, 4.0));
    }
}
