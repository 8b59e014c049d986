mod bindings;

pub use bindings::*;

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

/// Logical actions the controller reacts to on press/release edges
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Jump,
    Run,
    Crouch,
    Interact,
    Escape,
}

/// Logical axes sampled every frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    MoveForward,
    MoveRight,
    Turn,
    LookUp,
}

/// A physical input a mapping can bind: a keyboard key or a mouse axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKey {
    Key(KeyCode),
    MouseX,
    MouseY,
}
