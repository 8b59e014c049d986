use std::path::Path;

use anyhow::Context;
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::Result;
use crate::input::{Action, Axis, InputKey};
use firstperson_engine::input::InputState;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionMapping {
    pub key: InputKey,
    pub action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisMapping {
    pub key: InputKey,
    pub axis: Axis,
    pub scale: f32,
}

/// The key-mapping table. Owned explicitly and passed by reference, with a
/// load → ensure-defaults → save lifecycle, instead of living in an
/// engine-global settings object.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBindings {
    /// Leave an existing scheme in place instead of rewriting it
    pub use_custom_key_mappings: bool,
    pub actions: Vec<ActionMapping>,
    pub axes: Vec<AxisMapping>,
}

impl InputBindings {
    /// The fixed default scheme: WASD movement with S/A negated, mouse
    /// look with an inverted Y axis, Space=Jump, F=Interact, Escape=Quit,
    /// Shift=Run, Ctrl and C=Crouch.
    pub fn defaults() -> Self {
        let actions = vec![
            ActionMapping {
                key: InputKey::Key(KeyCode::Space),
                action: Action::Jump,
            },
            ActionMapping {
                key: InputKey::Key(KeyCode::KeyF),
                action: Action::Interact,
            },
            ActionMapping {
                key: InputKey::Key(KeyCode::Escape),
                action: Action::Escape,
            },
            ActionMapping {
                key: InputKey::Key(KeyCode::ShiftLeft),
                action: Action::Run,
            },
            ActionMapping {
                key: InputKey::Key(KeyCode::ControlLeft),
                action: Action::Crouch,
            },
            ActionMapping {
                key: InputKey::Key(KeyCode::KeyC),
                action: Action::Crouch,
            },
        ];

        let axes = vec![
            AxisMapping {
                key: InputKey::MouseX,
                axis: Axis::Turn,
                scale: 1.0,
            },
            AxisMapping {
                key: InputKey::MouseY,
                axis: Axis::LookUp,
                scale: -1.0,
            },
            AxisMapping {
                key: InputKey::Key(KeyCode::KeyW),
                axis: Axis::MoveForward,
                scale: 1.0,
            },
            AxisMapping {
                key: InputKey::Key(KeyCode::KeyS),
                axis: Axis::MoveForward,
                scale: -1.0,
            },
            AxisMapping {
                key: InputKey::Key(KeyCode::KeyA),
                axis: Axis::MoveRight,
                scale: -1.0,
            },
            AxisMapping {
                key: InputKey::Key(KeyCode::KeyD),
                axis: Axis::MoveRight,
                scale: 1.0,
            },
        ];

        Self {
            use_custom_key_mappings: false,
            actions,
            axes,
        }
    }

    /// One-shot migration: install the default scheme when no bindings
    /// exist, or rewrite an existing scheme unless the custom-mapping flag
    /// asks to keep it. Returns whether the table changed.
    pub fn ensure_defaults(&mut self) -> bool {
        let empty = self.actions.is_empty() && self.axes.is_empty();
        if !empty && self.use_custom_key_mappings {
            return false;
        }

        let defaults = Self::defaults();
        if self.actions == defaults.actions && self.axes == defaults.axes {
            return false;
        }

        log::info!("Installing default key bindings");
        self.actions = defaults.actions;
        self.axes = defaults.axes;
        true
    }

    /// Read bindings from a TOML file. A missing file is a first run and
    /// yields an empty table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read key bindings from {}", path.display()))?;
        let bindings =
            toml::from_str(&text).with_context(|| format!("parse key bindings {}", path.display()))?;
        Ok(bindings)
    }

    /// Persist the table as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self).context("serialize key bindings")?;
        std::fs::write(path, text)
            .with_context(|| format!("write key bindings to {}", path.display()))?;
        Ok(())
    }

    /// Sum of the scales of every held key bound to `axis`, plus mouse
    /// deltas for mouse-bound axes
    pub fn axis_value(&self, axis: Axis, input: &InputState) -> f32 {
        let mut value = 0.0;
        for mapping in self.axes.iter().filter(|m| m.axis == axis) {
            match mapping.key {
                InputKey::Key(key) => {
                    if input.is_key_pressed(key) {
                        value += mapping.scale;
                    }
                }
                InputKey::MouseX => value += input.mouse_delta.0 * mapping.scale,
                InputKey::MouseY => value += input.mouse_delta.1 * mapping.scale,
            }
        }
        value
    }

    pub fn action_pressed(&self, action: Action, input: &InputState) -> bool {
        self.action_keys(action).any(|key| input.is_key_pressed(key))
    }

    pub fn action_just_pressed(&self, action: Action, input: &InputState) -> bool {
        self.action_keys(action)
            .any(|key| input.is_key_just_pressed(key))
    }

    pub fn action_just_released(&self, action: Action, input: &InputState) -> bool {
        self.action_keys(action)
            .any(|key| input.is_key_just_released(key))
    }

    fn action_keys(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.actions
            .iter()
            .filter(move |m| m.action == action)
            .filter_map(|m| match m.key {
                InputKey::Key(key) => Some(key),
                _ => None,
            })
    }
}
