// Input manager - translates window events into actions

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::{PlayerInput, PlayerIntent};
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Owns the bindings and the player's input state
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeats carry no new information: held state already covers them
            if event.repeat {
                return;
            }
            self.apply(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_event(&mut self, button: MouseButton, state: ElementState) {
        self.apply(InputSource::mouse(button), state);
    }

    /// Press or release whatever action `source` is bound to
    pub fn apply(&mut self, source: InputSource, state: ElementState) {
        let Some(action) = self.config.get_action(source) else {
            return;
        };
        match state {
            ElementState::Pressed => self.player.press(action),
            ElementState::Released => self.player.release(action),
        }
    }

    /// Call once per frame after the game has read the intent
    pub fn update(&mut self) {
        self.player.update();
    }

    /// This frame's intent
    pub fn intent(&self) -> PlayerIntent {
        self.player.intent()
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Drop every held action, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.player.reset();
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.player.is_pressed(action)
    }
}
