// Player input state and the per-frame intent snapshot

use super::action::Action;
use std::collections::HashSet;

/// Everything the player asked for this frame. Read-only for the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub attack: bool,
    pub magic: bool,
    pub switch_weapon: bool,
    pub switch_magic: bool,
}

/// Represents the held/pressed state of every action
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Start a new frame
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Snapshot of held actions. Holding is what counts: a held switch key
    /// keeps cycling each time its cooldown reopens.
    pub fn intent(&self) -> PlayerIntent {
        PlayerIntent {
            up: self.is_pressed(Action::MoveUp),
            down: self.is_pressed(Action::MoveDown),
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            attack: self.is_pressed(Action::Attack),
            magic: self.is_pressed(Action::CastMagic),
            switch_weapon: self.is_pressed(Action::SwitchWeapon),
            switch_magic: self.is_pressed(Action::SwitchMagic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack);
        assert!(input.is_pressed(Action::Attack));
        assert!(input.just_pressed(Action::Attack));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack);
        input.update();
        input.release(Action::Attack);
        assert!(!input.is_pressed(Action::Attack));
        assert!(input.just_released(Action::Attack));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveUp);
        input.update();
        assert!(input.is_pressed(Action::MoveUp));
        assert!(!input.just_pressed(Action::MoveUp));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::MoveUp);
        assert!(!input.just_released(Action::MoveUp));
    }

    #[test]
    fn test_intent_reflects_held_actions() {
        let mut input = PlayerInput::new();
        assert_eq!(input.intent(), PlayerIntent::default());

        input.press(Action::MoveLeft);
        input.press(Action::SwitchMagic);
        input.update();

        let intent = input.intent();
        assert!(intent.left);
        assert!(intent.switch_magic);
        assert!(!intent.right);
        assert!(!intent.attack);
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveDown);
        input.press(Action::CastMagic);
        input.reset();
        assert_eq!(input.intent(), PlayerIntent::default());
    }
}
