// Game action definitions and mappings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Combat
    Attack,
    CastMagic,

    // Loadout cycling
    SwitchWeapon,
    SwitchMagic,
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (arrows and WASD)
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::KeyW), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        (InputSource::key(KeyCode::KeyS), Action::MoveDown),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        // Combat
        (InputSource::key(KeyCode::KeyJ), Action::Attack),
        (InputSource::mouse(MouseButton::Left), Action::Attack),
        (InputSource::key(KeyCode::KeyK), Action::CastMagic),
        (InputSource::mouse(MouseButton::Right), Action::CastMagic),
        // Loadout
        (InputSource::key(KeyCode::KeyQ), Action::SwitchWeapon),
        (InputSource::key(KeyCode::KeyU), Action::SwitchWeapon),
        (InputSource::key(KeyCode::KeyE), Action::SwitchMagic),
        (InputSource::key(KeyCode::KeyI), Action::SwitchMagic),
    ]
}
