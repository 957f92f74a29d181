// Input handling system
//
// Window events are mapped through remappable bindings onto game actions,
// and the game reads a `PlayerIntent` snapshot once per frame.
//
// - `action`: game actions and default key bindings
// - `config`: binding table and remapping
// - `player`: held/pressed state and the intent snapshot
// - `manager`: winit event translation

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::{PlayerInput, PlayerIntent};
