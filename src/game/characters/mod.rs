// Character system
//
// Everything the player character is made of:
// - Status state machine and animation clips
// - Stats, weapon and magic catalogs
// - Cooldown timers and the combat effect seam

pub mod animation;
pub mod catalog;
pub mod effects;
pub mod player;
pub mod state;
pub mod stats;
pub mod timer;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationLibrary, FrameCursor};
pub use catalog::{Magic, MagicStyle, Selection, Weapon};
pub use effects::{CombatEffects, EffectCommand, EffectQueue};
pub use player::Player;
pub use state::{Facing, Mode, Status};
pub use stats::{PlayerStats, Stat, StatTable};
pub use timer::Timer;
