// Combat effect hooks
//
// The player decides when an attack or spell starts and ends; whoever owns
// the effect entities (weapon sprites, particles, damage zones) hears about
// it through this trait.

use super::catalog::MagicStyle;
use log::debug;

pub trait CombatEffects {
    /// A melee attack started
    fn spawn_melee_effect(&mut self);

    /// The current attack (melee or magic) ended
    fn destroy_melee_effect(&mut self);

    /// A spell was cast with the given total strength and energy cost
    fn spawn_magic_effect(&mut self, style: MagicStyle, strength: f32, cost: f32);
}

/// Recorded effect request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectCommand {
    SpawnMelee,
    DestroyMelee,
    SpawnMagic {
        style: MagicStyle,
        strength: f32,
        cost: f32,
    },
}

/// Collects effect requests so they can be applied after the player update
#[derive(Debug, Default)]
pub struct EffectQueue {
    commands: Vec<EffectCommand>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[EffectCommand] {
        &self.commands
    }

    /// Take every queued request, oldest first
    pub fn drain(&mut self) -> std::vec::Drain<'_, EffectCommand> {
        self.commands.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl CombatEffects for EffectQueue {
    fn spawn_melee_effect(&mut self) {
        debug!("Spawn melee effect");
        self.commands.push(EffectCommand::SpawnMelee);
    }

    fn destroy_melee_effect(&mut self) {
        debug!("Destroy melee effect");
        self.commands.push(EffectCommand::DestroyMelee);
    }

    fn spawn_magic_effect(&mut self, style: MagicStyle, strength: f32, cost: f32) {
        debug!("Spawn {} magic (strength {strength}, cost {cost})", style.name());
        self.commands.push(EffectCommand::SpawnMagic {
            style,
            strength,
            cost,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_records_in_order() {
        let mut queue = EffectQueue::new();
        queue.spawn_melee_effect();
        queue.spawn_magic_effect(MagicStyle::Flame, 9.0, 20.0);
        queue.destroy_melee_effect();

        assert_eq!(
            queue.commands(),
            &[
                EffectCommand::SpawnMelee,
                EffectCommand::SpawnMagic {
                    style: MagicStyle::Flame,
                    strength: 9.0,
                    cost: 20.0
                },
                EffectCommand::DestroyMelee,
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EffectQueue::new();
        queue.spawn_melee_effect();
        let drained: Vec<EffectCommand> = queue.drain().collect();
        assert_eq!(drained, vec![EffectCommand::SpawnMelee]);
        assert!(queue.is_empty());
    }
}
