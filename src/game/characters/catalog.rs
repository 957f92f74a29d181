// Weapon and magic catalogs with a cyclic selection

use crate::engine::clock::Millis;

/// A melee weapon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weapon {
    pub name: &'static str,
    /// Extra attack duration on top of the base cooldown
    pub cooldown: Millis,
    pub damage: f32,
}

impl Weapon {
    pub const fn new(name: &'static str, cooldown: Millis, damage: f32) -> Self {
        Self {
            name,
            cooldown,
            damage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagicStyle {
    Flame,
    Heal,
}

impl MagicStyle {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flame => "flame",
            Self::Heal => "heal",
        }
    }
}

/// A spell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magic {
    pub style: MagicStyle,
    pub strength: f32,
    /// Energy spent per cast
    pub cost: f32,
}

impl Magic {
    pub const fn new(style: MagicStyle, strength: f32, cost: f32) -> Self {
        Self {
            style,
            strength,
            cost,
        }
    }
}

/// Current pick from an ordered, non-empty catalog
#[derive(Debug, Clone, Copy)]
pub struct Selection<T: 'static> {
    items: &'static [T],
    index: usize,
}

impl<T: 'static> Selection<T> {
    /// Select the first entry of `items`
    ///
    /// # Panics
    /// If `items` is empty. Catalogs are compile-time tables.
    pub fn new(items: &'static [T]) -> Self {
        assert!(!items.is_empty(), "catalog must not be empty");
        Self { items, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    /// Move to the next entry, wrapping after the last one
    pub fn advance(&mut self) -> &T {
        self.index = (self.index + 1) % self.items.len();
        self.current()
    }
}
