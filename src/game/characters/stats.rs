// Player stats: current levels, caps and upgrade costs

use crate::core::math::clamp;

/// The five upgradable stats, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Health,
    Energy,
    Attack,
    Magic,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 5] = [Stat::Health, Stat::Energy, Stat::Attack, Stat::Magic, Stat::Speed];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Energy => "energy",
            Self::Attack => "attack",
            Self::Magic => "magic",
            Self::Speed => "speed",
        }
    }

    /// Stat at a display position
    pub fn from_index(index: usize) -> Option<Stat> {
        Self::ALL.get(index).copied()
    }
}

/// One value per stat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatTable {
    pub health: f32,
    pub energy: f32,
    pub attack: f32,
    pub magic: f32,
    pub speed: f32,
}

impl StatTable {
    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Health => self.health,
            Stat::Energy => self.energy,
            Stat::Attack => self.attack,
            Stat::Magic => self.magic,
            Stat::Speed => self.speed,
        }
    }

    fn get_mut(&mut self, stat: Stat) -> &mut f32 {
        match stat {
            Stat::Health => &mut self.health,
            Stat::Energy => &mut self.energy,
            Stat::Attack => &mut self.attack,
            Stat::Magic => &mut self.magic,
            Stat::Speed => &mut self.speed,
        }
    }
}

/// Starting stat levels
pub const BASE_STATS: StatTable = StatTable {
    health: 100.0,
    energy: 60.0,
    attack: 10.0,
    magic: 4.0,
    speed: 5.0,
};

/// Upper bound for every stat
pub const MAX_STATS: StatTable = StatTable {
    health: 300.0,
    energy: 140.0,
    attack: 20.0,
    magic: 10.0,
    speed: 10.0,
};

/// Experience needed to upgrade each stat
pub const UPGRADE_COST: StatTable = StatTable {
    health: 100.0,
    energy: 100.0,
    attack: 100.0,
    magic: 100.0,
    speed: 100.0,
};

/// Current stat levels, kept within `0..=max`
#[derive(Debug, Clone)]
pub struct PlayerStats {
    current: StatTable,
    max: StatTable,
    upgrade_cost: StatTable,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(BASE_STATS, MAX_STATS, UPGRADE_COST)
    }
}

impl PlayerStats {
    /// Create a stat block; `current` is clamped into range
    pub fn new(current: StatTable, max: StatTable, upgrade_cost: StatTable) -> Self {
        let mut stats = Self {
            current,
            max,
            upgrade_cost,
        };
        for stat in Stat::ALL {
            stats.set(stat, current.get(stat));
        }
        stats
    }

    pub fn get(&self, stat: Stat) -> f32 {
        self.current.get(stat)
    }

    pub fn max(&self, stat: Stat) -> f32 {
        self.max.get(stat)
    }

    pub fn upgrade_cost(&self, stat: Stat) -> f32 {
        self.upgrade_cost.get(stat)
    }

    /// Set a stat level, clamped to `0..=max`
    pub fn set(&mut self, stat: Stat, value: f32) {
        let max = self.max.get(stat);
        *self.current.get_mut(stat) = clamp(value, 0.0, max);
    }

    /// Level of the stat at a display position
    pub fn value_by_index(&self, index: usize) -> Option<f32> {
        Stat::from_index(index).map(|stat| self.get(stat))
    }

    /// Upgrade cost of the stat at a display position
    pub fn cost_by_index(&self, index: usize) -> Option<f32> {
        Stat::from_index(index).map(|stat| self.upgrade_cost(stat))
    }

    pub fn health(&self) -> f32 {
        self.get(Stat::Health)
    }

    pub fn energy(&self) -> f32 {
        self.get(Stat::Energy)
    }

    pub fn attack(&self) -> f32 {
        self.get(Stat::Attack)
    }

    pub fn magic(&self) -> f32 {
        self.get(Stat::Magic)
    }

    pub fn speed(&self) -> f32 {
        self.get(Stat::Speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = PlayerStats::default();
        assert_eq!(stats.health(), 100.0);
        assert_eq!(stats.energy(), 60.0);
        assert_eq!(stats.attack(), 10.0);
        assert_eq!(stats.magic(), 4.0);
        assert_eq!(stats.speed(), 5.0);
        assert_eq!(stats.max(Stat::Energy), 140.0);
    }

    #[test]
    fn test_set_clamps_to_range() {
        let mut stats = PlayerStats::default();
        stats.set(Stat::Speed, 50.0);
        assert_eq!(stats.speed(), 10.0);
        stats.set(Stat::Speed, -3.0);
        assert_eq!(stats.speed(), 0.0);
    }

    #[test]
    fn test_new_clamps_out_of_range_input() {
        let mut current = BASE_STATS;
        current.attack = 99.0;
        let stats = PlayerStats::new(current, MAX_STATS, UPGRADE_COST);
        assert_eq!(stats.attack(), MAX_STATS.attack);
    }

    #[test]
    fn test_index_accessors_follow_display_order() {
        let stats = PlayerStats::default();
        assert_eq!(stats.value_by_index(0), Some(100.0));
        assert_eq!(stats.value_by_index(3), Some(4.0));
        assert_eq!(stats.value_by_index(5), None);
        assert_eq!(stats.cost_by_index(4), Some(100.0));
        assert_eq!(Stat::from_index(1).map(|s| s.name()), Some("energy"));
    }

    #[test]
    fn test_all_stats_within_caps() {
        let stats = PlayerStats::default();
        for stat in Stat::ALL {
            assert!(stats.get(stat) >= 0.0);
            assert!(stats.get(stat) <= stats.max(stat));
        }
    }
}
