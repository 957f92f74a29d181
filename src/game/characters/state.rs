// Player status: which way it faces and what it is doing

/// Direction the character faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// What the character is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Moving,
    #[default]
    Idle,
    Attacking,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Moving, Mode::Idle, Mode::Attacking];
}

/// Facing and mode together select the active animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Status {
    pub facing: Facing,
    pub mode: Mode,
}

impl Status {
    /// Number of distinct statuses
    pub const COUNT: usize = Facing::ALL.len() * Mode::ALL.len();

    pub const fn new(facing: Facing, mode: Mode) -> Self {
        Self { facing, mode }
    }

    /// Every status, in `index()` order
    pub fn all() -> impl Iterator<Item = Status> {
        Facing::ALL
            .into_iter()
            .flat_map(|facing| Mode::ALL.into_iter().map(move |mode| Status::new(facing, mode)))
    }

    /// Dense index in `0..COUNT`
    pub fn index(&self) -> usize {
        let facing = match self.facing {
            Facing::Up => 0,
            Facing::Down => 1,
            Facing::Left => 2,
            Facing::Right => 3,
        };
        let mode = match self.mode {
            Mode::Moving => 0,
            Mode::Idle => 1,
            Mode::Attacking => 2,
        };
        facing * Mode::ALL.len() + mode
    }

    /// Animation name, e.g. `"left"`, `"left_idle"`, `"left_attack"`
    pub fn key(&self) -> String {
        match self.mode {
            Mode::Moving => self.facing.name().to_string(),
            Mode::Idle => format!("{}_idle", self.facing.name()),
            Mode::Attacking => format!("{}_attack", self.facing.name()),
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.mode == Mode::Attacking
    }

    /// Start moving towards `facing`
    pub fn face(facing: Facing) -> Self {
        Self::new(facing, Mode::Moving)
    }

    /// Stop moving. Idle and attacking are left as they are.
    pub fn settled(self) -> Self {
        match self.mode {
            Mode::Moving => Self::new(self.facing, Mode::Idle),
            Mode::Idle | Mode::Attacking => self,
        }
    }

    /// Enter the attack pose, keeping the facing
    pub fn attacking(self) -> Self {
        Self::new(self.facing, Mode::Attacking)
    }

    /// Leave the attack pose for idle or moving
    pub fn attack_finished(self, standing_still: bool) -> Self {
        if !self.is_attacking() {
            return self;
        }
        let mode = if standing_still { Mode::Idle } else { Mode::Moving };
        Self::new(self.facing, mode)
    }
}
