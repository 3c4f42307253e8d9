use crate::domain::stats::UserStats;
use std::fmt::Display;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Badge {
    EcoWarrior,
    PlasticReducer,
}

impl Badge {
    pub fn all() -> [Badge; 2] {
        [Badge::EcoWarrior, Badge::PlasticReducer]
    }

    pub fn from_name(name: &str) -> Option<Badge> {
        Badge::all().into_iter().find(|badge| badge.name() == name)
    }

    /// The name the backend uses when awarding the badge.
    pub fn name(&self) -> &'static str {
        match self {
            Badge::EcoWarrior => "Eco Warrior",
            Badge::PlasticReducer => "Plastic Reducer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Badge::EcoWarrior => "Scan 10 items",
            Badge::PlasticReducer => "Recycle 5 items",
        }
    }

    pub fn target(&self) -> u64 {
        match self {
            Badge::EcoWarrior => 10,
            Badge::PlasticReducer => 5,
        }
    }

    pub fn progress(&self, stats: &UserStats) -> BadgeProgress {
        let current = match self {
            Badge::EcoWarrior => stats.items_scanned,
            Badge::PlasticReducer => stats.items_recycled,
        };

        BadgeProgress {
            badge: *self,
            current,
            target: self.target(),
        }
    }
}

impl Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BadgeProgress {
    pub badge: Badge,
    pub current: u64,
    pub target: u64,
}

impl BadgeProgress {
    /// Whether the threshold is reached. The backend awards the badge on its next stats read.
    pub fn earned(&self) -> bool {
        self.current >= self.target
    }

    /// Progress in `[0.0, 1.0]`.
    pub fn fraction(&self) -> f64 {
        if self.target == 0 {
            return 1.0;
        }
        (self.current as f64 / self.target as f64).min(1.0)
    }
}

impl Display for BadgeProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current.min(self.target), self.target)
    }
}
