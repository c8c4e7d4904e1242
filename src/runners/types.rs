use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four runner specializations. Also used as the index into
/// [`RunnerStats`], since each stat is named after the specialization it
/// measures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunnerType {
    Hacker,
    Face,
    Ninja,
    Muscle,
}

impl RunnerType {
    pub fn all() -> [RunnerType; 4] {
        [
            RunnerType::Hacker,
            RunnerType::Face,
            RunnerType::Ninja,
            RunnerType::Muscle,
        ]
    }

    /// Capitalized form used by `RunnerType:` clauses in the effect grammar.
    pub fn name(&self) -> &'static str {
        match self {
            RunnerType::Hacker => "Hacker",
            RunnerType::Face => "Face",
            RunnerType::Ninja => "Ninja",
            RunnerType::Muscle => "Muscle",
        }
    }

    /// Lowercase form used by `RunnerStat:` clauses in the effect grammar.
    pub fn stat_keyword(&self) -> &'static str {
        match self {
            RunnerType::Hacker => "hacker",
            RunnerType::Face => "face",
            RunnerType::Ninja => "ninja",
            RunnerType::Muscle => "muscle",
        }
    }

    pub fn from_name(name: &str) -> Option<RunnerType> {
        RunnerType::all().into_iter().find(|t| t.name() == name)
    }

    /// Case-sensitive: stat keywords are lowercase in the grammar.
    pub fn from_stat_keyword(keyword: &str) -> Option<RunnerType> {
        RunnerType::all()
            .into_iter()
            .find(|t| t.stat_keyword() == keyword)
    }

    fn index(&self) -> usize {
        match self {
            RunnerType::Hacker => 0,
            RunnerType::Face => 1,
            RunnerType::Ninja => 2,
            RunnerType::Muscle => 3,
        }
    }
}

/// Per-runner stat block, one value per specialization.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunnerStats {
    values: [u32; 4],
}

impl RunnerStats {
    pub fn get(&self, stat: RunnerType) -> u32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: RunnerType, value: u32) {
        self.values[stat.index()] = value;
    }

    pub fn from_values(hacker: u32, face: u32, ninja: u32, muscle: u32) -> Self {
        Self {
            values: [hacker, face, ninja, muscle],
        }
    }
}

/// Whether a runner is fit for work. Dead is terminal: no transition ever
/// leaves it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LifecycleState {
    Ready,
    Injured,
    Dead,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HiringState {
    Hired,
    Unhired,
}

/// A runner on the roster. Mutated only by hiring actions and by contract
/// resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Runner {
    pub id: String,
    pub name: String,
    pub runner_type: RunnerType,
    pub level: u32,
    pub stats: RunnerStats,
    pub lifecycle: LifecycleState,
    pub hiring: HiringState,
}

impl Runner {
    pub fn new(name: String, runner_type: RunnerType, stats: RunnerStats) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            runner_type,
            level: 1,
            stats,
            lifecycle: LifecycleState::Ready,
            hiring: HiringState::Unhired,
        }
    }

    pub fn is_hired(&self) -> bool {
        self.hiring == HiringState::Hired
    }

    pub fn is_dead(&self) -> bool {
        self.lifecycle == LifecycleState::Dead
    }

    /// Ready -> Injured. Injured and Dead runners are unchanged.
    pub fn injure(&mut self) {
        if self.lifecycle == LifecycleState::Ready {
            self.lifecycle = LifecycleState::Injured;
        }
    }

    /// Any living runner -> Dead. Dead runners are unchanged.
    pub fn kill(&mut self) {
        if self.lifecycle != LifecycleState::Dead {
            self.lifecycle = LifecycleState::Dead;
        }
    }
}
