//! The one decision emitted per tick, and its wire form

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Optional action attached to a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    None,
    Split,
    Throw,
}

impl Action {
    /// Keyword the game link expects
    pub fn keyword(&self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Split => "split",
            Action::Throw => "throw",
        }
    }
}

/// Which priority tier produced the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// Escape vector from visible enemies
    Flee,
    /// Still latched on fleeing but nothing in sight; previous target held
    FleeHold,
    /// Closest smaller enemy
    Hunt,
    /// Closest toxin
    Toxin,
    /// Closest food
    Food,
    /// Random exploration waypoint
    Wander,
    /// No own bodies this tick
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub target: Point,
    /// Diagnostic only; not part of the wire form
    pub branch: Branch,
}

impl Decision {
    pub fn new(action: Action, target: Point, branch: Branch) -> Self {
        Self { action, target, branch }
    }
}

/// Wire line without the trailing newline, e.g. `(split,(10,20.5))`
impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.action.keyword(), self.target)
    }
}
