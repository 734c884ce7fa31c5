//! Per-tick view of the arena as delivered by the game link
//!
//! A snapshot is produced fresh every tick and is never mutated by the
//! decision core.

pub mod decode;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

pub use decode::{decode_snapshot, DecodeError};

/// One circular body, either ours or an opponent's
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    pub bot_id: u32,
    pub team_id: u32,
    pub index: u32,
    pub position: Point,
    pub mass: f64,
}

impl Blob {
    pub fn new(bot_id: u32, position: Point, mass: f64) -> Self {
        Self {
            bot_id,
            team_id: bot_id,
            index: 0,
            position,
            mass,
        }
    }
}

/// Pellet that can be eaten; mass is carried but unused
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub position: Point,
    pub mass: f64,
}

impl Food {
    pub fn at(position: Point) -> Self {
        Self { position, mass: 10.0 }
    }
}

/// Toxin that fragments large blobs; mass is carried but unused
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Toxin {
    pub position: Point,
    pub mass: f64,
}

impl Toxin {
    pub fn at(position: Point) -> Self {
        Self { position, mass: 100.0 }
    }
}

/// Anything with a location that the scan queries can rank by distance
pub trait Located {
    fn position(&self) -> Point;
}

impl Located for Blob {
    fn position(&self) -> Point {
        self.position
    }
}

impl Located for Food {
    fn position(&self) -> Point {
        self.position
    }
}

impl Located for Toxin {
    fn position(&self) -> Point {
        self.position
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub own_blobs: Vec<Blob>,
    pub enemies: Vec<Blob>,
    pub foods: Vec<Food>,
    pub toxins: Vec<Toxin>,
}

impl Snapshot {
    /// The blob that steers: the lightest of our own bodies.
    ///
    /// Ties go to the first one in input order. `None` when we have no
    /// bodies (dead or not yet spawned).
    pub fn reference_blob(&self) -> Option<&Blob> {
        self.own_blobs.iter().fold(None, |best: Option<&Blob>, blob| match best {
            Some(b) if b.mass <= blob.mass => Some(b),
            _ => Some(blob),
        })
    }
}

fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, it) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        item(f, it)?;
    }
    write!(f, "]")
}

/// Renders the snapshot in the line format the game link delivers
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blob = |f: &mut fmt::Formatter<'_>, b: &Blob| {
            write!(f, "({},{},{},{},{})", b.bot_id, b.team_id, b.index, b.position, b.mass)
        };
        write!(f, "(")?;
        write_list(f, &self.own_blobs, blob)?;
        write!(f, ",")?;
        write_list(f, &self.enemies, blob)?;
        write!(f, ",")?;
        write_list(f, &self.foods, |f, x| write!(f, "({},{})", x.position, x.mass))?;
        write!(f, ",")?;
        write_list(f, &self.toxins, |f, x| write!(f, "({},{})", x.position, x.mass))?;
        write!(f, ")")
    }
}
