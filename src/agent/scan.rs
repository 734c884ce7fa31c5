//! Nearest-entity scans over the unordered snapshot collections

use crate::core::types::Point;
use crate::snapshot::{Blob, Food, Located, Toxin};

/// Position of the closest candidate accepted by `keep`.
///
/// A later candidate replaces the current best only when it is strictly
/// closer, so equal distances resolve to the earliest one in input order.
pub fn nearest_matching<'a, T, F>(
    pos: Point,
    candidates: impl IntoIterator<Item = &'a T>,
    mut keep: F,
) -> Option<Point>
where
    T: Located + 'a,
    F: FnMut(&T) -> bool,
{
    let mut best: Option<(f64, Point)> = None;
    for candidate in candidates {
        if !keep(candidate) {
            continue;
        }
        let at = candidate.position();
        let dist = pos.distance(&at);
        match best {
            Some((d, _)) if dist >= d => {}
            _ => best = Some((dist, at)),
        }
    }
    best.map(|(_, at)| at)
}

pub fn nearest_food(pos: Point, foods: &[Food]) -> Option<Point> {
    nearest_matching(pos, foods, |_| true)
}

pub fn nearest_toxin(pos: Point, toxins: &[Toxin]) -> Option<Point> {
    nearest_matching(pos, toxins, |_| true)
}

/// Closest enemy at most `prey_ratio` of our mass
pub fn nearest_smaller_enemy(pos: Point, my_mass: f64, prey_ratio: f64, enemies: &[Blob]) -> Option<Point> {
    nearest_matching(pos, enemies, |e: &Blob| e.mass <= prey_ratio * my_mass)
}
