//! Threat detection and the escape vector
//!
//! All three checks compare masses with their own multiplier; the forms are
//! kept exactly as tuned (`a > b / r` is not rewritten as `a * r > b`).

use crate::core::config::RatioConfig;
use crate::core::types::Point;
use crate::snapshot::Blob;

/// Some enemy could engulf us: `enemy.mass > my_mass / lethal`
pub fn is_lethal_threat_present(enemies: &[Blob], my_mass: f64, ratios: &RatioConfig) -> bool {
    enemies.iter().any(|e| e.mass > my_mass / ratios.lethal)
}

/// Hunting gate: some enemy satisfies `my_mass * hunt_gate > enemy.mass`
pub fn has_huntable_enemy(enemies: &[Blob], my_mass: f64, ratios: &RatioConfig) -> bool {
    enemies.iter().any(|e| my_mass * ratios.hunt_gate > e.mass)
}

/// Sum of per-enemy pushes and pulls, anchored at `pos`.
///
/// Enemies that outmass us push away from themselves; every other enemy
/// pulls toward itself. `None` only when no enemy is visible.
pub fn average_escape_vector(pos: Point, my_mass: f64, enemies: &[Blob], ratios: &RatioConfig) -> Option<Point> {
    if enemies.is_empty() {
        return None;
    }

    let mut sum = Point::default();
    for e in enemies {
        if my_mass < ratios.escape * e.mass {
            sum += pos - e.position;
        } else {
            sum += e.position - pos;
        }
    }
    Some(pos + sum)
}
