//! Per-tick priority arbiter
//!
//! Tiers in strict precedence: flee > hunt > throw toxin > eat food > wander.
//! Independently of the tier, a random split is sampled every tick; a throw
//! from the toxin tier overrides it.

use rand::Rng;

use crate::agent::scan::{nearest_food, nearest_smaller_enemy, nearest_toxin};
use crate::agent::state::AgentState;
use crate::agent::threat::{average_escape_vector, has_huntable_enemy, is_lethal_threat_present};
use crate::core::config::AgentConfig;
use crate::core::types::Timestamp;
use crate::decision::{Action, Branch, Decision};
use crate::snapshot::Snapshot;

/// Produce this tick's decision and the state to carry into the next tick.
///
/// Pure apart from the random draws taken from `rng`: the same snapshot,
/// state, time and generator state always yield the same result.
pub fn decide<R: Rng + ?Sized>(
    snapshot: &Snapshot,
    state: &AgentState,
    now: Timestamp,
    config: &AgentConfig,
    rng: &mut R,
) -> (Decision, AgentState) {
    let mut next = *state;

    let Some(me) = snapshot.reference_blob() else {
        tracing::debug!("No own blobs in snapshot, holding wander target");
        return (Decision::new(Action::None, state.wander_target, Branch::Idle), next);
    };
    let my_pos = me.position;
    let my_mass = me.mass;
    let ratios = &config.ratios;

    next.refresh_wander(my_pos, now, config, rng);
    let threatened = is_lethal_threat_present(&snapshot.enemies, my_mass, ratios);
    next.update_fleeing(threatened, now, &config.timing);

    let hunting = !threatened && has_huntable_enemy(&snapshot.enemies, my_mass, ratios);
    let may_throw = my_mass > config.throw.min_mass && next.throw_ready(now, &config.timing);

    let mut throw_now = false;
    let (target, branch) = if next.fleeing {
        match average_escape_vector(my_pos, my_mass, &snapshot.enemies, ratios) {
            Some(escape) => (escape, Branch::Flee),
            None => (next.last_target, Branch::FleeHold),
        }
    } else if let Some(prey) = hunting
        .then(|| nearest_smaller_enemy(my_pos, my_mass, ratios.prey, &snapshot.enemies))
        .flatten()
    {
        (prey, Branch::Hunt)
    } else if let Some(toxin) = nearest_toxin(my_pos, &snapshot.toxins).filter(|_| may_throw) {
        let dist = my_pos.distance(&toxin);
        if dist > config.throw.min_distance && dist < config.throw.max_distance {
            throw_now = true;
            next.record_throw(now);
        }
        (toxin, Branch::Toxin)
    } else if let Some(food) = nearest_food(my_pos, &snapshot.foods) {
        (food, Branch::Food)
    } else {
        (next.wander_target, Branch::Wander)
    };

    let split = rng.gen_range(0..config.split_odds) == 0;
    let action = if throw_now {
        Action::Throw
    } else if split {
        Action::Split
    } else {
        Action::None
    };

    next.last_target = target;
    tracing::debug!(
        ?branch,
        ?action,
        x = target.x,
        y = target.y,
        mass = my_mass,
        fleeing = next.fleeing,
        "tick decided"
    );

    (Decision::new(action, target, branch), next)
}
