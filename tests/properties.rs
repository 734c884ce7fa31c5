//! Property tests for the scan queries, threat checks and decoder

use arena_arbiter::agent::scan::nearest_smaller_enemy;
use arena_arbiter::agent::threat::{average_escape_vector, is_lethal_threat_present};
use arena_arbiter::core::config::RatioConfig;
use arena_arbiter::core::types::Point;
use arena_arbiter::snapshot::{decode_snapshot, Blob, Food, Snapshot, Toxin};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point> {
    (-2000.0f64..2000.0, -2000.0f64..2000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn blob_with_mass(mass: impl Strategy<Value = f64>) -> impl Strategy<Value = Blob> {
    (0u32..64, 0u32..8, 0u32..16, point(), mass).prop_map(|(bot_id, team_id, index, position, mass)| Blob {
        bot_id,
        team_id,
        index,
        position,
        mass,
    })
}

proptest! {
    #[test]
    fn prop_smaller_enemy_is_minimum_distance(
        me in point(),
        my_mass in 10.0f64..5000.0,
        fractions in prop::collection::vec((point(), 0.0f64..=0.99), 0..20),
    ) {
        let enemies: Vec<Blob> = fractions
            .iter()
            .map(|&(p, f)| Blob::new(2, p, f * my_mass))
            .collect();
        let found = nearest_smaller_enemy(me, my_mass, 0.99, &enemies);

        match enemies.iter().map(|e| me.distance(&e.position)).fold(None, |m: Option<f64>, d| Some(m.map_or(d, |m| m.min(d)))) {
            None => prop_assert!(found.is_none()),
            Some(best) => {
                let found = found.expect("a qualifying enemy exists");
                prop_assert_eq!(me.distance(&found), best);
            }
        }
    }

    #[test]
    fn prop_lethal_matches_definition(
        my_mass in 1.0f64..5000.0,
        enemies in prop::collection::vec(blob_with_mass(0.0f64..10000.0), 0..20),
    ) {
        let ratios = RatioConfig::default();
        let expected = enemies.iter().any(|e| e.mass > my_mass / 0.9);
        prop_assert_eq!(is_lethal_threat_present(&enemies, my_mass, &ratios), expected);
    }

    #[test]
    fn prop_lethal_is_monotone(
        my_mass in 1.0f64..5000.0,
        enemies in prop::collection::vec(blob_with_mass(0.0f64..10000.0), 0..20),
        extra in blob_with_mass(0.0f64..10000.0),
    ) {
        let ratios = RatioConfig::default();
        let before = is_lethal_threat_present(&enemies, my_mass, &ratios);
        let mut more = enemies.clone();
        more.push(extra);
        let after = is_lethal_threat_present(&more, my_mass, &ratios);
        prop_assert!(!before || after);
    }

    #[test]
    fn prop_escape_defined_iff_enemies_visible(
        me in point(),
        my_mass in 1.0f64..5000.0,
        enemies in prop::collection::vec(blob_with_mass(0.0f64..10000.0), 0..10),
    ) {
        let escape = average_escape_vector(me, my_mass, &enemies, &RatioConfig::default());
        prop_assert_eq!(escape.is_some(), !enemies.is_empty());
    }

    #[test]
    fn prop_decoder_accepts_rendered_snapshots(
        own in prop::collection::vec(blob_with_mass(0.0f64..10000.0), 0..5),
        enemies in prop::collection::vec(blob_with_mass(0.0f64..10000.0), 0..5),
        foods in prop::collection::vec(point(), 0..5),
        toxins in prop::collection::vec(point(), 0..5),
    ) {
        let snapshot = Snapshot {
            own_blobs: own,
            enemies,
            foods: foods.into_iter().map(Food::at).collect(),
            toxins: toxins.into_iter().map(Toxin::at).collect(),
        };
        let decoded = decode_snapshot(&snapshot.to_string());
        prop_assert_eq!(decoded, Ok(snapshot));
    }
}
