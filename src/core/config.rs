//! Agent configuration with documented constants
//!
//! Every threshold the arbiter consults lives here. The defaults reproduce
//! the tuned heuristic exactly; a TOML file can override any section.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};
use crate::core::types::Point;

/// Rectangle that wander targets are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 1000.0,
            max_y: 1000.0,
        }
    }
}

impl ArenaBounds {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Uniformly sample a point inside the bounds (edges included)
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.gen_range(self.min_x..=self.max_x),
            rng.gen_range(self.min_y..=self.max_y),
        )
    }
}

/// Mass ratios that classify enemies as threat or prey
///
/// The hunting gate and the prey predicate intentionally use different
/// multipliers. The gate decides *whether* to hunt, the predicate decides
/// *which* enemy counts as a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioConfig {
    /// An enemy is lethal when `enemy.mass > my_mass / lethal`
    pub lethal: f64,
    /// Escape contribution repels when `my_mass < escape * enemy.mass`
    pub escape: f64,
    /// Hunting starts when `my_mass * hunt_gate > enemy.mass` for some enemy
    pub hunt_gate: f64,
    /// Enemy is a valid prey target when `enemy.mass <= prey * my_mass`
    pub prey: f64,
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            lethal: 0.9,
            escape: 0.9,
            hunt_gate: 0.9,
            prey: 0.99,
        }
    }
}

/// Toxin throw settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrowConfig {
    /// Own mass must exceed this before toxins are considered at all
    pub min_mass: f64,
    /// Throw only when strictly farther than this from the toxin
    pub min_distance: f64,
    /// Throw only when strictly closer than this to the toxin
    pub max_distance: f64,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            min_mass: 200.0,
            min_distance: 20.0,
            max_distance: 50.0,
        }
    }
}

/// Hysteresis windows, all in whole seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Wander target refreshes once `now - wander_refresh >= deadline`
    pub wander_refresh: i64,
    /// Fleeing clears once `now - flee_grace > fleeing_until`
    pub flee_grace: i64,
    /// Throw is eligible once `now - throw_cooldown > last_throw_at`
    pub throw_cooldown: i64,
    /// How far in the past the timers start, so the first tick is unconstrained
    pub startup_backdate: i64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wander_refresh: 1,
            flee_grace: 1,
            throw_cooldown: 1,
            startup_backdate: 5,
        }
    }
}

/// Complete agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub arena: ArenaBounds,
    #[serde(default)]
    pub ratios: RatioConfig,
    #[serde(default)]
    pub throw: ThrowConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    /// Wander target counts as reached inside this radius
    #[serde(default = "default_wander_reach")]
    pub wander_reach: f64,
    /// Split fires when a uniform draw from `0..split_odds` hits zero
    #[serde(default = "default_split_odds")]
    pub split_odds: u32,
}

fn default_wander_reach() -> f64 {
    10.0
}

fn default_split_odds() -> u32 {
    101
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            arena: ArenaBounds::default(),
            ratios: RatioConfig::default(),
            throw: ThrowConfig::default(),
            timing: TimingConfig::default(),
            wander_reach: default_wander_reach(),
            split_odds: default_split_odds(),
        }
    }
}

impl AgentConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let a = &self.arena;
        if !(a.min_x.is_finite() && a.min_y.is_finite() && a.max_x.is_finite() && a.max_y.is_finite()) {
            return Err("arena bounds must be finite".into());
        }
        if a.min_x > a.max_x || a.min_y > a.max_y {
            return Err(format!(
                "arena bounds are inverted: x {}..{}, y {}..{}",
                a.min_x, a.max_x, a.min_y, a.max_y
            ));
        }
        if !((a.max_x - a.min_x).is_finite() && (a.max_y - a.min_y).is_finite()) {
            return Err("arena span must be finite".into());
        }

        let r = &self.ratios;
        for (name, value) in [
            ("lethal", r.lethal),
            ("escape", r.escape),
            ("hunt_gate", r.hunt_gate),
            ("prey", r.prey),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(format!("ratio {} must be positive, got {}", name, value));
            }
        }

        if self.throw.min_distance >= self.throw.max_distance {
            return Err(format!(
                "throw.min_distance ({}) should be < throw.max_distance ({})",
                self.throw.min_distance, self.throw.max_distance
            ));
        }

        if self.split_odds == 0 {
            return Err("split_odds must be at least 1".into());
        }

        let t = &self.timing;
        if t.wander_refresh < 0 || t.flee_grace < 0 || t.throw_cooldown < 0 || t.startup_backdate < 0 {
            return Err("timing windows must not be negative".into());
        }

        Ok(())
    }
}

/// Load and validate an agent configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AgentConfig> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    tracing::info!("Loaded agent config from {}", path.display());
    Ok(config)
}

/// Parse and validate an agent configuration from TOML text
pub fn parse_config(contents: &str) -> Result<AgentConfig> {
    let config: AgentConfig = toml::from_str(contents)?;
    config.validate().map_err(ArenaError::Config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_thresholds() {
        let config = AgentConfig::default();
        assert_eq!(config.ratios.lethal, 0.9);
        assert_eq!(config.ratios.hunt_gate, 0.9);
        assert_eq!(config.ratios.prey, 0.99);
        assert_eq!(config.throw.min_mass, 200.0);
        assert_eq!(config.split_odds, 101);
        assert_eq!(config.wander_reach, 10.0);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = parse_config("").expect("empty config should parse");
        assert_eq!(config.arena, ArenaBounds::default());
        assert_eq!(config.split_odds, 101);
    }

    #[test]
    fn test_partial_toml_overrides_section() {
        let config = parse_config(
            r#"
            split_odds = 50

            [throw]
            min_mass = 300.0
            min_distance = 10.0
            max_distance = 40.0
            "#,
        )
        .expect("partial config should parse");
        assert_eq!(config.split_odds, 50);
        assert_eq!(config.throw.min_mass, 300.0);
        assert_eq!(config.ratios.prey, 0.99);
    }

    #[test]
    fn test_inverted_throw_range_rejected() {
        let err = parse_config(
            r#"
            [throw]
            min_mass = 200.0
            min_distance = 60.0
            max_distance = 50.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ArenaError::Config(_)));
    }

    #[test]
    fn test_overflowing_arena_span_rejected() {
        let err = parse_config(
            r#"
            [arena]
            min_x = -1.7e308
            min_y = 0.0
            max_x = 1.7e308
            max_y = 10.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ArenaError::Config(_)));
    }

    #[test]
    fn test_zero_split_odds_rejected() {
        let mut config = AgentConfig::default();
        config.split_odds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_toml_error() {
        let err = parse_config("split_odds = \"many\"").unwrap_err();
        assert!(matches!(err, ArenaError::Toml(_)));
    }

    #[test]
    fn test_random_point_stays_in_bounds() {
        let bounds = ArenaBounds {
            min_x: -50.0,
            min_y: 10.0,
            max_x: 50.0,
            max_y: 20.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(bounds.contains(bounds.random_point(&mut rng)));
        }
    }

    #[test]
    fn test_load_shipped_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/agent.toml");
        let config = load_config(&path).expect("Should load shipped agent config");
        assert_eq!(config.ratios.prey, 0.99);
        assert_eq!(config.arena.max_x, 1000.0);
    }
}
