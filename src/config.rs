/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Deserialize;
use std::fs;

/***************************************/
/*             Constants               */
/***************************************/
pub const MIN_FLOORS: u8 = 5;
pub const MAX_FLOORS: u8 = 20;
pub const DEFAULT_FLOORS: u8 = 10;

pub const MIN_ELEVATORS: u8 = 1;
pub const MAX_ELEVATORS: u8 = 5;
pub const DEFAULT_ELEVATORS: u8 = 2;

pub const DEFAULT_TRACE_PATH: &str = "elevator_trace.log";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Default)]
pub struct SimConfig {
    #[serde(default)]
    pub building: BuildingConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Deserialize, Clone)]
pub struct BuildingConfig {
    #[serde(default = "default_floors")]
    pub n_floors: u8,
    #[serde(default = "default_elevators")]
    pub n_elevators: u8,
}

#[derive(Deserialize, Clone)]
pub struct TraceConfig {
    #[serde(default = "default_trace_path")]
    pub path: String,
}

impl Default for BuildingConfig {
    fn default() -> BuildingConfig {
        BuildingConfig {
            n_floors: DEFAULT_FLOORS,
            n_elevators: DEFAULT_ELEVATORS,
        }
    }
}

impl Default for TraceConfig {
    fn default() -> TraceConfig {
        TraceConfig {
            path: DEFAULT_TRACE_PATH.to_string(),
        }
    }
}

fn default_floors() -> u8 {
    DEFAULT_FLOORS
}

fn default_elevators() -> u8 {
    DEFAULT_ELEVATORS
}

fn default_trace_path() -> String {
    DEFAULT_TRACE_PATH.to_string()
}

/***************************************/
/*             Public API              */
/***************************************/
/// Loads the configuration file. A missing file means defaults; a malformed
/// file or out-of-range values fall back to defaults with a warning rather
/// than failing the run.
pub fn load_config(path: &str) -> SimConfig {
    let config = match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to parse {}: {}; using defaults", path, e);
                SimConfig::default()
            }
        },
        Err(_) => SimConfig::default(),
    };
    clamped(config)
}

pub fn clamp_floors(n_floors: u8) -> u8 {
    if (MIN_FLOORS..=MAX_FLOORS).contains(&n_floors) {
        n_floors
    } else {
        warn!(
            "{} floors is outside {}-{}; defaulting to {}",
            n_floors, MIN_FLOORS, MAX_FLOORS, DEFAULT_FLOORS
        );
        DEFAULT_FLOORS
    }
}

pub fn clamp_elevators(n_elevators: u8) -> u8 {
    if (MIN_ELEVATORS..=MAX_ELEVATORS).contains(&n_elevators) {
        n_elevators
    } else {
        warn!(
            "{} elevators is outside {}-{}; defaulting to {}",
            n_elevators, MIN_ELEVATORS, MAX_ELEVATORS, DEFAULT_ELEVATORS
        );
        DEFAULT_ELEVATORS
    }
}

fn clamped(mut config: SimConfig) -> SimConfig {
    config.building.n_floors = clamp_floors(config.building.n_floors);
    config.building.n_elevators = clamp_elevators(config.building.n_elevators);
    config
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Arrange + act
        let config = SimConfig::default();

        // Assert
        assert_eq!(config.building.n_floors, DEFAULT_FLOORS);
        assert_eq!(config.building.n_elevators, DEFAULT_ELEVATORS);
        assert_eq!(config.trace.path, DEFAULT_TRACE_PATH);
    }

    #[test]
    fn test_clamp_floors_out_of_range() {
        assert_eq!(clamp_floors(4), DEFAULT_FLOORS);
        assert_eq!(clamp_floors(21), DEFAULT_FLOORS);
        assert_eq!(clamp_floors(5), 5);
        assert_eq!(clamp_floors(20), 20);
    }

    #[test]
    fn test_clamp_elevators_out_of_range() {
        assert_eq!(clamp_elevators(0), DEFAULT_ELEVATORS);
        assert_eq!(clamp_elevators(6), DEFAULT_ELEVATORS);
        assert_eq!(clamp_elevators(1), 1);
        assert_eq!(clamp_elevators(5), 5);
    }

    #[test]
    fn test_parse_partial_file() {
        // Arrange: only the building table is given.
        let contents = "[building]\nn_floors = 12\n";

        // Act
        let config: SimConfig = toml::from_str(contents).unwrap();

        // Assert: missing fields take their defaults.
        assert_eq!(config.building.n_floors, 12);
        assert_eq!(config.building.n_elevators, DEFAULT_ELEVATORS);
        assert_eq!(config.trace.path, DEFAULT_TRACE_PATH);
    }
}
