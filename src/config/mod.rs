//! Station and robot controller configuration.
//!
//! Every value has a default matching the reference cell: controller on `localhost`,
//! dashboard server on port 29999, URScript interpreter on port 30002, and a 9.5 s settle
//! time per pick. Defaults can be overridden through environment variables; there is no
//! configuration file.
//!
//! | Variable                    | Field                          |
//! |-----------------------------|--------------------------------|
//! | `PICK_ROBOT_HOST`           | [`RobotConfig::host`]          |
//! | `PICK_ROBOT_DASHBOARD_PORT` | [`RobotConfig::dashboard_port`]|
//! | `PICK_ROBOT_SCRIPT_PORT`    | [`RobotConfig::script_port`]   |
//! | `PICK_ROBOT_SETTLE_MS`      | [`StationConfig::settle_delay_ms`] |

pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

pub const HOST_VAR: &str = "PICK_ROBOT_HOST";
pub const DASHBOARD_PORT_VAR: &str = "PICK_ROBOT_DASHBOARD_PORT";
pub const SCRIPT_PORT_VAR: &str = "PICK_ROBOT_SCRIPT_PORT";
pub const SETTLE_MS_VAR: &str = "PICK_ROBOT_SETTLE_MS";

/// Where the robot controller lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub host: String,
    /// Dashboard server port; receives the brake-release command.
    pub dashboard_port: u16,
    /// Primary interface port; receives the URScript program.
    pub script_port: u16,
    /// Sent verbatim to the dashboard port before every program.
    pub brake_release_command: String,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            dashboard_port: 29999,
            script_port: 30002,
            brake_release_command: "brake release\n".to_string(),
        }
    }
}

/// Settings for the pick station as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    pub robot: RobotConfig,
    /// Time to wait after each pick for the arm to finish moving.
    pub settle_delay_ms: u64,
    /// Request buffer of the station actor.
    pub queue_depth: usize,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            robot: RobotConfig::default(),
            settle_delay_ms: 9_500,
            queue_depth: 32,
        }
    }
}

impl StationConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Defaults overlaid with any `PICK_ROBOT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.robot.host = host;
        }
        if let Some(value) = lookup(DASHBOARD_PORT_VAR) {
            config.robot.dashboard_port = parse_var(DASHBOARD_PORT_VAR, value)?;
        }
        if let Some(value) = lookup(SCRIPT_PORT_VAR) {
            config.robot.script_port = parse_var(SCRIPT_PORT_VAR, value)?;
        }
        if let Some(value) = lookup(SETTLE_MS_VAR) {
            config.settle_delay_ms = parse_var(SETTLE_MS_VAR, value)?;
        }

        Ok(config)
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::InvalidValue {
        var,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_match_reference_cell() {
        let config = StationConfig::default();
        assert_eq!(config.robot.host, "localhost");
        assert_eq!(config.robot.dashboard_port, 29999);
        assert_eq!(config.robot.script_port, 30002);
        assert_eq!(config.robot.brake_release_command, "brake release\n");
        assert_eq!(config.settle_delay(), Duration::from_millis(9500));
    }

    #[test]
    fn test_overrides_apply() {
        let config = StationConfig::from_lookup(lookup_from(&[
            (HOST_VAR, "10.0.0.7"),
            (SCRIPT_PORT_VAR, "31002"),
            (SETTLE_MS_VAR, " 250 "),
        ]))
        .unwrap();

        assert_eq!(config.robot.host, "10.0.0.7");
        assert_eq!(config.robot.dashboard_port, 29999);
        assert_eq!(config.robot.script_port, 31002);
        assert_eq!(config.settle_delay_ms, 250);
    }

    #[test]
    fn test_bad_port_is_reported() {
        let err = StationConfig::from_lookup(lookup_from(&[(DASHBOARD_PORT_VAR, "70000")]))
            .unwrap_err();

        match err {
            ConfigError::InvalidValue { var, value, .. } => {
                assert_eq!(var, DASHBOARD_PORT_VAR);
                assert_eq!(value, "70000");
            }
        }
    }
    #[test]
    fn test_missing_fields_take_defaults_when_deserialized() {
        use serde::de::value::{Error as ValueError, MapDeserializer};

        let empty = MapDeserializer::<_, ValueError>::new(std::iter::empty::<(&str, u64)>());
        assert_eq!(StationConfig::deserialize(empty).unwrap(), StationConfig::default());

        let partial =
            MapDeserializer::<_, ValueError>::new([("settle_delay_ms", 250u64)].into_iter());
        let config = StationConfig::deserialize(partial).unwrap();
        assert_eq!(config.settle_delay_ms, 250);
        assert_eq!(config.queue_depth, StationConfig::default().queue_depth);
        assert_eq!(config.robot, RobotConfig::default());
    }
}
