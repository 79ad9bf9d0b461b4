/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::time::Duration;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Configuration for the wireless charging module
///
/// Loaded from TOML in XDG-compliant directories. The protocol validation
/// constants are fixed by the WLC protocol and are not configurable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WlcConfig {
    /// Channel capacities
    pub limits: LimitsConfig,
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
}

/// Channel capacity configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Capacity of the module inbox, shared by requests and charging
    /// notifications; a full inbox rejects both
    pub inbox_capacity: usize,
}

/// Timeout-related configuration values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// How long `stop` waits for the dispatcher to drain, in milliseconds
    pub module_shutdown_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            inbox_capacity: 255,
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            module_shutdown_timeout_ms: 10_000,
        }
    }
}

impl WlcConfig {
    /// Module shutdown timeout as a [`Duration`]
    pub const fn module_shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.module_shutdown_timeout_ms)
    }

    /// Parses a configuration document; absent keys keep their defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(document)
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// Looks for `nfc-wlc/config.toml` under `$XDG_CONFIG_HOME` and the XDG
    /// config search path. A missing file yields the defaults; an unreadable
    /// or malformed one is logged and also yields the defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("nfc-wlc") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        let Some(path) = xdg_dirs.find_config_file("config.toml") else {
            info!("No configuration file found, using defaults");
            return Self::default();
        };

        info!("Loading configuration from: {}", path.display());
        match std::fs::read_to_string(&path) {
            Ok(document) => match Self::from_toml_str(&document) {
                Ok(config) => config,
                Err(e) => {
                    error!("Failed to parse configuration file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read configuration file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: WlcConfig = WlcConfig::load();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_keep_remaining_defaults() {
        let config = WlcConfig::from_toml_str(
            r#"
            [limits]
            inbox_capacity = 4
            "#,
        )
        .expect("valid document");

        assert_eq!(config.limits.inbox_capacity, 4);
        assert_eq!(config.module_shutdown_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(WlcConfig::from_toml_str("[limits]\ninbox_capacity = \"many\"").is_err());
    }
}
