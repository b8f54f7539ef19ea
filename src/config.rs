//! Generator configuration and presets

use crate::{GraphGenError, Result};
use serde::{Serialize, Deserialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub use crate::mesh::DedupMode;

/// Orders of the reference graph batch
pub const PRESET_ORDERS: [usize; 3] = [3, 10, 15];

/// Largest supported coordinate precision
pub const MAX_PRECISION: usize = 9;

/// Parameters for one generated graph
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Subdivision depth
    pub order: usize,
    /// Number of cops
    pub cops: usize,
    /// Number of robbers
    pub robbers: usize,
    /// Turn budget; derived from the vertex count when absent
    pub max_turn: Option<usize>,
    /// Digits after the decimal point
    pub precision: usize,
    /// How motif centers are deduplicated
    pub dedup: DedupMode,
}

impl GeneratorConfig {
    /// Reference triangle graph of the given order
    pub fn triangle(order: usize) -> Self {
        GeneratorConfig {
            order,
            cops: 3,
            robbers: 3,
            max_turn: None,
            precision: crate::format::GENERATED_PRECISION,
            dedup: DedupMode::Legacy,
        }
    }

    /// The reference batch
    pub fn presets() -> Vec<Self> {
        PRESET_ORDERS.iter().map(|&order| Self::triangle(order)).collect()
    }

    /// File name used for this configuration in batch output
    pub fn file_name(&self) -> String {
        format!("triangle{}.txt", self.order)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.order == 0 {
            return Err(GraphGenError::InvalidConfig(
                "Order must be at least 1".to_string()
            ));
        }

        if self.robbers == 0 {
            return Err(GraphGenError::InvalidConfig(
                "Robber count must be positive".to_string()
            ));
        }

        if self.precision > MAX_PRECISION {
            return Err(GraphGenError::InvalidConfig(format!(
                "Precision {} exceeds the maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }

        Ok(())
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save as pretty-printed JSON
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::triangle(PRESET_ORDERS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = GeneratorConfig::default();
        assert!(config.validate().is_ok());

        config.order = 0;
        assert!(config.validate().is_err());

        config.order = 3;
        config.precision = 12;
        assert!(config.validate().is_err());

        config.precision = 5;
        config.robbers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_presets() {
        let presets = GeneratorConfig::presets();
        let names: Vec<_> = presets.iter().map(|c| c.file_name()).collect();
        assert_eq!(names, vec!["triangle3.txt", "triangle10.txt", "triangle15.txt"]);
        assert!(presets.iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "order": 7, "dedup": "unified" }"#).unwrap();
        assert_eq!(config.order, 7);
        assert_eq!(config.cops, 3);
        assert_eq!(config.max_turn, None);
        assert_eq!(config.dedup, DedupMode::Unified);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = GeneratorConfig::triangle(10);
        config.max_turn = Some(50);
        config.save_json(&path).unwrap();

        assert_eq!(GeneratorConfig::load_json(&path).unwrap(), config);
    }
}
