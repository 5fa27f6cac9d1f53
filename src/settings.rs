//! Session settings
//!
//! Frontends persist these however they like; the core only defines the
//! shape and the JSON round-trip. Unknown fields are tolerated so older
//! saved blobs keep loading.

use serde::{Deserialize, Serialize};

use crate::sim::PlayerKind;

/// User preferences for starting a session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for reproducible sessions; None picks one at startup
    pub seed: Option<u64>,
    /// Start sessions with the empowered player variant
    pub empowered_start: bool,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn player_kind(&self) -> PlayerKind {
        if self.empowered_start {
            PlayerKind::Empowered
        } else {
            PlayerKind::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(42),
            empowered_start: true,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_and_unknown_fields_tolerated() {
        let settings = Settings::from_json(r#"{"seed": 7, "legacy_field": true}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.empowered_start);

        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_player_kind_mapping() {
        assert_eq!(Settings::default().player_kind(), PlayerKind::Normal);
        let settings = Settings {
            empowered_start: true,
            ..Default::default()
        };
        assert_eq!(settings.player_kind(), PlayerKind::Empowered);
    }
}
