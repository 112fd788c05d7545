//! Static content for the three screens.
//!
//! The catalog is injected into each screen at construction. The bundled copy
//! lives in `data/catalog.json`; tests and other hosts can parse their own.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::{ChildProfile, Goal, InsightCardConfig, Milestone, MAX_SKILL_LEVEL};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("A profile on the {screen} screen has an empty id")]
    EmptyProfileId { screen: &'static str },
    #[error("Profile id '{id}' appears more than once on the {screen} screen")]
    DuplicateProfileId { screen: &'static str, id: String },
    #[error("Skill '{category}' of profile '{profile}' has progress {progress}, expected 0-100")]
    ProgressOutOfRange {
        profile: String,
        category: String,
        progress: u8,
    },
    #[error("Profile '{profile}' has age 0")]
    InvalidAge { profile: String },
    #[error("Skill '{category}' of profile '{profile}' has level {level}, expected 1-{max}", max = MAX_SKILL_LEVEL)]
    InvalidLevel {
        profile: String,
        category: String,
        level: u8,
    },
}

/// Application-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub assistant_name: String,
    pub enable_debug_logging: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            assistant_name: "Victoria".to_string(),
            enable_debug_logging: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryContent {
    pub profiles: Vec<ChildProfile>,
    /// First message of every conversation, authored by the assistant
    pub greeting: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningContent {
    pub profiles: Vec<ChildProfile>,
    /// Goals offered by the goal picker
    pub goal_templates: Vec<Goal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressContent {
    pub profiles: Vec<ChildProfile>,
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub insight_cards: Vec<InsightCardConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub settings: AppSettings,
    pub discovery: DiscoveryContent,
    pub learning: LearningContent,
    pub progress: ProgressContent,
}

impl Catalog {
    /// Parse and validate the catalog bundled with the crate
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        log::debug!(
            "Catalog loaded: {} discovery, {} learning, {} progress profiles",
            catalog.discovery.profiles.len(),
            catalog.learning.profiles.len(),
            catalog.progress.profiles.len()
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_profiles("discovery", &self.discovery.profiles)?;
        validate_profiles("learning", &self.learning.profiles)?;
        validate_profiles("progress", &self.progress.profiles)
    }
}

fn validate_profiles(screen: &'static str, profiles: &[ChildProfile]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for profile in profiles {
        if profile.id.is_empty() {
            return Err(CatalogError::EmptyProfileId { screen });
        }
        if !seen.insert(profile.id.as_str()) {
            return Err(CatalogError::DuplicateProfileId {
                screen,
                id: profile.id.clone(),
            });
        }
        if profile.age == 0 {
            return Err(CatalogError::InvalidAge {
                profile: profile.id.clone(),
            });
        }
        for skill in &profile.skills {
            if skill.progress > 100 {
                return Err(CatalogError::ProgressOutOfRange {
                    profile: profile.id.clone(),
                    category: skill.category.clone(),
                    progress: skill.progress,
                });
            }
            if skill.level == 0 || skill.level > MAX_SKILL_LEVEL {
                return Err(CatalogError::InvalidLevel {
                    profile: profile.id.clone(),
                    category: skill.category.clone(),
                    level: skill.level,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_catalog(discovery_profiles: &str) -> String {
        format!(
            r#"{{
                "discovery": {{ "profiles": {}, "greeting": "Hi!" }},
                "learning": {{ "profiles": [], "goal_templates": [] }},
                "progress": {{ "profiles": [], "milestones": [] }}
            }}"#,
            discovery_profiles
        )
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load_default().unwrap();

        let names: Vec<_> = catalog.discovery.profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Emma", "Lucas"]);
        assert_eq!(catalog.learning.profiles[0].skills.len(), 5);
        assert_eq!(catalog.progress.profiles[0].skills.len(), 4);
        assert_eq!(catalog.progress.milestones.len(), 3);
        assert!(!catalog.learning.goal_templates.is_empty());
        assert_eq!(catalog.settings.assistant_name, "Victoria");
    }

    #[test]
    fn test_settings_default_when_missing() {
        let catalog = Catalog::from_json_str(&minimal_catalog("[]")).unwrap();
        assert_eq!(catalog.settings, AppSettings::default());
        assert!(catalog.progress.insight_cards.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_profile_ids() {
        let profiles = r#"[
            { "id": "1", "name": "Emma", "age": 8, "last_active": "today" },
            { "id": "1", "name": "Lucas", "age": 12, "last_active": "today" }
        ]"#;

        let err = Catalog::from_json_str(&minimal_catalog(profiles)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateProfileId { screen: "discovery", ref id } if id == "1"
        ));
    }

    #[test]
    fn test_rejects_empty_profile_id() {
        let profiles = r#"[{ "id": "", "name": "Emma", "age": 8, "last_active": "today" }]"#;
        let err = Catalog::from_json_str(&minimal_catalog(profiles)).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyProfileId { .. }));
    }

    #[test]
    fn test_rejects_progress_over_100() {
        let profiles = r#"[{
            "id": "1", "name": "Emma", "age": 8, "last_active": "today",
            "skills": [{ "category": "Arts", "level": 2, "progress": 140 }]
        }]"#;

        let err = Catalog::from_json_str(&minimal_catalog(profiles)).unwrap_err();
        assert!(matches!(err, CatalogError::ProgressOutOfRange { progress: 140, .. }));
        assert_eq!(
            err.to_string(),
            "Skill 'Arts' of profile '1' has progress 140, expected 0-100"
        );
    }

    #[test]
    fn test_rejects_level_zero() {
        let profiles = r#"[{
            "id": "1", "name": "Emma", "age": 8, "last_active": "today",
            "skills": [{ "category": "Arts", "level": 0, "progress": 10 }]
        }]"#;
        let err = Catalog::from_json_str(&minimal_catalog(profiles)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLevel { level: 0, .. }));
    }

    #[test]
    fn test_rejects_level_above_max() {
        let profiles = r#"[{
            "id": "1", "name": "Emma", "age": 8, "last_active": "today",
            "skills": [
                { "category": "Music", "level": 5, "progress": 10 },
                { "category": "Arts", "level": 9, "progress": 10 }
            ]
        }]"#;

        let err = Catalog::from_json_str(&minimal_catalog(profiles)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLevel { level: 9, ref category, .. } if category == "Arts"));
        assert_eq!(err.to_string(), "Skill 'Arts' of profile '1' has level 9, expected 1-5");
    }

    #[test]
    fn test_rejects_age_zero() {
        let profiles = r#"[{ "id": "1", "name": "Emma", "age": 0, "last_active": "today" }]"#;
        let err = Catalog::from_json_str(&minimal_catalog(profiles)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidAge { ref profile } if profile == "1"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
