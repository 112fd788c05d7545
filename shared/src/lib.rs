use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;

pub mod catalog;
pub mod projections;
pub mod screens;
pub mod selection;

pub use catalog::{AppSettings, Catalog, CatalogError, DiscoveryContent, LearningContent, ProgressContent};
pub use projections::{learning_path, profile_insights, progress_data, skill_tree, times_chosen, trend_for};
pub use screens::{DiscoveryScreen, LearningScreen, OutgoingMessage, ProgressScreen};
pub use selection::{active_profile_id, find_profile, is_profile_active, ProfileSelection, SelectionView};

/// Highest level a skill can reach; the skill tree renders this many stars.
pub const MAX_SKILL_LEVEL: u8 = 5;

/// Progress (percent) a skill must exceed to be charted as trending up
pub const TRENDING_UP_THRESHOLD: u8 = 80;

/// A child whose learning is being followed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    /// Avatar image URI; a placeholder initial is shown when absent
    #[serde(default)]
    pub avatar: Option<String>,
    /// Display string such as "2 days ago"
    pub last_active: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl ChildProfile {
    /// First letter of the name, uppercased, for avatar placeholders
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// A competency area with its current level and progress towards the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub category: String,
    /// Observed range is 1-4
    pub level: u8,
    /// Percentage 0-100
    pub progress: u8,
}

/// How far out a learning goal is planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalTimeframe {
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "2year")]
    TwoYear,
    #[serde(rename = "3year")]
    ThreeYear,
}

impl GoalTimeframe {
    pub const ALL: [GoalTimeframe; 3] = [
        GoalTimeframe::OneYear,
        GoalTimeframe::TwoYear,
        GoalTimeframe::ThreeYear,
    ];

    /// Label used for the matching phase of the learning path
    pub fn phase_label(&self) -> &'static str {
        match self {
            GoalTimeframe::OneYear => "Year 1",
            GoalTimeframe::TwoYear => "Year 2",
            GoalTimeframe::ThreeYear => "Year 3",
        }
    }
}

impl fmt::Display for GoalTimeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalTimeframe::OneYear => write!(f, "1 year"),
            GoalTimeframe::TwoYear => write!(f, "2 years"),
            GoalTimeframe::ThreeYear => write!(f, "3 years"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Upcoming,
}

/// A learning objective chosen for a child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub timeframe: GoalTimeframe,
    pub status: GoalStatus,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageSender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "victoria")]
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub url: String,
    pub name: String,
}

/// One turn of the conversation with the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: MessageSender,
    pub content: String,
    /// ISO-8601 instant on the wire
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Generate a message ID in format: "message::<uuid>"
    pub fn generate_id() -> String {
        format!("message::{}", uuid::Uuid::new_v4())
    }

    pub fn from_user(content: String, attachments: Vec<Attachment>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Self::generate_id(),
            sender: MessageSender::User,
            content,
            timestamp,
            attachments,
        }
    }

    pub fn from_assistant(id: impl Into<String>, content: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            sender: MessageSender::Assistant,
            content,
            timestamp,
            attachments: Vec::new(),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == MessageSender::User
    }
}

/// A recorded or pending achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Display string such as "1 week ago", only set once completed
    #[serde(default)]
    pub date: Option<String>,
}

/// Direction a subject is heading on the progress chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
}

/// Chart-ready view of a single skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub subject: String,
    pub progress: u8,
    pub trend: Trend,
}

/// Goals grouped under one year of the learning path
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePhase {
    pub timeframe: GoalTimeframe,
    pub label: &'static str,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Strength,
    GrowthArea,
    Recommendation,
}

/// A short observation the assistant offers about a profile
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInsight {
    pub kind: InsightKind,
    pub title: String,
    pub detail: String,
}

/// Skill with its level expanded into lit/unlit stars
#[derive(Debug, Clone, PartialEq)]
pub struct SkillNode {
    pub category: String,
    pub level: u8,
    pub progress: u8,
    pub stars: Vec<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardAccent {
    #[default]
    Blue,
    Green,
    Purple,
}

impl CardAccent {
    pub fn css_class(&self) -> &'static str {
        match self {
            CardAccent::Blue => "accent-blue",
            CardAccent::Green => "accent-green",
            CardAccent::Purple => "accent-purple",
        }
    }
}

/// Static feature highlight shown on the progress screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightCardConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub accent: CardAccent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_goal_timeframe_wire_format() {
        assert_eq!(serde_json::to_string(&GoalTimeframe::OneYear).unwrap(), "\"1year\"");
        assert_eq!(serde_json::to_string(&GoalTimeframe::ThreeYear).unwrap(), "\"3year\"");
        let parsed: GoalTimeframe = serde_json::from_str("\"2year\"").unwrap();
        assert_eq!(parsed, GoalTimeframe::TwoYear);
    }

    #[test]
    fn test_message_wire_format() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        let message = Message::from_assistant("1", "Hi!".to_string(), at);
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["sender"], "victoria");
        assert_eq!(json["timestamp"], "2025-06-01T12:30:00Z");
        // No attachments means no attachments key
        assert!(json.get("attachments").is_none());

        let with_attachment: Message = serde_json::from_str(
            r#"{"id":"2","sender":"user","content":"look","timestamp":"2025-06-01T12:31:00Z",
                "attachments":[{"type":"image","url":"https://example.com/a.png","name":"a.png"}]}"#,
        )
        .unwrap();
        assert!(with_attachment.is_from_user());
        assert_eq!(with_attachment.attachments[0].kind, AttachmentKind::Image);
    }

    #[test]
    fn test_generate_message_id() {
        let first = Message::generate_id();
        let second = Message::generate_id();
        assert!(first.starts_with("message::"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_profile_initial() {
        let mut profile = ChildProfile {
            id: "1".to_string(),
            name: "emma".to_string(),
            age: 8,
            avatar: None,
            last_active: "today".to_string(),
            skills: vec![],
        };
        assert_eq!(profile.initial(), "E");

        profile.name = String::new();
        assert_eq!(profile.initial(), "?");
    }
}
