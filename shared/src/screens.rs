//! View state owned by each feature screen.
//!
//! Every screen owns its profile selection; the learning screen additionally
//! owns the chosen goals and the discovery screen the conversation. Lists are
//! append-only.

use chrono::{DateTime, Utc};

use crate::catalog::{DiscoveryContent, LearningContent, ProgressContent};
use crate::projections::progress_data;
use crate::selection::{ProfileSelection, SelectionView};
use crate::{Attachment, ChildProfile, Goal, InsightCardConfig, Message, Milestone, ProgressPoint};

/// A message as typed by the user, before it gets an id and timestamp
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutgoingMessage {
    pub content: String,
    pub attachments: Vec<Attachment>,
}

impl OutgoingMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            attachments: Vec::new(),
        }
    }
}

/// Talent discovery: pick a child, then chat with the assistant about them
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryScreen {
    pub selection: ProfileSelection,
    messages: Vec<Message>,
}

impl DiscoveryScreen {
    pub fn new(content: &DiscoveryContent) -> Self {
        Self::with_greeting_at(content, Utc::now())
    }

    /// Seed the conversation with the greeting stamped at `at`
    pub fn with_greeting_at(content: &DiscoveryContent, at: DateTime<Utc>) -> Self {
        let greeting = Message::from_assistant("1", content.greeting.clone(), at);
        Self {
            selection: ProfileSelection::unselected(content.profiles.clone()),
            messages: vec![greeting],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn view(&self) -> SelectionView<'_> {
        self.selection.view()
    }

    pub fn select_profile(&mut self, profile_id: String) {
        self.selection.select(profile_id);
    }

    /// Append a user message stamped with the current instant
    pub fn send_message(&mut self, outgoing: OutgoingMessage) -> &Message {
        self.send_message_at(outgoing, Utc::now())
    }

    /// Append a user message stamped with `at`. No reply is generated.
    pub fn send_message_at(&mut self, outgoing: OutgoingMessage, at: DateTime<Utc>) -> &Message {
        let message = Message::from_user(outgoing.content, outgoing.attachments, at);
        log::debug!(
            "Appending message {} ({} attachments)",
            message.id,
            message.attachments.len()
        );
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

/// Personalized learning: pick goals and see them laid out over three years
#[derive(Debug, Clone, PartialEq)]
pub struct LearningScreen {
    pub selection: ProfileSelection,
    goal_templates: Vec<Goal>,
    selected_goals: Vec<Goal>,
}

impl LearningScreen {
    pub fn new(content: &LearningContent) -> Self {
        Self {
            selection: ProfileSelection::first_active(content.profiles.clone()),
            goal_templates: content.goal_templates.clone(),
            selected_goals: Vec::new(),
        }
    }

    pub fn goal_templates(&self) -> &[Goal] {
        &self.goal_templates
    }

    pub fn selected_goals(&self) -> &[Goal] {
        &self.selected_goals
    }

    pub fn current_profile(&self) -> Option<&ChildProfile> {
        self.selection.current()
    }

    pub fn select_profile(&mut self, profile_id: String) {
        self.selection.select(profile_id);
    }

    /// Append a goal. The same goal may be chosen more than once.
    pub fn select_goal(&mut self, goal: Goal) {
        log::debug!("Goal '{}' added ({} total)", goal.title, self.selected_goals.len() + 1);
        self.selected_goals.push(goal);
    }
}

/// Progress tracking: charts, milestones and achievements per child
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressScreen {
    pub selection: ProfileSelection,
    milestones: Vec<Milestone>,
    insight_cards: Vec<InsightCardConfig>,
}

impl ProgressScreen {
    pub fn new(content: &ProgressContent) -> Self {
        Self {
            selection: ProfileSelection::first_active(content.profiles.clone()),
            milestones: content.milestones.clone(),
            insight_cards: content.insight_cards.clone(),
        }
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn insight_cards(&self) -> &[InsightCardConfig] {
        &self.insight_cards
    }

    pub fn current_profile(&self) -> Option<&ChildProfile> {
        self.selection.current()
    }

    pub fn select_profile(&mut self, profile_id: String) {
        self.selection.select(profile_id);
    }

    /// Chart data for the current profile, empty when none is selected
    pub fn progress_data(&self) -> Vec<ProgressPoint> {
        self.current_profile()
            .map(|profile| progress_data(&profile.skills))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttachmentKind, Catalog, GoalStatus, GoalTimeframe, MessageSender, Trend};
    use chrono::TimeZone;

    fn catalog() -> Catalog {
        Catalog::load_default().expect("embedded catalog should load")
    }

    #[test]
    fn test_discovery_starts_with_greeting_only() {
        let screen = DiscoveryScreen::new(&catalog().discovery);

        assert_eq!(screen.messages().len(), 1);
        assert_eq!(screen.messages()[0].sender, MessageSender::Assistant);
        assert_eq!(screen.view(), SelectionView::NoProfileSelected);
    }

    #[test]
    fn test_send_hello_appends_user_message() {
        let mut screen = DiscoveryScreen::new(&catalog().discovery);
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();

        screen.send_message_at(OutgoingMessage::text("Hello"), at);

        let messages = screen.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, MessageSender::User);
        assert_eq!(messages[1].content, "Hello");
        assert_eq!(messages[1].timestamp, at);
        assert_ne!(messages[1].id, messages[0].id);
    }

    #[test]
    fn test_send_message_uses_current_instant() {
        let mut screen = DiscoveryScreen::new(&catalog().discovery);
        let before = Utc::now();
        let timestamp = screen.send_message(OutgoingMessage::text("Hi")).timestamp;
        let after = Utc::now();

        assert!(before <= timestamp && timestamp <= after);
    }

    #[test]
    fn test_send_message_preserves_order_and_attachments() {
        let mut screen = DiscoveryScreen::new(&catalog().discovery);
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let drawing = Attachment {
            kind: AttachmentKind::Image,
            url: "https://example.com/drawing.png".to_string(),
            name: "drawing.png".to_string(),
        };

        screen.send_message_at(OutgoingMessage::text("first"), at);
        screen.send_message_at(
            OutgoingMessage {
                content: "   ".to_string(),
                attachments: vec![drawing.clone()],
            },
            at,
        );

        let contents: Vec<_> = screen.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(&contents[1..], &["first", "   "]);
        assert_eq!(screen.messages()[2].attachments, vec![drawing]);
    }

    #[test]
    fn test_discovery_selecting_lucas() {
        let mut screen = DiscoveryScreen::new(&catalog().discovery);

        screen.select_profile("1".to_string());
        assert_eq!(screen.selection.current().map(|p| p.name.as_str()), Some("Emma"));

        screen.select_profile("2".to_string());
        assert_eq!(screen.selection.current().map(|p| p.name.as_str()), Some("Lucas"));
    }

    #[test]
    fn test_learning_goals_append_without_dedup() {
        let mut screen = LearningScreen::new(&catalog().learning);
        let template = screen.goal_templates()[0].clone();
        let other = screen.goal_templates()[1].clone();

        screen.select_goal(template.clone());
        screen.select_goal(other.clone());
        screen.select_goal(template.clone());

        assert_eq!(screen.selected_goals(), &[template.clone(), other, template.clone()]);
        assert_eq!(crate::times_chosen(screen.selected_goals(), &template.id), 2);
    }

    #[test]
    fn test_learning_starts_on_first_profile() {
        let screen = LearningScreen::new(&catalog().learning);
        assert_eq!(screen.current_profile().map(|p| p.id.as_str()), Some("1"));
        assert!(screen.selected_goals().is_empty());
    }

    #[test]
    fn test_learning_accepts_goal_with_any_status() {
        let mut screen = LearningScreen::new(&catalog().learning);
        screen.select_goal(Goal {
            id: "custom".to_string(),
            category: "Music".to_string(),
            title: "Join the choir".to_string(),
            description: String::new(),
            timeframe: GoalTimeframe::TwoYear,
            status: GoalStatus::Upcoming,
        });
        assert_eq!(screen.selected_goals().len(), 1);
    }

    #[test]
    fn test_progress_data_follows_selection() {
        let mut screen = ProgressScreen::new(&catalog().progress);

        let emma = screen.progress_data();
        assert_eq!(emma[0].subject, "Mathematics");
        assert_eq!(emma[0].trend, Trend::Up);

        screen.select_profile("2".to_string());
        let lucas = screen.progress_data();
        assert_eq!(lucas.last().map(|p| p.progress), Some(70));

        screen.select_profile("nobody".to_string());
        assert!(screen.progress_data().is_empty());
        assert!(screen.current_profile().is_none());
    }
}
