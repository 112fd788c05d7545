pub mod feature_layout;
pub mod profile_selector;

pub mod talent_discovery;
pub mod personalized_learning;
pub mod progress_tracking;

pub mod chat_interface;
pub mod current_state;
pub mod goal_setting;
pub mod insight_card;
pub mod learning_path_timeline;
pub mod milestone_list;
pub mod progress_chart;
pub mod skill_tree;
pub mod victoria_insights;

pub use feature_layout::{Feature, FeatureLayout};
pub use personalized_learning::FeaturePersonalizedLearning;
pub use progress_tracking::FeatureProgressTracking;
pub use talent_discovery::FeatureTalentDiscovery;
