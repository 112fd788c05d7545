pub mod use_discovery;
pub mod use_learning_plan;
pub mod use_progress;

pub use use_discovery::use_discovery;
pub use use_learning_plan::use_learning_plan;
pub use use_progress::use_progress;

use shared::ProfileSelection;
use crate::services::Logger;

/// Warn when the active id names no profile, which leaves the screen on its placeholder
pub(crate) fn warn_if_unknown_profile(component: &str, selection: &ProfileSelection) {
    if let (Some(id), None) = (selection.active_id(), selection.current()) {
        Logger::warn_with_component(component, &format!("No profile with id '{}', showing placeholder", id));
    }
}
