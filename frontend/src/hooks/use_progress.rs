use std::rc::Rc;
use yew::prelude::*;
use shared::{ProgressContent, ProgressScreen};
use crate::services::Logger;
use super::warn_if_unknown_profile;

const COMPONENT: &str = "progress-tracking";

#[derive(Clone, PartialEq)]
pub struct ProgressState(pub ProgressScreen);

impl Reducible for ProgressState {
    /// Profile id to make active
    type Action = String;

    fn reduce(self: Rc<Self>, profile_id: Self::Action) -> Rc<Self> {
        let mut screen = self.0.clone();
        screen.select_profile(profile_id);
        warn_if_unknown_profile(COMPONENT, &screen.selection);
        Rc::new(Self(screen))
    }
}

pub struct UseProgressResult {
    pub state: ProgressScreen,
    pub actions: UseProgressActions,
}

#[derive(Clone, PartialEq)]
pub struct UseProgressActions {
    pub select_profile: Callback<String>,
}

#[hook]
pub fn use_progress(content: &ProgressContent) -> UseProgressResult {
    let screen = use_reducer(|| ProgressState(ProgressScreen::new(content)));

    let select_profile = {
        let screen = screen.clone();
        Callback::from(move |profile_id: String| {
            Logger::info_with_component(COMPONENT, &format!("Profile selected: {}", profile_id));
            screen.dispatch(profile_id);
        })
    };

    UseProgressResult {
        state: screen.0.clone(),
        actions: UseProgressActions { select_profile },
    }
}
