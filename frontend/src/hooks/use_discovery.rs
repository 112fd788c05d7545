use std::rc::Rc;
use yew::prelude::*;
use shared::{DiscoveryContent, DiscoveryScreen, OutgoingMessage};
use crate::services::Logger;
use super::warn_if_unknown_profile;

const COMPONENT: &str = "talent-discovery";

pub enum DiscoveryAction {
    SelectProfile(String),
    SendMessage(OutgoingMessage),
}

#[derive(Clone, PartialEq)]
pub struct DiscoveryState(pub DiscoveryScreen);

impl Reducible for DiscoveryState {
    type Action = DiscoveryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut screen = self.0.clone();
        match action {
            DiscoveryAction::SelectProfile(profile_id) => {
                screen.select_profile(profile_id);
                warn_if_unknown_profile(COMPONENT, &screen.selection);
            }
            DiscoveryAction::SendMessage(outgoing) => {
                screen.send_message(outgoing);
            }
        }
        Rc::new(Self(screen))
    }
}

pub struct UseDiscoveryResult {
    pub state: DiscoveryScreen,
    pub actions: UseDiscoveryActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDiscoveryActions {
    pub select_profile: Callback<String>,
    pub send_message: Callback<OutgoingMessage>,
}

/// Talent discovery view state: nothing selected until the user picks a child
#[hook]
pub fn use_discovery(content: &DiscoveryContent) -> UseDiscoveryResult {
    let screen = use_reducer(|| DiscoveryState(DiscoveryScreen::new(content)));

    let select_profile = {
        let screen = screen.clone();
        Callback::from(move |profile_id: String| {
            Logger::info_with_component(COMPONENT, &format!("Profile selected: {}", profile_id));
            screen.dispatch(DiscoveryAction::SelectProfile(profile_id));
        })
    };

    let send_message = {
        let screen = screen.clone();
        Callback::from(move |outgoing: OutgoingMessage| {
            Logger::debug_with_component(
                COMPONENT,
                &format!("Sending message ({} chars)", outgoing.content.chars().count()),
            );
            screen.dispatch(DiscoveryAction::SendMessage(outgoing));
        })
    };

    UseDiscoveryResult {
        state: screen.0.clone(),
        actions: UseDiscoveryActions {
            select_profile,
            send_message,
        },
    }
}
