use std::rc::Rc;
use yew::prelude::*;
use shared::{Goal, LearningContent, LearningScreen};
use crate::services::Logger;
use super::warn_if_unknown_profile;

const COMPONENT: &str = "personalized-learning";

pub enum LearningAction {
    SelectProfile(String),
    SelectGoal(Goal),
}

#[derive(Clone, PartialEq)]
pub struct LearningState(pub LearningScreen);

impl Reducible for LearningState {
    type Action = LearningAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut screen = self.0.clone();
        match action {
            LearningAction::SelectProfile(profile_id) => {
                screen.select_profile(profile_id);
                warn_if_unknown_profile(COMPONENT, &screen.selection);
            }
            LearningAction::SelectGoal(goal) => screen.select_goal(goal),
        }
        Rc::new(Self(screen))
    }
}

pub struct UseLearningPlanResult {
    pub state: LearningScreen,
    pub actions: UseLearningPlanActions,
}

#[derive(Clone, PartialEq)]
pub struct UseLearningPlanActions {
    pub select_profile: Callback<String>,
    pub select_goal: Callback<Goal>,
}

#[hook]
pub fn use_learning_plan(content: &LearningContent) -> UseLearningPlanResult {
    let screen = use_reducer(|| LearningState(LearningScreen::new(content)));

    let select_profile = {
        let screen = screen.clone();
        Callback::from(move |profile_id: String| {
            Logger::info_with_component(COMPONENT, &format!("Profile selected: {}", profile_id));
            screen.dispatch(LearningAction::SelectProfile(profile_id));
        })
    };

    let select_goal = {
        let screen = screen.clone();
        Callback::from(move |goal: Goal| {
            Logger::info_with_component(COMPONENT, &format!("Goal chosen: {}", goal.title));
            screen.dispatch(LearningAction::SelectGoal(goal));
        })
    };

    UseLearningPlanResult {
        state: screen.0.clone(),
        actions: UseLearningPlanActions {
            select_profile,
            select_goal,
        },
    }
}
