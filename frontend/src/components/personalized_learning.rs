use yew::prelude::*;
use shared::LearningContent;
use crate::hooks::use_learning_plan;
use super::current_state::CurrentState;
use super::goal_setting::GoalSetting;
use super::learning_path_timeline::LearningPathTimeline;
use super::profile_selector::ProfileSelector;
use super::victoria_insights::VictoriaInsights;

#[derive(Properties, PartialEq)]
pub struct FeaturePersonalizedLearningProps {
    pub content: LearningContent,
    pub assistant_name: String,
}

#[function_component(FeaturePersonalizedLearning)]
pub fn feature_personalized_learning(props: &FeaturePersonalizedLearningProps) -> Html {
    let learning = use_learning_plan(&props.content);
    let screen = &learning.state;
    let current_profile = screen.current_profile().cloned();

    html! {
        <div class="feature personalized-learning">
            <section class="hero">
                <h1>{"Personalized Learning Path"}</h1>
                <p>
                    {format!(
                        "Set objectives and build a 3-year plan with {}, tailored to your child.",
                        props.assistant_name
                    )}
                </p>
            </section>

            <div class="feature-grid wide">
                <div class="sidebar">
                    <ProfileSelector
                        profiles={screen.selection.profiles().to_vec()}
                        active_profile={screen.selection.active_id().map(str::to_string)}
                        on_profile_select={learning.actions.select_profile.clone()}
                    />
                    {if let Some(profile) = &current_profile {
                        html! {
                            <VictoriaInsights
                                profile={profile.clone()}
                                assistant_name={props.assistant_name.clone()}
                            />
                        }
                    } else {
                        html! {}
                    }}
                </div>

                <div class="content">
                    {if let Some(profile) = current_profile {
                        html! {
                            <>
                                <CurrentState profile={profile.clone()} />
                                <GoalSetting
                                    templates={screen.goal_templates().to_vec()}
                                    selected_goals={screen.selected_goals().to_vec()}
                                    on_goal_select={learning.actions.select_goal.clone()}
                                />
                                <LearningPathTimeline
                                    profile={profile.clone()}
                                    goals={screen.selected_goals().to_vec()}
                                />

                                <section class="summary card">
                                    <h3>{"Progress Summary"}</h3>
                                    <div class="summary-grid">
                                        {for profile.skills.iter().map(|skill| html! {
                                            <div class="summary-item">
                                                <span class="summary-icon">{"⭐"}</span>
                                                <div>
                                                    <h4>{&skill.category}</h4>
                                                    <p>{format!("Level {} • {}% mastered", skill.level, skill.progress)}</p>
                                                </div>
                                            </div>
                                        })}
                                    </div>
                                </section>
                            </>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </div>
    }
}
