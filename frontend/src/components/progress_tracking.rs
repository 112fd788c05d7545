use yew::prelude::*;
use shared::ProgressContent;
use crate::hooks::use_progress;
use super::insight_card::InsightCard;
use super::milestone_list::MilestoneList;
use super::profile_selector::ProfileSelector;
use super::progress_chart::ProgressChart;

#[derive(Properties, PartialEq)]
pub struct FeatureProgressTrackingProps {
    pub content: ProgressContent,
}

#[function_component(FeatureProgressTracking)]
pub fn feature_progress_tracking(props: &FeatureProgressTrackingProps) -> Html {
    let progress = use_progress(&props.content);
    let screen = &progress.state;

    html! {
        <div class="feature progress-tracking">
            <section class="hero">
                <h1>{"Progress Tracking"}</h1>
                <p>
                    {"Monitor your child's educational journey with insights that help you make \
                      informed decisions about their learning path."}
                </p>
                <div class="insight-cards">
                    {for screen.insight_cards().iter().map(|card| html! {
                        <InsightCard
                            title={card.title.clone()}
                            description={card.description.clone()}
                            accent={card.accent}
                        />
                    })}
                </div>
            </section>

            <div class="feature-grid wide">
                <div class="sidebar">
                    <ProfileSelector
                        profiles={screen.selection.profiles().to_vec()}
                        active_profile={screen.selection.active_id().map(str::to_string)}
                        on_profile_select={progress.actions.select_profile.clone()}
                    />
                </div>

                <div class="content">
                    {if let Some(profile) = screen.current_profile() {
                        html! {
                            <>
                                <ProgressChart data={screen.progress_data()} />
                                <MilestoneList milestones={screen.milestones().to_vec()} />

                                <section class="achievements card">
                                    <h3>{"Recent Achievements"}</h3>
                                    <div class="summary-grid">
                                        {for profile.skills.iter().map(|skill| html! {
                                            <div class="summary-item">
                                                <span class="summary-icon">{"⭐"}</span>
                                                <div>
                                                    <h4>{&skill.category}</h4>
                                                    <p>{format!("Reached Level {} with {}% mastery", skill.level, skill.progress)}</p>
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
