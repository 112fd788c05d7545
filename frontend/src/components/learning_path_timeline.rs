use yew::prelude::*;
use shared::{learning_path, ChildProfile, Goal, GoalStatus};

#[derive(Properties, PartialEq)]
pub struct LearningPathTimelineProps {
    pub profile: ChildProfile,
    pub goals: Vec<Goal>,
}

fn status_label(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Active => "In progress",
        GoalStatus::Completed => "Completed",
        GoalStatus::Upcoming => "Upcoming",
    }
}

#[function_component(LearningPathTimeline)]
pub fn learning_path_timeline(props: &LearningPathTimelineProps) -> Html {
    let phases = learning_path(&props.goals);

    html! {
        <section class="learning-path card">
            <h3>{format!("{}'s 3-Year Learning Path", props.profile.name)}</h3>

            <ol class="timeline">
                <li class="timeline-phase start">
                    <h4>{"Today"}</h4>
                    <p>{format!("Age {} • {} skills tracked", props.profile.age, props.profile.skills.len())}</p>
                </li>
                {for phases.iter().map(|phase| html! {
                    <li class="timeline-phase">
                        <h4>{phase.label}</h4>
                        {if phase.goals.is_empty() {
                            html! { <p class="empty">{"No goals chosen for this year yet"}</p> }
                        } else {
                            html! {
                                <ul class="phase-goals">
                                    {for phase.goals.iter().map(|goal| html! {
                                        <li class="phase-goal">
                                            <strong>{&goal.title}</strong>
                                            <span class="goal-category">{&goal.category}</span>
                                            <span class="goal-status">{status_label(goal.status)}</span>
                                        </li>
                                    })}
                                </ul>
                            }
                        }}
                    </li>
                })}
            </ol>
        </section>
    }
}
