use yew::prelude::*;
use shared::Milestone;

#[derive(Properties, PartialEq)]
pub struct MilestoneListProps {
    pub milestones: Vec<Milestone>,
}

#[function_component(MilestoneList)]
pub fn milestone_list(props: &MilestoneListProps) -> Html {
    html! {
        <section class="milestones card">
            <h3>{"Milestones"}</h3>
            <ul class="milestone-list">
                {for props.milestones.iter().map(|milestone| {
                    let status = if milestone.completed {
                        milestone.date.clone().unwrap_or_else(|| "Completed".to_string())
                    } else {
                        "In progress".to_string()
                    };

                    html! {
                        <li
                            key={milestone.id.clone()}
                            class={classes!("milestone", milestone.completed.then(|| "completed"))}
                        >
                            <span class="milestone-marker">{if milestone.completed { "✓" } else { "○" }}</span>
                            <div class="milestone-body">
                                <h4>{&milestone.title}</h4>
                                <p>{&milestone.description}</p>
                            </div>
                            <span class="milestone-status">{status}</span>
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}
