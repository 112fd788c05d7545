use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{times_chosen, Goal};

#[derive(Properties, PartialEq)]
pub struct GoalSettingProps {
    /// Goals offered for selection
    pub templates: Vec<Goal>,
    pub selected_goals: Vec<Goal>,
    pub on_goal_select: Callback<Goal>,
}

#[function_component(GoalSetting)]
pub fn goal_setting(props: &GoalSettingProps) -> Html {
    html! {
        <section class="goal-setting card">
            <h3>{"Set Learning Goals"}</h3>
            <p class="hint">{format!("{} goals chosen", props.selected_goals.len())}</p>

            <div class="goal-grid">
                {for props.templates.iter().map(|template| {
                    // Chosen goals stay clickable; picking one again adds it again
                    let times_chosen = times_chosen(&props.selected_goals, &template.id);

                    let on_click = {
                        let on_select = props.on_goal_select.clone();
                        let goal = template.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(goal.clone()))
                    };

                    html! {
                        <button
                            key={template.id.clone()}
                            class={classes!("goal-option", (times_chosen > 0).then(|| "chosen"))}
                            onclick={on_click}
                        >
                            <span class="goal-category">{&template.category}</span>
                            <h4>{&template.title}</h4>
                            <p>{&template.description}</p>
                            <span class="goal-timeframe">{template.timeframe.to_string()}</span>
                            {if times_chosen > 0 {
                                html! { <span class="goal-chosen-indicator">{format!("✓ x{}", times_chosen)}</span> }
                            } else {
                                html! {}
                            }}
                        </button>
                    }
                })}
            </div>
        </section>
    }
}
