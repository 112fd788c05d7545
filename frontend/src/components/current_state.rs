use yew::prelude::*;
use shared::ChildProfile;

#[derive(Properties, PartialEq)]
pub struct CurrentStateProps {
    pub profile: ChildProfile,
}

#[function_component(CurrentState)]
pub fn current_state(props: &CurrentStateProps) -> Html {
    let profile = &props.profile;

    html! {
        <section class="current-state card">
            <h3>{format!("Where {} is today", profile.name)}</h3>

            {if profile.skills.is_empty() {
                html! { <p class="empty">{"No skills recorded yet"}</p> }
            } else {
                html! {
                    <div class="skill-bars">
                        {for profile.skills.iter().map(|skill| html! {
                            <div class="skill-bar">
                                <div class="skill-bar-header">
                                    <span class="skill-name">{&skill.category}</span>
                                    <span class="skill-level">{format!("Level {}", skill.level)}</span>
                                </div>
                                <div class="progress-track">
                                    <div class="progress-fill" style={format!("width: {}%", skill.progress)}></div>
                                </div>
                                <span class="skill-progress">{format!("{}%", skill.progress)}</span>
                            </div>
                        })}
                    </div>
                }
            }}
        </section>
    }
}
