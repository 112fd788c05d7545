use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{is_profile_active, ChildProfile};

#[derive(Properties, PartialEq)]
pub struct ProfileSelectorProps {
    pub profiles: Vec<ChildProfile>,
    /// May name a profile that is not in the list, in which case none is highlighted
    pub active_profile: Option<String>,
    pub on_profile_select: Callback<String>,
}

#[function_component(ProfileSelector)]
pub fn profile_selector(props: &ProfileSelectorProps) -> Html {
    html! {
        <div class="profile-selector card">
            <h2>{"Children's Profiles"}</h2>

            <div class="profile-list">
                {for props.profiles.iter().map(|profile| {
                    let is_active = is_profile_active(&props.profiles, props.active_profile.as_deref(), &profile.id);

                    let on_click = {
                        let on_select = props.on_profile_select.clone();
                        let profile_id = profile.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_select.emit(profile_id.clone());
                        })
                    };

                    html! {
                        <button
                            key={profile.id.clone()}
                            class={classes!("profile-item", is_active.then(|| "active"))}
                            onclick={on_click}
                        >
                            {if let Some(avatar) = &profile.avatar {
                                html! { <img class="profile-avatar" src={avatar.clone()} alt={profile.name.clone()} /> }
                            } else {
                                html! { <div class="profile-avatar placeholder">{profile.initial()}</div> }
                            }}
                            <div class="profile-details">
                                <h3>{&profile.name}</h3>
                                <p class="profile-age">{format!("Age: {}", profile.age)}</p>
                                <p class="profile-last-active">{format!("Last active: {}", profile.last_active)}</p>
                            </div>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
