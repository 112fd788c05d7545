use yew::prelude::*;
use shared::{find_profile, skill_tree, ChildProfile};

#[derive(Properties, PartialEq)]
pub struct SkillTreeProps {
    pub profile_id: String,
    pub profiles: Vec<ChildProfile>,
}

#[function_component(SkillTree)]
pub fn skill_tree_view(props: &SkillTreeProps) -> Html {
    let Some(profile) = find_profile(&props.profiles, &props.profile_id) else {
        return html! {};
    };

    html! {
        <section class="skill-tree card">
            <h3>{format!("{}'s Skill Tree", profile.name)}</h3>
            <div class="skill-nodes">
                {for skill_tree(&profile.skills).into_iter().map(|node| html! {
                    <div class="skill-node">
                        <h4>{&node.category}</h4>
                        <div class="skill-stars">
                            {for node.stars.iter().map(|lit| html! {
                                <span class={classes!("star", lit.then(|| "lit"))}>{"★"}</span>
                            })}
                        </div>
                        <span class="skill-progress">{format!("{}% to next level", node.progress)}</span>
                    </div>
                })}
            </div>
        </section>
    }
}
