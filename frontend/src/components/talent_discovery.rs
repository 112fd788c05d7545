use yew::prelude::*;
use shared::{DiscoveryContent, SelectionView};
use crate::hooks::use_discovery;
use super::chat_interface::ChatInterface;
use super::profile_selector::ProfileSelector;
use super::skill_tree::SkillTree;

#[derive(Properties, PartialEq)]
pub struct FeatureTalentDiscoveryProps {
    pub content: DiscoveryContent,
    pub assistant_name: String,
}

#[function_component(FeatureTalentDiscovery)]
pub fn feature_talent_discovery(props: &FeatureTalentDiscoveryProps) -> Html {
    let discovery = use_discovery(&props.content);
    let screen = &discovery.state;

    html! {
        <div class="feature talent-discovery">
            <section class="hero">
                <h1>{"Talent Discovery"}</h1>
                <p>
                    {format!(
                        "Chat with {} to uncover your child's strengths and interests.",
                        props.assistant_name
                    )}
                </p>
            </section>

            <div class="feature-grid">
                <div class="sidebar">
                    <ProfileSelector
                        profiles={screen.selection.profiles().to_vec()}
                        active_profile={screen.selection.active_id().map(str::to_string)}
                        on_profile_select={discovery.actions.select_profile.clone()}
                    />
                </div>

                <div class="content">
                    {match screen.view() {
                        SelectionView::ProfileSelected(profile) => html! {
                            <>
                                <SkillTree
                                    profile_id={profile.id.clone()}
                                    profiles={screen.selection.profiles().to_vec()}
                                />
                                <ChatInterface
                                    messages={screen.messages().to_vec()}
                                    assistant_name={props.assistant_name.clone()}
                                    on_send_message={discovery.actions.send_message.clone()}
                                />
                            </>
                        },
                        SelectionView::NoProfileSelected => html! {
                            <div class="placeholder card">
                                <h3>{"Select a Profile"}</h3>
                                <p>
                                    {format!(
                                        "Choose a child's profile to start exploring their talents with {}",
                                        props.assistant_name
                                    )}
                                </p>
                            </div>
                        },
                    }}
                </div>
            </div>
        </div>
    }
}
