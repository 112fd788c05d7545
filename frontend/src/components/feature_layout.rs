use yew::prelude::*;
use web_sys::MouseEvent;

/// The three screens reachable from the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    TalentDiscovery,
    PersonalizedLearning,
    ProgressTracking,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::TalentDiscovery,
        Feature::PersonalizedLearning,
        Feature::ProgressTracking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::TalentDiscovery => "Talent Discovery",
            Feature::PersonalizedLearning => "Learning Path",
            Feature::ProgressTracking => "Progress",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureLayoutProps {
    pub active: Feature,
    pub on_navigate: Callback<Feature>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(FeatureLayout)]
pub fn feature_layout(props: &FeatureLayoutProps) -> Html {
    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Learning Companion"}</h1>
                    <nav class="feature-nav">
                        {for Feature::ALL.iter().map(|feature| {
                            let feature = *feature;
                            let onclick = {
                                let on_navigate = props.on_navigate.clone();
                                Callback::from(move |_: MouseEvent| on_navigate.emit(feature))
                            };
                            html! {
                                <button
                                    class={classes!("nav-tab", (feature == props.active).then(|| "active"))}
                                    {onclick}
                                >
                                    {feature.label()}
                                </button>
                            }
                        })}
                    </nav>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    {props.children.clone()}
                </div>
            </main>
        </>
    }
}
