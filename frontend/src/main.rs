use anyhow::Context;
use yew::prelude::*;
use shared::Catalog;

mod components;
mod hooks;
mod services;

use components::{Feature, FeatureLayout, FeaturePersonalizedLearning, FeatureProgressTracking, FeatureTalentDiscovery};
use services::{ConsoleLogger, Logger};

fn load_catalog() -> anyhow::Result<Catalog> {
    Catalog::load_default().context("Bundled catalog is invalid")
}

#[derive(Properties, PartialEq)]
struct AppProps {
    catalog: Catalog,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let active_feature = use_state(|| Feature::TalentDiscovery);

    let on_navigate = {
        let active_feature = active_feature.clone();
        Callback::from(move |feature: Feature| {
            Logger::debug_with_component("app", &format!("Navigating to {:?}", feature));
            active_feature.set(feature);
        })
    };

    let catalog = &props.catalog;
    let assistant_name = catalog.settings.assistant_name.clone();

    html! {
        <FeatureLayout active={*active_feature} {on_navigate}>
            {match *active_feature {
                Feature::TalentDiscovery => html! {
                    <FeatureTalentDiscovery content={catalog.discovery.clone()} {assistant_name} />
                },
                Feature::PersonalizedLearning => html! {
                    <FeaturePersonalizedLearning content={catalog.learning.clone()} {assistant_name} />
                },
                Feature::ProgressTracking => html! {
                    <FeatureProgressTracking content={catalog.progress.clone()} />
                },
            }}
        </FeatureLayout>
    }
}

#[derive(Properties, PartialEq)]
struct LoadErrorProps {
    message: String,
}

#[function_component(LoadError)]
fn load_error(props: &LoadErrorProps) -> Html {
    html! {
        <main class="main">
            <div class="container">
                <div class="form-message error">
                    <strong>{"Something went wrong while starting up."}</strong>
                    <p>{&props.message}</p>
                </div>
            </div>
        </main>
    }
}

fn main() {
    match load_catalog() {
        Ok(catalog) => {
            ConsoleLogger::init(catalog.settings.enable_debug_logging);
            Logger::info_with_component("app", "Catalog loaded, starting app");
            yew::Renderer::<App>::with_props(AppProps { catalog }).render();
        }
        Err(e) => {
            ConsoleLogger::init(false);
            let message = format!("{:#}", e);
            Logger::error_with_component("app", &message);
            yew::Renderer::<LoadError>::with_props(LoadErrorProps { message }).render();
        }
    }
}
