use yew::prelude::*;
use shared::CardAccent;

#[derive(Properties, PartialEq)]
pub struct InsightCardProps {
    pub title: String,
    pub description: String,
    #[prop_or_default]
    pub accent: CardAccent,
}

#[function_component(InsightCard)]
pub fn insight_card(props: &InsightCardProps) -> Html {
    html! {
        <div class={classes!("insight-card", props.accent.css_class())}>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}
