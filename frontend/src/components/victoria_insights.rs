use yew::prelude::*;
use shared::{profile_insights, ChildProfile, InsightKind};

#[derive(Properties, PartialEq)]
pub struct VictoriaInsightsProps {
    pub profile: ChildProfile,
    pub assistant_name: String,
}

fn insight_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Strength => "⭐",
        InsightKind::GrowthArea => "🌱",
        InsightKind::Recommendation => "💡",
    }
}

#[function_component(VictoriaInsights)]
pub fn victoria_insights(props: &VictoriaInsightsProps) -> Html {
    let insights = profile_insights(&props.profile);

    html! {
        <aside class="assistant-insights card">
            <h3>{format!("{}'s Insights", props.assistant_name)}</h3>
            {if insights.is_empty() {
                html! { <p class="empty">{"Not enough data for insights yet"}</p> }
            } else {
                html! {
                    <ul class="insight-list">
                        {for insights.iter().map(|insight| html! {
                            <li class="insight">
                                <span class="insight-icon">{insight_icon(insight.kind)}</span>
                                <div>
                                    <h4>{&insight.title}</h4>
                                    <p>{&insight.detail}</p>
                                </div>
                            </li>
                        })}
                    </ul>
                }
            }}
        </aside>
    }
}
