use yew::prelude::*;
use shared::{ProgressPoint, Trend};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 320;

fn bar_color(trend: Trend) -> RGBColor {
    match trend {
        Trend::Up => RGBColor(72, 187, 120),
        Trend::Stable => RGBColor(102, 126, 234),
    }
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Stable => "→",
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressChartProps {
    pub data: Vec<ProgressPoint>,
}

pub struct ProgressChart {
    canvas_ref: NodeRef,
}

impl Component for ProgressChart {
    type Message = ();
    type Properties = ProgressChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // Runs after every re-render, so new props are always redrawn
        self.draw_chart(&ctx.props().data);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let data = &ctx.props().data;

        html! {
            <section class="progress-chart card">
                <h3>{"Subject Progress"}</h3>

                {if data.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No progress data available for chart"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class="chart-content">
                                <canvas
                                    ref={self.canvas_ref.clone()}
                                    class="progress-chart-canvas"
                                    width={CANVAS_WIDTH.to_string()}
                                    height={CANVAS_HEIGHT.to_string()}
                                ></canvas>
                            </div>
                            <ul class="chart-legend">
                                {for data.iter().map(|point| html! {
                                    <li class={classes!("legend-item", matches!(point.trend, Trend::Up).then(|| "trending-up"))}>
                                        <span class="legend-subject">{&point.subject}</span>
                                        <span class="legend-value">
                                            {format!("{}% {}", point.progress, trend_marker(point.trend))}
                                        </span>
                                    </li>
                                })}
                            </ul>
                        </>
                    }
                }}
            </section>
        }
    }
}

impl ProgressChart {
    fn draw_chart(&self, points: &[ProgressPoint]) {
        if points.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let subject_count = points.len() as u32;
        let label_for = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(index) => points
                .get(*index as usize)
                .map(|point| point.subject.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(50)
            .build_cartesian_2d((0u32..subject_count).into_segmented(), 0u32..100u32)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Progress (%)")
            .x_label_formatter(&label_for)
            .y_label_formatter(&|v| format!("{}%", v))
            .label_style(("sans-serif", 12, &RGBColor(102, 126, 234)))
            .axis_style(RGBColor(230, 230, 230))
            .bold_line_style(RGBColor(245, 245, 245))
            .light_line_style(RGBColor(250, 250, 250))
            .y_labels(6)
            .draw()
            .is_err()
        {
            return;
        }

        let bars = points.iter().enumerate().map(|(index, point)| {
            let index = index as u32;
            Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0),
                    (SegmentValue::Exact(index + 1), u32::from(point.progress)),
                ],
                bar_color(point.trend).filled(),
            )
        });

        if chart.draw_series(bars).is_err() {
            return;
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_color_by_trend() {
        let up = bar_color(Trend::Up);
        assert_eq!((up.0, up.1, up.2), (72, 187, 120));

        let stable = bar_color(Trend::Stable);
        assert_eq!((stable.0, stable.1, stable.2), (102, 126, 234));
    }

    #[test]
    fn test_trend_marker() {
        assert_eq!(trend_marker(Trend::Up), "↑");
        assert_eq!(trend_marker(Trend::Stable), "→");
    }

    #[test]
    fn test_draw_chart_without_canvas() {
        let chart = ProgressChart {
            canvas_ref: NodeRef::default(),
        };

        // No canvas mounted yet; both calls must return quietly
        chart.draw_chart(&[]);
        chart.draw_chart(&[ProgressPoint {
            subject: "Mathematics".to_string(),
            progress: 85,
            trend: Trend::Up,
        }]);
    }
}
