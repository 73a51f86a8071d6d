//! Usage history chart drawn on a `<canvas>` with `plotters`.

use chrono::{Local, TimeDelta};
use hostwatch_app::monitoring::ChartSample;
use hostwatch_domain::time::Timestamp;
use leptos::html::Canvas;
use leptos::prelude::*;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;

const BACKGROUND: RGBColor = RGBColor(30, 39, 46);
const AXIS: RGBColor = RGBColor(162, 155, 254);
const CPU: RGBColor = RGBColor(108, 92, 231);
const MEMORY: RGBColor = RGBColor(0, 184, 148);
const DISK: RGBColor = RGBColor(253, 203, 110);

fn draw_error(err: impl std::fmt::Debug) -> String {
    format!("{err:?}")
}

fn points(samples: &[ChartSample], value: impl Fn(&ChartSample) -> f64) -> Vec<(Timestamp, f64)> {
    samples.iter().map(|s| (s.at, value(s))).collect()
}

fn draw(canvas: HtmlCanvasElement, samples: &[ChartSample]) -> Result<(), String> {
    let backend =
        CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND).map_err(draw_error)?;

    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return root.present().map_err(draw_error);
    };
    let end = last.at.max(first.at + TimeDelta::seconds(1));

    let mut chart = ChartBuilder::on(&root)
        .margin(8)
        .x_label_area_size(22)
        .y_label_area_size(36)
        .build_cartesian_2d(first.at..end, 0.0..100.0_f64)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .light_line_style(RGBAColor(255, 255, 255, 0.1))
        .x_labels(4)
        .y_labels(5)
        .axis_style(AXIS)
        .label_style(("sans-serif", 11, &AXIS))
        .x_label_formatter(&|at| at.with_timezone(&Local).format("%H:%M:%S").to_string())
        .y_label_formatter(&|y| format!("{y:.0}%"))
        .draw()
        .map_err(draw_error)?;

    let series = [
        ("CPU", CPU, points(samples, |s| s.cpu)),
        ("Memory", MEMORY, points(samples, |s| s.memory)),
        ("Disk", DISK, points(samples, |s| s.disk)),
    ];
    for (label, color, data) in series {
        chart
            .draw_series(LineSeries::new(
                data,
                ShapeStyle::from(&color).stroke_width(2),
            ))
            .map_err(draw_error)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(BACKGROUND.mix(0.8))
        .border_style(AXIS)
        .label_font(("sans-serif", 11, &AXIS))
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)
}

/// Line chart of CPU, memory and disk usage for one host.
///
/// The samples come from the host's chart history, which outlives the card
/// this canvas belongs to.
#[component]
pub fn HostChartView(canvas_id: String, samples: Vec<ChartSample>) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Err(err) = draw(canvas, &samples) {
            tracing::warn!(error = %err, "failed to draw host chart");
        }
    });

    view! {
        <canvas id=canvas_id node_ref=canvas_ref width="400" height="200"></canvas>
    }
}
