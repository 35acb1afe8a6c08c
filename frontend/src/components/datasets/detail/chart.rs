//! SVG rendering of a `ChartConfig` as grouped bars, and the raw-row preview.

use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

use common::chart::ChartConfig;
use common::model::table::TableData;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 72.0;
const TICKS: usize = 5;
pub const PREVIEW_ROWS: usize = 10;

const PALETTE: [&str; 8] = [
    "#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2", "#db2777", "#65a30d",
];

fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON && value.abs() < i64::MAX as f64 {
        (value as i64).to_formatted_string(&Locale::en)
    } else {
        format!("{value:.2}")
    }
}

struct Scale {
    min: f64,
    max: f64,
    plot_height: f64,
}

impl Scale {
    fn for_config(config: &ChartConfig) -> Self {
        let (mut min, mut max) = (0.0_f64, 0.0_f64);
        for row in &config.data {
            for key in &config.y_axis_keys {
                if let Some(v) = row.number(key) {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
        if min == max {
            max = min + 1.0;
        }
        Self {
            min,
            max,
            plot_height: HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    fn y(&self, value: f64) -> f64 {
        MARGIN_TOP + (self.max - value) / (self.max - self.min) * self.plot_height
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub config: ChartConfig,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let config = &props.config;
    let scale = Scale::for_config(config);
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let group_width = plot_width / config.data.len().max(1) as f64;
    let series = config.y_axis_keys.len().max(1);
    let bar_width = (group_width * 0.8) / series as f64;
    let baseline = scale.y(0.0);
    let rotate_labels = config.data.len() > 8;

    let ticks = (0..=TICKS).map(|i| {
        let value = scale.min + (scale.max - scale.min) * i as f64 / TICKS as f64;
        let y = scale.y(value);
        html! {
            <g>
                <line x1={MARGIN_LEFT.to_string()} x2={(WIDTH - MARGIN_RIGHT).to_string()}
                      y1={y.to_string()} y2={y.to_string()} stroke="#e5e7eb" />
                <text x={(MARGIN_LEFT - 8.0).to_string()} y={(y + 4.0).to_string()}
                      text-anchor="end" font-size="11">{ format_tick(value) }</text>
            </g>
        }
    });

    let groups = config.data.iter().enumerate().map(|(row_index, row)| {
        let group_x = MARGIN_LEFT + group_width * row_index as f64 + group_width * 0.1;
        let label_x = group_x + group_width * 0.4;
        let label_y = HEIGHT - MARGIN_BOTTOM + 14.0;
        let transform = rotate_labels.then(|| format!("rotate(-40 {label_x} {label_y})"));
        let bars = config.y_axis_keys.iter().enumerate().filter_map(|(series_index, key)| {
            let value = row.number(key)?;
            let y = scale.y(value);
            let (top, height) = if value >= 0.0 { (y, baseline - y) } else { (baseline, y - baseline) };
            Some(html! {
                <rect
                    x={(group_x + bar_width * series_index as f64).to_string()}
                    y={top.to_string()}
                    width={bar_width.max(1.0).to_string()}
                    height={height.max(0.5).to_string()}
                    fill={series_color(series_index)}
                >
                    <title>{ format!("{}: {} = {}", row.name, key, format_tick(value)) }</title>
                </rect>
            })
        });
        html! {
            <g>
                { for bars }
                <text x={label_x.to_string()} y={label_y.to_string()} font-size="11"
                      text-anchor={if rotate_labels { "end" } else { "middle" }} {transform}>
                    { row.name.clone() }
                </text>
            </g>
        }
    });

    html! {
        <div class="chart">
            <svg viewBox={format!("0 0 {WIDTH} {HEIGHT}")} width="100%" role="img">
                { for ticks }
                <line x1={MARGIN_LEFT.to_string()} x2={(WIDTH - MARGIN_RIGHT).to_string()}
                      y1={baseline.to_string()} y2={baseline.to_string()} stroke="#9ca3af" />
                { for groups }
            </svg>
            <div class="chart-legend">
                { for config.y_axis_keys.iter().enumerate().map(|(i, key)| html! {
                    <span>
                        <span style={format!("display:inline-block;width:10px;height:10px;background:{}", series_color(i))}></span>
                        { format!(" {key}") }
                    </span>
                }) }
            </div>
            <p class="muted">{ format!("X axis: {}", config.original_x_axis_key) }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PreviewTableProps {
    pub table: TableData,
}

/// The first rows of the table as text; missing or empty cells show "-".
#[function_component(PreviewTable)]
pub fn preview_table(props: &PreviewTableProps) -> Html {
    let table = &props.table;
    html! {
        <div class="preview">
            <table class="preview-table">
                <thead>
                    <tr>{ for table.headers.iter().map(|h| html! { <th>{ h.clone() }</th> }) }</tr>
                </thead>
                <tbody>
                    { for table.rows.iter().take(PREVIEW_ROWS).map(|row| html! {
                        <tr>
                            { for table.headers.iter().map(|h| html! {
                                <td>{ TableData::cell_text(row, h) }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
            if table.rows.len() > PREVIEW_ROWS {
                <p class="muted">
                    { format!("Showing {} of {} rows", PREVIEW_ROWS, table.rows.len()) }
                </p>
            }
        </div>
    }
}
