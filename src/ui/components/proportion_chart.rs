use std::f64::consts::PI;

use dioxus::prelude::*;

use crate::domain::ChartSlice;
use crate::util::number::{format_decimal, format_eur, Locale};

const RADIUS: f64 = 70.0;
const STROKE_WIDTH: f64 = 20.0;
/// Gap between neighbouring segments, as a fraction of the circumference.
const SEGMENT_GAP: f64 = 0.01;

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    pub color: &'static str,
    /// Visible stroke length.
    pub dash: f64,
    /// Remaining circumference after the dash.
    pub gap: f64,
    /// Negative offset placing the segment after its predecessors.
    pub offset: f64,
}

/// Lays the slices out as stroke dashes on a circle of the given radius.
pub fn donut_segments(slices: &[ChartSlice], radius: f64) -> Vec<DonutSegment> {
    let circumference = 2.0 * PI * radius;
    let gap = if slices.len() > 1 {
        SEGMENT_GAP * circumference
    } else {
        0.0
    };

    let mut cursor = 0.0;
    slices
        .iter()
        .map(|slice| {
            let length = slice.share * circumference;
            let dash = (length - gap).max(0.0);
            let segment = DonutSegment {
                color: slice.color,
                dash,
                gap: circumference - dash,
                offset: -cursor,
            };
            cursor += length;
            segment
        })
        .collect()
}

#[component]
pub fn ProportionChart(slices: Vec<ChartSlice>) -> Element {
    if slices.is_empty() {
        return rsx! {
            div {
                class: "flex h-64 flex-col items-center justify-center text-slate-400",
                p { class: "text-sm", "Introduce datos de facturación" }
            }
        };
    }

    let segments = donut_segments(&slices, RADIUS);
    let legend = slices
        .iter()
        .map(|slice| {
            (
                slice.color,
                slice.label.clone(),
                format_eur(slice.value, Locale::EsEs),
                format_decimal(slice.share * 100.0, 1, Locale::EsEs),
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "flex flex-col items-center gap-4",
            svg {
                width: "200",
                height: "200",
                view_box: "0 0 200 200",
                g {
                    transform: "rotate(-90 100 100)",
                    for segment in segments {
                        circle {
                            cx: "100",
                            cy: "100",
                            r: "{RADIUS}",
                            fill: "none",
                            stroke: "{segment.color}",
                            stroke_width: "{STROKE_WIDTH}",
                            stroke_dasharray: "{segment.dash} {segment.gap}",
                            stroke_dashoffset: "{segment.offset}",
                        }
                    }
                }
            }
            ul { class: "w-full space-y-1 text-[11px]",
                for (color, label, value, share) in legend {
                    li { class: "flex items-center justify-between gap-2",
                        span { class: "flex items-center gap-2 text-slate-600",
                            span { class: "chart-legend-dot", style: "background: {color};" }
                            "{label}"
                        }
                        span { class: "font-medium text-slate-800", "{value} · {share}%" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryKind;
    use approx::assert_relative_eq;

    fn slice(share: f64, color: &'static str) -> ChartSlice {
        ChartSlice {
            kind: CategoryKind::Tobacco,
            label: "Tabaco".to_string(),
            value: share * 100.0,
            share,
            color,
        }
    }

    #[test]
    fn single_slice_fills_the_ring() {
        let segments = donut_segments(&[slice(1.0, "#000")], 10.0);
        let circumference = 2.0 * PI * 10.0;
        assert_eq!(segments.len(), 1);
        assert_relative_eq!(segments[0].dash, circumference);
        assert_relative_eq!(segments[0].gap, 0.0);
        assert_eq!(segments[0].offset, 0.0);
    }

    #[test]
    fn segments_follow_each_other() {
        let segments = donut_segments(&[slice(0.25, "#a"), slice(0.75, "#b")], 10.0);
        let circumference = 2.0 * PI * 10.0;
        let gap = SEGMENT_GAP * circumference;

        assert_relative_eq!(segments[0].dash, 0.25 * circumference - gap);
        assert_relative_eq!(segments[1].offset, -0.25 * circumference);
        assert_relative_eq!(segments[1].dash + segments[1].gap, circumference);
        assert_eq!(segments[1].color, "#b");
    }
}
