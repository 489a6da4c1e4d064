//! HTML table renderer.
//!
//! | Plan | Output |
//! |------|--------|
//! | `Empty` | `<td></td>` |
//! | `SingleSpan` | `<td rowspan=N style='background-color: #...'>name</td>` |
//! | `Continuation` | nothing; the span above covers it |
//! | `Conflict` | `<td class='overlap' ...>a<br>b</td>` in the conflict colour |

use std::fmt::Write;

use super::RenderConfig;
use crate::axis::TimeAxis;
use crate::compositor::{CellPlan, Composition};

/// Stylesheet matching the classes emitted by [`render_table`].
pub const STYLESHEET: &str = "\
.timetable { width: 100%; border-collapse: collapse; table-layout: fixed; }
.timetable th, .timetable td { border: 1px solid #ddd; padding: 10px; text-align: center; height: 35px; font-size: 14px; color: white; }
.timetable th { background-color: #333; }
.timetable .time-label { background-color: #444; width: 100px; font-weight: bold; }
.timetable .overlap { font-weight: bold; }
";

/// Renders the layout as an HTML `<table class="timetable">`.
///
/// Rows follow the axis; columns follow [`RenderConfig::visible_days`].
pub fn render_table(composition: &Composition, axis: &TimeAxis, config: &RenderConfig) -> String {
    let days = config.visible_days();
    let mut html = String::from("<table class=\"timetable\">\n<thead><tr><th>Time</th>");
    for day in &days {
        let _ = write!(html, "<th>{day}</th>");
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for slot in axis.iter() {
        let _ = write!(
            html,
            "<tr><td class='time-label'>{}</td>",
            escape(&slot.label)
        );
        for &day in &days {
            match composition.plan(day, slot.index) {
                None | Some(CellPlan::Empty) => html.push_str("<td></td>"),
                Some(CellPlan::Continuation) => {}
                Some(CellPlan::SingleSpan {
                    entry,
                    span_len,
                    color,
                }) => {
                    let _ = write!(
                        html,
                        "<td rowspan={span_len} style='background-color: {}; vertical-align: middle;'>{}</td>",
                        color.hex(),
                        escape(&entry.name)
                    );
                }
                Some(CellPlan::Conflict { entries }) => {
                    let names: Vec<String> = entries.iter().map(|e| escape(&e.name)).collect();
                    let _ = write!(
                        html,
                        "<td class='overlap' style='background-color: {};'>{}</td>",
                        escape(&config.conflict_color),
                        names.join("<br>")
                    );
                }
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Renders a complete fragment: stylesheet followed by the table.
pub fn render_page(composition: &Composition, axis: &TimeAxis, config: &RenderConfig) -> String {
    format!(
        "<style>\n{STYLESHEET}</style>\n{}",
        render_table(composition, axis, config)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
