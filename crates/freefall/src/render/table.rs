//! Terminal rendering of the residual table, the curve and the summary.

use std::fmt::Write as _;

use serde_json::json;

use crate::error::Result;
use crate::experiment::{CurvePoint, Indicator, Residual, Summary};
use crate::format;

/// How a table is laid out on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Whitespace-separated columns.
    #[default]
    Plain,
    /// Boxed table with a header rule.
    Boxed,
    /// Pretty-printed JSON.
    Json,
}

const RESIDUAL_HEADERS: [&str; 5] = ["#", "Time (s)", "Height (m)", "Theory (m)", "Diff (m)"];
const CURVE_HEADERS: [&str; 2] = ["Time (s)", "Height (m)"];

/// Render the residual table.
///
/// With `color`, differences are wrapped in ANSI colour codes chosen by their
/// [`Indicator`]. JSON output is never coloured.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn residual_table(rows: &[Residual], style: TableStyle, color: bool) -> Result<String> {
    if style == TableStyle::Json {
        let values: Vec<_> = rows
            .iter()
            .map(|r| {
                json!({
                    "index": r.index,
                    "time": format::time(r.time),
                    "height": format::height(r.measured),
                    "theoretical": format::height(r.theoretical),
                    "difference": format::difference(r.difference),
                    "indicator": r.indicator,
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&values)?);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.index.to_string(),
                format::time(r.time),
                format::height(r.measured),
                format::height(r.theoretical),
                format::difference(r.difference),
            ]
        })
        .collect();
    let indicators: Vec<Indicator> = rows.iter().map(|r| r.indicator).collect();

    Ok(layout(
        &RESIDUAL_HEADERS,
        &cells,
        style,
        |row, col, text| {
            if color && col == RESIDUAL_HEADERS.len() - 1 {
                paint(text, indicators[row])
            } else {
                text.to_string()
            }
        },
    ))
}

/// Render the sampled theoretical curve.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn curve_table(points: &[CurvePoint], style: TableStyle) -> Result<String> {
    if style == TableStyle::Json {
        let values: Vec<_> = points
            .iter()
            .map(|p| json!({ "time": format::time(p.time), "height": format::height(p.height) }))
            .collect();
        return Ok(serde_json::to_string_pretty(&values)?);
    }

    let cells: Vec<Vec<String>> = points
        .iter()
        .map(|p| vec![format::time(p.time), format::height(p.height)])
        .collect();
    Ok(layout(&CURVE_HEADERS, &cells, style, |_, _, text| {
        text.to_string()
    }))
}

/// Render the summary block as aligned `label: value` lines.
#[must_use]
pub fn summary_text(summary: &Summary) -> String {
    let lines = [
        ("Data points", summary.count.to_string()),
        (
            "Time range",
            format!(
                "{}-{} s",
                format::time(summary.time_range.0),
                format::time(summary.time_range.1)
            ),
        ),
        (
            "Height range",
            format!(
                "{:.2}-{:.2} m",
                summary.height_range.0, summary.height_range.1
            ),
        ),
        (
            "Formula",
            format!("{} (g = {} m/s²)", summary.formula, summary.gravity),
        ),
        ("RMSE", format!("{} m", format::height(summary.rmse))),
        (
            "Mean residual",
            format!("{} m", format::difference(summary.mean_residual)),
        ),
        (
            "Max |residual|",
            format!("{} m", format::height(summary.max_abs_residual)),
        ),
    ];

    let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    let mut out = String::new();
    for (label, value) in lines {
        let _ = writeln!(out, "{:<width$} {value}", format!("{label}:"));
    }
    out
}

fn paint(text: &str, indicator: Indicator) -> String {
    format!("\x1b[{}m{text}\x1b[0m", indicator.ansi_code())
}

/// Lay out `cells` under `headers`, right-aligning every column.
///
/// `decorate` is applied after padding so escape codes don't skew widths.
fn layout<F>(headers: &[&str], cells: &[Vec<String>], style: TableStyle, decorate: F) -> String
where
    F: Fn(usize, usize, &str) -> String,
{
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let (sep, left, right) = match style {
        TableStyle::Boxed => (" | ", "| ", " |"),
        TableStyle::Plain | TableStyle::Json => ("  ", "", ""),
    };
    let rule = |out: &mut String| {
        let _ = writeln!(
            out,
            "+{}+",
            widths
                .iter()
                .map(|w| "-".repeat(w + 2))
                .collect::<Vec<_>>()
                .join("+")
        );
    };

    let mut out = String::new();
    if style == TableStyle::Boxed {
        rule(&mut out);
    }
    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{h:>w$}"))
        .collect();
    let _ = writeln!(out, "{left}{}{right}", header.join(sep));
    if style == TableStyle::Boxed {
        rule(&mut out);
    }

    for (row_idx, row) in cells.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (text, w))| decorate(row_idx, col, &format!("{text:>w$}")))
            .collect();
        let _ = writeln!(out, "{left}{}{right}", line.join(sep));
    }
    if style == TableStyle::Boxed {
        rule(&mut out);
    }
    out
}
