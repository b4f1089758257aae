//! Rendering of the experiment for people to look at.
//!
//! - [`chart`]: the two SVG charts, drawn with `plotters`.
//! - [`table`]: terminal tables for residuals, the curve and the summary.
//! - [`report`]: a self-contained HTML page with charts, table and summary.

pub mod chart;
pub mod report;
pub mod table;

pub use chart::{render_svg, ChartKind};
pub use report::{render_html, write_report, ReportFiles, ReportInput};
pub use table::{curve_table, residual_table, summary_text, TableStyle};
