//! The HTML report and the files written next to it.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::chart::{render_svg, ChartKind};
use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::experiment::{CurvePoint, Residual, Sample, Summary};
use crate::format;

/// Report file name.
pub const REPORT_FILE_NAME: &str = "report.html";

/// Everything needed to produce the charts and the report.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    /// Measured samples.
    pub samples: &'a [Sample],
    /// Sampled model curve.
    pub curve: &'a [CurvePoint],
    /// Residuals of `samples` against the model.
    pub residuals: &'a [Residual],
    /// Summary statistics.
    pub summary: &'a Summary,
}

/// Paths written by [`write_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    /// The measured-data chart.
    pub measured_svg: PathBuf,
    /// The comparison chart.
    pub comparison_svg: PathBuf,
    /// The HTML report.
    pub html: PathBuf,
}

/// Render both charts and the report into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the directory can't be created, a chart fails to
/// render, or a file can't be written.
pub fn write_report(
    dir: &Path,
    config: &ChartConfig,
    input: &ReportInput<'_>,
    generated_at: DateTime<Utc>,
) -> Result<ReportFiles> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let measured = render_svg(ChartKind::Measured, config, input.samples, input.curve)?;
    let comparison = render_svg(ChartKind::Comparison, config, input.samples, input.curve)?;

    let files = ReportFiles {
        measured_svg: dir.join(format!("{}.svg", ChartKind::Measured.name())),
        comparison_svg: dir.join(format!("{}.svg", ChartKind::Comparison.name())),
        html: dir.join(REPORT_FILE_NAME),
    };

    write_file(&files.measured_svg, &measured)?;
    write_file(&files.comparison_svg, &comparison)?;
    let html = render_html(input, &measured, &comparison, generated_at);
    write_file(&files.html, &html)?;

    info!("Report written to {}", files.html.display());
    Ok(files)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing {} ({} bytes)", path.display(), contents.len());
    std::fs::write(path, contents).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the HTML report with both charts inlined.
#[must_use]
pub fn render_html(
    input: &ReportInput<'_>,
    measured_svg: &str,
    comparison_svg: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Free-fall motion</title>
<style>
body {{ font-family: sans-serif; margin: 24px; color: #1f2937; background: #fff; }}
h2, h3, .axes {{ text-align: center; }}
.axes {{ color: #4b5563; }}
.chart {{ margin-bottom: 32px; text-align: center; }}
table {{ border-collapse: collapse; margin: 0 auto; border: 1px solid #d1d5db; }}
th {{ background: #f3f4f6; color: #6b7280; font-size: 12px; text-transform: uppercase; text-align: left; padding: 12px 24px; border-bottom: 1px solid #d1d5db; }}
td {{ padding: 12px 24px; font-size: 14px; font-variant-numeric: tabular-nums; }}
tr.even {{ background: #f9fafb; }}
.summary {{ margin-top: 24px; padding: 16px; background: #f3f4f6; border-radius: 8px; }}
.summary dl {{ display: grid; grid-template-columns: repeat(4, auto 1fr); gap: 8px 12px; margin: 0; }}
.summary dt {{ font-weight: 600; color: #4b5563; }}
.summary dd {{ margin: 0; }}
footer {{ margin-top: 16px; font-size: 12px; color: #9ca3af; text-align: center; }}
</style>
</head>
<body>
<h2>Free-fall motion: height vs. time</h2>
<p class="axes">x axis: time (s) | y axis: height (m)</p>
<div class="chart">{measured_svg}</div>
<h3>Measured data vs. theoretical curve</h3>
<div class="chart">{comparison_svg}</div>
<h3>Measurements</h3>
"#
    );

    write_residual_table(&mut html, input.residuals);
    write_summary(&mut html, input.summary);

    let _ = write!(
        html,
        "<footer>Generated {}</footer>\n</body>\n</html>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    html
}

fn write_residual_table(html: &mut String, rows: &[Residual]) {
    html.push_str(
        "<table>\n<thead><tr><th>#</th><th>Time (s)</th><th>Height (m)</th>\
         <th>Theory (m)</th><th>Diff (m)</th></tr></thead>\n<tbody>\n",
    );
    for (i, row) in rows.iter().enumerate() {
        let class = if i % 2 == 0 { "even" } else { "odd" };
        let _ = writeln!(
            html,
            "<tr class=\"{class}\" title=\"{} | {}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><span style=\"color: {}\">{}</span></td></tr>",
            format::tooltip_label(row.time),
            format::tooltip_value(row.measured),
            row.index,
            format::time(row.time),
            format::height(row.measured),
            format::height(row.theoretical),
            row.indicator.css_color(),
            format::difference(row.difference),
        );
    }
    html.push_str("</tbody>\n</table>\n");
}

fn write_summary(html: &mut String, summary: &Summary) {
    let _ = write!(
        html,
        "<div class=\"summary\">\n<h4>Summary</h4>\n<dl>\n\
         <dt>Data points:</dt><dd>{}</dd>\n\
         <dt>Time range:</dt><dd>{}-{} s</dd>\n\
         <dt>Height range:</dt><dd>{:.2}-{:.2} m</dd>\n\
         <dt>Formula:</dt><dd>{}</dd>\n\
         <dt>RMSE:</dt><dd>{} m</dd>\n\
         <dt>Mean residual:</dt><dd>{} m</dd>\n\
         <dt>Max |residual|:</dt><dd>{} m</dd>\n\
         </dl>\n</div>\n",
        summary.count,
        format::time(summary.time_range.0),
        format::time(summary.time_range.1),
        summary.height_range.0,
        summary.height_range.1,
        summary.formula,
        format::height(summary.rmse),
        format::difference(summary.mean_residual),
        format::height(summary.max_abs_residual),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{residuals, sample_curve, samples, CurveDomain, GRAVITY};

    struct Fixture {
        curve: Vec<CurvePoint>,
        residuals: Vec<Residual>,
        summary: Summary,
    }

    impl Fixture {
        fn new() -> Self {
            let residuals = residuals(samples(), GRAVITY);
            let summary = Summary::new(samples(), &residuals, GRAVITY);
            Self {
                curve: sample_curve(CurveDomain::EXPERIMENT),
                residuals,
                summary,
            }
        }

        fn input(&self) -> ReportInput<'_> {
            ReportInput {
                samples: samples(),
                curve: &self.curve,
                residuals: &self.residuals,
                summary: &self.summary,
            }
        }
    }

    #[test]
    fn test_render_html_structure() {
        let fixture = Fixture::new();
        let html = render_html(
            &fixture.input(),
            "<svg id=\"a\"/>",
            "<svg id=\"b\"/>",
            Utc::now(),
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<svg id=\"a\"/>"));
        assert!(html.contains("<svg id=\"b\"/>"));
        assert_eq!(html.matches("<tr class=").count(), 14);
        assert_eq!(html.matches("class=\"even\"").count(), 7);
        assert!(html.contains("title=\"Time: 0.50 s | 1.22500 m\""));
        assert!(html.contains("+0.00000"));
        assert!(html.contains("h = ½gt²"));
        assert!(html.contains("<dt>Mean residual:</dt><dd>+0.00000 m</dd>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_html_footer_timestamp() {
        let fixture = Fixture::new();
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let html = render_html(&fixture.input(), "", "", at);
        assert!(html.contains("Generated 2024-05-01 12:30:00 UTC"));
    }

    #[test]
    fn test_write_report_creates_files() {
        crate::logging::init_test_logging();
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("out");
        let fixture = Fixture::new();

        let files =
            write_report(&dir, &ChartConfig::default(), &fixture.input(), Utc::now()).unwrap();

        assert_eq!(files.html, dir.join("report.html"));
        assert!(files.measured_svg.ends_with("measured.svg"));
        assert!(files.comparison_svg.ends_with("comparison.svg"));
        for path in [&files.measured_svg, &files.comparison_svg, &files.html] {
            assert!(path.is_file(), "{} missing", path.display());
        }

        let html = std::fs::read_to_string(&files.html).unwrap();
        let svg = std::fs::read_to_string(&files.comparison_svg).unwrap();
        assert!(html.contains(svg.trim()));
    }

    #[test]
    fn test_write_report_into_file_path_fails() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let fixture = Fixture::new();

        let err = write_report(
            &tmp.path().join("sub"),
            &ChartConfig::default(),
            &fixture.input(),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DirectoryCreate { .. }));
    }
}
