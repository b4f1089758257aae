//! SVG line charts of the measurements and the model curve.

use plotters::chart::SeriesAnno;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::experiment::{max_height, CurvePoint, Sample};
use crate::format::{MEASURED_LABEL, THEORY_LABEL};

const MEASURED_COLOR: RGBColor = RGBColor(0x25, 0x63, 0xeb);
const THEORY_COLOR: RGBColor = RGBColor(0xdc, 0x26, 0x26);
const GRID_COLOR: RGBColor = RGBColor(0xe0, 0xe0, 0xe0);

const FONT_FAMILY: &str = "sans-serif";
const X_DESC: &str = "Time (s)";
const Y_DESC: &str = "Height (m)";

/// Headroom above the tallest point, as a fraction of it.
const Y_HEADROOM: f64 = 0.1;

/// Which of the two charts to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Measured samples only, joined by a line.
    Measured,
    /// Model curve with the measured samples as markers.
    Comparison,
}

impl ChartKind {
    /// Short name, also used as the SVG file stem.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Measured => "measured",
            Self::Comparison => "comparison",
        }
    }

    /// Caption drawn above the chart.
    #[must_use]
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Measured => "Free-fall motion: height vs. time",
            Self::Comparison => "Measured data vs. theoretical curve",
        }
    }
}

/// Render `kind` as an SVG document.
///
/// The comparison chart needs `curve`; the measured chart ignores it.
///
/// # Errors
///
/// Returns [`Error::ChartRender`] if the backend fails to draw.
pub fn render_svg(
    kind: ChartKind,
    config: &ChartConfig,
    samples: &[Sample],
    curve: &[CurvePoint],
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        let drawn = match kind {
            ChartKind::Measured => draw_measured(&root, config, samples),
            ChartKind::Comparison => draw_comparison(&root, config, samples, curve),
        };
        drawn
            .and_then(|()| root.present())
            .map_err(|e| Error::chart_render(kind.name(), e.to_string()))?;
    }
    debug!(chart = kind.name(), bytes = svg.len(), "rendered chart");
    Ok(svg)
}

fn y_upper(samples: &[Sample], curve: &[CurvePoint]) -> f64 {
    let curve_max = curve.iter().map(|p| p.height).fold(0.0, f64::max);
    let top = max_height(samples).max(curve_max);
    if top > 0.0 {
        top * (1.0 + Y_HEADROOM)
    } else {
        1.0
    }
}

fn build_chart<'a, DB: DrawingBackend + 'a>(
    root: &'a DrawingArea<DB, Shift>,
    caption: &str,
    x_max: f64,
    y_max: f64,
) -> std::result::Result<
    ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    DrawingAreaErrorKind<DB::ErrorType>,
> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(caption, (FONT_FAMILY, 24))
        .margin_top(20)
        .margin_right(30)
        .margin_left(20)
        .margin_bottom(60)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(&GRID_COLOR)
        .bold_line_style(&GRID_COLOR)
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&|t| format!("{t:.2}"))
        .y_label_formatter(&|h| format!("{h:.2}"))
        .label_style((FONT_FAMILY, 12))
        .draw()?;

    Ok(chart)
}

fn draw_measured<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    config: &ChartConfig,
    samples: &[Sample],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut chart = build_chart(
        root,
        ChartKind::Measured.caption(),
        config.x_max,
        y_upper(samples, &[]),
    )?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.time, s.height)),
            MEASURED_COLOR.stroke_width(3),
        ))?
        .label(MEASURED_LABEL)
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], MEASURED_COLOR.stroke_width(3))
        });

    draw_markers(&mut chart, samples)?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

fn draw_comparison<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    config: &ChartConfig,
    samples: &[Sample],
    curve: &[CurvePoint],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut chart = build_chart(
        root,
        ChartKind::Comparison.caption(),
        config.x_max,
        y_upper(samples, curve),
    )?;

    chart
        .draw_series(LineSeries::new(
            curve.iter().map(|p| (p.time, p.height)),
            THEORY_COLOR.stroke_width(2),
        ))?
        .label(THEORY_LABEL)
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], THEORY_COLOR.stroke_width(2))
        });

    // Markers only: the measured series has no connecting line here
    draw_markers(&mut chart, samples)?
        .label(MEASURED_LABEL)
        .legend(|(x, y)| Circle::new((x + 10, y), 4, MEASURED_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

fn draw_markers<'a, 'b, DB: DrawingBackend + 'a>(
    chart: &'b mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    samples: &[Sample],
) -> std::result::Result<&'b mut SeriesAnno<'a, DB>, DrawingAreaErrorKind<DB::ErrorType>> {
    chart.draw_series(
        samples
            .iter()
            .map(|s| Circle::new((s.time, s.height), 6, MEASURED_COLOR.filled())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{sample_curve, samples, CurveDomain};

    #[test]
    fn test_chart_kind_names() {
        assert_eq!(ChartKind::Measured.name(), "measured");
        assert_eq!(ChartKind::Comparison.name(), "comparison");
    }

    #[test]
    fn test_y_upper_adds_headroom() {
        let upper = y_upper(samples(), &[]);
        assert!((upper - 2.07025 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_y_upper_empty_data() {
        assert!((y_upper(&[], &[]) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_render_measured_svg() {
        let svg = render_svg(
            ChartKind::Measured,
            &ChartConfig::default(),
            samples(),
            &[],
        )
        .unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(MEASURED_LABEL));
        assert!(svg.contains(X_DESC));
        assert!(svg.contains(Y_DESC));
        assert!(!svg.contains(THEORY_LABEL));
    }

    #[test]
    fn test_render_comparison_svg() {
        let curve = sample_curve(CurveDomain::EXPERIMENT);
        let svg = render_svg(
            ChartKind::Comparison,
            &ChartConfig::default(),
            samples(),
            &curve,
        )
        .unwrap();
        assert!(svg.contains(MEASURED_LABEL));
        assert!(svg.contains(THEORY_LABEL));
    }

    #[test]
    fn test_render_respects_dimensions() {
        let config = ChartConfig {
            width: 640,
            height: 320,
            x_max: 0.7,
        };
        let svg = render_svg(ChartKind::Measured, &config, samples(), &[]).unwrap();
        assert!(svg.contains("640"));
        assert!(svg.contains("320"));
    }
}
