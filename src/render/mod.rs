//! Optional presentation side-channel for the regression fit.
//!
//! The numeric core never depends on a concrete plotting surface; it calls
//! out through [`FitRenderer`]. Renderer failures stay on this channel and
//! are reported via `anyhow`, not the crate error type.

use crate::types::RegressionResult;
use std::path::PathBuf;

// Figure geometry close to the Matplotlib default (~640x480).
const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const PADDING: f64 = 48.0;
const POINT_COLOR: &str = "#348dc1";
const LINE_COLOR: &str = "#d62728";

/// Injected rendering collaborator for the scatter + fitted-line plot.
pub trait FitRenderer {
    /// Render (market, strategy) points and the fitted line. Called only
    /// after the numeric result is final; must not alter it.
    fn render(&self, market: &[f64], strategy: &[f64], fit: &RegressionResult)
        -> anyhow::Result<()>;
}

/// Writes the fit plot as a standalone SVG file.
///
/// The on-plot annotation shows alpha and beta at 2 decimals; the values
/// returned by the estimator carry 3. The display precision is a fixed
/// reporting convention, not a rounding bug.
pub struct SvgFitRenderer {
    output_path: PathBuf,
}

impl SvgFitRenderer {
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl FitRenderer for SvgFitRenderer {
    fn render(
        &self,
        market: &[f64],
        strategy: &[f64],
        fit: &RegressionResult,
    ) -> anyhow::Result<()> {
        let svg = render_fit_svg(market, strategy, fit)
            .ok_or_else(|| anyhow::anyhow!("no finite points to plot"))?;
        std::fs::write(&self.output_path, svg)?;
        Ok(())
    }
}

fn extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            if v < min_v {
                min_v = v;
            }
            if v > max_v {
                max_v = v;
            }
        }
    }
    if !min_v.is_finite() || !max_v.is_finite() {
        return None;
    }
    if min_v == max_v {
        let adjust = if min_v == 0.0 { 1.0 } else { min_v.abs() * 0.1 }; // widen flat ranges
        min_v -= adjust;
        max_v += adjust;
    }
    Some((min_v, max_v))
}

fn scale_x(value: f64, min_v: f64, max_v: f64) -> f64 {
    let inner = WIDTH - 2.0 * PADDING;
    PADDING + (value - min_v) / (max_v - min_v) * inner
}

fn scale_y(value: f64, min_v: f64, max_v: f64) -> f64 {
    let inner = HEIGHT - 2.0 * PADDING;
    PADDING + (1.0 - (value - min_v) / (max_v - min_v)) * inner
}

fn render_fit_svg(market: &[f64], strategy: &[f64], fit: &RegressionResult) -> Option<String> {
    let (min_x, max_x) = extent(market)?;

    // The fitted line is evaluated at the observed x values, so the y
    // extent must cover both the points and the line endpoints.
    let mut y_values: Vec<f64> = strategy.to_vec();
    y_values.push(fit.beta * min_x + fit.alpha);
    y_values.push(fit.beta * max_x + fit.alpha);
    let (min_y, max_y) = extent(&y_values)?;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}"><style>text{{font-family:Arial,sans-serif;font-size:11px;fill:#333}}</style>"#,
        w = WIDTH,
        h = HEIGHT
    ));

    // Axes
    svg.push_str(&format!(
        r##"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="#000" stroke-width="1" />"##,
        x1 = PADDING,
        x2 = WIDTH - PADDING,
        y = HEIGHT - PADDING
    ));
    svg.push_str(&format!(
        r##"<line x1="{x:.2}" y1="{y1:.2}" x2="{x:.2}" y2="{y2:.2}" stroke="#000" stroke-width="1" />"##,
        x = PADDING,
        y1 = PADDING,
        y2 = HEIGHT - PADDING
    ));

    // Scatter of observed (market, strategy) pairs
    for (&x, &y) in market.iter().zip(strategy.iter()) {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        svg.push_str(&format!(
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="3" fill="{color}" fill-opacity="0.7" />"#,
            cx = scale_x(x, min_x, max_x),
            cy = scale_y(y, min_y, max_y),
            color = POINT_COLOR
        ));
    }

    // Fitted line across the observed x range
    svg.push_str(&format!(
        r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{color}" stroke-width="1.5" />"#,
        x1 = scale_x(min_x, min_x, max_x),
        y1 = scale_y(fit.beta * min_x + fit.alpha, min_y, max_y),
        x2 = scale_x(max_x, min_x, max_x),
        y2 = scale_y(fit.beta * max_x + fit.alpha, min_y, max_y),
        color = LINE_COLOR
    ));

    // Alpha/beta annotation box, 2-decimal display precision
    let box_x = PADDING + 12.0;
    let box_y = PADDING + 8.0;
    svg.push_str(&format!(
        r##"<rect x="{x:.2}" y="{y:.2}" width="110" height="40" rx="4" fill="#ffffff" fill-opacity="0.8" stroke="#999" />"##,
        x = box_x,
        y = box_y
    ));
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}">Alpha: {alpha:.2}</text>"#,
        x = box_x + 8.0,
        y = box_y + 16.0,
        alpha = fit.alpha
    ));
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}">Beta: {beta:.2}</text>"#,
        x = box_x + 8.0,
        y = box_y + 32.0,
        beta = fit.beta
    ));

    // Axis labels
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle">Market Return</text>"#,
        x = WIDTH / 2.0,
        y = HEIGHT - PADDING / 3.0
    ));
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" transform="rotate(-90 {x:.2} {y:.2})">Strategy Return</text>"#,
        x = PADDING / 3.0,
        y = HEIGHT / 2.0
    ));

    svg.push_str("</svg>");
    Some(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_contains_annotation_and_points() {
        let fit = RegressionResult {
            alpha: 0.002,
            beta: 1.5,
        };
        let svg = render_fit_svg(&[0.01, -0.02, 0.03], &[0.017, -0.028, 0.047], &fit).unwrap();

        // Display precision is 2 decimals regardless of the stored values.
        assert!(svg.contains("Alpha: 0.00"));
        assert!(svg.contains("Beta: 1.50"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("Market Return"));
    }

    #[test]
    fn test_no_finite_points_yields_none() {
        let fit = RegressionResult {
            alpha: 0.0,
            beta: 1.0,
        };
        assert!(render_fit_svg(&[f64::NAN], &[f64::NAN], &fit).is_none());
    }
}
