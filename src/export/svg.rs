//! SVG preview: rotor profile(s), rollers and output holes drawn to scale.
//!
//! Model coordinates are kept as-is (millimetres, y up) inside a flipped
//! group, so the drawing can be measured directly.

use std::fmt::Write;

use crate::geometry::{DriveParams, Layout, Point, Profile};

const DISC1_COLOUR: &str = "#1f77b4";
const DISC2_COLOUR: &str = "#ff7f0e";
const ROLLER_COLOUR: &str = "#2ca02c";
const HOLE_COLOUR: &str = "#d62728";
const GRID_COLOUR: &str = "#dddddd";

/// Render the preview for validated parameters.
pub fn render_preview(params: &DriveParams) -> String {
    let disc1 = Profile::generate(params, crate::geometry::Disc::First);
    let disc2 = params
        .dual_disc
        .then(|| Profile::generate(params, crate::geometry::Disc::Second));
    let layout = Layout::from_params(params);

    let extent = half_extent(params, &disc1);
    let size = 2.0 * extent;
    let stroke = size / 400.0;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{min} {min} {size} {size}" width="700" height="700">"#,
        min = fmt(-extent),
        size = fmt(size),
    );
    let _ = writeln!(svg, r#"<rect x="{0}" y="{0}" width="{1}" height="{1}" fill="white"/>"#, fmt(-extent), fmt(size));
    let _ = writeln!(svg, r#"<g transform="scale(1,-1)" fill="none">"#);

    write_grid(&mut svg, extent, stroke / 2.0);

    let _ = writeln!(
        svg,
        r#"<polyline id="disc1" points="{}" stroke="{DISC1_COLOUR}" stroke-width="{}"/>"#,
        polyline_points(&disc1.points),
        fmt(stroke * 2.0)
    );
    if let Some(disc2) = &disc2 {
        let _ = writeln!(
            svg,
            r#"<polyline id="disc2" points="{}" stroke="{DISC2_COLOUR}" stroke-width="{}" stroke-dasharray="{} {}"/>"#,
            polyline_points(&disc2.points),
            fmt(stroke * 2.0),
            fmt(stroke * 6.0),
            fmt(stroke * 4.0)
        );
    }

    for c in &layout.rollers.centres {
        write_circle(&mut svg, "roller", *c, layout.rollers.radius, ROLLER_COLOUR, stroke * 1.5);
    }
    for c in &layout.output_holes.centres {
        write_circle(&mut svg, "output-hole", *c, layout.output_holes.radius, HOLE_COLOUR, stroke * 1.5);
    }
    let _ = writeln!(svg, "</g>");

    let mut legend = vec![("Rotor (disc 1)", DISC1_COLOUR)];
    if disc2.is_some() {
        legend.push(("Rotor (disc 2)", DISC2_COLOUR));
    }
    legend.push(("Rollers", ROLLER_COLOUR));
    legend.push(("Output holes", HOLE_COLOUR));
    write_legend(&mut svg, extent, &legend);

    svg.push_str("</svg>\n");
    svg
}

/// Half the side of the square view, with a 10% margin.
fn half_extent(params: &DriveParams, disc: &Profile) -> f64 {
    let profile_r = disc.radius_range().map(|(_, hi)| hi).unwrap_or(0.0);
    let roller_r = params.pitch_radius + params.roller_radius;
    let hole_r = params.output_pin_circle_radius + params.output_hole_radius();
    profile_r.max(roller_r).max(hole_r) * 1.1
}

fn write_grid(svg: &mut String, extent: f64, stroke: f64) {
    let step = grid_step(extent);
    let lines = (extent / step).floor() as i64;
    for i in -lines..=lines {
        let v = fmt(i as f64 * step);
        let _ = writeln!(
            svg,
            r#"<line x1="{v}" y1="{lo}" x2="{v}" y2="{hi}" stroke="{GRID_COLOUR}" stroke-width="{w}"/>"#,
            lo = fmt(-extent),
            hi = fmt(extent),
            w = fmt(stroke)
        );
        let _ = writeln!(
            svg,
            r#"<line x1="{lo}" y1="{v}" x2="{hi}" y2="{v}" stroke="{GRID_COLOUR}" stroke-width="{w}"/>"#,
            lo = fmt(-extent),
            hi = fmt(extent),
            w = fmt(stroke)
        );
    }
}

/// Round grid spacing giving roughly ten lines per half view.
fn grid_step(extent: f64) -> f64 {
    let raw = extent / 10.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude)
}

fn write_circle(svg: &mut String, class: &str, centre: Point, r: f64, colour: &str, stroke: f64) {
    let _ = writeln!(
        svg,
        r#"<circle class="{class}" cx="{}" cy="{}" r="{}" stroke="{colour}" stroke-width="{}"/>"#,
        fmt(centre.x),
        fmt(centre.y),
        fmt(r),
        fmt(stroke)
    );
}

fn write_legend(svg: &mut String, extent: f64, entries: &[(&str, &str)]) {
    let font = extent / 18.0;
    let x = extent * 0.45;
    for (i, (label, colour)) in entries.iter().enumerate() {
        let y = -extent + font * 1.5 * (i as f64 + 1.0);
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" fill="{colour}">{label}</text>"#,
            fmt(x),
            fmt(y),
            fmt(font)
        );
    }
}

fn polyline_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt(p.x), fmt(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn fmt(v: f64) -> String {
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn params() -> DriveParams {
        DriveParams {
            samples: 200,
            ..DriveParams::default()
        }
    }

    #[rstest]
    fn test_single_disc_preview(params: DriveParams) {
        let svg = render_preview(&params);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains(r#"<polyline id="disc1""#));
        assert!(!svg.contains(r#"<polyline id="disc2""#));
        assert_eq!(svg.matches(r#"class="roller""#).count(), 10);
        assert_eq!(svg.matches(r#"class="output-hole""#).count(), 4);
        assert!(svg.contains(">Rotor (disc 1)</text>"));
        assert!(svg.contains(">Rollers</text>"));
        assert!(svg.contains(">Output holes</text>"));
        assert!(!svg.contains("Rotor (disc 2)"));
    }

    #[rstest]
    fn test_dual_disc_preview(mut params: DriveParams) {
        params.dual_disc = true;
        let svg = render_preview(&params);
        assert!(svg.contains(r#"<polyline id="disc2""#));
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains(">Rotor (disc 2)</text>"));
    }

    #[rstest]
    fn test_view_covers_rollers(params: DriveParams) {
        // (R + Rr) * 1.1 = 25.3
        let svg = render_preview(&params);
        assert!(svg.contains(r#"viewBox="-25.3 -25.3 50.6 50.6""#));
    }

    #[test]
    fn test_fmt_trims_zeros() {
        assert_eq!(fmt(1.5), "1.5");
        assert_eq!(fmt(2.0), "2");
        assert_eq!(fmt(-0.00001), "0");
        assert_eq!(fmt(0.123456), "0.1235");
    }

    #[test]
    fn test_grid_step_is_round() {
        assert_eq!(grid_step(25.3), 5.0);
        assert_eq!(grid_step(100.0), 10.0);
    }
}
