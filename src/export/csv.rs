//! Point cloud export for CAD "curve through XYZ points" import.

use crate::geometry::Point;

pub const CSV_HEADER: &str = "x_mm,y_mm";

/// Header line followed by one `x,y` row per point, 6 decimals.
pub fn points_csv(points: &[Point]) -> String {
    let mut out = Vec::with_capacity(points.len() + 1);
    out.push(CSV_HEADER.to_string());
    out.extend(points.iter().map(|p| format!("{:.6},{:.6}", p.x, p.y)));
    out.join("\n")
}
