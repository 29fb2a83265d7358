//! Output formatting for layout command results.

use super::execute::LayoutResult;
use crate::geometry::CircleRing;
use crate::output::{mm, warning_lines, Outputable};

fn ring_lines(title: &str, ring: &CircleRing) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({} x r{} on R{}):",
        title,
        ring.centres.len(),
        mm(ring.radius),
        mm(ring.pitch_radius)
    )];
    for (i, c) in ring.centres.iter().enumerate() {
        lines.push(format!("  {:>2}  x={}  y={}", i + 1, mm(c.x), mm(c.y)));
    }
    lines
}

impl Outputable for LayoutResult {
    fn to_table(&self) -> String {
        let mut lines = vec!["Layout".to_string(), String::new()];

        lines.extend(ring_lines("Rollers", &self.rollers));
        lines.push(String::new());
        lines.extend(ring_lines("Output holes", &self.output_holes));

        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.extend(warning_lines(&self.warnings));
        }

        lines.join("\n")
    }
}
