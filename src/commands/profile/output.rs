//! Output formatting for profile command results.

use super::execute::ProfileResult;
use crate::output::{mm, warning_lines, Outputable};

impl Outputable for ProfileResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Disc {} profile (phase {} deg, {} points)",
            self.disc,
            mm(self.phase_deg),
            self.samples
        ));
        lines.push(String::new());

        lines.push(format!("Radius: {} .. {}", mm(self.min_radius), mm(self.max_radius)));
        lines.push(format!(
            "Bounds: x {} .. {}, y {} .. {}",
            mm(self.bounds.min_x),
            mm(self.bounds.max_x),
            mm(self.bounds.min_y),
            mm(self.bounds.max_y)
        ));
        lines.push(format!(
            "Size: {} x {}",
            mm(self.bounds.width()),
            mm(self.bounds.height())
        ));
        if let Some(path) = &self.csv_path {
            lines.push(format!("Wrote: {}", path));
        }

        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.extend(warning_lines(&self.warnings));
        }

        if !self.points.is_empty() {
            lines.push(String::new());
            lines.push(format!("Points ({}):", self.points.len()));
            for p in &self.points {
                lines.push(format!("  {:.6},{:.6}", p.x, p.y));
            }
        }

        lines.join("\n")
    }
}
