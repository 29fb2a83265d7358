//! Output formatting for config-init command results.

use super::execute::ConfigInitResult;
use crate::output::{mm, warning_lines, Outputable};

impl Outputable for ConfigInitResult {
    fn to_table(&self) -> String {
        let p = &self.params;
        let mut lines = vec![
            format!("Wrote: {}", self.path),
            format!(
                "Drive: N={} R={} Rr={} E={}",
                p.rollers,
                mm(p.pitch_radius),
                mm(p.roller_radius),
                mm(p.eccentricity)
            ),
        ];
        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.extend(warning_lines(&self.warnings));
        }
        lines.join("\n")
    }
}
