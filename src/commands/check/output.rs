//! Output formatting for check command results.

use super::execute::CheckResult;
use crate::output::{mm, warning_lines, Outputable};

impl Outputable for CheckResult {
    fn to_table(&self) -> String {
        let p = &self.params;
        let mut lines = Vec::new();

        lines.push(format!(
            "Drive: N={} R={} Rr={} E={}",
            p.rollers,
            mm(p.pitch_radius),
            mm(p.roller_radius),
            mm(p.eccentricity)
        ));
        if let Some(source) = &self.config_source {
            lines.push(format!("Config: {}", source));
        }
        lines.push(String::new());

        lines.push(format!("Lobes: {} (ratio hint ~{}:1)", self.lobes, self.ratio_hint));
        lines.push(format!(
            "Output holes: {} x {} on R{}",
            p.output_pin_count,
            mm(self.output_hole_diameter),
            mm(p.output_pin_circle_radius)
        ));
        if p.dual_disc {
            lines.push(format!("Dual disc: on (phase {} deg)", p.disc2_phase_deg));
        } else {
            lines.push("Dual disc: off".to_string());
        }
        lines.push(format!("Sampling: {} points, eps {}", p.samples, p.eps));
        lines.push(String::new());

        lines.extend(warning_lines(&self.warnings));
        lines.join("\n")
    }
}
