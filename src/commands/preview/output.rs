//! Output formatting for preview command results.

use super::execute::PreviewResult;
use crate::output::{warning_lines, Outputable};

impl Outputable for PreviewResult {
    fn to_table(&self) -> String {
        let discs = if self.dual_disc { "2 discs" } else { "1 disc" };
        let mut lines = vec![format!("Wrote: {} ({}, {} bytes)", self.path, discs, self.bytes)];
        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.extend(warning_lines(&self.warnings));
        }
        lines.join("\n")
    }
}
