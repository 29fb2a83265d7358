//! Output formatting for export command results.

use super::execute::ExportResult;
use crate::output::{warning_lines, Outputable};

impl Outputable for ExportResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Export: {}", self.dir));
        lines.push(String::new());
        lines.push(format!("Files ({}):", self.files.len()));

        let width = self
            .files
            .iter()
            .map(|f| f.kind.label().len())
            .max()
            .unwrap_or(0);
        for f in &self.files {
            lines.push(format!(
                "  {:<width$}  {} ({} bytes)",
                f.kind.label(),
                f.path,
                f.bytes,
                width = width
            ));
        }

        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.extend(warning_lines(&self.warnings));
        }

        lines.join("\n")
    }
}
