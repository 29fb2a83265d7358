//! Output formatting for params command results.

use super::execute::ParamsResult;
use crate::output::{warning_lines, Outputable};

impl Outputable for ParamsResult {
    fn to_table(&self) -> String {
        let mut text = self.sheet.to_text();
        if !self.warnings.is_empty() {
            text.push_str("\n\n");
            text.push_str(&warning_lines(&self.warnings).join("\n"));
        }
        text
    }
}
