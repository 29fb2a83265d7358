//! Output formatting for equations command results.
//!
//! The table form is the paste-ready text itself. Warnings are left to the
//! log so the text stays clean.

use super::execute::EquationsResult;
use crate::output::Outputable;

impl Outputable for EquationsResult {
    fn to_table(&self) -> String {
        self.equations.to_text()
    }
}
