//! Help output: category-filtered usage text from the command table.

use crate::registry::{CommandCategory, CommandTable};

/// Produces usage text from the registered catalog, preserving registration
/// order.
pub struct HelpFormatter<'a> {
    table: &'a CommandTable,
}

impl<'a> HelpFormatter<'a> {
    pub fn new(table: &'a CommandTable) -> Self {
        Self { table }
    }

    /// Usage lines for one category, in registration order.
    pub fn category(&self, category: CommandCategory) -> String {
        let mut out = String::new();
        for descriptor in self.table.commands_in(category) {
            out.push_str(descriptor.usage);
            out.push('\n');
        }
        out
    }

    /// Usage text for every command, grouped by category with headers.
    pub fn all(&self) -> String {
        let mut out = String::new();
        for category in CommandCategory::ALL {
            let section = self.category(category);
            if section.is_empty() {
                continue;
            }
            out.push_str("== ");
            out.push_str(category.name());
            out.push_str(" ==\n");
            out.push_str(&section);
        }
        out
    }

    /// Usage text filtered by an optional category.
    pub fn format(&self, filter: Option<CommandCategory>) -> String {
        match filter {
            Some(category) => self.category(category),
            None => self.all(),
        }
    }
}
