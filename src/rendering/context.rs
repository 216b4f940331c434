//! Script builder the map and its layers render into.
//!
//! Layers never touch the DOM themselves: each one appends the Leaflet
//! statements that create it and attach it to its owner, and the page
//! embeds the resulting script.

use fxhash::FxHashMap as HashMap;
use serde::Serialize;

use crate::Result;

#[derive(Debug, Default)]
pub struct RenderContext {
    statements: Vec<String>,
    counters: HashMap<String, usize>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a script variable holding `expression` and returns its name.
    ///
    /// Names are `prefix` for the first declaration and `prefix_N` after
    /// that, so the map is always reachable as `map`.
    pub fn declare(&mut self, prefix: &str, expression: &str) -> String {
        let count = self.counters.entry(prefix.to_string()).or_insert(0);
        let name = if *count == 0 {
            prefix.to_string()
        } else {
            format!("{prefix}_{count}")
        };
        *count += 1;

        self.statements.push(format!("var {name} = {expression};"));
        name
    }

    /// Appends a statement; a trailing `;` is added when missing.
    pub fn push(&mut self, statement: impl Into<String>) {
        let mut statement = statement.into();
        if !statement.ends_with(';') {
            statement.push(';');
        }
        self.statements.push(statement);
    }

    /// Script literal for any serializable value.
    ///
    /// `</` is escaped so literals stay inert inside an inline `<script>`.
    pub fn literal<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// The accumulated statements, one per line.
    pub fn into_script(self) -> String {
        self.statements.join("\n")
    }
}
