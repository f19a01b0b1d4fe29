//! Generator configuration.

/// Default indentation unit.
pub const DEFAULT_INDENT: &str = "\t";

/// Default module the generated file imports its runtime types from.
pub const DEFAULT_RUNTIME_MODULE: &str = "lamington";

/// Options controlling the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Text written once per nesting level.
    pub indent: String,
    /// Module named in the generated import line.
    pub runtime_module: String,
}

impl GeneratorOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            runtime_module: DEFAULT_RUNTIME_MODULE.to_string(),
        }
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Indents with `width` spaces instead of tabs.
    #[must_use]
    pub fn with_indent_spaces(self, width: usize) -> Self {
        self.with_indent(" ".repeat(width))
    }

    /// Sets the runtime module.
    #[must_use]
    pub fn with_runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new()
    }
}
