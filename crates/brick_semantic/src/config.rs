//! Configuration for semantic analysis.

/// Controls how strictly the symbol table treats questionable input.
///
/// The defaults are lenient: a setting whose value has the wrong shape is
/// ignored with a log warning, and rules may name entities that were never
/// declared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Report a mistyped setting or property value as a semantic error
    /// instead of ignoring it.
    pub strict_values: bool,

    /// Report `collide` statements naming undeclared entities as symbol
    /// errors during validation.
    pub strict_references: bool,
}

impl AnalysisConfig {
    /// Creates the lenient default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with every check enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_values: true,
            strict_references: true,
        }
    }

    /// Builder method to set value strictness.
    #[must_use]
    pub fn with_strict_values(mut self, strict: bool) -> Self {
        self.strict_values = strict;
        self
    }

    /// Builder method to set reference strictness.
    #[must_use]
    pub fn with_strict_references(mut self, strict: bool) -> Self {
        self.strict_references = strict;
        self
    }
}
