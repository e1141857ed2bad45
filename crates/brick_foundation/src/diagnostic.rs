//! Accumulating diagnostics for a single compilation.
//!
//! One [`Diagnostics`] sink is created per compilation and passed explicitly
//! to every phase. Phases record problems and keep going, so a single pass can
//! surface many independent errors. Nothing is ever removed from the sink
//! except by [`Diagnostics::clear`].

use std::fmt::{self, Write};

use log::debug;

/// The compiler phase a diagnostic belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticKind {
    /// Malformed literal or unknown character.
    Lexical,
    /// Grammar violation.
    Syntax,
    /// Duplicate names, missing game name or entities, mistyped values.
    Semantic,
    /// Problems with references to declared symbols.
    Symbol,
    /// Unreadable source.
    Io,
}

impl DiagnosticKind {
    /// Every kind, in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Lexical,
        Self::Syntax,
        Self::Semantic,
        Self::Symbol,
        Self::Io,
    ];

    /// Returns a human-readable name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Syntax => "syntax",
            Self::Semantic => "semantic",
            Self::Symbol => "symbol",
            Self::Io => "i/o",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single recorded problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Which phase reported it.
    pub kind: DiagnosticKind,
    /// 1-based line, or 0 when there is no source position.
    pub line: u32,
    /// 1-based column, or 0 when there is no source position.
    pub column: u32,
    /// Description of the problem.
    pub message: String,
    /// Source file name, when known.
    pub file: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic without a file name.
    #[must_use]
    pub fn new(kind: DiagnosticKind, line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            column,
            message: message.into(),
            file: None,
        }
    }

    /// Attaches a source file name.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{file}:")?;
        }
        write!(
            f,
            "{}:{}: {} error: {}",
            self.line, self.column, self.kind, self.message
        )
    }
}

/// Ordered, append-only collection of diagnostics.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    has_errors: bool,
    current_file: Option<String>,
}

impl Diagnostics {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink that stamps every diagnostic with `file`.
    #[must_use]
    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            current_file: Some(file.into()),
            ..Self::default()
        }
    }

    /// Sets the file name stamped on subsequently recorded diagnostics.
    pub fn set_current_file(&mut self, file: impl Into<String>) {
        self.current_file = Some(file.into());
    }

    /// Returns the file name currently stamped on diagnostics.
    #[must_use]
    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    /// Records a diagnostic of the given kind.
    pub fn report(&mut self, kind: DiagnosticKind, line: u32, column: u32, message: impl Into<String>) {
        let mut diagnostic = Diagnostic::new(kind, line, column, message);
        diagnostic.file.clone_from(&self.current_file);
        debug!(kind:% = kind, line = line, column = column; "{}", diagnostic.message);
        self.entries.push(diagnostic);
        self.has_errors = true;
    }

    /// Records a lexical diagnostic.
    pub fn lexical(&mut self, line: u32, column: u32, message: impl Into<String>) {
        self.report(DiagnosticKind::Lexical, line, column, message);
    }

    /// Records a syntax diagnostic.
    pub fn syntax(&mut self, line: u32, column: u32, message: impl Into<String>) {
        self.report(DiagnosticKind::Syntax, line, column, message);
    }

    /// Records a semantic diagnostic.
    pub fn semantic(&mut self, line: u32, column: u32, message: impl Into<String>) {
        self.report(DiagnosticKind::Semantic, line, column, message);
    }

    /// Records a symbol diagnostic.
    pub fn symbol(&mut self, line: u32, column: u32, message: impl Into<String>) {
        self.report(DiagnosticKind::Symbol, line, column, message);
    }

    /// Records an I/O diagnostic, which has no source position.
    pub fn io(&mut self, message: impl Into<String>) {
        self.report(DiagnosticKind::Io, 0, 0, message);
    }

    /// Returns true once any diagnostic has been recorded.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Returns the total number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of diagnostics of one kind.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    /// Returns the diagnostic at `index`, in recording order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Diagnostic> {
        self.entries.get(index)
    }

    /// Iterates over diagnostics in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Returns all diagnostics in recording order.
    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Renders every diagnostic, one per line, in recording order.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for diagnostic in &self.entries {
            let _ = writeln!(out, "{diagnostic}");
        }
        out
    }

    /// Renders a summary with per-kind counts.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            return "no errors\n".to_string();
        }
        let mut out = format!("{} error(s) total\n", self.entries.len());
        for kind in DiagnosticKind::ALL {
            let count = self.count(kind);
            if count > 0 {
                let _ = writeln!(out, "  {kind}: {count}");
            }
        }
        out
    }

    /// Removes every diagnostic and resets the error flag.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.has_errors = false;
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
