//! The compile pipeline: parse, populate, validate.
//!
//! Each phase reports into one [`Diagnostics`] sink. The next phase runs only
//! if the sink is still empty, so a model is produced only from clean input.

use std::fs;
use std::path::Path;

use brick_foundation::{Diagnostics, Error, Result};
use brick_language::{Program, parse};
use brick_semantic::{AnalysisConfig, SymbolTable};
use log::info;

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Passed to the symbol table.
    pub analysis: AnalysisConfig,
    /// Keep the parsed syntax tree in the [`Compilation`].
    pub keep_ast: bool,
}

impl CompilerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the analysis configuration.
    #[must_use]
    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }

    /// Builder method to keep the syntax tree.
    #[must_use]
    pub fn with_keep_ast(mut self, keep: bool) -> Self {
        self.keep_ast = keep;
        self
    }
}

/// A pipeline phase, in the order they run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Tokenizing and parsing.
    Parse,
    /// Building the symbol table.
    Populate,
    /// Semantic validation.
    Validate,
}

impl Phase {
    /// Every phase, in order.
    pub const ALL: [Self; 3] = [Self::Parse, Self::Populate, Self::Validate];

    /// The line `brickc --verbose` prints when the phase starts.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Parse => "1. Parsing...",
            Self::Populate => "2. Building symbol table...",
            Self::Validate => "3. Validating...",
        }
    }
}

/// Everything one compilation produced.
#[derive(Debug)]
pub struct Compilation {
    /// Every problem found, in the order found.
    pub diagnostics: Diagnostics,
    /// The validated model; present only when no diagnostics were recorded.
    pub model: Option<SymbolTable>,
    /// The syntax tree, when requested and the header parsed.
    pub ast: Option<Program>,
    /// The last phase that ran.
    pub phase: Phase,
}

impl Compilation {
    /// Returns true if a usable model was produced.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.model.is_some()
    }

    /// Returns the model, or a compilation-failed error carrying the
    /// diagnostic count.
    ///
    /// # Errors
    /// Returns [`ErrorKind::CompilationFailed`](brick_foundation::ErrorKind)
    /// when any phase recorded diagnostics.
    pub fn into_model(self) -> Result<SymbolTable> {
        self.model
            .ok_or_else(|| Error::compilation_failed(self.diagnostics.len()))
    }
}

/// Compiles BrickLang source text.
///
/// `file_name` is stamped on every diagnostic.
#[must_use]
pub fn compile_source(source: &str, file_name: &str, config: &CompilerConfig) -> Compilation {
    let mut diagnostics = Diagnostics::for_file(file_name);
    let mut phase = Phase::Parse;
    let program = parse(source, &mut diagnostics);
    let model = program
        .as_ref()
        .and_then(|program| analyze(program, config.analysis, &mut diagnostics, &mut phase));

    if model.is_some() {
        info!(file = file_name; "Compiled successfully");
    } else {
        info!(file = file_name, errors = diagnostics.len(); "Compilation failed");
    }

    Compilation {
        diagnostics,
        model,
        ast: program.filter(|_| config.keep_ast),
        phase,
    }
}

/// Reads and compiles a file.
///
/// # Errors
/// Returns an I/O error if the file cannot be read. Compilation problems are
/// reported in the returned [`Compilation`], not as errors.
pub fn compile_file(path: impl AsRef<Path>, config: &CompilerConfig) -> Result<Compilation> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(compile_source(&source, &path.display().to_string(), config))
}

/// Populates and validates, stopping at the first phase that leaves
/// diagnostics behind. `phase` is advanced as each phase starts.
fn analyze(
    program: &Program,
    config: AnalysisConfig,
    diagnostics: &mut Diagnostics,
    phase: &mut Phase,
) -> Option<SymbolTable> {
    if diagnostics.has_errors() {
        return None;
    }
    *phase = Phase::Populate;
    let mut table = SymbolTable::with_config(config);
    if !table.populate(program, diagnostics) || diagnostics.has_errors() {
        return None;
    }
    *phase = Phase::Validate;
    if !table.validate(diagnostics) || diagnostics.has_errors() {
        return None;
    }
    Some(table)
}
