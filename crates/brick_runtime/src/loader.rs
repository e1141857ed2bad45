//! Loads a compiled game for a runtime, filling in defaults for anything the
//! source leaves unset.

use std::path::Path;

use brick_foundation::{Diagnostics, Rgb};
use brick_semantic::{Entity, SymbolTable};
use log::warn;

use crate::compile::{Compilation, CompilerConfig, compile_file, compile_source};

/// Values used when a game does not set them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeDefaults {
    /// Ticks per second.
    pub speed: i64,
    /// Board columns.
    pub grid_width: i64,
    /// Board rows.
    pub grid_height: i64,
    /// Background color.
    pub background: Rgb,
    /// Starting lives.
    pub lives: i64,
    /// Starting score.
    pub score: i64,
}

impl Default for RuntimeDefaults {
    fn default() -> Self {
        Self {
            speed: 8,
            grid_width: 30,
            grid_height: 30,
            background: Rgb::new(0x00_11_22),
            lives: 3,
            score: 0,
        }
    }
}

/// Compiles a game file and exposes its settings with defaults applied.
///
/// A loader holds a model only after a fully successful load. Every failed
/// load drops any previous model and keeps the diagnostics for
/// [`GameLoader::error_messages`].
#[derive(Debug, Default)]
pub struct GameLoader {
    defaults: RuntimeDefaults,
    config: CompilerConfig,
    model: Option<SymbolTable>,
    diagnostics: Diagnostics,
}

impl GameLoader {
    /// Creates a loader with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader with custom defaults.
    #[must_use]
    pub fn with_defaults(defaults: RuntimeDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Builder method to set the compiler configuration.
    #[must_use]
    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Compiles and loads a file. Returns true on success.
    ///
    /// An unreadable file is recorded as an I/O diagnostic.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match compile_file(path, &self.config) {
            Ok(compilation) => self.accept(compilation),
            Err(err) => {
                warn!(path:% = path.display(); "Cannot load game: {err}");
                self.model = None;
                self.diagnostics = Diagnostics::for_file(path.display().to_string());
                self.diagnostics.io(err.to_string());
                false
            }
        }
    }

    /// Compiles and loads source text. Returns true on success.
    pub fn load_source(&mut self, source: &str, file_name: &str) -> bool {
        let compilation = compile_source(source, file_name, &self.config);
        self.accept(compilation)
    }

    fn accept(&mut self, compilation: Compilation) -> bool {
        self.diagnostics = compilation.diagnostics;
        self.model = compilation.model;
        self.model.is_some()
    }

    /// Returns true if a game is loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// The loaded model.
    #[must_use]
    pub const fn model(&self) -> Option<&SymbolTable> {
        self.model.as_ref()
    }

    /// Diagnostics from the last load.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Every diagnostic from the last load, one per line.
    #[must_use]
    pub fn error_messages(&self) -> String {
        self.diagnostics.dump()
    }

    /// The game name, or empty if nothing is loaded.
    #[must_use]
    pub fn game_name(&self) -> &str {
        self.model.as_ref().map_or("", SymbolTable::game_name)
    }

    /// Speed, or the default.
    #[must_use]
    pub fn speed(&self) -> i64 {
        self.setting(SymbolTable::speed, self.defaults.speed)
    }

    /// Grid width, or the default.
    #[must_use]
    pub fn grid_width(&self) -> i64 {
        self.setting(SymbolTable::grid_width, self.defaults.grid_width)
    }

    /// Grid height, or the default.
    #[must_use]
    pub fn grid_height(&self) -> i64 {
        self.setting(SymbolTable::grid_height, self.defaults.grid_height)
    }

    /// Background color, or the default.
    #[must_use]
    pub fn background(&self) -> Rgb {
        self.setting(SymbolTable::color, self.defaults.background)
    }

    /// Starting lives, or the default.
    #[must_use]
    pub fn lives(&self) -> i64 {
        self.setting(SymbolTable::lives, self.defaults.lives)
    }

    /// Starting score, or the default.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.setting(SymbolTable::score, self.defaults.score)
    }

    fn setting<T>(&self, get: impl Fn(&SymbolTable) -> Option<T>, default: T) -> T {
        self.model.as_ref().and_then(get).unwrap_or(default)
    }

    /// Looks up an entity of the loaded game.
    #[must_use]
    pub fn find_entity(&self, name: &str) -> Option<&Entity> {
        self.model.as_ref().and_then(|m| m.entity(name))
    }

    /// Returns true if the loaded game defines the entity.
    #[must_use]
    pub fn has_entity(&self, name: &str) -> bool {
        self.find_entity(name).is_some()
    }

    /// Entities of the loaded game in name order; empty if nothing is loaded.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.model.iter().flat_map(SymbolTable::entities)
    }
}
