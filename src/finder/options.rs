//! Options for file finding
//!
//! This module provides the configuration consumed by the pattern compiler,
//! the walker and the match-action engine. It is built once per invocation
//! and never mutated during traversal.

use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::FindError;

/// Which entry kinds are tested against the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Regular files (and anything else that is not a directory)
    Files,
    /// Directories
    Dirs,
    /// Both files and directories
    #[default]
    All,
}

impl Mode {
    /// Whether an entry of the given kind takes part in matching
    pub fn includes(self, is_dir: bool) -> bool {
        match self {
            Mode::Files => !is_dir,
            Mode::Dirs => is_dir,
            Mode::All => true,
        }
    }
}

impl FromStr for Mode {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "files" => Ok(Mode::Files),
            "dirs" => Ok(Mode::Dirs),
            "all" => Ok(Mode::All),
            _ => Err(FindError::InvalidMode(s.to_string())),
        }
    }
}

/// Output record separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Newline,
    /// Binary zero, for `xargs -0`
    Null,
}

impl Delimiter {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Delimiter::Newline => b"\n",
            Delimiter::Null => b"\0",
        }
    }
}

/// Options for configuring the file finding process
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Raw pattern as given by the user
    pub pattern: String,

    /// Treat the pattern as a regular expression instead of a glob
    pub is_regex: bool,

    pub ignore_case: bool,

    /// Regex mode only
    pub multiline: bool,

    /// Regex mode only
    pub dot_all: bool,

    /// Glob mode only: anchor the pattern to the start of the name
    pub match_begin: bool,

    /// Glob mode only: anchor the pattern to the end of the name
    pub match_end: bool,

    pub mode: Mode,

    /// Select entries that do NOT match
    pub invert_match: bool,

    /// Absolute directories to traverse, in order
    pub sources: Vec<PathBuf>,

    /// Command template run for every selected entry
    pub execute: Option<Vec<String>>,

    /// Print the substituted command before running it
    pub verbose_exec: bool,

    /// Ask before running the command on each entry
    pub interactive_exec: bool,

    /// Print selected paths
    pub display: bool,

    pub delimiter: Delimiter,

    /// Print `d: ` / `f: ` before each path
    pub prefix: bool,

    /// Maximum depth to search
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links
    pub follow_links: bool,
}

impl FindOptions {
    /// Create a new FindOptions with default values
    pub fn new() -> Self {
        Self {
            pattern: String::new(),
            is_regex: false,
            ignore_case: false,
            multiline: false,
            dot_all: false,
            match_begin: false,
            match_end: false,
            mode: Mode::All,
            invert_match: false,
            sources: Vec::new(),
            execute: None,
            verbose_exec: false,
            interactive_exec: false,
            display: true,
            delimiter: Delimiter::Newline,
            prefix: false,
            max_depth: None,
            follow_links: false,
        }
    }

    /// Set the pattern to match against base names
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Interpret the pattern as a regular expression
    pub fn with_regex(mut self, is_regex: bool) -> Self {
        self.is_regex = is_regex;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn with_dot_all(mut self, dot_all: bool) -> Self {
        self.dot_all = dot_all;
        self
    }

    /// Set glob anchoring at the start and end of the name
    pub fn with_anchors(mut self, begin: bool, end: bool) -> Self {
        self.match_begin = begin;
        self.match_end = end;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_invert_match(mut self, invert_match: bool) -> Self {
        self.invert_match = invert_match;
        self
    }

    pub fn with_sources(mut self, sources: Vec<PathBuf>) -> Self {
        self.sources = sources;
        self
    }

    /// Set the command template to run for each selected entry
    pub fn with_execute(mut self, execute: Option<Vec<String>>) -> Self {
        self.execute = execute;
        self
    }

    pub fn with_verbose_exec(mut self, verbose_exec: bool) -> Self {
        self.verbose_exec = verbose_exec;
        self
    }

    pub fn with_interactive_exec(mut self, interactive_exec: bool) -> Self {
        self.interactive_exec = interactive_exec;
        self
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    /// Set the maximum depth to search
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new()
    }
}
