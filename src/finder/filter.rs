//! Entry filtering functionality
//!
//! This module provides filters for deciding which entries are tested and
//! which are selected.

use super::entry::Entry;
use super::options::{FindOptions, Mode};
use super::pattern::{Matcher, PatternFlags};
use crate::errors::FindResult;

/// Trait for entry filters
pub trait EntryFilter {
    /// Check if the entry matches the filter
    fn matches(&self, entry: &Entry) -> bool;

    /// Get the filter description
    fn description(&self) -> String;
}

/// Filter for matching base names against the compiled pattern
#[derive(Debug, Clone)]
pub struct NameFilter {
    matcher: Matcher,
    original_pattern: String,
    invert_match: bool,
}

impl NameFilter {
    /// Create a new NameFilter from an already compiled matcher
    pub fn new(matcher: Matcher, pattern: &str) -> Self {
        Self {
            matcher,
            original_pattern: pattern.to_string(),
            invert_match: false,
        }
    }

    /// Compile the pattern described by the options
    pub fn from_options(options: &FindOptions) -> FindResult<Self> {
        let matcher = Matcher::compile(&options.pattern, &PatternFlags::from_options(options))?;
        Ok(Self::new(matcher, &options.pattern).with_invert_match(options.invert_match))
    }

    /// Select entries that do not match instead
    pub fn with_invert_match(mut self, invert_match: bool) -> Self {
        self.invert_match = invert_match;
        self
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl EntryFilter for NameFilter {
    fn matches(&self, entry: &Entry) -> bool {
        self.matcher.is_match(&entry.base_name()) != self.invert_match
    }

    fn description(&self) -> String {
        if self.invert_match {
            format!("name does not match '{}'", self.original_pattern)
        } else {
            format!("name matches '{}'", self.original_pattern)
        }
    }
}

/// Filter for entry kinds
#[derive(Debug, Clone, Copy)]
pub struct ModeFilter {
    mode: Mode,
}

impl ModeFilter {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }
}

impl EntryFilter for ModeFilter {
    fn matches(&self, entry: &Entry) -> bool {
        self.mode.includes(entry.is_dir())
    }

    fn description(&self) -> String {
        match self.mode {
            Mode::Files => "is a file".to_string(),
            Mode::Dirs => "is a directory".to_string(),
            Mode::All => "is a file or a directory".to_string(),
        }
    }
}
