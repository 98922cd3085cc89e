//! Pattern compilation
//!
//! Turns the user's pattern into a single [`Matcher`]. Regular expressions are
//! compiled as given; glob patterns are translated to an unanchored regular
//! expression first, so by default they behave as a substring search. Anchors
//! are only added when `--begin` / `--end` ask for them.

use regex::{Regex, RegexBuilder};

use super::options::FindOptions;
use crate::errors::{FindError, FindResult};

/// Flags that influence how a pattern is compiled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    pub is_regex: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub dot_all: bool,
    pub match_begin: bool,
    pub match_end: bool,
}

impl PatternFlags {
    pub fn from_options(options: &FindOptions) -> Self {
        Self {
            is_regex: options.is_regex,
            ignore_case: options.ignore_case,
            multiline: options.multiline,
            dot_all: options.dot_all,
            match_begin: options.match_begin,
            match_end: options.match_end,
        }
    }
}

/// Compiled, read-only matcher shared by every tested entry
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    multiline: bool,
    dot_all: bool,
}

impl Matcher {
    /// Compile `pattern` according to `flags`
    ///
    /// In regex mode the anchoring flags are ignored and the expression keeps
    /// full control of anchoring. In glob mode the multiline and dot-all flags
    /// are ignored.
    pub fn compile(pattern: &str, flags: &PatternFlags) -> FindResult<Self> {
        let (expression, multiline, dot_all) = if flags.is_regex {
            (pattern.to_string(), flags.multiline, flags.dot_all)
        } else {
            let mut expression = glob_to_regex(pattern);
            if flags.match_begin {
                expression.insert(0, '^');
            }
            if flags.match_end {
                expression.push('$');
            }
            (expression, false, false)
        };

        let regex = RegexBuilder::new(&expression)
            .case_insensitive(flags.ignore_case)
            .multi_line(multiline)
            .dot_matches_new_line(dot_all)
            .build()
            .map_err(|e| FindError::PatternError {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            regex,
            multiline,
            dot_all,
        })
    }

    /// Search for the pattern anywhere in `name`
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The final regular expression, after glob translation and anchoring
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn multiline(&self) -> bool {
        self.multiline
    }

    pub fn dot_all(&self) -> bool {
        self.dot_all
    }
}

/// Translate a shell glob into an unanchored regular expression
///
/// `*` matches any run of characters, `?` a single character, and `[...]`
/// sets are passed through (`[!...]` negates). An unterminated `[` is taken
/// literally. Everything else is escaped.
pub fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < n {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < n && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => {
                let mut j = i;
                if j < n && chars[j] == '!' {
                    j += 1;
                }
                if j < n && chars[j] == ']' {
                    j += 1;
                }
                while j < n && chars[j] != ']' {
                    j += 1;
                }
                if j >= n {
                    out.push_str(r"\[");
                } else {
                    push_class(&mut out, &chars[i..j]);
                    i = j + 1;
                }
            }
            _ => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }

    format!("(?s:{})", out)
}

fn push_class(out: &mut String, members: &[char]) {
    out.push('[');
    let mut rest = members;
    match rest.first() {
        Some('!') => {
            out.push('^');
            rest = &rest[1..];
        }
        Some('^') => {
            out.push_str(r"\^");
            rest = &rest[1..];
        }
        _ => {}
    }
    for &c in rest {
        match c {
            // set operators and nesting in the regex class syntax
            '\\' | '[' | ']' | '&' | '~' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push(']');
}
