//! Match-action engine
//!
//! Decides whether an entry is selected and runs the configured actions on
//! it: printing the path, substituting placeholders into the command template,
//! asking for confirmation and launching the command.

use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, Write};
use std::process::Command;
use log::{debug, warn};

use super::entry::Entry;
use super::filter::{EntryFilter, NameFilter};
use super::options::FindOptions;
use crate::errors::{FindError, FindResult};

/// Yes/no confirmation capability used by `--interactive-exec`
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Capability for running a command with inherited standard streams
pub trait Launcher {
    /// Run the command to completion. The exit status is not interpreted.
    fn launch(&mut self, command: &[OsString]) -> FindResult<()>;
}

/// Asks on `output` and reads replies from `input` until it gets `y` or `n`
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            write!(self.output, "{} (y,N) ", prompt)?;
            self.output.flush()?;

            let mut reply = String::new();
            if self.input.read_line(&mut reply)? == 0 {
                // end of input
                writeln!(self.output)?;
                return Ok(false);
            }
            match reply.trim_end_matches(['\r', '\n']).to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => continue,
            }
        }
    }
}

impl PromptConfirm<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr so stdout stays clean for piping
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.ask(prompt).unwrap_or_else(|e| {
            warn!("Failed to read confirmation: {}", e);
            false
        })
    }
}

/// Launches commands as child processes
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, command: &[OsString]) -> FindResult<()> {
        let (program, args) = command.split_first().ok_or(FindError::EmptyCommand)?;
        match Command::new(program).args(args).status() {
            Ok(status) if !status.success() => {
                debug!("Command `{}` exited with {}", display_command(command), status);
            }
            Ok(_) => {}
            Err(e) => warn!("Failed to run `{}`: {}", program.to_string_lossy(), e),
        }
        Ok(())
    }
}

/// Replace `{path}`, `{dirname}` and `{basename}` in every token
///
/// Values are inserted as raw OS strings, so names that are not valid UTF-8
/// reach the command unchanged. Substituted values are never scanned again,
/// so a path that itself contains a placeholder is inserted verbatim.
pub fn prepare_command(template: &[String], entry: &Entry) -> Vec<OsString> {
    let placeholders = [
        ("{path}", entry.path().as_os_str()),
        ("{dirname}", entry.dir_name().as_os_str()),
        ("{basename}", entry.base_name_os()),
    ];

    template
        .iter()
        .map(|token| substitute(token, &placeholders))
        .collect()
}

fn substitute(token: &str, placeholders: &[(&str, &OsStr)]) -> OsString {
    let mut out = OsString::with_capacity(token.len());
    let mut rest = token;

    loop {
        let next = placeholders
            .iter()
            .filter_map(|&(key, value)| rest.find(key).map(|at| (at, key, value)))
            .min_by_key(|&(at, _, _)| at);

        match next {
            Some((at, key, value)) => {
                out.push(&rest[..at]);
                out.push(value);
                rest = &rest[at + key.len()..];
            }
            None => {
                out.push(rest);
                return out;
            }
        }
    }
}

fn display_command(command: &[OsString]) -> String {
    command
        .iter()
        .map(|token| token.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write an OS string as-is (raw bytes on unix)
fn write_os<W: Write>(out: &mut W, value: &OsStr) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(value.as_bytes())
    }
    #[cfg(not(unix))]
    {
        out.write_all(value.to_string_lossy().as_bytes())
    }
}

/// Applies the name filter to entries and performs the configured actions
pub struct ActionEngine<'a, W, C, L> {
    options: &'a FindOptions,
    filter: NameFilter,
    out: W,
    confirm: C,
    launcher: L,
}

impl<'a, W: Write, C: Confirm, L: Launcher> ActionEngine<'a, W, C, L> {
    pub fn new(
        options: &'a FindOptions,
        filter: NameFilter,
        out: W,
        confirm: C,
        launcher: L,
    ) -> Self {
        Self {
            options,
            filter,
            out,
            confirm,
            launcher,
        }
    }

    /// Whether the entry is selected: name match XOR invert-match
    pub fn evaluate(&self, entry: &Entry) -> bool {
        self.filter.matches(entry)
    }

    /// Run the actions on a selected entry
    pub fn act(&mut self, entry: &Entry) -> FindResult<()> {
        if self.options.display {
            if self.options.prefix {
                let tag: &[u8] = if entry.is_dir() { b"d: " } else { b"f: " };
                self.out.write_all(tag)?;
            }
            write_os(&mut self.out, entry.path().as_os_str())?;
            self.out.write_all(self.options.delimiter.as_bytes())?;
        }

        let Some(template) = &self.options.execute else {
            return Ok(());
        };

        let command = prepare_command(template, entry);
        if self.options.verbose_exec {
            for (i, token) in command.iter().enumerate() {
                if i > 0 {
                    self.out.write_all(b" ")?;
                }
                write_os(&mut self.out, token)?;
            }
            self.out.write_all(b"\n")?;
        }
        // the child shares our stdout
        self.out.flush()?;

        if self.options.interactive_exec {
            let prompt = format!("Execute command on {}?", entry.path().display());
            if !self.confirm.confirm(&prompt) {
                debug!("Skipped {}", entry.path().display());
                return Ok(());
            }
        }

        self.launcher.launch(&command)
    }

    /// Evaluate the entry and act on it when selected
    pub fn process(&mut self, entry: &Entry) -> FindResult<bool> {
        if !self.evaluate(entry) {
            return Ok(false);
        }
        self.act(entry)?;
        Ok(true)
    }

    pub fn flush(&mut self) -> FindResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
