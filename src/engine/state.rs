//! engine::state — process-wide engine lifecycle and option table.
//!
//! Purpose
//! -------
//! Hold the engine's singleton state: the is-initialized flag and the active
//! option table. First-time callers perform a full initialization with a
//! command-line-style token sequence; later callers clear and re-insert
//! options without reinitializing subsystems, so options never accumulate
//! across calls (last writer wins).
//!
//! Key behaviors
//! -------------
//! - Parse option tokens the way the engine's command line does: token 0 is
//!   the program name and is skipped, a `-flag` token may be followed by one
//!   value token, and a re-inserted flag replaces its earlier value. A token
//!   that parses as a number is always a value, even when it starts with `-`,
//!   so negative bounds and offsets survive intact.
//! - [`EngineState::initialize`] sets the flag; calling it twice is a
//!   non-success code. [`EngineState::reset_options`] requires the flag.
//! - [`EngineState::finalize`] tears everything down for the process.
//!
//! Invariants & assumptions
//! ------------------------
//! - Exactly one initialize/solve/teardown sequence is in flight at a time;
//!   concurrent solves are a documented precondition violation. The global
//!   instance sits behind a `Mutex` only so the static is sound, not as a
//!   concurrency feature.
use std::sync::{Mutex, MutexGuard};

use crate::engine::errors::{EngineError, EngineResult};

/// The engine's process-wide state: initialization flag plus option table.
#[derive(Debug, Default)]
pub struct EngineState {
    initialized: bool,
    options: Vec<(String, String)>,
}

impl EngineState {
    /// Fresh, uninitialized state with an empty option table.
    pub const fn new() -> Self {
        Self { initialized: false, options: Vec::new() }
    }

    /// Whether full initialization has already run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Perform full first-time initialization with the given option tokens.
    ///
    /// # Errors
    /// - [`EngineError::AlreadyInitialized`] if initialization already ran.
    /// - [`EngineError::OptionParse`] if a flag token is malformed; no
    ///   partial option state is kept on failure.
    pub fn initialize(&mut self, tokens: &[String]) -> EngineResult<()> {
        if self.initialized {
            return Err(EngineError::AlreadyInitialized);
        }
        let options = parse_tokens(tokens)?;
        self.options = options;
        self.initialized = true;
        Ok(())
    }

    /// Clear the active options and insert a new set.
    ///
    /// Does not reinitialize subsystems; only the option table changes.
    ///
    /// # Errors
    /// - [`EngineError::NotInitialized`] if initialization never ran.
    /// - [`EngineError::OptionParse`] on a malformed flag token; the old
    ///   option table is left untouched in that case.
    pub fn reset_options(&mut self, tokens: &[String]) -> EngineResult<()> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        let options = parse_tokens(tokens)?;
        self.options = options;
        Ok(())
    }

    /// Tear down the process-wide state: clears the option table and the
    /// initialization flag.
    pub fn finalize(&mut self) {
        self.options.clear();
        self.initialized = false;
    }

    /// Look up the active value for an option name (without the `-` prefix).
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// The active option table, in insertion order.
    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }
}

/// Parse a command-line-style token sequence into an option table.
///
/// Token 0 is the program name and is skipped. Each remaining token must be
/// a `-flag`; the following token is taken as that flag's value unless it
/// starts a new flag itself, in which case the flag stands alone with an
/// empty value. A token that parses as a number is always a value, never a
/// flag, so `-bound -0.5` attaches `-0.5` to `bound` instead of spawning a
/// flag named `0.5`. A repeated flag replaces the earlier entry (last writer
/// wins).
fn parse_tokens(tokens: &[String]) -> EngineResult<Vec<(String, String)>> {
    let mut options: Vec<(String, String)> = Vec::new();
    let mut i = 1;
    while i < tokens.len() {
        let token = &tokens[i];
        let name = match token.strip_prefix('-') {
            Some(name) if !name.is_empty() && !is_number_token(token) => name.to_string(),
            _ => return Err(EngineError::OptionParse { token: token.clone() }),
        };
        let value = match tokens.get(i + 1) {
            Some(next) if !next.starts_with('-') || is_number_token(next) => {
                i += 1;
                next.clone()
            }
            _ => String::new(),
        };
        options.retain(|(n, _)| n != &name);
        options.push((name, value));
        i += 1;
    }
    Ok(options)
}

/// Whether a token reads as a number rather than a flag name.
fn is_number_token(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}

static GLOBAL_STATE: Mutex<EngineState> = Mutex::new(EngineState::new());

/// Lock the process-wide engine state.
///
/// A poisoned lock is recovered rather than propagated; the state itself is
/// plain data and stays structurally valid.
pub fn global() -> MutexGuard<'static, EngineState> {
    GLOBAL_STATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
