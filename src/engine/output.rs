//! engine::output — the formatted-output primitive and its host override.
//!
//! Purpose
//! -------
//! Route every piece of diagnostic text the engine produces. Text aimed at
//! the engine's standard output or standard error handles is rendered into a
//! bounded local buffer and handed to the installed [`HostConsole`]; text
//! aimed at any other viewer (files, string writers) passes through the
//! default formatting path unchanged.
//!
//! Key behaviors
//! -------------
//! - [`install_output_hook`] is process-wide and idempotent: the first call
//!   installs, later calls are no-ops and report that nothing changed.
//! - Rendering for the standard streams is capped at [`MAX_FORMATTED_LEN`]
//!   bytes; longer messages are truncated on a char boundary rather than
//!   corrupting memory or failing.
//! - With no hook installed, standard-stream text falls back to the real
//!   process streams, so the primitive is usable before installation.
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

use crate::engine::errors::{EngineError, EngineResult};
use crate::host::HostConsole;

/// Upper bound on a single rendered standard-stream message, in bytes.
pub const MAX_FORMATTED_LEN: usize = 8 * 1024;

/// Where a formatted message is headed.
pub enum StreamTarget<'w> {
    /// The engine's standard output handle.
    Stdout,
    /// The engine's standard error handle.
    Stderr,
    /// Any other viewer; forwarded unchanged.
    Writer(&'w mut dyn Write),
}

static OUTPUT_HOOK: OnceLock<Box<dyn HostConsole>> = OnceLock::new();

/// Install the process-wide host console override.
///
/// Returns `true` if this call installed the hook, `false` if one was
/// already installed (in which case the new console is dropped and the
/// existing hook stays active for the process lifetime).
pub fn install_output_hook(console: Box<dyn HostConsole>) -> bool {
    OUTPUT_HOOK.set(console).is_ok()
}

/// The engine's formatted-output primitive.
///
/// Standard-stream targets are rendered into a bounded buffer and routed to
/// the installed host console (or the process streams when none is
/// installed). `Writer` targets receive the formatted text unchanged and
/// unbounded.
///
/// # Errors
/// Returns [`EngineError::OutputFailed`] if a `Writer` target fails to
/// accept the text.
pub fn printf(target: StreamTarget<'_>, args: fmt::Arguments<'_>) -> EngineResult<()> {
    match target {
        StreamTarget::Writer(writer) => {
            writer.write_fmt(args).map_err(|e| EngineError::OutputFailed { text: e.to_string() })
        }
        StreamTarget::Stdout => {
            let text = bounded_format(args);
            match OUTPUT_HOOK.get() {
                Some(console) => console.write_out(&text),
                None => print!("{text}"),
            }
            Ok(())
        }
        StreamTarget::Stderr => {
            let text = bounded_format(args);
            match OUTPUT_HOOK.get() {
                Some(console) => console.write_err(&text),
                None => eprint!("{text}"),
            }
            Ok(())
        }
    }
}

/// Render `args`, truncating at [`MAX_FORMATTED_LEN`] bytes on a char
/// boundary.
fn bounded_format(args: fmt::Arguments<'_>) -> String {
    let mut text = fmt::format(args);
    if text.len() > MAX_FORMATTED_LEN {
        let mut end = MAX_FORMATTED_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}
