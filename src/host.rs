//! host — the host embedding environment's output seam.
//!
//! The bridge never prints directly: engine diagnostics destined for the
//! standard streams are handed to a [`HostConsole`], which the embedding
//! environment implements over its own output and error channels. The
//! default [`StandardConsole`] writes to the process streams for plain Rust
//! hosts.

/// Output and error channels of the host embedding environment.
///
/// Implementations must be cheap to call and must not assume messages end
/// with a newline; the engine's formatted output is forwarded verbatim.
pub trait HostConsole: Send + Sync {
    /// Write text to the host's primary output channel.
    fn write_out(&self, text: &str);

    /// Write text to the host's error channel.
    fn write_err(&self, text: &str);
}

/// Default console backed by the process standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardConsole;

impl HostConsole for StandardConsole {
    fn write_out(&self, text: &str) {
        print!("{text}");
    }

    fn write_err(&self, text: &str) {
        eprint!("{text}");
    }
}
