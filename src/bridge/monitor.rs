//! bridge::monitor — per-iteration progress line for the legacy driver.
//!
//! The residual field is exact-threshold-gated for output parity with the
//! legacy driver: above `1e-6` the numeric value is printed, between
//! `1e-11` and `1e-6` the literal `< 1.0e-6`, and below that the literal
//! `< 1.0e-11`. Numerics are rendered `%g`-style (six significant digits,
//! signed two-digit exponent) and the line keeps the driver's trailing
//! space before the newline, so the emitted bytes match. The line is
//! written through the engine's standard-output path, so host output
//! redirection applies.
use crate::bridge::errors::BridgeResult;
use crate::engine::output::{printf, StreamTarget};
use crate::engine::status::SolutionStatus;

/// Render the monitor line for one iteration.
///
/// Format: `iter = <n>, Function value <v>, Residual: <r> \n`, with the
/// three-tier residual gating described in the module docs.
pub fn format_monitor_line(status: &SolutionStatus) -> String {
    let residual = if status.gradient_norm > 1e-6 {
        format_g(status.gradient_norm)
    } else if status.gradient_norm > 1e-11 {
        "< 1.0e-6".to_string()
    } else {
        "< 1.0e-11".to_string()
    };
    format!(
        "iter = {:>3}, Function value {}, Residual: {} \n",
        status.iterations,
        format_g(status.objective),
        residual
    )
}

/// Render a value the way a `%g` conversion does: six significant digits,
/// trailing zeros trimmed, scientific notation with a signed two-digit
/// exponent when the decimal exponent falls outside `[-4, 5]`.
fn format_g(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    if !(-4..6).contains(&exponent) {
        let rendered = format!("{value:.5e}");
        let (mantissa, exp_part) = match rendered.split_once('e') {
            Some(parts) => parts,
            None => return rendered,
        };
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let (sign, digits) = match exp_part.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exp_part),
        };
        format!("{mantissa}e{sign}{digits:0>2}")
    } else {
        let precision = (5 - exponent).max(0) as usize;
        let rendered = format!("{value:.precision$}");
        if rendered.contains('.') {
            rendered.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            rendered
        }
    }
}

/// Monitor callback: format the iteration line and write it to the engine's
/// standard output (redirected into the host console when a hook is
/// installed).
///
/// # Errors
/// Propagates an output failure from the engine's print primitive.
pub fn monitor(status: &SolutionStatus) -> BridgeResult<()> {
    let line = format_monitor_line(status);
    printf(StreamTarget::Stdout, format_args!("{line}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_with_gnorm(gnorm: f64) -> SolutionStatus {
        SolutionStatus::new(4, 2.5, gnorm, 0.0, 0.0)
    }

    #[test]
    // Purpose
    // -------
    // Above the 1e-6 threshold the numeric residual is printed, and the
    // whole line is byte-identical to the legacy driver's output, trailing
    // space and two-digit exponent included.
    fn residual_above_first_threshold_prints_the_value() {
        let line = format_monitor_line(&status_with_gnorm(1e-5));

        assert_eq!(line, "iter =   4, Function value 2.5, Residual: 1e-05 \n");
    }

    #[test]
    // Purpose
    // -------
    // Between 1e-11 and 1e-6 the literal text `< 1.0e-6` replaces the
    // value; below 1e-11 the literal `< 1.0e-11` does. Both keep the
    // trailing space before the newline.
    fn residual_tiers_print_the_exact_literals() {
        let mid = format_monitor_line(&status_with_gnorm(1e-9));
        let tiny = format_monitor_line(&status_with_gnorm(1e-13));

        assert!(mid.ends_with("Residual: < 1.0e-6 \n"));
        assert!(!mid.contains("1e-09"));
        assert!(tiny.ends_with("Residual: < 1.0e-11 \n"));
    }

    #[test]
    // The gating is strict: exactly 1e-6 falls into the middle tier.
    fn threshold_boundaries_are_strict() {
        let at_boundary = format_monitor_line(&status_with_gnorm(1e-6));

        assert!(at_boundary.contains("Residual: < 1.0e-6 "));
    }

    #[test]
    // Purpose
    // -------
    // Numeric rendering matches the `%g` conversion across its regimes:
    // trimmed fixed notation inside the window, signed two-digit exponents
    // outside it, six significant digits throughout.
    fn numeric_rendering_matches_g_conversion() {
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(2.5), "2.5");
        assert_eq!(format_g(0.125), "0.125");
        assert_eq!(format_g(0.000123), "0.000123");
        assert_eq!(format_g(123456.0), "123456");
        assert_eq!(format_g(1e-5), "1e-05");
        assert_eq!(format_g(-3.5e300), "-3.5e+300");
        assert_eq!(format_g(1234567.0), "1.23457e+06");
    }
}
