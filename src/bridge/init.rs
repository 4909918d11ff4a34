//! bridge::init — host configuration into engine initialization.
//!
//! Purpose
//! -------
//! Turn an ordered host configuration mapping into the engine's
//! command-line-style option tokens and drive the engine's idempotent
//! initialization: the first call performs full initialization, every later
//! call clears and re-inserts options without reinitializing subsystems.
//! Options from different calls therefore never accumulate.
//!
//! Key behaviors
//! -------------
//! - Token 0 is an empty program-name placeholder; each mapping entry
//!   becomes a `-name` token followed by its value token, in mapping order.
//! - Re-setting a name in the mapping overwrites its value in place, so a
//!   later entry wins without reordering the rest.
use crate::bridge::errors::BridgeResult;
use crate::engine::state;

/// Ordered name/value configuration supplied by the host driver.
///
/// Insertion order is preserved; [`ConfigMapping::set`] on an existing name
/// replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMapping {
    entries: Vec<(String, String)>,
}

impl ConfigMapping {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, overwriting in place if the name exists.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Iterate the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ConfigMapping {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (name, value) in iter {
            let (name, value) = (name.into(), value.into());
            mapping.set(&name, &value);
        }
        mapping
    }
}

/// Render a mapping as engine option tokens.
///
/// The token sequence is `["", "-name1", "value1", "-name2", "value2", ...]`
/// in mapping order; the leading empty token stands in for the program name
/// the engine's parser skips.
pub fn option_tokens(config: &ConfigMapping) -> Vec<String> {
    let mut tokens = Vec::with_capacity(1 + 2 * config.len());
    tokens.push(String::new());
    for (name, value) in config.iter() {
        tokens.push(format!("-{name}"));
        tokens.push(value.to_string());
    }
    tokens
}

/// Initialize the engine with the given configuration, idempotently.
///
/// On the first call the engine is fully initialized with the mapping's
/// option tokens. On every later call the active option table is cleared
/// and replaced with this mapping's options; subsystems are not
/// reinitialized and earlier options do not survive.
///
/// # Errors
/// Converted engine codes from option parsing or the lifecycle calls.
pub fn initialize_engine(config: &ConfigMapping) -> BridgeResult<()> {
    let tokens = option_tokens(config);
    let mut engine = state::global();
    if engine.is_initialized() {
        engine.reset_options(&tokens)?;
    } else {
        engine.initialize(&tokens)?;
    }
    Ok(())
}

/// Tear down the process-wide engine state.
///
/// After this call the next [`initialize_engine`] performs full
/// initialization again.
pub fn finalize_engine() {
    state::global().finalize();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // The token sequence starts with the program-name placeholder and lists
    // each entry as a flag/value pair in mapping order.
    fn option_tokens_have_placeholder_and_ordered_pairs() {
        // Arrange
        let config: ConfigMapping =
            [("tao_type", "pounders"), ("tao_max_it", "50")].into_iter().collect();

        // Act
        let tokens = option_tokens(&config);

        // Assert
        assert_eq!(tokens, vec!["", "-tao_type", "pounders", "-tao_max_it", "50"]);
    }

    #[test]
    fn empty_mapping_yields_only_the_placeholder() {
        let tokens = option_tokens(&ConfigMapping::new());

        assert_eq!(tokens, vec![String::new()]);
    }

    #[test]
    // Purpose
    // -------
    // Re-setting a name overwrites its value in place without reordering
    // the other entries.
    fn set_overwrites_in_place() {
        let mut config = ConfigMapping::new();
        config.set("a", "1");
        config.set("b", "2");
        config.set("a", "3");

        let entries: Vec<_> = config.iter().collect();

        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
        assert_eq!(config.len(), 2);
    }
}
