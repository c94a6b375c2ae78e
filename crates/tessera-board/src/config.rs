//! Board configuration and validation.

use tessera_core::ConfigError;

use crate::scoring::ScoringRules;

/// Builder-input for constructing a [`Board`](crate::Board).
///
/// Checked once by [`validate()`](BoardConfig::validate) when the board is
/// built; immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardConfig {
    /// Point values used when features are scored.
    pub rules: ScoringRules,
}

impl BoardConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules.validate()
    }
}
