use serde::{Deserialize, Serialize};

/// Outcome of asking the search oracle to corroborate an ambiguous guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Correction {
    /// An oracle result passed the failed check; holds that result
    Corroborated(String),
    NotCorroborated,
    OracleUnavailable(String),
    /// Correction is switched off, or no oracle is wired in
    Disabled,
}

impl Correction {
    pub fn is_corroborated(&self) -> bool {
        matches!(self, Correction::Corroborated(_))
    }
}
