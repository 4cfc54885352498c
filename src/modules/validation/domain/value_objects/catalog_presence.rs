use serde::{Deserialize, Serialize};

/// Whether the music catalogue knows the posted (artist, song)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogPresence {
    /// Holds the catalogue entry that matched
    Listed(String),
    Unlisted,
    /// The catalogue could not be asked; no verdict
    Unknown(String),
}

impl CatalogPresence {
    pub fn is_unlisted(&self) -> bool {
        matches!(self, CatalogPresence::Unlisted)
    }
}
