use crate::modules::repost::MatchedOn;
use crate::modules::validation::MatchVerdict;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A community rule the submission appears to break.
///
/// `Display` renders the reason attached to the moderator report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    BadTitle,
    /// Title and link disagree; always one of the ambiguous verdicts
    PossibleTitleMismatch(MatchVerdict),
    AlbumStream,
    SelfPromotion,
    Repost {
        original_id: String,
        matched_on: MatchedOn,
    },
    LazyLinkPost,
    /// The music catalogue has no recording for the posted pair
    NotInCatalog,
}

impl Violation {
    /// Violations that warrant removal rather than a manual look
    pub fn is_definite(&self) -> bool {
        matches!(
            self,
            Violation::BadTitle | Violation::AlbumStream | Violation::Repost { .. }
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::BadTitle => write!(f, "Bad Title Format"),
            Violation::PossibleTitleMismatch(_) => write!(f, "Possible Bad Title/Link Match"),
            Violation::AlbumStream => write!(f, "Full Album Stream"),
            Violation::SelfPromotion => write!(f, "Possible Self-Promotion"),
            Violation::Repost { original_id, .. } => write!(f, "Repost of {}", original_id),
            Violation::LazyLinkPost => write!(f, "Link Posted As Text"),
            Violation::NotInCatalog => write!(f, "Not Found in Music Catalog"),
        }
    }
}
