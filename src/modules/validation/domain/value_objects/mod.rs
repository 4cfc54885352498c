mod catalog_presence;
mod correction;
mod match_verdict;

pub use catalog_presence::CatalogPresence;
pub use correction::Correction;
pub use match_verdict::MatchVerdict;
