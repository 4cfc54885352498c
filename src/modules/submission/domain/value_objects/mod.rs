mod canonical_url;
mod link_domain;
mod media_metadata;

pub use canonical_url::CanonicalUrl;
pub use link_domain::LinkDomain;
pub use media_metadata::MediaMetadata;
