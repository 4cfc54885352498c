mod oembed;

pub use oembed::{decode_media_metadata, OEmbedPayload};
