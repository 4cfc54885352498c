mod adapter;
mod config;
mod mapper;
mod models;

pub use adapter::MusicBrainzOracle;
pub use config::MusicBrainzConfig;
pub use mapper::MusicBrainzMapper;
pub use models::{ArtistCredit, Recording, RecordingSearch};
