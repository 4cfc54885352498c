mod music_search_oracle;

pub use music_search_oracle::MusicSearchOracle;
#[cfg(test)]
pub use music_search_oracle::MockMusicSearchOracle;
