use super::models::{Recording, RecordingSearch};

/// Maps MusicBrainz recordings onto `"artist - song"` oracle results
#[derive(Debug, Clone)]
pub struct MusicBrainzMapper {
    min_score: u32,
}

impl MusicBrainzMapper {
    pub fn new(min_score: u32) -> Self {
        Self { min_score }
    }

    /// Joined artist credit, e.g. `"Devin Townsend feat. Anneke van Giersbergen"`
    pub fn credited_artist(recording: &Recording) -> String {
        recording
            .artist_credit
            .iter()
            .map(|credit| format!("{}{}", credit.name, credit.joinphrase))
            .collect::<String>()
            .trim()
            .to_string()
    }

    pub fn map_recording(&self, recording: &Recording) -> Option<String> {
        if recording.score.unwrap_or(100) < self.min_score {
            return None;
        }
        let artist = Self::credited_artist(recording);
        if artist.is_empty() || recording.title.trim().is_empty() {
            return None;
        }
        Some(format!("{} - {}", artist, recording.title.trim()))
    }

    /// Results in the order MusicBrainz ranked them, duplicates dropped
    pub fn map_search(&self, search: &RecordingSearch) -> Vec<String> {
        let mut results: Vec<String> = Vec::new();
        for mapped in search.recordings.iter().filter_map(|r| self.map_recording(r)) {
            if !results.contains(&mapped) {
                results.push(mapped);
            }
        }
        results
    }
}
