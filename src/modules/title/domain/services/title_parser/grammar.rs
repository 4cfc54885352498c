/// Noise vocabulary for one family of titles.
///
/// Community submission titles and provider media titles carry different
/// noise, so each gets its own keyword list and delimiter set.
#[derive(Debug, Clone)]
pub struct TitleGrammar {
    pub name: &'static str,
    /// Words that, after a delimiter, mark the end of the song name
    pub keywords: Vec<String>,
    /// Characters that may introduce trailing noise
    pub delimiters: Vec<char>,
    /// Treat a four-digit year after a delimiter as noise
    pub match_years: bool,
}

impl TitleGrammar {
    /// Grammar for titles typed by community members
    pub fn submission() -> Self {
        Self {
            name: "submission",
            keywords: [
                "favorite",
                "video",
                "full",
                "tour",
                "live",
                "premiere",
                "released",
                "cover",
                "version",
                "music",
                "album",
                "drum",
                "guitar",
                "bass",
                "vox",
                "vocal",
                "voice",
                "playthrough",
                "ffo",
                "for fans of",
                "official",
                "new",
                "metal",
                "prog",
                "recommend",
                "test post",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            delimiters: vec!['-', '–', '—', '(', '[', '{', '|', ':', ';'],
            match_years: true,
        }
    }

    /// Grammar for video titles supplied by a media provider
    pub fn media() -> Self {
        Self {
            name: "media",
            keywords: [
                "full",
                "audio",
                "video",
                "instrumental",
                "review",
                "album",
                "official",
                "premiere",
                "lyric",
                "playthrough",
                "single",
                "cover",
                "version",
                "live",
                "music",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            delimiters: vec!['-', '–', '—', '(', '[', '{', '|'],
            match_years: true,
        }
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keywords.push(keyword.to_string());
        self
    }
}
