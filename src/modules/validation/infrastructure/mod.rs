pub mod musicbrainz;
