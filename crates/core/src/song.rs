// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Delimiter that separates two verses within the lyrics text.
pub const VERSE_SEPARATOR: &str = "\n\n";

/// A single catalog record.
///
/// The identity of a stored song is assigned by the storage layer
/// and carried separately from this body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Song {
    pub group: String,

    /// The song title
    ///
    /// Named `song` in all exchanged JSON data.
    #[cfg_attr(feature = "serde", serde(rename = "song"))]
    pub title: String,

    /// Free-form release date, stored verbatim as provided upstream.
    pub release_date: String,

    /// Lyrics, with verses separated by [`VERSE_SEPARATOR`].
    pub text: String,

    pub link: String,
}

impl Song {
    /// Split the lyrics into verses.
    ///
    /// Splitting an empty text yields a single, empty verse.
    #[must_use]
    pub fn verses(&self) -> Vec<&str> {
        self.text.split(VERSE_SEPARATOR).collect()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SongInvalidity {
    GroupEmpty,
    TitleEmpty,
}

impl Validate for Song {
    type Invalidity = SongInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            group,
            title,
            release_date: _,
            text: _,
            link: _,
        } = self;
        ValidationContext::new()
            .invalidate_if(group.trim().is_empty(), Self::Invalidity::GroupEmpty)
            .invalidate_if(title.trim().is_empty(), Self::Invalidity::TitleEmpty)
            .into()
    }
}

/// The result of an external metadata lookup.
///
/// Merged into a new [`Song`] at creation time, never stored on its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SongDetail {
    pub release_date: String,
    pub text: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_with_lyrics(text: &str) -> Song {
        Song {
            group: "Muse".into(),
            title: "Supermassive Black Hole".into(),
            text: text.into(),
            ..Default::default()
        }
    }

    #[test]
    fn split_verses() {
        let song = song_with_lyrics("Verse 1\n\nVerse 2\n\nVerse 3");
        assert_eq!(vec!["Verse 1", "Verse 2", "Verse 3"], song.verses());
    }

    #[test]
    fn single_verse_without_separator() {
        let song = song_with_lyrics("Verse 1\nstill verse 1");
        assert_eq!(vec!["Verse 1\nstill verse 1"], song.verses());
    }

    #[test]
    fn empty_lyrics_yield_single_empty_verse() {
        let song = song_with_lyrics("");
        assert_eq!(vec![""], song.verses());
    }

    #[test]
    fn validate_song() {
        let song = song_with_lyrics("Verse 1");
        assert!(song.validate().is_ok());
    }

    #[test]
    fn should_fail_validation_with_empty_group() {
        let mut song = song_with_lyrics("Verse 1");
        song.group = String::new();
        assert!(song.validate().is_err());
        // Whitespace-only counts as empty.
        song.group = "   ".into();
        assert!(song.validate().is_err());
    }

    #[test]
    fn should_fail_validation_with_empty_title() {
        let mut song = song_with_lyrics("Verse 1");
        song.title = String::new();
        assert!(song.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialized_field_names() {
        let song = Song {
            group: "Muse".into(),
            title: "Supermassive Black Hole".into(),
            release_date: "2006-07-16".into(),
            text: "Some lyrics".into(),
            link: "https://example.com".into(),
        };
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(
            serde_json::json!({
                "group": "Muse",
                "song": "Supermassive Black Hole",
                "releaseDate": "2006-07-16",
                "text": "Some lyrics",
                "link": "https://example.com",
            }),
            json
        );
    }
}
