// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use test_log::test;

use songlib_core::Song;
use songlib_repo::{
    Pagination, RecordId, RepoError,
    song::{SongFilter, SongRepo},
};

use crate::{
    prelude::Connection,
    tests::{TestResult, establish_connection},
};

struct Fixture {
    db: crate::DbConnection,
}

impl Fixture {
    fn new() -> TestResult<Self> {
        let db = establish_connection()?;
        Ok(Self { db })
    }

    fn insert_song(&mut self, song: &Song) -> TestResult<RecordId> {
        let id = Connection::new(&mut self.db).insert_song(song)?;
        Ok(id)
    }
}

fn sample_song(group: &str, title: &str) -> Song {
    Song {
        group: group.to_owned(),
        title: title.to_owned(),
        release_date: "16.07.2006".to_owned(),
        text: "First verse\n\nSecond verse".to_owned(),
        link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_owned(),
    }
}

const ALL_SONGS: Pagination = Pagination {
    offset: 0,
    limit: 100,
};

#[test]
fn insert_song_then_load_it() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    let created_song = sample_song("Muse", "Supermassive Black Hole");
    let id = fixture.insert_song(&created_song)?;

    let mut db = Connection::new(&mut fixture.db);
    let loaded_song = db.load_song(id)?;
    assert_eq!(created_song, loaded_song);
    Ok(())
}

#[test]
fn load_song_with_unknown_id_should_fail() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    let id = fixture.insert_song(&sample_song("Muse", "Uprising"))?;

    let mut db = Connection::new(&mut fixture.db);
    assert!(matches!(db.load_song(id + 1), Err(RepoError::NotFound)));
    Ok(())
}

#[test]
fn list_songs_filtered_by_group_substring() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    fixture.insert_song(&sample_song("Muse", "Uprising"))?;
    fixture.insert_song(&sample_song("Amused Ones", "Something"))?;
    fixture.insert_song(&sample_song("Queen", "Bohemian Rhapsody"))?;

    let mut db = Connection::new(&mut fixture.db);
    // Matching is case-insensitive and matches anywhere in the value.
    let filter = SongFilter {
        group: Some("mUsE".to_owned()),
        ..Default::default()
    };
    let (songs, total) = db.list_songs(&filter, &ALL_SONGS)?;
    assert_eq!(2, total);
    assert_eq!(2, songs.len());
    assert!(
        songs
            .iter()
            .all(|(_, song)| song.group.to_lowercase().contains("muse"))
    );
    Ok(())
}

#[test]
fn list_songs_filters_are_conjunctive() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    fixture.insert_song(&sample_song("Muse", "Uprising"))?;
    fixture.insert_song(&sample_song("Muse", "Starlight"))?;
    fixture.insert_song(&sample_song("Queen", "Starlight Serenade"))?;

    let mut db = Connection::new(&mut fixture.db);
    let filter = SongFilter {
        group: Some("Muse".to_owned()),
        title: Some("star".to_owned()),
        ..Default::default()
    };
    let (songs, total) = db.list_songs(&filter, &ALL_SONGS)?;
    assert_eq!(1, total);
    assert_eq!(1, songs.len());
    assert_eq!("Starlight", songs[0].1.title);
    Ok(())
}

#[test]
fn list_songs_filtered_by_exact_release_date() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    let mut song = sample_song("Muse", "Uprising");
    song.release_date = "07.09.2009".to_owned();
    fixture.insert_song(&song)?;
    fixture.insert_song(&sample_song("Muse", "Supermassive Black Hole"))?;

    let mut db = Connection::new(&mut fixture.db);
    // The release date is matched verbatim, not as a substring.
    let filter = SongFilter {
        release_date: Some("2009".to_owned()),
        ..Default::default()
    };
    let (songs, total) = db.list_songs(&filter, &ALL_SONGS)?;
    assert_eq!(0, total);
    assert!(songs.is_empty());

    let filter = SongFilter {
        release_date: Some("07.09.2009".to_owned()),
        ..Default::default()
    };
    let (songs, total) = db.list_songs(&filter, &ALL_SONGS)?;
    assert_eq!(1, total);
    assert_eq!("Uprising", songs[0].1.title);
    Ok(())
}

#[test]
fn list_songs_filtered_by_link_with_like_placeholder() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    let mut song = sample_song("Muse", "Uprising");
    song.link = "https://example.com/path_with_underscores".to_owned();
    fixture.insert_song(&song)?;
    let mut other = sample_song("Muse", "Starlight");
    other.link = "https://example.com/pathXwithXunderscores".to_owned();
    fixture.insert_song(&other)?;

    let mut db = Connection::new(&mut fixture.db);
    // LIKE placeholders in the filter term must only match literally.
    let filter = SongFilter {
        link: Some("path_with".to_owned()),
        ..Default::default()
    };
    let (songs, total) = db.list_songs(&filter, &ALL_SONGS)?;
    assert_eq!(1, total);
    assert_eq!("Uprising", songs[0].1.title);
    Ok(())
}

#[test]
fn list_songs_total_is_unaffected_by_pagination() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    for i in 0..5 {
        fixture.insert_song(&sample_song("Muse", &format!("Song {i}")))?;
    }

    let mut db = Connection::new(&mut fixture.db);
    let filter = SongFilter::default();
    let pagination = Pagination {
        offset: 0,
        limit: 2,
    };
    let (songs, total) = db.list_songs(&filter, &pagination)?;
    assert_eq!(5, total);
    assert_eq!(2, songs.len());

    // Beyond the last page.
    let pagination = Pagination {
        offset: 10,
        limit: 2,
    };
    let (songs, total) = db.list_songs(&filter, &pagination)?;
    assert_eq!(5, total);
    assert!(songs.is_empty());
    Ok(())
}

#[test]
fn list_songs_with_negative_offset_starts_at_first_row() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    fixture.insert_song(&sample_song("Muse", "Uprising"))?;
    fixture.insert_song(&sample_song("Muse", "Starlight"))?;

    let mut db = Connection::new(&mut fixture.db);
    // SQLite treats a negative OFFSET like zero.
    let pagination = Pagination {
        offset: -10,
        limit: 10,
    };
    let (songs, total) = db.list_songs(&SongFilter::default(), &pagination)?;
    assert_eq!(2, total);
    assert_eq!(2, songs.len());
    Ok(())
}

#[test]
fn update_song_replaces_all_fields() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    let id = fixture.insert_song(&sample_song("Muse", "Uprising"))?;

    let mut db = Connection::new(&mut fixture.db);
    let updated_song = Song {
        group: "Queen".to_owned(),
        title: "Bohemian Rhapsody".to_owned(),
        release_date: "31.10.1975".to_owned(),
        text: "Is this the real life?".to_owned(),
        link: "https://example.com/bohemian-rhapsody".to_owned(),
    };
    db.update_song(id, &updated_song)?;

    let loaded_song = db.load_song(id)?;
    assert_eq!(updated_song, loaded_song);
    Ok(())
}

#[test]
fn update_song_with_unknown_id_should_fail() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    let id = fixture.insert_song(&sample_song("Muse", "Uprising"))?;

    let mut db = Connection::new(&mut fixture.db);
    let updated_song = sample_song("Muse", "Starlight");
    assert!(matches!(
        db.update_song(id + 1, &updated_song),
        Err(RepoError::NotFound)
    ));
    // The stored song must not have been touched.
    assert_eq!("Uprising", db.load_song(id)?.title);
    Ok(())
}

#[test]
fn purge_song_is_idempotent() -> TestResult<()> {
    let mut fixture = Fixture::new()?;
    let id = fixture.insert_song(&sample_song("Muse", "Uprising"))?;

    let mut db = Connection::new(&mut fixture.db);
    db.purge_song(id)?;
    assert!(matches!(db.load_song(id), Err(RepoError::NotFound)));
    // Repeated purging of the same id succeeds silently.
    db.purge_song(id)?;
    Ok(())
}
