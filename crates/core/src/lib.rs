// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod song;

pub use self::song::{Song, SongDetail, SongInvalidity};
