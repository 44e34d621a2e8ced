// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

diesel::table! {
    song (row_id) {
        row_id -> BigInt,
        group -> Text,
        title -> Text,
        release_date -> Text,
        text -> Text,
        link -> Text,
    }
}
