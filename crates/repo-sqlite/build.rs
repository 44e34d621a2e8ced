// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

fn main() {
    // Update embedded migrations after the SQL files included by `embed_migrations!()` changed.
    println!("cargo:rerun-if-changed=migrations");
}
