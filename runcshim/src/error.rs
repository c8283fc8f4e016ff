// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Errors produced by the shim binary itself, as distinct from the grammar
//! errors `slotgram` already reports. Kept here rather than in
//! `slotgram_shared` because inspecting a bundle, rewriting a process
//! object, and exec'ing a delegate are catalog concerns, not engine ones.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Grammar(#[from] slotgram_shared::SlotError),

    #[error("reading {path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("parsing OCI document {path}: {source}")]
    Json { path: PathBuf, #[source] source: serde_json::Error },

    #[error("no command line arguments given")]
    NoArgs,

    #[error("empty delegate path")]
    EmptyDelegatePath,

    #[error("exec of delegate {program:?} failed: {source}")]
    Exec { program: String, #[source] source: std::io::Error },
}
