// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Reading, rewriting, and writing back the OCI process object passed to
//! `exec --process <file>`. Kept separate from [`crate::bundle`] because a
//! process document is addressed directly by path, not resolved relative to
//! a bundle directory.

use std::path::Path;

use serde_json::Value;

use crate::error::ClientError;

pub fn load_process(path: &Path) -> Result<Value, ClientError> {
    let bytes = std::fs::read(path).map_err(|source| ClientError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Json { path: path.to_path_buf(), source })
}

pub fn save_process(path: &Path, process: &Value) -> Result<(), ClientError> {
    let bytes = serde_json::to_vec_pretty(process)
        .map_err(|source| ClientError::Json { path: path.to_path_buf(), source })?;
    std::fs::write(path, bytes).map_err(|source| ClientError::Io { path: path.to_path_buf(), source })
}

/// A transform applied to a `--process` document before it's written back
/// for the delegate to read.
pub trait ProcessRewrite {
    fn rewrite(&self, process: &mut Value) -> Result<(), ClientError>;
}
