// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Reading, rewriting, and writing back an OCI bundle's `config.json`.
//!
//! The grammar engine only ever sees argv; everything the shim needs to do
//! to the bundle on disk before handing off to the delegate lives here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// A bundle's `config.json`, kept mostly opaque (`rest`) since this shim
/// only ever needs to inspect or rewrite a handful of top-level fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    #[serde(rename = "ociVersion")]
    pub oci_version: String,
    pub process: Option<serde_json::Value>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

pub fn load_config(bundle_dir: &Path) -> Result<BundleConfig, ClientError> {
    let path = bundle_dir.join("config.json");
    let bytes = fs::read(&path).map_err(|source| ClientError::Io { path: path.clone(), source })?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Json { path, source })
}

pub fn save_config(bundle_dir: &Path, config: &BundleConfig) -> Result<(), ClientError> {
    let path = bundle_dir.join("config.json");
    let bytes =
        serde_json::to_vec_pretty(config).map_err(|source| ClientError::Json { path: path.clone(), source })?;
    fs::write(&path, bytes).map_err(|source| ClientError::Io { path, source })
}

/// A transform applied to a bundle's config before it's handed to the
/// delegate. Implementors are free to inspect `rest` for vendor extensions
/// the typed fields don't cover.
pub trait BundleRewrite {
    fn rewrite(&self, config: &mut BundleConfig) -> Result<(), ClientError>;
}
