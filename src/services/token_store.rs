// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Disk-backed storage of the Strava OAuth token.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::StoredToken;

/// Token file location. The token is kept as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored token.
    ///
    /// A missing file means the user never authorized: `AppError::Unauthorized`.
    pub fn load(&self) -> Result<StoredToken> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(AppError::Unauthorized),
            Err(e) => {
                return Err(AppError::Internal(anyhow::anyhow!(
                    "Failed to read token file {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Token file is malformed");
            AppError::InvalidToken
        })
    }

    /// Write the token, replacing any previous one.
    ///
    /// The JSON goes to a sibling temp file that is then renamed over the
    /// token file, so readers see either the old or the new token.
    pub fn save(&self, token: &StoredToken) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("Create token dir: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(token)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Serialize token: {}", e)))?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Write token file: {}", e)))?;
        fs::rename(&tmp_path, &self.path)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Replace token file: {}", e)))?;

        tracing::debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
