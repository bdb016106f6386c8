use crate::error::{FacetError, FacetResult};
use crate::presenter::LoadedView;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use strum_macros::Display;
use tracing::{info, warn};

pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024 * 1024;
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(30 * 24 * 60 * 60);
pub const CSV_MIME_TYPE: &str = "text/csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    #[default]
    Pending,
    Successful,
    Failed,
}

/// A statistics export written to disk and published under its content hash.
#[derive(Debug, Clone)]
pub struct Export {
    pub label: String,
    pub operation: String,
    pub collection_id: Option<String>,
    pub created_at: SystemTime,
    pub expires_at: SystemTime,
    pub deleted: bool,
    pub status: ExportStatus,
    pub content_hash: Option<String>,
    pub file_size: Option<u64>,
    pub file_name: Option<String>,
    pub mime_type: String,
    file_path: Option<PathBuf>,
}

/// Serializable summary of an [`Export`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub label: String,
    pub operation: String,
    pub collection_id: Option<String>,
    pub created_at: u64,
    pub expires_at: u64,
    pub deleted: bool,
    pub export_status: ExportStatus,
    pub content_hash: Option<String>,
    pub file_size: Option<u64>,
    pub file_name: Option<String>,
    pub mime_type: String,
}

impl Export {
    pub fn create(
        label: impl Into<String>,
        operation: impl Into<String>,
        collection_id: Option<String>,
        expires_after: Option<Duration>,
    ) -> FacetResult<Self> {
        let created_at = SystemTime::now();
        let expires_after = expires_after.unwrap_or(DEFAULT_EXPIRATION);
        let expires_at = created_at.checked_add(expires_after).ok_or_else(|| {
            FacetError::Export(format!(
                "expiry of {}s is out of range",
                expires_after.as_secs()
            ))
        })?;
        Ok(Self {
            label: label.into(),
            operation: operation.into(),
            collection_id,
            created_at,
            expires_at,
            deleted: false,
            status: ExportStatus::Pending,
            content_hash: None,
            file_size: None,
            file_name: None,
            mime_type: CSV_MIME_TYPE.to_string(),
            file_path: None,
        })
    }

    /// Writes every row of `view` (hidden ones included) as CSV into `dir`.
    pub fn write_csv(&mut self, view: &LoadedView, dir: &Path) -> FacetResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.csv", safe_filename(&self.label)));

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(["label", "value", "count", "link"])?;
        for row in &view.rows {
            writer.write_record([
                row.label.text.as_str(),
                row.value.as_str(),
                row.count.to_string().as_str(),
                row.link.as_str(),
            ])?;
        }
        writer.flush()?;

        self.set_filepath(&path)?;
        Ok(path)
    }

    pub fn set_filepath(&mut self, path: &Path) -> FacetResult<()> {
        let file_size = fs::metadata(path)?.len();
        if file_size > MAX_FILE_SIZE {
            return Err(FacetError::Export(format!(
                "export file is {} bytes, limit is {}",
                file_size, MAX_FILE_SIZE
            )));
        }
        self.file_name = path
            .file_name()
            .map(|name| safe_filename(&name.to_string_lossy()));
        self.file_size = Some(file_size);
        self.content_hash = Some(checksum(path)?);
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Moves the file into `archive`, named by its content hash.
    pub fn publish(&mut self, archive: &Path) -> FacetResult<PathBuf> {
        let (Some(source), Some(hash)) = (self.file_path.clone(), self.content_hash.clone()) else {
            return Err(FacetError::Export(format!(
                "file path not present for export '{}'",
                self.label
            )));
        };

        let target = archive.join(&hash);
        let result = fs::create_dir_all(archive).and_then(|_| fs::rename(&source, &target));
        match result {
            Ok(()) => {
                self.file_path = Some(target.clone());
                self.status = ExportStatus::Successful;
                info!(label = %self.label, hash = %hash, status = %self.status, "published export");
                Ok(target)
            }
            Err(e) => {
                self.status = ExportStatus::Failed;
                warn!(label = %self.label, status = %self.status, "export publication failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// Identical content is stored once, so the archived file stays while
    /// another live export in `others` shares its hash.
    pub fn should_delete_publication(&self, others: &[Export]) -> bool {
        !others
            .iter()
            .any(|o| !o.deleted && o.content_hash.is_some() && o.content_hash == self.content_hash)
    }

    pub fn delete_publication(&mut self, archive: &Path, others: &[Export]) -> FacetResult<()> {
        if self.should_delete_publication(others) {
            if let Some(hash) = &self.content_hash {
                match fs::remove_file(archive.join(hash)) {
                    Ok(()) => {}
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }
        self.deleted = true;
        Ok(())
    }

    pub fn is_expired(&self, now: SystemTime) -> bool {
        self.expires_at <= now
    }

    pub fn to_record(&self) -> ExportRecord {
        ExportRecord {
            label: self.label.clone(),
            operation: self.operation.clone(),
            collection_id: self.collection_id.clone(),
            created_at: unix_seconds(self.created_at),
            expires_at: unix_seconds(self.expires_at),
            deleted: self.deleted,
            export_status: self.status,
            content_hash: self.content_hash.clone(),
            file_size: self.file_size,
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
        }
    }
}

/// Expired exports that still need their publication removed.
pub fn expired<'a>(exports: &'a [Export], now: SystemTime) -> impl Iterator<Item = &'a Export> + 'a {
    exports.iter().filter(move |e| !e.deleted && e.is_expired(now))
}

pub fn checksum(path: &Path) -> FacetResult<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

pub fn safe_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches(|c| c == '_' || c == '.');
    if cleaned.is_empty() {
        "export".to_string()
    } else {
        cleaned.to_string()
    }
}

fn unix_seconds(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}
