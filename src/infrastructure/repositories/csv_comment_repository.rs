use crate::domain::{
    comment::{entity::CommentRecord, repository::CommentRepository},
    errors::DomainError,
    sentiment::label::{DEFAULT_POSITIVE_LABEL, SentimentLabel},
};
use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};

const HEADER: [&str; 2] = ["comment", "prediction"];

/// Comment log kept as a flat CSV file. Appends are serialized in-process and
/// written with append mode, so earlier rows are never rewritten.
pub struct CsvCommentRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvCommentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn needs_header(&self) -> Result<bool, DomainError> {
        match fs::metadata(&self.path).await {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(storage(e)),
        }
    }

    async fn read_raw(&self) -> Result<Option<Vec<u8>>, DomainError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage(e)),
        }
    }
}

#[async_trait]
impl CommentRepository for CsvCommentRepository {
    async fn append(&self, record: &CommentRecord) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;

        let mut writer = csv::Writer::from_writer(Vec::new());
        if self.needs_header().await? {
            writer.write_record(HEADER).map_err(storage)?;
        }
        writer
            .write_record([record.comment.as_str(), record.prediction.as_str()])
            .map_err(storage)?;
        let row = writer
            .into_inner()
            .map_err(|e| storage(e.error()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(storage)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(storage)?;
        file.write_all(&row).await.map_err(storage)?;
        file.flush().await.map_err(storage)?;

        tracing::debug!(label = %record.prediction, "Appended comment to {}", self.path.display());
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<CommentRecord>, DomainError> {
        let _guard = self.lock.lock().await;
        let Some(bytes) = self.read_raw().await? else {
            return Ok(Vec::new());
        };

        let data = bytes.strip_prefix("\u{feff}".as_bytes()).unwrap_or(&bytes);
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(storage)?;
            let comment = row.get(0).unwrap_or_default();
            let raw_label = row.get(1).unwrap_or_default();
            // Logs written before labels were normalized carry the raw Vietnamese label.
            let prediction = raw_label.parse::<SentimentLabel>().unwrap_or_else(|_| {
                SentimentLabel::from_training_label(raw_label, DEFAULT_POSITIVE_LABEL)
            });
            records.push(CommentRecord::new(comment, prediction));
        }
        Ok(records)
    }

    async fn reset(&self) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::info!("Comment log {} cleared", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage(e)),
        }
    }

    async fn export(&self) -> Result<Vec<u8>, DomainError> {
        let _guard = self.lock.lock().await;
        match self.read_raw().await? {
            Some(bytes) if !bytes.is_empty() => Ok(bytes),
            _ => Ok(format!("{}\n", HEADER.join(",")).into_bytes()),
        }
    }
}

fn storage(err: impl std::fmt::Display) -> DomainError {
    DomainError::StorageError(err.to_string())
}
