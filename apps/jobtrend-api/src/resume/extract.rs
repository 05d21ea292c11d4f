//! Resume text extraction behind the `TextExtractor` trait.
//!
//! Default: `PdfTextExtractor` (stages the upload in a temp file, runs
//! `pdf-extract` on a blocking worker). The temp file is removed when the
//! handle drops, success or failure.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Bytes) -> Result<String, AppError>;
}

pub struct PdfTextExtractor {
    upload_dir: PathBuf,
}

impl PdfTextExtractor {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<String, AppError> {
        let upload_dir = self.upload_dir.clone();

        tokio::task::spawn_blocking(move || extract_pdf_text(&upload_dir, &bytes))
            .await
            .map_err(|e| AppError::ResumeParse(format!("extraction task failed: {e}")))?
            .map_err(|e| AppError::ResumeParse(format!("{e:#}")))
    }
}

fn extract_pdf_text(upload_dir: &std::path::Path, bytes: &[u8]) -> anyhow::Result<String> {
    std::fs::create_dir_all(upload_dir)
        .with_context(|| format!("cannot create upload dir {}", upload_dir.display()))?;

    let mut staged = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile_in(upload_dir)
        .context("cannot stage uploaded file")?;
    staged.write_all(bytes).context("cannot write uploaded file")?;
    staged.flush()?;

    debug!("Parsing staged upload {}", staged.path().display());
    let text = pdf_extract::extract_text(staged.path()).context("PDF text extraction failed")?;

    // `staged` drops here and the file is deleted.
    Ok(text)
}
