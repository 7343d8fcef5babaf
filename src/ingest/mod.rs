//! CSV ingestion: populate the store from a resources directory tree.
//!
//! Layout: `<root>/<certification>/<category>.csv`. Each row with at least
//! two fields becomes a flashcard. Certifications and categories are
//! get-or-create by name; flashcards are always inserted.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::IngestConfig;
use crate::core::NewFlashcard;
use crate::error::{FlashError, Result};
use crate::storage::{SqliteStore, StoreWriter, WriteTx};

/// Counts of what one ingestion run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub certifications_created: usize,
    pub categories_created: usize,
    pub flashcards_inserted: usize,
    pub rows_skipped: usize,
}

impl IngestReport {
    fn absorb(&mut self, other: Self) {
        self.certifications_created += other.certifications_created;
        self.categories_created += other.categories_created;
        self.flashcards_inserted += other.flashcards_inserted;
        self.rows_skipped += other.rows_skipped;
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} certifications created, {} categories created, {} flashcards inserted, {} rows skipped",
            self.certifications_created,
            self.categories_created,
            self.flashcards_inserted,
            self.rows_skipped
        )
    }
}

#[derive(Debug, Clone)]
pub struct Ingestor {
    config: IngestConfig,
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}

impl Ingestor {
    pub const fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Load every certification directory under `resources_root` into `store`.
    ///
    /// Each certification directory is committed in its own transaction.
    pub fn ingest(&self, store: &SqliteStore, resources_root: &Path) -> Result<IngestReport> {
        if !resources_root.is_dir() {
            return Err(FlashError::ResourcesNotFound(resources_root.to_path_buf()));
        }

        let mut writer = store.writer()?;
        let mut report = IngestReport::default();

        for cert_dir in self.certification_dirs(resources_root)? {
            let partial = self.ingest_certification(&mut writer, &cert_dir)?;
            report.absorb(partial);
        }

        info!(
            root = %resources_root.display(),
            certifications_created = report.certifications_created,
            categories_created = report.categories_created,
            flashcards_inserted = report.flashcards_inserted,
            rows_skipped = report.rows_skipped,
            "ingestion complete"
        );
        Ok(report)
    }

    fn certification_dirs(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if self.config.is_excluded(&name) {
                debug!(dir = %name, "skipping excluded directory");
                continue;
            }
            dirs.push(entry.into_path());
        }
        Ok(dirs)
    }

    fn category_files(&self, cert_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(cert_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_type().is_file() && self.config.is_recognized(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn ingest_certification(&self, writer: &mut StoreWriter, cert_dir: &Path) -> Result<IngestReport> {
        let cert_name = file_label(cert_dir, Path::file_name);
        let files = self.category_files(cert_dir)?;

        writer.transaction(|tx| {
            let mut report = IngestReport::default();
            let cert = tx.get_or_create_certification(&cert_name)?;
            if cert.created {
                report.certifications_created += 1;
            }
            info!(certification = %cert_name, created = cert.created, "certification");

            for file in &files {
                report.absorb(ingest_category_file(tx, cert.record.id, file)?);
            }
            Ok(report)
        })
    }
}

fn ingest_category_file(tx: &WriteTx<'_>, cert_id: i64, path: &Path) -> Result<IngestReport> {
    let mut report = IngestReport::default();
    let cat_name = file_label(path, Path::file_stem);

    let cat = tx.get_or_create_category(cert_id, &cat_name)?;
    if cat.created {
        report.categories_created += 1;
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    for (line, record) in reader.records().enumerate() {
        let record = record?;
        match NewFlashcard::from_fields(record.iter()) {
            Some(card) => {
                tx.insert_flashcard(cat.record.id, &card)?;
                report.flashcards_inserted += 1;
            }
            None => {
                debug!(file = %path.display(), row = line + 1, "skipping row with fewer than two columns");
                report.rows_skipped += 1;
            }
        }
    }

    info!(
        category = %cat_name,
        created = cat.created,
        flashcards = report.flashcards_inserted,
        "category"
    );
    Ok(report)
}

/// Field separator for a category file, chosen by extension.
fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("tab") => b'\t',
        _ => b',',
    }
}

fn file_label(path: &Path, part: impl Fn(&Path) -> Option<&std::ffi::OsStr>) -> String {
    part(path)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
