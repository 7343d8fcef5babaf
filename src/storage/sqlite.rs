//! SQLite store, read repositories and the ingestion writer

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, Transaction, TransactionBehavior, params};
use tracing::debug;

use crate::core::{Category, Certification, Flashcard, NewFlashcard};
use crate::error::Result;
use crate::storage::migrations;
use crate::storage::repository::{CategoryRepository, CertificationRepository, FlashcardRepository};

/// Location of a flashcard database on disk.
///
/// Holds no connection. Every repository call opens its own connection and
/// drops it when the query finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open (and create if absent) the store at `path`, applying migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self {
            path: path.to_path_buf(),
        };
        let conn = store.connect()?;
        let version = migrations::run_migrations(&conn)?;
        debug!(path = %path.display(), schema_version = version, "store ready");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection for one logical operation.
    pub fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        Self::configure_pragmas(&conn)?;
        Ok(conn)
    }

    /// Insert capability used by ingestion.
    pub fn writer(&self) -> Result<StoreWriter> {
        Ok(StoreWriter {
            conn: self.connect()?,
        })
    }

    pub fn certifications(&self) -> SqliteCertificationRepository {
        SqliteCertificationRepository {
            store: self.clone(),
        }
    }

    pub fn categories(&self) -> SqliteCategoryRepository {
        SqliteCategoryRepository {
            store: self.clone(),
        }
    }

    pub fn flashcards(&self) -> SqliteFlashcardRepository {
        SqliteFlashcardRepository {
            store: self.clone(),
        }
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA temp_store = MEMORY;
             PRAGMA foreign_keys = ON;",
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SqliteCertificationRepository {
    store: SqliteStore,
}

impl CertificationRepository for SqliteCertificationRepository {
    fn get_all(&self) -> Result<Vec<Certification>> {
        let conn = self.store.connect()?;
        let mut stmt = conn.prepare("SELECT id, name FROM certification ORDER BY id")?;
        let rows = stmt.query_map([], certification_from_row)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Certification>> {
        let conn = self.store.connect()?;
        find_certification(&conn, name)
    }
}

#[derive(Debug, Clone)]
pub struct SqliteCategoryRepository {
    store: SqliteStore,
}

impl CategoryRepository for SqliteCategoryRepository {
    fn get_all_by_certification(&self, cert_id: i64) -> Result<Vec<Category>> {
        let conn = self.store.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, cert_id, name FROM category WHERE cert_id = ? ORDER BY id")?;
        let rows = stmt.query_map([cert_id], category_from_row)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn get_by_name(&self, cert_id: i64, name: &str) -> Result<Option<Category>> {
        let conn = self.store.connect()?;
        find_category(&conn, cert_id, name)
    }
}

#[derive(Debug, Clone)]
pub struct SqliteFlashcardRepository {
    store: SqliteStore,
}

impl FlashcardRepository for SqliteFlashcardRepository {
    fn get_all_by_category(&self, cat_id: i64) -> Result<Vec<Flashcard>> {
        let conn = self.store.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, cat_id, question, answer, view_count, last_viewed_at \
             FROM flashcard WHERE cat_id = ? ORDER BY id",
        )?;
        let rows = stmt.query_map([cat_id], flashcard_from_row)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}

/// Owns one connection and runs inserts inside immediate transactions.
pub struct StoreWriter {
    conn: Connection,
}

impl std::fmt::Debug for StoreWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreWriter").finish_non_exhaustive()
    }
}

impl StoreWriter {
    /// Run `f` in one `IMMEDIATE` transaction, committing on `Ok`.
    ///
    /// The write lock is taken up front, so a lookup followed by an insert
    /// inside `f` cannot interleave with another writer.
    pub fn transaction<T>(&mut self, f: impl FnOnce(&WriteTx<'_>) -> Result<T>) -> Result<T> {
        let tx = Transaction::new(&mut self.conn, TransactionBehavior::Immediate)?;
        let out = f(&WriteTx { tx: &tx })?;
        tx.commit()?;
        Ok(out)
    }
}

/// Result of a get-or-create lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub record: T,
    pub created: bool,
}

/// Insert operations available inside a [`StoreWriter::transaction`].
pub struct WriteTx<'a> {
    tx: &'a Transaction<'a>,
}

impl WriteTx<'_> {
    pub fn get_or_create_certification(&self, name: &str) -> Result<Fetched<Certification>> {
        if let Some(record) = find_certification(self.tx, name)? {
            return Ok(Fetched {
                record,
                created: false,
            });
        }

        self.tx
            .execute("INSERT INTO certification (name) VALUES (?)", [name])?;
        Ok(Fetched {
            record: Certification {
                id: self.tx.last_insert_rowid(),
                name: name.to_string(),
            },
            created: true,
        })
    }

    pub fn get_or_create_category(&self, cert_id: i64, name: &str) -> Result<Fetched<Category>> {
        if let Some(record) = find_category(self.tx, cert_id, name)? {
            return Ok(Fetched {
                record,
                created: false,
            });
        }

        self.tx.execute(
            "INSERT INTO category (cert_id, name) VALUES (?, ?)",
            params![cert_id, name],
        )?;
        Ok(Fetched {
            record: Category {
                id: self.tx.last_insert_rowid(),
                cert_id,
                name: name.to_string(),
            },
            created: true,
        })
    }

    /// Always inserts; flashcards have no natural key.
    pub fn insert_flashcard(&self, cat_id: i64, card: &NewFlashcard) -> Result<Flashcard> {
        let now = Utc::now();
        self.tx.execute(
            "INSERT INTO flashcard (cat_id, question, answer, view_count, last_viewed_at)
             VALUES (?, ?, ?, 0, ?)",
            params![cat_id, card.question, card.answer, now.to_rfc3339()],
        )?;
        Ok(Flashcard {
            id: self.tx.last_insert_rowid(),
            cat_id,
            question: card.question.clone(),
            answer: card.answer.clone(),
            view_count: 0,
            last_viewed_at: now,
        })
    }
}

fn find_certification(conn: &Connection, name: &str) -> Result<Option<Certification>> {
    let record = conn
        .query_row(
            "SELECT id, name FROM certification WHERE name = ? ORDER BY id LIMIT 1",
            [name],
            certification_from_row,
        )
        .optional()?;
    Ok(record)
}

fn find_category(conn: &Connection, cert_id: i64, name: &str) -> Result<Option<Category>> {
    let record = conn
        .query_row(
            "SELECT id, cert_id, name FROM category \
             WHERE cert_id = ? AND name = ? ORDER BY id LIMIT 1",
            params![cert_id, name],
            category_from_row,
        )
        .optional()?;
    Ok(record)
}

fn certification_from_row(row: &Row<'_>) -> rusqlite::Result<Certification> {
    Ok(Certification {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        cert_id: row.get(1)?,
        name: row.get(2)?,
    })
}

fn flashcard_from_row(row: &Row<'_>) -> rusqlite::Result<Flashcard> {
    let raw: String = row.get(5)?;
    let last_viewed_at = DateTime::parse_from_rfc3339(&raw)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(err)))?
        .with_timezone(&Utc);

    Ok(Flashcard {
        id: row.get(0)?,
        cat_id: row.get(1)?,
        question: row.get(2)?,
        answer: row.get(3)?,
        view_count: row.get(4)?,
        last_viewed_at,
    })
}
