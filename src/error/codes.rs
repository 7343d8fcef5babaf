//! Stable error codes attached to log events and CLI failures.
//!
//! Codes follow a numeric taxonomy:
//! - 1xx: Store errors
//! - 2xx: Ingestion errors
//! - 3xx: Config errors
//! - 4xx: Terminal errors

/// Stable error codes.
///
/// Each variant maps to a numeric code (e.g., `DatabaseError` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // ========================================
    // Store errors (1xx)
    // ========================================
    /// E101: Database operation failed
    DatabaseError,
    /// E102: Schema migration failed
    MigrationFailed,
    /// E103: IO operation failed
    IoError,

    // ========================================
    // Ingestion errors (2xx)
    // ========================================
    /// E201: Resources root is missing or not a directory
    ResourcesNotFound,
    /// E202: CSV file could not be parsed
    CsvMalformed,
    /// E203: Directory traversal failed
    WalkFailed,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Terminal errors (4xx)
    // ========================================
    /// E401: Interactive command run without a terminal
    NotInteractive,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `DatabaseError` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::DatabaseError => 101,
            Self::MigrationFailed => 102,
            Self::IoError => 103,
            Self::ResourcesNotFound => 201,
            Self::CsvMalformed => 202,
            Self::WalkFailed => 203,
            Self::ConfigInvalid => 301,
            Self::NotInteractive => 401,
        }
    }

    /// Get the formatted code string (e.g., "E101").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DatabaseError => "E101",
            Self::MigrationFailed => "E102",
            Self::IoError => "E103",
            Self::ResourcesNotFound => "E201",
            Self::CsvMalformed => "E202",
            Self::WalkFailed => "E203",
            Self::ConfigInvalid => "E301",
            Self::NotInteractive => "E401",
        }
    }

    /// Short recovery hint shown next to CLI failures.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::DatabaseError => "Check that the store file is a SQLite database and is writable",
            Self::MigrationFailed => "The store may be from a newer version; try a fresh store path",
            Self::IoError => "Check file permissions and that the path exists",
            Self::ResourcesNotFound => "Pass the directory that contains one folder per certification",
            Self::CsvMalformed => "Make sure every CSV file is UTF-8 encoded",
            Self::WalkFailed => "Check permissions on the resources directory",
            Self::ConfigInvalid => "Fix the TOML syntax in flashdeck.toml or the file named by FLASHDECK_CONFIG",
            Self::NotInteractive => "Run flashdeck from an interactive terminal",
        }
    }

    /// Category name for grouping.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "store",
            2 => "ingest",
            3 => "config",
            _ => "terminal",
        }
    }

    /// All error codes, for documentation and tests.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::DatabaseError,
            Self::MigrationFailed,
            Self::IoError,
            Self::ResourcesNotFound,
            Self::CsvMalformed,
            Self::WalkFailed,
            Self::ConfigInvalid,
            Self::NotInteractive,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
