// Rust guideline compliant 2026-08-14

//! Storage module for JSONL file operations.
//!
//! Each record type persists to its own JSONL file. One serialized
//! record per line, atomic whole-file rewrites, and advisory file
//! locking for multi-process writers.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A record type that can live in a JSONL store.
///
/// Records identify themselves and self-validate; the store refuses to
/// persist or surface a record that fails validation.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Returns the record's unique ID.
    fn id(&self) -> &str;

    /// Validates the record's fields.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    fn validate(&self) -> Result<()>;
}

/// Storage engine for one record type.
///
/// Manages JSONL file operations with streaming reads, atomic writes,
/// and file locking for concurrent access.
pub struct Store<T: Record> {
    /// Path to the JSONL file.
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Record> Store<T> {
    /// Creates a new Store instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Returns
    ///
    /// A new Store instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self {
            path,
            _marker: PhantomData,
        })
    }

    /// Validates that the path is suitable for storage operations.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to validate
    ///
    /// # Returns
    ///
    /// Ok if the path is valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Record> Store<T> {
    /// Loads all records from the JSONL file using streaming deserialization.
    ///
    /// # Returns
    ///
    /// A vector of all records in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - A record fails validation
    pub fn load_all(&self) -> Result<Vec<T>> {
        use std::fs::File;
        use std::io::BufReader;

        // Handle missing file case
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        // Use streaming deserializer for memory efficiency
        let stream = serde_json::Deserializer::from_reader(reader).into_iter::<T>();

        for result in stream {
            match result {
                Ok(record) => {
                    record.validate()?;
                    records.push(record);
                }
                Err(e) => {
                    // Log malformed JSON but continue processing
                    eprintln!("Warning: Skipping malformed JSON line: {}", e);
                }
            }
        }

        Ok(records)
    }

    /// Loads a single record by ID from the JSONL file with early termination.
    ///
    /// # Arguments
    ///
    /// * `id` - The record ID to search for
    ///
    /// # Returns
    ///
    /// The record if found.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The record is not found
    /// - The record fails validation
    pub fn load_by_id(&self, id: &str) -> Result<T> {
        use std::fs::File;
        use std::io::BufReader;

        if !self.path.exists() {
            return Err(Error::NotFound(id.to_string()));
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let stream = serde_json::Deserializer::from_reader(reader).into_iter::<T>();

        for result in stream {
            match result {
                Ok(record) => {
                    if record.id() == id {
                        record.validate()?;
                        return Ok(record);
                    }
                }
                Err(e) => {
                    // Skip malformed JSON lines
                    eprintln!("Warning: Skipping malformed JSON line: {}", e);
                }
            }
        }

        Err(Error::NotFound(id.to_string()))
    }
}

impl<T: Record> Store<T> {
    /// Saves a single record to the JSONL file.
    ///
    /// If the record already exists (by ID), it is updated. Otherwise, it is
    /// appended. Uses atomic write operations (temp file + rename) to ensure
    /// consistency.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to save
    ///
    /// # Returns
    ///
    /// Ok if the save was successful.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record fails validation
    /// - The file cannot be read or written
    /// - The atomic write operation fails
    pub fn save(&self, record: &T) -> Result<()> {
        record.validate()?;

        // Load all existing records
        let mut records = self.load_all().unwrap_or_default();

        // Find and update or append
        if let Some(pos) = records.iter().position(|r| r.id() == record.id()) {
            records[pos] = record.clone();
        } else {
            records.push(record.clone());
        }

        // Write all records atomically
        self.save_all(&records)?;

        Ok(())
    }

    /// Saves multiple records to the JSONL file.
    ///
    /// Replaces the entire file with the provided records.
    /// Uses atomic write operations (temp file + rename) to ensure consistency.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to save
    ///
    /// # Returns
    ///
    /// Ok if the save was successful.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any record fails validation
    /// - The file cannot be written
    /// - The atomic write operation fails
    pub fn save_all(&self, records: &[T]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        // Validate all records first
        for record in records {
            record.validate()?;
        }

        // Create temp file in the same directory for atomic rename
        let temp_path = self.path.with_extension("jsonl.tmp");

        // Write to temp file
        {
            let mut file = File::create(&temp_path)?;

            for record in records {
                // Serialize to single line (no newlines within JSON)
                let json = serde_json::to_string(record)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }

            file.sync_all()?;
        }

        // Atomic rename
        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl<T: Record> Store<T> {
    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// This method acquires a platform-appropriate file lock (flock on Unix,
    /// LockFileEx on Windows) before executing the closure, ensuring that
    /// concurrent write operations are serialized.
    ///
    /// # Arguments
    ///
    /// * `f` - The closure to execute while holding the lock
    ///
    /// # Returns
    ///
    /// The result of the closure execution.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock cannot be acquired
    /// - The closure returns an error
    pub fn with_lock<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        // Create or open the lock file
        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;

        // fs2 has no timed acquire, so a held lock fails fast
        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        // Execute the closure
        let result = f();

        // Ensure lock is released (even if closure fails)
        let _ = lock_file.unlock();

        result
    }
}

impl<T: Record> Store<T> {
    /// Deletes a record from the JSONL file by ID.
    ///
    /// Removes the record from the file by rewriting it without the target.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the record to delete
    ///
    /// # Returns
    ///
    /// Ok if the delete was successful.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or written
    /// - The record is not found
    pub fn delete(&self, id: &str) -> Result<()> {
        // Load all records
        let mut records = self.load_all()?;

        // Find and remove the record
        let initial_len = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == initial_len {
            return Err(Error::NotFound(id.to_string()));
        }

        // Write remaining records
        self.save_all(&records)?;

        Ok(())
    }
}
