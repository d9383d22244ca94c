//! Durable storage for the reservation pool.
//!
//! State is written as three files inside a data directory: one record
//! stream for confirmed reservations, one for the waitlist, and a
//! three-line metadata file (next id, capacity, occupancy). Loading
//! replays the record streams in stored order; a malformed record stops
//! the scan of its file and the remaining lines are dropped with a logged
//! warning.
//!
//! # Examples
//!
//! ```no_run
//! use resa::{Storage, StorageConfig};
//!
//! let storage = Storage::open(StorageConfig::new("/tmp/resa-data")).unwrap();
//! let state = storage.load();
//! assert_eq!(state.meta.capacity, 5);
//! ```

mod codec;

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::store::RecordStore;
use crate::waitlist::WaitlistQueue;

/// First reservation id issued by a fresh pool.
pub const DEFAULT_NEXT_ID: u32 = 1000;

/// Capacity of a fresh pool.
pub const DEFAULT_CAPACITY: u32 = 5;

const CONFIRMED_FILE: &str = "confirmed.csv";
const WAITLIST_FILE: &str = "waitlist.csv";
const META_FILE: &str = "meta.txt";

/// Pool-level counters persisted alongside the record streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolMeta {
    /// The next reservation id to issue.
    pub next_id: u32,
    /// Total number of slots.
    pub capacity: u32,
    /// Number of occupied slots at save time.
    pub occupancy: u32,
}

impl Default for PoolMeta {
    fn default() -> Self {
        Self {
            next_id: DEFAULT_NEXT_ID,
            capacity: DEFAULT_CAPACITY,
            occupancy: 0,
        }
    }
}

/// Returns the default data directory, `~/.resa`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use resa::storage::default_data_dir;
///
/// let data_dir = default_data_dir().unwrap();
/// println!("Data directory: {}", data_dir.display());
/// ```
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".resa"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "cannot determine home directory".into(),
        })
}

/// Configuration for the storage layer.
///
/// # Examples
///
/// ```
/// use resa::StorageConfig;
///
/// let config = StorageConfig::new("/tmp/resa-data");
/// assert!(config.meta_path().ends_with("meta.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the three state files.
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Creates a storage configuration rooted at the given directory.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the confirmed record stream.
    #[must_use]
    pub fn confirmed_path(&self) -> PathBuf {
        self.data_dir.join(CONFIRMED_FILE)
    }

    /// Path of the waitlist record stream.
    #[must_use]
    pub fn waitlist_path(&self) -> PathBuf {
        self.data_dir.join(WAITLIST_FILE)
    }

    /// Path of the metadata file.
    #[must_use]
    pub fn meta_path(&self) -> PathBuf {
        self.data_dir.join(META_FILE)
    }
}

/// State read back from the data directory.
#[derive(Debug)]
pub struct LoadedState {
    /// Pool counters, defaulted when the metadata file was missing or
    /// unusable.
    pub meta: PoolMeta,
    /// Whether usable metadata was actually found on disk.
    pub meta_loaded: bool,
    /// Confirmed reservations in stored (booking) order.
    pub confirmed: Vec<Reservation>,
    /// Waitlisted reservations in stored (queue) order.
    pub waitlist: Vec<Reservation>,
}

/// Handle to a data directory holding persisted pool state.
pub struct Storage {
    config: StorageConfig,
}

impl Storage {
    /// Creates a storage handle without touching the filesystem.
    #[must_use]
    pub const fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Creates a storage handle, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(config: StorageConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        Ok(Self { config })
    }

    /// Returns the storage configuration.
    #[must_use]
    pub const fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Loads persisted state, substituting defaults for anything unusable.
    ///
    /// Missing files yield empty collections and default counters; this is
    /// the fresh-start path, not an error. A malformed record line stops
    /// the scan of its file (the remainder is dropped and a warning
    /// logged). Stored routes and costs are trusted, never recomputed.
    #[must_use]
    pub fn load(&self) -> LoadedState {
        let meta_text = fs::read_to_string(self.config.meta_path()).ok();
        let meta = meta_text.as_deref().and_then(codec::decode_meta);
        let meta_loaded = meta.is_some();
        if !meta_loaded && meta_text.is_some() {
            log::warn!(
                "unusable metadata in {}; starting from defaults",
                self.config.meta_path().display()
            );
        }

        LoadedState {
            meta: meta.unwrap_or_default(),
            meta_loaded,
            confirmed: read_records(&self.config.confirmed_path()),
            waitlist: read_records(&self.config.waitlist_path()),
        }
    }

    /// Writes the full pool state to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three files cannot be written.
    pub fn save(
        &self,
        meta: PoolMeta,
        confirmed: &RecordStore,
        waitlist: &WaitlistQueue,
    ) -> Result<()> {
        fs::create_dir_all(&self.config.data_dir)?;
        fs::write(
            self.config.confirmed_path(),
            encode_stream(confirmed.iter()),
        )?;
        fs::write(self.config.waitlist_path(), encode_stream(waitlist.iter()))?;
        fs::write(self.config.meta_path(), codec::encode_meta(&meta))?;
        Ok(())
    }

    /// Best-effort variant of [`Storage::save`].
    ///
    /// Failures are logged and swallowed; callers that need to react to a
    /// failed write should use [`Storage::save`] instead.
    pub fn save_all(&self, meta: PoolMeta, confirmed: &RecordStore, waitlist: &WaitlistQueue) {
        if let Err(err) = self.save(meta, confirmed, waitlist) {
            log::warn!(
                "failed to persist state to {}: {err}",
                self.config.data_dir.display()
            );
        }
    }
}

/// Reads one record stream, stopping at the first malformed line.
fn read_records(path: &Path) -> Vec<Reservation> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        match codec::decode_record(line) {
            Some(record) => records.push(record),
            None => {
                log::warn!(
                    "malformed record at {}:{}; dropping the rest of the file",
                    path.display(),
                    line_number + 1
                );
                break;
            }
        }
    }
    records
}

/// Encodes reservations as one record per line.
fn encode_stream<'a>(records: impl Iterator<Item = &'a Reservation>) -> String {
    let mut text = String::new();
    for record in records {
        let _ = writeln!(text, "{}", codec::encode_record(record));
    }
    text
}
