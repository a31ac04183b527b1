//! Recovery storage collaborator

use core::fmt;

/// Storage failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// No medium mounted
    NotMounted,
    /// Medium rejected the write
    WriteFailed,
    /// No space left
    Full,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotMounted => write!(f, "Storage not mounted"),
            StorageError::WriteFailed => write!(f, "Storage write failed"),
            StorageError::Full => write!(f, "Storage full"),
        }
    }
}

/// Line-oriented append-only storage
pub trait RecoveryStorage {
    /// Append `line` plus a line terminator to the file at `path`
    fn append_line(&mut self, path: &str, line: &str) -> Result<(), StorageError>;
}
