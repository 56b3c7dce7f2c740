//! Flat-text persistence.
//!
//! Two files live in the data directory:
//!
//! - the credential file (`details` by default): line 1 is the username,
//!   line 2 the password. The same file is the brute-force wordlist, and
//!   every password cracked by exhaustive search is appended to it. A save
//!   rewrites it with the two credential lines only, so learned entries
//!   last until the next save.
//! - the address file (`ip_addresses`): one discovered address per line.
//!
//! Every operation returns a [`StoreError`] that separates a missing file
//! from other I/O failures; callers decide whether to fall back to defaults.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::credentials::Credentials;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::from_io(path, e))?;
    Ok(text.lines().map(str::to_owned).collect())
}

fn write_lines<'a>(path: &Path, lines: impl IntoIterator<Item = &'a str>) -> Result<(), StoreError> {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| StoreError::from_io(path, e))
}

/// The credential file in its credential-record role.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing lines load as empty strings. Focus always starts on the username.
    pub fn load(&self) -> Result<Credentials, StoreError> {
        let mut lines = read_lines(&self.path)?.into_iter();
        let username = lines.next().unwrap_or_default();
        let password = lines.next().unwrap_or_default();
        Ok(Credentials::new(username, password))
    }

    /// Overwrites the whole file with the username and password lines.
    pub fn save(&self, credentials: &Credentials) -> Result<(), StoreError> {
        write_lines(
            &self.path,
            [credentials.username.as_str(), credentials.password.as_str()],
        )
    }

    /// The same file viewed as the brute-force wordlist.
    pub fn wordlist(&self) -> WordlistFile {
        WordlistFile::new(self.path.clone())
    }
}

/// A newline-separated candidate list that learns cracked passwords.
#[derive(Debug, Clone)]
pub struct WordlistFile {
    path: PathBuf,
}

impl WordlistFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_words(&self) -> Result<Vec<String>, StoreError> {
        read_lines(&self.path)
    }

    /// Append one entry, creating the file if needed.
    pub fn append(&self, word: &str) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::from_io(&self.path, e))?;
        writeln!(file, "{word}").map_err(|e| StoreError::from_io(&self.path, e))
    }
}

/// Discovered addresses, one per line.
#[derive(Debug, Clone)]
pub struct AddressStore {
    path: PathBuf,
}

impl AddressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<String>, StoreError> {
        read_lines(&self.path)
    }

    /// Overwrites the file wholesale.
    pub fn save(&self, addresses: &[String]) -> Result<(), StoreError> {
        write_lines(&self.path, addresses.iter().map(String::as_str))
    }
}
