use crate::error::CurateError;
use crate::related::normalize_word;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub const SOURCE_WORDLIST_NAME: &str = "oldlist.txt";
pub const REJECTED_WORDS_NAME: &str = "rejects.txt";
pub const NEW_WORDS_NAME: &str = "newlist.txt";

/// Locations of the three word files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistPaths {
    pub source: PathBuf,
    pub accepted: PathBuf,
    pub rejected: PathBuf,
}

impl WordlistPaths {
    /// The standard file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            source: dir.join(SOURCE_WORDLIST_NAME),
            accepted: dir.join(NEW_WORDS_NAME),
            rejected: dir.join(REJECTED_WORDS_NAME),
        }
    }

    /// The standard file names next to the running executable.
    pub fn beside_executable() -> Result<Self, CurateError> {
        let exe = std::env::current_exe().map_err(CurateError::BaseDir)?;
        let dir = exe.parent().ok_or_else(|| {
            CurateError::BaseDir(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ))
        })?;
        Ok(Self::in_dir(dir))
    }
}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .filter_map(normalize_word)
        .map(str::to_string)
        .collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let data = fs::read_to_string(path)?;
    Ok(load_words_from_str(&data))
}

/// Load the source wordlist. A missing file is fatal.
pub fn load_source(path: &Path) -> Result<Vec<String>, CurateError> {
    load_words_from_file(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CurateError::MissingSource {
            path: path.to_path_buf(),
        },
        _ => CurateError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Load a decision file. A missing file is an empty history.
pub fn load_history(path: &Path) -> Result<Vec<String>, CurateError> {
    match load_words_from_file(path) {
        Ok(words) => Ok(words),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(CurateError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Append-only handle on a decision file, one word per line.
///
/// Every word is flushed as soon as it is written. The handle is closed on drop.
/// A file whose last line lacks its newline gets one before the first new word.
#[derive(Debug)]
pub struct WordAppender {
    path: PathBuf,
    file: File,
    missing_newline: bool,
}

impl WordAppender {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CurateError> {
        let path = path.as_ref().to_path_buf();
        let write_err = |source| CurateError::Write {
            path: path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)
            .map_err(write_err)?;
        let missing_newline = ends_without_newline(&mut file).map_err(write_err)?;
        Ok(Self {
            path,
            file,
            missing_newline,
        })
    }

    pub fn append(&mut self, word: &str) -> Result<(), CurateError> {
        let line = if self.missing_newline {
            format!("\n{word}\n")
        } else {
            format!("{word}\n")
        };
        self.file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|source| CurateError::Write {
                path: self.path.clone(),
                source,
            })?;
        self.missing_newline = false;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// Writes in append mode always land at the end, so the read position is free to move.
fn ends_without_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
