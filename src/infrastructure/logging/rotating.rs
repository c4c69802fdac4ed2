//! Size-capped, append-only log file with numbered backups.
//!
//! When a write would push the active file past `max_bytes`, the file is
//! shifted to `<path>.1`, existing backups move up by one and the oldest
//! beyond `backups` is dropped. With zero backups the file is truncated.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Rotating log file usable as a `tracing-subscriber` writer.
pub struct RotatingFile {
    state: Mutex<State>,
}

struct State {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: File,
    written: u64,
}

impl RotatingFile {
    /// Open (or create) `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            state: Mutex::new(State {
                path,
                max_bytes,
                backups,
                file,
                written,
            }),
        })
    }

    /// Path of `n`th backup (`1` is the newest).
    #[must_use]
    pub fn backup_path(path: &Path, n: usize) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }
}

impl State {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.max_bytes > 0
            && self.written > 0
            && self.written + buf.len() as u64 > self.max_bytes
        {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.backups == 0 {
            let truncated = OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(&self.path);
            return self.install(truncated);
        }

        let oldest = RotatingFile::backup_path(&self.path, self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.backups).rev() {
            let from = RotatingFile::backup_path(&self.path, n);
            if from.exists() {
                fs::rename(&from, RotatingFile::backup_path(&self.path, n + 1))?;
            }
        }
        fs::rename(&self.path, RotatingFile::backup_path(&self.path, 1))?;

        let reopened = open_append(&self.path);
        self.install(reopened)
    }

    /// Switch to the freshly opened file once the backups have shifted.
    ///
    /// The size counter restarts even when opening failed, so the next
    /// write goes to the old handle instead of shifting backups again.
    fn install(&mut self, file: io::Result<File>) -> io::Result<()> {
        self.written = 0;
        self.file = file?;
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Exclusive handle for one formatted event.
pub struct RotatingWriter<'a> {
    state: MutexGuard<'a, State>,
}

impl Write for RotatingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.state.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = RotatingWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriter {
            state: self.state.lock(),
        }
    }
}
