//! Hand-off of the finished document to wherever it should end up.
//!
//! The export core only sees the [`Delivery`] trait; the back-ends below cover
//! a target directory, any writer (stdout), the native "Save as" dialog and an
//! in-memory capture.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Written to a file at this path.
    Saved(PathBuf),
    /// Written to a stream or buffer without a path.
    Written,
    /// The user dismissed the save dialog.
    Cancelled,
    /// The target refused the payload.
    Failed(String),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Saved(_) | DeliveryOutcome::Written)
    }
}

/// Something that can accept the export payload.
pub trait Delivery {
    fn deliver(&mut self, bytes: &[u8], filename: &str, mime_type: &str) -> DeliveryOutcome;
}

/// Writes `dir/filename`, creating `dir` if needed.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The user's download directory, falling back to home, then `.`.
    pub fn downloads() -> Self {
        let dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(&mut self, bytes: &[u8], filename: &str, _mime_type: &str) -> DeliveryOutcome {
        let path = self.dir.join(filename);
        match fs::create_dir_all(&self.dir).and_then(|_| fs::write(&path, bytes)) {
            Ok(()) => DeliveryOutcome::Saved(path),
            Err(err) => DeliveryOutcome::Failed(format!("{}: {}", path.display(), err)),
        }
    }
}

/// Streams the payload into any writer, e.g. stdout.
#[derive(Debug)]
pub struct WriterDelivery<W: Write> {
    inner: W,
}

impl<W: Write> WriterDelivery<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Delivery for WriterDelivery<W> {
    fn deliver(&mut self, bytes: &[u8], _filename: &str, _mime_type: &str) -> DeliveryOutcome {
        match self.inner.write_all(bytes).and_then(|_| self.inner.flush()) {
            Ok(()) => DeliveryOutcome::Written,
            Err(err) => DeliveryOutcome::Failed(err.to_string()),
        }
    }
}

/// Asks the user where to save through the platform's native dialog.
#[derive(Debug, Clone, Default)]
pub struct DialogDelivery;

impl DialogDelivery {
    pub fn new() -> Self {
        Self
    }
}

impl Delivery for DialogDelivery {
    fn deliver(&mut self, bytes: &[u8], filename: &str, _mime_type: &str) -> DeliveryOutcome {
        let dialog = rfd::FileDialog::new()
            .set_title("Save AKTEMP export")
            .set_file_name(filename)
            .add_filter("CSV", &["csv"]);
        match dialog.save_file() {
            Some(path) => match fs::write(&path, bytes) {
                Ok(()) => DeliveryOutcome::Saved(path),
                Err(err) => DeliveryOutcome::Failed(format!("{}: {}", path.display(), err)),
            },
            None => DeliveryOutcome::Cancelled,
        }
    }
}

/// Keeps the last payload in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDelivery {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
    pub calls: usize,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured payload as text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl Delivery for MemoryDelivery {
    fn deliver(&mut self, bytes: &[u8], filename: &str, mime_type: &str) -> DeliveryOutcome {
        self.bytes = bytes.to_vec();
        self.filename = filename.to_string();
        self.mime_type = mime_type.to_string();
        self.calls += 1;
        DeliveryOutcome::Written
    }
}
