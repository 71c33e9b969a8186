//! Session image serialization using `MessagePack`.
//!
//! A [`SessionImage`] holds the program text, the interpreter snapshot, and
//! the debugger's breakpoints, so a saved debugging session resumes exactly
//! where it stopped, random generator included, and `reset` after a load
//! restarts the loaded program.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use torus_engine::Snapshot;
use torus_foundation::{Error, ErrorKind, Position, Result};

use crate::session::Session;

/// Version written into every image. Images with another version are rejected.
pub const FORMAT_VERSION: u32 = 2;

/// Everything a saved debugging session contains.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionImage {
    /// Image format version.
    pub format: u32,
    /// Program text the session was started from.
    pub source: String,
    /// Program name, if the session had one.
    pub name: Option<String>,
    /// Interpreter state.
    pub snapshot: Snapshot,
    /// Breakpoints set at save time.
    pub breakpoints: Vec<Position>,
}

impl SessionImage {
    /// Captures a session's interpreter state and breakpoints.
    #[must_use]
    pub fn capture(session: &Session) -> Self {
        Self {
            format: FORMAT_VERSION,
            source: session.source().to_string(),
            name: session.name().map(String::from),
            snapshot: session.snapshot(),
            breakpoints: session.breakpoints().iter().collect(),
        }
    }

    /// Loads this image into a session, replacing its program, state, and
    /// breakpoints.
    pub fn apply(self, session: &mut Session) {
        session.set_program(self.source, self.name);
        session.restore(self.snapshot);
        let breakpoints = session.breakpoints_mut();
        breakpoints.clear();
        for position in self.breakpoints {
            breakpoints.add(position);
        }
    }
}

/// Serializes an image to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(image: &SessionImage) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(image)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes an image from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails or the format version is not
/// [`FORMAT_VERSION`].
pub fn from_bytes(bytes: &[u8]) -> Result<SessionImage> {
    let image: SessionImage = rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))?;
    if image.format != FORMAT_VERSION {
        return Err(Error::new(ErrorKind::SerializationError(format!(
            "unsupported image format {} (expected {FORMAT_VERSION})",
            image.format
        ))));
    }
    Ok(image)
}

/// Saves an image to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(image: &SessionImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(image)?;

    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;

    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush file '{}': {e}", path.display())))?;

    Ok(())
}

/// Loads an image from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SessionImage> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    from_bytes(&bytes)
}
