//! Reading source files into memory.
//!
//! [`load_text_file`] is the filesystem loader. [`TextSource`] is the seam
//! the tally pipeline reads through, so it can be pointed at something other
//! than the disk.

use std::fs;
use std::io;
use std::path::Path;

use log::error;
use wordtally_types::{FileMode, Result, TallyError};

/// Anything that can produce the full text behind a path.
pub trait TextSource {
    /// Returns the complete contents of `path`.
    ///
    /// # Errors
    ///
    /// [`TallyError::NotFound`] if nothing exists at `path`,
    /// [`TallyError::Io`] for any other read failure.
    fn load(&self, path: &Path, mode: FileMode) -> Result<String>;
}

impl<S: TextSource + ?Sized> TextSource for &S {
    fn load(&self, path: &Path, mode: FileMode) -> Result<String> {
        (**self).load(path, mode)
    }
}

/// Reads from the local filesystem via [`load_text_file`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl TextSource for FsSource {
    #[inline]
    fn load(&self, path: &Path, mode: FileMode) -> Result<String> {
        load_text_file(path, mode)
    }
}

/// Loads the full contents of a file into a string.
///
/// The file is opened, read to completion and closed before returning,
/// on success and on failure alike.
///
/// - [`FileMode::Read`] decodes strictly; invalid UTF-8 is an I/O failure.
/// - [`FileMode::ReadBinary`] reads raw bytes and decodes lossily.
/// - Write and append modes are rejected without opening the file.
///
/// # Errors
///
/// Returns [`TallyError::NotFound`] when `path` does not exist and
/// [`TallyError::Io`] for everything else. An `error!` diagnostic naming the
/// path is logged before either is returned.
pub fn load_text_file(path: impl AsRef<Path>, mode: FileMode) -> Result<String> {
    let path = path.as_ref();

    let result = if !mode.is_readable() {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("file mode '{mode}' does not permit reading"),
        ))
    } else if mode.is_binary() {
        fs::read(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    } else {
        fs::read_to_string(path)
    };

    result.map_err(|source| {
        let err = TallyError::from_io(path, source);
        error!("{err}");
        err
    })
}
