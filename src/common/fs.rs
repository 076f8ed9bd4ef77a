use std::{fs, io::{Seek, SeekFrom, Write}, path::{Path, PathBuf}};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("[common::fs] Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("[common::fs] Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Write-then-rename wrapper for atomic file outputs.
pub struct PendingWrite {
    target: PathBuf,
    tmp: Option<NamedTempFile>,
}

impl PendingWrite {
    /// Open a temporary sibling of `target`; refuses to clobber an existing file unless `force`.
    pub fn open(target: &Path, force: bool) -> Result<Self> {
        let parent = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        ensure_dir_exists(parent)?;

        if !force && target.exists() {
            bail!("[common::fs] Refusing to overwrite existing file: {} (use --force)", target.display());
        }

        let tmp = NamedTempFile::new_in(parent)
            .with_context(|| format!("[common::fs] Failed to create temp file in {}", parent.display()))?;

        Ok(Self { target: target.to_path_buf(), tmp: Some(tmp) })
    }

    /// Flush and atomically move the temporary file into place.
    pub fn finalize(mut self) -> Result<()> {
        let mut tmp = self.tmp.take()
            .context("[common::fs] Pending write was already finalized")?;
        tmp.flush().context("[common::fs] Failed to flush temp file")?;
        tmp.as_file().sync_all().ok(); // best-effort fsync
        tmp.persist(&self.target)
            .with_context(|| format!("[common::fs] Failed to rename into {}", self.target.display()))?;
        Ok(())
    }

    fn file(&mut self) -> std::io::Result<&mut NamedTempFile> {
        self.tmp.as_mut().ok_or_else(|| std::io::Error::other("pending write already finalized"))
    }
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.file()?.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.file()?.flush() }
}

impl Seek for PendingWrite {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> { self.file()?.as_file_mut().seek(pos) }
}

/// Write `bytes` to `path` atomically.
pub fn write_file_atomic(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let mut sink = PendingWrite::open(path, force)?;
    sink.write_all(bytes)
        .with_context(|| format!("[common::fs] Failed to write {}", path.display()))?;
    sink.finalize()
}
