//! Shared I/O helpers: the pager sink used by `log` and atomic file
//! replacement used for the index, HEAD and config.

use minus::Pager;
use std::io::{self, Write};
use std::path::Path;

/// Output sink feeding the `minus` pager
///
/// Bytes are forwarded as text. A write that ends partway through a UTF-8
/// sequence keeps the incomplete tail until the next write completes it.
pub struct PagerWriter {
    pager: Pager,
    pending: Vec<u8>,
}

impl PagerWriter {
    pub fn new(pager: Pager) -> Self {
        PagerWriter {
            pager,
            pending: Vec::new(),
        }
    }

    fn push(&mut self, text: &str) -> io::Result<()> {
        self.pager.push_str(text).map_err(io::Error::other)
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let valid_up_to = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidData, e)),
        };

        let rest = self.pending.split_off(valid_up_to);
        let text = String::from_utf8(std::mem::replace(&mut self.pending, rest))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.push(&text)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "incomplete UTF-8 sequence in pager output",
        ))
    }
}

/// Replace the file at `path` with `content` in a single step
///
/// The content is written to a sibling temporary file which is then renamed
/// over `path`, so readers see either the old or the new file, never a mix.
pub fn write_atomically(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    let temp_path = path.with_file_name(file_name);

    let mut file = std::fs::File::create(&temp_path)?;
    file.write_all(content)?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(&temp_path, path)
}
