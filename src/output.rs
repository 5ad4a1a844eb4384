use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Error};
use tempfile::NamedTempFile;

/// Sink for the rendered output.
///
/// Writes go to a temporary file next to the final destination; only
/// [`commit`](Output::commit) moves it into place.  Until then the
/// destination is untouched, so a failed render never creates the output
/// file or clobbers a previous one.  The rename also replaces prior
/// content wholesale, so a shorter render leaves no trailing bytes behind.
pub struct Output {
    filename: PathBuf,
    temp: NamedTempFile,
}

impl Output {
    pub fn new(filename: &Path) -> Result<Output, Error> {
        let filename = std::env::current_dir()?.join(filename);
        let parent = filename
            .parent()
            .ok_or_else(|| anyhow!("cannot write to root"))?;
        let temp = NamedTempFile::new_in(parent)
            .with_context(|| format!("unable to create output file '{}'", filename.display()))?;
        Ok(Output { filename, temp })
    }

    pub fn commit(self) -> Result<(), Error> {
        self.temp
            .persist(&self.filename)
            .with_context(|| format!("unable to write output file '{}'", self.filename.display()))?;
        Ok(())
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}
