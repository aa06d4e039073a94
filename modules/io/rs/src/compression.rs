use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use eyre::{ensure, Result, WrapErr};
use flate2::read::MultiGzDecoder;

/// Compression of an input file, detected from its content rather than its extension.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Compression {
    PlainText,
    Gzip,
}

impl Compression {
    pub fn infer_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let kind = infer::get_from_path(path)
            .wrap_err_with(|| format!("Failed to sniff the file type: {}", path.display()))?;

        let compression = match kind.map(|x| (x.extension(), x.mime_type())) {
            Some(("gz", "application/gzip")) => Compression::Gzip,
            // Always assume plain text if there is no clear match
            _ => Compression::PlainText,
        };
        Ok(compression)
    }
}

/// Opens the file for buffered reading, transparently decompressing gzip streams.
pub fn read_file(path: impl AsRef<Path>) -> Result<Box<dyn BufRead + Send + 'static>> {
    let path = path.as_ref();
    ensure!(path.exists(), "File {} does not exist", path.display());

    let compression = Compression::infer_from_path(path)?;
    log::debug!("Opening {} ({compression:?})", path.display());

    let file =
        File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?;
    let stream: Box<dyn BufRead + Send + 'static> = match compression {
        Compression::PlainText => Box::new(BufReader::new(file)),
        Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(file))),
    };
    Ok(stream)
}
