//! JSON persistence of the track listing

use crate::core::TrackListing;
use crate::error::{MixError, MixResult};
use log::info;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the listing inside the output directory
pub const OUTPUT_FILE_NAME: &str = "program_output.json";

/// Write `listing` as a pretty-printed JSON array into `dir`
pub fn write_listing(listing: &TrackListing, dir: &Path) -> MixResult<PathBuf> {
    let path = dir.join(OUTPUT_FILE_NAME);

    let file = File::create(&path).map_err(|e| persistence_error(&path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, listing).map_err(|e| persistence_error(&path, e))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| persistence_error(&path, e))?;

    info!("Wrote {} entries to {}", listing.len(), path.display());
    Ok(path)
}

fn persistence_error(path: &Path, err: impl Display) -> MixError {
    MixError::PersistenceError(format!("{}: {}", path.display(), err))
}
