//! One-time fetch of the WMT16 segment-level metrics corpus.

use std::fs;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;

use super::error::DatasetError;

pub const WMT16_URL: &str =
    "https://www.statmt.org/wmt16/metrics-task/wmt2016-seg-metric-dev-5lps.tar.gz";

/// Directory name the archive extracts to.
pub const WMT16_DIR: &str = "wmt2016-seg-metric-dev-5lps";

/// Download and extract the WMT16 dev corpus under `data_dir`, removing
/// the archive afterwards. A no-op when the extracted directory already
/// exists. Returns the corpus root.
pub fn fetch_wmt16(data_dir: &Path) -> Result<PathBuf, DatasetError> {
    let corpus_root = data_dir.join(WMT16_DIR);
    if corpus_root.exists() {
        return Ok(corpus_root);
    }

    fs::create_dir_all(data_dir).map_err(|source| DatasetError::Io {
        path: data_dir.to_path_buf(),
        source,
    })?;

    let response = reqwest::blocking::get(WMT16_URL)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|e| DatasetError::Download(e.to_string()))?;
    let bytes = response
        .bytes()
        .map_err(|e| DatasetError::Download(e.to_string()))?;

    let archive_path = data_dir.join(format!("{WMT16_DIR}.tar.gz"));
    fs::write(&archive_path, &bytes).map_err(|source| DatasetError::Io {
        path: archive_path.clone(),
        source,
    })?;

    let file = fs::File::open(&archive_path).map_err(|source| DatasetError::Io {
        path: archive_path.clone(),
        source,
    })?;
    Archive::new(GzDecoder::new(file))
        .unpack(data_dir)
        .map_err(|e| DatasetError::Download(format!("extracting {}: {e}", archive_path.display())))?;

    fs::remove_file(&archive_path).map_err(|source| DatasetError::Io {
        path: archive_path,
        source,
    })?;

    Ok(corpus_root)
}
