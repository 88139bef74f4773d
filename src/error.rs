use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions for a dump run.
///
/// Per-source end-of-stream is not in here: it only removes that source from
/// the live set and is handled inside the acquisition loop.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to grab {label}: {source}")]
    Grab { label: String, source: nix::Error },

    #[error("wait for readable devices failed: {0}")]
    Wait(nix::Error),

    #[error("{label}: short read of {len} bytes (expected a multiple of {frame})")]
    ShortRead {
        label: String,
        len: usize,
        frame: usize,
    },

    #[error("{label}: read failed: {source}")]
    Read { label: String, source: io::Error },

    #[error("write to output failed: {0}")]
    Output(#[from] io::Error),
}
