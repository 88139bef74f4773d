//! Device handles: one open read-only connection per requested event node.

use std::fs::{File, OpenOptions};
use std::io::Read;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};
use std::path::Path;

use log::info;
use nix::ioctl_write_int;

use crate::error::DumpError;
use crate::event::{FRAME_SIZE, RawFrame};

ioctl_write_int!(eviocgrab, b'E', 0x90);

/// Classification of a single read attempt.
#[derive(Debug)]
pub enum ReadOutcome {
    /// One complete frame.
    Frame(RawFrame),
    /// Zero bytes: the device is gone, close this handle only.
    Closed,
    /// A signal landed between readiness and the read; nothing consumed.
    Interrupted,
}

/// One open event source. Dropping it releases the grab (if any) and the
/// file descriptor, so removal from the live set is the close.
#[derive(Debug)]
pub struct Source {
    label: String,
    file: File,
    grabbed: bool,
}

impl Source {
    /// Opens a device node read-only, optionally taking the exclusive grab.
    /// The grab was explicitly requested, so failing to take it is fatal.
    pub fn open(path: &Path, grab: bool) -> Result<Self, DumpError> {
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|e| DumpError::Open {
                path: path.to_owned(),
                source: e,
            })?;
        let mut src = Source {
            label: path.display().to_string(),
            file,
            grabbed: false,
        };
        if grab {
            src.grab()?;
        }
        info!("opened {}", src.label);
        Ok(src)
    }

    /// Wraps an already-open stream; used to feed recorded frames in tests.
    pub fn from_file(label: impl Into<String>, file: File) -> Self {
        Source {
            label: label.into(),
            file,
            grabbed: false,
        }
    }

    fn grab(&mut self) -> Result<(), DumpError> {
        unsafe { eviocgrab(self.file.as_raw_fd(), 1) }.map_err(|e| DumpError::Grab {
            label: self.label.clone(),
            source: e,
        })?;
        self.grabbed = true;
        Ok(())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn as_fd(&self) -> BorrowedFd<'_> {
        self.file.as_fd()
    }

    /// Performs exactly one read attempt of one frame.
    ///
    /// The evdev interface delivers whole records, so anything between zero
    /// and a full frame means the stream has desynchronized, which is fatal
    /// for the entire run.
    pub fn read_one(&mut self) -> Result<ReadOutcome, DumpError> {
        let mut buf = [0u8; FRAME_SIZE];
        match self.file.read(&mut buf) {
            Ok(0) => Ok(ReadOutcome::Closed),
            Ok(n) if n == FRAME_SIZE => Ok(ReadOutcome::Frame(RawFrame::from_bytes(&buf))),
            Ok(n) => Err(DumpError::ShortRead {
                label: self.label.clone(),
                len: n,
                frame: FRAME_SIZE,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(ReadOutcome::Interrupted),
            Err(e) => Err(DumpError::Read {
                label: self.label.clone(),
                source: e,
            }),
        }
    }
}

impl Drop for Source {
    fn drop(&mut self) {
        if self.grabbed {
            let _ = unsafe { eviocgrab(self.file.as_raw_fd(), 0) };
        }
    }
}
