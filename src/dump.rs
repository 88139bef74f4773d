//! The acquisition loop: wait on every live source at once, read whichever
//! became ready, decode, and emit.

use std::io::Write;

use log::{debug, info};
use nix::errno::Errno;
use nix::poll::{PollFd, PollFlags, PollTimeout, poll};

use crate::control::PauseFlag;
use crate::error::DumpError;
use crate::event::decode;
use crate::names::NameTable;
use crate::sink::Sink;
use crate::source::{ReadOutcome, Source};

pub struct Dumper<'t, W: Write, F: Write> {
    sources: Vec<Source>,
    names: &'t dyn NameTable,
    pause: PauseFlag,
    sink: Sink<W, F>,
}

impl<'t, W: Write, F: Write> Dumper<'t, W, F> {
    pub fn new(
        sources: Vec<Source>,
        names: &'t dyn NameTable,
        pause: PauseFlag,
        sink: Sink<W, F>,
    ) -> Self {
        Self {
            sources,
            names,
            pause,
            sink,
        }
    }

    /// Runs until every source reaches end-of-stream (Ok) or a fatal
    /// condition ends the whole run (Err). Either way all handles are closed
    /// on the way out.
    pub fn run(mut self) -> Result<(), DumpError> {
        while !self.sources.is_empty() {
            let ready = match self.wait()? {
                Some(ready) => ready,
                // Interrupted by a control signal: no data, wait again.
                None => continue,
            };

            let mut drained = Vec::new();
            for idx in ready {
                match self.sources[idx].read_one()? {
                    ReadOutcome::Frame(frame) => {
                        let ev = decode(self.sources[idx].label(), &frame, self.names);
                        // Pause is observed here, after the frame has been
                        // consumed and decoded, so no backlog builds up.
                        if !self.pause.is_paused() {
                            self.sink.emit(&ev)?;
                        }
                    }
                    ReadOutcome::Closed => drained.push(idx),
                    ReadOutcome::Interrupted => {}
                }
            }

            // Remove from the back so earlier indices stay valid.
            for idx in drained.into_iter().rev() {
                let src = self.sources.remove(idx);
                info!("{}: end of stream", src.label());
            }
        }
        debug!("all sources drained");
        Ok(())
    }

    /// Blocks with no timeout until at least one source is readable and
    /// returns their indices. `None` means the wait was interrupted.
    fn wait(&self) -> Result<Option<Vec<usize>>, DumpError> {
        let mut fds: Vec<PollFd> = self
            .sources
            .iter()
            .map(|s| PollFd::new(s.as_fd(), PollFlags::POLLIN))
            .collect();
        match poll(&mut fds, PollTimeout::NONE) {
            Ok(_) => {}
            Err(Errno::EINTR) => return Ok(None),
            Err(e) => return Err(DumpError::Wait(e)),
        }

        // Hangup and error states still get one read attempt; the read
        // result is what classifies them.
        let wanted = PollFlags::POLLIN | PollFlags::POLLHUP | PollFlags::POLLERR;
        let ready = fds
            .iter()
            .enumerate()
            .filter(|(_, fd)| fd.revents().is_some_and(|r| r.intersects(wanted)))
            .map(|(idx, _)| idx)
            .collect();
        Ok(Some(ready))
    }
}
