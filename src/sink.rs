//! Output sink: one line per event, flushed immediately so the stream is
//! watchable live even when stdout ends up block-buffered.

use std::io::{self, Stderr, Stdout, Write};

use crate::event::ResolvedEvent;

/// Byte written to the feedback stream per emitted line.
const FEEDBACK_MARK: &[u8] = b".";

pub struct Sink<W: Write, F: Write> {
    out: W,
    feedback: Option<F>,
}

impl<W: Write, F: Write> Sink<W, F> {
    pub fn new(out: W, feedback: Option<F>) -> Self {
        Self { out, feedback }
    }

    /// Writes the formatted line and, when enabled, the feedback marker.
    /// Callers decide whether to emit at all; pausing suppresses both.
    pub fn emit(&mut self, ev: &ResolvedEvent<'_>) -> io::Result<()> {
        writeln!(self.out, "{ev}")?;
        self.out.flush()?;
        if let Some(fb) = &mut self.feedback {
            fb.write_all(FEEDBACK_MARK)?;
            fb.flush()?;
        }
        Ok(())
    }
}

/// The interactive sink: lines on stdout, feedback marks on stderr.
pub fn console(feedback: bool) -> Sink<Stdout, Stderr> {
    Sink::new(io::stdout(), feedback.then(io::stderr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawFrame;
    use crate::names::Codes;

    #[test]
    fn writes_line_and_marker() {
        let mut out = Vec::new();
        let mut fb = Vec::new();
        let frame = RawFrame::new(5, 1, 0x01, 28, 0);
        let ev = crate::event::decode("kbd", &frame, &Codes);
        Sink::new(&mut out, Some(&mut fb)).emit(&ev).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "kbd  5.000001  EV_KEY  KEY_ENTER  0x00000000\n"
        );
        assert_eq!(fb, b".");
    }

    #[test]
    fn no_marker_without_feedback_stream() {
        let mut out = Vec::new();
        let frame = RawFrame::new(0, 0, 0x00, 0, 0);
        let ev = crate::event::decode("d", &frame, &Codes);
        Sink::<_, Vec<u8>>::new(&mut out, None).emit(&ev).unwrap();
        assert!(!out.is_empty());
    }
}
