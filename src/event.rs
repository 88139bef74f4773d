//! Raw input event frames and their human-readable form.

use std::borrow::Cow;
use std::fmt;
use std::mem;

use crate::names::{NameKind, NameTable};

/// Size in bytes of one kernel `input_event` record.
pub const FRAME_SIZE: usize = mem::size_of::<libc::input_event>();

/// One fixed-size event record as delivered by the kernel.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct RawFrame(libc::input_event);

impl RawFrame {
    pub fn new(sec: libc::time_t, usec: libc::suseconds_t, ty: u16, code: u16, value: i32) -> Self {
        Self(libc::input_event {
            time: libc::timeval {
                tv_sec: sec,
                tv_usec: usec,
            },
            type_: ty,
            code,
            value,
        })
    }

    /// Reinterprets a buffer holding exactly one record.
    pub fn from_bytes(buf: &[u8; FRAME_SIZE]) -> Self {
        // input_event is plain old data with no padding on Linux targets.
        Self(unsafe { std::ptr::read_unaligned(buf.as_ptr() as *const libc::input_event) })
    }

    pub fn to_bytes(self) -> [u8; FRAME_SIZE] {
        let mut buf = [0u8; FRAME_SIZE];
        unsafe { std::ptr::write_unaligned(buf.as_mut_ptr() as *mut libc::input_event, self.0) };
        buf
    }

    pub fn sec(&self) -> i64 {
        self.0.time.tv_sec as i64
    }

    pub fn usec(&self) -> i64 {
        self.0.time.tv_usec as i64
    }

    pub fn event_type(&self) -> u16 {
        self.0.type_
    }

    pub fn code(&self) -> u16 {
        self.0.code
    }

    pub fn value(&self) -> i32 {
        self.0.value
    }
}

impl fmt::Debug for RawFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawFrame")
            .field("sec", &self.sec())
            .field("usec", &self.usec())
            .field("type", &self.event_type())
            .field("code", &self.code())
            .field("value", &self.value())
            .finish()
    }
}

/// A frame resolved against the name table, ready to print.
///
/// Ephemeral: built per frame, formatted, dropped.
#[derive(Debug)]
pub struct ResolvedEvent<'a> {
    pub label: &'a str,
    pub sec: i64,
    pub usec: i64,
    pub type_disp: Cow<'static, str>,
    pub code_disp: Cow<'static, str>,
    pub value: i32,
}

/// Decodes a raw frame. Never fails: unknown types and codes fall back to
/// fixed-width hex so columns stay aligned.
pub fn decode<'a>(label: &'a str, frame: &RawFrame, names: &dyn NameTable) -> ResolvedEvent<'a> {
    let ty = frame.event_type();
    let code = frame.code();

    let type_disp = names
        .resolve(NameKind::Type, ty, code)
        .map(Cow::Borrowed)
        .unwrap_or_else(|| Cow::Owned(format!("0x{ty:02X}")));
    let code_disp = names
        .resolve(NameKind::Code, ty, code)
        .map(Cow::Borrowed)
        .unwrap_or_else(|| Cow::Owned(format!("0x{code:04X}")));

    ResolvedEvent {
        label,
        sec: frame.sec(),
        usec: frame.usec(),
        type_disp,
        code_disp,
        value: frame.value(),
    }
}

impl fmt::Display for ResolvedEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The value is printed as the unsigned bit pattern of the i32.
        write!(
            f,
            "{}  {}.{:06}  {}  {}  0x{:08X}",
            self.label, self.sec, self.usec, self.type_disp, self.code_disp, self.value as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::Codes;

    #[test]
    fn byte_round_trip() {
        let frame = RawFrame::new(12, 345_678, 0x01, 30, 1);
        let back = RawFrame::from_bytes(&frame.to_bytes());
        assert_eq!(back.sec(), 12);
        assert_eq!(back.usec(), 345_678);
        assert_eq!(back.event_type(), 0x01);
        assert_eq!(back.code(), 30);
        assert_eq!(back.value(), 1);
    }

    #[test]
    fn known_type_and_code_render_symbolically() {
        let frame = RawFrame::new(1, 2, 0x01, 30, 1);
        let ev = decode("dev", &frame, &Codes);
        assert_eq!(ev.type_disp, "EV_KEY");
        assert_eq!(ev.code_disp, "KEY_A");
        assert_eq!(ev.to_string(), "dev  1.000002  EV_KEY  KEY_A  0x00000001");
    }

    #[test]
    fn unknown_pair_renders_fixed_width_hex() {
        let frame = RawFrame::new(0, 0, 0x0B, 0x1FF, 0);
        let ev = decode("dev", &frame, &Codes);
        assert_eq!(ev.type_disp, "0x0B");
        assert_eq!(ev.code_disp, "0x01FF");
    }

    #[test]
    fn unknown_code_under_known_type() {
        let frame = RawFrame::new(0, 0, 0x02, 0x7FFF, -3);
        let ev = decode("dev", &frame, &Codes);
        assert_eq!(ev.type_disp, "EV_REL");
        assert_eq!(ev.code_disp, "0x7FFF");
    }

    #[test]
    fn value_is_unsigned_hex() {
        let frame = RawFrame::new(7, 1, 0x02, 0, -1);
        let ev = decode("m", &frame, &Codes);
        assert_eq!(ev.to_string(), "m  7.000001  EV_REL  REL_X  0xFFFFFFFF");
    }

    #[test]
    fn microseconds_are_zero_padded() {
        let frame = RawFrame::new(1_600_000_000, 42, 0x00, 0, 0);
        let ev = decode("kbd", &frame, &Codes);
        assert!(ev.to_string().contains("1600000000.000042"));
    }

    #[test]
    fn resolution_is_stable_across_calls() {
        let frame = RawFrame::new(0, 0, 0x01, 28, 0);
        let a = decode("d", &frame, &Codes).to_string();
        let b = decode("d", &frame, &Codes).to_string();
        assert_eq!(a, b);
    }
}
