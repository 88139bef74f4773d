//! End-to-end runs of the acquisition loop over socketpair-backed sources.

use std::fs::File;
use std::io::Write;
use std::os::fd::OwnedFd;
use std::os::unix::net::UnixStream;
use std::thread;
use std::time::Duration;

use evdump::control::PauseFlag;
use evdump::dump::Dumper;
use evdump::error::DumpError;
use evdump::event::RawFrame;
use evdump::names::Codes;
use evdump::sink::Sink;
use evdump::source::Source;

fn piped(label: &str) -> (Source, UnixStream) {
    let (a, b) = UnixStream::pair().expect("socketpair");
    (Source::from_file(label, File::from(OwnedFd::from(a))), b)
}

fn key_frame(sec: i64, code: u16, value: i32) -> RawFrame {
    RawFrame::new(sec, 0, 0x01, code, value)
}

// Long enough for the loop to drain everything already written.
fn settle() {
    thread::sleep(Duration::from_millis(200));
}

fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn single_source_drains_cleanly_in_order() {
    let (src, mut w) = piped("kbd");
    let writer = thread::spawn(move || {
        for sec in 1..=3 {
            w.write_all(&key_frame(sec, 30, 1).to_bytes()).unwrap();
        }
    });

    let mut out = Vec::new();
    let mut fb = Vec::new();
    let sink = Sink::new(&mut out, Some(&mut fb));
    Dumper::new(vec![src], &Codes, PauseFlag::new(false), sink)
        .run()
        .unwrap();
    writer.join().unwrap();

    let lines = lines(&out);
    assert_eq!(
        lines,
        vec![
            "kbd  1.000000  EV_KEY  KEY_A  0x00000001",
            "kbd  2.000000  EV_KEY  KEY_A  0x00000001",
            "kbd  3.000000  EV_KEY  KEY_A  0x00000001",
        ]
    );
    assert_eq!(fb, b"...");
}

#[test]
fn remaining_source_is_served_after_one_closes() {
    let (src1, mut w1) = piped("first");
    let (src2, mut w2) = piped("second");
    let writer = thread::spawn(move || {
        w1.write_all(&key_frame(1, 28, 1).to_bytes()).unwrap();
        drop(w1);
        settle();
        w2.write_all(&key_frame(2, 57, 1).to_bytes()).unwrap();
        w2.write_all(&key_frame(3, 57, 0).to_bytes()).unwrap();
    });

    let mut out = Vec::new();
    let sink = Sink::<_, Vec<u8>>::new(&mut out, None);
    Dumper::new(vec![src1, src2], &Codes, PauseFlag::new(false), sink)
        .run()
        .unwrap();
    writer.join().unwrap();

    let lines = lines(&out);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("first  1."));
    assert_eq!(lines[1], "second  2.000000  EV_KEY  KEY_SPACE  0x00000001");
    assert_eq!(lines[2], "second  3.000000  EV_KEY  KEY_SPACE  0x00000000");
}

#[test]
fn paused_frames_are_consumed_but_not_printed() {
    let (src, mut w) = piped("kbd");
    let pause = PauseFlag::new(false);
    let toggler = pause.clone();
    let writer = thread::spawn(move || {
        w.write_all(&key_frame(1, 30, 1).to_bytes()).unwrap();
        w.write_all(&key_frame(2, 30, 0).to_bytes()).unwrap();
        settle();
        toggler.pause();
        w.write_all(&key_frame(3, 31, 1).to_bytes()).unwrap();
        settle();
        toggler.resume();
        w.write_all(&key_frame(4, 31, 0).to_bytes()).unwrap();
    });

    let mut out = Vec::new();
    let mut fb = Vec::new();
    let sink = Sink::new(&mut out, Some(&mut fb));
    Dumper::new(vec![src], &Codes, pause, sink).run().unwrap();
    writer.join().unwrap();

    let lines = lines(&out);
    assert_eq!(lines.len(), 3, "frame 3 must be read but suppressed");
    assert!(lines[0].starts_with("kbd  1."));
    assert!(lines[1].starts_with("kbd  2."));
    assert!(lines[2].starts_with("kbd  4."));
    // Feedback marks are suppressed together with the lines.
    assert_eq!(fb, b"...");
}

#[test]
fn starting_paused_suppresses_until_resume() {
    let (src, mut w) = piped("kbd");
    let pause = PauseFlag::new(true);
    let toggler = pause.clone();
    let writer = thread::spawn(move || {
        w.write_all(&key_frame(1, 30, 1).to_bytes()).unwrap();
        w.write_all(&key_frame(2, 30, 0).to_bytes()).unwrap();
        settle();
        toggler.resume();
        w.write_all(&key_frame(3, 31, 1).to_bytes()).unwrap();
    });

    let mut out = Vec::new();
    let sink = Sink::<_, Vec<u8>>::new(&mut out, None);
    Dumper::new(vec![src], &Codes, pause, sink).run().unwrap();
    writer.join().unwrap();

    let lines = lines(&out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("kbd  3."));
}

#[test]
fn misaligned_read_is_fatal_for_the_whole_run() {
    let (src1, w1) = piped("healthy");
    let (src2, mut w2) = piped("broken");
    let frame_size = key_frame(0, 0, 0).to_bytes().len();
    let writer = thread::spawn(move || {
        // One and a half frames, then nothing.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&key_frame(1, 30, 1).to_bytes());
        bytes.extend_from_slice(&key_frame(2, 30, 0).to_bytes()[..frame_size / 2]);
        w2.write_all(&bytes).unwrap();
        w2
    });

    let mut out = Vec::new();
    let sink = Sink::<_, Vec<u8>>::new(&mut out, None);
    let err = Dumper::new(vec![src1, src2], &Codes, PauseFlag::new(false), sink)
        .run()
        .unwrap_err();
    drop(w1);
    writer.join().unwrap();

    match err {
        DumpError::ShortRead { label, len, frame } => {
            assert_eq!(label, "broken");
            assert_eq!(len, frame_size / 2);
            assert_eq!(frame, frame_size);
        }
        other => panic!("expected short read, got {other:?}"),
    }
    // The complete frame before the desync was still emitted.
    assert_eq!(lines(&out).len(), 1);
}
