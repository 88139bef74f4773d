//! Pause/resume control plane.
//!
//! A single shared flag, set from asynchronous signal handlers and observed
//! once per decoded frame at emission time. Rapid toggles coalesce; only the
//! last store before an observation matters.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use signal_hook::consts::{SIGUSR1, SIGUSR2};
use signal_hook::low_level;

#[derive(Debug, Clone)]
pub struct PauseFlag(Arc<AtomicBool>);

impl PauseFlag {
    pub fn new(start_paused: bool) -> Self {
        Self(Arc::new(AtomicBool::new(start_paused)))
    }

    pub fn pause(&self) {
        // Single-word flag with no composite invariant; Relaxed is enough.
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn resume(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Installs SIGUSR1 (pause) and SIGUSR2 (resume) handlers for the run.
///
/// The handler bodies are a single atomic store, which is async-signal-safe.
/// Either signal also interrupts the blocking readiness wait with EINTR,
/// which the acquisition loop treats as "no data, wait again".
pub fn install(flag: &PauseFlag) -> io::Result<()> {
    let f = flag.clone();
    let _ = unsafe { low_level::register(SIGUSR1, move || f.pause()) }?;
    let f = flag.clone();
    let _ = unsafe { low_level::register(SIGUSR2, move || f.resume()) }?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_and_coalesces() {
        let flag = PauseFlag::new(false);
        assert!(!flag.is_paused());
        flag.pause();
        flag.pause();
        assert!(flag.is_paused());
        flag.resume();
        assert!(!flag.is_paused());
    }

    #[test]
    fn starts_in_requested_state() {
        assert!(PauseFlag::new(true).is_paused());
        assert!(!PauseFlag::new(false).is_paused());
    }

    #[test]
    fn signals_drive_the_flag() {
        let flag = PauseFlag::new(false);
        install(&flag).unwrap();
        low_level::raise(SIGUSR1).unwrap();
        assert!(flag.is_paused());
        low_level::raise(SIGUSR2).unwrap();
        assert!(!flag.is_paused());
    }
}
