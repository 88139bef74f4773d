//! Watch raw input-event traffic from evdev character devices.
//!
//! The engine multiplexes any number of device nodes with `poll(2)`, reads
//! one fixed-size `input_event` record per ready handle per wake-up, resolves
//! numeric (type, code) pairs to symbolic names, and prints one flushed line
//! per event. SIGUSR1/SIGUSR2 pause and resume output without stopping the
//! reads.

pub mod cli;
pub mod control;
pub mod dump;
pub mod error;
pub mod event;
pub mod logging;
pub mod names;
pub mod sink;
pub mod source;
