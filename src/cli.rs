use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use log::error;
use pico_args::Arguments;

use crate::control::{self, PauseFlag};
use crate::dump::Dumper;
use crate::names::Codes;
use crate::sink;
use crate::source::Source;

/// Exit status for bad invocations, distinct from runtime failures (1) and
/// a clean drain (0).
const USAGE: u8 = 2;

pub fn run() -> ExitCode {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print_help();
        return ExitCode::SUCCESS;
    }

    let grab = pargs.contains(["-g", "--grab"]);
    let feedback = pargs.contains(["-f", "--feedback"]);
    let start_paused = pargs.contains(["-p", "--paused"]);

    let free = pargs.finish();
    if free.len() == 1 && free[0] == "list" {
        return list_devices();
    }
    if free.is_empty() {
        eprintln!("evdump: no devices given\n");
        print_help();
        return ExitCode::from(USAGE);
    }
    if let Some(bad) = free.iter().find(|a| a.to_string_lossy().starts_with('-')) {
        eprintln!("evdump: unknown option {}\n", bad.to_string_lossy());
        print_help();
        return ExitCode::from(USAGE);
    }

    match dump(&free, grab, feedback, start_paused) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dump(paths: &[OsString], grab: bool, feedback: bool, start_paused: bool) -> Result<()> {
    let pause = PauseFlag::new(start_paused);
    control::install(&pause)?;

    // Every requested device must open before any dumping starts.
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        sources.push(Source::open(&PathBuf::from(path), grab)?);
    }

    Dumper::new(sources, &Codes, pause, sink::console(feedback)).run()?;
    Ok(())
}

fn list_devices() -> ExitCode {
    let mut devs: Vec<(PathBuf, String)> = evdev::enumerate()
        .map(|(path, dev)| (path, dev.name().unwrap_or("unknown").to_string()))
        .collect();
    devs.sort();
    for (path, name) in devs {
        println!("{}\t{}", path.display(), name);
    }
    ExitCode::SUCCESS
}

fn print_help() {
    println!(
        r#"evdump — dump raw input events from evdev devices

USAGE:
  evdump [OPTIONS] <device>...   Dump events from one or more device nodes
  evdump list                    List event devices and their kernel names

OPTIONS:
  -g, --grab        Take an exclusive grab on every device
  -p, --paused      Start with output suppressed
  -f, --feedback    Write a '.' to stderr for every emitted line
  -h, --help        Show this help

SIGNALS:
  SIGUSR1           Pause output (events are still consumed)
  SIGUSR2           Resume output

Each line is: <device>  <sec>.<usec>  <type>  <code>  <value>
Types and codes without a symbolic name are shown as zero-padded hex."#
    );
}
