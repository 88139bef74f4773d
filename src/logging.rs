//! Logger setup. Diagnostics go to stderr so stdout carries only event lines.

use env_logger::Env;

pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
