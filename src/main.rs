use std::process::ExitCode;

fn main() -> ExitCode {
    evdump::logging::init();
    evdump::cli::run()
}
