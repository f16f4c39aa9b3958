//! Logger setup for the wizard binary.
//!
//! Warnings and errors always go to stderr, below the wizard screen. With
//! `log_to_file` set, everything at the build's default level is also
//! written to `./wizard.log`, truncated on each start.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./wizard.log";

pub fn initialize(log_to_file: bool) {
    let config = config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if log_to_file {
        match File::create(LOG_FILE) {
            Ok(file) => loggers.push(WriteLogger::new(
                engine_logging::default_level(),
                config,
                file,
            )),
            Err(err) => eprintln!("Warning: cannot create {LOG_FILE}: {err}"),
        }
    }
    let _ = CombinedLogger::init(loggers);
}

fn config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}
