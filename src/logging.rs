//! log4rs setup for the binaries.
//!
//! The interactive binary owns the terminal, so it can only log to a file.
//! The headless binary prints JSON on stdout and logs to stderr.

use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";
const CONSOLE_PATTERN: &str = "{l} {t} {m}{n}";

/// Route records at or above `level` to the file at `path`
pub fn init_file(path: &str, level: LevelFilter) -> Result<()> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(path)?;
    install("file", Box::new(file), level)
}

/// Route records at or above `level` to stderr
pub fn init_stderr(level: LevelFilter) -> Result<()> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    install("stderr", Box::new(console), level)
}

fn install(name: &str, appender: Box<dyn log4rs::append::Append>, level: LevelFilter) -> Result<()> {
    let config = Config::builder()
        .appender(Appender::builder().build(name, appender))
        .build(Root::builder().appender(name).build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
