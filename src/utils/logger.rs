// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

static LOGGER: ConsoleLogger = ConsoleLogger;
static MAX_LEVEL: AtomicUsize = AtomicUsize::new(LevelFilter::Info as usize);

/// Level-tagged lines on stderr. Stdout is kept for results.
pub struct ConsoleLogger;

pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
  let level = if verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };
  MAX_LEVEL.store(level as usize, Ordering::Relaxed);
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn tag(level: Level) -> &'static str {
  match level {
    Level::Error => "[error]",
    Level::Warn => "[warn] ",
    Level::Info => "[info] ",
    Level::Debug => "[debug]",
    Level::Trace => "[trace]",
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() as usize <= MAX_LEVEL.load(Ordering::Relaxed)
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      // Format: "[warn]  Margin 0.500 is below the safe bound 1.694"
      let mut err = std::io::stderr().lock();
      let _ = writeln!(err, "{} {}", tag(record.level()), record.args());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
