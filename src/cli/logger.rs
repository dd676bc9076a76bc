//! `env_logger` setup for the binary.

use std::io::Write;

use chrono::Local;
use log::LevelFilter;

/// Level from the flag, else `RUST_LOG`, else `warn`.
pub fn init_logging(level: Option<&str>) {
    let log_level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Warn);
    let _ = env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5}] {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();
    log::debug!("logger initialized (level: {log_level})");
}
