use std::{env, str::FromStr};

use anyhow::{anyhow, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::json::JsonEncoder,
};
use once_cell::sync::OnceCell;

pub struct Logger;

pub static LOGGER_ENABLED: OnceCell<bool> = OnceCell::new();

#[macro_export]
macro_rules! logger {
    ($level:ident, $($arg:tt)+) => {
        if let Some(true) = $crate::logging::LOGGER_ENABLED.get() {
            ::log::$level!($($arg)+);
        }
    };
}

impl Logger {
    /// Writes JSON lines to `LOG_PATH` (default `amconfig.log`) at the `RUST_LOG` level (default `info`).
    pub fn init() -> Result<()> {
        let level_filter = level_filter()?;

        let log_path = env::var("LOG_PATH").unwrap_or_else(|_| "amconfig.log".to_string());

        let logfile = FileAppender::builder()
            .append(false)
            .encoder(Box::new(JsonEncoder::new()))
            .build(log_path)?;

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder().appender("logfile").build(level_filter))?;

        log4rs::init_config(config)?;

        LOGGER_ENABLED
            .set(true)
            .map_err(|_| anyhow!("logger is already initialized"))?;

        Ok(())
    }
}

fn level_filter() -> Result<LevelFilter> {
    let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    LevelFilter::from_str(&level).map_err(|_| anyhow!("invalid RUST_LOG level {:?}", level))
}
