// src/config/defaults.rs
use crate::config::app::{Config, Logging, Transposition};
use crate::consts::{DEFAULT_LOG_LEVEL, DEFAULT_TRANSPOSITION_KEY};

pub fn default_transposition() -> Transposition {
    Transposition {
        default_key: DEFAULT_TRANSPOSITION_KEY.into(),
    }
}

pub fn default_logging() -> Logging {
    Logging {
        level: DEFAULT_LOG_LEVEL.into(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            transposition: default_transposition(),
            logging: default_logging(),
        }
    }
}

impl Default for Transposition {
    fn default() -> Self {
        default_transposition()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}
