use std::io;
use std::path::PathBuf;

use lento_color::ColorError;
use thiserror::Error;

/// Errors raised while assembling a [`SiteConfig`](crate::SiteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape.
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configured brand color is not a `#RRGGBB` value.
    #[error("invalid brand color {value:?}")]
    BrandColor {
        value: String,
        #[source]
        source: ColorError,
    },

    /// A locale other than `en` or `ar` was requested.
    #[error("unknown locale {0:?} (expected \"en\" or \"ar\")")]
    UnknownLocale(String),
}
