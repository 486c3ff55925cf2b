//! # lento-config — Site configuration
//!
//! Everything a deployment can customize: brand identity, contact details,
//! social links, and the single brand color the whole theme derives from.
//!
//! Settings are layered once at startup:
//!
//! ```text
//! SiteSettings::default()      built-in Lento Coffee values
//!     │
//!     ▼
//! TOML file (optional)         only the keys present override
//!     │
//!     ▼
//! SITE_* environment           non-empty values override
//!     │
//!     ▼
//! SiteConfig::from_settings    validate brand color, generate theme
//! ```
//!
//! The resulting [`SiteConfig`] is immutable and handed to consumers by
//! reference. Nothing reads the environment after load.

pub mod error;
pub mod settings;
pub mod site;

pub use error::ConfigError;
pub use settings::{DEFAULT_BRAND_COLOR, SiteSettings};
pub use site::{Locale, SiteConfig, SiteMetadata, SocialPlatform};
