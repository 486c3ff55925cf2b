//! # lento-theme — Brand Color-Scheme Engine
//!
//! Generates a complete light and dark website theme from a single brand
//! color. One parameter shift (the brand hex) produces a new coherent
//! palette with a legible foreground for every colored surface.
//!
//! # Architecture
//!
//! ```text
//! brand HexColor
//!     │
//!     ▼
//! lento_color: hex → HSL (integer degrees / percents)
//!     │
//!     ▼
//! scheme.rs:   derive 11 roles × {light, dark} by fixed hue/sat/light rules
//!     │
//!     ▼
//! contrast.rs: pick black/white foregrounds (light mode)
//!     │
//!     ▼
//! css.rs:      serialize as `--color-<role>` custom properties
//! ```
//!
//! # Dark mode
//!
//! The dark palette is derived from the brand hue independently of the light
//! one, and pins background, muted and every foreground to fixed navy/cream
//! values. Only primary and accent follow the brand.

pub mod contrast;
pub mod css;
pub mod scheme;

pub use contrast::{contrast_color, contrast_ratio, is_light_color};
pub use css::{generate_css_variables, generate_stylesheet};
pub use scheme::{GeneratedTheme, Mode, Role, ThemeColors, generate_color_scheme};
