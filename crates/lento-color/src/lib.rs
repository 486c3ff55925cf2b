// SPDX-License-Identifier: MIT
//
// lento-color — color primitives for the Lento theme generator.
//
// Two representations, and the conversions between them:
//
//   HexColor (#RRGGBB, three u8 channels)  ⇄  Hsl (degrees, percent, percent)
//
// Parsing is strict: anything that is not exactly six hex digits (with an
// optional leading `#`) is rejected with a `ColorError`. Once a `HexColor`
// exists, every operation on it is total.

// Single-char math variables (r, g, b, h, s, l, c, x, m) are the standard
// notation for HSL conversion.
#![allow(clippy::many_single_char_names)]
// Operation order is fixed: outputs must match reference HSL tables exactly.
#![allow(clippy::suboptimal_flops)]

pub mod error;
pub mod hex;
pub mod hsl;

pub use error::ColorError;
pub use hex::HexColor;
pub use hsl::{Hsl, adjust_hue, clamp, hex_to_hsl, hsl_to_hex};
