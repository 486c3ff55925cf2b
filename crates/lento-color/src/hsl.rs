// SPDX-License-Identifier: MIT
//
// HSL conversion and hue arithmetic.
//
// Hue is in degrees [0, 360), saturation and lightness in percent [0, 100].
// `hex_to_hsl` rounds every component to an integer, so a round trip
// through HSL is close but not exact: half a percent of lightness is worth
// up to 2.55 channel units.

use crate::hex::HexColor;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in hue/saturation/lightness form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0 to 360.0 (exclusive).
    pub h: f64,
    /// Saturation in percent, 0.0 to 100.0.
    pub s: f64,
    /// Lightness in percent, 0.0 to 100.0.
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to the nearest hex color.
    #[must_use]
    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self.h, self.s, self.l)
    }

    /// Rotate the hue by `degrees`, wrapping into [0, 360).
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self {
            h: adjust_hue(self.h, degrees),
            ..self
        }
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Convert a hex color to HSL.
///
/// Hue is rounded to the nearest whole degree, saturation and lightness to
/// the nearest whole percent. Grays (all channels equal) have hue 0 and
/// saturation 0.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hex_to_hsl(color: HexColor) -> Hsl {
    let (r, g, b) = color.to_srgb();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // max/min are copies of channel values, so exact comparison is sound.
    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        (h, s)
    };

    // A red with a hair of blue can round up to exactly 360°.
    Hsl {
        h: adjust_hue((h * 360.0).round(), 0.0),
        s: (s * 100.0).round(),
        l: (l * 100.0).round(),
    }
}

/// Convert HSL to the nearest hex color.
///
/// Hue is wrapped into [0, 360) and saturation/lightness are clamped to
/// [0, 100] first, so every finite input maps to a valid color.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    let h = adjust_hue(h, 0.0);
    let s = clamp(s, 0.0, 100.0) / 100.0;
    let l = clamp(l, 0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    HexColor::rgb(to_byte(r + m), to_byte(g + m), to_byte(b + m))
}

/// Rotate a hue by `amount` degrees. The result is always in [0, 360).
#[must_use]
pub fn adjust_hue(h: f64, amount: f64) -> f64 {
    let wrapped = (h + amount).rem_euclid(360.0);
    // rem_euclid can round a tiny negative up to exactly 360.0.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Saturating clamp of `value` into [`min`, `max`].
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Scale a 0.0–1.0 channel to a byte with round-half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    fn hsl_of(s: &str) -> (f64, f64, f64) {
        let hsl = hex_to_hsl(hex(s));
        (hsl.h, hsl.s, hsl.l)
    }

    // ── hex → HSL ────────────────────────────────────────────────────────

    #[test]
    fn brand_red_to_hsl() {
        // R=139, G=30, B=30: red-dominant, hue 0.
        assert_eq!(hsl_of("#8B1E1E"), (0.0, 64.0, 33.0));
    }

    #[test]
    fn primaries_to_hsl() {
        assert_eq!(hsl_of("#FF0000"), (0.0, 100.0, 50.0));
        assert_eq!(hsl_of("#00FF00"), (120.0, 100.0, 50.0));
        assert_eq!(hsl_of("#0000FF"), (240.0, 100.0, 50.0));
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        assert_eq!(hsl_of("#000000"), (0.0, 0.0, 0.0));
        assert_eq!(hsl_of("#808080"), (0.0, 0.0, 50.0));
        assert_eq!(hsl_of("#FFFFFF"), (0.0, 0.0, 100.0));
    }

    #[test]
    fn fixture_hues() {
        assert_eq!(hsl_of("#3399CC"), (200.0, 60.0, 50.0));
        assert_eq!(hsl_of("#CC8033"), (30.0, 60.0, 50.0));
        assert_eq!(hsl_of("#0C1B33"), (217.0, 62.0, 12.0));
    }

    #[test]
    fn hue_just_below_360_wraps_to_zero() {
        // Hue ≈ 359.8°, which rounds to 360 and must wrap.
        let hsl = hex_to_hsl(HexColor::rgb(255, 0, 1));
        assert_eq!(hsl.h, 0.0);
    }

    #[test]
    fn light_colors_use_the_upper_saturation_formula() {
        // l > 0.5 branch: d / (2 - max - min)
        assert_eq!(hsl_of("#F5E6D3"), (34.0, 63.0, 89.0));
    }

    // ── HSL → hex ────────────────────────────────────────────────────────

    #[test]
    fn hsl_to_hex_each_sector() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), hex("#FF0000"));
        assert_eq!(hsl_to_hex(60.0, 100.0, 50.0), hex("#FFFF00"));
        assert_eq!(hsl_to_hex(120.0, 100.0, 25.0), hex("#008000"));
        assert_eq!(hsl_to_hex(180.0, 100.0, 50.0), hex("#00FFFF"));
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), hex("#0000FF"));
        assert_eq!(hsl_to_hex(300.0, 100.0, 50.0), hex("#FF00FF"));
    }

    #[test]
    fn hsl_to_hex_fixed_palette_values() {
        assert_eq!(hsl_to_hex(45.0, 60.0, 55.0).to_string(), "#D1AF47");
        assert_eq!(hsl_to_hex(45.0, 50.0, 45.0).to_string(), "#AC8F39");
        assert_eq!(hsl_to_hex(200.0, 60.0, 50.0).to_string(), "#3399CC");
    }

    #[test]
    fn hsl_to_hex_zero_saturation_is_gray() {
        assert_eq!(hsl_to_hex(123.0, 0.0, 50.0), hex("#808080"));
    }

    #[test]
    fn hsl_to_hex_normalizes_hue() {
        let base = hsl_to_hex(200.0, 60.0, 50.0);
        assert_eq!(hsl_to_hex(560.0, 60.0, 50.0), base);
        assert_eq!(hsl_to_hex(-160.0, 60.0, 50.0), base);
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), hex("#FF0000"));
    }

    #[test]
    fn hsl_to_hex_clamps_out_of_range_percentages() {
        assert_eq!(hsl_to_hex(0.0, 150.0, 50.0), hsl_to_hex(0.0, 100.0, 50.0));
        assert_eq!(hsl_to_hex(0.0, 50.0, 120.0), hex("#FFFFFF"));
        assert_eq!(hsl_to_hex(0.0, -5.0, -5.0), hex("#000000"));
    }

    #[test]
    fn hsl_struct_to_hex() {
        assert_eq!(Hsl::new(45.0, 60.0, 55.0).to_hex(), hex("#D1AF47"));
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn exact_roundtrip_fixtures() {
        for s in ["#3399CC", "#CC8033", "#D1AF47", "#AC8F39", "#1A1A1A", "#FF0000", "#FFFFFF"] {
            assert_eq!(hex_to_hsl(hex(s)).to_hex(), hex(s), "roundtrip of {s}");
        }
    }

    #[test]
    fn brand_red_roundtrip_is_within_one() {
        let back = hex_to_hsl(hex("#8B1E1E")).to_hex();
        assert_eq!(back, hex("#8A1E1E"));
    }

    // ── Hue arithmetic ───────────────────────────────────────────────────

    #[test]
    fn adjust_hue_positive_wrap() {
        assert_eq!(adjust_hue(350.0, 40.0), 30.0);
        assert_eq!(adjust_hue(200.0, 40.0), 240.0);
    }

    #[test]
    fn adjust_hue_negative_wrap() {
        assert_eq!(adjust_hue(10.0, -40.0), 330.0);
        assert_eq!(adjust_hue(-720.0, 0.0), 0.0);
    }

    #[test]
    fn adjust_hue_exact_turn_is_zero() {
        assert_eq!(adjust_hue(180.0, 180.0), 0.0);
    }

    #[test]
    fn adjust_hue_tiny_negative_stays_below_360() {
        let h = adjust_hue(-1e-20, 0.0);
        assert!((0.0..360.0).contains(&h), "got {h}");
    }

    #[test]
    fn shift_hue_keeps_saturation_and_lightness() {
        let shifted = Hsl::new(300.0, 40.0, 60.0).shift_hue(90.0);
        assert_eq!(shifted, Hsl::new(30.0, 40.0, 60.0));
    }

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp(54.0, 40.0, 70.0), 54.0);
        assert_eq!(clamp(10.0, 40.0, 70.0), 40.0);
        assert_eq!(clamp(90.0, 40.0, 70.0), 70.0);
    }
}
