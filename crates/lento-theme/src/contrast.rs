//! Foreground selection and contrast measurement.
//!
//! Generated themes use a deliberately simple rule for foregrounds: HSL
//! lightness above 50% gets near-black text, everything else gets white.
//!
//! The WCAG 2.1 functions below never change a generated color. They exist
//! to *measure* how a palette performs, so a brand color that yields a weak
//! pair can be caught before it ships.

use lento_color::HexColor;

/// Foreground used on light surfaces.
pub const NEAR_BLACK: HexColor = HexColor::rgb(0x1A, 0x1A, 0x1A);

/// Foreground used on dark surfaces.
pub const WHITE: HexColor = HexColor::rgb(0xFF, 0xFF, 0xFF);

/// Whether `color` counts as light (HSL lightness strictly above 50%).
#[must_use]
pub fn is_light_color(color: HexColor) -> bool {
    color.to_hsl().l > 50.0
}

/// The foreground to place on `color`: [`NEAR_BLACK`] if it is light,
/// [`WHITE`] otherwise.
#[must_use]
pub fn contrast_color(color: HexColor) -> HexColor {
    if is_light_color(color) { NEAR_BLACK } else { WHITE }
}

/// Linearize one sRGB channel (0.0–1.0).
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG luminance of `color`: 0.0 for black, 1.0 for white.
///
/// Only used to score palettes; theme generation goes by HSL lightness.
#[must_use]
pub fn relative_luminance(color: HexColor) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126f64.mul_add(
        srgb_to_linear(r),
        0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
    )
}

/// Contrast between two colors, from 1.0 (identical luminance) up to 21.0
/// (black on white). Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: HexColor = HexColor::rgb(0, 0, 0);

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    // ── Light / dark verdict ────────────────────────────────────────

    #[test]
    fn dark_brand_red_is_not_light() {
        assert!(!is_light_color(hex("#8B1E1E")));
    }

    #[test]
    fn cream_is_light() {
        assert!(is_light_color(hex("#F5E6D3")));
    }

    #[test]
    fn exactly_fifty_percent_is_not_light() {
        // #808080 rounds to lightness 50, which is not strictly above 50.
        assert!(!is_light_color(hex("#808080")));
        assert_eq!(contrast_color(hex("#808080")), WHITE);
    }

    #[test]
    fn fifty_one_percent_is_light() {
        // #828282 → lightness 51.
        assert!(is_light_color(hex("#828282")));
    }

    // ── Contrast color ──────────────────────────────────────────────

    #[test]
    fn contrast_on_dark_is_white() {
        assert_eq!(contrast_color(hex("#0C1B33")), WHITE);
        assert_eq!(contrast_color(BLACK), WHITE);
    }

    #[test]
    fn contrast_on_light_is_near_black() {
        assert_eq!(contrast_color(hex("#CAAB4E")), NEAR_BLACK);
        assert_eq!(contrast_color(WHITE), NEAR_BLACK);
    }

    #[test]
    fn contrast_is_always_one_of_two() {
        for s in ["#8B1E1E", "#3399CC", "#CC8033", "#FFFF00", "#000080"] {
            let fg = contrast_color(hex(s));
            assert!(fg == NEAR_BLACK || fg == WHITE, "{s} → {fg}");
        }
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(BLACK);
        assert!(approx_eq(lum, 0.0, 0.001), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(WHITE);
        assert!(approx_eq(lum, 1.0, 0.001), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance(hex("#FF0000"));
        // Red contributes 0.2126
        assert!(approx_eq(lum, 0.2126, 0.001), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(hex("#00FF00"));
        assert!(approx_eq(lum, 0.7152, 0.001), "Green luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(BLACK, WHITE);
        assert!(approx_eq(ratio, 21.0, 0.01), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#3399CC");
        let ratio = contrast_ratio(c, c);
        assert!(approx_eq(ratio, 1.0, 1e-9), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = hex("#CD927E");
        let b = hex("#0C1B33");
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        assert!(approx_eq(ab, ba, 1e-12), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn navy_on_cream_is_highly_legible() {
        let ratio = contrast_ratio(hex("#F5E6D3"), hex("#0C1B33"));
        assert!(ratio > 12.0, "Cream/navy contrast: {ratio}");
    }
}
