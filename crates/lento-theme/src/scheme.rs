//! Theme generation: the bridge from one brand color to eleven roles.
//!
//! Takes the brand color's HSL and assigns every semantic role a concrete
//! color with fixed hue offsets, clamped saturation and pinned lightness.
//! The same input always produces the same theme; nothing here allocates
//! beyond the returned value or reads outside its arguments.

use std::fmt;

use lento_color::{Hsl, HexColor, adjust_hue, clamp, hsl_to_hex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contrast::{NEAR_BLACK, contrast_color};

/// Deep navy: dark-mode background and every dark-mode foreground on color.
pub const DEEP_NAVY: HexColor = HexColor::rgb(0x0C, 0x1B, 0x33);

/// Warm cream: dark-mode body text.
pub const WARM_CREAM: HexColor = HexColor::rgb(0xF5, 0xE6, 0xD3);

/// Slightly lifted navy for dark-mode muted surfaces.
pub const SLATE_NAVY: HexColor = HexColor::rgb(0x1A, 0x2F, 0x4A);

/// The gold hue (degrees) used wherever the palette wants warmth.
pub const GOLD_HUE: f64 = 45.0;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A named semantic color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Accent,
    AccentForeground,
    Background,
    Foreground,
    Border,
    Muted,
    MutedForeground,
}

impl Role {
    /// Every role, in serialization order.
    pub const ALL: [Self; 11] = [
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Background,
        Self::Foreground,
        Self::Border,
        Self::Muted,
        Self::MutedForeground,
    ];

    /// Kebab-case name used in CSS custom properties (`primary-foreground`).
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Border => "border",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
        }
    }

    /// The role drawn on top of this one, if it is a surface role.
    #[must_use]
    pub const fn foreground(self) -> Option<Self> {
        match self {
            Self::Primary => Some(Self::PrimaryForeground),
            Self::Secondary => Some(Self::SecondaryForeground),
            Self::Accent => Some(Self::AccentForeground),
            Self::Background => Some(Self::Foreground),
            Self::Muted => Some(Self::MutedForeground),
            _ => None,
        }
    }

    /// Every (surface, foreground) pair, e.g. (primary, primary-foreground).
    pub fn contrast_pairs() -> impl Iterator<Item = (Self, Self)> {
        Self::ALL
            .into_iter()
            .filter_map(|role| role.foreground().map(|fg| (role, fg)))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which half of a [`GeneratedTheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// CSS selector the mode's variables are scoped to.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Light => ":root",
            Self::Dark => ".dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

// ---------------------------------------------------------------------------
// ThemeColors
// ---------------------------------------------------------------------------

/// One full set of role colors for a single mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    // ── Brand surfaces ────────────────────────────────────────
    pub primary: HexColor,
    pub primary_foreground: HexColor,
    pub secondary: HexColor,
    pub secondary_foreground: HexColor,
    pub accent: HexColor,
    pub accent_foreground: HexColor,

    // ── Page ──────────────────────────────────────────────────
    pub background: HexColor,
    pub foreground: HexColor,
    pub border: HexColor,
    pub muted: HexColor,
    pub muted_foreground: HexColor,
}

impl ThemeColors {
    /// Look up one role.
    #[must_use]
    pub const fn get(&self, role: Role) -> HexColor {
        match role {
            Role::Primary => self.primary,
            Role::PrimaryForeground => self.primary_foreground,
            Role::Secondary => self.secondary,
            Role::SecondaryForeground => self.secondary_foreground,
            Role::Accent => self.accent,
            Role::AccentForeground => self.accent_foreground,
            Role::Background => self.background,
            Role::Foreground => self.foreground,
            Role::Border => self.border,
            Role::Muted => self.muted,
            Role::MutedForeground => self.muted_foreground,
        }
    }

    /// All roles with their colors, in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, HexColor)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

// ---------------------------------------------------------------------------
// GeneratedTheme
// ---------------------------------------------------------------------------

/// The light and dark palettes derived from one brand color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTheme {
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

impl GeneratedTheme {
    #[must_use]
    pub const fn get(&self, mode: Mode) -> &ThemeColors {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a complete light/dark theme from a single brand color.
///
/// ```
/// use lento_color::HexColor;
/// use lento_theme::generate_color_scheme;
///
/// let theme = generate_color_scheme(HexColor::rgb(0x8B, 0x1E, 0x1E));
/// assert_eq!(theme.light.primary.to_string(), "#8B1E1E");
/// assert_eq!(theme.dark.background.to_string(), "#0C1B33");
/// ```
#[must_use]
pub fn generate_color_scheme(brand: HexColor) -> GeneratedTheme {
    let base = brand.to_hsl();
    debug!(%brand, h = base.h, s = base.s, l = base.l, "generating color scheme");

    GeneratedTheme {
        light: generate_light(brand, base),
        dark: generate_dark(base),
    }
}

fn generate_light(brand: HexColor, base: Hsl) -> ThemeColors {
    // Secondary leans gold. Reds and magentas go straight to gold; other
    // hues rotate 40° so the secondary never collides with the primary.
    let secondary_hue = if base.h < 60.0 || base.h > 300.0 {
        GOLD_HUE
    } else {
        adjust_hue(base.h, 40.0)
    };
    let secondary = hsl_to_hex(secondary_hue, clamp(base.s - 10.0, 40.0, 70.0), 55.0);

    // Accent: near-complementary.
    let accent = hsl_to_hex(adjust_hue(base.h, 150.0), clamp(base.s, 50.0, 80.0), 40.0);

    ThemeColors {
        primary: brand,
        primary_foreground: contrast_color(brand),
        secondary,
        secondary_foreground: contrast_color(secondary),
        accent,
        accent_foreground: contrast_color(accent),
        background: hsl_to_hex(base.h, 20.0, 97.0),
        foreground: NEAR_BLACK,
        border: secondary,
        muted: hsl_to_hex(base.h, 30.0, 88.0),
        muted_foreground: hsl_to_hex(base.h, 40.0, 35.0),
    }
}

fn generate_dark(base: Hsl) -> ThemeColors {
    // Fixed gold, shared by secondary and muted text.
    let gold = hsl_to_hex(GOLD_HUE, 60.0, 55.0);

    ThemeColors {
        primary: hsl_to_hex(
            adjust_hue(base.h, 15.0),
            clamp(base.s - 20.0, 30.0, 60.0),
            65.0,
        ),
        primary_foreground: DEEP_NAVY,
        secondary: gold,
        secondary_foreground: DEEP_NAVY,
        accent: hsl_to_hex(adjust_hue(base.h, 180.0), 40.0, 75.0),
        accent_foreground: DEEP_NAVY,
        background: DEEP_NAVY,
        foreground: WARM_CREAM,
        border: hsl_to_hex(GOLD_HUE, 50.0, 45.0),
        muted: SLATE_NAVY,
        muted_foreground: gold,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
