//! Validated site configuration and per-locale lookups.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lento_color::HexColor;
use lento_theme::{GeneratedTheme, generate_color_scheme};
use serde::Serialize;
use tracing::info;

use crate::error::ConfigError;
use crate::settings::{BrandSettings, ContactSettings, SiteSettings, SocialSettings};

// ─── Locale ─────────────────────────────────────────────────────────────────

/// A language the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    /// BCP 47 tag used in `<html lang>`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Open Graph locale.
    #[must_use]
    pub const fn og_locale(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Ar => "ar_IQ",
        }
    }

    /// Text direction for `<html dir>`.
    #[must_use]
    pub const fn direction(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            _ => Err(ConfigError::UnknownLocale(s.to_owned())),
        }
    }
}

// ─── Social platforms ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Twitter,
    Facebook,
    TikTok,
    YouTube,
}

impl SocialPlatform {
    /// Footer order.
    pub const ALL: [Self; 5] = [
        Self::Instagram,
        Self::Twitter,
        Self::Facebook,
        Self::TikTok,
        Self::YouTube,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
        }
    }

    /// Environment variable holding this platform's URL.
    #[must_use]
    pub const fn env_key(self) -> &'static str {
        match self {
            Self::Instagram => "SITE_SOCIAL_INSTAGRAM",
            Self::Twitter => "SITE_SOCIAL_TWITTER",
            Self::Facebook => "SITE_SOCIAL_FACEBOOK",
            Self::TikTok => "SITE_SOCIAL_TIKTOK",
            Self::YouTube => "SITE_SOCIAL_YOUTUBE",
        }
    }

    /// Human label, e.g. for link text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::TikTok => "TikTok",
            Self::YouTube => "YouTube",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─── SiteConfig ─────────────────────────────────────────────────────────────

/// Fully resolved site configuration.
///
/// Built once at startup; the theme is generated from the brand color at
/// construction and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    brand: BrandSettings,
    contact: ContactSettings,
    social: SocialSettings,
    brand_color: HexColor,
    theme: GeneratedTheme,
}

impl SiteConfig {
    /// Validate `settings` and generate the theme.
    ///
    /// # Errors
    ///
    /// [`ConfigError::BrandColor`] if the brand color is not `#RRGGBB`.
    pub fn from_settings(settings: SiteSettings) -> Result<Self, ConfigError> {
        let brand_color = HexColor::parse(&settings.brand_color).map_err(|source| {
            ConfigError::BrandColor {
                value: settings.brand_color.clone(),
                source,
            }
        })?;
        let theme = generate_color_scheme(brand_color);
        Ok(Self {
            brand: settings.brand,
            contact: settings.contact,
            social: settings.social,
            brand_color,
            theme,
        })
    }

    /// Defaults, then the TOML file at `path` if given, then `SITE_*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from reading the file or validating the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`SiteConfig::load`], with `SITE_*` values taken from `lookup`
    /// instead of the process environment.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from reading the file or validating the result.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match path {
            Some(path) => SiteSettings::from_file(path)?,
            None => SiteSettings::default(),
        };
        settings.apply_overrides(lookup);
        let config = Self::from_settings(settings)?;
        info!(
            site = %config.brand.name,
            brand_color = %config.brand_color,
            "site configuration loaded"
        );
        Ok(config)
    }

    #[must_use]
    pub const fn brand(&self) -> &BrandSettings {
        &self.brand
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactSettings {
        &self.contact
    }

    #[must_use]
    pub const fn social(&self) -> &SocialSettings {
        &self.social
    }

    #[must_use]
    pub const fn brand_color(&self) -> HexColor {
        self.brand_color
    }

    #[must_use]
    pub const fn theme(&self) -> &GeneratedTheme {
        &self.theme
    }

    #[must_use]
    pub fn contact_address(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.contact.address.en,
            Locale::Ar => &self.contact.address.ar,
        }
    }

    /// Opening hours in `locale`, if configured.
    #[must_use]
    pub fn contact_hours(&self, locale: Locale) -> Option<&str> {
        self.contact.hours.as_ref().map(|hours| match locale {
            Locale::En => hours.en.as_str(),
            Locale::Ar => hours.ar.as_str(),
        })
    }

    /// Platforms with a non-empty URL, in [`SocialPlatform::ALL`] order.
    pub fn active_social_links(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        SocialPlatform::ALL
            .into_iter()
            .map(|platform| (platform, self.social.get(platform)))
            .filter(|(_, url)| !url.is_empty())
    }

    /// Page metadata for `locale`.
    #[must_use]
    pub fn metadata(&self, locale: Locale) -> SiteMetadata {
        let title = self.brand.title.clone();
        let description = self.brand.description.clone();
        SiteMetadata {
            lang: locale.code(),
            dir: locale.direction(),
            keywords: self.brand.keywords.join(", "),
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                locale: locale.og_locale(),
                kind: "website",
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: title.clone(),
                description: description.clone(),
            },
            title,
            description,
        }
    }
}

// ─── Metadata ───────────────────────────────────────────────────────────────

/// `<head>` metadata for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub lang: &'static str,
    pub dir: &'static str,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub locale: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
}

// ─── Tests ──────────────────────────────────────────────────────────────────
