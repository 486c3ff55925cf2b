//! Raw, unvalidated site settings and their layering.
//!
//! Every field has a default, so a TOML file only needs the keys it wants to
//! change:
//!
//! ```toml
//! brand-color = "#1E6E8B"
//!
//! [brand]
//! name = "Harbor Roasters"
//! keywords = ["coffee", "espresso"]
//!
//! [contact.address]
//! en = "Basra, Iraq"
//! ar = "البصرة، العراق"
//!
//! [social]
//! instagram = "https://instagram.com/harbor"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::site::SocialPlatform;

/// Brand color used when neither the config file nor the environment sets one.
pub const DEFAULT_BRAND_COLOR: &str = "#8B1E1E";

pub const ENV_BRAND_COLOR: &str = "SITE_BRAND_COLOR";
pub const ENV_KEYWORDS: &str = "SITE_KEYWORDS";
pub const ENV_HOURS_EN: &str = "SITE_HOURS_EN";
pub const ENV_HOURS_AR: &str = "SITE_HOURS_AR";

// ─── Settings structs ───────────────────────────────────────────────────────

/// A string in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    #[must_use]
    pub fn new(en: &str, ar: &str) -> Self {
        Self {
            en: en.to_owned(),
            ar: ar.to_owned(),
        }
    }

    /// Replace the languages present in `patch`, keep the rest.
    fn merge(mut self, patch: LocalizedPatch) -> Self {
        if let Some(en) = patch.en {
            self.en = en;
        }
        if let Some(ar) = patch.ar {
            self.ar = ar;
        }
        self
    }
}

/// A two-language table as written in TOML; either key may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocalizedPatch {
    en: Option<String>,
    ar: Option<String>,
}

/// Brand identity and SEO copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandSettings {
    /// Display name, e.g. "Lento Coffee".
    pub name: String,
    /// Full page title.
    pub title: String,
    pub tagline: String,
    /// Meta description.
    pub description: String,
    pub keywords: Vec<String>,
}

impl Default for BrandSettings {
    fn default() -> Self {
        Self {
            name: "Lento Coffee".into(),
            title: "Lento Coffee - Crafted Slowly, Inspired by Heritage".into(),
            tagline: "Crafted Slowly. Inspired by Heritage.".into(),
            description: "Experience luxury coffee with Arabian carpet aesthetics. \
                          Slow-roasted, artisanal coffee blends inspired by traditional craftsmanship."
                .into(),
            keywords: Vec::from(
                ["coffee", "luxury coffee", "Arabian coffee", "artisan coffee", "specialty coffee"]
                    .map(String::from),
            ),
        }
    }
}

/// How customers reach the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContactFile")]
pub struct ContactSettings {
    pub address: LocalizedText,
    pub phone: String,
    pub email: String,
    /// Opening hours; omitted from the site when `None`.
    pub hours: Option<LocalizedText>,
}

impl ContactSettings {
    fn default_hours() -> LocalizedText {
        LocalizedText::new("Sat - Thu: 8:00 AM - 10:00 PM", "السبت - الخميس: 8:00 ص - 10:00 م")
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            address: LocalizedText::new("Mosul, Iraq", "الموصل، العراق"),
            phone: "+964 XXX XXX XXXX".into(),
            email: "hello@lentocoffee.com".into(),
            hours: Some(Self::default_hours()),
        }
    }
}

/// `[contact]` as written in TOML, merged key by key over the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContactFile {
    address: Option<LocalizedPatch>,
    phone: Option<String>,
    email: Option<String>,
    hours: Option<LocalizedPatch>,
}

impl From<ContactFile> for ContactSettings {
    fn from(file: ContactFile) -> Self {
        let defaults = Self::default();
        Self {
            address: match file.address {
                Some(patch) => defaults.address.merge(patch),
                None => defaults.address,
            },
            phone: file.phone.unwrap_or(defaults.phone),
            email: file.email.unwrap_or(defaults.email),
            hours: match file.hours {
                Some(patch) => Some(Self::default_hours().merge(patch)),
                None => defaults.hours,
            },
        }
    }
}

/// Social profile URLs. Empty means "not linked".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialSettings {
    pub instagram: String,
    pub twitter: String,
    pub facebook: String,
    pub tiktok: String,
    pub youtube: String,
}

impl SocialSettings {
    /// The URL configured for `platform` (possibly empty).
    #[must_use]
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::TikTok => &self.tiktok,
            SocialPlatform::YouTube => &self.youtube,
        }
    }

    const fn get_mut(&mut self, platform: SocialPlatform) -> &mut String {
        match platform {
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::TikTok => &mut self.tiktok,
            SocialPlatform::YouTube => &mut self.youtube,
        }
    }
}

/// All site settings before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteSettings {
    /// The one color the whole theme is generated from.
    pub brand_color: String,
    pub brand: BrandSettings,
    pub contact: ContactSettings,
    pub social: SocialSettings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            brand_color: DEFAULT_BRAND_COLOR.into(),
            brand: BrandSettings::default(),
            contact: ContactSettings::default(),
            social: SocialSettings::default(),
        }
    }
}

// ─── Loading ────────────────────────────────────────────────────────────────

impl SiteSettings {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is malformed or a key has the
    /// wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse a TOML settings file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if its contents are not valid settings.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded site settings file");
        Ok(settings)
    }

    /// Overlay `SITE_*` values from `lookup` (usually the process
    /// environment). Unset and empty values leave the current setting alone.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let strings: [(&str, &mut String); 9] = [
            (ENV_BRAND_COLOR, &mut self.brand_color),
            ("SITE_NAME", &mut self.brand.name),
            ("SITE_TITLE", &mut self.brand.title),
            ("SITE_TAGLINE", &mut self.brand.tagline),
            ("SITE_DESCRIPTION", &mut self.brand.description),
            ("SITE_ADDRESS_EN", &mut self.contact.address.en),
            ("SITE_ADDRESS_AR", &mut self.contact.address.ar),
            ("SITE_PHONE", &mut self.contact.phone),
            ("SITE_EMAIL", &mut self.contact.email),
        ];
        for (key, slot) in strings {
            if let Some(value) = get(key) {
                debug!(key, "setting overridden from environment");
                *slot = value;
            }
        }

        if let Some(value) = get(ENV_KEYWORDS) {
            debug!(key = ENV_KEYWORDS, "setting overridden from environment");
            self.brand.keywords = split_keywords(&value);
        }

        let hours_en = get(ENV_HOURS_EN);
        let hours_ar = get(ENV_HOURS_AR);
        if hours_en.is_some() || hours_ar.is_some() {
            // Setting one language keeps the default for the other.
            let hours = self
                .contact
                .hours
                .get_or_insert_with(ContactSettings::default_hours);
            if let Some(en) = hours_en {
                hours.en = en;
            }
            if let Some(ar) = hours_ar {
                hours.ar = ar;
            }
        }

        for platform in SocialPlatform::ALL {
            let key = platform.env_key();
            if let Some(value) = get(key) {
                debug!(key, "setting overridden from environment");
                *self.social.get_mut(platform) = value;
            }
        }
    }
}

/// Split a comma-separated keyword list, trimming blanks.
fn split_keywords(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

// ─── Tests ──────────────────────────────────────────────────────────────────
