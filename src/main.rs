// SPDX-License-Identifier: MIT
//
// lento — brand theme generator.
//
// One hex color in, a complete light/dark palette out. The binary wires the
// workspace crates together:
//
//   lento-color  → hex parsing, HSL conversion, hue arithmetic
//   lento-theme  → role palettes, WCAG contrast, CSS serialization
//   lento-config → site settings (defaults → TOML → SITE_* env), metadata
//
// Every command except `inspect` resolves the site configuration first:
//
//   --config file ─┐
//   SITE_* env ────┼─→ SiteConfig (theme generated once) ─→ command output
//   --brand-color ─┘
//
// Command output goes to stdout. Logs and errors go to stderr.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use lento_color::HexColor;
use lento_config::settings::ENV_BRAND_COLOR;
use lento_config::{Locale, SiteConfig};
use lento_theme::{
    GeneratedTheme, Mode, Role, contrast_color, contrast_ratio, generate_css_variables,
    generate_stylesheet, is_light_color,
};

// ─── Exit codes ─────────────────────────────────────────────────────────────

const EXIT_SUCCESS: u8 = 0;
/// `check` found a role pair below the minimum contrast ratio.
const EXIT_CHECK_FAILED: u8 = 1;
/// Bad configuration or arguments.
const EXIT_USAGE: u8 = 2;

/// WCAG AA minimum for large text and UI components.
const DEFAULT_MIN_RATIO: f64 = 3.0;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "lento")]
#[command(about = "Generate a light/dark site theme from one brand color")]
#[command(version)]
struct Cli {
    /// TOML site settings file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Brand color, overriding the config file and SITE_BRAND_COLOR
    #[arg(long, global = true, value_name = "HEX")]
    brand_color: Option<String>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the :root / .dark stylesheet (default)
    Css,

    /// Print the CSS variable declarations for one mode
    Vars {
        /// Dark palette instead of light
        #[arg(long)]
        dark: bool,
    },

    /// Print the generated theme as JSON
    Theme,

    /// Describe a single color
    #[command(after_help = "\
Examples:
  lento inspect '#8B1E1E'
  lento inspect 3399cc")]
    Inspect {
        /// Color as #RRGGBB (the # is optional)
        color: String,
    },

    /// Check WCAG contrast of every surface/foreground pair
    Check {
        /// Minimum acceptable contrast ratio
        #[arg(
            long,
            value_name = "RATIO",
            default_value_t = DEFAULT_MIN_RATIO,
            value_parser = parse_min_ratio
        )]
        min_ratio: f64,
    },

    /// Print page metadata for a locale as JSON
    Site {
        /// en or ar
        #[arg(long, default_value = "en")]
        locale: Locale,
    },
}

/// A contrast ratio is at least 1.0; NaN would let every pair pass.
fn parse_min_ratio(s: &str) -> Result<f64, String> {
    let ratio = s.parse::<f64>().map_err(|err| err.to_string())?;
    if !ratio.is_finite() || ratio < 1.0 {
        return Err(format!("expected a finite ratio of at least 1.0, got {s}"));
    }
    Ok(ratio)
}

// ─── Logging ────────────────────────────────────────────────────────────────

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli, &mut io::stdout().lock(), |key| env::var(key).ok()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("lento: {err:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Execute `cli`, writing command output to `out`. `SITE_*` values come
/// from `env`.
fn run<F>(cli: Cli, out: &mut impl Write, env: F) -> Result<u8>
where
    F: Fn(&str) -> Option<String>,
{
    let command = cli.command.unwrap_or(Command::Css);
    debug!(?command, "dispatching");
    let load = || load_config(cli.config.as_deref(), cli.brand_color.as_deref(), &env);

    match command {
        Command::Css => {
            let config = load()?;
            out.write_all(generate_stylesheet(config.theme()).as_bytes())?;
        }
        Command::Vars { dark } => {
            let config = load()?;
            let mode = if dark { Mode::Dark } else { Mode::Light };
            writeln!(out, "{}", generate_css_variables(config.theme().get(mode)))?;
        }
        Command::Theme => {
            let config = load()?;
            serde_json::to_writer_pretty(&mut *out, config.theme())?;
            writeln!(out)?;
        }
        Command::Inspect { color } => {
            let color = HexColor::parse(&color)?;
            out.write_all(render_inspect(color).as_bytes())?;
        }
        Command::Check { min_ratio } => {
            let config = load()?;
            let rows = contrast_report(config.theme());
            out.write_all(render_report(&rows, min_ratio).as_bytes())?;
            if rows.iter().any(|row| row.ratio < min_ratio) {
                return Ok(EXIT_CHECK_FAILED);
            }
        }
        Command::Site { locale } => {
            let config = load()?;
            serde_json::to_writer_pretty(&mut *out, &config.metadata(locale))?;
            writeln!(out)?;
        }
    }
    Ok(EXIT_SUCCESS)
}

/// Resolve the site configuration; `--brand-color` takes the place of
/// `SITE_BRAND_COLOR` when given.
fn load_config<F>(path: Option<&Path>, brand_color: Option<&str>, env: F) -> Result<SiteConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| match brand_color {
        Some(color) if key == ENV_BRAND_COLOR => Some(color.to_owned()),
        _ => env(key),
    };
    SiteConfig::load_with(path, lookup).with_context(|| match path {
        Some(path) => format!("loading site configuration from {}", path.display()),
        None => "loading site configuration".to_owned(),
    })
}

// ─── Rendering ──────────────────────────────────────────────────────────────

fn render_inspect(color: HexColor) -> String {
    let (r, g, b) = color.channels();
    let hsl = color.to_hsl();
    let verdict = if is_light_color(color) { "light" } else { "dark" };
    let on = contrast_color(color);
    format!(
        "hex       {color}\n\
         rgb       {r}, {g}, {b}\n\
         hsl       hsl({:.0}, {:.0}%, {:.0}%)\n\
         tone      {verdict}\n\
         text      {on} (contrast {:.2})\n",
        hsl.h,
        hsl.s,
        hsl.l,
        contrast_ratio(color, on),
    )
}

/// One surface/foreground pair measured in one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ContrastRow {
    mode: Mode,
    surface: Role,
    text: Role,
    ratio: f64,
}

fn contrast_report(theme: &GeneratedTheme) -> Vec<ContrastRow> {
    Mode::ALL
        .into_iter()
        .flat_map(|mode| {
            let colors = theme.get(mode);
            Role::contrast_pairs().map(move |(surface, text)| ContrastRow {
                mode,
                surface,
                text,
                ratio: contrast_ratio(colors.get(surface), colors.get(text)),
            })
        })
        .collect()
}

fn render_report(rows: &[ContrastRow], min_ratio: f64) -> String {
    rows.iter()
        .map(|row| {
            let pair = format!("{} / {}", row.surface, row.text);
            let status = if row.ratio < min_ratio {
                warn!(
                    mode = %row.mode,
                    pair = %pair,
                    ratio = row.ratio,
                    min_ratio,
                    "contrast below minimum"
                );
                "FAIL"
            } else {
                "ok"
            };
            format!(
                "{:<6} {pair:<40} {:>6.2}  {status}\n",
                row.mode.to_string(),
                row.ratio
            )
        })
        .collect()
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lento").chain(args.iter().copied())).unwrap()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run_to_string(args: &[&str]) -> (u8, String) {
        let mut out = Vec::new();
        let code = run(parse(args), &mut out, no_env).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    // ── Argument parsing ────────────────────────────────────────────

    #[test]
    fn no_subcommand_parses() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbose_counts() {
        assert_eq!(parse(&["-vv", "css"]).verbose, 2);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["vars", "--dark", "--brand-color", "#3399CC"]);
        assert_eq!(cli.brand_color.as_deref(), Some("#3399CC"));
        assert!(matches!(cli.command, Some(Command::Vars { dark: true })));
    }

    #[test]
    fn check_default_ratio() {
        let cli = parse(&["check"]);
        assert!(
            matches!(cli.command, Some(Command::Check { min_ratio }) if (min_ratio - 3.0).abs() < f64::EPSILON)
        );
    }

    #[test]
    fn check_rejects_nan_ratio() {
        assert!(Cli::try_parse_from(["lento", "check", "--min-ratio", "NaN"]).is_err());
    }

    #[test]
    fn check_rejects_unusable_ratios() {
        for ratio in ["inf", "0.5", "-3", "abc"] {
            assert!(
                Cli::try_parse_from(["lento", "check", "--min-ratio", ratio]).is_err(),
                "{ratio} accepted"
            );
        }
        assert!(parse_min_ratio("1").is_ok());
        assert!(parse_min_ratio("4.5").is_ok());
    }

    #[test]
    fn site_locale_parses() {
        assert!(matches!(
            parse(&["site", "--locale", "ar"]).command,
            Some(Command::Site { locale: Locale::Ar })
        ));
    }

    #[test]
    fn site_unknown_locale_rejected() {
        assert!(Cli::try_parse_from(["lento", "site", "--locale", "fr"]).is_err());
    }

    // ── Commands ────────────────────────────────────────────────────

    #[test]
    fn vars_uses_brand_color_flag() {
        let (code, out) = run_to_string(&["vars", "--brand-color", "#8B1E1E"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out.lines().count(), 11);
        assert!(out.starts_with("--color-primary: #8B1E1E;\n"));
    }

    #[test]
    fn dark_vars() {
        let (_, out) = run_to_string(&["vars", "--dark", "--brand-color", "#8B1E1E"]);
        assert!(out.contains("--color-background: #0C1B33;"));
        assert!(out.contains("--color-primary: #CD927E;"));
    }

    #[test]
    fn css_has_both_blocks() {
        let (_, out) = run_to_string(&["css", "--brand-color", "#8B1E1E"]);
        assert!(out.starts_with(":root {\n"));
        assert!(out.contains(".dark {\n"));
    }

    #[test]
    fn theme_json_is_camel_case() {
        let (_, out) = run_to_string(&["theme", "--brand-color", "#8B1E1E"]);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["light"]["primaryForeground"], "#FFFFFF");
        assert_eq!(json["dark"]["mutedForeground"], "#D1AF47");
    }

    #[test]
    fn inspect_describes_color() {
        let (code, out) = run_to_string(&["inspect", "8b1e1e"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(out.contains("hex       #8B1E1E\n"));
        assert!(out.contains("rgb       139, 30, 30\n"));
        assert!(out.contains("hsl       hsl(0, 64%, 33%)\n"));
        assert!(out.contains("tone      dark\n"));
        assert!(out.contains("text      #FFFFFF"));
    }

    #[test]
    fn inspect_rejects_bad_hex() {
        let mut out = Vec::new();
        let err = run(parse(&["inspect", "#12345"]), &mut out, no_env).unwrap_err();
        assert!(err.to_string().contains("expected 6 hex digits"));
    }

    #[test]
    fn bad_brand_color_is_an_error() {
        let mut out = Vec::new();
        let err = run(parse(&["css", "--brand-color", "#ZZZZZZ"]), &mut out, no_env).unwrap_err();
        assert!(format!("{err:#}").contains("invalid brand color"));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let mut out = Vec::new();
        let cli = parse(&["css", "--config", "/definitely/not/here.toml"]);
        assert!(run(cli, &mut out, no_env).is_err());
    }

    #[test]
    fn check_passes_for_default_brand() {
        let (code, out) = run_to_string(&["check", "--brand-color", "#8B1E1E"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out.lines().count(), 10);
        assert!(!out.contains("FAIL"));
    }

    #[test]
    fn check_fails_above_attainable_ratio() {
        let (code, out) = run_to_string(&["check", "--brand-color", "#8B1E1E", "--min-ratio", "22"]);
        assert_eq!(code, EXIT_CHECK_FAILED);
        assert!(out.contains("FAIL"));
    }

    #[test]
    fn site_metadata_json() {
        let (_, out) = run_to_string(&["site", "--locale", "ar", "--brand-color", "#8B1E1E"]);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["dir"], "rtl");
        assert_eq!(json["openGraph"]["locale"], "ar_IQ");
    }

    #[test]
    fn env_lookup_sets_brand_color() {
        let mut out = Vec::new();
        let env = |key: &str| (key == "SITE_BRAND_COLOR").then(|| "#3399CC".to_owned());
        run(parse(&["vars"]), &mut out, env).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("--color-primary: #3399CC;\n"));
    }

    #[test]
    fn brand_color_flag_beats_env_lookup() {
        let mut out = Vec::new();
        let env = |key: &str| (key == "SITE_BRAND_COLOR").then(|| "#3399CC".to_owned());
        run(parse(&["vars", "--brand-color", "#8B1E1E"]), &mut out, env).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("--color-primary: #8B1E1E;\n"));
    }

    // ── Rendering ───────────────────────────────────────────────────

    #[test]
    fn report_covers_both_modes() {
        let theme = lento_theme::generate_color_scheme(HexColor::rgb(0x8B, 0x1E, 0x1E));
        let rows = contrast_report(&theme);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].mode, Mode::Light);
        assert_eq!(rows[0].surface, Role::Primary);
        assert_eq!(rows[0].text, Role::PrimaryForeground);
        assert_eq!(rows[9].mode, Mode::Dark);
    }
}
