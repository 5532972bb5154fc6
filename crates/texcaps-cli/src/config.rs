use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use texcaps_catalog::{FormatGroup, TextureFormat};
use texcaps_query::{DeviceFeatures, TextureAspect};

/// Env var that switches queries to WebGPU compatibility mode (`1`, `true`, `yes` or `on`).
pub const COMPAT_ENV: &str = "TEXCAPS_COMPAT";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Parser)]
#[command(name = "texcaps", version, about = "Inspect WebGPU texture format capabilities")]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Comma-separated list of enabled device features (e.g. `texture-compression-bc`).
    ///
    /// Environment variable: `TEXCAPS_FEATURES`.
    #[arg(long, env = "TEXCAPS_FEATURES", global = true)]
    features: Option<String>,

    /// Answer queries as a compatibility-mode device.
    ///
    /// Environment variable: `TEXCAPS_COMPAT`.
    #[arg(long, global = true)]
    compat: bool,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter (tracing-subscriber EnvFilter syntax). Logs go to stderr.
    ///
    /// Environment variable: `TEXCAPS_LOG`.
    #[arg(long, env = "TEXCAPS_LOG", global = true)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List format identifiers in a group.
    List {
        /// all, color, depth-stencil, compressed, encodable, sized, uncompressed or a family name.
        #[arg(long, default_value = "all")]
        group: FormatGroup,

        /// Drop formats whose required feature is not enabled.
        #[arg(long)]
        enabled_only: bool,
    },
    /// Print the catalog descriptor of a format.
    Show { format: TextureFormat },
    /// Print what a format can be used for with the configured features.
    Caps { format: TextureFormat },
    /// Print the bytes one sample occupies across a set of color attachments.
    BytesPerSample {
        #[arg(required = true)]
        formats: Vec<TextureFormat>,
    },
    /// Print the format an aspect of a depth/stencil format behaves as.
    Aspect {
        format: TextureFormat,
        aspect: TextureAspect,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub features: DeviceFeatures,
    pub output: Output,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse(), env_var_truthy(COMPAT_ENV))
    }

    pub fn from_args(args: Args, compat_env: bool) -> Result<Self> {
        let features = match args.features.as_deref() {
            Some(raw) => DeviceFeatures::parse_list(raw)
                .with_context(|| format!("invalid feature list {raw:?}"))?,
            None => DeviceFeatures::new(),
        };
        let features = features.with_compatibility(args.compat || compat_env);

        let log_level = args
            .log_level
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            command: args.command,
            features,
            output: if args.json { Output::Json } else { Output::Text },
            log_level,
        })
    }
}

fn env_var_truthy(name: &str) -> bool {
    let Ok(raw) = std::env::var(name) else {
        return false;
    };

    let v = raw.trim();
    v == "1"
        || v.eq_ignore_ascii_case("true")
        || v.eq_ignore_ascii_case("yes")
        || v.eq_ignore_ascii_case("on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use texcaps_catalog::Feature;
    use texcaps_query::FeatureSet;

    fn config(argv: &[&str]) -> Result<Config> {
        let args = Args::try_parse_from(std::iter::once("texcaps").chain(argv.iter().copied()))?;
        Config::from_args(args, false)
    }

    #[test]
    fn defaults() {
        let config = config(&["list"]).unwrap();
        assert_eq!(
            config.command,
            Command::List {
                group: FormatGroup::All,
                enabled_only: false
            }
        );
        assert_eq!(config.output, Output::Text);
        assert!(!config.features.is_compatibility_mode());
    }

    #[test]
    fn global_options_after_subcommand() {
        let config = config(&[
            "caps",
            "r16unorm",
            "--features",
            "texture-formats-tier2",
            "--compat",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            config.command,
            Command::Caps {
                format: TextureFormat::R16Unorm
            }
        );
        assert!(config.features.has_feature(Feature::TextureFormatsTier1));
        assert!(config.features.is_compatibility_mode());
        assert_eq!(config.output, Output::Json);
    }

    #[test]
    fn unknown_feature_is_reported_with_context() {
        let err = config(&["list", "--features", "texture-compression-bc,bogus"]).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("invalid feature list"), "{chain}");
        assert!(chain.contains("unknown feature identifier \"bogus\""), "{chain}");
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let err = config(&["show", "rgba8unorm-srgbx"]).unwrap_err();
        assert!(format!("{err}").contains("unknown texture format identifier"), "{err}");
    }

    #[test]
    fn compat_env_enables_compatibility_mode() {
        let args = Args::try_parse_from(["texcaps", "show", "r8unorm"]).unwrap();
        let config = Config::from_args(args, true).unwrap();
        assert!(config.features.is_compatibility_mode());
    }

    #[test]
    fn blank_log_level_falls_back_to_default() {
        let config = config(&["list", "--log-level", "  "]).unwrap();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
