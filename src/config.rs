use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Environment prefix for layered settings, e.g. `HALCYON_SERVER__PORT`.
const ENV_PREFIX: &str = "HALCYON";

/// Config file picked up from the working directory when none is named.
const CWD_CONFIG_FILE: &str = "config.yaml";

/// Accepted request timeouts, in seconds.
const REQUEST_TIMEOUT_RANGE: RangeInclusive<u64> = 1..=300;
/// Accepted number of floating glyphs per page.
const DECORATION_COUNT_RANGE: RangeInclusive<usize> = 1..=24;
/// Accepted hover tilt limit, in degrees.
const TILT_MAX_DEG_RANGE: RangeInclusive<f32> = 0.0..=45.0;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Content file overriding the built-in page content
    #[arg(long, env = "CONTENT_FILE")]
    pub content_file: Option<String>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub motion: MotionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Brand name used in titles and the header.
    pub name: String,
    pub static_dir: PathBuf,
    /// Optional YAML file replacing the built-in content tables.
    #[serde(default)]
    pub content_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    pub reveal_offset_px: f32,
    pub reveal_duration_ms: u32,
    pub reveal_stagger_ms: u32,
    pub tilt_max_deg: f32,
    pub decoration_count: usize,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_offset_px: 24.0,
            reveal_duration_ms: 600,
            reveal_stagger_ms: 100,
            tilt_max_deg: 8.0,
            decoration_count: 6,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".to_string(),
                request_timeout_secs: 30,
            },
            site: SiteConfig {
                name: "Halcyon".to_string(),
                static_dir: PathBuf::from("static"),
                content_file: None,
            },
            motion: MotionConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Build the configuration from defaults, a config file, `HALCYON_*`
    /// environment variables and finally CLI flags.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        // 1. Defaults (mirrors `AppConfig::default`)
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("site.name", "Halcyon")?
            .set_default("site.static_dir", "static")?
            .set_default("motion.reveal_offset_px", 24.0)?
            .set_default("motion.reveal_duration_ms", 600)?
            .set_default("motion.reveal_stagger_ms", 100)?
            .set_default("motion.tilt_max_deg", 8.0)?
            .set_default("motion.decoration_count", 6)?;

        // 2. Config file: explicit path, else ./config.yaml when present
        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path).required(true)),
            None if Path::new(CWD_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(CWD_CONFIG_FILE).required(false));
            }
            None => {}
        }

        // 3. Environment variables, e.g. HALCYON_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (clap also fills these from their plain env vars)
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(content_file) = cli.content_file {
            builder = builder.set_override("site.content_file", content_file)?;
        }
        if let Some(static_dir) = cli.static_dir {
            builder = builder.set_override("site.static_dir", static_dir)?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would stall requests or flood every page.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        fn out_of_range<T: std::fmt::Debug>(
            key: &str,
            value: T,
            range: &RangeInclusive<T>,
        ) -> config::ConfigError {
            config::ConfigError::Message(format!(
                "{key} = {value:?} is outside {:?}..={:?}",
                range.start(),
                range.end()
            ))
        }

        let timeout = self.server.request_timeout_secs;
        if !REQUEST_TIMEOUT_RANGE.contains(&timeout) {
            return Err(out_of_range(
                "server.request_timeout_secs",
                timeout,
                &REQUEST_TIMEOUT_RANGE,
            ));
        }

        let count = self.motion.decoration_count;
        if !DECORATION_COUNT_RANGE.contains(&count) {
            return Err(out_of_range(
                "motion.decoration_count",
                count,
                &DECORATION_COUNT_RANGE,
            ));
        }

        let tilt = self.motion.tilt_max_deg;
        if !TILT_MAX_DEG_RANGE.contains(&tilt) {
            return Err(out_of_range("motion.tilt_max_deg", tilt, &TILT_MAX_DEG_RANGE));
        }

        Ok(())
    }

    /// Address the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let mut config = AppConfig::default();
        config.motion.decoration_count = 100_000;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("motion.decoration_count"), "{err}");

        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.motion.tilt_max_deg = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_motion_defaults() {
        let motion = MotionConfig::default();
        assert_eq!(motion.decoration_count, 6);
        assert!(motion.reveal_offset_px > 0.0);
    }
}
