pub mod cli;
pub mod toml_config;

use crate::domain::model::DrawConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_required_field, validate_tier_bounds, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::{parse_seed, TomlConfig};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lucky-draw")]
#[command(about = "Reproducible seeded lottery draw over a UID list")]
pub struct CliConfig {
    /// UID file, one integer per line
    #[arg(short, long)]
    pub input: Option<String>,

    /// Pre-announced random seed
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_seed_arg)]
    pub seed: Option<i128>,

    /// First-prize count (A)
    #[arg(short = 'a', long = "first")]
    pub first: Option<usize>,

    /// End index of the second prize range [A, B)
    #[arg(short = 'b', long = "second-end")]
    pub second_end: Option<usize>,

    /// End index of the third prize range [B, C); total winners
    #[arg(short = 'c', long = "third-end")]
    pub third_end: Option<usize>,

    /// Export file (.csv, .json, anything else is plain uid,tier rows)
    #[arg(short, long)]
    pub output: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(long)]
    pub config: Option<String>,

    /// Load and check everything without drawing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_seed_arg(raw: &str) -> std::result::Result<i128, String> {
    parse_seed("seed", raw).map_err(|e| e.to_string())
}

/// Fully resolved draw settings, CLI flags layered over the TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawSettings {
    pub input_path: String,
    pub output_path: Option<String>,
    pub draw: DrawConfig,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<DrawSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        self.merge(&file)
    }

    pub fn merge(&self, file: &TomlConfig) -> Result<DrawSettings> {
        let seed = match self.seed {
            Some(seed) => Some(seed),
            None => file.draw.seed.as_ref().map(|s| s.resolve()).transpose()?,
        };
        let input = self.input.clone().or_else(|| file.input_path().map(str::to_string));
        let a = self.first.or(file.draw.a);
        let b = self.second_end.or(file.draw.b);
        let c = self.third_end.or(file.draw.c);

        let settings = DrawSettings {
            input_path: validate_required_field("source.path / --input", &input)?.clone(),
            output_path: self
                .output
                .clone()
                .or_else(|| file.output_path().map(str::to_string)),
            draw: DrawConfig::new(
                *validate_required_field("draw.seed / --seed", &seed)?,
                *validate_required_field("draw.a / --first", &a)?,
                *validate_required_field("draw.b / --second-end", &b)?,
                *validate_required_field("draw.c / --third-end", &c)?,
            ),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for DrawSettings {
    fn validate(&self) -> Result<()> {
        validate_path("source.path", &self.input_path)?;
        if let Some(output) = &self.output_path {
            validate_path("output.path", output)?;
        }
        validate_tier_bounds(self.draw.a, self.draw.b, self.draw.c)
    }
}

impl ConfigProvider for DrawSettings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn draw_config(&self) -> DrawConfig {
        self.draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DrawError;

    #[test]
    fn test_cli_flags_alone() {
        let cli = CliConfig::parse_from([
            "lucky-draw", "-i", "uids.txt", "-s", "-42", "-a", "1", "-b", "2", "-c", "3",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.input_path, "uids.txt");
        assert_eq!(settings.draw, DrawConfig::new(-42, 1, 2, 3));
        assert!(settings.output_path.is_none());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[draw]\nseed = 7\na = 1\nb = 2\nc = 3\n[source]\npath = \"from_file.txt\"\n",
        )
        .unwrap();
        let cli = CliConfig::parse_from(["lucky-draw", "--seed", "99", "--third-end", "4"]);
        let settings = cli.merge(&file).unwrap();

        assert_eq!(settings.input_path, "from_file.txt");
        assert_eq!(settings.draw, DrawConfig::new(99, 1, 2, 4));
    }

    #[test]
    fn test_missing_seed_is_reported() {
        let cli = CliConfig::parse_from(["lucky-draw", "-i", "x.txt", "-a", "0", "-b", "0", "-c", "0"]);
        assert!(matches!(
            cli.resolve(),
            Err(DrawError::MissingConfigError { field }) if field.contains("seed")
        ));
    }

    #[test]
    fn test_bad_bounds_rejected_at_resolve() {
        let cli = CliConfig::parse_from([
            "lucky-draw", "-i", "x.txt", "-s", "1", "-a", "3", "-b", "2", "-c", "5",
        ]);
        assert!(matches!(
            cli.resolve(),
            Err(DrawError::InvalidTierBounds { a: 3, b: 2, c: 5 })
        ));
    }
}
