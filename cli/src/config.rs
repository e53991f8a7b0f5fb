//! Parameter sources: command-line flags or a JSON config file

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use lcg_core_rs::GeneratorParameters;
use serde::Deserialize;

/// Generator inputs shared by `check` and `generate`
#[derive(Args, Debug)]
pub struct ParamArgs {
    /// Multiplier a, in [0, m)
    #[arg(long, allow_hyphen_values = true)]
    pub a: Option<i64>,

    /// Increment c, in [0, m)
    #[arg(long, allow_hyphen_values = true)]
    pub c: Option<i64>,

    /// Modulus m, > 0
    #[arg(long, allow_hyphen_values = true)]
    pub m: Option<i64>,

    /// Seed X0, in [0, m)
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Read a, c, m and seed from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["a", "c", "m", "seed"])]
    pub config: Option<PathBuf>,
}

/// On-disk form: `{ "a": 5, "c": 3, "m": 16, "seed": 0 }`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GeneratorConfig {
    a: i64,
    c: i64,
    m: i64,
    #[serde(default)]
    seed: i64,
}

/// Range-checked parameters plus a seed
#[derive(Debug, Clone, Copy)]
pub struct ResolvedParams {
    pub params: GeneratorParameters,
    pub seed: i64,
}

impl ParamArgs {
    /// Parameters and a range-checked seed, for commands that step an engine
    pub fn resolve(&self) -> Result<ResolvedParams> {
        let (a, c, m, seed) = self.raw()?;
        build(a, c, m, seed).with_context(|| self.source())
    }

    /// Parameters only; any seed is ignored
    pub fn resolve_parameters(&self) -> Result<GeneratorParameters> {
        let (a, c, m, _) = self.raw()?;
        GeneratorParameters::new(a, c, m)
            .map_err(anyhow::Error::from)
            .with_context(|| self.source())
    }

    fn raw(&self) -> Result<(i64, i64, i64, i64)> {
        if let Some(path) = &self.config {
            let config = load_config(path)?;
            return Ok((config.a, config.c, config.m, config.seed));
        }

        let (Some(a), Some(c), Some(m)) = (self.a, self.c, self.m) else {
            bail!("--a, --c and --m are required unless --config is given");
        };
        Ok((a, c, m, self.seed.unwrap_or(0)))
    }

    fn source(&self) -> String {
        match &self.config {
            Some(path) => format!("invalid parameters in {}", path.display()),
            None => "invalid parameters".to_string(),
        }
    }
}

fn build(a: i64, c: i64, m: i64, seed: i64) -> Result<ResolvedParams> {
    let params = GeneratorParameters::new(a, c, m)?;
    params.check_seed(seed)?;
    Ok(ResolvedParams { params, seed })
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded generator config");
    Ok(config)
}
