use super::*;

#[derive(Clone, Debug, Parser)]
pub(crate) struct Options {
  #[arg(long, help = "Load configuration from <CONFIG>.")]
  pub(crate) config: Option<PathBuf>,
  #[arg(
    long,
    default_value = "info",
    help = "Log at <LOG_LEVEL>: off, error, warn, info, debug or trace."
  )]
  pub(crate) log_level: log::LevelFilter,
  #[arg(long, help = "Also write rolling log files to <LOG_DIR>.")]
  pub(crate) log_dir: Option<PathBuf>,
  #[arg(long, help = "Treat odd length or non-hex scripts as undecodable.")]
  pub(crate) strict_hex: bool,
  #[arg(long, help = "Keep operations decoded from non-text PUSHDATA1 data nested.")]
  pub(crate) nested: bool,
  #[arg(long, help = "Treat scripts nesting PUSHDATA1 deeper than <MAX_DEPTH> as undecodable.")]
  pub(crate) max_depth: Option<usize>,
}

impl Options {
  pub(crate) fn log_level(&self) -> log::LevelFilter {
    self.log_level
  }

  pub(crate) fn log_dir(&self) -> Option<&Path> {
    self.log_dir.as_deref()
  }

  fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("inscription-decoder").join("config.yaml"))
  }

  pub(crate) fn load_config(&self) -> Result<Config> {
    match &self.config {
      Some(path) => Config::load(path),
      None => match Self::default_config_path() {
        Some(path) if path.exists() => Config::load(&path),
        _ => Ok(Config::default()),
      },
    }
  }

  pub(crate) fn decode_options(&self) -> Result<DecodeOptions> {
    let config = self.load_config()?;

    let strict_hex = self.strict_hex || config.strict_hex.unwrap_or_default();
    let nested = self.nested || config.nested.unwrap_or_default();

    Ok(DecodeOptions {
      hex_policy: if strict_hex {
        HexPolicy::Strict
      } else {
        HexPolicy::Lenient
      },
      nesting: if nested {
        Nesting::Nested
      } else {
        Nesting::Flatten
      },
      max_depth: self
        .max_depth
        .or(config.max_depth)
        .unwrap_or(script::DEFAULT_MAX_DEPTH),
    })
  }
}
