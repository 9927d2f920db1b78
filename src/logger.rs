use {
  super::*,
  log::LevelFilter,
  log4rs::{
    append::{
      console::{ConsoleAppender, Target},
      rolling_file::{
        policy::compound::{
          roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger, CompoundPolicy,
        },
        RollingFileAppender,
      },
    },
    config::{Appender, Config as LoggerConfig, Root},
    encode::pattern::PatternEncoder,
    Handle,
  },
};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";
const LOG_FILE_NAME: &str = "inscription-decoder.log";
const LOG_FILE_SIZE: u64 = 50 * 1024 * 1024;
const LOG_FILE_COUNT: u32 = 5;

/// Logs to stderr, keeping stdout free for JSON output, and additionally to
/// size-rolled gzip archives under `log_dir` when one is given.
pub(crate) fn init(level: LevelFilter, log_dir: Option<&Path>) -> Result<Handle> {
  let stderr = ConsoleAppender::builder()
    .target(Target::Stderr)
    .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
    .build();

  let mut config =
    LoggerConfig::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
  let mut root = Root::builder().appender("stderr");

  if let Some(log_dir) = log_dir {
    fs::create_dir_all(log_dir)
      .with_context(|| format!("failed to create log dir `{}`", log_dir.display()))?;

    let roller = FixedWindowRoller::builder()
      .build(
        &log_dir
          .join(format!("{LOG_FILE_NAME}.{{}}.gz"))
          .to_string_lossy(),
        LOG_FILE_COUNT,
      )
      .map_err(|e| anyhow::anyhow!("failed to build log roller: {e}"))?;

    let policy = CompoundPolicy::new(
      Box::new(SizeTrigger::new(LOG_FILE_SIZE)),
      Box::new(roller),
    );

    let file = RollingFileAppender::builder()
      .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
      .build(log_dir.join(LOG_FILE_NAME), Box::new(policy))
      .context("failed to create log file appender")?;

    config = config.appender(Appender::builder().build("file", Box::new(file)));
    root = root.appender("file");
  }

  let config = config
    .build(root.build(level))
    .map_err(|e| anyhow::anyhow!("invalid logger config: {e}"))?;

  Ok(log4rs::init_config(config)?)
}
