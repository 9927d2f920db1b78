#![allow(clippy::result_large_err)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    arguments::Arguments,
    config::Config,
    options::Options,
    subcommand::{Subcommand, SubcommandResult},
  },
  anyhow::{Context, Error},
  clap::Parser,
  serde::{Deserialize, Serialize},
  std::{
    env,
    fs::{self, File},
    io::{self, Read},
    path::{Path, PathBuf},
    process,
  },
};

pub use crate::{
  script::{
    decode, decode_bytes, parse_signature_script, DecodeOptions, DecodedScript, HexPolicy, Nesting,
    Operation, Payload,
  },
  transaction::{DecodedInput, DecodedTransaction, InputRecord, TransactionRecord},
};

mod arguments;
mod config;
mod logger;
mod options;
pub mod script;
pub mod subcommand;
pub mod transaction;

type Result<T = (), E = Error> = std::result::Result<T, E>;

pub fn main() {
  let args = Arguments::parse();

  if let Err(e) = logger::init(args.options.log_level(), args.options.log_dir()) {
    eprintln!("initialize logger error: {e}");
    process::exit(1);
  }

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");
      err
        .chain()
        .skip(1)
        .for_each(|cause| eprintln!("because: {cause}"));
      if env::var_os("RUST_BACKTRACE")
        .map(|val| val == "1")
        .unwrap_or_default()
      {
        eprintln!("{}", err.backtrace());
      }

      process::exit(1);
    }
    Ok(output) => output.print_json(),
  }
}
