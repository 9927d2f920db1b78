use super::*;

pub mod decode;
pub mod transactions;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Decode a hex signature script")]
  Decode(decode::Decode),
  #[command(about = "Decode the input signature scripts of transaction records")]
  Transactions(transactions::Transactions),
}

impl Subcommand {
  pub(crate) fn run(self, options: Options) -> SubcommandResult {
    let decode_options = options.decode_options()?;
    log::debug!("decoding with {decode_options:?}");

    match self {
      Self::Decode(decode) => decode.run(&decode_options),
      Self::Transactions(transactions) => transactions.run(&decode_options),
    }
  }
}

pub trait Output: Send {
  fn print_json(&self);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print_json(&self) {
    serde_json::to_writer_pretty(io::stdout(), self).ok();
    println!();
  }
}

pub(crate) type SubcommandResult = Result<Box<dyn Output>>;

/// Reads `path`, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
  match path {
    Some(path) => {
      fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
    }
    None => {
      let mut input = String::new();
      io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
      Ok(input)
    }
  }
}
