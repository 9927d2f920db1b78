//! Signature script decoding.
//!
//! A hex encoded signature script is turned into an ordered list of
//! [`Operation`]s. Pushed data is rendered as text when every byte is
//! printable ASCII and as lowercase hex otherwise, which surfaces inscription
//! metadata such as token deploy, mint and transfer JSON.
//!
//! Decoding is best effort: pushes that run past the end of the script keep
//! whatever bytes remain and unrecognized opcodes decode as
//! [`Operation::Unknown`]. [`parse_signature_script`] absorbs every failure
//! and reports it as no result.

mod error;
pub mod hex;
pub mod opcode;
mod operation;
mod payload;
mod tokenizer;

pub use self::{
  error::Error,
  hex::HexPolicy,
  operation::Operation,
  payload::{is_human_readable, Payload},
};

use {self::tokenizer::Tokenizer, serde::Serialize};

pub const DEFAULT_MAX_DEPTH: usize = 32;

/// How non-text PUSHDATA1 data, which is tokenized recursively, is placed in
/// the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Nesting {
  /// Spliced into the enclosing operation list.
  #[default]
  Flatten,
  /// Wrapped in [`Operation::NestedOps`].
  Nested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
  pub hex_policy: HexPolicy,
  pub nesting: Nesting,
  pub max_depth: usize,
}

impl Default for DecodeOptions {
  fn default() -> Self {
    Self {
      hex_policy: HexPolicy::default(),
      nesting: Nesting::default(),
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecodedScript {
  operations: Vec<Operation>,
  #[serde(skip)]
  len: usize,
  #[serde(skip)]
  span: usize,
}

impl DecodedScript {
  pub fn operations(&self) -> &[Operation] {
    &self.operations
  }

  pub fn into_operations(self) -> Vec<Operation> {
    self.operations
  }

  /// Length of the decoded script in bytes.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.operations.is_empty()
  }

  /// Bytes claimed by opcodes, length prefixes and push data. Larger than
  /// [`DecodedScript::len`] when a push was cut short.
  pub fn span(&self) -> usize {
    self.span
  }

  pub fn is_truncated(&self) -> bool {
    self.span > self.len
  }

  /// Text payloads in script order.
  pub fn texts(&self) -> impl Iterator<Item = &str> {
    self.operations.iter().flat_map(texts)
  }
}

fn texts(operation: &Operation) -> Box<dyn Iterator<Item = &str> + '_> {
  match operation {
    Operation::NestedOps(operations) => Box::new(operations.iter().flat_map(texts)),
    operation => Box::new(operation.text().into_iter()),
  }
}

/// Decodes a hex signature script, propagating failures.
pub fn decode(hex: &str, options: &DecodeOptions) -> Result<DecodedScript, Error> {
  let bytes = hex::decode(hex, options.hex_policy)?;
  decode_bytes(&bytes, options)
}

pub fn decode_bytes(bytes: &[u8], options: &DecodeOptions) -> Result<DecodedScript, Error> {
  let (operations, span) = Tokenizer::new(bytes, options).tokenize()?;

  Ok(DecodedScript {
    operations,
    len: bytes.len(),
    span,
  })
}

/// Decodes a signature script if one is present.
///
/// Returns `None` for a missing or empty script and for any script that
/// fails to decode, logging a warning in the latter case.
pub fn parse_signature_script(hex: Option<&str>, options: &DecodeOptions) -> Option<DecodedScript> {
  let hex = hex.filter(|hex| !hex.is_empty())?;

  match decode(hex, options) {
    Ok(script) => {
      log::debug!(
        "decoded {} byte signature script into {} operations",
        script.len(),
        script.operations().len()
      );
      if script.is_truncated() {
        log::debug!(
          "signature script truncated: {} of {} bytes present",
          script.len(),
          script.span()
        );
      }
      Some(script)
    }
    Err(err) => {
      log::warn!("Error parsing signature: {err}");
      None
    }
  }
}
