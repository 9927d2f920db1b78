#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("odd length hex string: {0}")]
  OddLength(usize),

  #[error("invalid hex character at position {position}")]
  MalformedHex { position: usize },

  #[error("pushdata nesting deeper than {0} levels")]
  NestingTooDeep(usize),
}
