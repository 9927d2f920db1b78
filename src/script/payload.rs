use {
  serde::{Serialize, Serializer},
  std::fmt::{self, Display, Formatter},
};

/// Data carried by a push, classified for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
  Text(String),
  Bytes(Vec<u8>),
}

impl Payload {
  pub fn from_bytes(bytes: &[u8]) -> Self {
    if is_human_readable(bytes) {
      Self::Text(bytes.iter().copied().map(char::from).collect())
    } else {
      Self::Bytes(bytes.to_vec())
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(text) => Some(text),
      Self::Bytes(_) => None,
    }
  }

  /// Byte length of the data as it appeared in the script.
  pub fn len(&self) -> usize {
    match self {
      Self::Text(text) => text.len(),
      Self::Bytes(bytes) => bytes.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Every byte is printable ASCII. Vacuously true for empty data.
pub fn is_human_readable(bytes: &[u8]) -> bool {
  bytes.iter().all(|byte| (0x20..=0x7e).contains(byte))
}

impl Display for Payload {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Text(text) => write!(f, "{text}"),
      Self::Bytes(bytes) => write!(f, "{}", hex::encode(bytes)),
    }
  }
}

impl Serialize for Payload {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn readability_boundary() {
    assert!(is_human_readable(b""));
    assert!(is_human_readable(&[0x20, 0x7e]));
    assert!(!is_human_readable(&[0x1f]));
    assert!(!is_human_readable(&[0x7f]));
    assert!(!is_human_readable(b"hello\n"));
  }

  #[test]
  fn printable_bytes_render_as_text() {
    let payload = Payload::from_bytes(&[0x68, 0x69]);
    assert_eq!(payload, Payload::Text("hi".into()));
    assert_eq!(payload.to_string(), "hi");
  }

  #[test]
  fn binary_bytes_render_as_lowercase_hex() {
    let payload = Payload::from_bytes(&[0x00, 0xff]);
    assert_eq!(payload, Payload::Bytes(vec![0x00, 0xff]));
    assert_eq!(payload.to_string(), "00ff");
    assert_eq!(Payload::from_bytes(&[0xab, 0x0c]).to_string(), "ab0c");
  }

  #[test]
  fn empty_payload_is_empty_text() {
    let payload = Payload::from_bytes(&[]);
    assert_eq!(payload, Payload::Text(String::new()));
    assert!(payload.is_empty());
  }

  #[test]
  fn non_ascii_utf8_is_binary() {
    assert_eq!(
      Payload::from_bytes("é".as_bytes()).to_string(),
      hex::encode("é".as_bytes())
    );
  }

  #[test]
  fn serializes_as_rendered_string() {
    assert_eq!(
      serde_json::to_string(&Payload::from_bytes(b"{\"p\":\"krc-20\"}")).unwrap(),
      r#""{\"p\":\"krc-20\"}""#
    );
    assert_eq!(
      serde_json::to_string(&Payload::from_bytes(&[0x01, 0x02])).unwrap(),
      r#""0102""#
    );
  }
}
