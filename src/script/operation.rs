use {
  super::{opcode::*, Payload},
  serde::{ser::SerializeSeq, Serialize, Serializer},
  std::fmt::{self, Display, Formatter},
};

/// One decoded script element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
  /// Direct push of 1 to 75 bytes.
  Push(Payload),
  /// PUSHDATA1 whose data is printable text.
  PushData1(String),
  /// PUSHDATA1 whose data was not text, tokenized as a script of its own.
  /// Only produced with `Nesting::Nested`.
  NestedOps(Vec<Operation>),
  Zero,
  One,
  If,
  EndIf,
  CheckSig,
  Unknown(u8),
}

impl Operation {
  pub fn name(&self) -> &'static str {
    match self {
      Self::Push(_) => OP_PUSH_NAME,
      Self::PushData1(_) => OP_PUSHDATA1_NAME,
      Self::NestedOps(_) => OP_NESTED_NAME,
      Self::Zero => OP_0_NAME,
      Self::One => OP_1_NAME,
      Self::If => OP_IF_NAME,
      Self::EndIf => OP_ENDIF_NAME,
      Self::CheckSig => OP_CHECKSIG_NAME,
      Self::Unknown(_) => OP_UNKNOWN_NAME,
    }
  }

  pub fn text(&self) -> Option<&str> {
    match self {
      Self::Push(payload) => payload.as_text(),
      Self::PushData1(text) => Some(text),
      _ => None,
    }
  }
}

impl Display for Operation {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Push(payload) => write!(f, "{} {payload}", self.name()),
      Self::PushData1(text) => write!(f, "{} {text}", self.name()),
      Self::NestedOps(operations) => {
        write!(f, "{} [", self.name())?;
        for (i, operation) in operations.iter().enumerate() {
          if i > 0 {
            write!(f, " ")?;
          }
          write!(f, "{operation}")?;
        }
        write!(f, "]")
      }
      Self::Unknown(opcode) => write!(f, "{} {opcode:02x}", self.name()),
      _ => write!(f, "{}", self.name()),
    }
  }
}

impl Serialize for Operation {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let len = match self {
      Self::Push(_) | Self::PushData1(_) | Self::NestedOps(_) | Self::Unknown(_) => 2,
      _ => 1,
    };

    let mut seq = serializer.serialize_seq(Some(len))?;
    seq.serialize_element(self.name())?;
    match self {
      Self::Push(payload) => seq.serialize_element(payload)?,
      Self::PushData1(text) => seq.serialize_element(text)?,
      Self::NestedOps(operations) => seq.serialize_element(operations)?,
      Self::Unknown(opcode) => seq.serialize_element(&format!("{opcode:02x}"))?,
      _ => {}
    }
    seq.end()
  }
}
