use super::{
  opcode::*, payload::is_human_readable, DecodeOptions, Error, Nesting, Operation, Payload,
};

pub(crate) struct Tokenizer<'a> {
  bytes: &'a [u8],
  cursor: usize,
  depth: usize,
  options: &'a DecodeOptions,
}

impl<'a> Tokenizer<'a> {
  pub(crate) fn new(bytes: &'a [u8], options: &'a DecodeOptions) -> Self {
    Self::with_depth(bytes, options, 0)
  }

  fn with_depth(bytes: &'a [u8], options: &'a DecodeOptions, depth: usize) -> Self {
    Self {
      bytes,
      cursor: 0,
      depth,
      options,
    }
  }

  /// Scans the whole buffer, returning the operations and the final cursor
  /// position. The cursor ends past the buffer when the last push was
  /// truncated.
  pub(crate) fn tokenize(mut self) -> Result<(Vec<Operation>, usize), Error> {
    let mut operations = Vec::new();

    while self.cursor < self.bytes.len() {
      let opcode = self.bytes[self.cursor];
      self.cursor += 1;

      match opcode {
        OP_PUSHBYTES_1..=OP_PUSHBYTES_75 => {
          let data = self.take(opcode.into());
          operations.push(Operation::Push(Payload::from_bytes(data)));
        }
        OP_PUSHDATA1 => {
          let len = self.take(1).first().copied().unwrap_or_default();
          let data = self.take(len.into());
          if is_human_readable(data) {
            operations.push(Operation::PushData1(
              data.iter().copied().map(char::from).collect(),
            ));
          } else {
            let nested = self.nested(data)?;
            match self.options.nesting {
              Nesting::Flatten => operations.extend(nested),
              Nesting::Nested => operations.push(Operation::NestedOps(nested)),
            }
          }
        }
        OP_0 => operations.push(Operation::Zero),
        OP_1 => operations.push(Operation::One),
        OP_IF => operations.push(Operation::If),
        OP_ENDIF => operations.push(Operation::EndIf),
        OP_CHECKSIG => operations.push(Operation::CheckSig),
        _ => operations.push(Operation::Unknown(opcode)),
      }
    }

    Ok((operations, self.cursor))
  }

  /// Advances the cursor by `len` and returns the bytes covered, cut short at
  /// the end of the buffer.
  fn take(&mut self, len: usize) -> &'a [u8] {
    let start = self.cursor.min(self.bytes.len());
    let end = self.cursor.saturating_add(len).min(self.bytes.len());
    self.cursor = self.cursor.saturating_add(len);
    &self.bytes[start..end]
  }

  fn nested(&self, data: &'a [u8]) -> Result<Vec<Operation>, Error> {
    let depth = self.depth + 1;
    if depth > self.options.max_depth {
      return Err(Error::NestingTooDeep(self.options.max_depth));
    }

    log::trace!("tokenizing {} byte pushdata at depth {depth}", data.len());

    let (operations, _) = Tokenizer::with_depth(data, self.options, depth).tokenize()?;
    Ok(operations)
  }
}
