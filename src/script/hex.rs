use super::Error;

/// How malformed hex input is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexPolicy {
  /// The input is split into chunks of two UTF-16 code units, a trailing odd
  /// unit forming its own chunk. Each chunk becomes one byte: leading
  /// whitespace is skipped, an optional sign is read, then the leading hex
  /// digits, wrapped modulo 256. A chunk without any hex digit becomes `0x00`.
  #[default]
  Lenient,
  /// Odd length or non-hex characters are rejected.
  Strict,
}

pub(crate) fn decode(hex: &str, policy: HexPolicy) -> Result<Vec<u8>, Error> {
  match policy {
    HexPolicy::Strict => hex::decode(hex).map_err(|err| match err {
      hex::FromHexError::InvalidHexCharacter { index, .. } => {
        Error::MalformedHex { position: index }
      }
      hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
        Error::OddLength(hex.len())
      }
    }),
    HexPolicy::Lenient => Ok(
      hex
        .encode_utf16()
        .collect::<Vec<u16>>()
        .chunks(2)
        .map(lenient_byte)
        .collect(),
    ),
  }
}

fn lenient_byte(chunk: &[u16]) -> u8 {
  let mut chars = char::decode_utf16(chunk.iter().copied())
    .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
    .skip_while(|c| is_leading_whitespace(*c))
    .peekable();

  let negative = match chars.peek() {
    Some('-') => {
      chars.next();
      true
    }
    Some('+') => {
      chars.next();
      false
    }
    _ => false,
  };

  let byte = chars
    .map_while(|c| c.to_digit(16))
    .fold(0u32, |value, digit| (value * 16 + digit) % 256);
  let byte = u8::try_from(byte).unwrap_or_default();

  if negative {
    byte.wrapping_neg()
  } else {
    byte
  }
}

// NEL counts as whitespace for `char` but not for hex chunk parsing, while
// the byte order mark does.
fn is_leading_whitespace(c: char) -> bool {
  (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_is_empty_buffer() {
    assert_eq!(decode("", HexPolicy::Lenient).unwrap(), Vec::<u8>::new());
    assert_eq!(decode("", HexPolicy::Strict).unwrap(), Vec::<u8>::new());
  }

  #[test]
  fn case_insensitive() {
    assert_eq!(
      decode("aBcDeF09", HexPolicy::Strict).unwrap(),
      vec![0xab, 0xcd, 0xef, 0x09]
    );
    assert_eq!(
      decode("aBcDeF09", HexPolicy::Lenient).unwrap(),
      vec![0xab, 0xcd, 0xef, 0x09]
    );
  }

  #[test]
  fn lenient_substitutes_unparseable_chunks() {
    assert_eq!(decode("zz", HexPolicy::Lenient).unwrap(), vec![0x00]);
    assert_eq!(decode("1g", HexPolicy::Lenient).unwrap(), vec![0x01]);
    assert_eq!(decode("g1", HexPolicy::Lenient).unwrap(), vec![0x00]);
    assert_eq!(
      decode("ff zz51", HexPolicy::Lenient).unwrap(),
      vec![0xff, 0x00, 0x00, 0x01]
    );
  }

  #[test]
  fn lenient_skips_leading_whitespace() {
    assert_eq!(decode(" 5", HexPolicy::Lenient).unwrap(), vec![0x05]);
    assert_eq!(decode("\ta", HexPolicy::Lenient).unwrap(), vec![0x0a]);
    assert_eq!(decode("5 ", HexPolicy::Lenient).unwrap(), vec![0x05]);
  }

  #[test]
  fn lenient_signed_chunks_wrap() {
    assert_eq!(decode("-1", HexPolicy::Lenient).unwrap(), vec![0xff]);
    assert_eq!(decode("-f", HexPolicy::Lenient).unwrap(), vec![0xf1]);
    assert_eq!(decode("+7", HexPolicy::Lenient).unwrap(), vec![0x07]);
    assert_eq!(decode("-0", HexPolicy::Lenient).unwrap(), vec![0x00]);
    assert_eq!(decode("--", HexPolicy::Lenient).unwrap(), vec![0x00]);
  }

  #[test]
  fn lenient_chunks_by_utf16_unit() {
    // "é" is one UTF-16 unit but two UTF-8 bytes.
    assert_eq!(decode("é1ff", HexPolicy::Lenient).unwrap(), vec![0x00, 0xff]);
    // An astral character is a surrogate pair filling one chunk.
    assert_eq!(decode("😀51", HexPolicy::Lenient).unwrap(), vec![0x00, 0x51]);
  }

  #[test]
  fn lenient_parses_trailing_odd_character() {
    assert_eq!(decode("abc", HexPolicy::Lenient).unwrap(), vec![0xab, 0x0c]);
  }

  #[test]
  fn strict_rejects_malformed_input() {
    assert_eq!(decode("abc", HexPolicy::Strict), Err(Error::OddLength(3)));
    assert_eq!(
      decode("00zz", HexPolicy::Strict),
      Err(Error::MalformedHex { position: 2 })
    );
  }
}
