#![no_main]

use {
  inscription_decoder::{decode_bytes, parse_signature_script, DecodeOptions, HexPolicy, Nesting},
  libfuzzer_sys::fuzz_target,
};

fuzz_target!(|input: &[u8]| {
  let nested = DecodeOptions {
    nesting: Nesting::Nested,
    ..Default::default()
  };

  if let Ok(script) = decode_bytes(input, &nested) {
    assert!(script.span() >= input.len());
  }

  if let Ok(hex) = std::str::from_utf8(input) {
    parse_signature_script(Some(hex), &DecodeOptions::default());
    parse_signature_script(
      Some(hex),
      &DecodeOptions {
        hex_policy: HexPolicy::Strict,
        ..Default::default()
      },
    );
  }
});
