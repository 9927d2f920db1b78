use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Outpoint indices arrive either as JSON numbers or as decimal strings.
pub struct IndexSerde;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
  Number(u32),
  String(String),
}

impl IndexSerde {
  pub fn serialize<S>(val: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    val.serialize(serializer)
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
  where
    D: Deserializer<'de>,
  {
    match Option::<NumberOrString>::deserialize(deserializer)? {
      None => Ok(None),
      Some(NumberOrString::Number(index)) => Ok(Some(index)),
      Some(NumberOrString::String(s)) => u32::from_str(&s)
        .map(Some)
        .map_err(|e| de::Error::custom(format!("u32 from string error: {}", e))),
    }
  }
}
