//! Transaction records as served by the block explorer API, reduced to the
//! fields needed to locate and decode input signature scripts.

mod index_serde;

use {
  self::index_serde::IndexSerde,
  crate::script::{parse_signature_script, DecodeOptions, DecodedScript},
  serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransactionRecord {
  #[serde(default)]
  pub transaction_id: Option<String>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub inputs: Vec<InputRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputRecord {
  #[serde(default)]
  pub previous_outpoint_hash: Option<String>,
  #[serde(default, with = "IndexSerde")]
  pub previous_outpoint_index: Option<u32>,
  #[serde(default)]
  pub signature_script: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedInput {
  pub index: usize,
  pub previous_outpoint_hash: Option<String>,
  pub previous_outpoint_index: Option<u32>,
  pub operations: Option<DecodedScript>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedTransaction {
  pub transaction_id: Option<String>,
  pub inputs: Vec<DecodedInput>,
}

impl DecodedTransaction {
  /// Text payloads across all inputs, in input order.
  pub fn texts(&self) -> impl Iterator<Item = &str> {
    self
      .inputs
      .iter()
      .filter_map(|input| input.operations.as_ref())
      .flat_map(|script| script.texts())
  }
}

impl TransactionRecord {
  pub fn decode(&self, options: &DecodeOptions) -> DecodedTransaction {
    DecodedTransaction {
      transaction_id: self.transaction_id.clone(),
      inputs: self
        .inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
          let operations = parse_signature_script(input.signature_script.as_deref(), options);
          let present =
            matches!(input.signature_script.as_deref(), Some(script) if !script.is_empty());
          if operations.is_none() && present {
            log::debug!(
              "input {index} of transaction {} has an undecodable signature script",
              self.transaction_id.as_deref().unwrap_or("<unknown>")
            );
          }
          DecodedInput {
            index,
            previous_outpoint_hash: input.previous_outpoint_hash.clone(),
            previous_outpoint_index: input.previous_outpoint_index,
            operations,
          }
        })
        .collect(),
    }
  }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<InputRecord>, D::Error>
where
  D: serde::Deserializer<'de>,
{
  Ok(Option::<Vec<InputRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use {super::*, crate::script::Operation};

  const RECORD: &str = r##"{
  "transaction_id": "e2792d606f7cae9994cbc233a2cdb9c4d4541ad195852ae8ecfd787254613ded",
  "inputs": [
    {
      "previous_outpoint_hash": "aa",
      "previous_outpoint_index": "1",
      "signature_script": "00630774657374696e6768"
    },
    {
      "previous_outpoint_hash": "bb",
      "previous_outpoint_index": 0,
      "signature_script": null
    },
    {
      "previous_outpoint_hash": "cc",
      "previous_outpoint_index": 2,
      "signature_script": ""
    }
  ],
  "outputs": []
}"##;

  #[test]
  fn test_record_deserialize() {
    let record: TransactionRecord = serde_json::from_str(RECORD).unwrap();
    assert_eq!(record.inputs.len(), 3);
    assert_eq!(record.inputs[0].previous_outpoint_index, Some(1));
    assert_eq!(record.inputs[1].previous_outpoint_index, Some(0));
    assert_eq!(record.inputs[1].signature_script, None);
  }

  #[test]
  fn test_record_without_inputs() {
    let record: TransactionRecord = serde_json::from_str(r#"{"inputs":null}"#).unwrap();
    assert_eq!(record, TransactionRecord::default());
  }

  #[test]
  fn test_decode_inputs() {
    let record: TransactionRecord = serde_json::from_str(RECORD).unwrap();
    let decoded = record.decode(&DecodeOptions::default());

    assert_eq!(decoded.inputs[0].index, 0);
    assert_eq!(
      decoded.inputs[0].operations.as_ref().unwrap().operations(),
      [
        Operation::Zero,
        Operation::If,
        Operation::Push(crate::script::Payload::Text("testing".into())),
        Operation::EndIf
      ]
    );
    assert_eq!(decoded.inputs[1].index, 1);
    assert_eq!(decoded.inputs[1].operations, None);
    assert_eq!(decoded.inputs[2].operations, None);
    assert_eq!(decoded.texts().collect::<Vec<_>>(), vec!["testing"]);
  }

  #[test]
  fn test_decoded_serialize() {
    let record: TransactionRecord = serde_json::from_str(RECORD).unwrap();
    let json = serde_json::to_value(record.decode(&DecodeOptions::default())).unwrap();

    assert_eq!(
      json["inputs"][0]["operations"],
      serde_json::json!([["OP_0"], ["OP_IF"], ["OP_PUSH", "testing"], ["OP_ENDIF"]])
    );
    assert_eq!(json["inputs"][1]["operations"], serde_json::Value::Null);
    assert_eq!(json["inputs"][2]["operations"], serde_json::Value::Null);
    assert_eq!(json["inputs"][0]["previous_outpoint_index"], 1);
  }
}
