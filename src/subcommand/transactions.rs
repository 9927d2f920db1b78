use {super::*, crate::transaction::DecodedTransaction};

#[derive(Serialize, PartialEq, Debug)]
pub struct Output {
  pub transactions: Vec<DecodedTransaction>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Records {
  Many(Vec<TransactionRecord>),
  One(TransactionRecord),
}

#[derive(Debug, Parser)]
pub(crate) struct Transactions {
  #[arg(help = "Read transaction records from <FILE>. Read from stdin when omitted.")]
  file: Option<PathBuf>,
}

impl Transactions {
  pub(crate) fn run(self, options: &DecodeOptions) -> SubcommandResult {
    let input = read_input(self.file.as_deref())?;

    let records = match serde_json::from_str(&input)
      .context("failed to parse transaction records")?
    {
      Records::Many(records) => records,
      Records::One(record) => vec![record],
    };

    log::info!("decoding {} transaction records", records.len());

    Ok(Box::new(Output {
      transactions: records.iter().map(|record| record.decode(options)).collect(),
    }))
  }
}
