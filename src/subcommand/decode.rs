use super::*;

#[derive(Serialize, Eq, PartialEq, Debug)]
pub struct Output {
  pub operations: Option<DecodedScript>,
}

#[derive(Debug, Parser)]
pub(crate) struct Decode {
  #[arg(help = "Decode <SCRIPT>. Read from stdin when omitted.")]
  script: Option<String>,
}

impl Decode {
  pub(crate) fn run(self, options: &DecodeOptions) -> SubcommandResult {
    let script = match self.script {
      Some(script) => script,
      None => read_input(None)?,
    };

    Ok(Box::new(Output {
      operations: parse_signature_script(Some(script.trim()), options),
    }))
  }
}
