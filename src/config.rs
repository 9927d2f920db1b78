use super::*;

#[derive(Deserialize, Default, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) strict_hex: Option<bool>,
  pub(crate) nested: Option<bool>,
  pub(crate) max_depth: Option<usize>,
}

impl Config {
  pub(crate) fn load(path: &Path) -> Result<Self> {
    let file = File::open(path)
      .with_context(|| format!("failed to open config file `{}`", path.display()))?;
    serde_yaml::from_reader(file)
      .with_context(|| format!("failed to deserialize config file `{}`", path.display()))
  }
}
