use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct ValidationError {
  #[allow(dead_code)]
  #[serde(default)]
  pub(crate) field: Option<String>,
  pub(crate) message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidationErrors {
  pub(crate) errors: Vec<ValidationError>,
}

impl ValidationErrors {
  pub(crate) fn into_first_message(self) -> Option<String> {
    self.errors.into_iter().next().map(|error| error.message)
  }
}
