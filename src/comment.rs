use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Author {
  pub(crate) first_name: String,
  pub(crate) last_name: String,
}

impl Author {
  pub(crate) fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
      .trim()
      .to_string()
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
  pub(crate) can_delete: bool,
  pub(crate) can_edit: bool,
  pub(crate) content: String,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub(crate) created_at: NaiveDateTime,
  pub(crate) id: u64,
  /// Not part of the wire shape; stamped by [`Client`] from the request.
  #[serde(default)]
  pub(crate) post: u64,
  pub(crate) user: Author,
}
