use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Pagination {
  pub(crate) current_page: usize,
  #[serde(default)]
  pub(crate) has_next_page: bool,
  #[serde(default)]
  pub(crate) has_previous_page: bool,
  #[serde(default)]
  pub(crate) total_elements: u64,
  pub(crate) total_pages: usize,
}
