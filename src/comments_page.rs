use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct CommentsPage {
  pub(crate) comments: Vec<Comment>,
  pub(crate) pagination: Pagination,
}
