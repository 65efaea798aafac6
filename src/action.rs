use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  Fetched(CommentsPage),
  Fetching,
  RemoveOne(u64),
  UpdateOne(Comment),
}
