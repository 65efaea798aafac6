use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  CreateComment {
    content: String,
  },
  DeleteComment {
    id: u64,
  },
  FetchPage {
    delay: Option<Duration>,
    index: usize,
  },
  OpenPost,
  UpdateComment {
    content: String,
    id: u64,
  },
}
