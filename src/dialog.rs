use super::*;

pub(crate) enum Dialog {
  Delete { id: u64, submitting: bool },
  Edit { form: CommentForm, id: u64 },
}

impl Dialog {
  pub(crate) fn id(&self) -> u64 {
    match self {
      Self::Delete { id, .. } | Self::Edit { id, .. } => *id,
    }
  }
}
