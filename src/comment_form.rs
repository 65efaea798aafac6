#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CommentForm {
  pub(crate) content: String,
  pub(crate) error: Option<String>,
  pub(crate) submitting: bool,
}

impl CommentForm {
  pub(crate) fn backspace(&mut self) {
    if self.submitting {
      return;
    }

    self.error = None;
    self.content.pop();
  }

  pub(crate) fn insert(&mut self, ch: char) {
    if self.submitting {
      return;
    }

    self.error = None;
    self.content.push(ch);
  }

  pub(crate) fn with_content(content: String) -> Self {
    Self {
      content,
      error: None,
      submitting: false,
    }
  }
}
