use super::*;

#[derive(Debug, Default)]
pub(crate) struct CommentStore {
  items: Vec<Comment>,
  selected: usize,
}

impl CommentStore {
  fn clamp_selection(&mut self) {
    self.selected = self.selected.min(self.items.len().saturating_sub(1));
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[Comment] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn remove_one(&mut self, id: u64) -> bool {
    let Some(index) = self.items.iter().position(|comment| comment.id == id)
    else {
      return false;
    };

    self.items.remove(index);

    if index < self.selected {
      self.selected -= 1;
    }

    self.clamp_selection();

    true
  }

  pub(crate) fn replace_page(&mut self, items: Vec<Comment>) {
    self.items = items;
    self.selected = 0;
  }

  pub(crate) fn select_next(&mut self) {
    self.selected = self.selected.saturating_add(1);
    self.clamp_selection();
  }

  pub(crate) fn select_previous(&mut self) {
    self.selected = self.selected.saturating_sub(1);
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.selected.min(self.items.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_item(&self) -> Option<&Comment> {
    self
      .selected_index()
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn update_one(&mut self, comment: Comment) -> bool {
    match self.items.iter_mut().find(|item| item.id == comment.id) {
      Some(slot) => {
        *slot = comment;
        true
      }
      None => false,
    }
  }
}
