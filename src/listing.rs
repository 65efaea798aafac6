use super::*;

#[derive(Debug, Default)]
pub(crate) struct Listing {
  comments: CommentStore,
  cursor: PageCursor,
  loading: bool,
}

impl Listing {
  pub(crate) fn comments(&self) -> &CommentStore {
    &self.comments
  }

  pub(crate) fn comments_mut(&mut self) -> &mut CommentStore {
    &mut self.comments
  }

  pub(crate) fn cursor(&self) -> &PageCursor {
    &self.cursor
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.loading
  }

  pub(crate) fn reduce(&mut self, action: Action) {
    match action {
      Action::Fetched(page) => {
        self.loading = false;
        self.cursor.apply(&page.pagination);
        self.comments.replace_page(page.comments);
      }
      Action::Fetching => self.loading = true,
      Action::RemoveOne(id) => {
        self.comments.remove_one(id);
      }
      Action::UpdateOne(comment) => {
        self.comments.update_one(comment);
      }
    }
  }
}
