use super::*;

/// Position of the displayed page within the post's comments, as last
/// reported by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PageCursor {
  current_page: usize,
  has_next_page: bool,
  has_previous_page: bool,
  total_elements: u64,
  total_pages: usize,
}

impl PageCursor {
  pub(crate) fn apply(&mut self, pagination: &Pagination) {
    self.current_page = pagination.current_page;
    self.has_next_page = pagination.has_next_page;
    self.has_previous_page = pagination.has_previous_page;
    self.total_elements = pagination.total_elements;
    self.total_pages = pagination.total_pages;
  }

  pub(crate) fn current_page(&self) -> usize {
    self.current_page
  }

  pub(crate) fn is_first_page_available(&self) -> bool {
    self.current_page > 0
  }

  pub(crate) fn is_last_page_available(&self) -> bool {
    self.current_page.saturating_add(1) < self.total_pages
  }

  pub(crate) fn is_next_page_available(&self) -> bool {
    self.has_next_page
  }

  pub(crate) fn is_previous_page_available(&self) -> bool {
    self.has_previous_page
  }

  pub(crate) fn last_page(&self) -> usize {
    self.total_pages.saturating_sub(1)
  }

  pub(crate) fn next_page(&self) -> usize {
    self.current_page.saturating_add(1).min(self.last_page())
  }

  pub(crate) fn previous_page(&self) -> usize {
    self.current_page.saturating_sub(1)
  }

  pub(crate) fn total_elements(&self) -> u64 {
    self.total_elements
  }

  pub(crate) fn total_pages(&self) -> usize {
    self.total_pages
  }
}
