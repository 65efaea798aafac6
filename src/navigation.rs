use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Navigation {
  First,
  Last,
  Next,
  Page(usize),
  Previous,
}

impl Navigation {
  pub(crate) fn target(self, cursor: &PageCursor) -> usize {
    match self {
      Self::First => 0,
      Self::Last => cursor.last_page(),
      Self::Next => cursor.next_page(),
      Self::Page(index) => index,
      Self::Previous => cursor.previous_page(),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::fixtures::pagination};

  #[test]
  fn targets_resolve_against_cursor() {
    let mut cursor = PageCursor::default();
    cursor.apply(&pagination(1, 4, 40));

    assert_eq!(Navigation::First.target(&cursor), 0);
    assert_eq!(Navigation::Previous.target(&cursor), 0);
    assert_eq!(Navigation::Next.target(&cursor), 2);
    assert_eq!(Navigation::Last.target(&cursor), 3);
    assert_eq!(Navigation::Page(2).target(&cursor), 2);
  }
}
