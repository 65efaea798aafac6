use {super::*, crate::comment::Author, chrono::NaiveDate};

pub(crate) fn comment(id: u64, content: &str) -> Comment {
  Comment {
    can_delete: true,
    can_edit: true,
    content: content.to_string(),
    created_at: NaiveDate::from_ymd_opt(2021, 5, 1)
      .and_then(|date| date.and_hms_opt(10, 0, 0))
      .unwrap(),
    id,
    post: 1,
    user: Author {
      first_name: "Jane".to_string(),
      last_name: "Doe".to_string(),
    },
  }
}

pub(crate) fn page(
  index: usize,
  total_pages: usize,
  total_elements: u64,
  comments: Vec<Comment>,
) -> CommentsPage {
  CommentsPage {
    comments,
    pagination: pagination(index, total_pages, total_elements),
  }
}

pub(crate) fn pagination(
  index: usize,
  total_pages: usize,
  total_elements: u64,
) -> Pagination {
  Pagination {
    current_page: index,
    has_next_page: index + 1 < total_pages,
    has_previous_page: index > 0,
    total_elements,
    total_pages,
  }
}
