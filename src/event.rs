use super::*;

pub(crate) enum Event {
  Created {
    result: Result<Comment, ApiError>,
  },
  Deleted {
    id: u64,
    result: Result<(), ApiError>,
  },
  PageFetched {
    index: usize,
    result: Result<CommentsPage, ApiError>,
  },
  Updated {
    id: u64,
    result: Result<Comment, ApiError>,
  },
}
