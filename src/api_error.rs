use {super::*, thiserror::Error};

#[derive(Debug, Error)]
pub(crate) enum ApiError {
  #[error("server responded with {0}")]
  Status(StatusCode),
  #[error(transparent)]
  Transport(#[from] reqwest::Error),
  /// A `400` carrying at least one error. Only the first message is kept.
  #[error("{message}")]
  Validation { message: String },
}
