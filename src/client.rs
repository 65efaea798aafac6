use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

#[derive(Serialize)]
struct ContentBody<'a> {
  content: &'a str,
}

impl Client {
  async fn check(
    response: reqwest::Response,
  ) -> Result<reqwest::Response, ApiError> {
    let status = response.status();

    if status.is_success() {
      return Ok(response);
    }

    if status == StatusCode::BAD_REQUEST
      && let Ok(errors) = response.json::<ValidationErrors>().await
      && let Some(message) = errors.into_first_message()
    {
      return Err(ApiError::Validation { message });
    }

    Err(ApiError::Status(status))
  }

  fn comment_url(&self, post_id: u64, comment_id: u64) -> String {
    format!("{}/{comment_id}", self.comments_url(post_id))
  }

  fn comments_url(&self, post_id: u64) -> String {
    format!("{}/api/posts/{post_id}/comments", self.base_url)
  }

  pub(crate) async fn create_comment(
    &self,
    post_id: u64,
    content: &str,
  ) -> Result<Comment, ApiError> {
    let response = self
      .client
      .post(self.comments_url(post_id))
      .json(&ContentBody { content })
      .send()
      .await?;

    let mut comment = Self::check(response).await?.json::<Comment>().await?;

    comment.post = post_id;

    Ok(comment)
  }

  pub(crate) async fn delete_comment(
    &self,
    post_id: u64,
    comment_id: u64,
  ) -> Result<(), ApiError> {
    let response = self
      .client
      .delete(self.comment_url(post_id, comment_id))
      .send()
      .await?;

    Self::check(response).await?;

    Ok(())
  }

  pub(crate) async fn fetch_page(
    &self,
    post_id: u64,
    page: usize,
  ) -> Result<CommentsPage, ApiError> {
    let response = self
      .client
      .get(format!("{}?page={page}", self.comments_url(post_id)))
      .send()
      .await?;

    let mut comments_page =
      Self::check(response).await?.json::<CommentsPage>().await?;

    for comment in &mut comments_page.comments {
      comment.post = post_id;
    }

    Ok(comments_page)
  }

  pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self> {
    Ok(Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::builder().timeout(timeout).build()?,
    })
  }

  pub(crate) fn post_url(&self, post_id: u64) -> String {
    format!("{}/posts/{post_id}", self.base_url)
  }

  pub(crate) async fn update_comment(
    &self,
    post_id: u64,
    comment_id: u64,
    content: &str,
  ) -> Result<Comment, ApiError> {
    let response = self
      .client
      .patch(self.comment_url(post_id, comment_id))
      .json(&ContentBody { content })
      .send()
      .await?;

    let mut comment = Self::check(response).await?.json::<Comment>().await?;

    comment.post = post_id;

    Ok(comment)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    axum::{
      Json, Router,
      extract::{Path as UrlPath, Query},
      routing::{get, patch},
    },
    serde_json::{Value, json},
    tokio::net::TcpListener,
  };

  fn comment_json(id: u64, content: &str) -> Value {
    json!({
      "id": id,
      "content": content,
      "createdAt": "2021-05-01 10:00:00",
      "user": { "firstName": "Jane", "lastName": "Doe" },
      "canEdit": true,
      "canDelete": true
    })
  }

  async fn serve(router: Router) -> Client {
    serve_with_timeout(router, REQUEST_TIMEOUT).await
  }

  async fn serve_with_timeout(router: Router, timeout: Duration) -> Client {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      let _ = axum::serve(listener, router).await;
    });

    Client::new(&format!("http://{address}/"), timeout).unwrap()
  }

  #[tokio::test]
  async fn fetch_page_requests_page_and_stamps_post() {
    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments",
      get(
        |UrlPath(post_id): UrlPath<u64>,
         Query(query): Query<HashMap<String, usize>>| async move {
          let page = query.get("page").copied().unwrap_or_default();
          let (has_previous, has_next) = (page > 0, page < 2);

          Json(json!({
            "comments": [
              comment_json(post_id * 10, "first"),
              comment_json(1, "second")
            ],
            "pagination": {
              "currentPage": page,
              "totalPages": 3,
              "totalElements": 25,
              "hasPreviousPage": has_previous,
              "hasNextPage": has_next
            }
          }))
        },
      ),
    ))
    .await;

    let page = client.fetch_page(4, 1).await.unwrap();

    assert_eq!(page.pagination.current_page, 1);
    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(page.pagination.total_elements, 25);
    assert!(page.pagination.has_previous_page);
    assert!(page.pagination.has_next_page);

    assert_eq!(
      page.comments.iter().map(|c| c.id).collect::<Vec<_>>(),
      vec![40, 1]
    );

    assert!(page.comments.iter().all(|comment| comment.post == 4));
  }

  #[tokio::test]
  async fn fetch_page_reports_server_errors() {
    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments",
      get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    let error = client.fetch_page(1, 0).await.unwrap_err();

    assert!(matches!(
      error,
      ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)
    ));
  }

  #[tokio::test]
  async fn stalled_server_times_out() {
    let client = serve_with_timeout(
      Router::new().route(
        "/api/posts/:post_id/comments",
        get(|| async { std::future::pending::<StatusCode>().await }),
      ),
      Duration::from_millis(100),
    )
    .await;

    match client.fetch_page(1, 0).await.unwrap_err() {
      ApiError::Transport(error) => assert!(error.is_timeout()),
      other => panic!("unexpected error: {other}"),
    }
  }

  #[tokio::test]
  async fn create_comment_sends_content() {
    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments",
      axum::routing::post(|Json(body): Json<Value>| async move {
        Json(comment_json(11, body["content"].as_str().unwrap_or_default()))
      }),
    ))
    .await;

    let comment = client.create_comment(2, "new comment").await.unwrap();

    assert_eq!(comment.id, 11);
    assert_eq!(comment.post, 2);
    assert_eq!(comment.content, "new comment");
  }

  #[tokio::test]
  async fn create_comment_surfaces_first_validation_message() {
    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments",
      axum::routing::post(|| async {
        (
          StatusCode::BAD_REQUEST,
          Json(json!({
            "errors": [
              { "field": "content", "message": "must not be blank" },
              { "field": "content", "message": "size must be between 1 and 255" }
            ]
          })),
        )
      }),
    ))
    .await;

    let error = client.create_comment(2, "").await.unwrap_err();

    match error {
      ApiError::Validation { message } => {
        assert_eq!(message, "must not be blank");
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[tokio::test]
  async fn bad_request_without_errors_is_a_status_error() {
    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments",
      axum::routing::post(|| async { StatusCode::BAD_REQUEST }),
    ))
    .await;

    let error = client.create_comment(2, "text").await.unwrap_err();

    assert!(matches!(error, ApiError::Status(StatusCode::BAD_REQUEST)));
  }

  #[tokio::test]
  async fn update_comment_returns_canonical_comment() {
    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments/:comment_id",
      patch(
        |UrlPath((_, comment_id)): UrlPath<(u64, u64)>,
         Json(body): Json<Value>| async move {
          let content = body["content"].as_str().unwrap_or_default().trim();
          Json(comment_json(comment_id, content))
        },
      ),
    ))
    .await;

    let comment = client.update_comment(3, 7, "  hello  ").await.unwrap();

    assert_eq!(comment.id, 7);
    assert_eq!(comment.post, 3);
    assert_eq!(comment.content, "hello");
  }

  #[tokio::test]
  async fn delete_comment_accepts_no_content() {
    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments/:comment_id",
      axum::routing::delete(|| async { StatusCode::NO_CONTENT }),
    ))
    .await;

    client.delete_comment(3, 7).await.unwrap();
  }

  #[tokio::test]
  async fn delete_comment_reports_missing_comment() {
    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments/:comment_id",
      axum::routing::delete(|| async { StatusCode::NOT_FOUND }),
    ))
    .await;

    let error = client.delete_comment(3, 7).await.unwrap_err();

    assert!(matches!(error, ApiError::Status(StatusCode::NOT_FOUND)));
  }

  #[test]
  fn urls_ignore_trailing_slash() {
    let client =
      Client::new("https://blog.example.com/", REQUEST_TIMEOUT).unwrap();

    assert_eq!(client.post_url(5), "https://blog.example.com/posts/5");
    assert_eq!(
      client.comment_url(5, 9),
      "https://blog.example.com/api/posts/5/comments/9"
    );
  }
}
