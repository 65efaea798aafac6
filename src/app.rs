use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  const DIALOG_HEIGHT: u16 = 8;
  const DIALOG_WIDTH: u16 = 60;

  fn comment_list_item(
    comment: &Comment,
    strings: &Strings,
    available_width: u16,
    submitting: bool,
  ) -> ListItem<'static> {
    let wrap_width = usize::from(available_width)
      .saturating_sub(BASE_INDENT.len())
      .max(1);

    let mut lines: Vec<Line<'static>> =
      wrap_text(&comment.content, wrap_width)
        .into_iter()
        .map(|line| {
          Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(line, Style::default().fg(Color::White)),
          ])
        })
        .collect();

    let mut detail = vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        format!(
          "{} • {}",
          comment.user.full_name(),
          format_timestamp(comment.created_at)
        ),
        Style::default().fg(Color::DarkGray),
      ),
    ];

    if submitting {
      detail.push(Span::styled(
        format!("  {}", strings.get("loading")),
        Style::default().fg(Color::Yellow),
      ));
    } else {
      let actions = [
        (comment.can_edit, 'e', "edit", Color::Green),
        (comment.can_delete, 'd', "delete", Color::Red),
      ];

      for (allowed, key, label, color) in actions {
        if allowed {
          detail.push(Span::styled(
            format!("  [{key}] {}", strings.get(label)),
            Style::default().fg(color),
          ));
        }
      }
    }

    lines.push(Line::from(detail));
    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  fn create_form(&self) -> Paragraph<'static> {
    let strings = self.state.strings();

    if self.state.is_anonymous() {
      return Paragraph::new(
        strings
          .get("only_authenticated_users_can_create_comments")
          .to_string(),
      )
      .style(Style::default().fg(Color::DarkGray))
      .block(
        Block::default()
          .title(strings.get("comment").to_string())
          .borders(Borders::ALL),
      );
    }

    let form = self.state.create_form();
    let composing = self.state.is_composing();

    let title = if form.submitting {
      format!("{} • {}", strings.get("create"), strings.get("loading"))
    } else {
      format!("{} [c]", strings.get("create"))
    };

    let content = if form.content.is_empty() && !composing {
      Line::from(Span::styled(
        format!("{}...", strings.get("comment")),
        Style::default().fg(Color::DarkGray),
      ))
    } else {
      Line::from(form.content.clone())
    };

    let mut lines = vec![content];

    if let Some(error) = &form.error {
      lines.push(Line::from(Span::styled(
        error.clone(),
        Style::default().fg(Color::Red),
      )));
    }

    let border = if composing {
      Color::Cyan
    } else {
      Color::DarkGray
    };

    Paragraph::new(lines)
      .block(
        Block::default()
          .title(title)
          .borders(Borders::ALL)
          .border_style(Style::default().fg(border)),
      )
      .wrap(Wrap { trim: false })
  }

  fn dialog_widget(dialog: &Dialog, strings: &Strings) -> Paragraph<'static> {
    let muted = Style::default().fg(Color::DarkGray);

    match dialog {
      Dialog::Delete { submitting, .. } => {
        let footer = if *submitting {
          strings.get("loading").to_string()
        } else {
          format!(
            "[y] {}  [n] {}",
            strings.get("confirm"),
            strings.get("cancel")
          )
        };

        Paragraph::new(vec![
          Line::from(strings.get("delete_message").to_string()),
          Line::default(),
          Line::from(Span::styled(footer, muted)),
        ])
        .block(
          Block::default()
            .title(strings.get("confirmation").to_string())
            .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true })
      }
      Dialog::Edit { form, .. } => {
        let mut lines = vec![Line::from(form.content.clone())];

        if let Some(error) = &form.error {
          lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
          )));
        }

        let footer = if form.submitting {
          strings.get("loading").to_string()
        } else {
          format!(
            "[enter] {}  [esc] {}",
            strings.get("update"),
            strings.get("cancel")
          )
        };

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(footer, muted)));

        Paragraph::new(lines)
          .block(
            Block::default()
              .title(format!("{} #{}", strings.get("comment_edit"), dialog.id()))
              .borders(Borders::ALL)
              .border_style(Style::default().fg(Color::Cyan)),
          )
          .wrap(Wrap { trim: false })
      }
    }
  }

  fn draw(&self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let strings = self.state.strings();
    let listing = self.state.listing();
    let comments = listing.comments();

    let header = Paragraph::new(Line::from(Span::styled(
      format!(
        "{} ({})",
        strings.get("comments").to_uppercase(),
        listing.cursor().total_elements()
      ),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(header, layout[0]);

    frame.render_widget(self.create_form(), layout[1]);

    let placeholder = if listing.is_loading() {
      Some(strings.get("loading"))
    } else if comments.is_empty() {
      Some(strings.get("empty_list"))
    } else {
      None
    };

    let (list_items, selected): (Vec<ListItem>, Option<usize>) =
      match placeholder {
        Some(text) => (
          vec![ListItem::new(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::raw(text.to_string()),
          ]))],
          None,
        ),
        None => (
          comments
            .items()
            .iter()
            .map(|comment| {
              Self::comment_list_item(
                comment,
                strings,
                layout[2].width,
                self.state.is_submitting(comment.id),
              )
            })
            .collect(),
          comments.selected_index(),
        ),
      };

    let mut list_state = ListState::default().with_selected(selected);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[2], &mut list_state);

    if self.state.pagination_is_visible() {
      frame.render_widget(Paragraph::new(self.pagination_line()), layout[3]);
    }

    let status = Paragraph::new(self.state.status_line().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[4]);

    if let Some(dialog) = self.state.dialog() {
      let area =
        centered_rect(frame.area(), Self::DIALOG_WIDTH, Self::DIALOG_HEIGHT);

      frame.render_widget(Clear, area);
      frame.render_widget(Self::dialog_widget(dialog, strings), area);
    }

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    let post_id = self.state.post_id();

    match effect {
      Effect::CreateComment { content } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Created {
            result: client.create_comment(post_id, &content).await,
          });
        });
      }
      Effect::DeleteComment { id } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Deleted {
            id,
            result: client.delete_comment(post_id, id).await,
          });
        });
      }
      Effect::FetchPage { delay, index } => {
        self.handle.spawn(async move {
          if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
          }

          // The widget is gone, stop retrying.
          if sender.is_closed() {
            debug!(page = index, "dropping fetch for closed widget");
            return;
          }

          let _ = sender.send(Event::PageFetched {
            index,
            result: client.fetch_page(post_id, index).await,
          });
        });
      }
      Effect::OpenPost => {
        let url = client.post_url(post_id);

        match webbrowser::open(&url) {
          Ok(()) => {
            self.state.set_transient_message(format!(
              "Opened in browser: {}",
              truncate(&url, 80)
            ));
          }
          Err(error) => {
            warn!(%error, url, "could not open browser");

            self
              .state
              .set_transient_message(format!("Could not open link: {error}"));
          }
        }
      }
      Effect::UpdateComment { content, id } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Updated {
            id,
            result: client.update_comment(post_id, id, &content).await,
          });
        });
      }
    }
  }

  fn mount(&mut self) {
    for effect in self.state.mount() {
      self.execute_effect(effect);
    }
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn pagination_line(&self) -> Line<'static> {
    let cursor = self.state.listing().cursor();

    let arrow = |symbol: &'static str, enabled: bool| {
      Span::styled(
        symbol,
        if enabled {
          Style::default().fg(Color::Cyan)
        } else {
          Style::default().fg(Color::DarkGray)
        },
      )
    };

    Line::from(vec![
      arrow("«", cursor.is_first_page_available()),
      Span::raw(" "),
      arrow("‹", cursor.is_previous_page_available()),
      Span::raw(format!(" {} ", self.state.page_label())),
      arrow("›", cursor.is_next_page_available()),
      Span::raw(" "),
      arrow("»", cursor.is_last_page_available()),
    ])
    .centered()
  }

  fn process_pending_events(&mut self) {
    self.state.tick();

    while let Ok(event) = self.event_rx.try_recv() {
      for effect in self.state.handle_event(event) {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    self.mount();

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        self.state.mode().handle_key(key)
      };

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    axum::{Json, Router, routing::get},
    serde_json::{Value, json},
    std::sync::{
      Arc,
      atomic::{AtomicUsize, Ordering},
    },
    tokio::net::TcpListener,
  };

  fn dispatch(app: &mut App, command: Command) {
    for effect in app.state.dispatch_command(command).effects {
      app.execute_effect(effect);
    }
  }

  fn page_json(ids: &[u64]) -> Value {
    let comments = ids
      .iter()
      .map(|id| {
        json!({
          "id": id,
          "content": format!("comment {id}"),
          "createdAt": "2021-05-01 10:00:00",
          "user": { "firstName": "Jane", "lastName": "Doe" },
          "canEdit": true,
          "canDelete": true
        })
      })
      .collect::<Vec<_>>();

    json!({
      "comments": comments,
      "pagination": {
        "currentPage": 0,
        "totalPages": 1,
        "totalElements": ids.len(),
        "hasPreviousPage": false,
        "hasNextPage": false
      }
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

    Client::new(&format!("http://{address}"), timeout).unwrap()
  }

  async fn wait_until(app: &mut App, done: impl Fn(&App) -> bool) {
    tokio::time::timeout(Duration::from_secs(10), async {
      loop {
        app.process_pending_events();

        if done(&*app) {
          break;
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
      }
    })
    .await
    .unwrap();
  }

  #[tokio::test]
  async fn failed_fetch_is_retried_after_delay() {
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = attempts.clone();

    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments",
      get(move || {
        let counter = counter.clone();

        async move {
          if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            (StatusCode::SERVICE_UNAVAILABLE, Json(json!({})))
          } else {
            (StatusCode::OK, Json(page_json(&[1, 2])))
          }
        }
      }),
    ))
    .await;

    let mut app = App::new(client, State::new(7, false, Strings::default()));

    let started = Instant::now();

    app.mount();
    assert!(app.state.listing().is_loading());

    wait_until(&mut app, |app| !app.state.listing().is_loading()).await;

    assert_eq!(attempts.load(Ordering::SeqCst), 2);
    assert!(started.elapsed() >= RETRY_DELAY);

    let comments = app.state.listing().comments().items();

    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|comment| comment.post == 7));
  }

  #[tokio::test]
  async fn created_comment_reloads_first_page() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let counter = fetches.clone();

    let client = serve(
      Router::new().route(
        "/api/posts/:post_id/comments",
        get(move || {
          let counter = counter.clone();

          async move {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
              Json(page_json(&[1]))
            } else {
              Json(page_json(&[2, 1]))
            }
          }
        })
        .post(|Json(body): Json<Value>| async move {
          let mut comment = page_json(&[2])["comments"][0].clone();
          comment["content"] = body["content"].clone();
          Json(comment)
        }),
      ),
    )
    .await;

    let mut app = App::new(client, State::new(7, false, Strings::default()));

    app.mount();

    wait_until(&mut app, |app| !app.state.listing().is_loading()).await;

    dispatch(&mut app, Command::StartCompose);
    dispatch(&mut app, Command::Input('h'));
    dispatch(&mut app, Command::Input('i'));
    dispatch(&mut app, Command::Submit);

    assert!(app.state.create_form().submitting);

    wait_until(&mut app, |app| {
      fetches.load(Ordering::SeqCst) == 2 && !app.state.listing().is_loading()
    })
    .await;

    assert_eq!(app.state.create_form(), &CommentForm::default());

    assert_eq!(
      app
        .state
        .listing()
        .comments()
        .items()
        .iter()
        .map(|comment| comment.id)
        .collect::<Vec<_>>(),
      vec![2, 1]
    );
  }

  #[tokio::test]
  async fn stalled_fetch_times_out_and_is_retried() {
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = attempts.clone();

    let client = serve_with_timeout(
      Router::new().route(
        "/api/posts/:post_id/comments",
        get(move || {
          let counter = counter.clone();

          async move {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::pending::<StatusCode>().await
          }
        }),
      ),
      Duration::from_millis(100),
    )
    .await;

    let mut app = App::new(client, State::new(7, false, Strings::default()));

    app.mount();

    wait_until(&mut app, |_| attempts.load(Ordering::SeqCst) >= 2).await;

    assert!(app.state.listing().is_loading());
  }

  #[tokio::test]
  async fn stalled_create_releases_form() {
    let client = serve_with_timeout(
      Router::new().route(
        "/api/posts/:post_id/comments",
        get(|| async { Json(page_json(&[1])) })
          .post(|| async { std::future::pending::<StatusCode>().await }),
      ),
      Duration::from_millis(200),
    )
    .await;

    let mut app = App::new(client, State::new(7, false, Strings::default()));

    app.mount();

    wait_until(&mut app, |app| !app.state.listing().is_loading()).await;

    dispatch(&mut app, Command::StartCompose);
    dispatch(&mut app, Command::Input('h'));
    dispatch(&mut app, Command::Input('i'));
    dispatch(&mut app, Command::Submit);

    assert!(app.state.create_form().submitting);

    wait_until(&mut app, |app| !app.state.create_form().submitting).await;

    assert_eq!(app.state.create_form().content, "hi");
    assert_eq!(app.state.create_form().error, None);
    assert!(app.state.status_line().starts_with("Could not create comment"));
  }

  #[tokio::test]
  async fn closed_widget_stops_retrying() {
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = attempts.clone();

    let client = serve(Router::new().route(
      "/api/posts/:post_id/comments",
      get(move || {
        let counter = counter.clone();

        async move {
          counter.fetch_add(1, Ordering::SeqCst);
          StatusCode::SERVICE_UNAVAILABLE
        }
      }),
    ))
    .await;

    let mut app = App::new(client, State::new(7, false, Strings::default()));

    app.mount();

    let event =
      tokio::time::timeout(Duration::from_secs(10), app.event_rx.recv())
        .await
        .unwrap()
        .unwrap();

    let effects = app.state.handle_event(event);

    assert_eq!(
      effects,
      vec![Effect::FetchPage {
        delay: Some(RETRY_DELAY),
        index: 0,
      }]
    );

    for effect in effects {
      app.execute_effect(effect);
    }

    drop(app);

    tokio::time::sleep(RETRY_DELAY + Duration::from_millis(500)).await;

    assert_eq!(attempts.load(Ordering::SeqCst), 1);
  }
}
