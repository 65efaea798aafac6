use super::*;

pub(crate) struct State {
  anonymous: bool,
  composing: bool,
  create_form: CommentForm,
  dialog: Option<Dialog>,
  help: HelpView,
  listing: Listing,
  pending_effects: Vec<Effect>,
  pending_mutations: HashSet<MutationTarget>,
  post_id: u64,
  queued_navigation: Option<Navigation>,
  status: Status,
  strings: Strings,
}

impl State {
  fn backspace(&mut self) {
    if let Some(form) = self.focused_form() {
      form.backspace();
    }
  }

  fn cancel_form(&mut self) {
    match self.dialog {
      Some(Dialog::Delete {
        submitting: true, ..
      }) => {}
      Some(_) => self.dialog = None,
      None => self.composing = false,
    }
  }

  fn confirm_delete(&mut self) {
    if let Some(Dialog::Delete {
      id,
      submitting: false,
    }) = self.dialog
    {
      self.delete(id);
    }
  }

  fn create(&mut self, content: String) {
    if self.anonymous {
      debug!("ignoring comment creation from anonymous viewer");
      return;
    }

    if !self.pending_mutations.insert(MutationTarget::Create) {
      return;
    }

    self.create_form.error = None;
    self.create_form.submitting = true;

    self.pending_effects.push(Effect::CreateComment { content });
  }

  pub(crate) fn create_form(&self) -> &CommentForm {
    &self.create_form
  }

  fn delete(&mut self, id: u64) {
    if !self.pending_mutations.insert(MutationTarget::Comment(id)) {
      return;
    }

    if let Some(Dialog::Delete {
      id: dialog_id,
      submitting,
    }) = &mut self.dialog
      && *dialog_id == id
    {
      *submitting = true;
    }

    self.pending_effects.push(Effect::DeleteComment { id });
  }

  pub(crate) fn dialog(&self) -> Option<&Dialog> {
    self.dialog.as_ref()
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Backspace => self.backspace(),
      Command::CancelForm => self.cancel_form(),
      Command::ConfirmDelete => self.confirm_delete(),
      Command::GoToFirst => self.go_to_first(),
      Command::GoToLast => self.go_to_last(),
      Command::GoToNext => self.go_to_next(),
      Command::GoToPrevious => self.go_to_previous(),
      Command::HideHelp => self.help.hide(),
      Command::Input(ch) => self.input(ch),
      Command::None => {}
      Command::OpenPost => self.pending_effects.push(Effect::OpenPost),
      Command::Quit => should_exit = true,
      Command::RequestDelete => self.request_delete(),
      Command::SelectNext => self.listing.comments_mut().select_next(),
      Command::SelectPrevious => {
        self.listing.comments_mut().select_previous();
      }
      Command::ShowHelp => self.help.show(),
      Command::StartCompose => self.start_compose(),
      Command::StartEdit => self.start_edit(),
      Command::Submit => self.submit(),
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn edit(&mut self, id: u64, content: String) {
    if !self.pending_mutations.insert(MutationTarget::Comment(id)) {
      return;
    }

    if let Some(form) = self.edit_form_mut(id) {
      form.error = None;
      form.submitting = true;
    }

    self.pending_effects.push(Effect::UpdateComment { content, id });
  }

  fn edit_form_mut(&mut self, id: u64) -> Option<&mut CommentForm> {
    match &mut self.dialog {
      Some(Dialog::Edit {
        form,
        id: dialog_id,
      }) if *dialog_id == id => Some(form),
      _ => None,
    }
  }

  /// Single-flight page fetch. While a fetch is in flight the navigation is
  /// kept, replacing any earlier one, and resolved once that fetch lands.
  fn fetch(&mut self, navigation: Navigation) {
    if self.listing.is_loading() {
      debug!(?navigation, "fetch in flight, queueing navigation");
      self.queued_navigation = Some(navigation);
      return;
    }

    let index = navigation.target(self.listing.cursor());

    self.listing.reduce(Action::Fetching);

    info!(post_id = self.post_id, page = index, "fetching comments");

    self.pending_effects.push(Effect::FetchPage { delay: None, index });
  }

  fn fetch_page(&mut self, index: usize) {
    self.fetch(Navigation::Page(index));
  }

  fn flash_failure(&mut self, what: &str, error: &ApiError) {
    self.status.flash(format!(
      "Could not {what}: {}",
      truncate(&error.to_string(), 80)
    ));
  }

  fn focused_form(&mut self) -> Option<&mut CommentForm> {
    match &mut self.dialog {
      Some(Dialog::Edit { form, .. }) => Some(form),
      Some(Dialog::Delete { .. }) => None,
      None => self.composing.then_some(&mut self.create_form),
    }
  }

  fn go_to_first(&mut self) {
    self.fetch(Navigation::First);
  }

  fn go_to_last(&mut self) {
    self.fetch(Navigation::Last);
  }

  fn go_to_next(&mut self) {
    self.fetch(Navigation::Next);
  }

  fn go_to_previous(&mut self) {
    self.fetch(Navigation::Previous);
  }

  pub(crate) fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    match event {
      Event::Created { result } => {
        self.pending_mutations.remove(&MutationTarget::Create);
        self.create_form.submitting = false;

        match result {
          Ok(comment) => {
            info!(id = comment.id, "comment created");
            self.create_form = CommentForm::default();
            self.composing = false;
            self.fetch_page(0);
          }
          Err(ApiError::Validation { message }) => {
            self.create_form.error = Some(message);
          }
          Err(error) => {
            warn!(%error, "could not create comment");
            self.flash_failure("create comment", &error);
          }
        }
      }
      Event::Deleted { id, result } => {
        self.pending_mutations.remove(&MutationTarget::Comment(id));

        if let Some(Dialog::Delete { id: dialog_id, .. }) = self.dialog
          && dialog_id == id
        {
          self.dialog = None;
        }

        match result {
          Ok(()) => {
            info!(id, "comment deleted");
            self.listing.reduce(Action::RemoveOne(id));
          }
          Err(error) => {
            warn!(id, %error, "could not delete comment");
            self.flash_failure("delete comment", &error);
          }
        }
      }
      Event::PageFetched { index, result } => match result {
        Ok(page) => {
          self.listing.reduce(Action::Fetched(page));

          debug!(
            page = index,
            comments = self.listing.comments().len(),
            "comments fetched"
          );

          if let Some(navigation) = self.queued_navigation.take() {
            self.fetch(navigation);
          }
        }
        Err(error) => {
          warn!(page = index, %error, "could not fetch comments, retrying");

          self.pending_effects.push(Effect::FetchPage {
            delay: Some(RETRY_DELAY),
            index,
          });
        }
      },
      Event::Updated { id, result } => {
        self.pending_mutations.remove(&MutationTarget::Comment(id));

        match result {
          Ok(comment) => {
            info!(id, "comment updated");

            self.listing.reduce(Action::UpdateOne(comment));

            if self.edit_form_mut(id).is_some() {
              self.dialog = None;
            }
          }
          Err(ApiError::Validation { message }) => {
            if let Some(form) = self.edit_form_mut(id) {
              form.submitting = false;
              form.error = Some(message);
            }
          }
          Err(error) => {
            warn!(id, %error, "could not update comment");

            if let Some(form) = self.edit_form_mut(id) {
              form.submitting = false;
            }

            self.flash_failure("update comment", &error);
          }
        }
      }
    }

    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn input(&mut self, ch: char) {
    if let Some(form) = self.focused_form() {
      form.insert(ch);
    }
  }

  pub(crate) fn is_anonymous(&self) -> bool {
    self.anonymous
  }

  pub(crate) fn is_composing(&self) -> bool {
    self.composing
  }

  pub(crate) fn is_submitting(&self, id: u64) -> bool {
    self.pending_mutations.contains(&MutationTarget::Comment(id))
  }

  pub(crate) fn listing(&self) -> &Listing {
    &self.listing
  }

  pub(crate) fn mode(&self) -> Mode {
    match &self.dialog {
      Some(Dialog::Delete { .. }) => Mode::ConfirmDelete,
      Some(Dialog::Edit { .. }) => Mode::Edit,
      None if self.composing => Mode::Compose,
      None => Mode::Browse,
    }
  }

  pub(crate) fn mount(&mut self) -> Vec<Effect> {
    self.fetch_page(0);
    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn new(post_id: u64, anonymous: bool, strings: Strings) -> Self {
    Self {
      anonymous,
      composing: false,
      create_form: CommentForm::default(),
      dialog: None,
      help: HelpView::new(),
      listing: Listing::default(),
      pending_effects: Vec::new(),
      pending_mutations: HashSet::new(),
      post_id,
      queued_navigation: None,
      status: Status::default(),
      strings,
    }
  }

  pub(crate) fn page_label(&self) -> String {
    let cursor = self.listing.cursor();

    format!(
      "{} {} {} {}",
      self.strings.get("page"),
      cursor.current_page() + 1,
      self.strings.get("of"),
      cursor.total_pages()
    )
  }

  pub(crate) fn pagination_is_visible(&self) -> bool {
    !self.listing.is_loading() && self.listing.cursor().total_pages() > 1
  }

  pub(crate) fn post_id(&self) -> u64 {
    self.post_id
  }

  fn request_delete(&mut self) {
    if self.dialog.is_some() {
      return;
    }

    let Some(comment) = self.listing.comments().selected_item() else {
      return;
    };

    if !comment.can_delete || self.is_submitting(comment.id) {
      return;
    }

    self.dialog = Some(Dialog::Delete {
      id: comment.id,
      submitting: false,
    });
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    self.status.flash(message);
  }

  fn start_compose(&mut self) {
    if self.anonymous {
      let message = self
        .strings
        .get("only_authenticated_users_can_create_comments")
        .to_string();

      self.status.flash(message);

      return;
    }

    self.composing = true;
  }

  fn start_edit(&mut self) {
    if self.dialog.is_some() {
      return;
    }

    let Some(comment) = self.listing.comments().selected_item() else {
      return;
    };

    if !comment.can_edit || self.is_submitting(comment.id) {
      return;
    }

    self.dialog = Some(Dialog::Edit {
      form: CommentForm::with_content(comment.content.clone()),
      id: comment.id,
    });
  }

  pub(crate) fn status_line(&self) -> &str {
    if self.help.is_visible() {
      return HELP_STATUS;
    }

    if let Some(message) = self.status.message() {
      return message;
    }

    match self.mode() {
      Mode::Browse => BROWSE_STATUS,
      Mode::Compose => COMPOSE_STATUS,
      Mode::ConfirmDelete => DELETE_STATUS,
      Mode::Edit => EDIT_STATUS,
    }
  }

  pub(crate) fn strings(&self) -> &Strings {
    &self.strings
  }

  fn submit(&mut self) {
    match &self.dialog {
      Some(Dialog::Edit { form, id }) => {
        let (id, content) = (*id, form.content.clone());
        self.edit(id, content);
      }
      Some(Dialog::Delete { .. }) => self.confirm_delete(),
      None if self.composing => {
        let content = self.create_form.content.clone();
        self.create(content);
      }
      None => {}
    }
  }

  pub(crate) fn tick(&mut self) {
    self.status.tick();
  }
}
