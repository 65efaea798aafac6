use super::*;

pub(crate) struct HelpView {
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = Self::help_area(frame.area());

    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  fn help_area(area: Rect) -> Rect {
    fn saturating_usize_to_u16(value: usize) -> u16 {
      u16::try_from(value).unwrap_or(u16::MAX)
    }

    let (line_count, max_line_width) =
      HELP_TEXT
        .lines()
        .fold((0usize, 0usize), |(count, width), line| {
          (count.saturating_add(1), width.max(line.chars().count()))
        });

    centered_rect(
      area,
      saturating_usize_to_u16(max_line_width.saturating_add(4)),
      saturating_usize_to_u16(line_count.saturating_add(2)),
    )
  }

  pub(crate) fn hide(&mut self) {
    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self { visible: false }
  }

  pub(crate) fn show(&mut self) {
    self.visible = true;
  }
}
