use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
  Browse,
  Compose,
  ConfirmDelete,
  Edit,
}

impl Mode {
  fn form_key(key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Esc => Command::CancelForm,
      KeyCode::Enter => Command::Submit,
      KeyCode::Backspace => Command::Backspace,
      KeyCode::Char(_)
        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER) =>
      {
        Command::None
      }
      KeyCode::Char(ch) => Command::Input(ch),
      _ => Command::None,
    }
  }

  pub(crate) fn handle_key(self, key: KeyEvent) -> Command {
    match self {
      Mode::Browse => match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
        KeyCode::Home | KeyCode::Char('g') => Command::GoToFirst,
        KeyCode::Left | KeyCode::Char('h') => Command::GoToPrevious,
        KeyCode::Right | KeyCode::Char('l') => Command::GoToNext,
        KeyCode::End | KeyCode::Char('G') => Command::GoToLast,
        KeyCode::Char('c') => Command::StartCompose,
        KeyCode::Char('e') => Command::StartEdit,
        KeyCode::Char('d') => Command::RequestDelete,
        KeyCode::Char('o' | 'O') => Command::OpenPost,
        _ => Command::None,
      },
      Mode::Compose | Mode::Edit => Self::form_key(key),
      Mode::ConfirmDelete => match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Command::ConfirmDelete,
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Command::CancelForm,
        _ => Command::None,
      },
    }
  }
}
