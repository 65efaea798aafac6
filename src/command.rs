#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Backspace,
  CancelForm,
  ConfirmDelete,
  GoToFirst,
  GoToLast,
  GoToNext,
  GoToPrevious,
  HideHelp,
  Input(char),
  None,
  OpenPost,
  Quit,
  RequestDelete,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartCompose,
  StartEdit,
  Submit,
}
