use super::*;

#[derive(Debug, Default)]
pub(crate) struct Status {
  flash: Option<(String, Instant)>,
}

impl Status {
  pub(crate) fn flash(&mut self, message: String) {
    self.flash = Some((message, Instant::now() + FLASH_DURATION));
  }

  pub(crate) fn message(&self) -> Option<&str> {
    self.flash.as_ref().map(|(message, _)| message.as_str())
  }

  pub(crate) fn tick(&mut self) {
    if self
      .flash
      .as_ref()
      .is_some_and(|(_, expires_at)| Instant::now() >= *expires_at)
    {
      self.flash = None;
    }
  }
}
