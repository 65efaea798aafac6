use super::*;

/// UI strings keyed by name, as handed over by the host page.
#[derive(Clone, Debug, Default)]
pub(crate) struct Strings {
  entries: HashMap<String, String>,
}

impl Strings {
  const DEFAULTS: &[(&str, &str)] = &[
    ("cancel", "Cancel"),
    ("comment", "Comment"),
    ("comment_edit", "Edit comment"),
    ("comments", "Comments"),
    ("confirm", "Confirm"),
    ("confirmation", "Confirmation"),
    ("create", "Create"),
    ("delete", "Delete"),
    (
      "delete_message",
      "Are you sure you want to delete this comment?",
    ),
    ("edit", "Edit"),
    ("empty_list", "There are no comments yet."),
    ("loading", "Loading..."),
    ("of", "of"),
    (
      "only_authenticated_users_can_create_comments",
      "Only authenticated users can create comments.",
    ),
    ("page", "Page"),
    ("update", "Update"),
  ];

  pub(crate) fn from_json(json: &str) -> Result<Self> {
    Ok(Self {
      entries: serde_json::from_str(json)?,
    })
  }

  /// Falls back to the built-in English string, then to the key itself.
  pub(crate) fn get<'a>(&'a self, key: &'a str) -> &'a str {
    self
      .entries
      .get(key)
      .map(String::as_str)
      .or_else(|| {
        Self::DEFAULTS
          .iter()
          .find(|(name, _)| *name == key)
          .map(|(_, value)| *value)
      })
      .unwrap_or(key)
  }

  pub(crate) fn load(path: &Path) -> Result<Self> {
    let json = fs::read_to_string(path).with_context(|| {
      format!("could not read strings file `{}`", path.display())
    })?;

    Self::from_json(&json).with_context(|| {
      format!("could not parse strings file `{}`", path.display())
    })
  }
}
