use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "comments",
  about = "Read, write and moderate the comments of a blog post"
)]
pub(crate) struct Arguments {
  /// Hide the comment form; the viewer is not signed in.
  #[arg(long, env = "COMMENTS_ANONYMOUS")]
  pub(crate) anonymous: bool,
  #[arg(long, env = "COMMENTS_BASE_URL", default_value = "http://localhost:8080")]
  pub(crate) base_url: String,
  /// Write logs to this file. Logging is off otherwise.
  #[arg(long, env = "COMMENTS_LOG_FILE")]
  pub(crate) log_file: Option<PathBuf>,
  #[arg(long, env = "COMMENTS_POST_ID")]
  pub(crate) post_id: u64,
  /// JSON object with the UI strings.
  #[arg(long, env = "COMMENTS_STRINGS")]
  pub(crate) strings: Option<PathBuf>,
}

impl Arguments {
  pub(crate) fn initialize_logging(&self) -> Result {
    let Some(path) = &self.log_file else {
      return Ok(());
    };

    let file = fs::OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .with_context(|| format!("could not open log file `{}`", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_ansi(false)
      .with_writer(Mutex::new(file))
      .try_init()
      .map_err(|error| anyhow::anyhow!(error))?;

    Ok(())
  }

  pub(crate) fn strings(&self) -> Result<Strings> {
    self
      .strings
      .as_deref()
      .map_or_else(|| Ok(Strings::default()), Strings::load)
  }
}
