use {
  action::Action,
  anyhow::Context,
  api_error::ApiError,
  app::App,
  arguments::Arguments,
  chrono::NaiveDateTime,
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_form::CommentForm,
  comment_store::CommentStore,
  comments_page::CommentsPage,
  crossterm::{
    event as crossterm_event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  dialog::Dialog,
  effect::Effect,
  event::Event,
  help_view::HelpView,
  listing::Listing,
  mode::Mode,
  mutation_target::MutationTarget,
  navigation::Navigation,
  page_cursor::PageCursor,
  pagination::Pagination,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
  },
  reqwest::StatusCode,
  serde::{Deserialize, Deserializer, Serialize, de},
  state::State,
  status::Status,
  std::{
    backtrace::BacktraceStatus,
    collections::{HashMap, HashSet},
    fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
  strings::Strings,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{centered_rect, deserialize_timestamp, format_timestamp, truncate, wrap_text},
  validation_errors::ValidationErrors,
};

mod action;
mod api_error;
mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_form;
mod comment_store;
mod comments_page;
mod dialog;
mod effect;
mod event;
#[cfg(test)]
mod fixtures;
mod help_view;
mod listing;
mod mode;
mod mutation_target;
mod navigation;
mod page_cursor;
mod pagination;
mod state;
mod status;
mod strings;
mod utils;
mod validation_errors;

const RETRY_DELAY: Duration = Duration::from_secs(1);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const FLASH_DURATION: Duration = Duration::from_secs(3);

const BROWSE_STATUS: &str = "↑/k up • ↓/j down • ←/→ page • c comment • e edit • d delete • o open post • q quit • ? help";

const COMPOSE_STATUS: &str = "type to write • enter submit • esc leave form";

const EDIT_STATUS: &str = "type to edit • enter update • esc cancel";

const DELETE_STATUS: &str = "y/enter confirm • n/esc cancel";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Comments:
  ↑ / k   select previous comment
  ↓ / j   select next comment
  c       write a new comment
  e       edit the selected comment
  d       delete the selected comment
  o       open the post in your browser

Pages:
  g / home   first page
  ← / h      previous page
  → / l      next page
  G / end    last page

Forms:
  enter   submit
  esc     cancel
  y / n   confirm or cancel a deletion

  q       quit
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  arguments
    .initialize_logging()
    .context("could not initialize logging")?;

  let strings = arguments.strings().context("could not load strings")?;

  info!(
    base_url = %arguments.base_url,
    post_id = arguments.post_id,
    anonymous = arguments.anonymous,
    "starting comments widget"
  );

  let client = Client::new(&arguments.base_url, REQUEST_TIMEOUT)
    .context("could not build HTTP client")?;

  let state = State::new(arguments.post_id, arguments.anonymous, strings);

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, state);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
