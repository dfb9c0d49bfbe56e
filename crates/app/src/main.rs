use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{DEFAULT_SESSION_LENGTH, QuizConfig};
use services::{Clock, QuestionBank, ScoreStore, ThemeStore};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://quizmaster.sqlite3";
const DEFAULT_LOG_FILTER: &str = "quizmaster=info,services=info,storage=info,ui=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidSessionLength { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidSessionLength { raw } => {
                write!(f, "invalid --session-length value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
    storage: Storage,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn quiz_config(&self) -> QuizConfig {
        self.config
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn score_store(&self) -> ScoreStore {
        ScoreStore::new(Arc::clone(&self.storage.kv))
    }

    fn theme_store(&self) -> ThemeStore {
        ThemeStore::new(Arc::clone(&self.storage.kv))
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    bank_path: Option<PathBuf>,
    session_length: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quizmaster [--db <sqlite_url>] [--bank <questions.json>] [--session-length <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --bank (built-in questions)");
    eprintln!("  --session-length {DEFAULT_SESSION_LENGTH}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_BANK_PATH, QUIZ_SESSION_LENGTH, RUST_LOG");
}

fn parse_session_length(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ArgsError::InvalidSessionLength { raw }),
    }
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env("QUIZ_DB_URL")
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut bank_path = env("QUIZ_BANK_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut session_length = match env("QUIZ_SESSION_LENGTH") {
            Some(raw) => parse_session_length(raw)?,
            None => DEFAULT_SESSION_LENGTH,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--bank" => {
                    bank_path = Some(PathBuf::from(require_value(args, "--bank")?));
                }
                "--session-length" => {
                    session_length = parse_session_length(require_value(args, "--session-length")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            bank_path,
            session_length,
        })
    }
}

/// Turn a bare path or `sqlite:` path into an absolute `sqlite://` URL.
fn normalize_sqlite_url(raw: String) -> String {
    let raw = raw.trim();
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw.to_string();
    }
    let path = Path::new(raw.strip_prefix("sqlite:").unwrap_or(raw));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Filesystem path behind a `sqlite://` URL, if it names a file.
fn sqlite_file_path(db_url: &str) -> Option<&Path> {
    let rest = db_url.strip_prefix("sqlite://")?;
    let path = rest.split('?').next().unwrap_or(rest);
    (!path.is_empty()).then(|| Path::new(path))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_bank(path: Option<&PathBuf>) -> Result<QuestionBank, services::BankError> {
    match path {
        Some(path) => {
            let bank = QuestionBank::from_path(path)?;
            tracing::info!(path = %path.display(), questions = bank.len(), "question bank loaded");
            Ok(bank)
        }
        None => QuestionBank::builtin(),
    }
}

/// Open the score store, or run without one when SQLite is unusable.
async fn open_storage(db_url: &str) -> Storage {
    if let Some(parent) = sqlite_file_path(db_url).and_then(Path::parent) {
        if let Err(err) = std::fs::create_dir_all(parent) {
            tracing::warn!(%err, db_url, "best score and theme will not persist");
            return Storage::unavailable();
        }
    }
    match Storage::sqlite(db_url).await {
        Ok(storage) => storage,
        Err(err) => {
            tracing::warn!(%err, db_url, "best score and theme will not persist");
            Storage::unavailable()
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let config = QuizConfig::new(parsed.session_length)?;
    let bank = load_bank(parsed.bank_path.as_ref())?;
    let storage = open_storage(&parsed.db_url).await;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        bank: Arc::new(bank),
        config,
        storage,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("QuizMaster")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
