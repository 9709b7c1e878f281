use std::fmt;
use std::io::{self, BufRead, Write};

use quiz_core::model::QuestionCatalog;
use services::{
    AppServices, Clock, QuizPhase, QuizSession, RenderDirective, render_directive,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- quiz    [--db <sqlite_url>] [--images <dir>]");
    eprintln!("  cargo run -p app -- history [--db <sqlite_url>] [--images <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:quiz.sqlite3");
    eprintln!("  --images images");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_IMAGES_DIR");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quiz,
    History,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "quiz" => Some(Self::Quiz),
            "history" => Some(Self::History),
            _ => None,
        }
    }
}

struct Args {
    db_url: String,
    images_dir: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("QUIZ_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://quiz.sqlite3".into(), normalize_sqlite_url);
        let mut images_dir = std::env::var("QUIZ_IMAGES_DIR")
            .ok()
            .unwrap_or_else(|| "images".into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--images" => {
                    images_dir = require_value(args, "--images")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, images_dir })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn show(directive: &RenderDirective, assets: &services::AssetCatalog) {
    match directive {
        RenderDirective::ShowIntro { title, blurb } => {
            println!();
            println!("{title}");
            println!();
            println!("{blurb}");
            println!();
            println!("Press Enter to start the survey, or type 'quit'.");
        }
        RenderDirective::ShowQuestion {
            number,
            total,
            prompt,
            options,
            image,
        } => {
            println!();
            if let Some(path) = assets.resolve(image) {
                println!("[image: {}]", path.display());
            }
            println!("Question {number} of {total}");
            println!("{prompt}");
            for (index, option) in options.iter().enumerate() {
                println!("  {}) {option}", index + 1);
            }
            println!("Pick an option number, or type 'reset' or 'quit'.");
        }
        RenderDirective::ShowContactForm => {
            println!();
            println!("Almost There!");
            println!("Enter your name and email to see your result.");
        }
        RenderDirective::ShowResult {
            label,
            description,
            message,
            image,
            ctas,
        } => {
            println!();
            println!("Your Community Engagement Survey Result");
            if let Some(path) = assets.resolve(image) {
                println!("[image: {}]", path.display());
            }
            println!();
            println!("You are {label}");
            println!("{description}");
            println!();
            println!("Why this fits you");
            println!("{message}");
            println!();
            println!("Connect with your community and explore opportunities to contribute:");
            for cta in ctas.iter() {
                println!("  - {}: {}", cta.title(), cta.href());
            }
            println!();
            println!("Type 'reset' to take the quiz again, or 'quit' to exit.");
        }
    }
}

fn prompt_line(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line),
        _ => None,
    }
}

async fn run_quiz(services: &AppServices) -> Result<(), Box<dyn std::error::Error>> {
    let assets = services.assets();
    let flow = services.flow();
    let mut session = QuizSession::community();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        show(&render_directive(&session), &assets);

        match session.phase() {
            QuizPhase::NotStarted => {
                let Some(line) = lines.next().transpose()? else {
                    return Ok(());
                };
                if line.trim() == "quit" {
                    return Ok(());
                }
                session = flow.start_session(QuestionCatalog::community())?;
            }
            QuizPhase::InProgress => {
                let Some(line) = lines.next().transpose()? else {
                    return Ok(());
                };
                let input = line.trim();
                match input {
                    "quit" => return Ok(()),
                    "reset" => session.reset(),
                    _ => {
                        let Some(option) = input
                            .parse::<usize>()
                            .ok()
                            .and_then(|n| n.checked_sub(1))
                            .and_then(|i| {
                                session
                                    .current_question()
                                    .and_then(|q| q.options().get(i).cloned())
                            })
                        else {
                            println!("Please answer with one of the option numbers.");
                            continue;
                        };
                        if let Err(err) = session.answer_current(&option) {
                            println!("{err}");
                        }
                    }
                }
            }
            QuizPhase::AwaitingContact => {
                let Some(name) = prompt_line(&mut lines, "Your Name: ") else {
                    return Ok(());
                };
                match name.trim() {
                    "quit" => return Ok(()),
                    "reset" => {
                        session.reset();
                        continue;
                    }
                    _ => {}
                }
                let Some(email) = prompt_line(&mut lines, "Your Email: ") else {
                    return Ok(());
                };

                match flow.submit_contact(&mut session, &name, &email).await {
                    Ok(outcome) => {
                        log::info!("response {} persisted", outcome.response_id);
                    }
                    Err(err) => {
                        println!("Failed to save results: {err}");
                        println!("Your answers are kept; submit again to retry.");
                    }
                }
            }
            QuizPhase::ResultShown => {
                let Some(line) = lines.next().transpose()? else {
                    return Ok(());
                };
                match line.trim() {
                    "reset" => session.reset(),
                    "quit" => return Ok(()),
                    _ => {}
                }
            }
        }
    }
}

async fn run_history(services: &AppServices) -> Result<(), Box<dyn std::error::Error>> {
    let items = services.history().list_recent(20).await?;
    if items.is_empty() {
        println!("No responses recorded yet.");
        return Ok(());
    }

    println!("Recent responses:");
    for item in items {
        println!(
            "  #{} {} {} -> {}",
            item.id,
            item.submitted_at.format("%Y-%m-%d %H:%M:%S"),
            item.name,
            item.persona
        );
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: run the quiz when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Quiz,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Quiz,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if matches!(cmd, Command::Quiz | Command::History)
        && !argv.is_empty()
        && !argv[0].starts_with("--")
    {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(
        &parsed.db_url,
        Clock::default_clock(),
        parsed.images_dir.as_str(),
    )
    .await?;
    log::info!("storage ready at {}", parsed.db_url);

    match cmd {
        Command::Quiz => run_quiz(&services).await,
        Command::History => run_history(&services).await,
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_memory_and_full_urls() {
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/quiz.sqlite3".into()),
            "sqlite:///tmp/quiz.sqlite3"
        );
    }

    #[test]
    fn normalize_absolutizes_bare_paths() {
        let normalized = normalize_sqlite_url("sqlite:/tmp/quiz.sqlite3".into());
        assert_eq!(normalized, "sqlite:///tmp/quiz.sqlite3");
    }

    #[test]
    fn command_parsing_recognizes_subcommands() {
        assert_eq!(Command::from_arg("quiz"), Some(Command::Quiz));
        assert_eq!(Command::from_arg("history"), Some(Command::History));
        assert_eq!(Command::from_arg("ui"), None);
    }
}
