use std::fmt;

use services::{
    DuckDuckGoSearch, NO_RESULTS, QuizConfig, QuizRequest, SearchProvider, SessionController,
};
use storage::repository::Stores;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use trainer_core::model::SessionId;

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
    InvalidSessionId { raw: String },
    InvalidNumQuestions { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSessionId { raw } => write!(f, "invalid session value: {raw}"),
            ArgsError::InvalidNumQuestions { raw } => {
                write!(f, "invalid num_questions value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

/// Parsed `key=value` process arguments.
#[derive(Debug, Default)]
struct Args {
    topic: Option<String>,
    answer: Option<String>,
    session: Option<String>,
    num_questions: Option<usize>,
    reset: bool,
    search: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quizme                       # welcome screen with the topic list");
    eprintln!("  quizme topic=<topic_name>    # start a quiz");
    eprintln!("  quizme answer=<letter>       # answer the current question");
    eprintln!("  quizme reset=true            # discard the current session");
    eprintln!("  quizme search=<query>        # look up study material on the web");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  session=<id>                 # separate quiz slot (default: default)");
    eprintln!("  num_questions=<n>            # questions per quiz (default: 10)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZME_BANK_DIR, QUIZME_STATE_DIR, QUIZME_TOPOLOGY_PATH,");
    eprintln!("  QUIZME_OUTPUT_DIR, QUIZME_NUM_QUESTIONS, RUST_LOG");
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        for arg in args {
            if arg == "--help" || arg == "-h" {
                print_usage();
                std::process::exit(0);
            }
            let Some((key, value)) = arg.split_once('=') else {
                return Err(ArgsError::UnknownArg(arg));
            };
            match key {
                "topic" => parsed.topic = Some(value.to_string()),
                "answer" => parsed.answer = Some(value.to_string()),
                "session" => parsed.session = Some(value.to_string()),
                "num_questions" => {
                    let count = value
                        .parse::<usize>()
                        .ok()
                        .filter(|count| *count > 0)
                        .ok_or_else(|| ArgsError::InvalidNumQuestions {
                            raw: value.to_string(),
                        })?;
                    parsed.num_questions = Some(count);
                }
                "reset" => parsed.reset = value.eq_ignore_ascii_case("true"),
                "search" => parsed.search = Some(value.to_string()),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(parsed)
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    // Search is a standalone utility; it never touches quiz state.
    if let Some(query) = args.search {
        let provider = DuckDuckGoSearch::new();
        println!("Running DuckDuckGo search for: {query}");
        let results = match provider.search(&query).await {
            Ok(results) => results,
            Err(err) => {
                warn!(error = %err, "search failed");
                NO_RESULTS.to_string()
            }
        };
        println!("\n--- DuckDuckGo Search Results ---");
        println!("{results}");
        return Ok(());
    }

    let mut config = QuizConfig::from_env();
    if let Some(count) = args.num_questions {
        config.num_questions = count;
    }

    let raw_id = args.session.unwrap_or_else(|| "default".to_string());
    let id = SessionId::new(raw_id.as_str()).map_err(|_| {
        let err = ArgsError::InvalidSessionId { raw: raw_id.clone() };
        eprintln!("{err}");
        print_usage();
        err
    })?;

    let stores = Stores::json(
        config.bank_dir.clone(),
        config.state_dir.clone(),
        config.topology_path.clone(),
    );
    let controller = SessionController::new(stores, config);

    let request = QuizRequest {
        topic: args.topic,
        answer: args.answer,
        reset: args.reset,
    };
    println!("{}", controller.handle(&id, &request));
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so stdout carries only quiz replies.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
