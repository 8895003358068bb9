use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use guess_quiz::{DEFAULT_QUIZ_PATH, Quiz, QuizEngine};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz from
    #[arg(short, long, default_value = DEFAULT_QUIZ_PATH)]
    questions: PathBuf,

    /// Validate the quiz file, print a summary and exit
    #[arg(long)]
    check: bool,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Failed to open log file: {}", e);
        process::exit(1);
    }

    let result = if args.check {
        check(&args.questions)
    } else {
        Quiz::from_json(&args.questions).and_then(Quiz::run)
    };

    if let Err(e) = result {
        error!(error = %e, "quiz failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(args: &Args) -> std::io::Result<()> {
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &args.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if args.check {
        // The terminal UI owns stdout and stderr, so only check mode logs there.
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn check(path: &Path) -> Result<(), guess_quiz::QuizError> {
    let engine = QuizEngine::from_json(path)?;
    info!(path = %path.display(), "quiz document is valid");

    let title = if engine.title().is_empty() {
        "(untitled)"
    } else {
        engine.title()
    };
    println!("{}", title);
    println!("questions:  {}", engine.questions().len());
    println!("answers:    {}", engine.total_number_of_solutions());
    println!("hints:      {}", engine.total_number_of_hints());
    println!("max points: {}", engine.max_points());

    for (index, question) in engine.questions().iter().enumerate() {
        println!(
            "{:2}. {} ({} answers, {} hints)",
            index + 1,
            question.content(),
            question.solutions().len(),
            question.total_number_of_hints()
        );
    }

    Ok(())
}
