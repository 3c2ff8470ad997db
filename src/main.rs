use clap::Parser;
use quiz::core::config::{self, CliOverrides, Diagnostics, QuizConfig, ResolvedConfig};
use quiz::core::loader;
use quiz::session::{AnswerSource, LineAnswers, TimedRunner};
use quiz::term::{self, Palette};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::Write;
use std::process::exit;

#[derive(Parser)]
#[command(name = "quiz", about = "Timed trivia quiz in the terminal")]
struct Args {
    /// A csv file in the format 'question,answer' [default: problems.csv]
    #[arg(long)]
    csv: Option<String>,

    /// Time limit for the whole quiz, in seconds [default: 30]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timer: Option<u64>,

    /// Print the summary without colors
    #[arg(long)]
    no_color: bool,
}

fn init_logging(config: &ResolvedConfig) {
    if config.log_level == LevelFilter::Off {
        return;
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut diagnostics = Diagnostics::default();
    let file_config = config::load_config(&mut diagnostics).unwrap_or_else(|e| {
        diagnostics.warn(format!("Ignoring config file: {e}"));
        QuizConfig::default()
    });
    let config = config::resolve(
        &file_config,
        &CliOverrides {
            csv: args.csv,
            timer: args.timer,
            no_color: args.no_color,
        },
        &mut diagnostics,
    );

    init_logging(&config);
    diagnostics.replay();
    for warning in diagnostics.warnings() {
        eprintln!("warning: {warning}");
    }
    log::info!("Quiz starting up with {:?}", config);

    let questions = match loader::load_questions(&config.csv_path) {
        Ok(questions) => questions,
        Err(e) => {
            log::warn!("Failed to load questions: {}", e);
            println!("{e}");
            exit(1);
        }
    };

    let mut answers = LineAnswers::terminal();
    if let Err(e) = answers.ask(&term::start_prompt(config.timer_secs)).await {
        log::warn!("Failed to read start confirmation: {}", e);
    }

    let report = TimedRunner::new(config.time_limit())
        .run(questions, answers)
        .await;
    log::info!(
        "Quiz over ({:?}): {}/{} correct",
        report.outcome,
        report.correct,
        report.total
    );

    print!("{}", term::render_report(&report, Palette::new(config.color)));
    let _ = std::io::stdout().flush();

    // A timed-out stdin read can still be parked on a blocking thread,
    // which would keep the runtime from shutting down.
    exit(0);
}
