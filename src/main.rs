use std::{process::ExitCode, time::Duration};

use clap::Parser;
use log::LevelFilter;
use ratcalc::{Calculator, Config, Error, FunctionTable, Outcome};

/// ratcalc evaluates arithmetic expressions exactly and prints the answer as
/// a fraction, with a decimal approximation for non-integers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    /// Seconds each function call may run before it is cancelled.
    #[arg(long, default_value_t = 5.0, value_name = "SECONDS")]
    timeout: f64,

    /// Logs every evaluation step to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression. Separate words are joined with single spaces.
    #[arg(required = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let Ok(budget) = Duration::try_from_secs_f64(args.timeout) else {
        eprintln!("The timeout must be a non-negative number of seconds, not {}.",
                  args.timeout);
        return ExitCode::FAILURE;
    };

    let calc = Calculator::new(FunctionTable::standard(), Config::default().with_time_budget(budget));
    let expression = args.expression.join(" ");

    match calc.evaluate(&expression) {
        Ok(Outcome::Answer(answer)) => {
            match answer.decimal() {
                Some(decimal) => println!("The answer is `{}`.\nIt can also be written as `{decimal}`",
                                          answer.fraction()),
                None => println!("The answer is `{}`", answer.fraction()),
            }
            ExitCode::SUCCESS
        },
        Ok(Outcome::Debug(signal)) => {
            println!("{signal}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        },
    }
}

fn render_error(error: &Error) -> String {
    match error {
        Error::Lex(e) => format!("I couldn't read that expression. {e}"),
        Error::Parse(e) => format!("I couldn't understand that expression. {e}"),
        Error::Value(e) => format!("Error: {e}"),
        Error::Timeout(e) => format!("Timeout: {e}"),
        Error::Worker(e) => format!("Something went wrong: {e}"),
    }
}
