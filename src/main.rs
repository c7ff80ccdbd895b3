use clap::Parser as ClapParser;
use mathexpr::cli::{
    self, CliError, EvalOptions, EvalResult, OutputMode, Shell, DEFAULT_ROUND_SF,
};
use mathexpr::output::format_number;
use std::io;

#[derive(ClapParser)]
#[command(name = "mathexpr")]
#[command(about = "Evaluate infix arithmetic expressions (+ - * / ** and parentheses)")]
#[command(version)]
struct Cli {
    /// Expression to evaluate (starts the interactive shell if omitted)
    expression: Option<String>,

    /// Start the interactive shell
    #[arg(short, long)]
    interactive: bool,

    /// Round displayed values to this many significant figures
    #[arg(
        short = 'R',
        long = "round-sf",
        default_value_t = DEFAULT_ROUND_SF,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    round_sf: u32,

    /// Print the expression with minimal parentheses instead of its value
    #[arg(long, conflicts_with = "tree")]
    format: bool,

    /// Print the syntax tree as JSON instead of the value
    #[arg(long)]
    tree: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match (cli.expression, cli.interactive) {
        (Some(_), true) => Err(CliError::Usage(
            "No expression expected with -i/--interactive".to_string(),
        )),
        (None, _) => run_shell(cli.round_sf),
        (Some(expression), false) => {
            let mode = if cli.format {
                OutputMode::Format
            } else if cli.tree {
                OutputMode::Tree
            } else {
                OutputMode::Value
            };
            run_eval(EvalOptions {
                expression,
                round_sf: cli.round_sf,
                mode,
            })
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_eval(options: EvalOptions) -> Result<(), CliError> {
    match cli::execute_eval(&options)? {
        EvalResult::Value(value) => println!("{}", format_number(value)),
        EvalResult::Formatted(text) => println!("{}", text),
        EvalResult::Tree(tree) => println!("{}", serde_json::to_string_pretty(&tree)?),
    }
    Ok(())
}

fn run_shell(round_sf: u32) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), round_sf)
        .with_prompt(atty::is(atty::Stream::Stdin))
        .run()
}
