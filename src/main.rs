use std::io::Read;

use clap::Parser;
use clique_seguro::{CliError, Session, VerificationState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(
    name = "clique-seguro",
    about = "Check a pasted message or link for common scam signs",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<String>,

    /// Analyze this text instead of files or stdin
    #[arg(short, long, conflicts_with = "files")]
    text: Option<String>,

    /// Seed for picking the safe-verdict message
    #[arg(long)]
    seed: Option<u64>,

    /// Print the title and message instead of JSON
    #[arg(long)]
    plain: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut rng: Box<dyn rand::RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    if let Some(text) = &cli.text {
        return check("--text", text, cli.plain, &mut *rng);
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(CliError::Stdin)?;
        return check("stdin", &input, cli.plain, &mut *rng);
    }

    for path in &cli.files {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        check(path, &text, cli.plain, &mut *rng)?;
    }
    Ok(())
}

fn check<R: Rng + ?Sized>(
    source_name: &str,
    text: &str,
    plain: bool,
    rng: &mut R,
) -> Result<(), CliError> {
    let mut session = Session::new();
    session.set_input(text);
    let state = session.verify(rng).map_err(|source| CliError::Input {
        source_name: source_name.to_string(),
        source,
    })?;
    log::debug!("{source_name}: {}", state.title());

    if plain {
        print_plain(state);
    } else {
        println!("{}", serde_json::to_string_pretty(state)?);
    }
    Ok(())
}

fn print_plain(state: &VerificationState) {
    println!("{}", state.title());
    if let Some(message) = state.message() {
        println!("{message}");
    }
}
