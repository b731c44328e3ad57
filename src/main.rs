use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use wordle_autoplay::cli::{Cli, CliInterface, display_outcome, parse_cli};
use wordle_autoplay::feedback::row_to_string;
use wordle_autoplay::policy::{FixedOpening, UniformRandom};
use wordle_autoplay::{Game, GameInterface, Outcome, SimulatedGame, SolverError, logging};
use wordle_autoplay::{load_embedded_wordbank, load_wordbank_from_file};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(Outcome::Solved { .. }) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome, SolverError> {
    println!("Loading words...");
    let words = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path)?,
        None => load_embedded_wordbank(),
    };
    println!("{} words loaded", words.len());

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let policy = FixedOpening::new(cli.opening_word()?, UniformRandom::new(rng));

    let outcome = match cli.answer_word()? {
        Some(answer) => {
            let mut simulated = SimulatedGame::new(&answer, words.iter().cloned())?;
            let outcome = play(words, policy, &mut simulated)?;
            for (guess, row) in simulated.history() {
                println!("{guess} {}", row_to_string(row));
            }
            outcome
        }
        None => {
            let stdin = io::stdin();
            let mut interface = CliInterface::new(stdin.lock(), io::stdout()).with_record_dir(cli.record_dir());
            play(words, policy, &mut interface)?
        }
    };

    display_outcome(&mut io::stdout(), &outcome)?;
    Ok(outcome)
}

fn play<I: GameInterface>(
    words: Vec<String>,
    policy: FixedOpening<UniformRandom<StdRng>>,
    interface: &mut I,
) -> Result<Outcome, SolverError> {
    Game::new(words, policy).play(interface)
}
