// Integration tests for wordle-autoplay
// These tests verify that the word source, matcher, pool, policy and driver work together

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use wordle_autoplay::cli::CliInterface;
use wordle_autoplay::feedback::Feedback::*;
use wordle_autoplay::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn seeded(opening: &str, seed: u64) -> FixedOpening<UniformRandom<StdRng>> {
    FixedOpening::new(opening, UniformRandom::new(StdRng::seed_from_u64(seed)))
}

#[test]
fn test_end_to_end_single_filter() {
    // Pool of four, guess "apple", only the last letter is wrong
    let pool = CandidatePool::from(words(&["apple", "apply", "adobe", "aglow"]));
    let matcher = FeedbackMatcher::new().extend("apple", &[Correct, Correct, Correct, Correct, Absent]);
    let pool = pool.filter(&matcher);
    assert_eq!(pool.words(), ["apply"]);
}

#[test]
fn test_repeated_letter_feedback_from_the_game() {
    // sheep against paper: the game marks the first e gray and the second green
    let feedback = score("sheep", "paper");
    assert_eq!(feedback, [Absent, Absent, Absent, Correct, Present]);

    let matcher = FeedbackMatcher::from_guess("sheep", &feedback);
    assert!(matcher.accepts("paper"));
    assert!(!matcher.accepts("speed"));
}

#[test]
fn test_simulated_game_is_always_solved_when_answer_is_in_pool() {
    // Every answer in a small list should be found within the round budget
    let list = words(&[
        "crane", "trace", "brake", "drake", "flake", "snake", "grace", "place", "slate", "paper",
    ]);
    for (seed, answer) in list.iter().enumerate() {
        let mut simulated = SimulatedGame::new(answer, list.clone()).unwrap();
        let mut game = Game::new(list.clone(), seeded("crane", seed as u64));
        let outcome = game.play(&mut simulated).unwrap();

        match outcome {
            Outcome::Solved { word, rounds } => {
                assert_eq!(&word, answer);
                assert!(rounds <= MAX_ROUNDS);
                assert_eq!(simulated.solved_in(), Some(rounds));
            }
            other => panic!("expected {answer} to be solved, got {other:?}"),
        }
    }
}

#[test]
fn test_answer_never_leaves_the_pool() {
    // Feedback produced by the game's own rules must never eliminate the answer
    let list = load_embedded_wordbank();
    for answer in ["paper", "eerie", "sheep", "llama", "geese"] {
        let list: Vec<String> = list.iter().cloned().chain([answer.to_string()]).collect();
        let mut simulated = SimulatedGame::new(answer, list.clone()).unwrap();
        let mut game = Game::new(list, seeded("soare", 5));
        while !game.phase().is_terminal() {
            let guess = game.next_guess().unwrap();
            let submission = simulated.submit(&guess).unwrap();
            game.record(submission).unwrap();
            if game.phase() != Phase::Solved {
                assert!(game.pool().contains(answer), "{answer} dropped after {guess}");
            }
        }
    }
}

#[test]
fn test_unrecognized_opening_falls_back_to_pool() {
    // "zzzzz" is not a game word: it is refused, removed and the round is retried
    let list = words(&["zzzzz", "crane", "slate"]);
    let mut simulated = SimulatedGame::new("slate", words(&["crane"])).unwrap();
    let mut game = Game::new(list, seeded("zzzzz", 1));

    let outcome = game.play(&mut simulated).unwrap();
    assert!(matches!(outcome, Outcome::Solved { ref word, .. } if word == "slate"));
    assert_eq!(simulated.rejected(), ["zzzzz"]);
    assert!(!game.pool().contains("zzzzz"));
    assert_eq!(game.round(), simulated.history().len());
}

#[test]
fn test_answer_outside_word_list_stalls() {
    // The pool empties before the answer can be guessed
    let list = words(&["crane", "slate", "trace"]);
    let mut simulated = SimulatedGame::new("moist", list.clone()).unwrap();
    let mut game = Game::new(list, seeded("crane", 2));

    let outcome = game.play(&mut simulated).unwrap();
    assert_eq!(outcome, Outcome::NoCandidates { rounds: 1 });
    assert_eq!(game.phase(), Phase::Stalled);
}

/// Plays a fixed list of words in order, so a scripted reply can line up with it.
struct InOrder(Vec<&'static str>);

impl GuessPolicy for InOrder {
    fn select_word(&mut self, pool: &CandidatePool, turn: Turn) -> Result<String, SolverError> {
        let word = self.0.get(turn.submissions).ok_or(SolverError::NoCandidates)?;
        assert!(pool.contains(word), "{word} is not a candidate");
        Ok(word.to_string())
    }
}

#[test]
fn test_cli_interface_drives_a_full_game() {
    // A person relays the game: one rejection, one partial score, then a win
    let list = words(&["zzzzz", "apple", "apply", "adobe", "aglow"]);
    let input = "n\nGGGGX\nbogus\nggggg\n";
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    let policy: Box<dyn GuessPolicy> = Box::new(InOrder(vec!["zzzzz", "apple", "apply"]));
    let mut game = Game::new(list, policy);

    let outcome = game.play(&mut interface).unwrap();
    assert_eq!(
        outcome,
        Outcome::Solved {
            word: "apply".to_string(),
            rounds: 2
        }
    );
    assert_eq!(interface.history().len(), 2);

    let output = String::from_utf8(interface.into_output()).unwrap();
    assert!(output.contains("zzzzz not in the game's word list"));
    assert!(output.contains("round 1: apple ggggx -> 1 candidates left"));
    assert!(output.contains("Invalid reply"));
    assert!(output.contains("Correct word is apply"));
}

#[test]
fn test_cli_interface_end_of_input_is_an_error() {
    // Running out of input mid-game surfaces as an IO error, not a panic
    let list = words(&["crane", "slate", "trace"]);
    let mut interface = CliInterface::new(Cursor::new("xxgxg\n"), Vec::new());
    let mut game = Game::new(list, seeded("crane", 3));
    assert!(matches!(game.play(&mut interface), Err(SolverError::Io(_))));
}

#[test]
fn test_custom_wordbank_file_to_game() {
    // Load a custom word list from disk, then win with the simulator
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("wordle_autoplay_custom_wordbank.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "APPLE").unwrap();
        writeln!(file, "grape").unwrap();
        writeln!(file, "lemon").unwrap();
        writeln!(file, "melon").unwrap();
        writeln!(file, "peach").unwrap();
        writeln!(file, "apple").unwrap();
    }

    let list = load_wordbank_from_file(&path).unwrap();
    assert_eq!(list, ["apple", "grape", "lemon", "melon", "peach"]);

    let mut simulated = SimulatedGame::new("melon", list.clone()).unwrap();
    let outcome = Game::new(list, default_policy(StdRng::seed_from_u64(4)))
        .play(&mut simulated)
        .unwrap();
    assert!(matches!(outcome, Outcome::Solved { ref word, .. } if word == "melon"));
    // the default opening is not in this list, so it is refused first
    assert_eq!(simulated.rejected(), ["soare"]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_independent_games_share_nothing() {
    // Two games over the same list evolve separately
    let list = words(&["crane", "slate", "trace", "grace"]);
    let mut first = Game::new(list.clone(), seeded("crane", 1));
    let mut second = Game::new(list, seeded("slate", 1));

    first.next_guess().unwrap();
    first.record(Submission::Feedback(score("crane", "grace"))).unwrap();

    assert_eq!(second.pool().len(), 4);
    assert!(second.matcher().is_empty());
    assert_eq!(second.next_guess().unwrap(), "slate");
    assert!(first.pool().len() < 4);
}
