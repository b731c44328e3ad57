use crate::error::SolverError;
use crate::feedback::{FeedbackRow, parse_row, row_to_string};
use crate::game_state::{GameInterface, Outcome, Submission};
use crate::wordbank::is_valid_word;
use crate::{debug_log, info_log};
use chrono::{DateTime, Local};
use clap::Parser;
use std::fs;
use std::io::{BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Plays the daily five letter word game by narrowing a candidate list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Seed for the random guess choice (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// First word to play
    #[arg(short, long, default_value = crate::policy::DEFAULT_OPENING)]
    pub opening: String,

    /// Play against a built-in simulation with this answer instead of relaying the real game
    #[arg(short, long)]
    pub answer: Option<String>,

    /// Write a completion record here when solved (documents folder when no value is given)
    #[arg(short, long, num_args = 0..=1)]
    pub record_dir: Option<Option<PathBuf>>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The directory completion records go to, if any.
    pub fn record_dir(&self) -> Option<PathBuf> {
        match &self.record_dir {
            None => None,
            Some(Some(dir)) => Some(dir.clone()),
            Some(None) => dirs::document_dir().or_else(dirs::home_dir),
        }
    }

    /// Lowercased opening word, checked to be playable.
    pub fn opening_word(&self) -> Result<String, SolverError> {
        checked_word(&self.opening)
    }

    pub fn answer_word(&self) -> Result<Option<String>, SolverError> {
        self.answer.as_deref().map(checked_word).transpose()
    }
}

fn checked_word(word: &str) -> Result<String, SolverError> {
    let word = word.trim().to_lowercase();
    if is_valid_word(&word) {
        Ok(word)
    } else {
        Err(SolverError::InvalidWord(word))
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// What the person relaying the game typed after a word.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Scored(FeedbackRow),
    Rejected,
    Invalid,
}

fn is_rejection(input: &str) -> bool {
    matches!(input, "n" | "no" | "invalid" | "rejected" | "not a word")
}

/// Read one reply line. End of input is an error: the game cannot go on.
pub fn read_reply<R: BufRead>(reader: &mut R) -> Result<Reply, SolverError> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(SolverError::Io(ErrorKind::UnexpectedEof.into()));
    }
    let input = input.trim().to_lowercase();

    if is_rejection(&input) {
        return Ok(Reply::Rejected);
    }
    match parse_row(&input) {
        Ok(row) => Ok(Reply::Scored(row)),
        Err(e) => {
            debug_log!("could not read reply \"{}\": {}", input, e);
            Ok(Reply::Invalid)
        }
    }
}

/// Name of the completion record for `word` solved at `at`.
pub fn record_file_name(word: &str, at: &DateTime<Local>) -> String {
    format!("{word}{}.txt", at.format("%d%m%Y%H%M%S"))
}

/// Write the end-of-game record: answer, round count and every scored guess.
pub fn write_completion_record(
    dir: &Path,
    word: &str,
    rounds: usize,
    history: &[(String, FeedbackRow)],
    at: &DateTime<Local>,
) -> Result<PathBuf, SolverError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(record_file_name(word, at));
    let mut contents = format!("solved \"{word}\" in {rounds}/{} rounds\n", crate::MAX_ROUNDS);
    for (guess, row) in history {
        contents.push_str(&format!("{guess} {}\n", row_to_string(row)));
    }
    fs::write(&path, contents)?;
    Ok(path)
}

pub fn display_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> std::io::Result<()> {
    match outcome {
        Outcome::Solved { word, rounds } => writeln!(out, "Correct word is {word} (found in {rounds} rounds)"),
        Outcome::Exhausted { rounds, remaining } => writeln!(
            out,
            "Out of guesses after {rounds} rounds; {remaining} candidates were still possible."
        ),
        Outcome::NoCandidates { rounds } => writeln!(
            out,
            "No candidates remain after {rounds} rounds. The answer is not in the word list."
        ),
    }
}

/// Terminal implementation of the GameInterface trait
///
/// A person types each word into the real game and reports the tile colours back.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    out: W,
    record_dir: Option<PathBuf>,
    history: Vec<(String, FeedbackRow)>,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            record_dir: None,
            history: Vec::new(),
        }
    }

    pub fn with_record_dir(self, record_dir: Option<PathBuf>) -> Self {
        Self { record_dir, ..self }
    }

    pub fn history(&self) -> &[(String, FeedbackRow)] {
        &self.history
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn submit(&mut self, word: &str) -> Result<Submission, SolverError> {
        writeln!(self.out, "\ntyping word \"{word}\"")?;
        loop {
            writeln!(
                self.out,
                "Enter the tiles (G=green, Y=yellow, X=gray, e.g. GYXXG), or 'n' if the word was not accepted:"
            )?;
            self.out.flush()?;
            match read_reply(&mut self.reader)? {
                Reply::Scored(row) => return Ok(Submission::Feedback(row)),
                Reply::Rejected => return Ok(Submission::NotRecognized),
                Reply::Invalid => writeln!(self.out, "Invalid reply. Please enter 5 tiles using G, Y, or X.")?,
            }
        }
    }

    fn game_solved(&mut self, word: &str, rounds: usize) -> Result<(), SolverError> {
        writeln!(self.out, "Correct word is {word}")?;
        if let Some(dir) = &self.record_dir {
            let path = write_completion_record(dir, word, rounds, &self.history, &Local::now())?;
            info_log!("completion record written to {}", path.display());
            writeln!(self.out, "record saved to {}", path.display())?;
        }
        Ok(())
    }

    fn word_rejected(&mut self, word: &str) {
        let _ = writeln!(self.out, "{word} not in the game's word list");
    }

    fn round_scored(&mut self, round: usize, word: &str, feedback: &FeedbackRow, remaining: usize) {
        self.history.push((word.to_string(), *feedback));
        let _ = writeln!(
            self.out,
            "round {round}: {word} {} -> {remaining} candidates left",
            row_to_string(feedback)
        );
    }
}
