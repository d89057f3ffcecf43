// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    error::Error,
    fmt,
    io::{self, BufRead, Write},
    time::Duration,
};

use clap::{value_t, App, Arg, ArgMatches, ErrorKind};
use log::error;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use wordsearch::{
    board::{Coordinate, Direction, SquareDimensions},
    filler::{FillStrategy, SearchBudget},
    random::{RandomSource, RngSource},
    session::{GameConfig, Round, SelectionOutcome, Session},
    source::{FileWords, StaticWords, WordSource},
};

mod logging;

/// Word list used when none is given on the command line.
static BUILTIN_WORDS: &str = include_str!("../words.txt");

fn main() -> Result<(), Box<dyn Error>> {
    let matches = App::new("Word Hunt")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Find the words hidden in a small grid of letters.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of the board")
                .takes_value(true)
                .default_value("4"),
        )
        .arg(
            Arg::with_name("words")
                .short("w")
                .long("words")
                .value_name("FILE")
                .help("word list with one word per line, read at the start of every round")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .long("strategy")
                .value_name("STRATEGY")
                .help("how words are laid out on the board")
                .takes_value(true)
                .possible_values(&["greedy", "exhaustive"])
                .case_insensitive(true)
                .default_value("exhaustive"),
        )
        .arg(
            Arg::with_name("max_nodes")
                .long("max-nodes")
                .value_name("N")
                .help("stop the exhaustive search after visiting N placements")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("time_limit")
                .long("time-limit-ms")
                .value_name("MS")
                .help("stop the exhaustive search after MS milliseconds")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("candidates")
                .short("c")
                .long("candidates")
                .value_name("N")
                .help("number of words to try to hide each round")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("directions")
                .long("directions")
                .value_name("DIRECTIONS")
                .help("directions words may be hidden in")
                .takes_value(true)
                .possible_values(&["all", "forward"])
                .case_insensitive(true)
                .default_value("all"),
        )
        .arg(
            Arg::with_name("fit")
                .long("fit")
                .help("only use words that fit across the board"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for a reproducible game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("log progress messages"),
        )
        .get_matches();

    logging::init_logger(matches.is_present("verbose"));

    let config = game_config(&matches);
    let mut rng = RngSource::new(if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        StdRng::from_entropy()
    });
    let mut source: Box<dyn WordSource> = match matches.value_of("words") {
        Some(path) => Box::new(FileWords::new(path)),
        None => Box::new(StaticWords::parse(BUILTIN_WORDS)),
    };

    let mut session = Session::new(config);
    session.start_round(&mut *source, &mut rng)?;

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    play(&mut session, &mut *source, &mut rng, &mut input)?;
    Ok(())
}

/// Build the [`GameConfig`] from the command line arguments. Exits with a usage error on
/// invalid values.
fn game_config(matches: &ArgMatches) -> GameConfig {
    let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    let dimensions = SquareDimensions::try_new(size).unwrap_or_else(|| {
        clap::Error::with_description(
            &format!("invalid board size {}", size),
            ErrorKind::InvalidValue,
        )
        .exit()
    });

    let strategy = match matches.value_of("strategy") {
        Some(s) if s.eq_ignore_ascii_case("greedy") => FillStrategy::Greedy,
        _ => {
            let mut budget = SearchBudget::default();
            if matches.is_present("max_nodes") {
                budget.max_nodes =
                    Some(value_t!(matches, "max_nodes", u64).unwrap_or_else(|e| e.exit()));
            }
            if matches.is_present("time_limit") {
                budget.time_limit = Some(Duration::from_millis(
                    value_t!(matches, "time_limit", u64).unwrap_or_else(|e| e.exit()),
                ));
            }
            FillStrategy::Exhaustive(budget)
        }
    };

    let directions = match matches.value_of("directions") {
        Some(d) if d.eq_ignore_ascii_case("forward") => Direction::forward(),
        _ => Direction::all(),
    };

    GameConfig {
        dimensions,
        strategy,
        max_candidates: value_t!(matches, "candidates", usize).unwrap_or_else(|e| e.exit()),
        directions,
        fit_to_board: matches.is_present("fit"),
    }
}

/// A parsed line of player input.
#[derive(Debug, Eq, PartialEq)]
enum Command {
    Select(Vec<Coordinate>),
    New,
    Info,
    Words,
    Found,
    Help,
    Quit,
}

/// Matcher for the select command.
static SELECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:select|sel|s|pick)\s+
        (?P<cells>[0-9,\s]+)$",
    )
    .unwrap()
});
static CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<row>[0-9]+)\s*,\s*(?P<col>[0-9]+)").unwrap());

/// Parse one line of input, ignoring case and surrounding whitespace. On failure returns
/// the message to show the player.
fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "?" | "help" | "h" => Ok(Command::Help),
        "new" | "next" | "n" => Ok(Command::New),
        "info" | "i" => Ok(Command::Info),
        "words" | "w" => Ok(Command::Words),
        "found" | "f" => Ok(Command::Found),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => {
            let captures = SELECT
                .captures(other)
                .ok_or_else(|| format!("Invalid command \"{}\". Use '?' for help", other))?;
            let coords: Vec<_> = CELL
                .captures_iter(&captures["cells"])
                .filter_map(|cell| match (cell["row"].parse(), cell["col"].parse()) {
                    (Ok(row), Ok(col)) => Some(Coordinate::new(row, col)),
                    _ => None,
                })
                .collect();
            if coords.is_empty() {
                Err("Give cells as <row>,<col> separated by spaces.".to_owned())
            } else {
                Ok(Command::Select(coords))
            }
        }
    }
}

/// Run the command loop until the player quits or input ends.
fn play<W, R, B>(
    session: &mut Session,
    source: &mut W,
    rng: &mut R,
    input: &mut InputReader<B>,
) -> io::Result<()>
where
    W: WordSource + ?Sized,
    R: RandomSource + ?Sized,
    B: BufRead,
{
    println!("Find the hidden words. Type help or ? for commands.");
    loop {
        let round = match session.round() {
            Some(round) => round,
            None => return Ok(()),
        };
        println!();
        show_board(round);
        println!();

        let cmd = loop {
            let line = match input.next_line("> ")? {
                Some(line) => line,
                None => return Ok(()),
            };
            match parse_command(line) {
                Ok(cmd) => break cmd,
                Err(msg) => println!("{}", msg),
            }
        };

        match cmd {
            Command::Select(coords) => {
                if let Some(round) = session.round_mut() {
                    select(round, &coords);
                }
            }
            Command::New => {
                if let Err(err) = session.start_round(source, rng) {
                    error!("{}", err);
                    println!("Could not start a new round, keeping the current board.");
                }
            }
            Command::Info => show_info(round),
            Command::Words => {
                println!("Hidden words: {}", round.candidates().join(", "));
            }
            Command::Found => {
                if round.discovered().is_empty() {
                    println!("No words found yet.");
                } else {
                    let found: Vec<_> = round.discovered().iter().map(|w| w.word()).collect();
                    println!("Found so far: {}", found.join(", "));
                }
            }
            Command::Help => {
                println!(
                    "Available Commands:
    select <row>,<col> ...      select a path of touching cells and check the word it spells.
        Cells may touch diagonally and no cell may be used twice, e.g. \"select 0,0 1,1 2,2\".
    found                       list the words you have found.
    words                       list the words that were hidden this round.
    info                        show statistics about the board.
    new                         start a new round with a fresh board.
    quit                        leave the game."
                );
            }
            Command::Quit => return Ok(()),
        }
    }
}

/// Drive a selection through the round the way a pointer drag would.
fn select(round: &mut Round, coords: &[Coordinate]) {
    let mut coords = coords.iter().copied();
    if let Some(first) = coords.next() {
        round.begin(first);
        if round.selection().is_empty() {
            println!("{} is not on the board.", first);
        }
    }
    for coord in coords {
        if !round.extend(coord) {
            println!(
                "Skipping {}: it must be on the board, touch the previous cell and not be \
                 selected already.",
                coord
            );
        }
    }
    if let Some(text) = round.selection_text() {
        println!("Selected: {}", text);
    }
    match round.end() {
        SelectionOutcome::Found(word) => println!("Found {}!", word.word()),
        SelectionOutcome::Miss(text) => println!("{} is not one of the words.", text),
        SelectionOutcome::Empty => println!("Nothing selected."),
    }
}

/// Print statistics about the round.
fn show_info(round: &Round) {
    let info = round.info();
    println!(
        "Minimum possible words: {}, Maximum: {}",
        info.min_words, info.max_words
    );
    println!(
        "Strings of {} or more letters on the board: {}",
        wordsearch::MIN_WORD_LEN,
        info.found_words
    );
    println!("Words that count: {}", round.known_words().len());
    let report = round.fill_report();
    println!(
        "Hidden {} of {} words{}",
        round.candidates().len() - report.skipped,
        round.candidates().len(),
        if report.budget_exhausted {
            " (search stopped early)"
        } else {
            ""
        }
    );
}

/// Print the board, bracketing letters that belong to words already found.
fn show_board(round: &Round) {
    enum BoardCell {
        Plain(char),
        Found(char),
    }
    impl fmt::Display for BoardCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                BoardCell::Plain(c) => f.pad(&c.to_string()),
                BoardCell::Found(c) => f.pad(&format!("[{}]", c)),
            }
        }
    }

    let grid = round.grid();
    let size = grid.dimensions().size();
    print!("   ");
    for i in 0..size {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in grid.dimensions().iter_rows().enumerate() {
        print!("{:>2} ", i);
        for coord in row {
            let letter = grid.letter(coord).unwrap_or(' ');
            let cell = if round.is_discovered(&coord) {
                BoardCell::Found(letter)
            } else {
                BoardCell::Plain(letter)
            };
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Reads the player's commands one line at a time.
struct InputReader<B> {
    read: B,
    line: String,
}

impl<B: BufRead> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            line: String::new(),
        }
    }

    /// Show `prompt` and read the next line. Returns `None` once input has ended.
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<&str>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        self.line.clear();
        if self.read.read_line(&mut self.line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(&self.line))
    }
}
