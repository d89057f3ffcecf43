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
//! A game session: the current round's board, its words, and the player's selection.
//!
//! A [`Session`] owns at most one [`Round`]. Starting a new round builds it completely
//! before swapping it in, so a half-filled board is never visible and a failed start
//! leaves the old round untouched.
use std::collections::HashSet;

use enumflags2::BitFlags;
use log::{debug, info};

use crate::{
    board::{Coordinate, Direction, Grid, SquareDimensions},
    enumerate::found_words,
    filler::{BoardFiller, FillReport, FillStrategy, FilledBoard},
    placement::PlacedWord,
    random::RandomSource,
    selection::{is_winning_word, resolve, SelectionPath},
    source::{prepare_candidates, CandidateList, WordSource},
};

pub use self::errors::RoundError;

mod errors;

/// Number of candidate words tried per round by default.
pub const DEFAULT_MAX_CANDIDATES: usize = 10;

/// Settings for every round of a [`Session`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Size of the board.
    pub dimensions: SquareDimensions,
    /// How candidate words are placed.
    pub strategy: FillStrategy,
    /// Maximum number of words to try to place each round.
    pub max_candidates: usize,
    /// Directions words may be placed in.
    pub directions: BitFlags<Direction>,
    /// Drop words longer than the board is wide.
    pub fit_to_board: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimensions: SquareDimensions::default(),
            strategy: FillStrategy::default(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
            directions: BitFlags::all(),
            fit_to_board: false,
        }
    }
}

/// Summary numbers about a round for display.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoundInfo {
    /// How many distinct strings of 3 or more letters can be read off the board.
    pub found_words: usize,
    /// Lower bound on the number of words a board could hold: one 4-cell word per 4
    /// cells.
    pub min_words: usize,
    /// Upper bound on the number of words a board could hold: one per cell.
    pub max_words: usize,
    /// The words the filler tried to place.
    pub candidates: Vec<String>,
}

/// Result of finishing a selection.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SelectionOutcome {
    /// Nothing was selected.
    Empty,
    /// The selection spelled something that isn't a known word.
    Miss(String),
    /// The selection spelled a known word, which was recorded.
    Found(PlacedWord),
}

/// One generated board and everything that happens on it.
#[derive(Debug, Clone)]
pub struct Round {
    grid: Grid,
    candidates: Vec<String>,
    known: HashSet<String>,
    /// Append-only. The first `generated` entries come from the filler.
    placed: Vec<PlacedWord>,
    generated: usize,
    selection: SelectionPath,
    report: FillReport,
}

impl Round {
    fn new(board: FilledBoard, words: CandidateList) -> Self {
        Self {
            grid: board.grid,
            candidates: words.candidates,
            known: words.known,
            generated: board.placed.len(),
            placed: board.placed,
            selection: SelectionPath::new(),
            report: board.report,
        }
    }

    /// The finished grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The words the filler tried to place, in the order it tried them.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Every word a selection is checked against.
    pub fn known_words(&self) -> &HashSet<String> {
        &self.known
    }

    /// All recorded words: those placed by the filler, followed by those found by the
    /// player in the order they were found.
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Only the words found by the player.
    pub fn discovered(&self) -> &[PlacedWord] {
        &self.placed[self.generated..]
    }

    /// Statistics from filling the board.
    pub fn fill_report(&self) -> &FillReport {
        &self.report
    }

    /// The cells currently selected.
    pub fn selection(&self) -> &[Coordinate] {
        self.selection.cells()
    }

    /// The letters spelled by the current selection, if a selection is in progress.
    pub fn selection_text(&self) -> Option<String> {
        if self.selection.is_active() {
            resolve(&self.grid, self.selection.cells())
        } else {
            None
        }
    }

    /// Returns true if the cell is covered by a word the player has found.
    pub fn is_discovered(&self, coord: &Coordinate) -> bool {
        self.discovered().iter().any(|word| word.covers(coord))
    }

    /// Compute summary numbers for display.
    pub fn info(&self) -> RoundInfo {
        let cells = self.grid.dimensions().total_size();
        RoundInfo {
            found_words: found_words(&self.grid).len(),
            min_words: cells / 4,
            max_words: cells,
            candidates: self.candidates.clone(),
        }
    }

    /// Start a selection at `coord`, dropping any selection in progress. If `coord` is
    /// off the board no new selection is started.
    pub fn begin(&mut self, coord: Coordinate) {
        self.selection.clear();
        if self.grid.dimensions().in_bounds(&coord) {
            self.selection.begin(coord);
        }
    }

    /// Grow the selection to `coord`. Returns false, leaving the selection unchanged,
    /// if there is no selection in progress or `coord` is off the board, not next to the
    /// last selected cell, or already selected.
    pub fn extend(&mut self, coord: Coordinate) -> bool {
        self.grid.dimensions().in_bounds(&coord) && self.selection.extend(coord)
    }

    /// Finish the selection and check it against the known words. A match is appended to
    /// the placed words, even if the same word was found before.
    pub fn end(&mut self) -> SelectionOutcome {
        let path = self.selection.end();
        if path.is_empty() {
            return SelectionOutcome::Empty;
        }
        match resolve(&self.grid, &path) {
            None => SelectionOutcome::Empty,
            Some(word) if is_winning_word(&word, &self.known) => {
                info!("found {}", word);
                let found = PlacedWord::new(word, path);
                self.placed.push(found.clone());
                SelectionOutcome::Found(found)
            }
            Some(word) => {
                debug!("{} is not a known word", word);
                SelectionOutcome::Miss(word)
            }
        }
    }
}

/// Owns the configuration and the current round.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: GameConfig,
    round: Option<Round>,
}

impl Session {
    /// Construct a session with no round in progress.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            round: None,
        }
    }

    /// The session's configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current round, if one has been started.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Mutable access to the current round, for driving selections.
    pub fn round_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }

    /// Load words from `source`, generate a new board and replace the current round
    /// with it. On error the current round is kept.
    pub fn start_round<W, R>(
        &mut self,
        source: &mut W,
        rng: &mut R,
    ) -> Result<&mut Round, RoundError>
    where
        W: WordSource + ?Sized,
        R: RandomSource + ?Sized,
    {
        let words = source.load_words()?;
        let dim = self.config.dimensions;
        let max_len = if self.config.fit_to_board {
            Some(dim.size())
        } else {
            None
        };
        let list = prepare_candidates(&words, max_len, self.config.max_candidates, rng);
        debug!("candidates: {}", list.candidates.join(", "));

        let board = BoardFiller::new(dim, self.config.strategy)
            .with_directions(self.config.directions)
            .fill(&list.candidates, rng);
        info!(
            "placed {} of {} candidate words on a {}x{} board",
            board.placed.len(),
            list.candidates.len(),
            dim.size(),
            dim.size()
        );

        Ok(self.round.insert(Round::new(board, list)))
    }
}
