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
//! Laying a list of candidate words onto an empty grid and back-filling the rest.
//!
//! Two strategies are supported:
//!
//! [`FillStrategy::Greedy`] places each word at the first origin and direction that
//! fits, scanning coordinates in row-major order and directions in the order of
//! [`Direction::ALL`].
//!
//! [`FillStrategy::Exhaustive`] backtracks over every placement of every word and keeps
//! the assignment that places the most words, preferring the first one found on ties.
//! The search is exponential, so it is bounded by a [`SearchBudget`]. When the budget
//! runs out the best assignment seen so far is used instead, which may place fewer
//! words than the true maximum.
//!
//! In both cases words that cannot be placed are skipped, and every cell left empty is
//! filled with a random letter.
use std::time::{Duration, Instant};

use enumflags2::BitFlags;
use log::{debug, warn};

use crate::{
    board::{Direction, Grid, SquareDimensions},
    placement::{try_place, PlacedWord, Placement},
    random::{random_letter, RandomSource},
};

/// Limits on the exhaustive search.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SearchBudget {
    /// Maximum number of search nodes to visit, if any.
    pub max_nodes: Option<u64>,
    /// Maximum wall-clock time to search for, if any.
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    /// Node limit used by default.
    pub const DEFAULT_MAX_NODES: u64 = 1_000_000;

    /// A budget with no limits. The search always runs to completion.
    pub fn unbounded() -> Self {
        Self {
            max_nodes: None,
            time_limit: None,
        }
    }

    /// A budget that stops after visiting `max_nodes` nodes.
    pub fn nodes(max_nodes: u64) -> Self {
        Self {
            max_nodes: Some(max_nodes),
            time_limit: None,
        }
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::nodes(Self::DEFAULT_MAX_NODES)
    }
}

/// How words are chosen for placement.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FillStrategy {
    /// Place each word at its first fit, in input order.
    Greedy,
    /// Search for the assignment that places the most words.
    Exhaustive(SearchBudget),
}

impl Default for FillStrategy {
    fn default() -> Self {
        FillStrategy::Exhaustive(SearchBudget::default())
    }
}

/// Statistics about a layout.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FillReport {
    /// Number of words that could not be placed.
    pub skipped: usize,
    /// Number of exhaustive search nodes visited. Always 0 for the greedy strategy.
    pub nodes: u64,
    /// True if the exhaustive search stopped before exploring every branch.
    pub budget_exhausted: bool,
}

/// Words laid out on a grid, before any random letters are added.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Grid holding only the letters of the placed words.
    pub grid: Grid,
    /// Placements in the order they were made.
    pub placements: Vec<Placement>,
    /// Statistics about how the layout was found.
    pub report: FillReport,
}

/// A finished board: every cell holds a letter.
#[derive(Debug, Clone)]
pub struct FilledBoard {
    /// The full grid.
    pub grid: Grid,
    /// Words that were placed, in the order they were placed.
    pub placed: Vec<PlacedWord>,
    /// Statistics about how the layout was found.
    pub report: FillReport,
}

/// Places words onto grids of a fixed size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardFiller {
    dim: SquareDimensions,
    directions: BitFlags<Direction>,
    strategy: FillStrategy,
}

impl BoardFiller {
    /// Create a filler for grids of the given dimensions, allowing all directions.
    pub fn new(dim: SquareDimensions, strategy: FillStrategy) -> Self {
        Self {
            dim,
            directions: BitFlags::all(),
            strategy,
        }
    }

    /// Restrict the directions words may be laid out in.
    pub fn with_directions<B: Into<BitFlags<Direction>>>(mut self, directions: B) -> Self {
        self.directions = directions.into();
        self
    }

    /// Lay out `words` and fill the remaining cells with letters drawn from `rng`.
    pub fn fill<R: RandomSource + ?Sized>(&self, words: &[String], rng: &mut R) -> FilledBoard {
        let Layout {
            mut grid,
            placements,
            report,
        } = self.layout(words);
        let filled = grid.fill_empty(|| random_letter(rng));
        debug!("filled {} empty cells with random letters", filled);
        FilledBoard {
            grid,
            placed: placements.into_iter().map(PlacedWord::from).collect(),
            report,
        }
    }

    /// Lay out `words` on an empty grid without adding random letters.
    pub fn layout(&self, words: &[String]) -> Layout {
        let words: Vec<&str> = words
            .iter()
            .map(String::as_str)
            .filter(|word| !word.is_empty())
            .collect();
        match self.strategy {
            FillStrategy::Greedy => self.layout_greedy(&words),
            FillStrategy::Exhaustive(budget) => self.layout_exhaustive(&words, budget),
        }
    }

    fn layout_greedy(&self, words: &[&str]) -> Layout {
        let mut grid = Grid::new(self.dim);
        let mut placements = Vec::new();
        let mut report = FillReport::default();
        for &word in words {
            let first_fit = self.placements_of(&grid, word).next();
            match first_fit {
                Some(placement) => {
                    debug!("placed {} at {:?}", word, placement.start());
                    grid.commit(&placement);
                    placements.push(placement);
                }
                None => {
                    debug!("no room for {}, skipping", word);
                    report.skipped += 1;
                }
            }
        }
        Layout {
            grid,
            placements,
            report,
        }
    }

    fn layout_exhaustive(&self, words: &[&str], budget: SearchBudget) -> Layout {
        let mut search = Search {
            filler: self,
            words,
            budget,
            started: Instant::now(),
            nodes: 0,
            exhausted: false,
            best: Vec::new(),
        };
        let grid = Grid::new(self.dim);
        search.backtrack(0, &grid, &mut Vec::new());
        if search.exhausted {
            warn!(
                "placement search stopped after {} nodes, using best of {} words found so far",
                search.nodes,
                search.best.len()
            );
        }

        let mut grid = grid;
        for placement in &search.best {
            grid.commit(placement);
        }
        Layout {
            grid,
            report: FillReport {
                skipped: words.len() - search.best.len(),
                nodes: search.nodes,
                budget_exhausted: search.exhausted,
            },
            placements: search.best,
        }
    }

    /// Every legal placement of `word` on `grid`, coordinates in row-major order and
    /// directions in fixed order.
    fn placements_of<'a>(
        &'a self,
        grid: &'a Grid,
        word: &'a str,
    ) -> impl 'a + Iterator<Item = Placement> {
        let directions = self.directions;
        self.dim.coordinates().flat_map(move |origin| {
            Direction::iter(directions)
                .filter_map(move |dir| try_place(grid, word, origin, dir).ok())
        })
    }
}

/// State of the exhaustive backtracking search.
struct Search<'a> {
    filler: &'a BoardFiller,
    words: &'a [&'a str],
    budget: SearchBudget,
    started: Instant,
    nodes: u64,
    exhausted: bool,
    best: Vec<Placement>,
}

impl Search<'_> {
    fn out_of_budget(&self) -> bool {
        self.budget.max_nodes.map_or(false, |max| self.nodes >= max)
            || self
                .budget
                .time_limit
                .map_or(false, |limit| self.started.elapsed() >= limit)
    }

    /// Nothing can beat an assignment that placed every word.
    fn done(&self) -> bool {
        self.exhausted || self.best.len() == self.words.len()
    }

    fn record(&mut self, placed: &[Placement]) {
        if placed.len() > self.best.len() {
            self.best = placed.to_vec();
        }
    }

    fn backtrack(&mut self, idx: usize, grid: &Grid, placed: &mut Vec<Placement>) {
        if self.out_of_budget() {
            self.exhausted = true;
            self.record(placed);
            return;
        }
        self.nodes += 1;

        let words = self.words;
        let word = match words.get(idx) {
            Some(&word) => word,
            None => {
                self.record(placed);
                return;
            }
        };

        let mut placed_any = false;
        let filler = self.filler;
        for placement in filler.placements_of(grid, word) {
            placed_any = true;
            let mut branch = grid.clone();
            branch.commit(&placement);
            placed.push(placement);
            self.backtrack(idx + 1, &branch, placed);
            placed.pop();
            if self.done() {
                return;
            }
        }
        if !placed_any {
            self.backtrack(idx + 1, grid, placed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Coordinate, random::Sequence};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn read(grid: &Grid, placed: &PlacedWord) -> String {
        placed
            .positions()
            .iter()
            .map(|coord| grid.letter(coord).unwrap())
            .collect()
    }

    #[test]
    fn greedy_places_first_fit() {
        let filler = BoardFiller::new(SquareDimensions::new(4), FillStrategy::Greedy);
        let layout = filler.layout(&words(&["CAT", "DOG"]));
        // Down is tried first, so CAT lands in column 0 and DOG in column 1.
        assert_eq!(layout.grid.to_string(), "CD..\nAO..\nTG..\n....\n");
        assert_eq!(layout.report.skipped, 0);
        assert_eq!(layout.report.nodes, 0);
    }

    #[test]
    fn greedy_merges_shared_letters() {
        let filler = BoardFiller::new(SquareDimensions::new(4), FillStrategy::Greedy)
            .with_directions(Direction::Right | Direction::Down);
        let layout = filler.layout(&words(&["CAT", "CAR"]));
        assert_eq!(layout.placements.len(), 2);
        assert_eq!(layout.placements[0].direction(), Direction::Down);
        // CAR cannot go down from (0, 0) because of CAT, but it can go right and share
        // the C.
        assert_eq!(layout.placements[1].start(), Some(&Coordinate::new(0, 0)));
        assert_eq!(layout.placements[1].direction(), Direction::Right);
        assert_eq!(layout.grid.letter(Coordinate::new(0, 0)), Some('C'));
    }

    #[test]
    fn greedy_skips_words_without_room() {
        let filler = BoardFiller::new(SquareDimensions::new(3), FillStrategy::Greedy)
            .with_directions(Direction::Right);
        let layout = filler.layout(&words(&["ABC", "DEF", "GHI", "JKL", "MNOP"]));
        let placed: Vec<_> = layout.placements.iter().map(|p| p.word()).collect();
        assert_eq!(placed, vec!["ABC", "DEF", "GHI"]);
        assert_eq!(layout.report.skipped, 2);
    }

    #[test]
    fn exhaustive_beats_greedy() {
        let list = words(&["AB", "XYZ", "AQR", "BST"]);
        let dim = SquareDimensions::new(3);

        // Greedy puts AB down column 0, after which BST has nowhere to go.
        let greedy = BoardFiller::new(dim, FillStrategy::Greedy)
            .with_directions(Direction::Down | Direction::Right);
        let layout = greedy.layout(&list);
        assert_eq!(layout.placements.len(), 3);
        assert_eq!(layout.report.skipped, 1);

        let exhaustive =
            BoardFiller::new(dim, FillStrategy::Exhaustive(SearchBudget::unbounded()))
                .with_directions(Direction::Down | Direction::Right);
        let layout = exhaustive.layout(&list);
        assert_eq!(layout.placements.len(), 4);
        assert!(!layout.report.budget_exhausted);
        assert_eq!(layout.report.skipped, 0);
        assert_eq!(layout.grid.to_string(), "AQR\nBST\nXYZ\n");
    }

    #[test]
    fn exhaustive_budget_returns_best_so_far() {
        let filler = BoardFiller::new(
            SquareDimensions::new(4),
            FillStrategy::Exhaustive(SearchBudget::nodes(2)),
        );
        let layout = filler.layout(&words(&["CAT", "DOG", "EEL"]));
        assert!(layout.report.budget_exhausted);
        assert_eq!(layout.report.nodes, 2);
        // The branch in progress had placed CAT and DOG.
        assert_eq!(layout.placements.len(), 2);
        assert_eq!(layout.report.skipped, 1);
    }

    #[test]
    fn fill_leaves_no_empty_cells() {
        let filler = BoardFiller::new(SquareDimensions::new(4), FillStrategy::default());
        let board = filler.fill(&words(&["CAT", "DOG", "BIRD"]), &mut Sequence::new(vec![25]));
        assert!(board.grid.is_full());
        assert_eq!(board.placed.len(), 3);
        for placed in &board.placed {
            assert_eq!(read(&board.grid, placed), placed.word());
        }
        // Everything that isn't a placed word is Z.
        let z = board
            .grid
            .dimensions()
            .coordinates()
            .filter(|c| !board.placed.iter().any(|p| p.covers(c)))
            .all(|c| board.grid.letter(c) == Some('Z'));
        assert!(z);
    }

    #[test]
    fn empty_words_are_ignored() {
        let filler = BoardFiller::new(SquareDimensions::new(4), FillStrategy::Greedy);
        let layout = filler.layout(&words(&["", "CAT"]));
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.report.skipped, 0);
    }

    #[test]
    fn words_with_invalid_letters_are_skipped() {
        let list = words(&["d0g", "cat", "DOG"]);
        for &strategy in &[FillStrategy::Greedy, FillStrategy::default()] {
            let board = BoardFiller::new(SquareDimensions::new(4), strategy)
                .fill(&list, &mut Sequence::new(vec![25]));
            let placed: Vec<_> = board.placed.iter().map(|p| p.word()).collect();
            assert_eq!(placed, vec!["DOG"]);
            assert_eq!(board.report.skipped, 2);
            let all_upper = board
                .grid
                .dimensions()
                .coordinates()
                .all(|c| board.grid.letter(c).map_or(false, char::is_uppercase));
            assert!(all_upper, "{:?} wrote an invalid letter:\n{}", strategy, board.grid);
        }
    }

    #[test]
    fn exhaustive_time_limit_returns_best_so_far() {
        let list = words(&[
            "ABCD", "EFGH", "IJKL", "MNOP", "QRST", "UVWX", "YZAB", "CDEF", "GHIJ", "KLMN",
        ]);
        let budget = SearchBudget {
            max_nodes: None,
            time_limit: Some(Duration::from_nanos(1)),
        };
        let board = BoardFiller::new(SquareDimensions::new(4), FillStrategy::Exhaustive(budget))
            .fill(&list, &mut Sequence::zeros());
        assert!(board.report.budget_exhausted);
        assert_eq!(board.placed.len() + board.report.skipped, list.len());
        assert!(board.grid.is_full());
        for placed in &board.placed {
            assert_eq!(read(&board.grid, placed), placed.word());
        }
    }
}
