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
//! Enumerating every string that can be read off a grid in a straight line.
use std::collections::BTreeSet;

use crate::{
    board::{step, Coordinate, Direction, Grid},
    MIN_WORD_LEN,
};

/// Every distinct string of [`MIN_WORD_LEN`] up to N letters that can be read from the
/// grid starting at any cell and going in any of the 8 directions.
///
/// Strings that would need to step off the grid, or cross an empty cell, are not
/// included. Words that were placed on purpose and ones that appear by accident are
/// treated the same.
pub fn found_words(grid: &Grid) -> BTreeSet<String> {
    found_words_between(grid, MIN_WORD_LEN, grid.dimensions().size())
}

/// Like [`found_words`], but for strings with lengths in `[min_len, max_len]`.
pub fn found_words_between(grid: &Grid, min_len: usize, max_len: usize) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for origin in grid.dimensions().coordinates() {
        for &dir in Direction::ALL {
            for len in min_len.max(1)..=max_len {
                match read_line(grid, origin, dir, len) {
                    Some(word) => {
                        found.insert(word);
                    }
                    // Longer reads in this direction will fail the same way.
                    None => break,
                }
            }
        }
    }
    found
}

/// Read `len` letters starting at `origin` along `direction`. Returns `None` if any of
/// them is off the grid or empty.
pub fn read_line(
    grid: &Grid,
    origin: Coordinate,
    direction: Direction,
    len: usize,
) -> Option<String> {
    let dim = grid.dimensions();
    (0..len)
        .map(|i| step(dim, origin, direction, i).and_then(|coord| grid.letter(coord)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_every_direction() {
        let grid = Grid::from_rows(&["CAT", "...", "..."]).unwrap();
        let found = found_words(&grid);
        let expected: BTreeSet<String> = vec!["CAT".to_owned(), "TAC".to_owned()]
            .into_iter()
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn lengths_stay_in_range() {
        let grid = Grid::from_rows(&["ABCD", "EFGH", "IJKL", "MNOP"]).unwrap();
        let found = found_words(&grid);
        assert!(found.iter().all(|w| w.len() >= 3 && w.len() <= 4));
        assert!(found.contains("ABCD"));
        assert!(found.contains("PKF"));
        assert!(found.contains("MJGD"));
        assert!(found.contains("DHL"));
        assert!(!found.contains("AB"));
        assert!(!found.contains("ABCDE"));
        // Each of the 10 lines of length 4 yields 2 strings of length 4 and 4 of length
        // 3 across both directions, plus the 4 short diagonals of length 3 read both
        // ways. All letters are distinct so nothing collapses.
        assert_eq!(found.len(), 10 * 6 + 4 * 2);
    }

    #[test]
    fn duplicates_collapse() {
        let grid = Grid::from_rows(&["AAA", "AAA", "AAA"]).unwrap();
        let found = found_words(&grid);
        assert_eq!(found.len(), 1);
        assert!(found.contains("AAA"));
    }

    #[test]
    fn idempotent() {
        let grid = Grid::from_rows(&["DOGX", "CATY", "QRSZ", "MNOP"]).unwrap();
        assert_eq!(found_words(&grid), found_words(&grid));
    }

    #[test]
    fn read_line_stops_at_edge() {
        let grid = Grid::from_rows(&["DOG", "...", "..."]).unwrap();
        assert_eq!(
            read_line(&grid, Coordinate::new(0, 2), Direction::Left, 3),
            Some("GOD".to_owned())
        );
        assert_eq!(
            read_line(&grid, Coordinate::new(0, 2), Direction::Right, 1),
            Some("G".to_owned())
        );
        assert_eq!(read_line(&grid, Coordinate::new(0, 2), Direction::Right, 2), None);
        assert_eq!(read_line(&grid, Coordinate::new(0, 0), Direction::Down, 2), None);
    }
}
