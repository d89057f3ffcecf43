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
//! Checking where a word fits on a grid, and the records of words that were placed.
//!
//! [`try_place`] never touches the grid it is given; writing a placement is done
//! separately with [`Grid::commit`]. This lets callers probe many origins and
//! directions before deciding which one to keep.

use crate::board::{step, CannotPlaceReason, Coordinate, Direction, Grid};

/// A legal layout of a word on a particular grid: one in-bounds coordinate per letter,
/// advancing by `direction` from the first one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Placement {
    word: String,
    direction: Direction,
    positions: Vec<Coordinate>,
}

impl Placement {
    /// The word being placed.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Direction the word is laid out in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Coordinates of each letter of the word, in order.
    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }

    /// Coordinate of the first letter, or `None` for an empty word.
    pub fn start(&self) -> Option<&Coordinate> {
        self.positions.first()
    }
}

/// Check whether `word` can be laid out on `grid` starting at `origin` and advancing
/// along `direction`.
///
/// A cell may be reused if it already holds the same letter the word needs there.
/// Fails with [`CannotPlaceReason::InvalidLetter`] if the word has anything but
/// uppercase letters, with [`CannotPlaceReason::OffGrid`] as soon as a letter would land
/// outside the grid and with [`CannotPlaceReason::Conflict`] if an occupied cell holds a
/// different letter.
pub fn try_place(
    grid: &Grid,
    word: &str,
    origin: Coordinate,
    direction: Direction,
) -> Result<Placement, CannotPlaceReason> {
    if !word.chars().all(char::is_uppercase) {
        return Err(CannotPlaceReason::InvalidLetter);
    }
    let dim = grid.dimensions();
    let mut positions = Vec::with_capacity(word.len());
    for (i, letter) in word.chars().enumerate() {
        let coord = step(dim, origin, direction, i).ok_or(CannotPlaceReason::OffGrid)?;
        match grid[coord] {
            Some(existing) if existing != letter => return Err(CannotPlaceReason::Conflict),
            _ => positions.push(coord),
        }
    }
    Ok(Placement {
        word: word.to_owned(),
        direction,
        positions,
    })
}

/// A word on the board along with the cells it occupies. Produced by the filler for
/// every word it places, and by a successful selection.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PlacedWord {
    word: String,
    positions: Vec<Coordinate>,
}

impl PlacedWord {
    /// Construct a record of `word` occupying `positions`.
    pub fn new(word: String, positions: Vec<Coordinate>) -> Self {
        Self { word, positions }
    }

    /// The word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Coordinates of each letter, in order.
    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }

    /// Returns true if the word covers the given cell.
    pub fn covers(&self, coord: &Coordinate) -> bool {
        self.positions.contains(coord)
    }
}

impl From<Placement> for PlacedWord {
    fn from(placement: Placement) -> Self {
        Self {
            word: placement.word,
            positions: placement.positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareDimensions;

    #[test]
    fn fails_off_grid() {
        let grid = Grid::new(SquareDimensions::new(4));
        assert_eq!(
            try_place(&grid, "CAT", Coordinate::new(0, 2), Direction::Right),
            Err(CannotPlaceReason::OffGrid)
        );
        assert_eq!(
            try_place(&grid, "CAT", Coordinate::new(1, 0), Direction::Up),
            Err(CannotPlaceReason::OffGrid)
        );
        assert_eq!(
            try_place(&grid, "CAT", Coordinate::new(4, 0), Direction::Right),
            Err(CannotPlaceReason::OffGrid)
        );
    }

    #[test]
    fn fails_on_conflict() {
        let grid = Grid::from_rows(&["..X.", "....", "....", "...."]).unwrap();
        assert_eq!(
            try_place(&grid, "CAT", Coordinate::new(0, 0), Direction::Right),
            Err(CannotPlaceReason::Conflict)
        );
    }

    #[test]
    fn rejects_anything_but_uppercase_letters() {
        let grid = Grid::new(SquareDimensions::new(4));
        for word in &["cat", "Cat", "D0G", "A-B", "OX "] {
            assert_eq!(
                try_place(&grid, word, Coordinate::new(0, 0), Direction::Right),
                Err(CannotPlaceReason::InvalidLetter),
                "{:?} was accepted",
                word
            );
        }
        assert!(try_place(&grid, "ÇA", Coordinate::new(0, 0), Direction::Right).is_ok());
    }

    #[test]
    fn merges_matching_letters() {
        let mut grid = Grid::new(SquareDimensions::new(4));
        let cat = try_place(&grid, "CAT", Coordinate::new(0, 0), Direction::Right).unwrap();
        grid.commit(&cat);

        let car = try_place(&grid, "CAR", Coordinate::new(0, 0), Direction::Down).unwrap();
        assert_eq!(
            car.positions(),
            &[
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0)
            ]
        );
        grid.commit(&car);
        assert_eq!(grid.to_string(), "CAT.\nA...\nR...\n....\n");
    }

    #[test]
    fn try_place_does_not_mutate() {
        let grid = Grid::from_rows(&["C...", "....", "....", "...."]).unwrap();
        let before = grid.clone();
        let placement = try_place(&grid, "COD", Coordinate::new(0, 0), Direction::DownRight);
        assert!(placement.is_ok());
        assert_eq!(grid, before);
    }

    #[test]
    fn commit_is_idempotent() {
        let mut grid = Grid::new(SquareDimensions::new(4));
        let dog = try_place(&grid, "DOG", Coordinate::new(3, 3), Direction::UpLeft).unwrap();
        grid.commit(&dog);
        let once = grid.clone();
        grid.commit(&dog);
        assert_eq!(grid, once);
        assert_eq!(dog.start(), Some(&Coordinate::new(3, 3)));
        assert_eq!(grid.letter(Coordinate::new(1, 1)), Some('G'));
    }
}
