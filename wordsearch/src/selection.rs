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
//! Building a path of selected cells and checking whether it spells a word.
use std::collections::HashSet;

use crate::board::{Coordinate, Grid};

/// An ordered run of cells chosen by the player. Consecutive cells always touch
/// (including diagonally) and no cell appears twice.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SelectionPath {
    cells: Vec<Coordinate>,
    active: bool,
}

impl SelectionPath {
    /// Construct an empty, inactive path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new path at `coord`, discarding any previous one.
    pub fn begin(&mut self, coord: Coordinate) {
        self.cells.clear();
        self.cells.push(coord);
        self.active = true;
    }

    /// Append `coord` if a path is in progress, it touches the last cell and isn't
    /// already part of the path. Returns true if the path grew.
    pub fn extend(&mut self, coord: Coordinate) -> bool {
        if !self.active || self.cells.contains(&coord) {
            return false;
        }
        match self.cells.last() {
            Some(last) if last.is_adjacent(&coord) => {
                self.cells.push(coord);
                true
            }
            _ => false,
        }
    }

    /// Drop the path without finishing it.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.active = false;
    }

    /// Finish the path, returning its cells and leaving this path empty.
    pub fn end(&mut self) -> Vec<Coordinate> {
        self.active = false;
        std::mem::replace(&mut self.cells, Vec::new())
    }

    /// Whether a path is currently being built.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The cells selected so far.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Returns true if no cell is selected.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells selected.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Spell out the letters along `path`. Returns `None` if any cell is out of bounds or
/// empty.
pub fn resolve(grid: &Grid, path: &[Coordinate]) -> Option<String> {
    path.iter().map(|coord| grid.letter(coord)).collect()
}

/// Whether `word` is one of the known words. Matching is exact and case-sensitive.
pub fn is_winning_word(word: &str, known: &HashSet<String>) -> bool {
    known.contains(word)
}
