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
//! Word-search puzzles on a small square grid.
//!
//! Candidate words are laid out in any of 8 directions by a [`BoardFiller`]. Words may
//! cross wherever they share a letter, and cells left empty are filled with random
//! letters. Once a board is finished, [`found_words`] lists every string of 3 or more
//! letters that can be read off it in a straight line, and a [`Session`] tracks the
//! player's selection and checks it against the known words.
//!
//! [`BoardFiller`]: filler::BoardFiller
//! [`found_words`]: enumerate::found_words
//! [`Session`]: session::Session

pub mod board;
pub mod enumerate;
pub mod filler;
pub mod placement;
pub mod random;
pub mod selection;
pub mod session;
pub mod source;

/// Shortest word that counts, both for word lists and for strings read off the grid.
pub const MIN_WORD_LEN: usize = 3;
