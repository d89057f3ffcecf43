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
//! Errors used when placing words onto the `Grid`.

use thiserror::Error;

/// Reason why a word could not be laid out from a given origin and direction.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One of the word's letters would land outside of the grid.
    #[error("the word runs off the grid")]
    OffGrid,
    /// A cell along the word already holds a different letter.
    #[error("the word conflicts with a letter already on the grid")]
    Conflict,
    /// The word contains something other than an uppercase letter.
    #[error("the word contains a character that is not an uppercase letter")]
    InvalidLetter,
}
