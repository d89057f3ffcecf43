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
use thiserror::Error;

use crate::source::WordSourceError;

/// Error returned when a round could not be started. The previous round, if any, is
/// left in place.
#[derive(Debug, Error)]
pub enum RoundError {
    /// The word list could not be loaded.
    #[error("could not start a round: {0}")]
    WordSource(#[from] WordSourceError),
}
