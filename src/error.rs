// Copyright 2023 Greptime Team
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

use snafu::{Location, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Cannot convert {value} of type {found} to {expected}"))]
    TypeMismatch {
        /// Debug rendering of the rejected value.
        value: String,
        /// Observed type of the rejected value.
        found: &'static str,
        /// Native type of the handler that rejected it.
        expected: &'static str,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Unsupported data type: {:?}", data_type))]
    UnsupportedDataType {
        data_type: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Failed to create Arrow RecordBatch"))]
    CreateRecordBatch {
        #[snafu(source)]
        error: arrow_schema::ArrowError,
        #[snafu(implicit)]
        location: Location,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
