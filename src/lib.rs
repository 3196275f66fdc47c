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

//! Typed column handlers bridging dynamic values and chunked Arrow columns.
//!
//! Each handler adapts one column of one scalar type in both directions:
//!
//! - **Ingest**: [`ColumnHandler::add`] accumulates [`Value`]s (nulls and
//!   losslessly-widenable numerics included) and [`ColumnHandler::build`]
//!   bulk-flushes them into a [`RecordBuilder`] at the handler's column
//!   index.
//! - **Scan**: [`ColumnHandler::set_column`] binds a borrowed
//!   [`ChunkedColumn`] and [`ColumnHandler::next`] /
//!   [`ColumnHandler::value`] iterate every chunk in order, one logical row
//!   at a time, hiding chunk boundaries from the caller.
//!
//! [`HandlerEnum`] dispatches over the full set of concrete handlers so a
//! caller can drive one handler per column of a mixed-type record batch
//! through a single type.

mod column;
mod descriptor;
mod error;
mod handler;
mod record;
mod value;

pub use column::ChunkedColumn;
pub use descriptor::{ColumnDescriptor, ColumnDescriptorBuilder};
pub use error::{Error, Result};
pub use handler::{
    BinaryHandler, BooleanHandler, ColumnHandler, Float32Handler, Float64Handler, HandlerEnum,
    Int16Handler, Int32Handler, Int64Handler, Int8Handler, StringHandler, UInt16Handler,
    UInt32Handler, UInt64Handler, UInt8Handler,
};
pub use record::RecordBuilder;
pub use value::Value;
