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

//! Multi-column record builder backed by one Arrow array builder per column.

use std::sync::Arc;

use arrow_array::builder::{
    ArrayBuilder, BinaryBuilder, BooleanBuilder, Float32Builder, Float64Builder, Int16Builder,
    Int32Builder, Int64Builder, Int8Builder, StringBuilder, UInt16Builder, UInt32Builder,
    UInt64Builder, UInt8Builder,
};
use arrow_array::{ArrayRef, RecordBatch};
use arrow_schema::{DataType, Schema, SchemaRef};
use snafu::ResultExt;

use crate::descriptor::ColumnDescriptor;
use crate::{error, Result};

/// Builds a [`RecordBatch`] column by column.
///
/// Holds one typed Arrow builder per column, addressed by index. Handlers
/// flush into it via [`RecordBuilder::field_builder`] and the caller turns
/// the accumulated columns into a batch with [`RecordBuilder::finish`].
pub struct RecordBuilder {
    schema: SchemaRef,
    builders: Vec<Box<dyn ArrayBuilder>>,
}

impl RecordBuilder {
    /// Create a builder for the given columns with default capacity.
    pub fn new(columns: &[ColumnDescriptor]) -> Result<Self> {
        Self::with_capacity(columns, 0)
    }

    /// Create a builder for the given columns, pre-allocating room for
    /// `capacity` rows in every column.
    pub fn with_capacity(columns: &[ColumnDescriptor], capacity: usize) -> Result<Self> {
        let fields = columns.iter().map(ColumnDescriptor::to_field);
        let schema = Arc::new(Schema::new(fields.collect::<Vec<_>>()));

        let builders: Result<Vec<Box<dyn ArrayBuilder>>> = columns
            .iter()
            .map(|col| create_array_builder(&col.data_type, capacity))
            .collect();

        Ok(Self {
            schema,
            builders: builders?,
        })
    }

    /// Get the schema
    #[must_use]
    pub fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    /// Number of columns
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.builders.len()
    }

    /// Number of rows appended to the column at `index` so far.
    #[must_use]
    pub fn column_len(&self, index: usize) -> usize {
        self.builders[index].len()
    }

    /// Typed access to the builder for the column at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or `T` does not match the
    /// column's data type. Both are programmer errors: the caller owns the
    /// schema and the handler layout.
    pub fn field_builder<T: ArrayBuilder>(&mut self, index: usize) -> &mut T {
        self.builders[index]
            .as_any_mut()
            .downcast_mut::<T>()
            .expect("field builder type does not match the column's data type")
    }

    /// Consume the accumulated columns into a single [`RecordBatch`].
    ///
    /// The internal builders are left empty and can accumulate the next
    /// batch.
    pub fn finish(&mut self) -> Result<RecordBatch> {
        let arrays: Vec<ArrayRef> = self.builders.iter_mut().map(|b| b.finish()).collect();
        RecordBatch::try_new(self.schema.clone(), arrays).context(error::CreateRecordBatchSnafu)
    }
}

// Helper to create a type-erased array builder for a column's data type.
fn create_array_builder(data_type: &DataType, capacity: usize) -> Result<Box<dyn ArrayBuilder>> {
    Ok(match data_type {
        DataType::Boolean => Box::new(BooleanBuilder::with_capacity(capacity)),
        DataType::Int8 => Box::new(Int8Builder::with_capacity(capacity)),
        DataType::Int16 => Box::new(Int16Builder::with_capacity(capacity)),
        DataType::Int32 => Box::new(Int32Builder::with_capacity(capacity)),
        DataType::Int64 => Box::new(Int64Builder::with_capacity(capacity)),
        DataType::UInt8 => Box::new(UInt8Builder::with_capacity(capacity)),
        DataType::UInt16 => Box::new(UInt16Builder::with_capacity(capacity)),
        DataType::UInt32 => Box::new(UInt32Builder::with_capacity(capacity)),
        DataType::UInt64 => Box::new(UInt64Builder::with_capacity(capacity)),
        DataType::Float32 => Box::new(Float32Builder::with_capacity(capacity)),
        DataType::Float64 => Box::new(Float64Builder::with_capacity(capacity)),
        DataType::Utf8 => Box::new(StringBuilder::with_capacity(capacity, capacity * 64)),
        DataType::Binary => Box::new(BinaryBuilder::with_capacity(capacity, capacity * 64)),
        other => {
            return error::UnsupportedDataTypeSnafu {
                data_type: format!("{other:?}. Not supported in RecordBuilder"),
            }
            .fail();
        }
    })
}
