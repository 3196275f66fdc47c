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

//! Typed column handlers: ingest dynamic values into Arrow builders and
//! scan chunked columns back out through a forward cursor.

use arrow_array::builder::{
    BinaryBuilder, BooleanBuilder, Float32Builder, Float64Builder, Int16Builder, Int32Builder,
    Int64Builder, Int8Builder, StringBuilder, UInt16Builder, UInt32Builder, UInt64Builder,
    UInt8Builder,
};
use arrow_array::cast::AsArray;
use arrow_array::types::{
    Float32Type, Float64Type, Int16Type, Int32Type, Int64Type, Int8Type, UInt16Type, UInt32Type,
    UInt64Type, UInt8Type,
};
use arrow_array::Array;
use arrow_schema::{DataType, Field};

use crate::column::ChunkedColumn;
use crate::descriptor::ColumnDescriptor;
use crate::record::RecordBuilder;
use crate::value::Value;
use crate::{error, Result};

/// One typed adapter per column, uniform across scalar types.
///
/// A handler has two independent lifecycles. On the builder side,
/// [`add`](ColumnHandler::add) accumulates values (nulls included, in row
/// order) and [`build`](ColumnHandler::build) bulk-flushes them into a
/// [`RecordBuilder`] at the handler's fixed column index, draining the
/// accumulation buffers so the handler can take the next batch. On the
/// scanner side, [`set_column`](ColumnHandler::set_column) binds a borrowed
/// [`ChunkedColumn`] and [`next`](ColumnHandler::next) /
/// [`value`](ColumnHandler::value) walk every chunk in order, one logical
/// row at a time.
///
/// A handler is single-threaded state; callers must serialize access and
/// must keep the bound column alive for the duration of a scan (the `'c`
/// lifetime enforces both).
pub trait ColumnHandler<'c> {
    /// Append one logical value to the accumulation buffer.
    ///
    /// Accepts the handler's native type, the types widenable to it without
    /// loss, `Value::Null`, and (through `Value`'s `Option` conversion) an
    /// absent optional. Anything else is rejected with
    /// [`Error::TypeMismatch`](crate::Error::TypeMismatch) and the buffer
    /// is left untouched.
    fn add(&mut self, value: Value) -> Result<()>;

    /// Flush the accumulated values and their validity mask into `builder`
    /// at this handler's column index, then drain the accumulation buffers.
    ///
    /// # Panics
    ///
    /// Panics if the builder's column at that index has a different data
    /// type; the caller owns the schema, so this is a programmer error.
    fn build(&mut self, builder: &mut RecordBuilder);

    /// Bind a column for scanning and rewind the cursor before its first
    /// row. The column is borrowed; it must outlive the scan.
    fn set_column(&mut self, column: &'c ChunkedColumn);

    /// Advance the cursor by one logical row, skipping empty chunks.
    ///
    /// Returns `false` once the column is exhausted (or if no column is
    /// bound); after that only [`reset`](ColumnHandler::reset) or
    /// [`set_column`](ColumnHandler::set_column) make the cursor valid
    /// again.
    fn next(&mut self) -> bool;

    /// Read the value at the cursor, or `Value::Null` where the storage
    /// marks the position invalid.
    ///
    /// # Panics
    ///
    /// Panics if called before the first successful
    /// [`next`](ColumnHandler::next) or with no column bound.
    fn value(&self) -> Value;

    /// Rewind the cursor before the first row of the first chunk. Leaves
    /// the accumulation buffers alone.
    fn reset(&mut self);

    /// The immutable Arrow field this handler was constructed with.
    fn arrow_field(&self) -> &Field;

    /// Zero value of the handler's native scalar type, for callers that
    /// pick a destination type before reading.
    fn scan_type(&self) -> Value;
}

// Cursor advance shared by every handler. `pos` starts at -1 ("before the
// first row"); empty chunks are stepped over until a non-empty one is found
// or the column runs out.
fn advance(chunk_index: &mut usize, pos: &mut isize, column: Option<&ChunkedColumn>) -> bool {
    let Some(column) = column else {
        return false;
    };
    *pos += 1;
    while *chunk_index < column.num_chunks() {
        if (*pos as usize) < column.chunk(*chunk_index).len() {
            return true;
        }
        *chunk_index += 1;
        *pos = 0;
    }
    false
}

// Generate a column handler for an Arrow primitive type. The last argument
// lists the Value variants widenable to the native type without loss.
macro_rules! primitive_handler {
    ($(#[$meta:meta])* $handler:ident, $native:ty, $arrow_type:ty, $builder:ty, $data_type:expr, $variant:ident, [$($widen:ident),*]) => {
        $(#[$meta])*
        pub struct $handler<'c> {
            field: Field,
            items: Vec<$native>,
            valid: Vec<bool>,
            index: usize,

            column: Option<&'c ChunkedColumn>,
            chunk_index: usize,
            pos: isize,
        }

        impl<'c> $handler<'c> {
            /// Create a handler for the named column at the given index.
            pub fn new<T: Into<String>>(name: T, index: usize, nullable: bool) -> Self {
                Self {
                    field: Field::new(name.into(), $data_type, nullable),
                    items: Vec::new(),
                    valid: Vec::new(),
                    index,
                    column: None,
                    chunk_index: 0,
                    pos: -1,
                }
            }
        }

        impl<'c> ColumnHandler<'c> for $handler<'c> {
            fn add(&mut self, value: Value) -> Result<()> {
                let slot = match value {
                    Value::Null => None,
                    Value::$variant(v) => Some(v),
                    $(Value::$widen(v) => Some(v as $native),)*
                    other => {
                        return error::TypeMismatchSnafu {
                            value: format!("{other:?}"),
                            found: other.type_name(),
                            expected: stringify!($native),
                        }
                        .fail();
                    }
                };
                match slot {
                    Some(v) => {
                        self.items.push(v);
                        self.valid.push(true);
                    }
                    None => {
                        self.items.push(<$native>::default());
                        self.valid.push(false);
                    }
                }
                Ok(())
            }

            fn build(&mut self, builder: &mut RecordBuilder) {
                builder
                    .field_builder::<$builder>(self.index)
                    .append_values(&self.items, &self.valid);
                self.items.clear();
                self.valid.clear();
            }

            fn set_column(&mut self, column: &'c ChunkedColumn) {
                self.column = Some(column);
                self.reset();
            }

            fn next(&mut self) -> bool {
                advance(&mut self.chunk_index, &mut self.pos, self.column)
            }

            fn value(&self) -> Value {
                let column = self.column.expect("value() called with no column bound");
                let pos = usize::try_from(self.pos).expect("value() called before next()");
                let chunk = column.chunk(self.chunk_index).as_primitive::<$arrow_type>();
                if chunk.is_null(pos) {
                    Value::Null
                } else {
                    Value::$variant(chunk.value(pos))
                }
            }

            fn reset(&mut self) {
                self.chunk_index = 0;
                self.pos = -1;
            }

            fn arrow_field(&self) -> &Field {
                &self.field
            }

            fn scan_type(&self) -> Value {
                Value::$variant(<$native>::default())
            }
        }
    };
}

primitive_handler!(
    /// Handler for `Float64` columns. Widens `f32` input.
    Float64Handler, f64, Float64Type, Float64Builder, DataType::Float64, Float64, [Float32]
);
primitive_handler!(
    /// Handler for `Float32` columns.
    Float32Handler, f32, Float32Type, Float32Builder, DataType::Float32, Float32, []
);
primitive_handler!(
    /// Handler for `Int64` columns. Widens `i32`, `i16` and `i8` input.
    Int64Handler, i64, Int64Type, Int64Builder, DataType::Int64, Int64, [Int32, Int16, Int8]
);
primitive_handler!(
    /// Handler for `Int32` columns. Widens `i16` and `i8` input.
    Int32Handler, i32, Int32Type, Int32Builder, DataType::Int32, Int32, [Int16, Int8]
);
primitive_handler!(
    /// Handler for `Int16` columns. Widens `i8` input.
    Int16Handler, i16, Int16Type, Int16Builder, DataType::Int16, Int16, [Int8]
);
primitive_handler!(
    /// Handler for `Int8` columns.
    Int8Handler, i8, Int8Type, Int8Builder, DataType::Int8, Int8, []
);
primitive_handler!(
    /// Handler for `UInt64` columns. Widens `u32`, `u16` and `u8` input.
    UInt64Handler, u64, UInt64Type, UInt64Builder, DataType::UInt64, Uint64, [Uint32, Uint16, Uint8]
);
primitive_handler!(
    /// Handler for `UInt32` columns. Widens `u16` and `u8` input.
    UInt32Handler, u32, UInt32Type, UInt32Builder, DataType::UInt32, Uint32, [Uint16, Uint8]
);
primitive_handler!(
    /// Handler for `UInt16` columns. Widens `u8` input.
    UInt16Handler, u16, UInt16Type, UInt16Builder, DataType::UInt16, Uint16, [Uint8]
);
primitive_handler!(
    /// Handler for `UInt8` columns.
    UInt8Handler, u8, UInt8Type, UInt8Builder, DataType::UInt8, Uint8, []
);

/// Handler for `Boolean` columns.
pub struct BooleanHandler<'c> {
    field: Field,
    items: Vec<bool>,
    valid: Vec<bool>,
    index: usize,

    column: Option<&'c ChunkedColumn>,
    chunk_index: usize,
    pos: isize,
}

impl<'c> BooleanHandler<'c> {
    /// Create a handler for the named column at the given index.
    pub fn new<T: Into<String>>(name: T, index: usize, nullable: bool) -> Self {
        Self {
            field: Field::new(name.into(), DataType::Boolean, nullable),
            items: Vec::new(),
            valid: Vec::new(),
            index,
            column: None,
            chunk_index: 0,
            pos: -1,
        }
    }
}

impl<'c> ColumnHandler<'c> for BooleanHandler<'c> {
    fn add(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => {
                self.items.push(false);
                self.valid.push(false);
            }
            Value::Boolean(v) => {
                self.items.push(v);
                self.valid.push(true);
            }
            other => {
                return error::TypeMismatchSnafu {
                    value: format!("{other:?}"),
                    found: other.type_name(),
                    expected: "bool",
                }
                .fail();
            }
        }
        Ok(())
    }

    fn build(&mut self, builder: &mut RecordBuilder) {
        let target = builder.field_builder::<BooleanBuilder>(self.index);
        for (item, valid) in self.items.drain(..).zip(self.valid.drain(..)) {
            if valid {
                target.append_value(item);
            } else {
                target.append_null();
            }
        }
    }

    fn set_column(&mut self, column: &'c ChunkedColumn) {
        self.column = Some(column);
        self.reset();
    }

    fn next(&mut self) -> bool {
        advance(&mut self.chunk_index, &mut self.pos, self.column)
    }

    fn value(&self) -> Value {
        let column = self.column.expect("value() called with no column bound");
        let pos = usize::try_from(self.pos).expect("value() called before next()");
        let chunk = column.chunk(self.chunk_index).as_boolean();
        if chunk.is_null(pos) {
            Value::Null
        } else {
            Value::Boolean(chunk.value(pos))
        }
    }

    fn reset(&mut self) {
        self.chunk_index = 0;
        self.pos = -1;
    }

    fn arrow_field(&self) -> &Field {
        &self.field
    }

    fn scan_type(&self) -> Value {
        Value::Boolean(false)
    }
}

/// Handler for `Utf8` columns.
pub struct StringHandler<'c> {
    field: Field,
    items: Vec<String>,
    valid: Vec<bool>,
    index: usize,

    column: Option<&'c ChunkedColumn>,
    chunk_index: usize,
    pos: isize,
}

impl<'c> StringHandler<'c> {
    /// Create a handler for the named column at the given index.
    pub fn new<T: Into<String>>(name: T, index: usize, nullable: bool) -> Self {
        Self {
            field: Field::new(name.into(), DataType::Utf8, nullable),
            items: Vec::new(),
            valid: Vec::new(),
            index,
            column: None,
            chunk_index: 0,
            pos: -1,
        }
    }
}

impl<'c> ColumnHandler<'c> for StringHandler<'c> {
    fn add(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => {
                self.items.push(String::new());
                self.valid.push(false);
            }
            Value::String(v) => {
                self.items.push(v);
                self.valid.push(true);
            }
            other => {
                return error::TypeMismatchSnafu {
                    value: format!("{other:?}"),
                    found: other.type_name(),
                    expected: "String",
                }
                .fail();
            }
        }
        Ok(())
    }

    fn build(&mut self, builder: &mut RecordBuilder) {
        let target = builder.field_builder::<StringBuilder>(self.index);
        for (item, valid) in self.items.drain(..).zip(self.valid.drain(..)) {
            if valid {
                target.append_value(item);
            } else {
                target.append_null();
            }
        }
    }

    fn set_column(&mut self, column: &'c ChunkedColumn) {
        self.column = Some(column);
        self.reset();
    }

    fn next(&mut self) -> bool {
        advance(&mut self.chunk_index, &mut self.pos, self.column)
    }

    fn value(&self) -> Value {
        let column = self.column.expect("value() called with no column bound");
        let pos = usize::try_from(self.pos).expect("value() called before next()");
        let chunk = column.chunk(self.chunk_index).as_string::<i32>();
        if chunk.is_null(pos) {
            Value::Null
        } else {
            Value::String(chunk.value(pos).to_string())
        }
    }

    fn reset(&mut self) {
        self.chunk_index = 0;
        self.pos = -1;
    }

    fn arrow_field(&self) -> &Field {
        &self.field
    }

    fn scan_type(&self) -> Value {
        Value::String(String::new())
    }
}

/// Handler for `Binary` columns.
pub struct BinaryHandler<'c> {
    field: Field,
    items: Vec<Vec<u8>>,
    valid: Vec<bool>,
    index: usize,

    column: Option<&'c ChunkedColumn>,
    chunk_index: usize,
    pos: isize,
}

impl<'c> BinaryHandler<'c> {
    /// Create a handler for the named column at the given index.
    pub fn new<T: Into<String>>(name: T, index: usize, nullable: bool) -> Self {
        Self {
            field: Field::new(name.into(), DataType::Binary, nullable),
            items: Vec::new(),
            valid: Vec::new(),
            index,
            column: None,
            chunk_index: 0,
            pos: -1,
        }
    }
}

impl<'c> ColumnHandler<'c> for BinaryHandler<'c> {
    fn add(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Null => {
                self.items.push(Vec::new());
                self.valid.push(false);
            }
            Value::Binary(v) => {
                self.items.push(v);
                self.valid.push(true);
            }
            other => {
                return error::TypeMismatchSnafu {
                    value: format!("{other:?}"),
                    found: other.type_name(),
                    expected: "Vec<u8>",
                }
                .fail();
            }
        }
        Ok(())
    }

    fn build(&mut self, builder: &mut RecordBuilder) {
        let target = builder.field_builder::<BinaryBuilder>(self.index);
        for (item, valid) in self.items.drain(..).zip(self.valid.drain(..)) {
            if valid {
                target.append_value(item);
            } else {
                target.append_null();
            }
        }
    }

    fn set_column(&mut self, column: &'c ChunkedColumn) {
        self.column = Some(column);
        self.reset();
    }

    fn next(&mut self) -> bool {
        advance(&mut self.chunk_index, &mut self.pos, self.column)
    }

    fn value(&self) -> Value {
        let column = self.column.expect("value() called with no column bound");
        let pos = usize::try_from(self.pos).expect("value() called before next()");
        let chunk = column.chunk(self.chunk_index).as_binary::<i32>();
        if chunk.is_null(pos) {
            Value::Null
        } else {
            Value::Binary(chunk.value(pos).to_vec())
        }
    }

    fn reset(&mut self) {
        self.chunk_index = 0;
        self.pos = -1;
    }

    fn arrow_field(&self) -> &Field {
        &self.field
    }

    fn scan_type(&self) -> Value {
        Value::Binary(Vec::new())
    }
}

/// Closed-set dispatch over every concrete handler type, so a caller can
/// hold one handler per column of a mixed-type record behind a single type.
pub enum HandlerEnum<'c> {
    Boolean(BooleanHandler<'c>),
    Int8(Int8Handler<'c>),
    Int16(Int16Handler<'c>),
    Int32(Int32Handler<'c>),
    Int64(Int64Handler<'c>),
    UInt8(UInt8Handler<'c>),
    UInt16(UInt16Handler<'c>),
    UInt32(UInt32Handler<'c>),
    UInt64(UInt64Handler<'c>),
    Float32(Float32Handler<'c>),
    Float64(Float64Handler<'c>),
    String(StringHandler<'c>),
    Binary(BinaryHandler<'c>),
}

macro_rules! delegate {
    ($self:expr, $h:pat => $body:expr) => {
        match $self {
            HandlerEnum::Boolean($h) => $body,
            HandlerEnum::Int8($h) => $body,
            HandlerEnum::Int16($h) => $body,
            HandlerEnum::Int32($h) => $body,
            HandlerEnum::Int64($h) => $body,
            HandlerEnum::UInt8($h) => $body,
            HandlerEnum::UInt16($h) => $body,
            HandlerEnum::UInt32($h) => $body,
            HandlerEnum::UInt64($h) => $body,
            HandlerEnum::Float32($h) => $body,
            HandlerEnum::Float64($h) => $body,
            HandlerEnum::String($h) => $body,
            HandlerEnum::Binary($h) => $body,
        }
    };
}

impl<'c> HandlerEnum<'c> {
    /// Create the handler matching a descriptor's data type, bound to the
    /// given column index.
    pub fn from_descriptor(descriptor: &ColumnDescriptor, index: usize) -> Result<Self> {
        let name = descriptor.name.clone();
        let nullable = descriptor.nullable;
        Ok(match descriptor.data_type {
            DataType::Boolean => HandlerEnum::Boolean(BooleanHandler::new(name, index, nullable)),
            DataType::Int8 => HandlerEnum::Int8(Int8Handler::new(name, index, nullable)),
            DataType::Int16 => HandlerEnum::Int16(Int16Handler::new(name, index, nullable)),
            DataType::Int32 => HandlerEnum::Int32(Int32Handler::new(name, index, nullable)),
            DataType::Int64 => HandlerEnum::Int64(Int64Handler::new(name, index, nullable)),
            DataType::UInt8 => HandlerEnum::UInt8(UInt8Handler::new(name, index, nullable)),
            DataType::UInt16 => HandlerEnum::UInt16(UInt16Handler::new(name, index, nullable)),
            DataType::UInt32 => HandlerEnum::UInt32(UInt32Handler::new(name, index, nullable)),
            DataType::UInt64 => HandlerEnum::UInt64(UInt64Handler::new(name, index, nullable)),
            DataType::Float32 => HandlerEnum::Float32(Float32Handler::new(name, index, nullable)),
            DataType::Float64 => HandlerEnum::Float64(Float64Handler::new(name, index, nullable)),
            DataType::Utf8 => HandlerEnum::String(StringHandler::new(name, index, nullable)),
            DataType::Binary => HandlerEnum::Binary(BinaryHandler::new(name, index, nullable)),
            ref other => {
                return error::UnsupportedDataTypeSnafu {
                    data_type: format!("{other:?}. Not supported"),
                }
                .fail();
            }
        })
    }
}

impl<'c> ColumnHandler<'c> for HandlerEnum<'c> {
    fn add(&mut self, value: Value) -> Result<()> {
        delegate!(self, h => h.add(value))
    }

    fn build(&mut self, builder: &mut RecordBuilder) {
        delegate!(self, h => h.build(builder))
    }

    fn set_column(&mut self, column: &'c ChunkedColumn) {
        delegate!(self, h => h.set_column(column))
    }

    fn next(&mut self) -> bool {
        delegate!(self, h => h.next())
    }

    fn value(&self) -> Value {
        delegate!(self, h => h.value())
    }

    fn reset(&mut self) {
        delegate!(self, h => h.reset())
    }

    fn arrow_field(&self) -> &Field {
        delegate!(self, h => h.arrow_field())
    }

    fn scan_type(&self) -> Value {
        delegate!(self, h => h.scan_type())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow_array::{Float64Array, Int64Array, StringArray};

    use super::*;

    #[test]
    fn test_add_keeps_buffers_in_parity() {
        let mut handler = Float64Handler::new("price", 0, true);
        handler.add(Value::Float64(3.14)).unwrap();
        assert_eq!(handler.items.len(), handler.valid.len());
        handler.add(Value::Null).unwrap();
        assert_eq!(handler.items.len(), handler.valid.len());
        handler.add(Value::from(Some(2.5_f32))).unwrap();
        assert_eq!(handler.items.len(), 3);
        assert_eq!(handler.valid.len(), 3);
        assert_eq!(handler.valid, vec![true, false, true]);
    }

    #[test]
    fn test_add_widens_without_loss() {
        let mut handler = Float64Handler::new("price", 0, true);
        handler.add(Value::Float32(2.5)).unwrap();
        assert_eq!(handler.items, vec![2.5_f64]);

        let mut handler = Int64Handler::new("count", 0, true);
        handler.add(Value::Int8(-128)).unwrap();
        handler.add(Value::Int16(i16::MAX)).unwrap();
        handler.add(Value::Int32(i32::MIN)).unwrap();
        assert_eq!(handler.items, vec![-128, i64::from(i16::MAX), i64::from(i32::MIN)]);
    }

    #[test]
    fn test_add_rejects_atomically() {
        let mut handler = Float64Handler::new("price", 0, true);
        handler.add(Value::Float64(1.0)).unwrap();

        let err = handler.add(Value::Boolean(true)).unwrap_err();
        assert!(err
            .to_string()
            .contains("Cannot convert Boolean(true) of type bool to f64"));
        assert_eq!(handler.items.len(), 1);
        assert_eq!(handler.valid.len(), 1);

        // Narrowing is not widening; i64 into an Int32 handler is rejected.
        let mut handler = Int32Handler::new("count", 0, true);
        assert!(handler.add(Value::Int64(1)).is_err());
        assert!(handler.items.is_empty());
    }

    #[test]
    fn test_absent_optional_is_null() {
        let mut handler = Float64Handler::new("price", 0, true);
        let absent: Option<f64> = None;
        handler.add(Value::from(absent)).unwrap();
        assert_eq!(handler.valid, vec![false]);
        assert_eq!(handler.items, vec![0.0]);
    }

    #[test]
    fn test_build_flushes_and_drains() {
        let columns = vec![ColumnDescriptor::new("price", DataType::Float64, true)];
        let mut builder = RecordBuilder::new(&columns).unwrap();

        let mut handler = Float64Handler::new("price", 0, true);
        handler.add(Value::Float64(3.14)).unwrap();
        handler.add(Value::Null).unwrap();
        handler.add(Value::Float32(2.5)).unwrap();
        handler.build(&mut builder);

        assert!(handler.items.is_empty());
        assert!(handler.valid.is_empty());

        let batch = builder.finish().unwrap();
        let prices = batch.column(0).as_primitive::<Float64Type>();
        assert_eq!(prices.value(0), 3.14);
        assert!(prices.is_null(1));
        assert_eq!(prices.value(2), 2.5);

        // The handler is reusable for the next batch.
        handler.add(Value::Float64(9.0)).unwrap();
        handler.build(&mut builder);
        let batch = builder.finish().unwrap();
        assert_eq!(batch.num_rows(), 1);
    }

    #[test]
    fn test_cursor_spans_chunks_and_skips_empty() {
        let column = ChunkedColumn::new(vec![
            Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0])),
            Arc::new(Float64Array::from(Vec::<f64>::new())),
            Arc::new(Float64Array::from(vec![4.0, 5.0])),
        ]);

        let mut handler = Float64Handler::new("price", 0, true);
        handler.set_column(&column);

        let mut seen = Vec::new();
        while handler.next() {
            seen.push(handler.value());
        }
        assert_eq!(
            seen,
            vec![
                Value::Float64(1.0),
                Value::Float64(2.0),
                Value::Float64(3.0),
                Value::Float64(4.0),
                Value::Float64(5.0),
            ]
        );
        assert!(!handler.next());
    }

    #[test]
    fn test_cursor_skips_leading_and_all_empty_chunks() {
        let column = ChunkedColumn::new(vec![
            Arc::new(Int64Array::from(Vec::<i64>::new())),
            Arc::new(Int64Array::from(vec![7])),
        ]);
        let mut handler = Int64Handler::new("count", 0, true);
        handler.set_column(&column);
        assert!(handler.next());
        assert_eq!(handler.value(), Value::Int64(7));
        assert!(!handler.next());

        let empty = ChunkedColumn::new(vec![
            Arc::new(Int64Array::from(Vec::<i64>::new())),
            Arc::new(Int64Array::from(Vec::<i64>::new())),
        ]);
        handler.set_column(&empty);
        assert!(!handler.next());
    }

    #[test]
    fn test_reset_reproduces_scan() {
        let column = ChunkedColumn::new(vec![
            Arc::new(StringArray::from(vec![Some("a"), None])),
            Arc::new(StringArray::from(vec![Some("b")])),
        ]);
        let mut handler = StringHandler::new("tag", 0, true);
        handler.set_column(&column);

        let mut first = Vec::new();
        while handler.next() {
            first.push(handler.value());
        }

        handler.reset();
        let mut second = Vec::new();
        while handler.next() {
            second.push(handler.value());
        }

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                Value::String("a".to_string()),
                Value::Null,
                Value::String("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_next_without_bound_column() {
        let mut handler = Float64Handler::new("price", 0, true);
        assert!(!handler.next());
    }

    #[test]
    fn test_metadata_accessors() {
        let handler = Float64Handler::new("price", 2, false);
        let field = handler.arrow_field();
        assert_eq!(field.name(), "price");
        assert_eq!(field.data_type(), &DataType::Float64);
        assert!(!field.is_nullable());
        assert_eq!(handler.scan_type(), Value::Float64(0.0));
        assert_eq!(handler.index, 2);
    }

    #[test]
    fn test_from_descriptor() {
        let desc = ColumnDescriptor::new("flag", DataType::Boolean, true);
        let mut handler = HandlerEnum::from_descriptor(&desc, 0).unwrap();
        handler.add(Value::Boolean(true)).unwrap();
        assert_eq!(handler.scan_type(), Value::Boolean(false));

        let nested = ColumnDescriptor::new(
            "nested",
            DataType::List(Arc::new(Field::new("item", DataType::Int32, true))),
            true,
        );
        assert!(HandlerEnum::from_descriptor(&nested, 1).is_err());
    }
}
