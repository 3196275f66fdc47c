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

//! Column descriptors used to lay out record builders and handlers.

use arrow_schema::{DataType, Field};
use derive_builder::Builder;

/// Immutable description of one logical column: name, data type and
/// nullability. The column's index is positional — it is the descriptor's
/// position within the slice handed to a record builder.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,
    /// Arrow data type of the column
    pub data_type: DataType,
    /// Whether the column admits nulls
    #[builder(default = "true")]
    pub nullable: bool,
}

impl ColumnDescriptor {
    /// Create a new descriptor builder
    pub fn builder() -> ColumnDescriptorBuilder {
        ColumnDescriptorBuilder::default()
    }

    /// Create a descriptor directly
    pub fn new<T: Into<String>>(name: T, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    /// The Arrow field this descriptor corresponds to.
    #[must_use]
    pub fn to_field(&self) -> Field {
        Field::new(&self.name, self.data_type.clone(), self.nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_nullable() {
        let desc = ColumnDescriptor::builder()
            .name("price")
            .data_type(DataType::Float64)
            .build()
            .expect("Failed to build descriptor");

        assert_eq!(desc.name, "price");
        assert!(desc.nullable);

        let field = desc.to_field();
        assert_eq!(field.name(), "price");
        assert_eq!(field.data_type(), &DataType::Float64);
        assert!(field.is_nullable());
    }

    #[test]
    fn test_explicit_non_nullable() {
        let desc = ColumnDescriptor::new("ts", DataType::Int64, false);
        assert!(!desc.to_field().is_nullable());
    }
}
