//! Type grammar of the source dialect.

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// A type as written in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeNode {
    /// A base type name, optionally parameterized: `VARCHAR(10)`,
    /// `DECIMAL(10,2)`, `BINARY`. `double_precision` marks the two-word
    /// `DOUBLE PRECISION` spelling.
    Base {
        name: String,
        double_precision: bool,
        parameters: Vec<TypeParameter>,
        location: Location,
    },
    /// `ARRAY<t>`
    Array {
        element: Box<TypeNode>,
        location: Location,
    },
    /// `MAP<k, v>`
    Map {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
        location: Location,
    },
}

impl TypeNode {
    pub fn location(&self) -> Location {
        match self {
            TypeNode::Base { location, .. }
            | TypeNode::Array { location, .. }
            | TypeNode::Map { location, .. } => *location,
        }
    }
}

/// A parameter of a parameterized type: an integer or a nested type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeParameter {
    Integer(String),
    Type(TypeNode),
}
