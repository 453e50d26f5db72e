//! Type-signature rendering for the target dialect.

use crate::source::types::{TypeNode, TypeParameter};

/// Render a source type as canonical target type-signature text.
///
/// Base names pass through verbatim except the two renames the target
/// requires: `DOUBLE PRECISION` becomes `DOUBLE` and `BINARY` becomes
/// `varbinary`. Array and map types recurse.
pub fn type_signature(node: &TypeNode) -> String {
    match node {
        TypeNode::Base {
            name,
            double_precision,
            parameters,
            ..
        } => {
            let mut signature = if *double_precision {
                "DOUBLE".to_string()
            } else if name.eq_ignore_ascii_case("binary") {
                "varbinary".to_string()
            } else {
                name.clone()
            };
            if !parameters.is_empty() {
                let rendered = parameters
                    .iter()
                    .map(|parameter| match parameter {
                        TypeParameter::Integer(value) => value.clone(),
                        TypeParameter::Type(inner) => type_signature(inner),
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                signature.push('(');
                signature.push_str(&rendered);
                signature.push(')');
            }
            signature
        }
        TypeNode::Array { element, .. } => format!("ARRAY({})", type_signature(element)),
        TypeNode::Map { key, value, .. } => {
            format!("MAP({},{})", type_signature(key), type_signature(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use pretty_assertions::assert_eq;

    fn base(name: &str) -> TypeNode {
        TypeNode::Base {
            name: name.to_string(),
            double_precision: false,
            parameters: vec![],
            location: Location::new(1, 0),
        }
    }

    #[test]
    fn binary_renames_to_varbinary() {
        assert_eq!(type_signature(&base("BINARY")), "varbinary");
        assert_eq!(type_signature(&base("binary")), "varbinary");
    }

    #[test]
    fn double_precision_renames_to_double() {
        let node = TypeNode::Base {
            name: "DOUBLEPRECISION".to_string(),
            double_precision: true,
            parameters: vec![],
            location: Location::new(1, 0),
        };
        assert_eq!(type_signature(&node), "DOUBLE");
    }

    #[test]
    fn parameterized_and_nested_types_render() {
        let decimal = TypeNode::Base {
            name: "DECIMAL".to_string(),
            double_precision: false,
            parameters: vec![
                TypeParameter::Integer("10".to_string()),
                TypeParameter::Integer("2".to_string()),
            ],
            location: Location::new(1, 0),
        };
        assert_eq!(type_signature(&decimal), "DECIMAL(10,2)");

        let map = TypeNode::Map {
            key: Box::new(base("VARCHAR")),
            value: Box::new(TypeNode::Array {
                element: Box::new(base("INT")),
                location: Location::new(1, 0),
            }),
            location: Location::new(1, 0),
        };
        assert_eq!(type_signature(&map), "MAP(VARCHAR,ARRAY(INT))");
    }
}
