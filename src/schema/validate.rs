//! Schema walk over an input descriptor tree.
//!
//! One pass checks required-element presence, scalar value classes,
//! and multiplicity, and materializes a normalized copy of the input:
//! integer-valued reals widen to floats and a single repeated entry
//! normalizes to a one-entry list. Extractors can therefore read every
//! required field without existence checks.

use toml::{Table, Value};

use crate::error::{ElementPath, Error, Result, SchemaError};
use crate::tree::{indexed_path, join_path, type_mismatch, DescriptorTree};

use super::template::{canonical_schema, Arity, NodeKind, ScalarKind, SchemaNode};

/// Validate an input descriptor against the canonical track schema.
///
/// # Errors
///
/// Returns a `SchemaError` naming the offending element on any
/// structural or type mismatch.
pub fn validate(input: &DescriptorTree) -> Result<DescriptorTree> {
    validate_against(canonical_schema(), input)
}

/// Validate an input descriptor against an explicit rule set.
pub fn validate_against(schema: &[SchemaNode], input: &DescriptorTree) -> Result<DescriptorTree> {
    let root = validate_children(schema, input.as_table(), "")?;
    Ok(DescriptorTree::from_table(root))
}

fn validate_children(schema: &[SchemaNode], input: &Table, path: &str) -> Result<Table> {
    // elements the schema does not describe are rejected outright
    for tag in input.keys() {
        if !schema.iter().any(|node| node.tag == *tag) {
            return Err(Error::Schema(SchemaError::UnknownElement {
                path: join_path(path, tag),
            }));
        }
    }

    let mut out = Table::new();
    for node in schema {
        match node.arity {
            Arity::One => {
                let value = input.get(&node.tag).ok_or_else(|| {
                    Error::Schema(SchemaError::MissingElement {
                        path: join_path(path, &node.tag),
                    })
                })?;
                let checked = validate_value(node, value, join_path(path, &node.tag))?;
                out.insert(node.tag.clone(), checked);
            }
            Arity::OneOrMore | Arity::ZeroOrMore => {
                let entries = collect_entries(input.get(&node.tag), path, node)?;
                if entries.is_empty() {
                    if node.arity == Arity::OneOrMore {
                        return Err(Error::Schema(SchemaError::MissingElement {
                            path: join_path(path, &node.tag),
                        }));
                    }
                    // zero-or-more and absent: leave the tag out entirely
                    continue;
                }
                let mut checked = Vec::with_capacity(entries.len());
                for (index, entry) in entries.iter().enumerate() {
                    let entry_path = indexed_path(path, &node.tag, index);
                    checked.push(validate_value(node, entry, entry_path)?);
                }
                out.insert(node.tag.clone(), Value::Array(checked));
            }
        }
    }
    Ok(out)
}

/// Gather the entries of a repeated element, accepting a single table
/// as a one-entry list.
fn collect_entries<'a>(
    value: Option<&'a Value>,
    path: &str,
    node: &SchemaNode,
) -> Result<Vec<&'a Value>> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::Array(entries)) => {
            if entries.is_empty() && node.arity == Arity::OneOrMore {
                return Err(Error::Schema(SchemaError::EmptySequence {
                    path: join_path(path, &node.tag),
                }));
            }
            Ok(entries.iter().collect())
        }
        Some(single @ Value::Table(_)) => Ok(vec![single]),
        Some(other) => Err(type_mismatch(
            join_path(path, &node.tag),
            "element list",
            other,
        )),
    }
}

fn validate_value(node: &SchemaNode, value: &Value, path: ElementPath) -> Result<Value> {
    match &node.kind {
        NodeKind::Scalar(ScalarKind::Real) => match value {
            Value::Float(v) => Ok(Value::Float(*v)),
            Value::Integer(v) => Ok(Value::Float(*v as f64)),
            other => Err(type_mismatch(path, "floating-point number", other)),
        },
        NodeKind::Scalar(ScalarKind::Uint) => match value {
            Value::Integer(v) if *v >= 0 => Ok(Value::Integer(*v)),
            Value::Integer(_) => Err(Error::Schema(SchemaError::TypeMismatch {
                path,
                expected: "unsigned integer",
                found: "negative integer",
            })),
            other => Err(type_mismatch(path, "unsigned integer", other)),
        },
        NodeKind::Scalar(ScalarKind::Text) => match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            other => Err(type_mismatch(path, "string", other)),
        },
        NodeKind::Branch(children) => match value {
            Value::Table(table) => Ok(Value::Table(validate_children(
                children,
                table,
                path.as_str(),
            )?)),
            other => Err(type_mismatch(path, "element", other)),
        },
        // deep copy, contents deliberately not inspected
        NodeKind::Opaque => match value {
            Value::Table(table) => Ok(Value::Table(table.clone())),
            other => Err(type_mismatch(path, "element", other)),
        },
    }
}
