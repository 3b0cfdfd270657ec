//! Canonical schema template, embedded and parsed once per process.

use std::sync::OnceLock;

use serde::Deserialize;
use toml::{Table, Value};

use crate::error::{Error, Result, SchemaError};

/// Schema definition shipped with the crate.
const SCHEMA_TOML: &str = include_str!("../../schema/track.schema.toml");

/// Keys reserved for rule metadata inside a schema definition.
const RESERVED_KEYS: [&str; 2] = ["arity", "kind"];

/// How often an element may appear under its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// Exactly once.
    #[default]
    One,
    /// One or more entries.
    OneOrMore,
    /// Zero or more entries.
    ZeroOrMore,
}

/// Scalar value classes the schema can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    /// Floating-point number (integer values widen).
    Real,
    /// Unsigned integer.
    Uint,
    /// String.
    Text,
}

/// What a schema node expects of the element it describes.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A scalar value of the given class.
    Scalar(ScalarKind),
    /// A nested element with its own described children.
    Branch(Vec<SchemaNode>),
    /// A sub-tree preserved verbatim, without further validation.
    Opaque,
}

/// One rule in the schema: a tagged element, how often it may appear,
/// and what shape it must have.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Element tag.
    pub tag: String,
    /// Allowed multiplicity under the parent element.
    pub arity: Arity,
    /// Required shape.
    pub kind: NodeKind,
}

/// Get the process-wide canonical track schema.
///
/// The embedded definition is parsed on first use and cached for the
/// process lifetime. A malformed embedded definition is a packaging
/// defect with no recovery path, so it aborts instead of returning an
/// error.
pub fn canonical_schema() -> &'static [SchemaNode] {
    static SCHEMA: OnceLock<Vec<SchemaNode>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        parse_schema(SCHEMA_TOML).expect("embedded track schema must be well-formed")
    })
}

/// Parse a schema definition from TOML text.
///
/// # Errors
///
/// Returns `SchemaError::ParseError` if the text is not valid TOML or
/// the rule structure is malformed.
pub fn parse_schema(text: &str) -> Result<Vec<SchemaNode>> {
    let doc: Table = toml::from_str(text).map_err(|e| parse_error(e.message()))?;
    parse_children(&doc)
}

fn parse_children(table: &Table) -> Result<Vec<SchemaNode>> {
    let mut nodes = Vec::with_capacity(table.len());
    for (tag, value) in table {
        if RESERVED_KEYS.contains(&tag.as_str()) {
            continue;
        }
        let Value::Table(body) = value else {
            return Err(parse_error(&format!(
                "schema node '{}' must be a table",
                tag
            )));
        };
        nodes.push(parse_node(tag, body)?);
    }
    Ok(nodes)
}

fn parse_node(tag: &str, body: &Table) -> Result<SchemaNode> {
    let arity = match body.get("arity") {
        None => Arity::default(),
        Some(value) => value
            .clone()
            .try_into::<Arity>()
            .map_err(|e| parse_error(e.message()))?,
    };

    let has_children = body
        .keys()
        .any(|key| !RESERVED_KEYS.contains(&key.as_str()));

    let kind = match body.get("kind") {
        Some(_) if has_children => {
            return Err(parse_error(&format!(
                "schema node '{}' cannot declare both a kind and children",
                tag
            )));
        }
        Some(value) if value.as_str() == Some("opaque") => NodeKind::Opaque,
        Some(value) => NodeKind::Scalar(
            value
                .clone()
                .try_into::<ScalarKind>()
                .map_err(|e| parse_error(e.message()))?,
        ),
        None if has_children => NodeKind::Branch(parse_children(body)?),
        None => {
            return Err(parse_error(&format!(
                "schema node '{}' must declare a kind or children",
                tag
            )));
        }
    };

    Ok(SchemaNode {
        tag: tag.into(),
        arity,
        kind,
    })
}

fn parse_error(msg: &str) -> Error {
    Error::Schema(SchemaError::ParseError(
        heapless::String::try_from(msg).unwrap_or_default(),
    ))
}
