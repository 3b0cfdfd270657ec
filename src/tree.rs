//! Generic descriptor tree over TOML documents.
//!
//! A [`DescriptorTree`] owns one parsed document; [`Node`] is a
//! borrowed view of one element inside it. Nodes carry the dotted path
//! from the document root so every failure names the element it refers
//! to. Accessors assume schema-validated input: a missing required
//! element still reports a typed error rather than panicking, it just
//! should not happen after validation.

use core::fmt::Write as _;

use toml::{Table, Value};

use crate::error::{ElementPath, Error, Result, SchemaError};

/// Hierarchical configuration tree backed by a TOML document.
///
/// `Clone` performs a deep copy of the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorTree {
    doc: Table,
}

impl DescriptorTree {
    /// Parse a tree from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ParseError` if the text is not valid TOML.
    pub fn parse(text: &str) -> Result<Self> {
        let doc: Table = toml::from_str(text).map_err(|e| {
            let msg = heapless::String::try_from(e.message()).unwrap_or_default();
            Error::Schema(SchemaError::ParseError(msg))
        })?;
        Ok(Self { doc })
    }

    /// Build a tree from an already-parsed table.
    pub(crate) fn from_table(doc: Table) -> Self {
        Self { doc }
    }

    /// Serialize back to canonical TOML text.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ParseError` if the document cannot be
    /// represented as TOML text.
    pub fn to_text(&self) -> Result<String> {
        toml::to_string(&self.doc).map_err(|e| {
            let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
            Error::Schema(SchemaError::ParseError(msg))
        })
    }

    /// Borrowed view of the document root.
    pub fn root(&self) -> Node<'_> {
        Node {
            table: &self.doc,
            path: ElementPath::new(),
        }
    }

    /// Raw table access.
    pub fn as_table(&self) -> &Table {
        &self.doc
    }

    /// Mutable raw table access.
    ///
    /// Consumers adjust cloned opaque sub-trees through this, e.g. to
    /// write placement poses before handing shapes to the engine.
    pub fn as_table_mut(&mut self) -> &mut Table {
        &mut self.doc
    }
}

/// Borrowed view of one element in a [`DescriptorTree`].
#[derive(Debug, Clone)]
pub struct Node<'a> {
    table: &'a Table,
    path: ElementPath,
}

impl<'a> Node<'a> {
    /// Dotted path of this element from the document root.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Path of a child element, for error attribution.
    pub(crate) fn tag_path(&self, tag: &str) -> ElementPath {
        join_path(self.path.as_str(), tag)
    }

    fn entry_path(&self, tag: &str, index: usize) -> ElementPath {
        indexed_path(self.path.as_str(), tag, index)
    }

    fn get(&self, tag: &str) -> Result<&'a Value> {
        self.table.get(tag).ok_or_else(|| {
            Error::Schema(SchemaError::MissingElement {
                path: self.tag_path(tag),
            })
        })
    }

    /// Required single child element.
    pub fn child(&self, tag: &str) -> Result<Node<'a>> {
        match self.get(tag)? {
            Value::Table(t) => Ok(Node {
                table: t,
                path: self.tag_path(tag),
            }),
            other => Err(type_mismatch(self.tag_path(tag), "element", other)),
        }
    }

    /// Repeated child elements sharing one tag, in document order.
    ///
    /// A missing tag yields an empty list; a single table counts as a
    /// one-entry list.
    pub fn children(&self, tag: &str) -> Result<Vec<Node<'a>>> {
        let value = match self.table.get(tag) {
            None => return Ok(Vec::new()),
            Some(v) => v,
        };
        match value {
            Value::Table(t) => Ok(vec![Node {
                table: t,
                path: self.entry_path(tag, 0),
            }]),
            Value::Array(entries) => entries
                .iter()
                .enumerate()
                .map(|(i, entry)| match entry {
                    Value::Table(t) => Ok(Node {
                        table: t,
                        path: self.entry_path(tag, i),
                    }),
                    other => Err(type_mismatch(self.entry_path(tag, i), "element", other)),
                })
                .collect(),
            other => Err(type_mismatch(self.tag_path(tag), "element list", other)),
        }
    }

    /// Required string scalar.
    pub fn text(&self, tag: &str) -> Result<&'a str> {
        match self.get(tag)? {
            Value::String(s) => Ok(s.as_str()),
            other => Err(type_mismatch(self.tag_path(tag), "string", other)),
        }
    }

    /// Required floating-point scalar. Integer values widen.
    pub fn real(&self, tag: &str) -> Result<f64> {
        match self.get(tag)? {
            Value::Float(v) => Ok(*v),
            Value::Integer(v) => Ok(*v as f64),
            other => Err(type_mismatch(
                self.tag_path(tag),
                "floating-point number",
                other,
            )),
        }
    }

    /// Required unsigned integer scalar.
    pub fn uint(&self, tag: &str) -> Result<u64> {
        match self.get(tag)? {
            Value::Integer(v) if *v >= 0 => Ok(*v as u64),
            Value::Integer(_) => Err(Error::Schema(SchemaError::TypeMismatch {
                path: self.tag_path(tag),
                expected: "unsigned integer",
                found: "negative integer",
            })),
            other => Err(type_mismatch(self.tag_path(tag), "unsigned integer", other)),
        }
    }

    /// Deep copy of this element as an independent tree.
    pub fn to_tree(&self) -> DescriptorTree {
        DescriptorTree {
            doc: self.table.clone(),
        }
    }
}

/// Descriptor value class name, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Float(_) => "floating-point number",
        Value::Boolean(_) => "boolean",
        Value::Datetime(_) => "datetime",
        Value::Array(_) => "array",
        Value::Table(_) => "element",
    }
}

pub(crate) fn type_mismatch(path: ElementPath, expected: &'static str, found: &Value) -> Error {
    Error::Schema(SchemaError::TypeMismatch {
        path,
        expected,
        found: value_kind(found),
    })
}

pub(crate) fn join_path(parent: &str, tag: &str) -> ElementPath {
    let mut path = ElementPath::new();
    if parent.is_empty() {
        let _ = path.push_str(tag);
    } else {
        let _ = write!(path, "{}.{}", parent, tag);
    }
    path
}

pub(crate) fn indexed_path(parent: &str, tag: &str, index: usize) -> ElementPath {
    let mut path = join_path(parent, tag);
    let _ = write!(path, "[{}]", index);
    path
}
