//! Property loading from descriptor files.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result, SchemaError};
use crate::model::Model;
use crate::tree::DescriptorTree;

use super::TrackProperties;

/// Load track properties from a TOML descriptor file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, fails schema
/// validation, or violates an extraction invariant.
///
/// # Example
///
/// ```rust,ignore
/// use continuous_track::load_properties;
///
/// let props = load_properties(&model, "track.toml")?;
/// ```
pub fn load_properties<'m, M, P>(model: &'m M, path: P) -> Result<TrackProperties<'m, M::Joint>>
where
    M: Model,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Schema(SchemaError::IoError(msg))
    })?;

    parse_properties(model, &content)
}

/// Parse track properties from TOML descriptor text.
///
/// # Errors
///
/// Returns an error if the text is invalid or fails validation.
pub fn parse_properties<'m, M: Model>(
    model: &'m M,
    content: &str,
) -> Result<TrackProperties<'m, M::Joint>> {
    let tree = DescriptorTree::parse(content)?;
    TrackProperties::from_tree(model, &tree)
}
