//! Pattern section extraction.

use crate::error::{ConstraintError, Error, Result};
use crate::tree::{DescriptorTree, Node};

/// One repeatable unit of belt geometry.
///
/// Collision and visual sub-trees are deep copies of the configuration
/// input, preserved verbatim for the downstream belt composer. Either
/// list may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternElement {
    /// Opaque collision shape sub-trees, in document order.
    pub collisions: Vec<DescriptorTree>,
    /// Opaque visual shape sub-trees, in document order.
    pub visuals: Vec<DescriptorTree>,
}

/// Repeating belt geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// How many elements make up one full round of the belt. May
    /// differ from the catalog size; the catalog tiles to fill a
    /// round.
    pub elements_per_round: usize,
    /// Element catalog, in document order. The schema guarantees at
    /// least one entry.
    pub elements: Vec<PatternElement>,
}

pub(crate) fn extract(node: &Node<'_>) -> Result<Pattern> {
    let elements_per_round = node.uint("elements_per_round")? as usize;
    if elements_per_round == 0 {
        return Err(Error::Constraint(ConstraintError::ZeroElementsPerRound {
            path: node.tag_path("elements_per_round"),
        }));
    }

    let mut elements = Vec::new();
    for element in node.children("element")? {
        let collisions = element
            .children("collision")?
            .into_iter()
            .map(|n| n.to_tree())
            .collect();
        let visuals = element
            .children("visual")?
            .into_iter()
            .map(|n| n.to_tree())
            .collect();
        elements.push(PatternElement {
            collisions,
            visuals,
        });
    }

    Ok(Pattern {
        elements_per_round,
        elements,
    })
}
