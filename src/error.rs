use std::fmt::Debug;

use thiserror::Error;

use crate::repr::GraphKind;

/// Errors reported by graph construction, algorithms and IO.
///
/// Labels are stored in their `Debug` rendering so that the error type does not depend on
/// the label type of the graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph kind tag was neither `"directed"` nor `"undirected"`
    #[error("Can't recognize the type of graph: {0:?}")]
    InvalidGraphKind(String),

    /// A label passed to an operation is not part of the graph
    #[error("Element {0} is not found in the graph")]
    NodeNotFound(String),

    /// Both endpoints exist, but `to` cannot be reached from `from`
    #[error("No path exists from {from} to {to}")]
    NoPathExists { from: String, to: String },

    /// An edge with negative weight was found by an algorithm requiring non-negative weights
    #[error("{operation} does not support the negative weight {weight} of edge {from} -> {to}")]
    NegativeWeightUnsupported {
        operation: &'static str,
        from: String,
        to: String,
        weight: String,
    },

    /// The distance between both endpoints is unbounded
    #[error("Distance from {from} to {to} is unbounded due to a negative cycle")]
    NegativeCycle { from: String, to: String },

    /// The operation is not defined for this kind of graph
    #[error("{operation} is not supported on {kind} graphs")]
    UnsupportedGraphKind {
        operation: &'static str,
        kind: GraphKind,
    },

    /// Source and sink of a flow network coincide
    #[error("Source and sink of a flow must differ, got {0} twice")]
    SourceIsSink(String),

    /// Textual input could not be parsed
    #[error("Malformed input in line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn node_not_found<T: Debug>(label: &T) -> Self {
        GraphError::NodeNotFound(format!("{label:?}"))
    }

    pub(crate) fn no_path<T: Debug>(from: &T, to: &T) -> Self {
        GraphError::NoPathExists {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn negative_cycle<T: Debug>(from: &T, to: &T) -> Self {
        GraphError::NegativeCycle {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn negative_weight<T: Debug, W: Debug>(
        operation: &'static str,
        from: &T,
        to: &T,
        weight: &W,
    ) -> Self {
        GraphError::NegativeWeightUnsupported {
            operation,
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight: format!("{weight:?}"),
        }
    }
}

/// Result type of all fallible operations of this crate
pub type Result<T> = std::result::Result<T, GraphError>;
