use crate::Node;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by graph construction and by the search strategies.
///
/// "No path between start and goal" is not an error, searches report it as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Start or goal is not part of the graph
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Graph or heuristic input that cannot be turned into the graph model
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A heuristic-guided strategy reached a node without an estimate
    #[error("no heuristic estimate for node {0}")]
    MissingHeuristic(Node),
}

impl Error {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedInput(msg.into())
    }
}
