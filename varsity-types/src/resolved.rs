use crate::SourceKey;

/// Outcome of a chain resolution.
///
/// `Unavailable` is a first-class answer, not an error: callers are expected
/// to render an explicit "data unavailable" state when a whole chain is
/// exhausted. It is distinct from `Data` holding an empty-but-valid
/// collection (e.g. a week with no completed games).
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    /// The chain produced data; `source` identifies the winning adapter.
    Data {
        /// Key of the source that served this result.
        source: SourceKey,
        /// The normalized payload.
        data: T,
    },
    /// Every source in the chain failed or returned nothing usable.
    Unavailable,
}

impl<T> Resolved<T> {
    /// True when the chain was exhausted without data.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// Borrow the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Data { data, .. } => Some(data),
            Self::Unavailable => None,
        }
    }

    /// Consume into the payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data { data, .. } => Some(data),
            Self::Unavailable => None,
        }
    }

    /// Key of the source that served the data, if any.
    #[must_use]
    pub const fn source(&self) -> Option<SourceKey> {
        match self {
            Self::Data { source, .. } => Some(*source),
            Self::Unavailable => None,
        }
    }
}
