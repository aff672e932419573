/// What a recursive insert tells its caller about the subtree it just touched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum InsertResult {
    /// The value was already present so nothing changed.
    Duplicate,
    /// A node was added but the subtree kept its height.
    Absorbed,
    /// A node was added and the subtree is one level taller.
    Grew,
}

/// What a recursive delete tells its caller about the subtree it just touched.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DeleteResult<T> {
    /// The key wasn't found so nothing was deleted.
    NotFound,
    /// The value was removed and the subtree kept its height.
    Removed(T),
    /// The value was removed and the subtree is one level shorter. The parent has to
    /// rebalance.
    Shrunk(T),
}

impl<T> DeleteResult<T> {
    pub(crate) fn into_value(self) -> Option<T> {
        match self {
            Self::NotFound => None,
            Self::Removed(value) | Self::Shrunk(value) => Some(value),
        }
    }
}
