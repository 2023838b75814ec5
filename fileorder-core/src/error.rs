/// Invalid input handed to the planner. Any of these would otherwise lead to
/// a plan with colliding renames.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Two siblings share the same name.
    #[error("invalid sibling set: duplicate name '{0}'")]
    DuplicateName(String),

    /// The same entry appears twice.
    #[error("invalid sibling set: entry '{0}' listed more than once")]
    DuplicateEntry(String),

    /// The desired order does not contain exactly the original entries.
    #[error("invalid order: {0}")]
    NotAPermutation(String),

    /// Two entries would end up with the same name.
    #[error("name collision: more than one entry would be named '{0}'")]
    NameCollision(String),

    /// An entry would be renamed to an empty name.
    #[error("invalid rename: '{0}' would get an empty name")]
    EmptyName(String),

    /// Starting index plus position does not fit in a prefix.
    #[error("invalid convention: index overflow at position {0}")]
    IndexOverflow(usize),

    /// A move refers to a position outside the list.
    #[error("invalid position {position}: only {len} entries")]
    PositionOutOfRange { position: usize, len: usize },

    /// A name given in an order is not one of the siblings.
    #[error("entry not found: '{0}'")]
    UnknownEntry(String),
}
