/// Represents the errors a bounded traversal can fail with.
///
/// Unsupported model shapes are deliberately **not** represented here:
/// randomizing a model that exposes nothing randomizable is a defined
/// no-op, not a failure.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A traversal was asked to visit elements past the end of its target:
    /// `required` indexes beyond the `available` extent.
    ///
    /// Raised before the offending access. Elements rewritten earlier in
    /// the same call keep their new values (traversals are not
    /// transactional).
    OutOfRange { required: usize, available: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}
