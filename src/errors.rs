/// Represents all recoverable error types that can occur in the chess core.
/// Used throughout the codebase for error handling and reporting.
///
/// Internal-consistency violations (a board slot disagreeing with a piece's
/// recorded square, a castling step that does not bisect evenly) are defects,
/// not errors, and fail fast with a panic instead of appearing here. The same
/// goes for addressing the board grid with an out-of-bounds square: coordinate
/// math that leaves the grid is an expected, filtered outcome, and handing
/// such a square to the grid anyway is the caller's defect, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    /// The provided algebraic notation is invalid or could not be parsed.
    /// Carries the offending text.
    InvalidNotation(String),
    /// A movement rule was violated: the move text parsed, but the acting
    /// piece cannot reach the target. Carries the rejected move text.
    IllegalMove(String),
}
