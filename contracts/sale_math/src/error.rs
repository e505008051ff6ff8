#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    Overflow,
    Underflow,
    DivisionByZero,
    EmptyTiers,
    NonIncreasingCeiling,
    /// Window end lies before its start.
    InvalidWindow,
}
