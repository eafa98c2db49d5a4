/// Clause progression for the restricted dialect. The parser only ever moves
/// forward through these, which is what enforces clause order and
/// at-most-once occurrence.
#[derive(Debug, Default, PartialEq, PartialOrd)]
pub enum Phase {
    #[default]
    Select = 0,
    From = 1,
    Where = 2,
    OrderBy = 3,
    LimitOffset = 4,
    Eof = 5,
}
