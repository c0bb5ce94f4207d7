/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An application whose operands are all constants was replaced by its value.
    ///
    /// `2 3 + = 5`
    FoldConstant,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `a-0 = a`
    SubtractZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,
}
