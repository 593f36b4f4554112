/// An arithmetic operator, bracket or function symbol.
///
/// Each variant carries exactly one associated character used for both
/// recognition (character to variant) and display (variant to character).
/// The trigonometric variants are keyed on the first letter of their
/// keyword, so `s` stands for `sin`, `c` for `cos` and `t` for `tan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    Open,
    /// `)`
    Close,
    /// `s`, the first letter of `sin`.
    Sin,
    /// `c`, the first letter of `cos`.
    Cos,
    /// `t`, the first letter of `tan`.
    Tan,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the character symbol associated with this operator.
    ///
    /// # Returns
    /// The single character this operator is recognized and displayed by.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Open => '(',
            Self::Close => ')',
            Self::Sin => 's',
            Self::Cos => 'c',
            Self::Tan => 't',
            Self::Pow => '^',
        }
    }

    /// Tries to find the operator corresponding to the given character.
    ///
    /// # Parameters
    /// - `symbol`: A character to cast to an `Operator`.
    ///
    /// # Returns
    /// - `Some(Operator)`: The operator the character stands for.
    /// - `None`: If the character is not a recognized symbol.
    ///
    /// # Example
    /// ```
    /// use stacalc::evaluator::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('+'), Some(Operator::Add));
    /// assert_eq!(Operator::from_symbol('s'), Some(Operator::Sin));
    /// assert_eq!(Operator::from_symbol('9'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '(' => Some(Self::Open),
            ')' => Some(Self::Close),
            's' => Some(Self::Sin),
            'c' => Some(Self::Cos),
            't' => Some(Self::Tan),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Checks whether the given character belongs to the recognized symbol
    /// set.
    ///
    /// # Parameters
    /// - `symbol`: A character to test.
    ///
    /// # Returns
    /// `true` if the character stands for an operator, `false` otherwise.
    #[must_use]
    pub const fn is_operator(symbol: char) -> bool {
        Self::from_symbol(symbol).is_some()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
