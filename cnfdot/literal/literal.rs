use std::fmt::Display;

/// Polarity of a variable.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Copy, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl From<bool> for Polarity {
    fn from(item: bool) -> Self {
        if item {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}

impl std::ops::Not for Polarity {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }
}

/// Literal given by the name of its variable and [`Polarity`].
///
/// Variable names are opaque: two literals refer to the same variable
/// iff their names are byte-equal.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Literal {
    name: String,
    polarity: Polarity,
}

impl Literal {
    /// Create a new [`Literal`].
    #[must_use]
    pub fn new(name: &str, polarity: Polarity) -> Literal {
        Literal {
            name: name.to_owned(),
            polarity,
        }
    }

    /// Name of the variable.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Check whether `self` is the negation of `other`.
    #[must_use]
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.name == other.name && self.polarity == !other.polarity
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let polarity = if self.polarity == Polarity::Positive {
            ""
        } else {
            "'"
        };
        write!(f, "{}{}", self.name, polarity)
    }
}
