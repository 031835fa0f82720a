use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Inference rules of propositional System LK without cut and contraction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Rule {
    // structural rules
    Identity,
    WeakeningLeft,
    WeakeningRight,

    // logical rules
    NotLeft,
    NotRight,
    AndLeft,
    AndRight,
    OrLeft,
    OrRight,
    ImpliesLeft,
    ImpliesRight,
}

impl Rule {
    /// All rules, in the order in which proof search tries them.
    pub const ORDER: [Rule; 11] = [
        Rule::Identity,
        Rule::WeakeningLeft,
        Rule::WeakeningRight,
        Rule::NotLeft,
        Rule::NotRight,
        Rule::AndLeft,
        Rule::OrRight,
        Rule::ImpliesRight,
        Rule::OrLeft,
        Rule::AndRight,
        Rule::ImpliesLeft,
    ];

    /// Return true if the rule has two premises.
    pub fn is_branching(self) -> bool {
        matches!(self, Rule::OrLeft | Rule::AndRight | Rule::ImpliesLeft)
    }

    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Rule::Identity | Rule::WeakeningLeft | Rule::WeakeningRight
        )
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Rule::*;
        let s = match self {
            Identity => "Id",
            WeakeningLeft => "WL",
            WeakeningRight => "WR",
            NotLeft => "¬L",
            NotRight => "¬R",
            AndLeft => "∧L",
            AndRight => "∧R",
            OrLeft => "∨L",
            OrRight => "∨R",
            ImpliesLeft => "→L",
            ImpliesRight => "→R",
        };
        write!(f, "{}", s)
    }
}
