use alloc::{format, string::String};
use core::result::Result;

/// When a branching inference counts as complete.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Check {
    /// at least one premise must be complete
    ///
    /// This accepts derivations of sequents that are not valid,
    /// such as `p ⊢ p ∧ q`.
    #[default]
    Any,
    /// both premises must be complete
    All,
}

impl Check {
    /// Combine the completeness of the two premises of a branching inference.
    pub fn join(self, left: bool, right: bool) -> bool {
        match self {
            Check::Any => left || right,
            Check::All => left && right,
        }
    }
}

impl core::str::FromStr for Check {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Check::Any),
            "all" => Ok(Check::All),
            _ => Err(format!("unknown check: {}", s)),
        }
    }
}
