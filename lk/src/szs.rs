//! Result statuses in the SZS ontology.

use crate::Derivation;
use core::fmt::{self, Debug, Display};
pub use NoSuccessKind::*;
pub use SuccessKind::*;

pub struct Status<K>(pub K);

impl<K: Debug> Display for Status<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS status {:?}", self.0)
    }
}

pub struct Output<O>(pub O);

impl<O: Display> Display for Output<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS output start")?;
        writeln!(f, "{}", self.0)?;
        writeln!(f, "% SZS output end")
    }
}

#[derive(Debug)]
pub enum SuccessKind {
    /// the conjectures follow from the axioms
    Theorem,
    /// the problem is empty
    Satisfiable,
}

#[derive(Debug)]
pub enum NoSuccessKind {
    OsError,
    InputError,
    SyntaxError,
    /// the problem is not propositional
    Inappropriate,
    /// proof search ended without a complete derivation
    GaveUp,
}

/// Status of a proof search result.
pub fn status<A>(proof: Option<&Derivation<A>>) -> Result<SuccessKind, NoSuccessKind> {
    proof.map(|_| Theorem).ok_or(GaveUp)
}
