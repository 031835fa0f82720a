use crate::Formula;
use alloc::vec::Vec;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Sequent `Γ ⊢ Δ`, stating that the conjunction of the antecedents `Γ`
/// entails the disjunction of the consequents `Δ`.
///
/// Both sides are multisets in meaning, but they are stored in order and
/// compared position by position:
///
/// ~~~
/// # use lk::{Formula, Sequent};
/// let (a, b) = (Formula::<&str>::atom("a"), Formula::atom("b"));
/// let ab = Sequent::new(Vec::from([a.clone(), b.clone()]), Vec::new());
/// let ba = Sequent::new(Vec::from([b, a]), Vec::new());
/// assert_ne!(ab, ba);
/// ~~~
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Sequent<A> {
    pub antecedents: Vec<Formula<A>>,
    pub consequents: Vec<Formula<A>>,
}

/// Side of a sequent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl<A> Sequent<A> {
    pub fn new(antecedents: Vec<Formula<A>>, consequents: Vec<Formula<A>>) -> Self {
        Self {
            antecedents,
            consequents,
        }
    }

    /// Total number of connective occurrences on both sides.
    pub fn size(&self) -> usize {
        self.formulas().map(|fm| fm.size()).sum()
    }

    /// Number of formulas on both sides.
    pub fn len(&self) -> usize {
        self.antecedents.len() + self.consequents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.antecedents.is_empty() && self.consequents.is_empty()
    }

    /// Return true if all formulas of the sequent are atoms.
    pub fn is_atomic(&self) -> bool {
        self.formulas().all(|fm| fm.is_atomic())
    }

    /// Antecedents followed by consequents.
    pub fn formulas(&self) -> impl Iterator<Item = &Formula<A>> {
        self.antecedents.iter().chain(self.consequents.iter())
    }
}

impl<A: Clone> Sequent<A> {
    /// Return a copy of the sequent with the `i`-th formula of `side` removed.
    pub fn without(&self, side: Side, i: usize) -> Self {
        let mut seq = self.clone();
        match side {
            Side::Left => seq.antecedents.remove(i),
            Side::Right => seq.consequents.remove(i),
        };
        seq
    }

    /// Append formulas to the antecedents.
    pub fn assume(mut self, fms: impl IntoIterator<Item = Formula<A>>) -> Self {
        self.antecedents.extend(fms);
        self
    }

    /// Append formulas to the consequents.
    pub fn conclude(mut self, fms: impl IntoIterator<Item = Formula<A>>) -> Self {
        self.consequents.extend(fms);
        self
    }
}

struct Commas<'a, A>(&'a [Formula<A>]);

impl<'a, A: Display> Display for Commas<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(fm) = iter.next() {
            write!(f, "{}", fm)?;
            iter.try_for_each(|fm| write!(f, ", {}", fm))?;
        }
        Ok(())
    }
}

impl<A: Display> Display for Sequent<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left = Commas(&self.antecedents);
        let right = Commas(&self.consequents);
        match (self.antecedents.is_empty(), self.consequents.is_empty()) {
            (true, true) => write!(f, "⊢"),
            (true, false) => write!(f, "⊢ {}", right),
            (false, true) => write!(f, "{} ⊢", left),
            (false, false) => write!(f, "{} ⊢ {}", left, right),
        }
    }
}
