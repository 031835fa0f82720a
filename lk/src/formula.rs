//! Propositional formulas.

use alloc::{boxed::Box, string::String};
use core::fmt::{self, Display};
use core::ops::Neg;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Propositional formula over atoms of type `A`.
///
/// Every compound formula owns its subformulas,
/// so equality is structural.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Formula<A> {
    /// propositional variable
    Atom(A),
    Neg(Box<Formula<A>>),
    Conj(Box<Formula<A>>, Box<Formula<A>>),
    Disj(Box<Formula<A>>, Box<Formula<A>>),
    /// conditional, `Impl(premise, conclusion)`
    Impl(Box<Formula<A>>, Box<Formula<A>>),
}

/// Formula with string atoms.
pub type SFormula = Formula<String>;

/// Binary connective.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Conj,
    Disj,
    Impl,
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Conj => write!(f, "∧"),
            Op::Disj => write!(f, "∨"),
            Op::Impl => write!(f, "→"),
        }
    }
}

impl<A: Display> Display for Formula<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(a) => write!(f, "{}", a),
            Self::Neg(fm) => write!(f, "¬{}", fm),
            Self::Conj(l, r) => write!(f, "({} {} {})", l, Op::Conj, r),
            Self::Disj(l, r) => write!(f, "({} {} {})", l, Op::Disj, r),
            Self::Impl(l, r) => write!(f, "({} {} {})", l, Op::Impl, r),
        }
    }
}

impl<A> Neg for Formula<A> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::Neg(Box::new(self))
    }
}

impl<A> core::ops::BitAnd for Formula<A> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::bin(self, Op::Conj, rhs)
    }
}

impl<A> core::ops::BitOr for Formula<A> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::bin(self, Op::Disj, rhs)
    }
}

impl<A> Formula<A> {
    pub fn atom(a: impl Into<A>) -> Self {
        Self::Atom(a.into())
    }

    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        let (l, r) = (Box::new(l), Box::new(r));
        match o {
            Op::Conj => Self::Conj(l, r),
            Op::Disj => Self::Disj(l, r),
            Op::Impl => Self::Impl(l, r),
        }
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Impl, r)
    }

    /// Return true if the formula is a propositional variable.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    /// Number of connective occurrences.
    ///
    /// ~~~
    /// # use lk::Formula;
    /// let (p, q) = (Formula::<&str>::atom("p"), Formula::atom("q"));
    /// assert_eq!(p.size(), 0);
    /// assert_eq!((-(p.clone() & q) | -p).size(), 4);
    /// ~~~
    pub fn size(&self) -> usize {
        match self {
            Self::Atom(_) => 0,
            Self::Neg(fm) => 1 + fm.size(),
            Self::Conj(l, r) | Self::Disj(l, r) | Self::Impl(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Return the formula itself and all its subformulas, in prefix order.
    pub fn subforms(&self) -> Box<dyn Iterator<Item = &Formula<A>> + '_> {
        use core::iter::once;
        match self {
            Self::Atom(_) => Box::new(once(self)),
            Self::Neg(fm) => Box::new(once(self).chain(fm.subforms())),
            Self::Conj(l, r) | Self::Disj(l, r) | Self::Impl(l, r) => {
                Box::new(once(self).chain(l.subforms()).chain(r.subforms()))
            }
        }
    }

    /// Return all atoms occurring in the formula, with repetitions.
    pub fn atoms(&self) -> impl Iterator<Item = &A> {
        self.subforms().filter_map(|fm| match fm {
            Self::Atom(a) => Some(a),
            _ => None,
        })
    }
}
