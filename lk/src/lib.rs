//! Proof search for propositional sequents in Gentzen's System LK.
//!
//! Search works backwards from a goal sequent,
//! producing a derivation tree whose leaves are axioms if the goal is provable:
//!
//! ~~~
//! use lk::{Formula, Rule, Sequent};
//! let x = Formula::<&str>::atom("x");
//! let goal = Sequent::new(Vec::new(), Vec::from([x.clone() | -x]));
//! let proof = lk::prove(goal).unwrap();
//! assert_eq!(proof.rule(), Rule::OrRight);
//! assert_eq!(proof.inferences(), 3);
//! ~~~
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod check;
mod derivation;
pub mod formula;
pub mod role;
mod rule;
pub mod search;
pub mod sequent;
pub mod stats;
pub mod szs;
#[cfg(feature = "tptp")]
pub mod tptp;

pub use check::Check;
pub use derivation::{Derivation, Indented};
pub use formula::{Formula, SFormula};
pub use rule::Rule;
pub use search::{Opt, Search, Weakening};
pub use sequent::Sequent;

use core::{fmt::Display, hash::Hash};
use hashbrown::HashMap;

/// Prove a sequent with default options.
///
/// Return a derivation if search produces a complete one.
pub fn prove<A: Clone + Display + Eq + Hash>(goal: Sequent<A>) -> Option<Derivation<A>> {
    Search::new(Opt::default()).prove(goal)
}

/// Return the position of the first element of `v1` that
/// remains in the multiset difference `v1 - v2`.
///
/// If the element occurs several times in `v1`,
/// the position of its first occurrence is returned.
///
/// ~~~
/// # use lk::difference;
/// assert_eq!(difference(&[1, 2, 1, 3], &[1, 3]), Some(1));
/// assert_eq!(difference(&[1, 1], &[1]), Some(0));
/// assert_eq!(difference(&[3, 1, 2, 1], &[1, 2, 3]), Some(1));
/// assert_eq!(difference(&[1, 2], &[2, 1, 1]), None);
/// ~~~
pub fn difference<T: Eq + Hash>(v1: &[T], v2: &[T]) -> Option<usize> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for x in v2 {
        *counts.entry(x).or_default() += 1
    }
    let remaining = v1.iter().find(|x| match counts.get_mut(*x) {
        Some(n) if *n > 0 => {
            *n -= 1;
            false
        }
        _ => true,
    })?;
    v1.iter().position(|y| y == remaining)
}
