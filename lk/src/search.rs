//! Backward proof search.
//!
//! Starting from a goal sequent, search picks the first applicable rule,
//! computes the premises that would justify the goal,
//! and recurses on each premise.
//! There is no backtracking: once a rule applies,
//! the goal is derived with that rule or not at all.

use crate::sequent::Side;
use crate::stats::Stats;
use crate::{Check, Derivation, Formula, Rule, Sequent};
use alloc::{boxed::Box, format, string::String};
use core::{fmt::Display, hash::Hash};
use log::{debug, info, trace};

/// When weakening may be applied.
///
/// In both cases, weakening only applies when both sides of a sequent
/// are non-empty, and only removes formulas that are
/// in the multiset difference of one side and the other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Weakening {
    /// weaken only sequents that consist of atoms
    ///
    /// This decomposes all connectives before
    /// reducing a sequent to an axiom.
    #[default]
    Atomic,
    /// weaken whenever possible
    ///
    /// This may discard formulas that are needed for a proof,
    /// such as the antecedent of `¬(p ∧ q) ⊢ ¬p ∨ ¬q`.
    Eager,
}

impl Weakening {
    fn applies<A>(self, goal: &Sequent<A>) -> bool {
        let nonempty = !goal.antecedents.is_empty() && !goal.consequents.is_empty();
        nonempty && (self == Weakening::Eager || goal.is_atomic())
    }
}

impl core::str::FromStr for Weakening {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "atomic" => Ok(Weakening::Atomic),
            "eager" => Ok(Weakening::Eager),
            _ => Err(format!("unknown weakening: {}", s)),
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Opt {
    pub weakening: Weakening,
    pub check: Check,
}

/// Result of applying a rule backwards to a goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<A> {
    Axiom,
    Linear(Rule, Sequent<A>),
    Branch(Rule, Sequent<A>, Sequent<A>),
}

impl<A> Step<A> {
    pub fn rule(&self) -> Rule {
        match self {
            Step::Axiom => Rule::Identity,
            Step::Linear(r, _) | Step::Branch(r, _, _) => *r,
        }
    }
}

/// Return the first formula for which `f` yields something, with its position.
fn first<'a, A, T>(
    fms: &'a [Formula<A>],
    f: impl Fn(&'a Formula<A>) -> Option<T>,
) -> Option<(usize, T)> {
    fms.iter().enumerate().find_map(|(i, fm)| f(fm).map(|x| (i, x)))
}

fn neg<A>(fm: &Formula<A>) -> Option<&Formula<A>> {
    match fm {
        Formula::Neg(fm) => Some(&**fm),
        _ => None,
    }
}

fn conj<A>(fm: &Formula<A>) -> Option<(&Formula<A>, &Formula<A>)> {
    match fm {
        Formula::Conj(l, r) => Some((&**l, &**r)),
        _ => None,
    }
}

fn disj<A>(fm: &Formula<A>) -> Option<(&Formula<A>, &Formula<A>)> {
    match fm {
        Formula::Disj(l, r) => Some((&**l, &**r)),
        _ => None,
    }
}

fn imp<A>(fm: &Formula<A>) -> Option<(&Formula<A>, &Formula<A>)> {
    match fm {
        Formula::Impl(l, r) => Some((&**l, &**r)),
        _ => None,
    }
}

/// Apply the first applicable rule backwards to the goal.
///
/// Rules are tried in the order given by [`Rule::ORDER`],
/// and each rule acts on the leftmost formula it applies to.
/// Return `None` if no rule applies.
pub fn step<A: Clone + Eq + Hash>(goal: &Sequent<A>, weakening: Weakening) -> Option<Step<A>> {
    use Side::{Left, Right};
    let (ante, cons) = (&goal.antecedents, &goal.consequents);

    if ante == cons {
        return Some(Step::Axiom);
    }

    if weakening.applies(goal) {
        if let Some(i) = crate::difference(ante, cons) {
            return Some(Step::Linear(Rule::WeakeningLeft, goal.without(Left, i)));
        }
        if let Some(i) = crate::difference(cons, ante) {
            return Some(Step::Linear(Rule::WeakeningRight, goal.without(Right, i)));
        }
    }

    if let Some((i, fm)) = first(ante, neg) {
        let premise = goal.without(Left, i).conclude([fm.clone()]);
        return Some(Step::Linear(Rule::NotLeft, premise));
    }

    if let Some((i, fm)) = first(cons, neg) {
        let premise = goal.without(Right, i).assume([fm.clone()]);
        return Some(Step::Linear(Rule::NotRight, premise));
    }

    if let Some((i, (l, r))) = first(ante, conj) {
        let premise = goal.without(Left, i).assume([l.clone(), r.clone()]);
        return Some(Step::Linear(Rule::AndLeft, premise));
    }

    if let Some((i, (l, r))) = first(cons, disj) {
        let premise = goal.without(Right, i).conclude([l.clone(), r.clone()]);
        return Some(Step::Linear(Rule::OrRight, premise));
    }

    if let Some((i, (a, c))) = first(cons, imp) {
        let premise = goal.without(Right, i).assume([a.clone()]).conclude([c.clone()]);
        return Some(Step::Linear(Rule::ImpliesRight, premise));
    }

    if let Some((i, (l, r))) = first(ante, disj) {
        let rest = goal.without(Left, i);
        let (pl, pr) = (rest.clone().assume([l.clone()]), rest.assume([r.clone()]));
        return Some(Step::Branch(Rule::OrLeft, pl, pr));
    }

    if let Some((i, (l, r))) = first(cons, conj) {
        let rest = goal.without(Right, i);
        let (pl, pr) = (rest.clone().conclude([l.clone()]), rest.conclude([r.clone()]));
        return Some(Step::Branch(Rule::AndRight, pl, pr));
    }

    if let Some((i, (a, c))) = first(ante, imp) {
        let rest = goal.without(Left, i);
        let (pl, pr) = (rest.clone().conclude([a.clone()]), rest.assume([c.clone()]));
        return Some(Step::Branch(Rule::ImpliesLeft, pl, pr));
    }

    None
}

pub struct Search {
    opt: Opt,
    stats: Stats,
}

impl Search {
    pub fn new(opt: Opt) -> Self {
        Self {
            opt,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Search for a derivation of the goal, without checking it.
    ///
    /// Return `None` if no rule applies to the goal.
    /// Premises for which search fails are left empty.
    pub fn search<A>(&mut self, goal: Sequent<A>) -> Option<Derivation<A>>
    where
        A: Clone + Display + Eq + Hash,
    {
        self.search_at(goal, 0)
    }

    fn search_at<A>(&mut self, goal: Sequent<A>, depth: usize) -> Option<Derivation<A>>
    where
        A: Clone + Display + Eq + Hash,
    {
        debug!("goal at depth {}: {}", depth, goal);
        trace!("goal size: {}", goal.size());
        self.stats.depth = self.stats.depth.max(depth);

        let step = match step(&goal, self.opt.weakening) {
            Some(step) => step,
            None => {
                debug!("no rule applies");
                self.stats.failures += 1;
                return None;
            }
        };
        debug!("apply {}", step.rule());
        self.stats.record(step.rule());

        let mut sub = |premise: Sequent<A>| self.search_at(premise, depth + 1).map(Box::new);
        Some(match step {
            Step::Axiom => Derivation::identity(goal),
            Step::Linear(rule, premise) => Derivation::Linear(sub(premise), rule, goal),
            Step::Branch(rule, l, r) => {
                let l = sub(l);
                let r = sub(r);
                Derivation::Branch(l, r, rule, goal)
            }
        })
    }

    /// Search for a derivation of the goal and return it if it is complete.
    pub fn prove<A>(&mut self, goal: Sequent<A>) -> Option<Derivation<A>>
    where
        A: Clone + Display + Eq + Hash,
    {
        info!("prove: {}", goal);
        let candidate = self.search(goal);
        let check = self.opt.check;
        let complete = candidate.as_ref().map_or(false, |c| c.is_complete(check));
        info!(
            "search finished after {} inferences, complete: {}",
            self.stats.inferences, complete
        );
        candidate.filter(|_| complete)
    }
}
