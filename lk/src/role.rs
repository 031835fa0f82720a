use crate::{Formula, Sequent};
use alloc::vec::Vec;

/// Role of a formula in a problem.
#[derive(PartialEq, Debug, Eq, Hash)]
pub enum Role {
    Conjecture,
    NegatedConjecture,
    /// axiom, hypothesis, lemma, ...
    Other,
}

#[derive(Debug, Default)]
pub struct RoleMap<F>(hashbrown::HashMap<Role, F>);

impl<F: Default> RoleMap<F> {
    pub fn get_mut(&mut self, role: Role) -> &mut F {
        self.0.entry(role).or_default()
    }

    fn remove(&mut self, role: &Role) -> F {
        self.0.remove(role).unwrap_or_default()
    }
}

impl<A> RoleMap<Vec<Formula<A>>> {
    /// Build the sequent `Γ, N ⊢ C`,
    /// where `Γ` are the formulas without conjecture role,
    /// `N` the negated conjectures (unnegated), and
    /// `C` the right-associated conjunction of all conjectures.
    ///
    /// Return `None` if there are no formulas at all.
    pub fn join(mut self) -> Option<Sequent<A>> {
        let mut ante = self.remove(&Role::Other);
        ante.append(&mut self.remove(&Role::NegatedConjecture));
        let mut cjs = self.remove(&Role::Conjecture).into_iter().rev();
        let conj = cjs.next().map(|last| cjs.fold(last, |acc, cj| cj & acc));
        let seq = Sequent::new(ante, conj.into_iter().collect());
        (!seq.is_empty()).then(|| seq)
    }
}
