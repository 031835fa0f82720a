//! Example sequents.

use lk::{Formula, Sequent};

type Form = Formula<&'static str>;

fn at(name: &'static str) -> Form {
    Formula::atom(name)
}

fn seq<const L: usize, const R: usize>(ante: [Form; L], cons: [Form; R]) -> Sequent<&'static str> {
    Sequent::new(Vec::from(ante), Vec::from(cons))
}

/// Named example sequents.
///
/// The last two are not valid:
/// the first of them has no proof, whereas the second one is
/// only accepted if one closed premise suffices for a branching inference.
pub fn demos() -> Vec<(&'static str, Sequent<&'static str>)> {
    let (p, q, x) = (at("p"), at("q"), at("x"));
    let imp = Formula::imp;
    Vec::from([
        ("excluded middle", seq([], [x.clone() | -x.clone()])),
        ("non-contradiction", seq([x.clone(), -x.clone()], [])),
        ("double negation", seq([--p.clone()], [p.clone()])),
        (
            "De Morgan",
            seq([-(p.clone() & q.clone())], [-p.clone() | -q.clone()]),
        ),
        (
            "contraposition",
            seq([imp(p.clone(), q.clone())], [imp(-q.clone(), -p.clone())]),
        ),
        (
            "modus ponens",
            seq([p.clone(), imp(p.clone(), q.clone())], [q.clone()]),
        ),
        (
            "Peirce's law",
            seq([], [imp(imp(imp(p.clone(), q.clone()), p.clone()), p.clone())]),
        ),
        ("distinct atoms", seq([x], [at("y")])),
        ("half conjunction", seq([p.clone()], [p & q])),
    ])
}
