use lk::search::{step, Step};
use lk::{Check, Derivation, Formula, Opt, Rule, Search, Sequent, Weakening};

type Form = Formula<&'static str>;
type Seq = Sequent<&'static str>;

fn at(name: &'static str) -> Form {
    Formula::atom(name)
}

fn seq<L, R>(ante: L, cons: R) -> Seq
where
    L: IntoIterator<Item = Form>,
    R: IntoIterator<Item = Form>,
{
    Sequent::new(ante.into_iter().collect(), cons.into_iter().collect())
}

fn linear(premise: Derivation<&'static str>, rule: Rule, conclusion: Seq) -> Derivation<&'static str> {
    Derivation::Linear(Some(Box::new(premise)), rule, conclusion)
}

fn prove_with(goal: Seq, weakening: Weakening, check: Check) -> Option<Derivation<&'static str>> {
    Search::new(Opt { weakening, check }).prove(goal)
}

fn strict(goal: Seq) -> Option<Derivation<&'static str>> {
    prove_with(goal, Weakening::default(), Check::All)
}

#[test]
fn identity() {
    let goal = seq([at("x")], [at("x")]);
    let proof = lk::prove(goal.clone()).unwrap();
    assert_eq!(proof, Derivation::identity(goal));
    assert_eq!(proof.inferences(), 1);
}

#[test]
fn identity_is_positional() {
    // the same multisets, in a different order
    let goal = seq([at("a"), at("b")], [at("b"), at("a")]);
    assert_eq!(step(&goal, Weakening::Atomic), None);
    assert_eq!(step(&goal, Weakening::Eager), None);
    assert_eq!(lk::prove(goal), None);

    let goal = seq([at("a"), at("b")], [at("a"), at("b")]);
    assert_eq!(step(&goal, Weakening::Atomic), Some(Step::Axiom));
}

#[test]
fn duplicate() {
    let x = at("x");
    let goal = seq([x.clone(), x.clone()], [x.clone()]);
    let axiom = Derivation::identity(seq([x.clone()], [x]));
    let expected = linear(axiom, Rule::WeakeningLeft, goal.clone());
    assert_eq!(lk::prove(goal), Some(expected));
}

#[test]
fn contradiction() {
    let x = at("x");
    let goal = seq([x.clone(), -x.clone()], []);
    let axiom = Derivation::identity(seq([x.clone()], [x]));
    let expected = linear(axiom, Rule::NotLeft, goal.clone());
    assert_eq!(lk::prove(goal.clone()), Some(expected.clone()));
    // weakening never empties a side
    assert_eq!(prove_with(goal, Weakening::Eager, Check::Any), Some(expected));
}

#[test]
fn excluded_middle() {
    let x = at("x");
    let goal = seq([], [x.clone() | -x.clone()]);
    let axiom = Derivation::identity(seq([x.clone()], [x.clone()]));
    let not = linear(axiom, Rule::NotRight, seq([], [x.clone(), -x]));
    let expected = linear(not, Rule::OrRight, goal.clone());
    assert_eq!(lk::prove(goal), Some(expected));
}

fn de_morgan() -> Seq {
    let (p, q) = (at("p"), at("q"));
    seq([-(p.clone() & q.clone())], [-p | -q])
}

#[test]
fn de_morgan_atomic() {
    let proof = strict(de_morgan()).unwrap();
    let rules: Vec<_> = core::iter::successors(Some(&proof), |d| d.premises().next())
        .map(|d| d.rule())
        .collect();
    use Rule::*;
    let path = [NotLeft, OrRight, NotRight, NotRight, AndRight, WeakeningLeft, Identity];
    assert_eq!(rules, path);
    assert_eq!(proof.inferences(), 9);
    assert_eq!(proof.height(), 7);
    assert!(proof.open().is_empty());
}

#[test]
fn de_morgan_eager() {
    // eager weakening drops the antecedent before it is decomposed
    let goal = de_morgan();
    let first = step(&goal, Weakening::Eager).unwrap();
    assert_eq!(first.rule(), Rule::WeakeningLeft);
    assert_eq!(prove_with(goal, Weakening::Eager, Check::Any), None);
}

#[test]
fn deterministic() {
    let goal = de_morgan();
    assert_eq!(lk::prove(goal.clone()), lk::prove(goal));
}

#[test]
fn distinct_atoms() {
    let goal = seq([at("x")], [at("y")]);
    assert_eq!(lk::prove(goal.clone()), None);

    let candidate = Search::new(Opt::default()).search(goal.clone()).unwrap();
    assert_eq!(candidate, Derivation::Linear(None, Rule::WeakeningLeft, goal.clone()));
    assert!(!candidate.is_complete(Check::Any));
    assert_eq!(candidate.open(), [&goal]);
}

#[test]
fn no_rule_applies() {
    let goal = seq([], [at("y")]);
    assert_eq!(step(&goal, Weakening::Eager), None);
    assert_eq!(Search::new(Opt::default()).search(goal), None);
}

#[test]
fn branch_any() {
    // p ⊢ p ∧ q is not valid, but one branch is closed
    let (p, q) = (at("p"), at("q"));
    let goal = seq([p.clone()], [p.clone() & q.clone()]);
    let left = Derivation::identity(seq([p.clone()], [p.clone()]));
    let right = Derivation::Linear(None, Rule::WeakeningLeft, seq([p], [q]));
    let expected = Derivation::Branch(
        Some(Box::new(left)),
        Some(Box::new(right)),
        Rule::AndRight,
        goal.clone(),
    );
    assert_eq!(lk::prove(goal.clone()), Some(expected));
    assert_eq!(strict(goal), None);
}

#[test]
fn branch_identity() {
    let goal = seq([at("p")], [at("q")]);
    let branch = Derivation::Branch(None, None, Rule::Identity, goal.clone());
    assert!(branch.is_complete(Check::All));
    let branch = Derivation::Branch(None, None, Rule::AndRight, goal);
    assert!(!branch.is_complete(Check::Any));
}

#[test]
fn theorems() {
    let (p, q) = (at("p"), at("q"));
    let imp = Formula::imp;
    let goals = [
        // modus ponens
        seq([p.clone(), imp(p.clone(), q.clone())], [q.clone()]),
        // contraposition
        seq([imp(p.clone(), q.clone())], [imp(-q.clone(), -p.clone())]),
        // double negation
        seq([--p.clone()], [p.clone()]),
        seq([p.clone()], [--p.clone()]),
        // Peirce's law
        seq([], [imp(imp(imp(p.clone(), q.clone()), p.clone()), p.clone())]),
        // commutativity of conjunction
        seq([p.clone() & q.clone()], [q & p]),
    ];
    for goal in goals {
        let proof = strict(goal.clone()).unwrap_or_else(|| panic!("no proof: {}", goal));
        assert_eq!(proof.conclusion(), &goal);
    }
}

#[test]
fn steps() {
    let (a, b, c, d) = (at("a"), at("b"), at("c"), at("d"));

    let goal = seq([a.clone() & b.clone()], [c.clone()]);
    let premise = seq([a.clone(), b.clone()], [c.clone()]);
    assert_eq!(step(&goal, Weakening::Atomic), Some(Step::Linear(Rule::AndLeft, premise)));

    // the leftmost negation is handled first
    let goal = seq([-a.clone(), -b.clone()], []);
    let premise = seq([-b.clone()], [a.clone()]);
    assert_eq!(step(&goal, Weakening::Atomic), Some(Step::Linear(Rule::NotLeft, premise)));

    // or-right comes before or-left
    let goal = seq([a.clone() | b.clone()], [c.clone() | d.clone()]);
    let premise = seq([a.clone() | b.clone()], [c.clone(), d.clone()]);
    assert_eq!(step(&goal, Weakening::Atomic), Some(Step::Linear(Rule::OrRight, premise)));

    let goal = seq([c.clone()], [Formula::imp(a.clone(), b.clone()), d.clone()]);
    let premise = seq([c.clone(), a.clone()], [d.clone(), b.clone()]);
    let expected = Step::Linear(Rule::ImpliesRight, premise);
    assert_eq!(step(&goal, Weakening::Atomic), Some(expected));

    let goal = seq([a.clone() | b.clone(), c.clone()], [d.clone()]);
    let left = seq([c.clone(), a.clone()], [d.clone()]);
    let right = seq([c.clone(), b.clone()], [d.clone()]);
    let expected = Step::Branch(Rule::OrLeft, left, right);
    assert_eq!(step(&goal, Weakening::Atomic), Some(expected));

    let goal = seq([Formula::imp(a.clone(), b.clone()), c.clone()], [d.clone()]);
    let left = seq([c.clone()], [d.clone(), a]);
    let right = seq([c, b], [d]);
    let expected = Step::Branch(Rule::ImpliesLeft, left, right);
    assert_eq!(step(&goal, Weakening::Atomic), Some(expected));
}

#[test]
fn rule_order() {
    let (a, b) = (at("a"), at("b"));
    let imp = Formula::imp;
    // sequents on which exactly one logical rule acts, in search order
    let logical = [
        seq([-a.clone()], []),
        seq([], [-a.clone()]),
        seq([a.clone() & b.clone()], []),
        seq([], [a.clone() | b.clone()]),
        seq([], [imp(a.clone(), b.clone())]),
        seq([a.clone() | b.clone()], []),
        seq([], [a.clone() & b.clone()]),
        seq([imp(a.clone(), b.clone())], []),
    ];
    // goal to which all logical rules from the i-th on apply
    let from = |i: usize| {
        logical[i..].iter().fold(seq([], []), |goal, s| {
            let goal = goal.assume(s.antecedents.clone());
            goal.conclude(s.consequents.clone())
        })
    };
    let all = from(0);
    let mut goals = Vec::from([
        (Weakening::Atomic, seq(all.antecedents.clone(), all.antecedents.clone())),
        (Weakening::Eager, all.clone().assume([b.clone()])),
        (Weakening::Eager, all.conclude([b])),
    ]);
    goals.extend((0..logical.len()).map(|i| (Weakening::Atomic, from(i))));

    let picked: Vec<_> = goals.iter().map(|(w, goal)| step(goal, *w).unwrap().rule()).collect();
    assert_eq!(picked, Rule::ORDER);
}

#[test]
fn subformulas() {
    let (p, q) = (at("p"), at("q"));
    let fm = Formula::imp(-p.clone(), p.clone() & q.clone());
    assert_eq!(fm.size(), 3);
    assert_eq!(fm.subforms().count(), 6);
    assert_eq!(fm.atoms().collect::<Vec<_>>(), [&"p", &"p", &"q"]);
    assert!(!fm.is_atomic() && q.is_atomic());
}

#[test]
fn weakening_right() {
    let (p, q) = (at("p"), at("q"));
    let goal = seq([p.clone()], [p.clone(), q]);
    let expected = Step::Linear(Rule::WeakeningRight, seq([p.clone()], [p]));
    assert_eq!(step(&goal, Weakening::Atomic), Some(expected));
}

#[test]
fn stats() {
    let x = at("x");
    let mut search = Search::new(Opt::default());
    assert!(search.prove(seq([], [x.clone() | -x])).is_some());
    let stats = search.stats();
    assert_eq!(stats.inferences, 3);
    assert_eq!(stats.applications(Rule::OrRight), 1);
    assert_eq!(stats.applications(Rule::AndRight), 0);
    assert_eq!(stats.depth, 2);
    assert_eq!(stats.failures, 0);

    let mut search = Search::new(Opt::default());
    assert!(search.prove(seq([at("x")], [at("y")])).is_none());
    assert_eq!(search.stats().failures, 1);
}

#[test]
fn options() {
    assert_eq!("eager".parse::<Weakening>(), Ok(Weakening::Eager));
    assert_eq!("atomic".parse::<Weakening>(), Ok(Weakening::Atomic));
    assert!("lazy".parse::<Weakening>().is_err());
    assert_eq!("all".parse::<Check>(), Ok(Check::All));
    assert_eq!(Check::default(), Check::Any);
    assert!(Rule::ORDER.iter().filter(|r| r.is_branching()).count() == 3);
}

/// All formulas over `p` and `q` up to the given nesting depth.
fn formulas(depth: usize) -> Vec<Form> {
    if depth == 0 {
        return Vec::from([at("p"), at("q")]);
    }
    let smaller = formulas(depth - 1);
    let mut fms = smaller.clone();
    fms.extend(smaller.iter().map(|fm| -fm.clone()));
    for l in &smaller {
        for r in &smaller {
            fms.push(l.clone() & r.clone());
            fms.push(l.clone() | r.clone());
            fms.push(Formula::imp(l.clone(), r.clone()));
        }
    }
    fms
}

fn eval(fm: &Form, p: bool, q: bool) -> bool {
    match fm {
        Formula::Atom(a) => {
            if *a == "p" {
                p
            } else {
                q
            }
        }
        Formula::Neg(fm) => !eval(fm, p, q),
        Formula::Conj(l, r) => eval(l, p, q) && eval(r, p, q),
        Formula::Disj(l, r) => eval(l, p, q) || eval(r, p, q),
        Formula::Impl(l, r) => !eval(l, p, q) || eval(r, p, q),
    }
}

fn tautology(fm: &Form) -> bool {
    [(false, false), (false, true), (true, false), (true, true)]
        .iter()
        .all(|(p, q)| eval(fm, *p, *q))
}

#[test]
fn measure_decreases() {
    for fm in formulas(2) {
        for goal in [seq([], [fm.clone()]), seq([fm.clone()], [at("p")])] {
            for weakening in [Weakening::Atomic, Weakening::Eager] {
                let premises = match step(&goal, weakening) {
                    None | Some(Step::Axiom) => Vec::new(),
                    Some(Step::Linear(rule, p)) => Vec::from([(rule, p)]),
                    Some(Step::Branch(rule, l, r)) => Vec::from([(rule, l), (rule, r)]),
                };
                for (rule, premise) in premises {
                    if rule.is_structural() {
                        assert!(premise.size() <= goal.size());
                        assert!(premise.len() < goal.len());
                    } else {
                        assert!(premise.size() < goal.size(), "{} from {}", rule, goal);
                    }
                }
            }
        }
    }
}

#[test]
fn strict_proofs_are_sound() {
    for fm in formulas(2) {
        if strict(seq([], [fm.clone()])).is_some() {
            assert!(tautology(&fm), "not a tautology: {}", fm);
        }
    }
}
