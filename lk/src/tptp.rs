//! Conversion of propositional TPTP problems.
//!
//! Only formulas built from propositional atoms,
//! `$true`, `$false`, and the usual connectives are supported.

use crate::formula::{Op, SFormula};
use crate::role::{Role, RoleMap};
use crate::szs::NoSuccessKind;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::convert::TryFrom;
use core::fmt::{self, Display};
use tptp::{cnf, common, fof, top, TPTPIterator};

/// Construct that has no counterpart in propositional logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unsupported {
    Quantifier,
    /// predicate applied to arguments
    Predicate(String),
    Equality,
    /// defined atom other than `$true` and `$false`
    Defined,
    System,
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Unsupported::*;
        match self {
            Quantifier => write!(f, "quantifiers are not supported"),
            Predicate(p) => write!(f, "predicate {} takes arguments", p),
            Equality => write!(f, "equality is not supported"),
            Defined => write!(f, "unsupported defined atom"),
            System => write!(f, "system atoms are not supported"),
        }
    }
}

/// Parse TPTP input and add its formulas to the role map.
///
/// The function `f` is called with the file name of every include directive.
pub fn parse<E, F>(bytes: &[u8], forms: &mut RoleMap<Vec<SFormula>>, f: F) -> Result<(), E>
where
    E: From<NoSuccessKind> + From<Unsupported>,
    F: Fn(&str, &mut RoleMap<Vec<SFormula>>) -> Result<(), E>,
{
    let mut parser = TPTPIterator::<()>::new(bytes);
    for input in &mut parser {
        let input = input.map_err(|_| NoSuccessKind::SyntaxError)?;
        match input {
            top::TPTPInput::Include(include) => f(include.file_name.0 .0, forms)?,
            top::TPTPInput::Annotated(ann) => {
                let (role, formula) = get_role_formula(*ann)?;
                log::info!("formula: {}", formula);
                forms.get_mut(role).push(formula);
            }
        };
    }
    if parser.remaining.is_empty() {
        Ok(())
    } else {
        Err(E::from(NoSuccessKind::SyntaxError))
    }
}

fn get_role_formula(annotated: top::AnnotatedFormula) -> Result<(Role, SFormula), Unsupported> {
    use top::AnnotatedFormula::*;
    match annotated {
        Fof(fof) => Ok((Role::from(fof.0.role), SFormula::try_from(*fof.0.formula)?)),
        Cnf(cnf) => Ok((Role::from(cnf.0.role), SFormula::try_from(*cnf.0.formula)?)),
    }
}

fn verum() -> SFormula {
    let p = SFormula::atom("$true");
    SFormula::imp(p.clone(), p)
}

fn falsum() -> SFormula {
    let p = SFormula::atom("$false");
    p.clone() & -p
}

/// Right-associated combination of formulas with a binary connective.
fn join(op: Op, fms: Vec<SFormula>) -> SFormula {
    let mut fms = fms.into_iter().rev();
    match fms.next() {
        Some(last) => fms.fold(last, |acc, fm| SFormula::bin(fm, op, acc)),
        None if op == Op::Disj => falsum(),
        None => verum(),
    }
}

fn equiv(l: SFormula, r: SFormula) -> SFormula {
    SFormula::imp(l.clone(), r.clone()) & SFormula::imp(r, l)
}

impl TryFrom<fof::LogicFormula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::LogicFormula) -> Result<Self, Self::Error> {
        use fof::LogicFormula::*;
        match frm {
            Binary(b) => Self::try_from(b),
            Unary(u) => Self::try_from(u),
            Unitary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnitFormula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::UnitFormula) -> Result<Self, Self::Error> {
        use fof::UnitFormula::*;
        match frm {
            Unitary(u) => Self::try_from(u),
            Unary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnaryFormula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::UnaryFormula) -> Result<Self, Self::Error> {
        use fof::UnaryFormula::*;
        match frm {
            Unary(_negation, fuf) => Ok(-Self::try_from(*fuf)?),
            InfixUnary(_) => Err(Unsupported::Equality),
        }
    }
}

impl TryFrom<fof::BinaryFormula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::BinaryFormula) -> Result<Self, Self::Error> {
        use fof::BinaryFormula::*;
        match frm {
            Nonassoc(fbn) => Self::try_from(fbn),
            Assoc(fba) => Self::try_from(fba),
        }
    }
}

impl TryFrom<fof::BinaryNonassoc<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::BinaryNonassoc) -> Result<Self, Self::Error> {
        let left = Self::try_from(*frm.left)?;
        let right = Self::try_from(*frm.right)?;
        use common::NonassocConnective::*;
        Ok(match frm.op {
            LRImplies => Self::imp(left, right),
            RLImplies => Self::imp(right, left),
            Equivalent => equiv(left, right),
            NotEquivalent => -equiv(left, right),
            NotOr => -(left | right),
            NotAnd => -(left & right),
        })
    }
}

impl TryFrom<fof::BinaryAssoc<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(fm: fof::BinaryAssoc) -> Result<Self, Self::Error> {
        use fof::BinaryAssoc::*;
        let (op, fms) = match fm {
            Or(fms) => (Op::Disj, fms.0),
            And(fms) => (Op::Conj, fms.0),
        };
        let fms = fms.into_iter().map(Self::try_from);
        Ok(join(op, fms.collect::<Result<_, _>>()?))
    }
}

impl TryFrom<fof::UnitaryFormula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::UnitaryFormula) -> Result<Self, Self::Error> {
        use fof::UnitaryFormula::*;
        match frm {
            Parenthesised(flf) => Self::try_from(*flf),
            Quantified(_) => Err(Unsupported::Quantifier),
            Atomic(a) => Self::try_from(*a),
        }
    }
}

impl TryFrom<fof::PlainAtomicFormula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::PlainAtomicFormula) -> Result<Self, Self::Error> {
        use fof::PlainTerm::*;
        match frm.0 {
            Constant(c) => Ok(Self::atom(c.to_string())),
            Function(f, _args) => Err(Unsupported::Predicate(f.to_string())),
        }
    }
}

impl TryFrom<fof::DefinedAtomicFormula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::DefinedAtomicFormula) -> Result<Self, Self::Error> {
        use fof::DefinedAtomicFormula::*;
        match frm {
            Plain(p) => Self::try_from(p),
            Infix(_) => Err(Unsupported::Equality),
        }
    }
}

impl TryFrom<fof::DefinedPlainFormula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(fm: fof::DefinedPlainFormula) -> Result<Self, Self::Error> {
        use fof::DefinedPlainTerm::Constant;
        match fm.0 {
            Constant(c) if c.0 .0 .0 .0 .0 == "true" => Ok(verum()),
            Constant(c) if c.0 .0 .0 .0 .0 == "false" => Ok(falsum()),
            _ => Err(Unsupported::Defined),
        }
    }
}

impl TryFrom<fof::AtomicFormula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::AtomicFormula) -> Result<Self, Self::Error> {
        use fof::AtomicFormula::*;
        match frm {
            Plain(p) => Self::try_from(p),
            Defined(d) => Self::try_from(d),
            System(_) => Err(Unsupported::System),
        }
    }
}

impl TryFrom<fof::Formula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: fof::Formula) -> Result<Self, Self::Error> {
        Self::try_from(frm.0)
    }
}

impl TryFrom<cnf::Literal<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(lit: cnf::Literal) -> Result<Self, Self::Error> {
        use cnf::Literal::*;
        match lit {
            Atomic(a) => Self::try_from(a),
            NegatedAtomic(a) => Ok(-Self::try_from(a)?),
            Infix(_) => Err(Unsupported::Equality),
        }
    }
}

impl TryFrom<cnf::Disjunction<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: cnf::Disjunction) -> Result<Self, Self::Error> {
        let lits = frm.0.into_iter().map(Self::try_from);
        Ok(join(Op::Disj, lits.collect::<Result<_, _>>()?))
    }
}

impl TryFrom<cnf::Formula<'_>> for SFormula {
    type Error = Unsupported;
    fn try_from(frm: cnf::Formula) -> Result<Self, Self::Error> {
        use cnf::Formula::*;
        match frm {
            Disjunction(d) | Parenthesised(d) => Self::try_from(d),
        }
    }
}

impl From<top::FormulaRole<'_>> for Role {
    fn from(role: top::FormulaRole<'_>) -> Self {
        match role.0 .0 {
            "conjecture" => Self::Conjecture,
            "negated_conjecture" => Self::NegatedConjecture,
            _ => Self::Other,
        }
    }
}
