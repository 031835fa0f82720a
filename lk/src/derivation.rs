use crate::{Check, Rule, Sequent};
use alloc::{boxed::Box, format, string::String, string::ToString, vec::Vec};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Derivation tree built by backward proof search.
///
/// A premise slot is `None` if proof search failed for that premise.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Derivation<A> {
    /// inference with at most one premise
    Linear(Option<Box<Self>>, Rule, Sequent<A>),
    /// inference with a left and a right premise
    Branch(Option<Box<Self>>, Option<Box<Self>>, Rule, Sequent<A>),
}

/// Text shown in place of a premise for which no derivation was found.
const OPEN: &str = "(open)";

impl<A> Derivation<A> {
    /// Derivation of an axiom.
    pub fn identity(conclusion: Sequent<A>) -> Self {
        Self::Linear(None, Rule::Identity, conclusion)
    }

    pub fn conclusion(&self) -> &Sequent<A> {
        match self {
            Self::Linear(_, _, c) | Self::Branch(_, _, _, c) => c,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Self::Linear(_, r, _) | Self::Branch(_, _, r, _) => *r,
        }
    }

    /// Return the derivations of all premises that were found.
    pub fn premises(&self) -> impl Iterator<Item = &Self> {
        let (l, r) = match self {
            Self::Linear(p, _, _) => (p.as_deref(), None),
            Self::Branch(l, r, _, _) => (l.as_deref(), r.as_deref()),
        };
        l.into_iter().chain(r)
    }

    /// Return true if every path from the root that the check follows
    /// ends in an axiom.
    pub fn is_complete(&self, check: Check) -> bool {
        let complete = |p: &Option<Box<Self>>| p.as_ref().map_or(false, |p| p.is_complete(check));
        match self {
            Self::Linear(_, Rule::Identity, _) | Self::Branch(_, _, Rule::Identity, _) => true,
            Self::Linear(p, _, _) => complete(p),
            Self::Branch(l, r, _, _) => check.join(complete(l), complete(r)),
        }
    }

    /// Number of inferences in the derivation.
    pub fn inferences(&self) -> usize {
        1 + self.premises().map(|p| p.inferences()).sum::<usize>()
    }

    pub fn height(&self) -> usize {
        1 + self.premises().map(|p| p.height()).max().unwrap_or(0)
    }

    /// Return the conclusions of inferences that lack a premise derivation.
    pub fn open(&self) -> Vec<&Sequent<A>> {
        let gap = match self {
            Self::Linear(p, rule, _) => *rule != Rule::Identity && p.is_none(),
            Self::Branch(l, r, rule, _) => *rule != Rule::Identity && (l.is_none() || r.is_none()),
        };
        let mut open = Vec::new();
        if gap {
            open.push(self.conclusion())
        }
        open.extend(self.premises().flat_map(|p| p.open()));
        open
    }

    /// Display the derivation as an indented list of inferences,
    /// conclusions first.
    pub fn indented(&self) -> Indented<'_, A> {
        Indented {
            depth: 0,
            label: "",
            derivation: Some(self),
        }
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, w: usize) -> String {
    format!("{}{: <2$}", s, "", w.saturating_sub(width(s)))
}

/// Put two blocks of lines next to each other, aligned at the bottom.
fn beside(l: Vec<String>, r: Vec<String>) -> Vec<String> {
    let lw = l.iter().map(|s| width(s)).max().unwrap_or(0);
    let height = l.len().max(r.len());
    let top = |block: Vec<String>| -> Vec<String> {
        let missing = height - block.len();
        let empty = core::iter::repeat(String::new()).take(missing);
        empty.chain(block).collect()
    };
    let (l, r) = (top(l), top(r));
    let lines = l.iter().zip(r.iter());
    let lines = lines.map(|(l, r)| format!("{}   {}", pad(l, lw), r).trim_end().to_string());
    lines.collect()
}

fn labelled(label: &str, mut lines: Vec<String>) -> Vec<String> {
    lines.insert(0, format!("[{}]", label));
    lines
}

impl<A: Display> Derivation<A> {
    fn slot(p: &Option<Box<Self>>) -> Vec<String> {
        match p {
            Some(p) => p.lines(),
            None => Vec::from([OPEN.to_string()]),
        }
    }

    /// Render the derivation with premises above the inference line
    /// and the conclusion below it.
    fn lines(&self) -> Vec<String> {
        let mut lines = match self {
            Self::Linear(None, Rule::Identity, _) => Vec::new(),
            Self::Linear(p, _, _) => Self::slot(p),
            Self::Branch(l, r, _, _) => beside(
                labelled("left", Self::slot(l)),
                labelled("right", Self::slot(r)),
            ),
        };
        let conclusion = self.conclusion().to_string();
        let above = lines.iter().map(|s| width(s)).max().unwrap_or(0);
        let w = above.max(width(&conclusion));
        lines.push(format!("{} {}", "─".repeat(w), self.rule()));
        lines.push(conclusion);
        lines
    }
}

impl<A: Display> Display for Derivation<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.lines();
        let mut iter = lines.iter();
        if let Some(line) = iter.next() {
            write!(f, "{}", line)?;
            iter.try_for_each(|line| write!(f, "\n{}", line))?;
        }
        Ok(())
    }
}

pub struct Indented<'d, A> {
    depth: usize,
    label: &'static str,
    derivation: Option<&'d Derivation<A>>,
}

impl<'d, A: Display> Display for Indented<'d, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{: <1$}{2}", "", self.depth * 2, self.label)?;
        let derivation = match self.derivation {
            Some(d) => d,
            None => return writeln!(f, "{}", OPEN),
        };
        writeln!(f, "{} {}", derivation.conclusion(), derivation.rule())?;
        let depth = self.depth + 1;
        match derivation {
            Derivation::Linear(None, Rule::Identity, _) => Ok(()),
            Derivation::Linear(p, _, _) => {
                let derivation = p.as_deref();
                let label = "";
                Self { depth, label, derivation }.fmt(f)
            }
            Derivation::Branch(l, r, _, _) => {
                let (label, derivation) = ("left: ", l.as_deref());
                Self { depth, label, derivation }.fmt(f)?;
                let (label, derivation) = ("right: ", r.as_deref());
                Self { depth, label, derivation }.fmt(f)
            }
        }
    }
}
