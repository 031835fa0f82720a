use crate::Error;
use clap::Parser;
use lk::stats::Stats;
use lk::{Check, Derivation, Opt, Weakening};
use std::fmt::Display;
use std::path::PathBuf;

/// Prover for propositional sequents in Gentzen's System LK
///
/// When no problem file is given,
/// a fixed collection of example sequents is proved.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
pub struct Cli {
    /// When to weaken sequents
    ///
    /// With "atomic" weakening, formulas are only removed from sequents
    /// that consist of atoms, so all connectives are decomposed first.
    /// With "eager" weakening, a formula is removed as soon as
    /// it does not occur on the other side of the sequent.
    ///
    /// Eager weakening makes the search incomplete!
    #[arg(long)]
    weakening: Option<Weakening>,

    /// Require proofs of both premises of branching inferences
    ///
    /// By default, a branching inference is accepted
    /// as soon as one of its premises is proved.
    /// This accepts some sequents that are not valid, such as "p ⊢ p ∧ q".
    #[arg(long)]
    strict: bool,

    /// Show derivations as indented list of inferences
    #[arg(long)]
    indent: bool,

    /// Write SZS output (such as proofs and error details) to given file
    #[arg(short)]
    pub output: Option<PathBuf>,

    /// Write proof search statistics in JSON format to given file
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Path of the TPTP problem file
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn opt(&self) -> Opt {
        let check = if self.strict { Check::All } else { Check::Any };
        let weakening = self.weakening.unwrap_or_default();
        Opt { weakening, check }
    }

    pub fn output(&self, out: impl Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, out.to_string()),
            None => write!(std::io::stdout(), "{}", lk::szs::Output(out)),
        }
    }

    pub fn render<'a, A: Display + 'a>(&self, proof: &'a Derivation<A>) -> Box<dyn Display + 'a> {
        if self.indent {
            Box::new(proof.indented())
        } else {
            Box::new(proof)
        }
    }

    pub fn write_stats(&self, stats: &Stats) -> Result<(), Error> {
        if let Some(file) = &self.stats {
            let json = serde_json::to_string(stats)?;
            std::fs::write(file, json)?;
        }
        Ok(())
    }
}
