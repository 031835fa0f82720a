use crate::Error;
use lk::role::RoleMap;
use lk::{SFormula, Sequent};
use log::info;
use std::path::{Path, PathBuf};

fn read_file(filename: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(filename).or_else(|e| {
        let tptp = std::env::var("TPTP").or(Err(e))?;
        let mut path = PathBuf::from(tptp);
        path.push(filename);
        std::fs::read(path)
    })
}

/// Load the formulas of a TPTP file and all files it includes.
pub fn parse_file(filename: &Path, forms: &mut RoleMap<Vec<SFormula>>) -> Result<(), Error> {
    info!("loading {:?}", filename);
    let bytes = read_file(filename)?;
    lk::tptp::parse(&bytes, forms, |include, forms| {
        info!("include {}", include);
        parse_file(Path::new(include), forms)
    })
}

/// Load a TPTP problem as sequent, returning `None` if the problem is empty.
pub fn parse(filename: &Path) -> Result<Option<Sequent<String>>, Error> {
    let mut forms = RoleMap::default();
    parse_file(filename, &mut forms)?;
    Ok(forms.join())
}
