use clap::Parser;
use lk::stats::Stats;
use lk::{szs, Search};
use lkprover::{demos, parse, Cli, Error};
use log::info;
use std::path::Path;

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match &cli.file {
        Some(file) => run(&cli, file),
        None => run_demos(&cli),
    };
    if let Err(e) = result {
        print!("{}", szs::Status(e.get_kind()));
        if let Some(e) = e.get_error() {
            if let Err(e) = cli.output(e) {
                log::error!("could not write error details: {}", e)
            }
        };
        std::process::exit(1);
    }
}

fn run(cli: &Cli, file: &Path) -> Result<(), Error> {
    let goal = if let Some(goal) = parse::parse(file)? {
        goal
    } else {
        print!("{}", szs::Status(szs::Satisfiable));
        return Ok(());
    };
    info!("goal: {}", goal);

    let mut search = Search::new(cli.opt());
    let proof = search.prove(goal);
    cli.write_stats(search.stats())?;

    let proof = proof.ok_or(szs::GaveUp)?;
    info!("proof with {} inferences", proof.inferences());
    print!("{}", szs::Status(szs::Theorem));
    cli.output(cli.render(&proof))?;
    Ok(())
}

fn run_demos(cli: &Cli) -> Result<(), Error> {
    let mut stats = Vec::new();
    for (name, goal) in demos::demos() {
        println!("% {}: {}", name, goal);
        let mut search = Search::new(cli.opt());
        let proof = search.prove(goal);
        stats.push(search.stats().clone());

        match szs::status(proof.as_ref()) {
            Ok(kind) => print!("{}", szs::Status(kind)),
            Err(kind) => print!("{}", szs::Status(kind)),
        }
        if let Some(proof) = proof {
            println!("{}", cli.render(&proof));
        }
        println!();
    }
    cli.write_stats(&stats.into_iter().collect::<Stats>())
}
