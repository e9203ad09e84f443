use std::env;
use std::error::Error;
use std::process;

use log::info;
use partframe::io::read_csv;
use partframe::ReshapeConfig;

fn print_help() {
    println!("Usage: partframe <file.csv> <key column>...");
    println!();
    println!("Reorders the rows of <file.csv> so that rows sharing the key columns'");
    println!("values are contiguous, groups in first-occurrence order, then prints");
    println!("the regrouped table and its long (melted) form.");
    println!();
    println!("Environment:");
    println!("  PARTFRAME_CONFIG  path to a TOML configuration file");
    println!("  RUST_LOG          log filter, e.g. RUST_LOG=partframe=debug");
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }
    if args.len() < 2 {
        print_help();
        process::exit(2);
    }

    let config = match env::var("PARTFRAME_CONFIG") {
        Ok(path) => ReshapeConfig::from_file(path)?,
        Err(_) => ReshapeConfig::default(),
    };

    let path = &args[0];
    let keys: Vec<&str> = args[1..].iter().map(String::as_str).collect();

    let df = read_csv(path, &config.csv_options())?;
    info!(
        "loaded {} rows x {} columns from {}",
        df.row_count(),
        df.column_count(),
        path
    );

    let regrouped = df.par_regroup(&keys, config.parallel.row_threshold)?;
    println!("{}", regrouped);

    let melted = regrouped.melt(&config.melt_options(&keys[..]))?;
    println!("{}", melted);

    Ok(())
}
