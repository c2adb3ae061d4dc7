use covbond::config::Config;
use covbond::io;
use covbond::physics::bonding::{brute_force_bonds, find_bonds_with_stats, BondingOptions};
use covbond::utils::{logger, report};
use log::{debug, error, info};
use std::process::ExitCode;

const USAGE: &str = "Usage: covbond <file.xyz> [--tolerance T] [--margin M] [--min-atoms N] \
[--parallel] [--verify] [--json] [--verbose] [--save-config]";

struct Args {
    path: String,
    bonding: BondingOptions,
    verify: bool,
    json: bool,
    verbose: bool,
    save_config: bool,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

fn parse_args(config: &Config) -> Result<Args, String> {
    let mut args = Args {
        path: String::new(),
        bonding: config.bonding.clone(),
        verify: false,
        json: false,
        verbose: config.verbose,
        save_config: false,
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--tolerance" => args.bonding.tolerance = parse_value(&arg, it.next())?,
            "--margin" => args.bonding.margin = Some(parse_value(&arg, it.next())?),
            "--min-atoms" => args.bonding.min_atoms = parse_value(&arg, it.next())?,
            "--parallel" => args.bonding.parallel = true,
            "--verify" => args.verify = true,
            "--json" => args.json = true,
            "--verbose" | "-v" => args.verbose = true,
            "--save-config" => args.save_config = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("Unknown option {}\n{}", flag, USAGE)),
            path => {
                if !args.path.is_empty() {
                    return Err(format!("Only one input file is supported\n{}", USAGE));
                }
                args.path = path.to_string();
            }
        }
    }

    if args.path.is_empty() {
        return Err(USAGE.to_string());
    }
    Ok(args)
}

fn main() -> ExitCode {
    let (config, config_msg) = Config::load();

    let args = match parse_args(&config) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    if logger::init(args.verbose).is_err() {
        eprintln!("Logger was already installed");
    }
    debug!("{}", config_msg);

    if args.save_config {
        let saved = Config {
            bonding: args.bonding.clone(),
            verbose: args.verbose,
        };
        info!("{}", saved.save());
    }

    let mut structure = match io::load_structure(&args.path) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load {}: {}", args.path, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Loaded {} atoms ({})", structure.atoms.len(), structure.formula);

    let stats = match find_bonds_with_stats(&mut structure, &args.bonding) {
        Ok(stats) => stats,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };
    debug!("{:?}", stats);

    if args.verify {
        match brute_force_bonds(&structure, &args.bonding) {
            Ok(expected) if expected == structure.sorted_bonds() => {
                info!("Verified against all-pairs scan: {} bonds", expected.len());
            }
            Ok(expected) => {
                error!(
                    "Partitioned search found {} bonds, all-pairs scan found {}",
                    structure.bonds.len(),
                    expected.len()
                );
                return ExitCode::FAILURE;
            }
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if args.json {
        let stdout = std::io::stdout().lock();
        if let Err(e) = io::xyz::write_bonds_json(stdout, &structure) {
            error!("Failed to write JSON: {}", e);
            return ExitCode::FAILURE;
        }
        println!();
    } else {
        print!("{}", report::bond_summary(&structure, &args.path));
    }

    ExitCode::SUCCESS
}
