//! Hacker Dashboard CLI - runs the dashboard simulations without a window.
//!
//! Usage:
//!   hacker-dashboard-cli crack hunter2
//!   hacker-dashboard-cli crack ab --wordlist words.txt --format json
//!   hacker-dashboard-cli scan --ticks 400 --seed 7 --save
//!   hacker-dashboard-cli caesar "abcXYZ" --shift 3

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dashboard_core::bruteforce::BruteForceSession;
use dashboard_core::cipher::{DISPLAY_SHIFT, caesar_shift};
use dashboard_core::config::{DashboardConfig, load_config};
use dashboard_core::report::{
    CrackReport, OutputFormat, ScanReport, print_crack_report, print_scan_report,
};
use dashboard_core::scan::ScanState;
use dashboard_core::store::{AddressStore, CredentialStore, WordlistFile};

#[derive(Parser)]
#[command(name = "hacker-dashboard-cli")]
#[command(about = "Headless brute-force and scan simulations from the hacker dashboard")]
struct Cli {
    /// Path to a dashboard.json config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Brute force a password: wordlist first, then exhaustive search
    Crack(CrackArgs),
    /// Run the fake network scan
    Scan(ScanArgs),
    /// Print the Caesar rotation of a string
    Caesar(CaesarArgs),
}

#[derive(Args)]
struct CrackArgs {
    /// Password to brute force
    target: String,

    /// Wordlist file (defaults to the credential file, which also learns cracks)
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Give up after this many ticks
    #[arg(long, default_value = "100000")]
    max_ticks: u64,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Args)]
struct ScanArgs {
    /// Ticks to run; the scan stops early once complete
    #[arg(short, long, default_value = "400")]
    ticks: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Overwrite the address file with the discovered addresses
    #[arg(long)]
    save: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Args)]
struct CaesarArgs {
    text: String,

    /// Places to rotate letters by
    #[arg(short, long, default_value_t = DISPLAY_SHIFT, allow_hyphen_values = true)]
    shift: i32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };

    match cli.command {
        Command::Crack(args) => crack(&config, args),
        Command::Scan(args) => scan(&config, args),
        Command::Caesar(args) => {
            println!("{}", caesar_shift(&args.text, args.shift));
            Ok(())
        }
    }
}

fn crack(config: &DashboardConfig, args: CrackArgs) -> Result<()> {
    if args.target.is_empty() {
        bail!("target password must not be empty");
    }

    let wordlist = match args.wordlist {
        Some(path) => WordlistFile::new(path),
        None => CredentialStore::new(config.credentials_path()).wordlist(),
    };
    eprintln!("[*] Wordlist: {}", wordlist.path().display());

    let mut session = BruteForceSession::new(wordlist)
        .with_batches(config.dictionary_batch, config.exhaustive_batch);
    session.retarget(&args.target);

    eprintln!("[*] Cracking...");
    let mut ticks = 0;
    while ticks < args.max_ticks && !session.is_cracked() {
        session.step();
        ticks += 1;
    }

    if !session.is_cracked() {
        eprintln!("[*] Gave up after {ticks} ticks");
    }

    print_crack_report(&CrackReport::from_session(&session, ticks), args.format);
    Ok(())
}

fn scan(config: &DashboardConfig, args: ScanArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut state = ScanState::new(config.progress_step, config.discovery_odds);
    state.toggle();

    eprintln!("[*] Scanning...");
    let mut ticks = 0;
    while ticks < args.ticks {
        ticks += 1;
        if state.tick(&mut rng).completed {
            break;
        }
    }
    eprintln!("[*] Found {} addresses in {ticks} ticks", state.addresses.len());

    if args.save {
        save_addresses(&config.addresses_path(), &state.addresses)?;
    }

    print_scan_report(&ScanReport::from_scan(&state, ticks), args.format);
    Ok(())
}

fn save_addresses(path: &Path, addresses: &[String]) -> Result<()> {
    AddressStore::new(path)
        .save(addresses)
        .with_context(|| format!("Cannot save addresses to {}", path.display()))?;
    eprintln!("[*] Saved addresses to {}", path.display());
    Ok(())
}
