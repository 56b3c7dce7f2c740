//! Output formatting for headless brute-force and scan runs.

use serde::Serialize;

use crate::bruteforce::{BruteForceSession, Phase};
use crate::cipher::{DISPLAY_SHIFT, caesar_shift};
use crate::scan::ScanState;

#[derive(Debug, Clone, Serialize)]
pub struct CrackReport {
    pub target: String,
    pub cracked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    pub ticks: u64,
    pub attempts: u64,
    pub last_guess: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caesar: Option<String>,
}

impl CrackReport {
    pub fn from_session(session: &BruteForceSession, ticks: u64) -> Self {
        let cracked = session.is_cracked();
        Self {
            target: session.target().to_string(),
            cracked,
            phase: session.cracked_in(),
            ticks,
            attempts: session.attempts(),
            last_guess: session.guess().to_string(),
            caesar: cracked.then(|| caesar_shift(session.target(), DISPLAY_SHIFT)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub ticks: u64,
    pub progress: f64,
    pub complete: bool,
    pub addresses: Vec<String>,
}

impl ScanReport {
    pub fn from_scan(scan: &ScanState, ticks: u64) -> Self {
        Self {
            ticks,
            progress: scan.progress,
            complete: scan.progress >= 1.0,
            addresses: scan.addresses.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Use 'text' or 'json'.")),
        }
    }
}

pub fn print_crack_report(report: &CrackReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", crack_text(report)),
        OutputFormat::Json => print_json(report),
    }
}

pub fn print_scan_report(report: &ScanReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", scan_text(report)),
        OutputFormat::Json => print_json(report),
    }
}

fn crack_text(r: &CrackReport) -> String {
    let rule = "=".repeat(70);
    let mut out = format!("\n{rule}\nBRUTE FORCE\n{rule}\n");

    out.push_str(&format!("  Target:    {}\n", "*".repeat(r.target.chars().count())));
    match (&r.phase, &r.caesar) {
        (Some(phase), Some(caesar)) => {
            out.push_str(&format!("  SUCCESS! Password Cracked: {}\n", r.target));
            out.push_str(&format!("  Caesar Cipher (Shift {DISPLAY_SHIFT}): {caesar}\n"));
            out.push_str(&format!("  Found in:  {phase} phase\n"));
        }
        _ => {
            out.push_str("  Not cracked\n");
            out.push_str(&format!("  Last guess: {}\n", r.last_guess));
        }
    }
    out.push_str(&format!("  Ticks:     {}\n", r.ticks));
    out.push_str(&format!("  Attempts:  {}\n", r.attempts));
    out.push_str(&format!("{rule}\n"));
    out
}

fn scan_text(r: &ScanReport) -> String {
    let rule = "=".repeat(70);
    let mut out = format!("\n{rule}\nNETWORK SCAN\n{rule}\n");

    if r.addresses.is_empty() {
        out.push_str("\nNo addresses found.\n");
    } else {
        out.push_str(&format!("\nIP Addresses nearby ({}):\n", r.addresses.len()));
        for addr in &r.addresses {
            out.push_str(&format!("  {addr}\n"));
        }
    }

    out.push_str("\nSUMMARY:\n");
    out.push_str(&format!("  Ticks:     {}\n", r.ticks));
    out.push_str(&format!("  Progress:  {:.1}%\n", r.progress * 100.0));
    out.push_str(&format!(
        "  Status:    {}\n",
        if r.complete { "Scan Complete!" } else { "Scan Stopped" }
    ));
    out.push_str(&format!("{rule}\n"));
    out
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
