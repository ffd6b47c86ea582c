//! Colored status lines for user-facing command output.

use std::fmt;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

fn emit<T: fmt::Display>(color: &str, icon: &str, msg: T) {
    println!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(BLUE, "ℹ️", msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(GREEN, "✅", msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(YELLOW, "⚠️", msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, "❌", RESET, msg);
}

/// Ask a yes/no confirmation from the user. Anything but an explicit
/// "y"/"yes" (including a closed stdin) counts as no.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
