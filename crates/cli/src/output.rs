//! Check-result markers for `doctor` output.

use colored::Colorize;

pub fn pass() -> String {
    "[✓]".green().to_string()
}

pub fn warn() -> String {
    "[!]".yellow().to_string()
}

pub fn problem() -> String {
    "[✗]".red().to_string()
}
