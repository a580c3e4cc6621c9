//! Readers for published series tables
//!
//! Two text layouts are understood:
//!
//! - The IERS Conventions electronic tables (tab5.2a-d, tab5.3a-b): tier
//!   headers of the form `j = 1  Number of terms = 253`, then rows
//!   `i  amp_a  amp_b  l l' F D Om Me Ve E Ma Ju Sa Ur Ne pA`. Amplitudes are
//!   kept in the file's units (microarcseconds).
//! - A plain term table: `K` integer multipliers followed by `M` (sin, cos)
//!   amplitude pairs per row. `#` starts a comment line.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::Term;
use crate::fundamentals::N_ARGS;
use crate::{io_err, EarthRotationError, Result};

/// Column order of the two amplitudes in an IERS series row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmplitudeOrder {
    /// First amplitude multiplies sin(arg), second multiplies cos(arg)
    SinCos,
    /// First amplitude multiplies cos(arg), second multiplies sin(arg)
    CosSin,
}

fn parse_err(line: usize, message: impl Into<String>) -> EarthRotationError {
    EarthRotationError::Parse {
        line,
        message: message.into(),
    }
}

/// Read a whole table file into memory
pub fn read_table_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "loaded series table");
    Ok(text)
}

/// Parse an IERS Conventions series table into tiers of rows
///
/// Tier `j` holds the rows multiplied by t^j. Rows seen before any tier
/// header belong to tier 0. Header, rule and caption lines are skipped; a
/// line that starts with an integer index but does not hold a full row is an
/// error.
pub fn parse_iers_series(text: &str, order: AmplitudeOrder) -> Result<Vec<Vec<Term<N_ARGS, 1>>>> {
    let mut tiers: Vec<Vec<Term<N_ARGS, 1>>> = Vec::new();
    let mut tier = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('j') {
            if let Some(value) = rest.trim_start().strip_prefix('=') {
                let token = value.split_whitespace().next().unwrap_or("");
                tier = token
                    .parse()
                    .map_err(|_| parse_err(line_no, format!("bad tier header '{line}'")))?;
                continue;
            }
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens[0].parse::<u32>().is_err() {
            continue;
        }
        if tokens.len() != 3 + N_ARGS {
            return Err(parse_err(
                line_no,
                format!("expected {} columns, found {}", 3 + N_ARGS, tokens.len()),
            ));
        }

        let a: f64 = parse_float(tokens[1], line_no)?;
        let b: f64 = parse_float(tokens[2], line_no)?;
        let mut multipliers = [0i8; N_ARGS];
        for (m, tok) in multipliers.iter_mut().zip(&tokens[3..]) {
            *m = parse_multiplier(tok, line_no)?;
        }
        let amplitudes = match order {
            AmplitudeOrder::SinCos => [[a, b]],
            AmplitudeOrder::CosSin => [[b, a]],
        };

        if tiers.len() <= tier {
            tiers.resize_with(tier + 1, Vec::new);
        }
        tiers[tier].push(Term::new(multipliers, amplitudes));
    }

    debug!(
        tiers = tiers.len(),
        terms = tiers.iter().map(Vec::len).sum::<usize>(),
        "parsed IERS series"
    );
    Ok(tiers)
}

/// Parse a plain term table with `K` multipliers and `M` (sin, cos) pairs per row
pub fn parse_term_table<const K: usize, const M: usize>(text: &str) -> Result<Vec<Term<K, M>>> {
    let mut terms = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != K + 2 * M {
            return Err(parse_err(
                line_no,
                format!("expected {} columns, found {}", K + 2 * M, tokens.len()),
            ));
        }
        let mut multipliers = [0i8; K];
        for (m, tok) in multipliers.iter_mut().zip(&tokens[..K]) {
            *m = parse_multiplier(tok, line_no)?;
        }
        let mut amplitudes = [[0.0f64; 2]; M];
        for (pair, chunk) in amplitudes.iter_mut().zip(tokens[K..].chunks(2)) {
            pair[0] = parse_float(chunk[0], line_no)?;
            pair[1] = parse_float(chunk[1], line_no)?;
        }
        terms.push(Term::new(multipliers, amplitudes));
    }
    Ok(terms)
}

fn parse_float(token: &str, line: usize) -> Result<f64> {
    // Fortran-style exponents appear in some distributed tables
    token
        .replace(['D', 'd'], "E")
        .parse()
        .map_err(|_| parse_err(line, format!("invalid number '{token}'")))
}

fn parse_multiplier(token: &str, line: usize) -> Result<i8> {
    token
        .parse()
        .map_err(|_| parse_err(line, format!("invalid multiplier '{token}'")))
}
