//! Text file format for instances, matchings, and verdicts
//!
//! External form is 1-indexed; everything in memory is 0-indexed. An instance
//! file holds `n` on the first line, then `n` proposer preference lines and
//! `n` receiver preference lines. A matching file holds one `proposer
//! receiver` pair per line. Blank lines are ignored throughout.
//!
//! Out-of-range or non-numeric ids are format errors and never reach the
//! verifier; in-range structural defects (duplicates, unmatched proposers)
//! parse fine and flow through as `Invalid` verdicts.

use thiserror::Error;
use types::agent::{ProposerId, ReceiverId};
use types::errors::InstanceError;
use types::instance::Instance;
use types::pairing::Pairing;
use verifier::{ValidityError, Verdict};

/// Rejections raised while parsing instance or matching files
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("file is empty: expected a size header")]
    MissingHeader,

    #[error("line {line}: expected an integer, got '{token}'")]
    BadInteger { line: usize, token: String },

    #[error("line {line}: instance size {value} is not positive")]
    BadSize { line: usize, value: i64 },

    #[error("expected {expected} non-empty lines, got {got}")]
    TooFewLines { expected: usize, got: usize },

    #[error("line {line}: expected 2 fields for a matching pair, got {got}")]
    BadPairLine { line: usize, got: usize },

    #[error("line {line}: id {id} out of range, valid ids are 1..={n}")]
    IdOutOfRange { line: usize, id: i64, n: usize },

    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Non-empty trimmed lines, paired with their 1-based position in the file
fn significant_lines(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}

fn parse_int(line: usize, token: &str) -> Result<i64, FormatError> {
    token.parse().map_err(|_| FormatError::BadInteger {
        line,
        token: token.to_string(),
    })
}

/// Parse a 1-indexed external id into a 0-based index
fn parse_id(line: usize, token: &str, n: usize) -> Result<usize, FormatError> {
    let id = parse_int(line, token)?;
    if id < 1 || id > n as i64 {
        return Err(FormatError::IdOutOfRange { line, id, n });
    }
    Ok((id - 1) as usize)
}

/// Parse a preference file into a validated instance
pub fn parse_instance(text: &str) -> Result<Instance, FormatError> {
    let lines = significant_lines(text);
    let &(header_line, header) = lines.first().ok_or(FormatError::MissingHeader)?;
    let size = parse_int(header_line, header)?;
    if size < 1 {
        return Err(FormatError::BadSize {
            line: header_line,
            value: size,
        });
    }
    let n = size as usize;

    if lines.len() < 1 + 2 * n {
        return Err(FormatError::TooFewLines {
            expected: 1 + 2 * n,
            got: lines.len(),
        });
    }

    let parse_side = |rows: &[(usize, &str)]| -> Result<Vec<Vec<usize>>, FormatError> {
        rows.iter()
            .map(|&(line, row)| {
                row.split_whitespace()
                    .map(|token| parse_id(line, token, n))
                    .collect()
            })
            .collect()
    };

    let proposer_prefs = parse_side(&lines[1..1 + n])?;
    let receiver_prefs = parse_side(&lines[1 + n..1 + 2 * n])?;

    Ok(Instance::from_raw(proposer_prefs, receiver_prefs)?)
}

/// Parse a matching file into a (possibly malformed) pairing
///
/// A proposer listed twice keeps its last assignment, leaving its earlier
/// receiver uncovered — exactly the shape the verifier classifies as invalid.
pub fn parse_pairing(text: &str, n: usize) -> Result<Pairing, FormatError> {
    let lines = significant_lines(text);
    if lines.len() != n {
        return Err(FormatError::TooFewLines {
            expected: n,
            got: lines.len(),
        });
    }

    let mut pairing = Pairing::unmatched(n);
    for &(line, row) in &lines {
        let fields: Vec<&str> = row.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(FormatError::BadPairLine {
                line,
                got: fields.len(),
            });
        }
        let proposer = parse_id(line, fields[0], n)?;
        let receiver = parse_id(line, fields[1], n)?;
        pairing.assign(ProposerId::new(proposer), ReceiverId::new(receiver));
    }
    Ok(pairing)
}

/// Render matched pairs as 1-indexed `proposer receiver` lines
pub fn render_pairing(pairing: &Pairing) -> String {
    let mut out = String::new();
    for (proposer, receiver) in pairing.matched_pairs() {
        out.push_str(&format!(
            "{} {}\n",
            proposer.index() + 1,
            receiver.index() + 1
        ));
    }
    out
}

/// Render a verdict as a single 1-indexed report line
pub fn render_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Stable => "VALID STABLE".to_string(),
        Verdict::Unstable { proposer, receiver } => format!(
            "UNSTABLE: blocking pair (proposer {}, receiver {})",
            proposer.index() + 1,
            receiver.index() + 1
        ),
        Verdict::Invalid(defect) => format!("INVALID: {}", render_defect(defect)),
    }
}

fn render_defect(defect: &ValidityError) -> String {
    match defect {
        ValidityError::WrongSize { got, expected } => {
            format!("matching covers {got} proposers, expected {expected}")
        }
        ValidityError::UnmatchedProposer { proposer } => {
            format!("proposer {} is not matched", proposer.index() + 1)
        }
        ValidityError::DuplicateReceiver {
            receiver,
            first,
            second,
        } => format!(
            "receiver {} is matched to both proposer {} and proposer {}",
            receiver.index() + 1,
            first.index() + 1,
            second.index() + 1
        ),
        ValidityError::UncoveredReceivers { receivers } => {
            let ids: Vec<String> = receivers
                .iter()
                .map(|r| (r.index() + 1).to_string())
                .collect();
            format!("receivers {} are not matched to any proposer", ids.join(", "))
        }
    }
}
