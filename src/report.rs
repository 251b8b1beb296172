//! Text reports printed by the `filepow` binary
//!
//! The mining report doubles as a header file: its `Key: value` lines are
//! recognized by the header parser and the extra lines are ignored.

use std::path::Path;

use filepow_core::{Field, FieldCheck, FieldStatus, MiningResult, VerificationReport};

/// Labeled lines describing a finished search
pub fn mining_report(path: &Path, result: &MiningResult) -> String {
    [
        format!("File: {}", path.display()),
        format!("{}: {}", Field::InitialHash, result.initial_hash),
        format!("{}: {}", Field::ProofOfWork, result.suffix),
        format!("{}: {}", Field::Hash, result.hash),
        format!("{}: {}", Field::LeadingZeroBits, result.zero_bits),
        format!("Iterations: {}", result.iterations),
        format!("Compute-time: {}", result.elapsed_secs()),
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect()
}

/// `PASSED`/`ERROR` lines for each checked field, then `pass` or `fail`
pub fn verification_report(report: &VerificationReport) -> String {
    let mut out = String::new();
    for text in report.checks.iter().filter_map(check_line) {
        out.push_str(&text);
        out.push('\n');
    }
    out.push_str(if report.passed { "pass\n" } else { "fail\n" });
    out
}

fn check_line(check: &FieldCheck) -> Option<String> {
    let key = check.field;
    match check.status {
        FieldStatus::Missing => Some(format!("ERROR: missing {key} in header")),
        FieldStatus::Matched => Some(format!("PASSED: {key} matches header")),
        FieldStatus::Mismatched => Some(format!(
            "ERROR: {key} does not match header\n\texpected: {}\n\treceived: {}",
            check.expected.as_deref().unwrap_or_default(),
            check.received.as_deref().unwrap_or_default(),
        )),
        FieldStatus::Unchecked => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filepow_core::{mine, parse_str, verify, PartialHeader};

    #[test]
    fn test_mining_report_reads_back_as_header() {
        let data = b"report as header";
        let result = mine(3, data);
        let text = mining_report(Path::new("notes/Hash-list.txt"), &result);

        assert!(text.starts_with("File: notes/Hash-list.txt\n"));
        assert!(text.contains(&format!("Proof-of-work: {}\n", result.suffix)));
        assert!(text.contains(&format!("Iterations: {}\n", result.iterations)));
        assert!(text.contains("Compute-time: "));
        assert_eq!(text.lines().count(), 7);
        assert!(text.ends_with('\n'));

        let parsed = parse_str(&text);
        assert_eq!(parsed.to_header(), Some(result.header()));
        assert!(verify(&parsed, data).passed);
    }

    #[test]
    fn test_passing_report_lines() {
        let data = b"passing";
        let report = verify(&PartialHeader::from(&mine(2, data).header()), data);
        let text = verification_report(&report);

        assert_eq!(
            text,
            "PASSED: Initial-hash matches header\n\
             PASSED: Leading-zero-bits matches header\n\
             PASSED: Hash matches header\n\
             pass\n"
        );
    }

    #[test]
    fn test_failing_report_lines() {
        let data = b"failing";
        let header = parse_str("Initial-hash deadbeef\nLeading-zero-bits\n");
        let report = verify(&header, data);
        let text = verification_report(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ERROR: Initial-hash does not match header");
        assert_eq!(lines[1], format!("\texpected: {}", report.initial_hash));
        assert_eq!(lines[2], "\treceived: deadbeef");
        assert_eq!(lines[3], "ERROR: missing Proof-of-work in header");
        assert_eq!(lines[4], "ERROR: missing Leading-zero-bits in header");
        assert_eq!(lines[5], "ERROR: missing Hash in header");
        assert_eq!(lines[6], "fail");
        assert_eq!(lines.len(), 7);
    }
}
