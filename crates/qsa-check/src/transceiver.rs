//! Transceiver summary parsing.
//!
//! The summary tool prints one header line followed by one line per port,
//! columns separated by whitespace. Column 0 is the port identifier and
//! column 1 is the presence token. "Not present" splits across columns,
//! so only the literal token `Not` marks an empty port.

use serde::{Deserialize, Serialize};

use pas_diag_common::{DiagError, DiagResult};

/// Physical transceiver presence for a port slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    /// A transceiver is detected in the slot.
    Present,
    /// The slot is empty ("Not present" in the summary).
    NotPresent,
}

impl Presence {
    /// Parses the second summary column into a presence value.
    pub fn from_token(token: &str) -> Self {
        if token == "Not" {
            Presence::NotPresent
        } else {
            Presence::Present
        }
    }

    /// Returns true if the slot holds a transceiver.
    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present)
    }
}

/// One port line of the transceiver summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    /// Port identifier (first summary column).
    pub port: String,
    /// Detected transceiver presence (second summary column).
    pub presence: Presence,
}

/// Parses the transceiver summary output into port records.
///
/// Drops the header line and splits each remaining line on whitespace.
/// Blank lines are tolerated; a non-blank line with fewer than two
/// columns fails the whole check rather than silently skipping a port.
///
/// # Arguments
///
/// * `command` - The command that produced the output (for error context)
/// * `output` - The captured summary text
pub fn parse_summary(command: &str, output: &str) -> DiagResult<Vec<PortRecord>> {
    if output.trim().is_empty() {
        return Err(DiagError::empty_output(command));
    }

    let mut records = Vec::new();

    // Skip the output title line
    for line in output.lines().skip(1) {
        let mut cols = line.split_whitespace();
        let (port, presence) = match (cols.next(), cols.next()) {
            (Some(port), Some(presence)) => (port, presence),
            (None, _) => continue,
            (Some(_), None) => {
                return Err(DiagError::malformed_output(
                    command,
                    format!("expected at least 2 columns, got line '{}'", line.trim()),
                ));
            }
        };

        records.push(PortRecord {
            port: port.to_string(),
            presence: Presence::from_token(presence),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY_CMD: &str = "/usr/bin/opx-show-transceivers summary";

    #[test]
    fn test_presence_from_token() {
        assert_eq!(Presence::from_token("Present"), Presence::Present);
        assert_eq!(Presence::from_token("Not"), Presence::NotPresent);

        // Anything other than the sentinel counts as present
        assert_eq!(Presence::from_token("present"), Presence::Present);
        assert_eq!(Presence::from_token("?"), Presence::Present);
    }

    #[test]
    fn test_parse_summary_single_port() {
        let output = "Port  Presence\n1 Present";
        let records = parse_summary(SUMMARY_CMD, output).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].port, "1");
        assert_eq!(records[0].presence, Presence::Present);
    }

    #[test]
    fn test_parse_summary_not_present() {
        // "Not present" splits into two columns; only column 1 is inspected
        let output = "Port  Presence\n3 Not present";
        let records = parse_summary(SUMMARY_CMD, output).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].presence, Presence::NotPresent);
        assert!(!records[0].presence.is_present());
    }

    #[test]
    fn test_parse_summary_multiple_ports() {
        let output = "Port  Presence\n1 Present\n2 Not present\n3 Present";
        let records = parse_summary(SUMMARY_CMD, output).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].port, "2");
        assert_eq!(records[1].presence, Presence::NotPresent);
        assert_eq!(records[2].presence, Presence::Present);
    }

    #[test]
    fn test_parse_summary_header_only() {
        let records = parse_summary(SUMMARY_CMD, "Port  Presence").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_summary_blank_lines_skipped() {
        let output = "Port  Presence\n1 Present\n\n2 Present\n";
        let records = parse_summary(SUMMARY_CMD, output).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_summary_malformed_line() {
        let output = "Port  Presence\n1 Present\n2";
        let err = parse_summary(SUMMARY_CMD, output).unwrap_err();

        match err {
            DiagError::MalformedOutput { detail, .. } => {
                assert!(detail.contains("'2'"));
            }
            other => panic!("Expected MalformedOutput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_summary_empty_output() {
        let err = parse_summary(SUMMARY_CMD, "").unwrap_err();
        assert!(matches!(err, DiagError::EmptyOutput { .. }));
    }

    #[test]
    fn test_port_record_serialization() {
        let record = PortRecord {
            port: "1".to_string(),
            presence: Presence::Present,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: PortRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
