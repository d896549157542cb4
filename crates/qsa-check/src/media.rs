//! Hardware-state (media) query for the QSA adapter attribute.
//!
//! The observed media object for a port is read with the CPS get tool and
//! filtered to the `qsa-adapter` attribute line; the last whitespace token
//! of that line is the recorded adapter type.

use pas_diag_common::{shell, DiagError, DiagResult};

/// CPS object path for the observed media state.
pub const MEDIA_OBJECT_PATH: &str = "observed/base-pas/media";

/// Attribute marker selected from the media query output.
pub const QSA_ADAPTER_MARKER: &str = "qsa-adapter";

/// Adapter type sentinel meaning "no adapter installed".
pub const NO_ADAPTER_TYPE: &str = "0";

/// Builds the media query command for one port.
///
/// The port identifier is shell-quoted; the pipe into grep keeps only
/// the `qsa-adapter` attribute line.
pub fn qsa_query_cmd(port: &str) -> String {
    format!(
        "{} {} port={} | {} -e {}",
        shell::CPS_GET_CMD,
        MEDIA_OBJECT_PATH,
        shell::shellquote(port),
        shell::GREP_CMD,
        QSA_ADAPTER_MARKER
    )
}

/// Extracts the QSA adapter type from the filtered query output.
///
/// The type is the last whitespace-separated token. Output with no
/// tokens means the media object had no `qsa-adapter` attribute, which
/// fails the check rather than being treated as any particular type.
pub fn parse_qsa_type(command: &str, output: &str) -> DiagResult<String> {
    output
        .split_whitespace()
        .last()
        .map(str::to_string)
        .ok_or_else(|| DiagError::empty_output(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qsa_query_cmd() {
        let cmd = qsa_query_cmd("1");
        assert_eq!(
            cmd,
            "/usr/bin/cps_get_oid.py observed/base-pas/media port=\"1\" | /bin/grep -e qsa-adapter"
        );
    }

    #[test]
    fn test_qsa_query_cmd_quotes_port() {
        let cmd = qsa_query_cmd("1$x");
        assert!(cmd.contains("port=\"1\\$x\""));
    }

    #[test]
    fn test_parse_qsa_type_last_token() {
        let output = "base-pas/media/qsa-adapter-type = qsa-adapter 4";
        assert_eq!(parse_qsa_type("cmd", output).unwrap(), "4");
    }

    #[test]
    fn test_parse_qsa_type_none_sentinel() {
        let output = "base-pas/media/qsa-adapter-type = qsa-adapter 0";
        assert_eq!(parse_qsa_type("cmd", output).unwrap(), NO_ADAPTER_TYPE);
    }

    #[test]
    fn test_parse_qsa_type_empty_output() {
        let err = parse_qsa_type("cmd", "").unwrap_err();
        assert!(matches!(err, DiagError::EmptyOutput { .. }));

        let err = parse_qsa_type("cmd", "   \n  ").unwrap_err();
        assert!(matches!(err, DiagError::EmptyOutput { .. }));
    }
}
