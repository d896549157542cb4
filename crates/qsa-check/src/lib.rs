//! QSA adapter consistency checker for OPX transceiver ports.
//!
//! This crate implements `qsa-check`, a one-shot diagnostic that verifies
//! agreement between physical transceiver detection and the observed
//! hardware-state database entry for the QSA adapter attribute.
//!
//! # Check
//!
//! A port that holds a transceiver (presence is not the "Not present"
//! sentinel) must not report QSA adapter type `0` ("none installed") in
//! the media state. The first port violating this rule fails the check.
//!
//! # Commands consumed
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `opx-show-transceivers summary` | One line per port: id, presence |
//! | `cps_get_oid.py observed/base-pas/media port=<id>` | Media state read |
//!
//! The media state output is filtered through `grep -e qsa-adapter`; the
//! last whitespace-separated token of the filtered line is the adapter type.
//!
//! # Example
//!
//! ```ignore
//! use qsa_check::{CheckOutcome, QsaChecker};
//!
//! let mut checker = QsaChecker::new();
//! match checker.run_check().await? {
//!     CheckOutcome::Pass => println!("All ports checked successfully"),
//!     CheckOutcome::Violation { port, qsa_type } => { /* report */ }
//! }
//! ```

mod checker;
mod media;
mod transceiver;

pub use checker::{CheckOutcome, QsaChecker};
pub use media::{qsa_query_cmd, NO_ADAPTER_TYPE, QSA_ADAPTER_MARKER};
pub use transceiver::{parse_summary, PortRecord, Presence};
