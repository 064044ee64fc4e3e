//! Parsers for model replies and stored project data
//!
//! # Error Handling Strategy
//!
//! Model replies are free text, so the response parser follows a **lenient** approach:
//!
//! - **Unknown lines**: Blank lines, commentary, and malformed markers are dropped without
//!   error. Markers are case-sensitive and matched at line start after trimming.
//!
//! - **Missing fields**: Every record is finalized on close. An empty answer becomes
//!   "Insufficient information to answer", missing confidence gets the mode's default, and a
//!   record without evidence receives one placeholder item.
//!
//! - **No records**: A reply with no `[Learning Goal` header (including the gateway's failure
//!   sentinel) parses to an empty list. Callers decide how to degrade.
//!
//! Stored project data is the opposite case: `projects.json` is operator-owned, so its custom
//! deserializers reject malformed values and the error surfaces with context.

pub mod deserializers;
pub mod lines;
pub mod response;

pub use lines::{EvidenceField, EvidenceSyntax, LineToken, classify};
pub use response::{parse_interview_response, parse_meta_response, parse_response};
