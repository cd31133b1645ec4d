//! Exit code constants for the handin CLI.
//!
//! - 0: Submission accepted
//! - 1: Submission rejected (naming, header, or consistency violation)
//! - 2: Fault while reading the submission (unreadable or corrupt input)

/// The submission follows the convention.
pub const SUCCESS: i32 = 0;

/// The submission violates the naming or header convention.
pub const REJECTED: i32 = 1;

/// A document or archive could not be read at all.
pub const FAULT: i32 = 2;
