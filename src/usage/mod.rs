//! Usage log access
//!
//! Reads the externally maintained `YYYY-MM-DD:<seconds>` log.

mod reader;

pub(crate) use reader::UsageLog;
