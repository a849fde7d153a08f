//! App-wide contexts: wallet identity, notifications, and the
//! explorer-to-detail summary handoff.

pub mod notifications;
pub mod tokens;
pub mod wallet;
