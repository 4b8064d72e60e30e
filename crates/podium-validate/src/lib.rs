//! Event group validation.
//!
//! Placement rows are grouped by `event_key` (first-seen order) and each group
//! is checked for:
//!
//! - **Unique places**: no rank appears twice
//! - **Contiguous places**: ranks run `1..=max` without gaps
//! - **Unique entries**: no `entry_key` appears twice
//!
//! [`validate_groups`] stops at the first invalid group; [`check_groups`]
//! reports every issue in every group.
//!
//! Leaderboard rows need no grouping: each row is already a complete,
//! self-validated event.
//!
//! # Example
//!
//! ```ignore
//! use podium_validate::validate_groups;
//!
//! let groups = validate_groups(&rows)?;
//! for group in &groups {
//!     println!("{}: {} placements", group.event_key, group.len());
//! }
//! ```

mod error;
mod groups;
mod issue;
mod report;

pub use error::{GroupError, Result};
pub use groups::{check_groups, group_by_event, validate_groups};
pub use issue::Issue;
pub use report::{GroupIssue, ValidationReport};
