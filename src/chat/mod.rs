//! Visitor chat assistant.
//!
//! Questions are answered from a keyword table when possible and forwarded to
//! a completion API otherwise:
//!
//! - [`answers`] - ordered keyword rules and the default answer
//! - [`matcher`] - scores a question against the table
//! - [`availability`] - one-way latch disabling the API after quota errors
//! - [`persona`] - fixed system prompt and sampling settings
//! - [`remote`] - completion client that never fails to its caller
//! - [`dispatcher`] - local first, remote second

pub mod answers;
pub mod availability;
pub mod dispatcher;
pub mod matcher;
pub mod persona;
pub mod remote;

pub use answers::{KeywordRule, KeywordTable, DEFAULT_ANSWER};
pub use availability::ServiceAvailability;
pub use dispatcher::ResponseDispatcher;
pub use matcher::{LocalMatcher, Match};
pub use remote::RemoteCompletionClient;
