//! Card system: card values and the shared catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog entries
//! - `Card`: Immutable stats and title tags
//! - `CardCatalog`: Ordered table all draws come from

pub mod card;
pub mod catalog;

pub use card::{Card, CardId, Titles};
pub use catalog::CardCatalog;
