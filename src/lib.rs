//! Search-and-paginate client for the PokeAPI GraphQL species catalog.
//!
//! - [`state::SearchController`] runs one search session and publishes
//!   [`state::SearchState`] transitions to subscribers.
//! - [`client::Transport`] is the seam to the remote catalog;
//!   [`client::GraphQlClient`] is the HTTP implementation.
//! - [`ui`] renders states as plain text for the `dexsearch` binary.

pub mod client;
pub mod constants;
pub mod domain;
pub mod state;
pub mod ui;

#[cfg(test)]
mod test_utils;
