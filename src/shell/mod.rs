// Composition root for the workshops service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the key-value store and its workshop table.
// - Wire the repository and membership service into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
