// NOTE: plandeck Architecture Rationale
//
// Why full-rewrite persistence (not incremental)?
// - The collection is one small JSON document; a read-modify-write of the
//   whole array keeps every mutation all-or-nothing
// - No index, no partial writes, no concurrent-writer protection: a single
//   client at a time is the contract
//
// Why a store crate behind the handlers?
// - The persisted document is the only authority; the presentation layer
//   holds a projection that is re-read after every mutation
// - Ids travel through view models and event payloads, never parsed back
//   out of rendered output

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
