//! # Encdec Architecture
//!
//! Encdec is a small text cipher library with a command-line client. The cipher
//! core knows nothing about terminals, files or arguments; everything that does
//! lives in an outer layer.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, io.rs, config.rs)                       │
//! │  - Resolves input sources, output targets and defaults      │
//! │  - Reads and writes files, returns structured results       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Cipher Core (cipher/, api::transform)                      │
//! │  - Pure functions from (text, key, direction) to text       │
//! │  - No I/O, no errors                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithms
//!
//! - **Shift**: Caesar rotation of ASCII letters within their own case. Every
//!   other character passes through.
//! - **Unicode**: every character's code point moves by the key. Shifts wrap
//!   over the valid scalar values, stepping over the surrogate block, so the
//!   result is always a valid `char` and decrypt always inverts encrypt.
//!
//! Both take any `i64` key; negative keys and keys beyond the alphabet size
//! reduce with true (non-negative) modulo.
//!
//! ## Module Overview
//!
//! - [`api`]: the dispatcher ([`api::transform`]) and the [`api::CipherApi`] facade
//! - [`cipher`]: the [`cipher::CharCipher`] trait and both engines
//! - [`model`]: request and enum types (`CipherRequest`, `Direction`, `Algorithm`)
//! - [`io`]: input source and output target handling
//! - [`config`]: persisted defaults
//! - [`error`]: error types
//! - `cli`: argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod cipher;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
