//! CheckHash HTTP API
//!
//! Two read endpoints that checksum or digest a piece of text, plus a
//! health probe. Bodies are plain text.
//!
//! ## API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/checksum?text=` | GET | CRC32 of the text, e.g. `Data: abc \| Checksum: 352441c2` |
//! | `/hash?text=` | GET | SHA-256 of the text, e.g. `Data: abc \| Hash: ba78...15ad` |
//! | `/health` | GET | Liveness probe, body `OK` |
//!
//! An absent or empty `text` falls back to [`DEFAULT_TEXT`].

mod server;
mod handlers;
mod models;

pub use server::*;
pub use handlers::*;
pub use models::*;
