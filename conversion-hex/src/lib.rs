//! # Conversion Hex
//!
//! Application service layer and console adapter for the conversion session.
//!
//! ## Architecture
//!
//! - `session/` - Per-process state (date, rate cache, output log)
//! - `prompt/` - Validated input loops returning a `Flow`
//! - `service/` - Application service (session loop and persist protocol)
//! - `inbound/` - Console adapter (stdin/stdout)
//!
//! The service is generic over `P: RateProvider` and `S: OutputStore`, allowing
//! different adapters to be injected.

pub mod cache;
pub mod inbound;
pub mod output;
pub mod prompt;
pub mod service;
pub mod session;


pub use cache::RateCache;
pub use output::OutputLog;
pub use prompt::Flow;
pub use service::{ConversionService, RateSource};
pub use session::{PREMATURE_EXIT_WARNING, Session, SessionEnd};
