//! Console Inbound Adapter
//!
//! Line-based terminal I/O that drives the application layer.

mod stdio;

pub use stdio::StdioConsole;
