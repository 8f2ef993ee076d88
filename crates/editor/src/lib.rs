// Library crate: exposes the document model, editing commands and the JSON protocol for
// integration tests and scripted sessions. The binary is a thin stdin/stdout driver.

pub mod command;
pub mod fixtures;
pub mod harness;
pub mod ops;
pub mod state;
