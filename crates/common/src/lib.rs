//! Shared helpers for the workspace binaries: logging setup, runtime
//! environment checks and small response types.

pub mod types;
pub mod env;

pub mod utils {
    pub mod logging;
}
