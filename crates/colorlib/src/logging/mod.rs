//! Optional logger bootstrap.
//!
//! Everything in this crate logs through the `log` facade and leaves the
//! choice of backend to the host. [`init_logging`] is a convenience for hosts
//! without one: it wires up `env_logger` with a sane default filter.

mod init;

pub use init::{LoggingConfig, init_logging};
