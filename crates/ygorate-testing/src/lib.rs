//! Testing infrastructure for ygorate integration tests.
//!
//! Provides `DataRoot`, a temp-directory pack layout builder, so tests can
//! declare pack files and review files without hand-rolling the on-disk
//! structure each time.

pub mod fixtures;

pub use fixtures::DataRoot;
