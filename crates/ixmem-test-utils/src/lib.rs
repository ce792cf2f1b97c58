//! Test utilities for ixmem development.
//!
//! Provides [`proptest`] strategies that generate adversarial operation
//! sequences, simple reference models backed by std collections (and
//! [`indexmap`] for the swap-remove dictionary), and [`init_logging`] so
//! tests can surface the crates' `log` output with `RUST_LOG`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod models;
pub mod ops;

pub use models::{DualStackModel, FifoModel, SwapRemoveModel};
pub use ops::{ArenaOp, DictOp, QueueOp, StackOp, UnionOp};

/// Install `env_logger` for the current test binary.
///
/// Safe to call from every test; only the first call installs the logger.
/// Output is captured by the test harness unless `--nocapture` is given.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
    log::trace!("test logging initialised");
}
