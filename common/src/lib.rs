//! Shared models, errors and ports of the `sweepr` workspace.
//!
//! Nothing in here performs network I/O. The concrete scanners and the
//! interface lookup live in `sweepr-core`.

pub mod config;
pub mod error;
pub mod network;
pub mod scanning;
pub mod system;
