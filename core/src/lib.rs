//! # Sweepr Core
//!
//! The working parts of a subnet sweep:
//!
//! * **[`discovery`]**: the use case, adapter in, [`ScanResult`] out.
//! * **[`scanner`]**: concurrent fan-out of one probe per candidate host.
//! * **[`network`]**: the concrete probe primitives (ICMP echo, TCP handshake).
//! * **[`system`]**: the adapter directory over the OS interface list.
//!
//! [`ScanResult`]: sweepr_common::scanning::ScanResult

pub mod discovery;
pub mod network;
pub mod scanner;
pub mod system;
