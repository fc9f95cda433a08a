//! # Host Range Model
//!
//! Turns a base address and a prefix length into the sequence of host
//! addresses a sweep has to probe.
//!
//! The number of hosts for a prefix is every identifier the host bits can
//! hold, minus one: `(1 << (32 - prefix)) - 1`. Counting starts at the base
//! address, which the adapter directory already places one past the network
//! address (see [`crate::network::adapter`]).

use std::net::Ipv4Addr;

use crate::error::RangeError;
use crate::network::codec;

pub const MAX_PREFIX: u8 = 32;

/// A contiguous run of `host_count` addresses starting at `base_address`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostRange {
    pub base_address: u32,
    pub host_count: u32,
}

impl HostRange {
    pub fn new(base_address: u32, prefix_length: u8) -> Result<Self, RangeError> {
        Ok(Self {
            base_address,
            host_count: host_count(prefix_length)?,
        })
    }

    pub fn with_count(base_address: u32, host_count: u32) -> Self {
        Self {
            base_address,
            host_count,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u32> + Clone + use<> {
        generate(self.base_address, self.host_count)
    }

    pub fn to_iter(&self) -> impl Iterator<Item = Ipv4Addr> + use<> {
        self.iter().map(codec::to_addr)
    }

    pub fn is_empty(&self) -> bool {
        self.host_count == 0
    }

    /// Last address of the range, if it has any.
    pub fn last(&self) -> Option<u32> {
        self.iter().next_back()
    }
}

/// Number of candidate hosts for `prefix_length`.
///
/// The shift is done in 64 bits so that `/0` yields `u32::MAX` instead of
/// overflowing.
pub fn host_count(prefix_length: u8) -> Result<u32, RangeError> {
    if prefix_length > MAX_PREFIX {
        return Err(RangeError::InvalidPrefix(prefix_length));
    }
    let host_bits = u32::from(MAX_PREFIX - prefix_length);
    let count: u64 = (1u64 << host_bits) - 1;
    Ok(count as u32)
}

/// Yields `base, base + 1, .., base + count - 1` in ascending order.
///
/// Stops at `u32::MAX` instead of wrapping around, so the output is always
/// strictly ascending.
pub fn generate(base: u32, count: u32) -> impl DoubleEndedIterator<Item = u32> + Clone {
    let end: u32 = base.saturating_add(count);
    let tail: Option<u32> = (count > 0 && base.checked_add(count).is_none()).then_some(u32::MAX);
    (base..end).chain(tail)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
