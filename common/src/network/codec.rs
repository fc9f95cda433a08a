//! # Address Codec
//!
//! Conversions between IPv4 octets and their 32-bit big-endian integer form.
//!
//! [`encode`] is not a plain pack: it always sets the least significant octet
//! to [`HOST_BASE_OCTET`], so an encoded value names the first host (`.1`) of
//! the enclosing /24. [`decode`] is a lossless split and never special-cases
//! anything.

use std::net::Ipv4Addr;

/// Low octet every encoded address is normalized to.
pub const HOST_BASE_OCTET: u8 = 1;

/// Packs `octets` into a big-endian `u32`, normalizing the host octet to `.1`.
///
/// ```
/// use sweepr_common::network::codec;
///
/// assert_eq!(codec::encode([192, 168, 0, 37]), 0xC0A8_0001);
/// ```
pub fn encode(octets: [u8; 4]) -> u32 {
    let [a, b, c, _] = octets;
    (u32::from(a) << 24) | (u32::from(b) << 16) | (u32::from(c) << 8) | u32::from(HOST_BASE_OCTET)
}

/// Splits a big-endian `u32` back into its four octets.
pub fn decode(value: u32) -> [u8; 4] {
    [
        ((value >> 24) & 0xFF) as u8,
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ]
}

pub fn to_addr(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(decode(value))
}

/// Dotted-quad text of `value`, e.g. `11` -> `"0.0.0.11"`.
pub fn to_text(value: u32) -> String {
    to_addr(value).to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
