use thiserror::Error;

/// Errors raised while deriving a host range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid prefix length /{0}, expected 0..=32")]
    InvalidPrefix(u8),
}

/// Errors that abort a whole sweep before any probe is sent.
///
/// A host that does not answer is never one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("adapter '{name}' has an invalid prefix length /{prefix}")]
    InvalidAdapter { name: String, prefix: u8 },

    #[error("refusing to probe {hosts} hosts, the limit is {limit} (raise it with --max-hosts)")]
    RangeTooLarge { hosts: u32, limit: u32 },
}
