use crate::network::adapter::AdapterInfo;

/// Source of the local adapters a sweep can start from.
pub trait AdapterDirectory: Send + Sync {
    /// Every operational, non-loopback adapter carrying an IPv4 address.
    fn adapters(&self) -> anyhow::Result<Vec<AdapterInfo>>;
}
