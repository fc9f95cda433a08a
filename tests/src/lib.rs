//! Workspace-level tests that wire several `sweepr` crates together.

#[cfg(test)]
mod discovery;
#[cfg(test)]
mod net;
