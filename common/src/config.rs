use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1_000);
/// Largest range swept without an explicit `--max-hosts` (a /20).
pub const DEFAULT_MAX_HOSTS: u32 = 4_096;
pub const DEFAULT_TCP_PORT: u16 = 443;

/// How a single host is checked for reachability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbeMethod {
    /// ICMP echo when privileged, TCP handshake otherwise.
    #[default]
    Auto,
    Icmp,
    Tcp,
}

impl FromStr for ProbeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "icmp" | "ping" => Ok(Self::Icmp),
            "tcp" => Ok(Self::Tcp),
            _ => Err(format!("unknown probe method: {s} (expected auto, icmp or tcp)")),
        }
    }
}

impl fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Icmp => "icmp",
            Self::Tcp => "tcp",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Applied to every probe individually, not to the sweep as a whole.
    pub timeout: Duration,
    /// Sweeps over more hosts than this are refused.
    pub max_hosts: u32,
    pub method: ProbeMethod,
    /// Port used by the TCP handshake probe.
    pub port: u16,
    pub no_banner: bool,
    pub quiet: u8,
    /// Never prompt, pick the first adapter instead.
    pub disable_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_hosts: DEFAULT_MAX_HOSTS,
            method: ProbeMethod::default(),
            port: DEFAULT_TCP_PORT,
            no_banner: false,
            quiet: 0,
            disable_input: false,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_method_from_str() {
        assert_eq!(ProbeMethod::from_str("auto"), Ok(ProbeMethod::Auto));
        assert_eq!(ProbeMethod::from_str("ICMP"), Ok(ProbeMethod::Icmp));
        assert_eq!(ProbeMethod::from_str("ping"), Ok(ProbeMethod::Icmp));
        assert_eq!(ProbeMethod::from_str("tcp"), Ok(ProbeMethod::Tcp));
        assert!(ProbeMethod::from_str("arp").is_err());
    }

    #[test]
    fn probe_method_display_round_trips() {
        for method in [ProbeMethod::Auto, ProbeMethod::Icmp, ProbeMethod::Tcp] {
            assert_eq!(method.to_string().parse::<ProbeMethod>(), Ok(method));
        }
    }

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.timeout, Duration::from_secs(1));
        assert_eq!(cfg.max_hosts, 4_096);
        assert_eq!(cfg.method, ProbeMethod::Auto);
        assert_eq!(cfg.port, 443);
        assert!(!cfg.disable_input);
    }
}
