use std::num::NonZeroUsize;

use clap::Parser;

/// Command line configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "inventory_ledger")]
#[command(about = "Interactive inventory, request and waiting-list manager", long_about = None)]
#[command(version)]
pub struct Config {
    /// Capacity of the ledger service mailbox
    #[arg(long, env = "LEDGER_MAILBOX_CAPACITY", default_value = "32")]
    pub mailbox_capacity: NonZeroUsize,

    /// Tracing filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, env = "LEDGER_LOG", default_value = "warn")]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let config = Config::try_parse_from(["inventory_ledger"]).unwrap();
        assert_eq!(config.mailbox_capacity.get(), 32);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "inventory_ledger",
            "--mailbox-capacity",
            "4",
            "--log-filter",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.mailbox_capacity.get(), 4);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(Config::try_parse_from(["inventory_ledger", "--mailbox-capacity", "0"]).is_err());
    }
}
