//! Node configuration
//!
//! Consensus constants are compiled in. The only runtime choices are which
//! network to join and how much to log.

use clap::{ArgAction, Parser};

use crate::chainparams::{Network, ParamsError};

#[derive(Parser, Debug, Clone)]
#[command(name = "mongocm-node")]
#[command(about = "Select a MONGOcm network, verify its genesis block and report its parameters")]
pub struct NodeConfig {
    /// Network to join: main, test, regtest or unittest
    #[arg(long, env = "MONGOCM_NETWORK")]
    pub network: Option<String>,

    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the regression test network
    #[arg(long)]
    pub regtest: bool,

    /// Log filter, e.g. `info` or `mongocm_core=debug`
    #[arg(long, env = "MONGOCM_LOG")]
    pub log: Option<String>,

    /// Print the selected parameters as JSON
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub print_params: bool,
}

impl NodeConfig {
    /// The network named by the command line, `main` when none is given
    pub fn resolve_network(&self) -> Result<Network, ParamsError> {
        let legacy = match (self.testnet, self.regtest) {
            (true, true) => {
                return Err(ParamsError::ConflictingNetworks(
                    "--testnet and --regtest".to_string(),
                ))
            }
            (true, false) => Some(Network::Test),
            (false, true) => Some(Network::Regtest),
            (false, false) => None,
        };

        match (self.network.as_deref(), legacy) {
            (Some(name), Some(switch)) => {
                let named: Network = name.parse()?;
                if named == switch {
                    Ok(named)
                } else {
                    Err(ParamsError::ConflictingNetworks(format!(
                        "--network {named} and --{}",
                        if switch == Network::Test { "testnet" } else { "regtest" }
                    )))
                }
            }
            (Some(name), None) => name.parse(),
            (None, Some(switch)) => Ok(switch),
            (None, None) => Ok(Network::Main),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> NodeConfig {
        NodeConfig::try_parse_from(std::iter::once("mongocm-node").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_to_main() {
        let config = parse(&[]);
        assert_eq!(config.resolve_network().unwrap(), Network::Main);
        assert!(config.print_params);
    }

    #[test]
    fn test_named_network() {
        assert_eq!(parse(&["--network", "regtest"]).resolve_network().unwrap(), Network::Regtest);
        assert_eq!(parse(&["--network", "unittest"]).resolve_network().unwrap(), Network::Unit);
    }

    #[test]
    fn test_legacy_switches() {
        assert_eq!(parse(&["--testnet"]).resolve_network().unwrap(), Network::Test);
        assert_eq!(parse(&["--regtest"]).resolve_network().unwrap(), Network::Regtest);
        assert_eq!(
            parse(&["--testnet", "--network", "test"]).resolve_network().unwrap(),
            Network::Test
        );
    }

    #[test]
    fn test_conflicting_switches() {
        let err = parse(&["--testnet", "--regtest"]).resolve_network().unwrap_err();
        assert!(matches!(err, ParamsError::ConflictingNetworks(_)));
        let err = parse(&["--regtest", "--network", "main"]).resolve_network().unwrap_err();
        assert!(matches!(err, ParamsError::ConflictingNetworks(_)));
    }

    #[test]
    fn test_unknown_network() {
        let err = parse(&["--network", "moonnet"]).resolve_network().unwrap_err();
        assert!(matches!(err, ParamsError::UnknownNetwork(name) if name == "moonnet"));
    }

    #[test]
    fn test_print_params_can_be_disabled() {
        assert!(!parse(&["--print-params", "false"]).print_params);
    }
}
