//! Cross-chain wiring configuration
//!
//! A serializable graph describing which contract endpoints are allowed to
//! message which: declared contract points (eid + contract name) and the
//! directed connections between them. A connection can carry explicit send
//! and receive settings (executor limits, DVN verification thresholds);
//! when omitted, the messaging network's defaults apply.

use std::fs;
use std::path::Path;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::artifacts::{HUB_CONTRACT, SPOKE_CONTRACT};
use crate::error::{BridgeError, Result};
use crate::protocol::EndpointId;

/// A contract pinned to an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPoint {
    pub eid: EndpointId,
    pub contract_name: String,
}

impl ContractPoint {
    pub fn new(eid: EndpointId, contract_name: impl Into<String>) -> Self {
        Self {
            eid,
            contract_name: contract_name.into(),
        }
    }
}

/// A directed messaging pathway between two contract points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from: ContractPoint,
    pub to: ContractPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConnectionConfig>,
}

/// Optional per-pathway settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_config: Option<SendConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_config: Option<ReceiveConfig>,
}

/// Settings applied when sending along a pathway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendConfig {
    pub executor_config: ExecutorConfig,
    pub uln_config: UlnConfig,
}

/// Settings applied when receiving along a pathway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveConfig {
    pub uln_config: UlnConfig,
}

/// Executor limits for a pathway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorConfig {
    pub max_message_size: u32,
    pub executor: Address,
}

/// DVN verification settings for a pathway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UlnConfig {
    pub confirmations: u64,
    pub required_dvns: Vec<Address>,
    pub optional_dvns: Vec<Address>,
    pub optional_dvn_threshold: u8,
}

/// The full wiring graph
///
/// # Example
///
/// ```rust
/// use hubspoke::{ContractPoint, EndpointId, WiringGraph};
///
/// let graph = WiringGraph::hub_spoke(
///     ContractPoint::new(EndpointId::PolygonAmoy, "HubBridge"),
///     ContractPoint::new(EndpointId::BaseSepolia, "SpokeBridge"),
/// );
/// assert!(graph.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiringGraph {
    pub contracts: Vec<ContractPoint>,
    pub connections: Vec<Connection>,
}

impl WiringGraph {
    /// The standard bidirectional graph for one hub/spoke pair
    pub fn hub_spoke(hub: ContractPoint, spoke: ContractPoint) -> Self {
        Self {
            contracts: vec![hub.clone(), spoke.clone()],
            connections: vec![
                Connection {
                    from: hub.clone(),
                    to: spoke.clone(),
                    config: None,
                },
                Connection {
                    from: spoke,
                    to: hub,
                    config: None,
                },
            ],
        }
    }

    /// The graph shipped for the supported pair, per environment
    pub fn default_pair(testnet: bool) -> Self {
        let (hub_eid, spoke_eid) = if testnet {
            (EndpointId::PolygonAmoy, EndpointId::BaseSepolia)
        } else {
            (EndpointId::Polygon, EndpointId::Base)
        };
        Self::hub_spoke(
            ContractPoint::new(hub_eid, HUB_CONTRACT),
            ContractPoint::new(spoke_eid, SPOKE_CONTRACT),
        )
    }

    /// Loads a graph from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let graph: Self = serde_json::from_str(&raw)?;
        graph.validate()?;
        Ok(graph)
    }

    /// Writes the graph to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Checks the graph is internally consistent
    ///
    /// Every connection must reference declared contract points, and no
    /// point may message itself.
    pub fn validate(&self) -> Result<()> {
        for connection in &self.connections {
            if connection.from == connection.to {
                return Err(BridgeError::InvalidConfig(format!(
                    "self-connection on {} ({})",
                    connection.from.contract_name, connection.from.eid
                )));
            }
            for point in [&connection.from, &connection.to] {
                if !self.contracts.contains(point) {
                    return Err(BridgeError::InvalidConfig(format!(
                        "connection references undeclared contract {} ({})",
                        point.contract_name, point.eid
                    )));
                }
            }
        }
        Ok(())
    }

    /// The connections originating at an endpoint
    pub fn connections_from(&self, eid: EndpointId) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(move |connection| connection.from.eid == eid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn testnet_pair() -> WiringGraph {
        WiringGraph::default_pair(true)
    }

    #[test]
    fn test_default_pair_is_bidirectional() {
        let graph = testnet_pair();
        assert_eq!(graph.contracts.len(), 2);
        assert_eq!(graph.connections.len(), 2);
        assert!(graph.validate().is_ok());

        let outbound: Vec<_> = graph.connections_from(EndpointId::PolygonAmoy).collect();
        assert_eq!(outbound.len(), 1);
        assert_eq!(outbound[0].to.eid, EndpointId::BaseSepolia);
    }

    #[test]
    fn test_mainnet_pair_uses_mainnet_eids() {
        let graph = WiringGraph::default_pair(false);
        assert!(graph
            .contracts
            .iter()
            .any(|c| c.eid == EndpointId::Polygon && c.contract_name == HUB_CONTRACT));
        assert!(graph
            .contracts
            .iter()
            .any(|c| c.eid == EndpointId::Base && c.contract_name == SPOKE_CONTRACT));
    }

    #[test]
    fn test_self_connection_is_rejected() {
        let hub = ContractPoint::new(EndpointId::PolygonAmoy, HUB_CONTRACT);
        let graph = WiringGraph {
            contracts: vec![hub.clone()],
            connections: vec![Connection {
                from: hub.clone(),
                to: hub,
                config: None,
            }],
        };
        assert!(matches!(
            graph.validate().unwrap_err(),
            BridgeError::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_undeclared_point_is_rejected() {
        let mut graph = testnet_pair();
        graph.connections[0].to = ContractPoint::new(EndpointId::Sepolia, "SomewhereElse");
        assert!(matches!(
            graph.validate().unwrap_err(),
            BridgeError::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_json_roundtrip_with_dvn_config() {
        let mut graph = testnet_pair();
        graph.connections[0].config = Some(ConnectionConfig {
            send_config: Some(SendConfig {
                executor_config: ExecutorConfig {
                    max_message_size: 99,
                    executor: address!("71d7a02cDD38BEa35E42b53fF4a42a37638a0066"),
                },
                uln_config: UlnConfig {
                    confirmations: 42,
                    required_dvns: vec![],
                    optional_dvns: vec![
                        address!("e9dCF5771a48f8DC70337303AbB84032F8F5bE3E"),
                        address!("0AD50201807B615a71a39c775089C9261A667780"),
                    ],
                    optional_dvn_threshold: 2,
                },
            }),
            receive_config: Some(ReceiveConfig {
                uln_config: UlnConfig {
                    confirmations: 42,
                    required_dvns: vec![],
                    optional_dvns: vec![address!("3Eb0093E079EF3F3FC58C41e13FF46c55dcb5D0a")],
                    optional_dvn_threshold: 1,
                },
            }),
        });

        let json = serde_json::to_string(&graph).unwrap();
        let parsed: WiringGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, graph);
    }

    #[test]
    fn test_unconfigured_connection_serializes_compactly() {
        let graph = testnet_pair();
        insta::assert_snapshot!(
            serde_json::to_string(&graph.connections[0]).unwrap(),
            @r#"{"from":{"eid":40267,"contractName":"HubBridge"},"to":{"eid":40245,"contractName":"SpokeBridge"}}"#
        );
    }

    #[test]
    fn test_invalid_eid_fails_to_parse() {
        let raw = r#"{"eid": 12345, "contractName": "HubBridge"}"#;
        assert!(serde_json::from_str::<ContractPoint>(raw).is_err());
    }
}
