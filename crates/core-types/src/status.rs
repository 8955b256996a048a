use serde::{Deserialize, Serialize};

/// Response of a consensus node's `/status` RPC endpoint.
///
/// Only the fields the dashboard uses to label itself are retained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatusResponse {
    /// The RPC result envelope.
    pub result: NodeStatusResult,
}

/// The `result` object of a status response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatusResult {
    /// Identity of the queried node.
    pub node_info: NodeInfo,
}

/// Identity of the queried node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Node software version.
    pub version: String,

    /// Network (chain) identifier.
    pub network: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_status_response() {
        let json = r#"{
            "result": {
                "node_info": {
                    "version": "0.37.2",
                    "network": "shielded-expedition.88f17d1d14"
                }
            }
        }"#;

        let status: NodeStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(status.result.node_info.version, "0.37.2");
        assert_eq!(status.result.node_info.network, "shielded-expedition.88f17d1d14");
    }
}
