use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One entry of the remote genesis alias document.
///
/// The document maps consensus addresses to the identity a validator
/// registered at genesis. Fields missing from the document decode as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisValidatorInfo {
    /// Human-readable validator alias.
    #[serde(default)]
    pub alias: String,

    /// The validator's native chain address.
    #[serde(default)]
    pub nam_address: String,

    /// The validator's consensus public key.
    #[serde(default)]
    pub consensus_key_pk: String,

    /// Network address the validator announced at genesis.
    #[serde(default)]
    pub net_address: String,
}

/// The whole genesis alias document, keyed by consensus address.
pub type GenesisAliases = HashMap<String, GenesisValidatorInfo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_document() {
        let json = r#"{
            "tnam1qabc": {
                "alias": "validator-one",
                "nam_address": "tnam1qxyz",
                "consensus_key_pk": "tpknam1qq",
                "net_address": "203.0.113.7:26656"
            }
        }"#;

        let aliases: GenesisAliases = serde_json::from_str(json).unwrap();
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases["tnam1qabc"].alias, "validator-one");
        assert_eq!(aliases["tnam1qabc"].net_address, "203.0.113.7:26656");
    }

    #[test]
    fn decode_entry_with_missing_fields() {
        let json = r#"{"tnam1qabc": {"alias": "validator-one"}}"#;

        let aliases: GenesisAliases = serde_json::from_str(json).unwrap();
        assert_eq!(aliases["tnam1qabc"].alias, "validator-one");
        assert_eq!(aliases["tnam1qabc"].nam_address, "");
        assert_eq!(aliases["tnam1qabc"].consensus_key_pk, "");
    }
}
