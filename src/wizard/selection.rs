// src/wizard/selection.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Alchemy,
    Infura,
    Public,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Alchemy, Provider::Infura, Provider::Public];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "alchemy" => Some(Provider::Alchemy),
            "infura" => Some(Provider::Infura),
            "public" => Some(Provider::Public),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Provider::Alchemy => "alchemy",
            Provider::Infura => "infura",
            Provider::Public => "public",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Alchemy => "Alchemy",
            Provider::Infura => "Infura",
            Provider::Public => "Public RPC",
        }
    }

    /// wagmi function name, e.g. `alchemyProvider`.
    pub fn function(self) -> &'static str {
        match self {
            Provider::Alchemy => "alchemyProvider",
            Provider::Infura => "infuraProvider",
            Provider::Public => "publicProvider",
        }
    }

    /// Environment variable holding the key, if the provider needs one.
    pub fn api_key_var(self) -> Option<&'static str> {
        match self {
            Provider::Alchemy => Some("ALCHEMY_API_KEY"),
            Provider::Infura => Some("INFURA_API_KEY"),
            Provider::Public => None,
        }
    }

    pub fn requires_api_key(self) -> bool {
        self.api_key_var().is_some()
    }

    pub fn signup_url(self) -> Option<&'static str> {
        match self {
            Provider::Alchemy => Some("https://dashboard.alchemy.com/signup"),
            Provider::Infura => Some("https://app.infura.io/register"),
            Provider::Public => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Polygon,
    Optimism,
    Arbitrum,
    Base,
}

impl Chain {
    pub const ALL: [Chain; 5] = [
        Chain::Ethereum,
        Chain::Polygon,
        Chain::Optimism,
        Chain::Arbitrum,
        Chain::Base,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ethereum" => Some(Chain::Ethereum),
            "polygon" => Some(Chain::Polygon),
            "optimism" => Some(Chain::Optimism),
            "arbitrum" => Some(Chain::Arbitrum),
            "base" => Some(Chain::Base),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Polygon => "polygon",
            Chain::Optimism => "optimism",
            Chain::Arbitrum => "arbitrum",
            Chain::Base => "base",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Polygon => "Polygon",
            Chain::Optimism => "Optimism",
            Chain::Arbitrum => "Arbitrum",
            Chain::Base => "Base",
        }
    }

    /// Export name in `wagmi/chains` for the given network.
    pub fn identifier(self, network: NetworkType) -> &'static str {
        match (self, network) {
            (Chain::Ethereum, NetworkType::Mainnet) => "mainnet",
            (Chain::Ethereum, NetworkType::Testnet) => "sepolia",
            (Chain::Polygon, NetworkType::Mainnet) => "polygon",
            (Chain::Polygon, NetworkType::Testnet) => "polygonMumbai",
            (Chain::Optimism, NetworkType::Mainnet) => "optimism",
            (Chain::Optimism, NetworkType::Testnet) => "optimismSepolia",
            (Chain::Arbitrum, NetworkType::Mainnet) => "arbitrum",
            (Chain::Arbitrum, NetworkType::Testnet) => "arbitrumSepolia",
            (Chain::Base, NetworkType::Mainnet) => "base",
            (Chain::Base, NetworkType::Testnet) => "baseSepolia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    Mainnet,
    Testnet,
}

impl NetworkType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Some(NetworkType::Mainnet),
            "testnet" => Some(NetworkType::Testnet),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet => "testnet",
        }
    }
}

/// Everything the visitor has chosen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSelection {
    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub chains: Vec<Chain>,
    #[serde(default)]
    pub network: Option<NetworkType>,
    #[serde(default)]
    pub api_key_confirmed: bool,
}

impl WizardSelection {
    /// Chain identifiers in selection order for the chosen network.
    pub fn chain_identifiers(&self) -> Vec<&'static str> {
        let network = self.network.unwrap_or_default();
        self.chains.iter().map(|c| c.identifier(network)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testnet_identifiers_differ_from_mainnet() {
        for chain in Chain::ALL {
            assert_ne!(
                chain.identifier(NetworkType::Mainnet),
                chain.identifier(NetworkType::Testnet)
            );
        }
    }

    #[test]
    fn test_public_provider_needs_no_key() {
        assert!(!Provider::Public.requires_api_key());
        assert_eq!(Provider::Alchemy.api_key_var(), Some("ALCHEMY_API_KEY"));
        assert_eq!(Provider::parse("Infura"), Some(Provider::Infura));
    }
}
