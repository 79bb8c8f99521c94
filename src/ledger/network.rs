/// Chain parameters handed to wallets.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub chain_id: &'static str,
    pub chain_name: &'static str,
    pub native_currency: Currency,
    pub rpc_urls: Vec<&'static str>,
    pub block_explorer_urls: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Currency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// The network plus the reward token contract deployed on it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub network: Network,
    pub contract_address: &'static str,
}

impl Network {
    pub fn base_sepolia() -> Self {
        Self {
            chain_id: "0x14A34",
            chain_name: "Base Sepolia",
            native_currency: Currency {
                name: "Ethereum",
                symbol: "ETH",
                decimals: 18,
            },
            rpc_urls: vec!["https://sepolia.base.org"],
            block_explorer_urls: vec!["https://sepolia.basescan.org"],
        }
    }
}
