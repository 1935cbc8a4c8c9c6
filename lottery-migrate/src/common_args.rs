// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use lottery_tools::{
    core::{
        deployment::NetworkDeployer,
        network::{check_chain_id, MigrationsConfig, DEFAULT_CONFIG_FILE, DEFAULT_ENDPOINT},
        registry::{ArtifactRegistry, DEFAULT_BUILD_DIR},
    },
    utils::{convert_gwei_to_wei, decode0x},
};

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory holding the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_BUILD_DIR)]
    build_dir: PathBuf,
}

impl ArtifactArgs {
    pub fn registry(&self) -> ArtifactRegistry {
        ArtifactRegistry::new(&self.build_dir)
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units, overriding the network's.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return wallet_from_key(key, chain_id);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return wallet_from_key(&key, chain_id);
        }

        let keystore = self
            .keystore_path
            .as_ref()
            .ok_or(eyre!("no private key or keystore given"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    fn max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        Ok(self
            .max_fee_per_gas_gwei
            .as_deref()
            .map(convert_gwei_to_wei)
            .transpose()?)
    }
}

fn wallet_from_key(key: &str, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let key = decode0x(key).wrap_err("private key is not valid hex")?;
    if key.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", key.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&key);
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint, overriding the selected network's
    #[arg(short, long)]
    endpoint: Option<String>,
    /// Named network from the migrations config
    #[arg(long)]
    network: Option<String>,
    /// Path to the migrations config declaring the networks
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

/// Connection settings after combining the CLI flags with the selected network.
#[derive(Debug, PartialEq)]
struct Target {
    endpoint: String,
    chain_id: Option<u64>,
    max_fee_per_gas_wei: Option<u128>,
}

impl ProviderArgs {
    fn target(&self, auth: &AuthArgs) -> eyre::Result<Target> {
        let mut target = Target {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            chain_id: None,
            max_fee_per_gas_wei: None,
        };
        if let Some(name) = &self.network {
            let config = MigrationsConfig::load(&self.config)
                .wrap_err_with(|| format!("could not load {}", self.config.display()))?;
            let network = config.network(name)?;
            target.endpoint = network.endpoint.clone();
            target.chain_id = network.chain_id;
            target.max_fee_per_gas_wei = network.max_fee_per_gas_wei(name)?;
        }
        if let Some(endpoint) = &self.endpoint {
            target.endpoint = endpoint.clone();
        }
        if let Some(wei) = auth.max_fee_per_gas_wei()? {
            target.max_fee_per_gas_wei = Some(wei);
        }
        Ok(target)
    }

    /// Connects to the selected network with the configured signer.
    pub async fn build_deployer(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<NetworkDeployer<impl Provider + WalletProvider>> {
        let target = self.target(auth)?;
        log::debug!("connecting to {}", target.endpoint);

        let provider = ProviderBuilder::new().connect(&target.endpoint).await?;
        let chain_id = provider.get_chain_id().await?;
        check_chain_id(target.chain_id, chain_id)?;

        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&target.endpoint)
            .await?;
        Ok(NetworkDeployer::builder()
            .provider(provider)
            .max_fee_per_gas_wei(target.max_fee_per_gas_wei)
            .build())
    }
}
