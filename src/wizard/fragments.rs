// src/wizard/fragments.rs
//! Template table turning selections into wagmi code.

use super::selection::{Provider, WizardSelection};
use super::{WizardError, WizardStep};

pub fn render(step: WizardStep, selection: &WizardSelection) -> Result<String, WizardError> {
    match step {
        WizardStep::Provider => {
            let provider = selection
                .provider
                .ok_or(WizardError::MissingSelection(WizardStep::Provider))?;
            Ok(provider_fragment(provider))
        }
        WizardStep::Chains => {
            let identifiers = chain_identifiers(selection)?;
            Ok(chains_fragment(&identifiers))
        }
        WizardStep::ApiKey => {
            let provider = selection
                .provider
                .ok_or(WizardError::MissingSelection(WizardStep::Provider))?;
            if provider.requires_api_key() && !selection.api_key_confirmed {
                return Err(WizardError::ApiKeyNotConfirmed(provider));
            }
            let identifiers = chain_identifiers(selection)?;
            Ok(config_fragment(provider, &identifiers))
        }
    }
}

fn chain_identifiers(selection: &WizardSelection) -> Result<Vec<&'static str>, WizardError> {
    if selection.chains.is_empty() {
        return Err(WizardError::MissingSelection(WizardStep::Chains));
    }
    Ok(selection.chain_identifiers())
}

fn provider_fragment(provider: Provider) -> String {
    format!(
        "import {{ WagmiConfig, configureChains, createConfig }} from 'wagmi'\n\
         import {{ {} }} from 'wagmi/providers/{}'",
        provider.function(),
        provider.id()
    )
}

fn chains_fragment(identifiers: &[&str]) -> String {
    format!("import {{ {} }} from 'wagmi/chains'", identifiers.join(", "))
}

fn config_fragment(provider: Provider, identifiers: &[&str]) -> String {
    let mut out = String::new();

    let provider_call = match provider.api_key_var() {
        Some(var) => {
            out.push_str(&format!(
                "// .env.local\n{}=<your-{}-api-key>\n\n",
                var,
                provider.id()
            ));
            format!("{}({{ apiKey: process.env.{} }})", provider.function(), var)
        }
        None => format!("{}()", provider.function()),
    };

    out.push_str(&format!(
        "const {{ chains, publicClient, webSocketPublicClient }} = configureChains(\n  \
         [{}],\n  \
         [{}],\n\
         )\n\n\
         const config = createConfig({{\n  \
         autoConnect: true,\n  \
         publicClient,\n  \
         webSocketPublicClient,\n\
         }})",
        identifiers.join(", "),
        provider_call
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::selection::{Chain, NetworkType};

    #[test]
    fn test_provider_fragment_imports_provider() {
        let selection = WizardSelection {
            provider: Some(Provider::Infura),
            ..Default::default()
        };
        let text = render(WizardStep::Provider, &selection).unwrap();
        assert!(text.contains("import { infuraProvider } from 'wagmi/providers/infura'"));
    }

    #[test]
    fn test_chains_fragment_requires_chains() {
        let selection = WizardSelection::default();
        assert!(matches!(
            render(WizardStep::Chains, &selection),
            Err(WizardError::MissingSelection(WizardStep::Chains))
        ));
    }

    #[test]
    fn test_config_fragment_for_testnets() {
        let selection = WizardSelection {
            provider: Some(Provider::Alchemy),
            chains: vec![Chain::Ethereum, Chain::Base],
            network: Some(NetworkType::Testnet),
            api_key_confirmed: true,
        };
        let text = render(WizardStep::ApiKey, &selection).unwrap();
        assert!(text.contains("[sepolia, baseSepolia]"));
        assert!(text.contains("alchemyProvider({ apiKey: process.env.ALCHEMY_API_KEY })"));
        assert!(text.starts_with("// .env.local\nALCHEMY_API_KEY="));
    }
}
