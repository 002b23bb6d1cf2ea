// src/content/wallets.rs
use crate::i18n::Text;
use crate::models::Wallet;

pub const WALLETS: &[Wallet] = &[
    Wallet {
        name: "Argent X",
        icon: "🛡️",
        kind: Text::new("Browser extension", "Kiendelezi cha kivinjari"),
        platforms: "Chrome, Firefox, Edge",
        strengths: Text::new(
            "StarkNet native, guardians for account recovery",
            "Asili ya StarkNet, walinzi wa kurejesha akaunti",
        ),
        download_url: "https://www.argent.xyz/argent-x",
    },
    Wallet {
        name: "Braavos",
        icon: "🦁",
        kind: Text::new("Browser extension and mobile", "Kiendelezi na simu"),
        platforms: "Chrome, Firefox, iOS, Android",
        strengths: Text::new(
            "Hardware signer on phones, built-in multisig",
            "Kisaini cha vifaa kwenye simu, saini nyingi ndani",
        ),
        download_url: "https://braavos.app",
    },
    Wallet {
        name: "MetaMask",
        icon: "🦊",
        kind: Text::new("Browser extension and mobile", "Kiendelezi na simu"),
        platforms: "Chrome, Firefox, Brave, iOS, Android",
        strengths: Text::new(
            "Most widely supported EVM wallet, works with wagmi out of the box",
            "Pochi ya EVM inayotumika zaidi, inafanya kazi na wagmi moja kwa moja",
        ),
        download_url: "https://metamask.io/download",
    },
    Wallet {
        name: "Coinbase Wallet",
        icon: "🔵",
        kind: Text::new("Mobile and extension", "Simu na kiendelezi"),
        platforms: "Chrome, iOS, Android",
        strengths: Text::new(
            "Simple onboarding, smart wallet option",
            "Kuanza ni rahisi, chaguo la pochi erevu",
        ),
        download_url: "https://www.coinbase.com/wallet/downloads",
    },
];
