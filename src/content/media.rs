// src/content/media.rs
use crate::i18n::Text;
use crate::models::{Article, Community, Podcast};

pub const PODCASTS: &[Podcast] = &[
    Podcast {
        title: "Bankless",
        host: "Ryan Sean Adams & David Hoffman",
        summary: Text::new(
            "Weekly conversations on Ethereum, DeFi and the wider crypto economy.",
            "Mazungumzo ya kila wiki kuhusu Ethereum, DeFi na uchumi wa crypto kwa ujumla.",
        ),
        url: "https://www.bankless.com/podcast",
        published: "2024-03-14",
    },
    Podcast {
        title: "Zero Knowledge",
        host: "Anna Rose",
        summary: Text::new(
            "Deep technical interviews about zero-knowledge cryptography.",
            "Mahojiano ya kina ya kiufundi kuhusu kriptografia ya maarifa sifuri.",
        ),
        url: "https://zeroknowledge.fm",
        published: "2024-02-28",
    },
    Podcast {
        title: "StarkNet Builders",
        host: "StarkWare",
        summary: Text::new(
            "Builders share what they are shipping on StarkNet.",
            "Wajenzi wanashiriki wanachozindua kwenye StarkNet.",
        ),
        url: "https://www.starknet.io/en/content",
        published: "2024-01-20",
    },
];

pub const ARTICLES: &[Article] = &[
    Article {
        title: Text::new("Rollups, explained", "Rollups, kwa ufafanuzi"),
        author: "ethereum.org",
        summary: Text::new(
            "How optimistic and validity rollups scale Ethereum.",
            "Jinsi rollups za matumaini na za uthibitisho zinavyopanua Ethereum.",
        ),
        url: "https://ethereum.org/en/layer-2/",
        published: "2023-11-02",
    },
    Article {
        title: Text::new("Getting started with wagmi", "Kuanza na wagmi"),
        author: "wagmi.sh",
        summary: Text::new(
            "Official guide to React hooks for Ethereum.",
            "Mwongozo rasmi wa React hooks kwa Ethereum.",
        ),
        url: "https://wagmi.sh/react/getting-started",
        published: "2023-09-18",
    },
    Article {
        title: Text::new("The Cairo book", "Kitabu cha Cairo"),
        author: "Cairo community",
        summary: Text::new(
            "A complete introduction to writing Cairo programs.",
            "Utangulizi kamili wa kuandika programu za Cairo.",
        ),
        url: "https://book.cairo-lang.org",
        published: "2024-04-05",
    },
];

pub const COMMUNITIES: &[Community] = &[
    Community {
        name: "StarkNet Africa",
        icon: "🌍",
        description: Text::new(
            "Meetups, hackathons and study groups across the continent.",
            "Mikutano, hackathons na vikundi vya kujifunza kote barani.",
        ),
        url: "https://twitter.com/StarknetAfrica",
    },
    Community {
        name: "Web3 Bridge",
        icon: "🌉",
        description: Text::new(
            "Free cohort-based training for blockchain developers.",
            "Mafunzo ya bure kwa makundi kwa wasanidi wa blockchain.",
        ),
        url: "https://web3bridge.com",
    },
    Community {
        name: "Ethereum Kenya",
        icon: "🇰🇪",
        description: Text::new(
            "Local Ethereum community in Nairobi and online.",
            "Jamii ya Ethereum ya ndani Nairobi na mtandaoni.",
        ),
        url: "https://ethereum.org/en/community/events/",
    },
];
