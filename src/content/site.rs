// src/content/site.rs
use crate::i18n::Text;
use crate::models::{Section, Track};

pub const HERO_TITLE: Text = Text::new(
    "Learn Web3, one step at a time",
    "Jifunze Web3, hatua kwa hatua",
);

pub const HERO_SUBTITLE: Text = Text::new(
    "Free lessons on blockchains, StarkNet and building dapps with wagmi, in English and Kiswahili.",
    "Masomo ya bure kuhusu blockchain, StarkNet na kujenga dapps kwa wagmi, kwa Kiingereza na Kiswahili.",
);

pub const HERO_FEATURES: &[Section] = &[
    Section {
        icon: "📘",
        title: Text::new("Short lessons", "Masomo mafupi"),
        body: Text::new(
            "Each topic fits in a coffee break.",
            "Kila mada inatosha muda wa chai.",
        ),
    },
    Section {
        icon: "🃏",
        title: Text::new("Practice as you go", "Fanya mazoezi unapoendelea"),
        body: Text::new(
            "Flip-cards and quizzes check what stuck.",
            "Kadi na maswali hukagua ulichoelewa.",
        ),
    },
    Section {
        icon: "🛠️",
        title: Text::new("Build something real", "Jenga kitu halisi"),
        body: Text::new(
            "The wagmi builder writes your starter config.",
            "Kijenzi cha wagmi kinaandika usanidi wako wa kuanzia.",
        ),
    },
];

pub const TRACKS: &[Track] = &[
    Track {
        icon: "⚡",
        title: Text::new("StarkNet basics", "Misingi ya StarkNet"),
        description: Text::new(
            "Rollups, validity proofs and Cairo in plain language.",
            "Rollups, uthibitisho wa uhalali na Cairo kwa lugha rahisi.",
        ),
        href: "/starknet",
        available: true,
    },
    Track {
        icon: "🔧",
        title: Text::new("wagmi integration", "Kuunganisha wagmi"),
        description: Text::new(
            "Pick a provider and chains, and leave with a working config.",
            "Chagua mtoa huduma na minyororo, na uondoke na usanidi unaofanya kazi.",
        ),
        href: "/builder",
        available: true,
    },
    Track {
        icon: "👛",
        title: Text::new("Choosing a wallet", "Kuchagua pochi"),
        description: Text::new(
            "Compare popular wallets side by side.",
            "Linganisha pochi maarufu kando kwa kando.",
        ),
        href: "/wallets",
        available: true,
    },
    Track {
        icon: "🧩",
        title: Text::new("Smart contracts in Cairo", "Mikataba erevu kwa Cairo"),
        description: Text::new(
            "Write and deploy your first contract.",
            "Andika na uzindue mkataba wako wa kwanza.",
        ),
        href: "/tracks",
        available: false,
    },
];

pub const ABOUT: &[Section] = &[
    Section {
        icon: "🌍",
        title: Text::new("Who we are", "Sisi ni nani"),
        body: Text::new(
            "A volunteer group of developers in East Africa who want blockchain education to be available in the languages people think in.",
            "Kikundi cha kujitolea cha wasanidi programu Afrika Mashariki wanaotaka elimu ya blockchain ipatikane kwa lugha ambazo watu hufikiria nazo.",
        ),
    },
    Section {
        icon: "🎯",
        title: Text::new("What we do", "Tunachofanya"),
        body: Text::new(
            "We write short bilingual lessons, run study meetups and help new builders ship their first dapp.",
            "Tunaandika masomo mafupi ya lugha mbili, tunaendesha mikutano ya kujifunza na kusaidia wajenzi wapya kuzindua dapp yao ya kwanza.",
        ),
    },
    Section {
        icon: "🤝",
        title: Text::new("Get involved", "Jiunge nasi"),
        body: Text::new(
            "Translate a lesson, review content or host a meetup. Every contribution counts.",
            "Tafsiri somo, kagua maudhui au andaa mkutano. Kila mchango una thamani.",
        ),
    },
];
