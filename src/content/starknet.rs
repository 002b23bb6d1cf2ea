// src/content/starknet.rs
use crate::i18n::Text;
use crate::models::{FlipCard, QuizOutcome, QuizQuestion, QuizReport, Section};

pub const SECTIONS: &[Section] = &[
    Section {
        icon: "⛓️",
        title: Text::new("What is StarkNet?", "StarkNet ni nini?"),
        body: Text::new(
            "StarkNet is a **Layer 2 validity rollup** on Ethereum. It executes transactions off-chain and posts a proof to Ethereum that they were executed correctly.",
            "StarkNet ni **rollup ya uthibitisho wa uhalali** ya Tabaka la 2 juu ya Ethereum. Inatekeleza miamala nje ya mnyororo na kutuma uthibitisho kwa Ethereum kwamba ilitekelezwa ipasavyo.",
        ),
    },
    Section {
        icon: "🔐",
        title: Text::new("STARK proofs", "Uthibitisho wa STARK"),
        body: Text::new(
            "A STARK proves that a computation happened without re-running it. Proofs are:\n\n- *scalable*: verifying is much cheaper than computing\n- *transparent*: no trusted setup\n- *post-quantum*: built on hash functions",
            "STARK inathibitisha kwamba hesabu ilifanyika bila kuirudia. Uthibitisho huu ni:\n\n- *unapanuka*: kuthibitisha ni nafuu kuliko kuhesabu\n- *wazi*: hakuna usanidi wa kuaminika\n- *salama baada ya quantum*: umejengwa juu ya hash",
        ),
    },
    Section {
        icon: "🐫",
        title: Text::new("Cairo", "Cairo"),
        body: Text::new(
            "Contracts on StarkNet are written in **Cairo**, a language designed so that every program can be proven. Its syntax feels close to Rust.",
            "Mikataba kwenye StarkNet huandikwa kwa **Cairo**, lugha iliyoundwa ili kila programu iweze kuthibitishwa. Sintaksia yake inafanana na Rust.",
        ),
    },
    Section {
        icon: "👤",
        title: Text::new("Account abstraction", "Akaunti za kimkataba"),
        body: Text::new(
            "Every StarkNet account is a smart contract. Wallets can add multisig, social recovery or session keys without protocol changes.",
            "Kila akaunti ya StarkNet ni mkataba erevu. Pochi zinaweza kuongeza saini nyingi, urejeshaji wa kijamii au funguo za kipindi bila kubadilisha itifaki.",
        ),
    },
];

pub const FLIP_CARDS: &[FlipCard] = &[
    FlipCard {
        front: Text::new("Layer 2", "Tabaka la 2"),
        back: Text::new(
            "A network that settles on Ethereum but executes transactions elsewhere.",
            "Mtandao unaotulia kwenye Ethereum lakini unatekeleza miamala mahali pengine.",
        ),
    },
    FlipCard {
        front: Text::new("Rollup", "Rollup"),
        back: Text::new(
            "Bundles many transactions into one batch posted to Layer 1.",
            "Hukusanya miamala mingi katika kundi moja linalotumwa Tabaka la 1.",
        ),
    },
    FlipCard {
        front: Text::new("Validity proof", "Uthibitisho wa uhalali"),
        back: Text::new(
            "Cryptographic evidence that a batch was executed correctly.",
            "Ushahidi wa kificho kwamba kundi lilitekelezwa ipasavyo.",
        ),
    },
    FlipCard {
        front: Text::new("Sequencer", "Mpangaji"),
        back: Text::new(
            "Orders incoming transactions and builds blocks.",
            "Hupanga miamala inayoingia na kujenga vitalu.",
        ),
    },
    FlipCard {
        front: Text::new("Felt", "Felt"),
        back: Text::new(
            "Field element: Cairo's basic numeric type.",
            "Kipengele cha uga: aina ya msingi ya nambari katika Cairo.",
        ),
    },
];

const Q1_OPTIONS: &[Text] = &[
    Text::new("A new Layer 1 blockchain", "Blockchain mpya ya Tabaka la 1"),
    Text::new("A validity rollup on Ethereum", "Rollup ya uthibitisho juu ya Ethereum"),
    Text::new("A crypto exchange", "Soko la sarafu za kidijitali"),
];

const Q2_OPTIONS: &[Text] = &[
    Text::new("Solidity", "Solidity"),
    Text::new("Cairo", "Cairo"),
    Text::new("Go", "Go"),
];

const Q3_OPTIONS: &[Text] = &[
    Text::new("It needs a trusted setup", "Unahitaji usanidi wa kuaminika"),
    Text::new("It is transparent and needs no trusted setup", "Ni wazi na hauhitaji usanidi wa kuaminika"),
    Text::new("It is only valid for one day", "Ni halali kwa siku moja tu"),
];

const Q4_OPTIONS: &[Text] = &[
    Text::new("Every account is a smart contract", "Kila akaunti ni mkataba erevu"),
    Text::new("Accounts are controlled only by a single private key", "Akaunti zinadhibitiwa na ufunguo mmoja tu"),
    Text::new("There are no accounts", "Hakuna akaunti"),
];

pub const QUIZ: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: Text::new("What is StarkNet?", "StarkNet ni nini?"),
        options: Q1_OPTIONS,
        answer: 1,
        explanation: Text::new(
            "StarkNet executes off-chain and proves the result to Ethereum.",
            "StarkNet hutekeleza nje ya mnyororo na kuthibitisha matokeo kwa Ethereum.",
        ),
    },
    QuizQuestion {
        prompt: Text::new("Which language are StarkNet contracts written in?", "Mikataba ya StarkNet huandikwa kwa lugha gani?"),
        options: Q2_OPTIONS,
        answer: 1,
        explanation: Text::new(
            "Cairo programs are provable by construction.",
            "Programu za Cairo zinaweza kuthibitishwa kwa asili yake.",
        ),
    },
    QuizQuestion {
        prompt: Text::new("What makes a STARK proof different from many SNARKs?", "Uthibitisho wa STARK unatofautianaje na SNARK nyingi?"),
        options: Q3_OPTIONS,
        answer: 1,
        explanation: Text::new(
            "STARKs rely on hash functions, not a trusted ceremony.",
            "STARK hutegemea hash, si sherehe ya kuaminika.",
        ),
    },
    QuizQuestion {
        prompt: Text::new("What does account abstraction mean on StarkNet?", "Akaunti za kimkataba zina maana gani kwenye StarkNet?"),
        options: Q4_OPTIONS,
        answer: 0,
        explanation: Text::new(
            "Accounts are contracts, so their rules are programmable.",
            "Akaunti ni mikataba, hivyo sheria zake zinaweza kupangwa.",
        ),
    },
];

/// Grades answers against the quiz. `answers[i]` is the option chosen for
/// question `i`; missing or out-of-range choices count as unanswered.
pub fn grade(questions: &[QuizQuestion], answers: &[Option<usize>]) -> QuizReport {
    let outcomes: Vec<QuizOutcome> = questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let chosen = answers
                .get(i)
                .copied()
                .flatten()
                .filter(|choice| *choice < question.options.len());
            QuizOutcome {
                chosen,
                correct: chosen == Some(question.answer),
            }
        })
        .collect();

    QuizReport {
        score: outcomes.iter().filter(|o| o.correct).count(),
        answered: outcomes.iter().filter(|o| o.chosen.is_some()).count(),
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_all_correct() {
        let answers: Vec<Option<usize>> = QUIZ.iter().map(|q| Some(q.answer)).collect();
        let report = grade(QUIZ, &answers);
        assert_eq!(report.score, QUIZ.len());
        assert!(report.is_complete());
    }

    #[test]
    fn test_grade_partial_and_out_of_range() {
        let report = grade(QUIZ, &[Some(0), Some(99)]);
        assert_eq!(report.answered, 1);
        assert_eq!(report.score, 0);
        assert_eq!(report.outcomes[1].chosen, None);
        assert!(!report.is_complete());
    }
}
