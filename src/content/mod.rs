// src/content/mod.rs
//! Static bilingual content compiled into the binary.

pub mod media;
pub mod site;
pub mod starknet;
pub mod wallets;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Text;

    fn assert_filled(text: &Text) {
        assert!(!text.en.trim().is_empty(), "missing English text");
        assert!(!text.sw.trim().is_empty(), "missing Swahili text for {:?}", text.en);
    }

    #[test]
    fn test_every_lesson_string_is_translated() {
        for section in starknet::SECTIONS {
            assert_filled(&section.title);
            assert_filled(&section.body);
        }
        for card in starknet::FLIP_CARDS {
            assert_filled(&card.front);
            assert_filled(&card.back);
        }
        for question in starknet::QUIZ {
            assert_filled(&question.prompt);
            assert_filled(&question.explanation);
            question.options.iter().for_each(assert_filled);
        }
    }

    #[test]
    fn test_every_listing_string_is_translated() {
        for track in site::TRACKS {
            assert_filled(&track.title);
            assert_filled(&track.description);
        }
        site::ABOUT.iter().for_each(|s| {
            assert_filled(&s.title);
            assert_filled(&s.body);
        });
        wallets::WALLETS.iter().for_each(|w| {
            assert_filled(&w.kind);
            assert_filled(&w.strengths);
        });
        media::PODCASTS.iter().for_each(|p| assert_filled(&p.summary));
        media::ARTICLES.iter().for_each(|a| {
            assert_filled(&a.title);
            assert_filled(&a.summary);
        });
        media::COMMUNITIES.iter().for_each(|c| assert_filled(&c.description));
    }

    #[test]
    fn test_quiz_answers_point_at_real_options() {
        for question in starknet::QUIZ {
            assert!(question.answer < question.options.len());
        }
    }
}
