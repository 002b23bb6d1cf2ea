// src/templates/quiz.rs
use super::render_form_page;
use crate::content::starknet::QUIZ;
use crate::context::Visitor;
use crate::i18n::t;
use crate::models::QuizReport;

const FORM_ID: &str = "quiz-form";

/// `answers` are the choices currently selected, graded or not.
pub fn render(visitor: &Visitor, answers: &[Option<usize>], report: Option<&QuizReport>) -> String {
    let lang = visitor.lang;

    let questions: String = QUIZ
        .iter()
        .enumerate()
        .map(|(qi, question)| {
            let outcome = report.and_then(|r| r.outcomes.get(qi));
            let chosen = answers.get(qi).copied().flatten();

            let options: String = question
                .options
                .iter()
                .enumerate()
                .map(|(oi, option)| {
                    let checked = if chosen == Some(oi) { " checked" } else { "" };
                    format!(
                        r#"
                <label class="quiz-option">
                    <input type="radio" name="q{}" value="{}"{}> {}
                </label>"#,
                        qi,
                        oi,
                        checked,
                        option.get(lang)
                    )
                })
                .collect();

            let feedback = match outcome {
                Some(o) if o.correct => format!(
                    r#"<p class="quiz-feedback correct">✅ {}</p>"#,
                    question.explanation.get(lang)
                ),
                Some(o) if o.chosen.is_some() => format!(
                    r#"<p class="quiz-feedback wrong">❌ {} {}</p>"#,
                    t(lang, "Not quite.", "Si sahihi."),
                    question.explanation.get(lang)
                ),
                _ => String::new(),
            };

            format!(
                r#"
        <fieldset class="quiz-question">
            <legend>{}. {}</legend>{}
            {}
        </fieldset>"#,
                qi + 1,
                question.prompt.get(lang),
                options,
                feedback
            )
        })
        .collect();

    let summary = match report {
        Some(r) => format!(
            r#"<div class="quiz-score">{} <strong>{}/{}</strong>{}</div>"#,
            t(lang, "Your score:", "Alama zako:"),
            r.score,
            r.total(),
            if r.is_complete() {
                ""
            } else {
                t(lang, " (some questions unanswered)", " (maswali mengine hayajajibiwa)")
            }
        ),
        None => String::new(),
    };

    let content = format!(
        r#"
    <h1>❓ {}</h1>
    {}
    <form id="{}" class="quiz-form" method="GET" action="/starknet/quiz">{}{}
        <button type="submit" name="check" value="1" class="btn btn-primary">{}</button>
        <a href="/starknet/quiz" class="btn btn-secondary">{}</a>
    </form>
    "#,
        t(lang, "StarkNet quiz", "Jaribio la StarkNet"),
        summary,
        FORM_ID,
        questions,
        // Keeps an already graded quiz graded when the language changes.
        if report.is_some() {
            r#"
        <input type="hidden" name="check" value="1">"#
        } else {
            ""
        },
        t(lang, "Check answers", "Kagua majibu"),
        t(lang, "Start over", "Anza upya"),
    );

    render_form_page(visitor, t(lang, "Quiz", "Jaribio"), &content, FORM_ID)
}
