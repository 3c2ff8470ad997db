//! # Terminal Output
//!
//! Text the player sees outside the per-question prompts: the start banner
//! and the closing summary. Colors come from crossterm's `Stylize` and can be
//! switched off with a plain [`Palette`].

use std::fmt::Write as _;

use crossterm::style::{Color, Stylize, style};

use crate::session::{Outcome, Report, format_prompt};

/// Horizontal rule framing the summary.
pub const RULE: &str = "------------------------------------------------------------";

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.enabled {
            style(text).with(Color::Blue).underlined().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn start_prompt(timer_secs: u64) -> String {
    format!("Press Enter to start {timer_secs} sec timed quiz!")
}

/// Builds the end-of-quiz summary: score, then every missed question with
/// the given answer in red and the expected one in green.
pub fn render_report(report: &Report, palette: Palette) -> String {
    let mut out = String::new();

    if report.outcome == Outcome::TimedOut {
        let _ = writeln!(out, "\n\n{}", palette.paint("Times Up!!", Color::Red));
    }

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{}",
        palette.header(&format!(
            "You scored {} out of {}",
            report.correct, report.total
        ))
    );
    if report.outcome == Outcome::Completed && report.answered < report.total {
        let _ = writeln!(
            out,
            "Input ended after {} of {} questions",
            report.answered, report.total
        );
    }

    for missed in &report.missed {
        let _ = writeln!(
            out,
            "{} {} \t {}",
            format_prompt(missed.number, &missed.question),
            palette.paint(&missed.given, Color::Red),
            palette.paint(&missed.expected, Color::Green)
        );
    }
    if let Some(pending) = &report.unanswered {
        let _ = writeln!(
            out,
            "{} \t {}",
            format_prompt(pending.number, &pending.question),
            palette.paint(&pending.expected, Color::Green)
        );
    }

    let _ = writeln!(out, "{RULE}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MissedAnswer, RevealedQuestion};

    fn report(outcome: Outcome) -> Report {
        Report {
            outcome,
            correct: 1,
            total: 2,
            answered: 2,
            missed: vec![MissedAnswer {
                number: 2,
                question: "capital of France".to_string(),
                given: "Pariss".to_string(),
                expected: "Paris".to_string(),
            }],
            unanswered: None,
        }
    }

    #[test]
    fn test_start_prompt() {
        assert_eq!(start_prompt(30), "Press Enter to start 30 sec timed quiz!");
    }

    #[test]
    fn test_completed_report_plain() {
        let text = render_report(&report(Outcome::Completed), Palette::plain());
        let expected = format!(
            "{RULE}\nYou scored 1 out of 2\nProblem#2 : capital of France = Pariss \t Paris\n{RULE}\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_timed_out_report_shows_banner_and_pending_answer() {
        let mut r = report(Outcome::TimedOut);
        r.answered = 1;
        r.missed.clear();
        r.correct = 0;
        r.unanswered = Some(RevealedQuestion {
            number: 2,
            question: "capital of France".to_string(),
            expected: "Paris".to_string(),
        });

        let text = render_report(&r, Palette::plain());
        assert!(text.starts_with("\n\nTimes Up!!\n"));
        assert!(text.contains("You scored 0 out of 2"));
        assert!(text.contains("Problem#2 : capital of France = \t Paris"));
    }

    #[test]
    fn test_early_end_of_input_is_noted() {
        let mut r = report(Outcome::Completed);
        r.answered = 1;
        r.missed.clear();
        let text = render_report(&r, Palette::plain());
        assert!(text.contains("Input ended after 1 of 2 questions"));
    }

    #[test]
    fn test_colored_report_keeps_text() {
        let text = render_report(&report(Outcome::Completed), Palette::new(true));
        assert!(text.contains("You scored 1 out of 2"));
        assert!(text.contains("Pariss"));
        assert!(text.contains("Paris"));
    }
}
