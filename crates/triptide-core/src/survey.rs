//! UX survey scoring.

use crate::CoreError;

pub const QUESTION_COUNT: usize = 5;

/// Form field names of the survey questions, in order. The last one ("How
/// likely are you to use TripTide again?") doubles as the NPS rating.
pub const QUESTION_NAMES: [&str; QUESTION_COUNT] = ["ux_q1", "ux_q2", "ux_q3", "ux_q4", "ux_q5"];

/// Shown when the form is submitted with a question left blank.
pub const UNANSWERED_PROMPT: &str = "Please answer all rating questions before submitting.";

/// Shown when an answer falls outside the 1–5 scale.
pub const OUT_OF_RANGE_PROMPT: &str = "Please rate each question from 1 to 5.";

/// A complete, validated set of 1–5 Likert answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyResponse {
    scores: [u8; QUESTION_COUNT],
}

impl SurveyResponse {
    /// Validates a form's answers. `None` marks an unanswered question.
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnansweredQuestion`] for the first blank question.
    /// - [`CoreError::ScoreOutOfRange`] for a value outside 1–5.
    pub fn from_answers(answers: &[Option<u8>; QUESTION_COUNT]) -> Result<Self, CoreError> {
        let mut scores = [0u8; QUESTION_COUNT];
        for (idx, answer) in answers.iter().enumerate() {
            let question = QUESTION_NAMES[idx];
            let value = answer.ok_or(CoreError::UnansweredQuestion { question })?;
            if !(1..=5).contains(&value) {
                return Err(CoreError::ScoreOutOfRange { question, value });
            }
            scores[idx] = value;
        }
        Ok(Self { scores })
    }

    #[must_use]
    pub fn scores(&self) -> [u8; QUESTION_COUNT] {
        self.scores
    }

    /// Mean of the five answers, on the same 1–5 scale.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_score(&self) -> f64 {
        let total: u32 = self.scores.iter().map(|&s| u32::from(s)).sum();
        f64::from(total) / QUESTION_COUNT as f64
    }

    /// Ten-item list for the SUS calculator: each answer repeated in place.
    #[must_use]
    pub fn sus_list(&self) -> [u8; QUESTION_COUNT * 2] {
        let mut list = [0u8; QUESTION_COUNT * 2];
        for (idx, &score) in self.scores.iter().enumerate() {
            list[idx * 2] = score;
            list[idx * 2 + 1] = score;
        }
        list
    }

    #[must_use]
    pub fn nps_score(&self) -> u8 {
        self.scores[QUESTION_COUNT - 1]
    }
}

/// System Usability Scale score for a list of 1–5 answers.
///
/// Odd-numbered items (index 0, 2, …) contribute `answer - 1`, even-numbered
/// items contribute `5 - answer`. The sum is scaled by 2.5 and rounded to two
/// decimals.
#[must_use]
pub fn calculate_sus(answers: &[u8]) -> f64 {
    let total: i32 = answers
        .iter()
        .enumerate()
        .map(|(i, &a)| {
            let a = i32::from(a);
            if i % 2 == 0 {
                a - 1
            } else {
                5 - a
            }
        })
        .sum();
    (f64::from(total) * 2.5 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fives_average_and_sus_list() {
        let response = SurveyResponse::from_answers(&[Some(5); 5]).unwrap();
        assert!((response.avg_score() - 5.0).abs() < f64::EPSILON);
        assert_eq!(response.sus_list(), [5u8; 10]);
        assert_eq!(response.nps_score(), 5);
    }

    #[test]
    fn sus_list_duplicates_in_place() {
        let response =
            SurveyResponse::from_answers(&[Some(1), Some(2), Some(3), Some(4), Some(5)]).unwrap();
        assert_eq!(response.sus_list(), [1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
        assert!((response.avg_score() - 3.0).abs() < f64::EPSILON);
        assert_eq!(response.nps_score(), 5);
    }

    #[test]
    fn missing_answer_is_rejected() {
        let err = SurveyResponse::from_answers(&[Some(4), Some(4), None, Some(4), None]).unwrap_err();
        assert_eq!(err, CoreError::UnansweredQuestion { question: "ux_q3" });
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let err = SurveyResponse::from_answers(&[Some(4), Some(6), Some(4), Some(4), Some(4)])
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::ScoreOutOfRange {
                question: "ux_q2",
                value: 6
            }
        );
    }

    #[test]
    fn sus_of_duplicated_fives_is_fifty() {
        assert!((calculate_sus(&[5; 10]) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sus_best_case_is_one_hundred() {
        assert!((calculate_sus(&[5, 1, 5, 1, 5, 1, 5, 1, 5, 1]) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sus_worst_case_is_zero() {
        assert!(calculate_sus(&[1, 5, 1, 5, 1, 5, 1, 5, 1, 5]).abs() < f64::EPSILON);
    }
}
