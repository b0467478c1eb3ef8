//! Score normalization.
//!
//! `score = round(100 * sum / (count * 5))`, rounded half-up in exact integer
//! arithmetic so results never depend on floating-point representation.

use crate::entities::Response;
use crate::enums::ScoreDenominator;

/// Highest point value of a single response.
pub const MAX_POINTS: u8 = 5;

/// Normalize a point sum over `count` scored items to `0..=100`.
///
/// Returns 0 when `count` is zero.
#[must_use]
pub fn normalize(sum: u64, count: usize) -> u8 {
    let max = count as u64 * u64::from(MAX_POINTS);
    if max == 0 {
        return 0;
    }
    let pct = round_half_up(sum * 100, max).min(100);
    u8::try_from(pct).unwrap_or(100)
}

/// Normalize a collection of raw point values, using its length as the count.
#[must_use]
pub fn normalized_score<I>(points: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = points
        .into_iter()
        .fold((0u64, 0usize), |(sum, count), p| (sum + u64::from(p), count + 1));
    normalize(sum, count)
}

/// Score validated responses under the given denominator policy.
///
/// With [`ScoreDenominator::Questionnaire`] unanswered questions count as
/// zero points; with [`ScoreDenominator::Answered`] only the responses count.
#[must_use]
pub fn score_responses(
    responses: &[Response],
    question_count: usize,
    denominator: ScoreDenominator,
) -> u8 {
    let sum: u64 = responses.iter().map(|r| u64::from(r.points)).sum();
    let count = match denominator {
        ScoreDenominator::Questionnaire => question_count,
        ScoreDenominator::Answered => responses.len(),
    };
    normalize(sum, count)
}

/// `round(num / den)` with halves rounded up. `den` must be non-zero.
pub(crate) const fn round_half_up(num: u64, den: u64) -> u64 {
    (2 * num + den) / (2 * den)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::enums::OptionLetter;

    fn response(id: &str, points: u8) -> Response {
        Response {
            question_id: id.to_string(),
            selection: OptionLetter::from_points(points).unwrap(),
            points,
            comment: None,
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(7)]
    #[case(18)]
    #[case(250)]
    fn all_fives_score_one_hundred(#[case] n: usize) {
        assert_eq!(normalized_score(std::iter::repeat_n(5, n)), 100);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(18)]
    #[case(99)]
    fn all_ones_score_twenty(#[case] n: usize) {
        assert_eq!(normalized_score(std::iter::repeat_n(1, n)), 20);
    }

    #[test]
    fn empty_scores_zero() {
        assert_eq!(normalized_score(std::iter::empty()), 0);
        assert_eq!(normalize(0, 0), 0);
    }

    #[test]
    fn eighteen_threes_score_sixty() {
        assert_eq!(normalized_score(std::iter::repeat_n(3, 18)), 60);
    }

    #[rstest]
    // 7 / 10 = 70%
    #[case(&[3, 4], 70)]
    // 13 / 15 = 86.67% -> 87
    #[case(&[5, 4, 4], 87)]
    // 12 / 15 = 80%
    #[case(&[4, 4, 4], 80)]
    // 17 / 20 = 85%
    #[case(&[5, 5, 5, 2], 85)]
    // 2 / 5 = 40%
    #[case(&[2], 40)]
    fn mixed_points(#[case] points: &[u8], #[case] expected: u8) {
        assert_eq!(normalized_score(points.iter().copied()), expected);
    }

    #[test]
    fn halves_round_up() {
        // 1 / 40 -> 2.5% -> 3
        assert_eq!(normalize(1, 8), 3);
        // 11 / 40 -> 27.5% -> 28
        assert_eq!(normalize(11, 8), 28);
    }

    #[test]
    fn questionnaire_denominator_counts_unanswered_as_zero() {
        let responses = vec![response("q01", 5), response("q02", 5)];
        assert_eq!(score_responses(&responses, 4, ScoreDenominator::Questionnaire), 50);
    }

    #[test]
    fn answered_denominator_ignores_unanswered() {
        let responses = vec![response("q01", 5), response("q02", 5)];
        assert_eq!(score_responses(&responses, 4, ScoreDenominator::Answered), 100);
    }

    #[test]
    fn denominators_agree_when_complete() {
        let responses = vec![response("q01", 3), response("q02", 4), response("q03", 2)];
        assert_eq!(
            score_responses(&responses, 3, ScoreDenominator::Questionnaire),
            score_responses(&responses, 3, ScoreDenominator::Answered),
        );
    }

    #[test]
    fn no_responses_score_zero_under_both_policies() {
        assert_eq!(score_responses(&[], 18, ScoreDenominator::Questionnaire), 0);
        assert_eq!(score_responses(&[], 18, ScoreDenominator::Answered), 0);
    }
}
