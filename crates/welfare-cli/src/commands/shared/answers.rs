use anyhow::{anyhow, bail};
use welfare_core::entities::Answer;
use welfare_core::enums::OptionLetter;

/// Parse one `--answer` argument.
///
/// Accepted forms: `q01=A`, `q01=b`, `q01=4`, and either followed by
/// `:comment`. Any integer is accepted as a point value; values that do not
/// fit a `u8` are clamped to 0 or 255 so the validator still reports them as
/// out of range for their question.
pub fn parse_answer(raw: &str) -> anyhow::Result<Answer> {
    let (question_id, rest) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid answer '{raw}': expected QUESTION=VALUE"))?;
    let question_id = question_id.trim();
    if question_id.is_empty() {
        bail!("invalid answer '{raw}': missing question id");
    }

    let (value, comment) = match rest.split_once(':') {
        Some((value, comment)) => (value.trim(), Some(comment.trim())),
        None => (rest.trim(), None),
    };

    let answer = if let Ok(points) = value.parse::<i64>() {
        let points = u8::try_from(points.clamp(0, i64::from(u8::MAX))).unwrap_or(u8::MAX);
        Answer::points(question_id, points)
    } else if let Ok(letter) = value.parse::<OptionLetter>() {
        Answer::letter(question_id, letter)
    } else {
        bail!("invalid answer '{raw}': '{value}' is neither an option letter A-E nor a point value");
    };

    Ok(match comment.filter(|c| !c.is_empty()) {
        Some(comment) => answer.with_comment(comment),
        None => answer,
    })
}

pub fn parse_answers(raw: &[String]) -> anyhow::Result<Vec<Answer>> {
    raw.iter().map(|r| parse_answer(r)).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use welfare_core::entities::AnswerValue;

    use super::*;

    #[test]
    fn letters_in_either_case() {
        assert_eq!(parse_answer("q01=A").unwrap(), Answer::letter("q01", OptionLetter::A));
        assert_eq!(parse_answer("q01=e").unwrap(), Answer::letter("q01", OptionLetter::E));
    }

    #[test]
    fn points_with_comment() {
        let answer = parse_answer("q07=2: limping on the left hind leg ").unwrap();
        assert_eq!(answer.value, AnswerValue::Points(2));
        assert_eq!(answer.comment.as_deref(), Some("limping on the left hind leg"));
    }

    #[test]
    fn comment_may_contain_colons() {
        let answer = parse_answer("q03=C:water at 10:00 was dirty").unwrap();
        assert_eq!(answer.comment.as_deref(), Some("water at 10:00 was dirty"));
    }

    #[test]
    fn out_of_range_points_pass_through() {
        assert_eq!(parse_answer("q01=9").unwrap().value, AnswerValue::Points(9));
    }

    #[test]
    fn points_beyond_u8_are_clamped() {
        assert_eq!(parse_answer("q01=300").unwrap().value, AnswerValue::Points(255));
        assert_eq!(parse_answer("q01=-1").unwrap().value, AnswerValue::Points(0));
    }

    #[test]
    fn malformed_answers_rejected() {
        assert!(parse_answer("q01").is_err());
        assert!(parse_answer("=A").is_err());
        assert!(parse_answer("q01=maybe").is_err());
        assert!(parse_answers(&["q01=A".into(), "q02".into()]).is_err());
    }
}
