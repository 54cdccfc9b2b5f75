//! 현장 입력 문자열을 숫자로 해석한다. 소수점은 `.` 과 `,` 를 모두 허용한다.

/// 숫자 입력 해석 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// 빈 입력
    Empty,
    /// 숫자가 아닌 입력
    Invalid(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "값이 비어 있음"),
            ParseError::Invalid(s) => write!(f, "숫자가 아님: {s}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// 문자열을 유한한 f64 로 해석한다. 첫 번째 `,` 는 소수점으로 취급한다.
pub fn parse_number(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let normalized = trimmed.replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::Invalid(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_period_and_comma() {
        assert_eq!(parse_number("12.5"), Ok(12.5));
        assert_eq!(parse_number("12,5"), Ok(12.5));
        assert_eq!(parse_number("  -3 "), Ok(-3.0));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert_eq!(parse_number(""), Err(ParseError::Empty));
        assert_eq!(parse_number("   "), Err(ParseError::Empty));
        assert_eq!(parse_number("abc"), Err(ParseError::Invalid("abc".into())));
        assert_eq!(parse_number("1,2,3"), Err(ParseError::Invalid("1,2,3".into())));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }
}
