//! Nerdle equation validation
//!
//! A valid equation has the form `<expression>=<number>`, uses only digits and
//! `+ - * / =`, writes numbers without leading zeros, and is arithmetically
//! true under the usual precedence rules. Division may produce fractions
//! part-way through, so evaluation uses exact rationals.

use thiserror::Error;

/// Reason a line is not a valid equation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquationError {
    #[error("expected {expected} characters, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("expected exactly one '=', found {0}")]
    EqualsCount(usize),
    #[error("right-hand side must be a plain number")]
    InvalidResult,
    #[error("malformed expression")]
    MalformedExpression,
    #[error("number with a leading zero: {0}")]
    LeadingZero(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    Overflow,
    #[error("left-hand side evaluates to {found}, not {expected}")]
    WrongResult { found: String, expected: i64 },
}

/// Check that `text` is a true equation of exactly `expected_len` characters
///
/// # Errors
/// Returns the first `EquationError` found.
///
/// # Examples
/// ```
/// use nerdle_two::candidates::equation::validate_equation;
///
/// assert!(validate_equation("12+35=47", 8).is_ok());
/// assert!(validate_equation("12+35=48", 8).is_err());
/// assert!(validate_equation("3/2*4=6", 7).is_ok());
/// ```
pub fn validate_equation(text: &str, expected_len: usize) -> Result<(), EquationError> {
    let found = text.chars().count();
    if found != expected_len {
        return Err(EquationError::WrongLength {
            expected: expected_len,
            found,
        });
    }

    if let Some(bad) = text
        .chars()
        .find(|&c| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '=')))
    {
        return Err(EquationError::InvalidCharacter(bad));
    }

    let equals = text.matches('=').count();
    if equals != 1 {
        return Err(EquationError::EqualsCount(equals));
    }

    let (lhs, rhs) = text.split_once('=').ok_or(EquationError::EqualsCount(0))?;

    if rhs.is_empty() || !rhs.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EquationError::InvalidResult);
    }
    let expected = parse_number(rhs)?;

    let value = evaluate(lhs)?;
    if value != Ratio::from_int(expected) {
        return Err(EquationError::WrongResult {
            found: value.to_string(),
            expected,
        });
    }

    Ok(())
}

/// Parse a run of digits, rejecting leading zeros
fn parse_number(digits: &str) -> Result<i64, EquationError> {
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(EquationError::LeadingZero(digits.to_string()));
    }
    digits.parse().map_err(|_| EquationError::Overflow)
}

/// Evaluate `number (op number)*` with `*` and `/` binding tighter than `+` and `-`
fn evaluate(expression: &str) -> Result<Ratio, EquationError> {
    let mut operands = Vec::new();
    let mut operators = Vec::new();
    let mut current = String::new();

    for c in expression.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else {
            if current.is_empty() {
                return Err(EquationError::MalformedExpression);
            }
            operands.push(parse_number(&current)?);
            operators.push(c);
            current.clear();
        }
    }
    if current.is_empty() {
        return Err(EquationError::MalformedExpression);
    }
    operands.push(parse_number(&current)?);

    let mut total = Ratio::ZERO;
    let mut negate = false;
    let mut term = Ratio::from_int(operands[0]);

    for (&op, &operand) in operators.iter().zip(&operands[1..]) {
        let operand = Ratio::from_int(operand);
        match op {
            '*' => term = term.checked_mul(operand)?,
            '/' => term = term.checked_div(operand)?,
            _ => {
                total = total.checked_add(if negate { term.negated() } else { term })?;
                negate = op == '-';
                term = operand;
            }
        }
    }

    total.checked_add(if negate { term.negated() } else { term })
}

/// Exact fraction kept in lowest terms with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ratio {
    num: i64,
    den: i64,
}

impl Ratio {
    const ZERO: Self = Self { num: 0, den: 1 };

    const fn from_int(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    fn new(num: i64, den: i64) -> Result<Self, EquationError> {
        if den == 0 {
            return Err(EquationError::DivisionByZero);
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()).max(1);
        let g = i64::try_from(g).map_err(|_| EquationError::Overflow)?;
        let sign = if den < 0 { -1 } else { 1 };
        Ok(Self {
            num: sign * (num / g),
            den: sign * (den / g),
        })
    }

    const fn negated(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }

    fn checked_add(self, other: Self) -> Result<Self, EquationError> {
        let num = self
            .num
            .checked_mul(other.den)
            .and_then(|a| other.num.checked_mul(self.den).and_then(|b| a.checked_add(b)))
            .ok_or(EquationError::Overflow)?;
        let den = self
            .den
            .checked_mul(other.den)
            .ok_or(EquationError::Overflow)?;
        Self::new(num, den)
    }

    fn checked_mul(self, other: Self) -> Result<Self, EquationError> {
        let num = self
            .num
            .checked_mul(other.num)
            .ok_or(EquationError::Overflow)?;
        let den = self
            .den
            .checked_mul(other.den)
            .ok_or(EquationError::Overflow)?;
        Self::new(num, den)
    }

    fn checked_div(self, other: Self) -> Result<Self, EquationError> {
        if other.num == 0 {
            return Err(EquationError::DivisionByZero);
        }
        self.checked_mul(Self {
            num: other.den,
            den: other.num,
        })
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_true_equations() {
        for eq in [
            "12+35=47", "99-19=80", "9*76=684", "2*54=108", "80-45=35", "1+2*3=7", "8/4+6=8",
        ] {
            assert_eq!(validate_equation(eq, eq.len()), Ok(()), "{eq}");
        }
    }

    #[test]
    fn precedence_and_fractions() {
        assert_eq!(validate_equation("2+3*4=14", 8), Ok(()));
        assert_eq!(validate_equation("10-2*3=4", 8), Ok(()));
        // 3/2 is not an integer, but 3/2*4 is
        assert_eq!(validate_equation("3/2*4=6", 7), Ok(()));
        assert_eq!(validate_equation("1-9+10=2", 8), Ok(()));
    }

    #[test]
    fn zero_is_allowed_alone() {
        assert_eq!(validate_equation("5-5+0=0", 7), Ok(()));
        assert_eq!(validate_equation("0*78=0", 6), Ok(()));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            validate_equation("1+1=2", 8),
            Err(EquationError::WrongLength {
                expected: 8,
                found: 5
            })
        );
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            validate_equation("12+3a=47", 8),
            Err(EquationError::InvalidCharacter('a'))
        );
        assert_eq!(
            validate_equation("1 +35=36", 8),
            Err(EquationError::InvalidCharacter(' '))
        );
    }

    #[test]
    fn rejects_equals_count() {
        assert_eq!(
            validate_equation("12+35-47", 8),
            Err(EquationError::EqualsCount(0))
        );
        assert_eq!(
            validate_equation("4=4=2+2=", 8),
            Err(EquationError::EqualsCount(3))
        );
    }

    #[test]
    fn rejects_bad_result_side() {
        assert_eq!(
            validate_equation("47=12+35", 8),
            Err(EquationError::InvalidResult)
        );
        assert_eq!(
            validate_equation("12-35=-23", 9),
            Err(EquationError::InvalidResult)
        );
        assert_eq!(
            validate_equation("12+35470=", 9),
            Err(EquationError::InvalidResult)
        );
    }

    #[test]
    fn rejects_malformed_expressions() {
        for eq in ["+12+3=15", "12++3=15", "123+=123", "=1234567"] {
            assert_eq!(
                validate_equation(eq, 8),
                Err(EquationError::MalformedExpression),
                "{eq}"
            );
        }
    }

    #[test]
    fn rejects_leading_zeros() {
        assert_eq!(
            validate_equation("01+46=47", 8),
            Err(EquationError::LeadingZero("01".to_string()))
        );
        assert_eq!(
            validate_equation("12+35=047", 9),
            Err(EquationError::LeadingZero("047".to_string()))
        );
    }

    #[test]
    fn rejects_division_by_zero() {
        assert_eq!(
            validate_equation("12/0+3=3", 8),
            Err(EquationError::DivisionByZero)
        );
    }

    #[test]
    fn rejects_false_equations() {
        assert_eq!(
            validate_equation("12+35=48", 8),
            Err(EquationError::WrongResult {
                found: "47".to_string(),
                expected: 48
            })
        );
        assert_eq!(
            validate_equation("3/2+1=2", 7),
            Err(EquationError::WrongResult {
                found: "5/2".to_string(),
                expected: 2
            })
        );
    }
}
