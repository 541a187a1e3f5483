//! Parse packing problem input lines.
//!
//! One problem per line, in the form:
//!
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98)
//! ```
//!
//! The capacity is a whole number of weight units; each item lists its id,
//! its weight with a decimal point, and its cost behind a `€` sign.

use packwise_core::{Item, Problem, Weight};
use regex::Regex;
use thiserror::Error;

/// Errors produced while parsing one input line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not match the expected problem format.
    #[error("line {line}: expected `<capacity> : (<id>,<weight>,€<cost>) ...`, got {text:?}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// A weight has more fractional digits than hundredths can represent.
    #[error("line {line}: weight {text:?} has more than two decimal places")]
    WeightPrecision {
        /// 1-based line number.
        line: usize,
        /// The offending weight text.
        text: String,
    },
    /// A number does not fit the internal integer representation.
    #[error("line {line}: number {text:?} is out of range")]
    NumberOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The offending number text.
        text: String,
    },
}

const ITEM_PATTERN: &str = r"\((?P<id>\d+),(?P<weight>\d+\.\d+),€(?P<cost>\d+)\)";

/// Stateless parser turning input lines into [`Problem`] values.
///
/// Construction compiles the patterns once; the parser itself carries no
/// other state and can be shared freely.
#[derive(Debug)]
pub struct LineParser {
    line_pattern: Regex,
    item_pattern: Regex,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    /// Construct a parser with the problem line patterns compiled.
    #[must_use]
    pub fn new() -> Self {
        let line = format!(r"^\s*(?P<capacity>\d+)\s*:\s*(?:{ITEM_PATTERN}\s*)*$");
        Self {
            line_pattern: Regex::new(&line).expect("line pattern is valid"),
            item_pattern: Regex::new(ITEM_PATTERN).expect("item pattern is valid"),
        }
    }

    /// Parse one input line into a [`Problem`].
    ///
    /// The line number is 1-based and used only for error reporting. An
    /// empty item list is accepted; it solves to the empty selection.
    pub fn parse_line(&self, line_number: usize, text: &str) -> Result<Problem, ParseError> {
        let captures =
            self.line_pattern
                .captures(text)
                .ok_or_else(|| ParseError::MalformedLine {
                    line: line_number,
                    text: text.to_owned(),
                })?;

        let capacity_units: u32 = parse_number(line_number, &captures["capacity"])?;
        let capacity_hundredths =
            capacity_units
                .checked_mul(100)
                .ok_or_else(|| ParseError::NumberOutOfRange {
                    line: line_number,
                    text: captures["capacity"].to_owned(),
                })?;
        let capacity = Weight::from_hundredths(capacity_hundredths);

        let mut items = Vec::new();
        for item_captures in self.item_pattern.captures_iter(text) {
            let id = parse_number(line_number, &item_captures["id"])?;
            let cost = parse_number(line_number, &item_captures["cost"])?;
            let weight = parse_weight(line_number, &item_captures["weight"])?;
            items.push(Item::new(id, weight, cost));
        }
        Ok(Problem::new(capacity, items))
    }
}

fn parse_number(line: usize, text: &str) -> Result<u32, ParseError> {
    text.parse().map_err(|_| ParseError::NumberOutOfRange {
        line,
        text: text.to_owned(),
    })
}

/// Parse a decimal weight like `53.38` or `15.3` into exact hundredths.
///
/// Fractional digits beyond the second must be zero; anything else cannot
/// be represented and is rejected rather than rounded.
fn parse_weight(line: usize, text: &str) -> Result<Weight, ParseError> {
    let (units_text, fraction_text) =
        text.split_once('.')
            .ok_or_else(|| ParseError::MalformedLine {
                line,
                text: text.to_owned(),
            })?;
    let units = parse_number(line, units_text)?;

    if fraction_text.len() > 2 && fraction_text.as_bytes()[2..].iter().any(|&b| b != b'0') {
        return Err(ParseError::WeightPrecision {
            line,
            text: text.to_owned(),
        });
    }
    let mut fraction_hundredths = 0_u32;
    for (index, digit) in fraction_text.bytes().take(2).enumerate() {
        let place = if index == 0 { 10 } else { 1 };
        fraction_hundredths += u32::from(digit - b'0') * place;
    }

    units
        .checked_mul(100)
        .and_then(|hundredths| hundredths.checked_add(fraction_hundredths))
        .map(Weight::from_hundredths)
        .ok_or_else(|| ParseError::NumberOutOfRange {
            line,
            text: text.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parser() -> LineParser {
        LineParser::new()
    }

    #[rstest]
    fn parses_a_single_item_line() {
        let problem = parser()
            .parse_line(1, "81 : (1,53.38,€45)")
            .expect("line is well formed");

        assert_eq!(problem.capacity, Weight::from_units(81));
        assert_eq!(
            problem.items,
            vec![Item::new(1, Weight::from_hundredths(5_338), 45)]
        );
    }

    #[rstest]
    fn parses_multiple_items_and_single_digit_fractions() {
        let problem = parser()
            .parse_line(2, "8 : (1,15.3,€34) (2,9.60,€79)")
            .expect("line is well formed");

        assert_eq!(problem.capacity, Weight::from_units(8));
        assert_eq!(
            problem.items,
            vec![
                Item::new(1, Weight::from_hundredths(1_530), 34),
                Item::new(2, Weight::from_hundredths(960), 79),
            ]
        );
    }

    #[rstest]
    fn accepts_a_capacity_with_no_items() {
        let problem = parser()
            .parse_line(1, "10 : ")
            .expect("an empty item list is allowed");
        assert!(problem.items.is_empty());
    }

    #[rstest]
    #[case("81 : (1,53.38,45)")]
    #[case("(9,89.95,€78) : 75")]
    #[case("81 (1,53.38,€45)")]
    #[case("81 : (1,53,€45)")]
    #[case("not a problem at all")]
    fn rejects_malformed_lines(#[case] text: &str) {
        let err = parser().parse_line(4, text).expect_err("line is malformed");
        assert!(matches!(err, ParseError::MalformedLine { line: 4, .. }));
    }

    #[rstest]
    fn rejects_weights_below_hundredth_precision() {
        let err = parser()
            .parse_line(1, "81 : (1,53.381,€45)")
            .expect_err("weight cannot be represented");
        assert_eq!(
            err,
            ParseError::WeightPrecision {
                line: 1,
                text: "53.381".to_owned()
            }
        );
    }

    #[rstest]
    fn accepts_trailing_fraction_zeros() {
        let problem = parser()
            .parse_line(1, "81 : (1,53.3800,€45)")
            .expect("trailing zeros are representable");
        assert_eq!(problem.items[0].weight, Weight::from_hundredths(5_338));
    }

    #[rstest]
    fn rejects_numbers_that_overflow() {
        let err = parser()
            .parse_line(1, "99999999999 : (1,1.00,€5)")
            .expect_err("capacity overflows");
        assert!(matches!(err, ParseError::NumberOutOfRange { line: 1, .. }));
    }
}
