//! Call-number parser built on pest

use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

use crate::callnumber::{CallNumber, Segment};

#[derive(Parser)]
#[grammar = "callnumber/grammar.pest"]
struct RawCallNumberParser;

/// Errors that can occur while parsing a call number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty call number")]
    Empty,

    #[error("unrecognized call-number syntax at offset {offset}")]
    Syntax { offset: usize },

    #[error("numeric component '{value}' is out of range")]
    NumberOverflow { value: String },

    #[error("parser internal error: {message}")]
    InternalError { message: String },
}

pub(crate) fn parse(input: &str) -> Result<CallNumber, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut pairs = RawCallNumberParser::parse(Rule::call_number, input).map_err(|e| {
        let offset = match e.location {
            pest::error::InputLocation::Pos(pos) => pos,
            pest::error::InputLocation::Span((start, _)) => start,
        };
        ParseError::Syntax { offset }
    })?;

    let root = pairs.next().ok_or_else(|| ParseError::InternalError {
        message: "no call number parsed".to_string(),
    })?;

    let mut class_letters = String::new();
    let mut class_number = None;
    let mut class_decimal = String::new();
    let mut segments = Vec::new();

    for pair in root.into_inner() {
        match pair.as_rule() {
            Rule::class_letters => {
                class_letters = pair.as_str().to_uppercase();
            }
            Rule::class_number => {
                for part in pair.into_inner() {
                    match part.as_rule() {
                        Rule::class_integer => {
                            class_number = Some(parse_number(part.as_str())?);
                        }
                        Rule::class_decimal => {
                            class_decimal = part.as_str().to_string();
                        }
                        rule => {
                            return Err(ParseError::InternalError {
                                message: format!("unexpected rule {rule:?} in class number"),
                            })
                        }
                    }
                }
            }
            Rule::segment => {
                segments.push(parse_segment(pair)?);
            }
            Rule::EOI => {}
            rule => {
                return Err(ParseError::InternalError {
                    message: format!("unexpected rule {rule:?} in call number"),
                })
            }
        }
    }

    Ok(CallNumber {
        class_letters,
        class_number,
        class_decimal,
        segments,
    })
}

fn parse_segment(pair: pest::iterators::Pair<'_, Rule>) -> Result<Segment, ParseError> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::InternalError {
            message: "empty segment".to_string(),
        })?;

    match inner.as_rule() {
        Rule::ordinal => Ok(Segment::Ordinal(parse_number(inner.as_str())?)),
        Rule::cutter => {
            let mut letter = None;
            let mut digits = String::new();
            for part in inner.into_inner() {
                match part.as_rule() {
                    Rule::cutter_letter => {
                        letter = part.as_str().chars().next().map(|c| c.to_ascii_uppercase());
                    }
                    Rule::cutter_digits => {
                        digits = part.as_str().to_string();
                    }
                    rule => {
                        return Err(ParseError::InternalError {
                            message: format!("unexpected rule {rule:?} in cutter"),
                        })
                    }
                }
            }
            let letter = letter.ok_or_else(|| ParseError::InternalError {
                message: "cutter without letter".to_string(),
            })?;
            Ok(Segment::Cutter { letter, digits })
        }
        rule => Err(ParseError::InternalError {
            message: format!("unexpected rule {rule:?} in segment"),
        }),
    }
}

fn parse_number(digits: &str) -> Result<u64, ParseError> {
    digits.parse().map_err(|_| ParseError::NumberOverflow {
        value: digits.to_string(),
    })
}
