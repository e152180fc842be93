//! Coordinate text parsing and formatting.
//!
//! Accepts the forms people actually paste or type: `37.7749, -122.4194`,
//! `37.7749 -122.4194`, or the same wrapped in parentheses. The parsed pair
//! is range-checked before it becomes a `Coordinate`. `format_coordinate`
//! produces the manual-entry text used when the navigation handoff fails and
//! when sharing a marker.

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{map, map_res, opt, recognize},
    sequence::delimited,
    IResult, Parser,
};

use crate::error::CoordError;
use crate::models::Coordinate;

/// Parse free-form coordinate text into a validated `Coordinate`.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, CoordError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoordError::Empty);
    }

    match coordinate_pair(trimmed) {
        Ok((remaining, (latitude, longitude))) => {
            let remaining = remaining.trim_start();
            if !remaining.is_empty() {
                return Err(CoordError::Parse {
                    position: (trimmed.len() - remaining.len()) as u32,
                    message: format!("unexpected characters: '{}'", remaining),
                });
            }
            Coordinate::new(latitude, longitude)
        }
        Err(e) => Err(CoordError::Parse {
            position: 0,
            message: format!("parse error: {:?}", e),
        }),
    }
}

/// Render a coordinate as manual-entry text, e.g. `37.77490, -122.41940`.
pub fn format_coordinate(c: Coordinate, decimals: u32) -> String {
    let precision = decimals.min(9) as usize;
    format!(
        "{:.*}, {:.*}",
        precision, c.latitude, precision, c.longitude
    )
}

fn coordinate_pair(input: &str) -> IResult<&str, (f64, f64)> {
    alt((parenthesized_pair, bare_pair)).parse(input)
}

fn parenthesized_pair(input: &str) -> IResult<&str, (f64, f64)> {
    delimited(
        (char('('), multispace0),
        bare_pair,
        (multispace0, char(')')),
    )
    .parse(input)
}

fn bare_pair(input: &str) -> IResult<&str, (f64, f64)> {
    let (input, latitude) = decimal_degrees(input)?;
    let (input, _) = separator(input)?;
    let (input, longitude) = decimal_degrees(input)?;
    Ok((input, (latitude, longitude)))
}

fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        map((multispace0, char(','), multispace0), |_| ()),
        map(multispace1, |_| ()),
    ))
    .parse(input)
}

fn decimal_degrees(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((opt(char('-')), digit1, opt((char('.'), digit1)))),
        str::parse::<f64>,
    )
    .parse(input)
}
