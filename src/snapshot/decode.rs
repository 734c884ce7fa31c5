//! Strict decoder for the per-tick snapshot line
//!
//! Grammar (whitespace allowed between any two tokens):
//!
//! ```text
//! snapshot := "(" list(blob) "," list(blob) "," list(item) "," list(item) ")"
//! blob     := "(" uint "," uint "," uint "," point "," real ")"
//! item     := "(" point "," real ")"
//! point    := "(" real "," real ")"
//! list(x)  := "[" [x ("," x)*] "]"
//! ```
//!
//! Anything that does not match exactly is rejected; nothing in the line is
//! ever evaluated.

use nom::character::complete::{char, multispace0, u32 as uint};
use nom::combinator::{all_consuming, map};
use nom::error::ErrorKind;
use nom::multi::separated_list0;
use nom::number::complete::double;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use thiserror::Error;

use crate::core::types::Point;
use crate::snapshot::{Blob, Food, Snapshot, Toxin};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("unexpected input at byte {offset} ({kind:?})")]
    Syntax { offset: usize, kind: ErrorKind },

    #[error("input ended before the snapshot was complete")]
    Truncated,

    #[error("{section}[{index}] has negative mass {mass}")]
    NegativeMass {
        section: &'static str,
        index: usize,
        mass: f64,
    },

    #[error("{section}[{index}] has a non-finite coordinate or mass")]
    NonFinite { section: &'static str, index: usize },
}

type NomError<'a> = nom::error::Error<&'a str>;
type Res<'a, O> = IResult<&'a str, O>;

fn sym<'a>(c: char) -> impl Parser<&'a str, Output = char, Error = NomError<'a>> {
    delimited(multispace0, char(c), multispace0)
}

fn real(input: &str) -> Res<'_, f64> {
    delimited(multispace0, double, multispace0).parse(input)
}

fn id(input: &str) -> Res<'_, u32> {
    delimited(multispace0, uint, multispace0).parse(input)
}

fn point(input: &str) -> Res<'_, Point> {
    map((sym('('), real, sym(','), real, sym(')')), |(_, x, _, y, _)| {
        Point::new(x, y)
    })
    .parse(input)
}

fn blob(input: &str) -> Res<'_, Blob> {
    map(
        (
            sym('('),
            id,
            sym(','),
            id,
            sym(','),
            id,
            sym(','),
            point,
            sym(','),
            real,
            sym(')'),
        ),
        |(_, bot_id, _, team_id, _, index, _, position, _, mass, _)| Blob {
            bot_id,
            team_id,
            index,
            position,
            mass,
        },
    )
    .parse(input)
}

/// `((x,y),mass)`, shared by food and toxins
fn item(input: &str) -> Res<'_, (Point, f64)> {
    map((sym('('), point, sym(','), real, sym(')')), |(_, p, _, m, _)| (p, m)).parse(input)
}

fn list<'a, O, F>(element: F) -> impl Parser<&'a str, Output = Vec<O>, Error = NomError<'a>>
where
    F: Parser<&'a str, Output = O, Error = NomError<'a>>,
{
    delimited(sym('['), separated_list0(sym(','), element), sym(']'))
}

fn snapshot(input: &str) -> Res<'_, Snapshot> {
    map(
        (
            sym('('),
            list(blob),
            sym(','),
            list(blob),
            sym(','),
            list(item),
            sym(','),
            list(item),
            sym(')'),
        ),
        |(_, own_blobs, _, enemies, _, foods, _, toxins, _)| Snapshot {
            own_blobs,
            enemies,
            foods: foods
                .into_iter()
                .map(|(position, mass)| Food { position, mass })
                .collect(),
            toxins: toxins
                .into_iter()
                .map(|(position, mass)| Toxin { position, mass })
                .collect(),
        },
    )
    .parse(input)
}

fn check_body(section: &'static str, index: usize, position: Point, mass: f64) -> Result<(), DecodeError> {
    if !position.is_finite() || !mass.is_finite() {
        return Err(DecodeError::NonFinite { section, index });
    }
    if mass < 0.0 {
        return Err(DecodeError::NegativeMass { section, index, mass });
    }
    Ok(())
}

fn validate(snapshot: &Snapshot) -> Result<(), DecodeError> {
    for (i, b) in snapshot.own_blobs.iter().enumerate() {
        check_body("own_blobs", i, b.position, b.mass)?;
    }
    for (i, b) in snapshot.enemies.iter().enumerate() {
        check_body("enemies", i, b.position, b.mass)?;
    }
    for (i, f) in snapshot.foods.iter().enumerate() {
        check_body("foods", i, f.position, f.mass)?;
    }
    for (i, t) in snapshot.toxins.iter().enumerate() {
        check_body("toxins", i, t.position, t.mass)?;
    }
    Ok(())
}

/// Decode one snapshot line; surrounding whitespace (including the newline)
/// is ignored.
pub fn decode_snapshot(line: &str) -> Result<Snapshot, DecodeError> {
    let (_, decoded) = all_consuming(snapshot).parse(line).map_err(|e| match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => DecodeError::Syntax {
            offset: line.len() - e.input.len(),
            kind: e.code,
        },
        nom::Err::Incomplete(_) => DecodeError::Truncated,
    })?;
    validate(&decoded)?;
    Ok(decoded)
}
