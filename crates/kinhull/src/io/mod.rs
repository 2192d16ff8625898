//! Batch text format.
//!
//! Input: a batch count, then per batch a point count `m` and `m` triples
//! `x y z`, all whitespace separated. Point ids are `0..m` in input order.
//!
//! Output: per batch, the face count on one line, then one `3 a b c` line
//! per face.

use std::fmt;
use std::io::{self, Write};

use nalgebra::Vector3;
use serde::Serialize;

use crate::hull::{Face, HullStats};

/// Errors surfaced while reading the batch format.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended while `expected` was still missing.
    UnexpectedEnd { expected: String },
    /// A count token is not a non-negative integer.
    InvalidCount { token: String, what: &'static str },
    /// A coordinate token is not a finite real number.
    InvalidCoordinate {
        token: String,
        batch: usize,
        point: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input: expected {expected}")
            }
            Self::InvalidCount { token, what } => {
                write!(f, "invalid {what} `{token}`: expected a non-negative integer")
            }
            Self::InvalidCoordinate {
                token,
                batch,
                point,
            } => write!(
                f,
                "invalid coordinate `{token}` (batch {batch}, point {point}): expected a finite number"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse every batch in `input`.
pub fn parse_batches(input: &str) -> Result<Vec<Vec<Vector3<f64>>>, ParseError> {
    let mut tokens = input.split_ascii_whitespace();
    let batches = next_count(&mut tokens, "batch count")?;
    let mut out = Vec::with_capacity(batches.min(1 << 16));
    for batch in 0..batches {
        let m = next_count(&mut tokens, "point count")?;
        let mut points = Vec::with_capacity(m.min(1 << 20));
        for point in 0..m {
            let mut coord = [0.0; 3];
            for c in &mut coord {
                let token = tokens.next().ok_or_else(|| ParseError::UnexpectedEnd {
                    expected: format!("coordinate of point {point} in batch {batch}"),
                })?;
                *c = token
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ParseError::InvalidCoordinate {
                        token: token.to_string(),
                        batch,
                        point,
                    })?;
            }
            points.push(Vector3::from(coord));
        }
        out.push(points);
    }
    Ok(out)
}

fn next_count<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    what: &'static str,
) -> Result<usize, ParseError> {
    let token = tokens.next().ok_or_else(|| ParseError::UnexpectedEnd {
        expected: what.to_string(),
    })?;
    token.parse().map_err(|_| ParseError::InvalidCount {
        token: token.to_string(),
        what,
    })
}

/// Write one batch result: face count, then `3 a b c` per face.
pub fn write_faces<W: Write>(out: &mut W, faces: &[Face]) -> io::Result<()> {
    writeln!(out, "{}", faces.len())?;
    for f in faces {
        let [a, b, c] = f.ids();
        writeln!(out, "3 {a} {b} {c}")?;
    }
    Ok(())
}

/// Write points in the input format (one batch).
pub fn write_points<W: Write>(out: &mut W, points: &[Vector3<f64>]) -> io::Result<()> {
    writeln!(out, "{}", points.len())?;
    for p in points {
        writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
    }
    Ok(())
}

/// One batch result in structured form (JSON output of the CLI).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HullRecord {
    pub batch: usize,
    pub points: usize,
    pub faces: Vec<[usize; 3]>,
    pub vertices: usize,
    pub edges: usize,
    pub euler: i64,
}

impl HullRecord {
    pub fn new(batch: usize, points: usize, faces: &[Face], stats: HullStats) -> Self {
        Self {
            batch,
            points,
            faces: faces.iter().map(Face::ids).collect(),
            vertices: stats.vertices,
            edges: stats.edges,
            euler: stats.euler_characteristic(),
        }
    }
}

#[cfg(test)]
mod tests;
