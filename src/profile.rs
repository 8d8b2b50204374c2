use crate::errors::ParseError;
use itertools::Itertools;
use ncollide2d::na::Point2;
use serde::Serialize;
use tracing::debug;

/// A named airfoil section read from a coordinate file. The points run from
/// the trailing edge forward along the upper surface and back down the lower
/// surface, in the profile's own chord-aligned frame where the chord spans
/// (0, 0) to (1, 0).
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,

    #[serde(with = "crate::serialize::points")]
    pub points: Vec<Point2<f64>>,
}

impl Profile {
    /// Parse the contents of a Selig-style coordinate file, such as the ones
    /// in the UIUC database at <http://m-selig.ae.illinois.edu/ads/coord_database.html>.
    ///
    /// The first line is the profile's display name, taken verbatim after
    /// trimming. Every following line made of exactly two whitespace
    /// separated tokens is a data row; lines with any other token count,
    /// such as blank separators or remark lines, are skipped. A
    /// two token row whose tokens are not finite numbers fails the whole
    /// parse with [`ParseError::InvalidNumber`].
    ///
    /// Many files lead with a count pair declaring how many points make up
    /// the upper and lower surfaces. When either count exceeds one the first
    /// row is treated as that header and the two surface blocks are rejoined
    /// into a single continuous outline; otherwise all rows are taken as
    /// coordinates in file order. Note that this means a file declaring one
    /// point per surface reads as two coordinate rows.
    pub fn parse(text: &str) -> Result<Profile, ParseError> {
        let mut lines = text.lines();
        let name = lines.next().unwrap_or("").trim().to_string();

        let mut raw: Vec<Point2<f64>> = Vec::new();
        for (i, line) in lines.enumerate() {
            if let Some((a, b)) = line.split_whitespace().collect_tuple::<(&str, &str)>() {
                let x = parse_coordinate(a, i + 2)?;
                let y = parse_coordinate(b, i + 2)?;
                raw.push(Point2::new(x, y));
            }
        }

        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        let points = assemble(raw)?;
        debug!(name = %name, count = points.len(), "imported profile");

        Ok(Profile { name, points })
    }
}

fn parse_coordinate(token: &str, line: usize) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    };

    let value: f64 = token.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(value)
}

/// Rejoin the raw rows into one outline, honoring an optional count-pair
/// header. Upper surface rows are stored leading edge first in the file and
/// get reversed so the outline starts at the trailing edge; the row right
/// after the upper block repeats the leading edge and is dropped.
fn assemble(raw: Vec<Point2<f64>>) -> Result<Vec<Point2<f64>>, ParseError> {
    let n_upper = raw[0].x.trunc() as i64;
    let n_lower = raw[0].y.trunc() as i64;

    if n_upper <= 1 && n_lower <= 1 {
        // The first row is itself a coordinate
        return Ok(raw);
    }

    let rows = &raw[1..];
    let n_upper = n_upper.max(0) as usize;
    let n_lower = n_lower.max(0) as usize;

    if n_upper > rows.len() || n_lower > rows.len() {
        return Err(ParseError::Truncated {
            declared: n_upper.max(n_lower),
            available: rows.len(),
        });
    }

    debug!(n_upper, n_lower, "count-pair header detected");

    let mut points: Vec<Point2<f64>> = rows[..n_upper].iter().rev().copied().collect();
    if let Some(lower) = rows.get(n_upper + 1..) {
        points.extend_from_slice(lower);
    }

    Ok(points)
}

/// Owns the profile most recently loaded by an interactive session. A load
/// that fails leaves the previously held profile in place, so a bad reload
/// cannot clobber working state.
#[derive(Debug, Default)]
pub struct ImportSession {
    profile: Option<Profile>,
}

impl ImportSession {
    pub fn new() -> ImportSession {
        ImportSession { profile: None }
    }

    pub fn load(&mut self, text: &str) -> Result<&Profile, ParseError> {
        let profile = Profile::parse(text)?;
        Ok(self.profile.insert(profile))
    }

    pub fn current(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
}
