use ncollide2d::na::Point2;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// Serializer for point sequences, usable as `#[serde(with = "points")]`.
pub mod points {
    use super::*;

    pub fn serialize<S>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Vertex<'a>(#[serde(with = "Point2f64")] &'a Point2<f64>);

        let mut seq = serializer.serialize_seq(Some(points.len()))?;
        for p in points {
            seq.serialize_element(&Vertex(p))?;
        }
        seq.end()
    }
}
