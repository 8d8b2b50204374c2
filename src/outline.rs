use crate::errors::InvalidGeometry;
use itertools::Itertools;
use ncollide2d::na::Point2;
use std::error::Error;

/// The one capability a drawing surface has to offer: connect two points
/// with a straight line. A sketch backend or a plain text dump fits equally
/// well behind this.
pub trait LineSink {
    fn line(&mut self, a: &Point2<f64>, b: &Point2<f64>) -> Result<(), Box<dyn Error>>;
}

/// A polygon stored as an ordered vertex list whose closing edge, from the
/// last vertex back to the first, is implied rather than stored.
pub struct ClosedOutline {
    points: Vec<Point2<f64>>,
}

impl ClosedOutline {
    /// Wrap an ordered point list as a closed outline. The points are kept
    /// exactly as given: coincident neighbors are not merged and the order
    /// never changes, so the emitted segments always follow the source data.
    /// Fewer than three points cannot enclose an area.
    pub fn new(points: Vec<Point2<f64>>) -> Result<ClosedOutline, InvalidGeometry> {
        if points.len() < 3 {
            return Err(InvalidGeometry::NotEnoughPoints);
        }

        Ok(ClosedOutline { points })
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Edges in vertex order, ending with the wrap-around edge.
    pub fn segments(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        self.points.iter().copied().circular_tuple_windows()
    }

    /// Sends every edge to the sink in order, closing edge last.
    pub fn draw_into(&self, sink: &mut dyn LineSink) -> Result<(), Box<dyn Error>> {
        for (a, b) in self.segments() {
            sink.line(&a, &b)?;
        }

        Ok(())
    }
}
