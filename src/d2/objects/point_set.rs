//! Unordered collection of distinct 2D points.

use super::Point;
use crate::d2::Transformation;
use crate::error::{GeometryError, Result};
use crate::tolerance::check_tolerance;
use num_traits::Float;
use std::fmt;

/// A set of distinct points.
///
/// Exact duplicates are dropped on construction; the first occurrence keeps
/// its position. Equality ignores order.
#[derive(Debug, Clone)]
pub struct PointSet<F> {
    points: Vec<Point<F>>,
}

impl<F: Float> PointSet<F> {
    /// Creates a point set, discarding exact duplicates.
    pub fn new(points: impl IntoIterator<Item = Point<F>>) -> Self {
        let mut unique: Vec<Point<F>> = Vec::new();
        for point in points {
            // Undefined points never compare equal, so each one is kept.
            if !unique.contains(&point) {
                unique.push(point);
            }
        }
        Self { points: unique }
    }

    /// Creates an empty point set.
    #[inline]
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns `true` if every point is defined. An empty set is defined.
    pub fn is_defined(&self) -> bool {
        self.points.iter().all(Point::is_defined)
    }

    /// Returns `true` if the set has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of distinct points.
    #[inline]
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// The points, in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    /// Iterates over the points in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point<F>> {
        self.points.iter()
    }

    /// Returns `true` if the points of both sets can be paired one-to-one,
    /// each pair lying within `tolerance`.
    ///
    /// Pairing is greedy: each point takes the first unused match. Empty sets
    /// and sets of different sizes are never near.
    pub fn is_near(&self, other: &Self, tolerance: F) -> Result<bool> {
        check_tolerance(tolerance)?;

        if self.is_empty() || other.is_empty() || self.size() != other.size() {
            return Ok(false);
        }

        let mut remaining: Vec<&Point<F>> = other.points.iter().collect();

        for point in &self.points {
            let mut matched = None;
            for (i, candidate) in remaining.iter().enumerate() {
                if point.is_near(candidate, tolerance)? {
                    matched = Some(i);
                    break;
                }
            }
            match matched {
                Some(i) => {
                    remaining.swap_remove(i);
                }
                None => return Ok(false),
            }
        }

        Ok(true)
    }

    /// Returns the point of the set closest to `point`.
    pub fn point_closest_to(&self, point: &Point<F>) -> Result<Point<F>> {
        if !point.is_defined() {
            return Err(GeometryError::Undefined("Point"));
        }
        closest_point(&self.points, point)?.ok_or(GeometryError::Undefined("Point set"))
    }

    /// Returns the image of this set under `transformation`.
    ///
    /// Points that coincide after the mapping are merged.
    pub fn apply_transformation(&self, transformation: &Transformation<F>) -> Result<Self> {
        if !transformation.is_defined() {
            return Err(GeometryError::Undefined("Transformation"));
        }
        if !self.is_defined() {
            return Err(GeometryError::Undefined("Point set"));
        }
        let points = self
            .points
            .iter()
            .map(|p| transformation.apply_to_point(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(points))
    }
}

/// Returns the first point of `points` nearest to `target`, or `None` if empty.
pub(crate) fn closest_point<F: Float>(
    points: &[Point<F>],
    target: &Point<F>,
) -> Result<Option<Point<F>>> {
    let target = target.coordinates()?;
    let mut best: Option<(Point<F>, F)> = None;

    for point in points {
        let d = (point.coordinates()? - target).magnitude_squared();
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((*point, d));
        }
    }

    Ok(best.map(|(p, _)| p))
}

impl<F: PartialEq> PartialEq for PointSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.points.len() == other.points.len() && self.points.iter().all(|p| other.points.contains(p))
    }
}

impl<F: Float> FromIterator<Point<F>> for PointSet<F> {
    fn from_iter<I: IntoIterator<Item = Point<F>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, F: Float> IntoIterator for &'a PointSet<F> {
    type Item = &'a Point<F>;
    type IntoIter = std::slice::Iter<'a, Point<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: Float + fmt::Display> fmt::Display for PointSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", p)?;
        }
        f.write_str("}")
    }
}
