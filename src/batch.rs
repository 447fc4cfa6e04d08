//! Many query points against one triangle.
//!
//! The triangle is prepared once, so degeneracy is reported once for the
//! whole batch. Every point is independent; the `rayon` variants split the
//! slice across the thread pool and collect in input order.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::errors::DegenerateTriangleError;
use crate::solver::BarycentricSolver;
use crate::triangle::Triangle;
use crate::types::{BarycentricCoordinates, Containment, Point2D};

impl BarycentricSolver {
    /// Coordinates of every point in `points`, in the same order.
    pub fn solve_many(
        &self,
        triangle: &Triangle,
        points: &[Point2D],
    ) -> Result<Vec<BarycentricCoordinates>, DegenerateTriangleError> {
        let prepared = triangle.prepare(self.tolerance())?;
        crate::log::debug!(count = points.len(), "solving batch");
        Ok(points.iter().map(|&p| prepared.barycentric(p)).collect())
    }

    /// Containment of every point in `points`, in the same order.
    pub fn classify_many(
        &self,
        triangle: &Triangle,
        points: &[Point2D],
    ) -> Result<Vec<Containment>, DegenerateTriangleError> {
        let prepared = triangle.prepare(self.tolerance())?;
        crate::log::debug!(count = points.len(), "classifying batch");
        Ok(points.iter().map(|&p| prepared.classify(p)).collect())
    }

    /// Parallel [`solve_many`](Self::solve_many); identical output.
    #[cfg(feature = "rayon")]
    pub fn par_solve_many(
        &self,
        triangle: &Triangle,
        points: &[Point2D],
    ) -> Result<Vec<BarycentricCoordinates>, DegenerateTriangleError> {
        let prepared = triangle.prepare(self.tolerance())?;
        Ok(points.par_iter().map(|&p| prepared.barycentric(p)).collect())
    }

    /// Parallel [`classify_many`](Self::classify_many); identical output.
    #[cfg(feature = "rayon")]
    pub fn par_classify_many(
        &self,
        triangle: &Triangle,
        points: &[Point2D],
    ) -> Result<Vec<Containment>, DegenerateTriangleError> {
        let prepared = triangle.prepare(self.tolerance())?;
        Ok(points.par_iter().map(|&p| prepared.classify(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn grid(n: i32) -> Vec<Point2D> {
        (0..n)
            .flat_map(|y| (0..n).map(move |x| dvec2(x as f64 + 0.5, y as f64 + 0.5)))
            .collect()
    }

    #[test]
    fn solve_many_preserves_order() {
        let solver = BarycentricSolver::new();
        let tri = Triangle::from([[0.0, 0.0], [8.0, 1.0], [2.0, 7.0]]);
        let points = grid(8);

        let coords = solver.solve_many(&tri, &points).unwrap();
        assert_eq!(coords.len(), points.len());
        for (p, got) in points.iter().zip(&coords) {
            assert_eq!(*got, solver.solve(tri.a, tri.b, tri.c, *p).unwrap());
        }
    }

    #[test]
    fn classify_many_counts() {
        let solver = BarycentricSolver::new();
        // Lower-left half of a 4x4 pixel grid; the hypotenuse runs through
        // the centers of the anti-diagonal pixels
        let tri = Triangle::from([[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]);
        let classes = solver.classify_many(&tri, &grid(4)).unwrap();

        let inside = classes.iter().filter(|c| **c == Containment::Inside).count();
        let boundary = classes.iter().filter(|c| **c == Containment::Boundary).count();
        assert_eq!(inside, 6);
        assert_eq!(boundary, 4);
        assert_eq!(classes.len() - inside - boundary, 6);
    }

    #[test]
    fn degenerate_batch_fails_once() {
        let solver = BarycentricSolver::new();
        let tri = Triangle::from([[0.0, 0.0], [1.0, 2.0], [2.0, 4.0]]);
        assert!(solver.solve_many(&tri, &grid(3)).is_err());
        assert!(solver.classify_many(&tri, &[]).is_err());
    }

    #[test]
    fn empty_batch() {
        let solver = BarycentricSolver::new();
        let tri = Triangle::from([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert!(solver.solve_many(&tri, &[]).unwrap().is_empty());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_sequential() {
        let solver = BarycentricSolver::new();
        let tri = Triangle::from([[-3.0, -1.0], [40.0, 5.0], [10.0, 60.0]]);
        let points = grid(64);

        assert_eq!(
            solver.par_solve_many(&tri, &points).unwrap(),
            solver.solve_many(&tri, &points).unwrap()
        );
        assert_eq!(
            solver.par_classify_many(&tri, &points).unwrap(),
            solver.classify_many(&tri, &points).unwrap()
        );
    }
}
