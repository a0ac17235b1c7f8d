//! Off-the-shelf distance heuristics for grid-like state spaces.

/// A state with a position in the plane, as needed by the distance heuristics.
pub trait Planar {
    fn coordinates(&self) -> (f64, f64);
}

/// Returns a straight-line (Euclidean) distance estimate bound to `goal`.
///
/// Admissible whenever every move covers at most one unit of straight-line
/// distance, which holds for 4-connected and 8-connected grids.
pub fn euclidean_distance<T: Planar>(goal: &T) -> impl Fn(&T) -> f64 {
    let (goal_x, goal_y) = goal.coordinates();
    move |state: &T| {
        let (x, y) = state.coordinates();
        let dx = goal_x - x;
        let dy = goal_y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Returns an axis-aligned (Manhattan) distance estimate bound to `goal`.
///
/// Admissible on 4-connected grids, where every move changes exactly one
/// coordinate by one.
pub fn manhattan_distance<T: Planar>(goal: &T) -> impl Fn(&T) -> f64 {
    let (goal_x, goal_y) = goal.coordinates();
    move |state: &T| {
        let (x, y) = state.coordinates();
        (goal_x - x).abs() + (goal_y - y).abs()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct Point(f64, f64);

    impl Planar for Point {
        fn coordinates(&self) -> (f64, f64) {
            (self.0, self.1)
        }
    }

    #[test]
    fn euclidean_is_straight_line() {
        let to_goal = euclidean_distance(&Point(3.0, 4.0));
        assert_eq!(to_goal(&Point(0.0, 0.0)), 5.0);
        assert_eq!(to_goal(&Point(3.0, 4.0)), 0.0);
    }

    #[test]
    fn manhattan_sums_axis_distances() {
        let to_goal = manhattan_distance(&Point(3.0, 4.0));
        assert_eq!(to_goal(&Point(0.0, 0.0)), 7.0);
        assert_eq!(to_goal(&Point(1.0, 6.0)), 4.0);
    }

    #[test]
    fn manhattan_never_undercuts_euclidean() {
        let goal = Point(5.0, 5.0);
        let euclid = euclidean_distance(&goal);
        let manhattan = manhattan_distance(&goal);
        for x in 0..10 {
            for y in 0..10 {
                let p = Point(x as f64, y as f64);
                assert!(manhattan(&p) >= euclid(&p) - 1e-9);
            }
        }
    }
}
