//! Totally ordered selection keys for insertion steps.
//!
//! Floating-point costs are compared with [`f64::total_cmp`], and ties fall
//! through to vertex ids, so picking the minimum key is deterministic.

use std::cmp::Ordering;

/// A possible construction step: attach `vertex` after `source`, bringing the
/// tour to a total weight of `cost`.
///
/// Ordered by `cost`, then `source`, then `vertex`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Candidate;
///
/// let a = Candidate::new(4.0, 2, 7);
/// let b = Candidate::new(4.0, 1, 9);
/// assert!(b < a);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Tour weight after the step.
    pub cost: f64,
    /// Tour vertex the new vertex is attached after.
    pub source: usize,
    /// Vertex being added.
    pub vertex: usize,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new(cost: f64, source: usize, vertex: usize) -> Self {
        Self {
            cost,
            source,
            vertex,
        }
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.source.cmp(&other.source))
            .then(self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Priority of an unvisited vertex under regret insertion.
///
/// `priority` is the negated regret when the vertex had at least two
/// insertion alternatives, otherwise its best cost. Smaller keys win; ties
/// fall through to the best cost, the edge source, then the vertex id.
#[derive(Debug, Clone, Copy)]
pub struct RegretKey {
    /// Negated regret, or the best cost for single-edge tours.
    pub priority: f64,
    /// The vertex's best insertion.
    pub best: Candidate,
}

impl RegretKey {
    /// Key for a vertex with the given regret and best insertion.
    pub fn with_regret(regret: f64, best: Candidate) -> Self {
        Self {
            priority: -regret,
            best,
        }
    }

    /// Key for a vertex that had a single insertion alternative.
    pub fn single(best: Candidate) -> Self {
        Self {
            priority: best.cost,
            best,
        }
    }
}

impl Ord for RegretKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.best.cmp(&other.best))
    }
}

impl PartialOrd for RegretKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RegretKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RegretKey {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_cost_first() {
        let cheap = Candidate::new(1.0, 9, 9);
        let dear = Candidate::new(2.0, 0, 0);
        assert!(cheap < dear);
    }

    #[test]
    fn test_candidate_tie_break_order() {
        let mut candidates = vec![
            Candidate::new(3.0, 2, 1),
            Candidate::new(3.0, 1, 5),
            Candidate::new(3.0, 1, 4),
        ];
        candidates.sort();
        let order: Vec<_> = candidates.iter().map(|c| (c.source, c.vertex)).collect();
        assert_eq!(order, vec![(1, 4), (1, 5), (2, 1)]);
    }

    #[test]
    fn test_regret_larger_regret_wins() {
        let urgent = RegretKey::with_regret(10.0, Candidate::new(50.0, 3, 3));
        let relaxed = RegretKey::with_regret(2.0, Candidate::new(5.0, 0, 1));
        assert!(urgent < relaxed);
    }

    #[test]
    fn test_regret_ties_fall_back_to_cost() {
        let a = RegretKey::with_regret(4.0, Candidate::new(7.0, 0, 2));
        let b = RegretKey::with_regret(4.0, Candidate::new(6.0, 1, 3));
        assert!(b < a);
        let c = RegretKey::with_regret(4.0, Candidate::new(6.0, 1, 2));
        assert!(c < b);
    }

    #[test]
    fn test_single_key_orders_like_candidate() {
        let a = RegretKey::single(Candidate::new(2.0, 0, 4));
        let b = RegretKey::single(Candidate::new(2.0, 0, 3));
        assert!(b < a);
        assert_eq!(a.priority, 2.0);
    }
}
