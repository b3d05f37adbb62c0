//! Set of vertices not yet placed in a tour.

/// Vertices still waiting to be added to a tour.
///
/// Backed by a boolean mask, so membership tests are O(1) and iteration is
/// always in ascending vertex order.
///
/// # Examples
///
/// ```
/// use u_tour::models::UnvisitedSet;
///
/// let mut unvisited = UnvisitedSet::all_except(4, 1);
/// assert_eq!(unvisited.iter().collect::<Vec<_>>(), vec![0, 2, 3]);
/// assert!(unvisited.remove(2));
/// assert!(!unvisited.remove(2));
/// assert_eq!(unvisited.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnvisitedSet {
    pending: Vec<bool>,
    len: usize,
}

impl UnvisitedSet {
    /// All vertices `0..size` except `start`.
    pub fn all_except(size: usize, start: usize) -> Self {
        let mut pending = vec![true; size];
        let mut len = size;
        if let Some(slot) = pending.get_mut(start) {
            *slot = false;
            len -= 1;
        }
        Self { pending, len }
    }

    /// Removes `vertex`, returning whether it was still unvisited.
    pub fn remove(&mut self, vertex: usize) -> bool {
        match self.pending.get_mut(vertex) {
            Some(slot) if *slot => {
                *slot = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of unvisited vertices.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if every vertex has been visited.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Unvisited vertices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.pending
            .iter()
            .enumerate()
            .filter_map(|(v, &pending)| pending.then_some(v))
    }
}
