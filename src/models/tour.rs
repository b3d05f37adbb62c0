//! Growing tour representation shared by the constructors.

/// An ordered vertex sequence that grows one vertex at a time.
///
/// Two shapes are used:
///
/// - **open path** ([`Tour::open`]): `[start]`, extended with [`push`](Tour::push)
///   and finally closed with [`close`](Tour::close);
/// - **cycle** ([`Tour::closed`]): `[start, start]`, extended with
///   [`insert_after`](Tour::insert_after), which never touches the first or
///   last entry.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let mut tour = Tour::closed(0);
/// tour.insert_after(0, 3);
/// tour.insert_after(3, 1);
/// assert_eq!(tour.vertices(), &[0, 3, 1, 0]);
/// assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(0, 3), (3, 1), (1, 0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    vertices: Vec<usize>,
}

impl Tour {
    /// An open path holding only `start`.
    pub fn open(start: usize) -> Self {
        Self {
            vertices: vec![start],
        }
    }

    /// A degenerate cycle `[start, start]`.
    pub fn closed(start: usize) -> Self {
        Self {
            vertices: vec![start, start],
        }
    }

    /// Appends `vertex` at the end of the path.
    pub fn push(&mut self, vertex: usize) {
        self.vertices.push(vertex);
    }

    /// Closes the path by repeating its first vertex.
    pub fn close(&mut self) {
        if let Some(&start) = self.vertices.first() {
            self.vertices.push(start);
        }
    }

    /// Inserts `vertex` right after the first occurrence of `source`.
    ///
    /// Returns `false`, leaving the tour unchanged, if `source` is not in the
    /// tour or is only present as the closing entry.
    pub fn insert_after(&mut self, source: usize, vertex: usize) -> bool {
        let last = self.vertices.len().saturating_sub(1);
        match self.vertices[..last].iter().position(|&v| v == source) {
            Some(pos) => {
                self.vertices.insert(pos + 1, vertex);
                true
            }
            None => false,
        }
    }

    /// Adjacent `(from, to)` pairs in visiting order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Most recently reached vertex of an open path.
    pub fn end(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// The vertex sequence.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of distinct vertices.
    pub fn distinct_len(&self) -> usize {
        let closing = self.vertices.len() > 1 && self.vertices.first() == self.vertices.last();
        self.vertices.len() - usize::from(closing)
    }

    /// Consumes the tour, returning the vertex sequence.
    pub fn into_route(self) -> Vec<usize> {
        self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_path_push_and_close() {
        let mut tour = Tour::open(2);
        assert_eq!(tour.distinct_len(), 1);
        tour.push(0);
        tour.push(1);
        assert_eq!(tour.end(), Some(1));
        tour.close();
        assert_eq!(tour.vertices(), &[2, 0, 1, 2]);
        assert_eq!(tour.distinct_len(), 3);
        assert_eq!(tour.end(), Some(2));
    }

    #[test]
    fn test_closed_is_degenerate_cycle() {
        let tour = Tour::closed(4);
        assert_eq!(tour.vertices().len(), 2);
        assert_eq!(tour.distinct_len(), 1);
        assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(4, 4)]);
    }

    #[test]
    fn test_insert_after_keeps_endpoints() {
        let mut tour = Tour::closed(0);
        assert!(tour.insert_after(0, 1));
        assert!(tour.insert_after(0, 2));
        assert!(tour.insert_after(1, 3));
        assert_eq!(tour.vertices(), &[0, 2, 1, 3, 0]);
        assert_eq!(tour.distinct_len(), 4);
    }

    #[test]
    fn test_insert_after_unknown_source() {
        let mut tour = Tour::closed(0);
        assert!(!tour.insert_after(5, 1));
        assert_eq!(tour.vertices(), &[0, 0]);
    }

    #[test]
    fn test_into_route() {
        let mut tour = Tour::closed(1);
        tour.insert_after(1, 0);
        assert_eq!(tour.into_route(), vec![1, 0, 1]);
    }
}
