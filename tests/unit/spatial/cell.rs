//! Tests for grid coordinates and Manhattan distance

#[cfg(test)]
mod tests {
    use seatplan::spatial::Cell;

    // Distance is symmetric and sums both axes
    #[test]
    fn test_manhattan_distance() {
        let a = Cell::new(0, 0);
        let b = Cell::new(2, 3);

        assert_eq!(a.manhattan_distance(b), 5);
        assert_eq!(b.manhattan_distance(a), 5);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    // Only side-sharing neighbours are adjacent
    #[test]
    fn test_edge_adjacency_excludes_diagonals() {
        let centre = Cell::new(1, 1);

        assert!(centre.is_edge_adjacent(Cell::new(0, 1)));
        assert!(centre.is_edge_adjacent(Cell::new(2, 1)));
        assert!(centre.is_edge_adjacent(Cell::new(1, 0)));
        assert!(centre.is_edge_adjacent(Cell::new(1, 2)));

        assert!(!centre.is_edge_adjacent(Cell::new(0, 0)));
        assert!(!centre.is_edge_adjacent(Cell::new(2, 2)));
        assert!(!centre.is_edge_adjacent(centre));
        assert!(!centre.is_edge_adjacent(Cell::new(1, 3)));
    }

    #[test]
    fn test_index_and_display() {
        let cell = Cell::new(4, 7);

        assert_eq!(cell.as_index(), [4, 7]);
        assert_eq!(cell.to_string(), "(4, 7)");
    }

    // Ordering follows rows first, matching the search's cell order
    #[test]
    fn test_ordering_is_row_major() {
        let mut cells = [Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();

        assert_eq!(cells, [Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }
}
