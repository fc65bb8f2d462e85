//! Jumps to the next region of a different classification.

use crate::{Direction, GridBounds, GridLocator, Position};

/// Scans from `start` in `direction` until the classification changes.
///
/// Returns the first cell whose classification differs from the cell at
/// `start`. Missing cells along the way are skipped. If the scan leaves the
/// board, the edge on the moving axis is returned with the other coordinate
/// held at its starting value.
///
/// A missing start cell compares unequal to every real classification, so the
/// first existing cell stops the scan.
///
/// # Examples
///
/// ```
/// use minenav_core::{Direction, GridBounds, Position, scan_to_transition, testing::FakeGrid};
///
/// let grid: FakeGrid = "..###.".parse().unwrap();
/// let bounds = GridBounds::new(5, 0);
/// assert_eq!(
///     scan_to_transition(&grid, bounds, Position::new(0, 0), Direction::Right),
///     Position::new(2, 0),
/// );
/// assert_eq!(
///     scan_to_transition(&grid, bounds, Position::new(2, 0), Direction::Right),
///     Position::new(5, 0),
/// );
/// ```
pub fn scan_to_transition<G>(
    grid: &G,
    bounds: GridBounds,
    start: Position,
    direction: Direction,
) -> Position
where
    G: GridLocator + ?Sized,
{
    let start = bounds.clamp(start.x.into(), start.y.into());
    let start_class = grid.classify_at(start);

    let mut current = start;
    loop {
        let Some(next) = current
            .stepped(direction)
            .filter(|&pos| bounds.contains(pos))
        else {
            let edge = bounds.edge(start, direction);
            log::trace!("scan {direction:?} from {start} reached edge {edge}");
            return edge;
        };
        current = next;

        let Some(class) = grid.classify_at(current) else {
            continue;
        };
        if Some(class) != start_class {
            log::trace!("scan {direction:?} from {start} stopped at {current} ({class})");
            return current;
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::FakeGrid;

    fn grid(diagram: &str) -> FakeGrid {
        diagram.parse().expect("valid board diagram")
    }

    #[test]
    fn test_stops_at_first_differing_cell() {
        let grid = grid(
            "
            #########
            ....#####
            ",
        );
        let bounds = grid.locate().unwrap();
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(0, 1), Direction::Right),
            Position::new(4, 1)
        );
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(8, 1), Direction::Left),
            Position::new(3, 1)
        );
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(0, 0), Direction::Down),
            Position::new(0, 1)
        );
    }

    #[test]
    fn test_uniform_run_reaches_edge() {
        let grid = grid(
            "
            ####
            ####
            ####
            ",
        );
        let bounds = grid.locate().unwrap();
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(1, 1), Direction::Up),
            Position::new(1, 0)
        );
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(1, 1), Direction::Right),
            Position::new(3, 1)
        );
    }

    #[test]
    fn test_start_on_edge_stays() {
        let grid = grid("#..");
        let bounds = grid.locate().unwrap();
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(2, 0), Direction::Right),
            Position::new(2, 0)
        );
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(0, 0), Direction::Left),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_missing_cells_are_skipped() {
        let grid = grid("#__#.");
        let bounds = grid.locate().unwrap();
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(0, 0), Direction::Right),
            Position::new(4, 0)
        );
    }

    #[test]
    fn test_missing_start_stops_at_first_existing_cell() {
        let grid = grid("##_##");
        let bounds = grid.locate().unwrap();
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(2, 0), Direction::Right),
            Position::new(3, 0)
        );
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(2, 0), Direction::Left),
            Position::new(1, 0)
        );
    }

    #[test]
    fn test_unknown_is_its_own_region() {
        let grid = grid("??#?");
        let bounds = grid.locate().unwrap();
        assert_eq!(
            scan_to_transition(&grid, bounds, Position::new(0, 0), Direction::Right),
            Position::new(2, 0)
        );
    }

    fn diagram() -> impl Strategy<Value = String> {
        let cell = prop::sample::select(vec!['#', '.', 'F', '!', '?', '_']);
        (1usize..8).prop_flat_map(move |width| {
            prop::collection::vec(
                prop::collection::vec(cell.clone(), width..=width)
                    .prop_map(|row| row.into_iter().collect::<String>()),
                1..8,
            )
            .prop_map(|rows| rows.join("\n"))
        })
    }

    proptest! {
        #[test]
        fn scan_lands_on_a_transition_or_an_edge(
            diagram in diagram(),
            sx in 0u32..8,
            sy in 0u32..8,
            direction in prop::sample::select(Direction::ALL.to_vec())
        ) {
            let grid = grid(&diagram);
            let Some(bounds) = grid.locate() else {
                return Ok(());
            };
            let start = bounds.clamp(sx.into(), sy.into());
            let start_class = grid.classify_at(start);
            let end = scan_to_transition(&grid, bounds, start, direction);

            prop_assert!(bounds.contains(end));
            let is_edge = end == bounds.edge(start, direction);
            let end_class = grid.classify_at(end);
            prop_assert!(
                is_edge || (end_class.is_some() && end_class != start_class),
                "{end} is neither an edge nor a transition"
            );

            // Every cell passed over belongs to the start run or is missing.
            let mut pos = start;
            while let Some(next) = pos.stepped(direction).filter(|&p| p != end) {
                if !bounds.contains(next) {
                    break;
                }
                let class = grid.classify_at(next);
                prop_assert!(class.is_none() || class == start_class);
                pos = next;
            }
        }
    }
}
