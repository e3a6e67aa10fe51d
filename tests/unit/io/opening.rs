//! Tests for parsing and applying opening placements

#[cfg(test)]
mod tests {
    use std::fs;

    use stonetile::SolverError;
    use stonetile::io::opening::Opening;
    use stonetile::spatial::board::{Board, PlacementError};
    use stonetile::spatial::geometry::{PlanarDirection, PyramidDirection};
    use stonetile::spatial::grid::{PlanarGrid, PyramidGrid};
    use stonetile::spatial::stones::{StoneColor, StoneSet};

    const DOCUMENTED_OPENING: &str = "\
# classic 11x5 opening
pink:4:0,0
yellow:1:1,0
orange:3:4,0
blue:-1:6,0
red:1:4,2
lime:4:6,3
cyan:-3:3,3
green:2:2,1

lightblue:3:0,2
";

    fn planar() -> PlanarGrid {
        PlanarGrid::new(11, 5).expect("valid grid")
    }

    #[test]
    fn test_parse_planar_placement() {
        let placement =
            Opening::parse_placement(&planar(), "pink:4:0,0").expect("valid placement");
        assert_eq!(placement.color, StoneColor::Pink);
        assert_eq!(
            placement.direction,
            PlanarDirection::new(4).expect("valid direction")
        );
        assert_eq!(placement.anchor, [0, 0, 0]);
    }

    #[test]
    fn test_parse_pyramid_placement() {
        let grid = PyramidGrid::new(5).expect("valid grid");
        let placement =
            Opening::parse_placement(&grid, "green:0,1,-1:1,2,1").expect("valid placement");
        assert_eq!(placement.color, StoneColor::Green);
        assert_eq!(
            placement.direction,
            PyramidDirection::new(0, 1, -1).expect("valid direction")
        );
        assert_eq!(placement.anchor, [1, 2, 1]);
    }

    // Tests malformed placements are rejected field by field
    // Verified by defaulting unknown colors to green
    #[test]
    fn test_parse_placement_errors() {
        let grid = planar();
        assert!(Opening::parse_placement(&grid, "pink:4").is_err());
        assert!(Opening::parse_placement(&grid, "purple:4:0,0").is_err());
        assert!(Opening::parse_placement(&grid, "pink:7:0,0").is_err());
        assert!(Opening::parse_placement(&grid, "pink:4:0").is_err());
        assert!(Opening::parse_placement(&grid, "pink:4:a,b").is_err());
    }

    // Tests the documented opening leaves exactly three stones to place
    // Verified by anchoring shapes at their first cell
    #[test]
    fn test_documented_opening_board() {
        let grid = planar();
        let stones = StoneSet::standard();
        let opening = Opening::from_text(&grid, DOCUMENTED_OPENING).expect("valid opening");
        assert_eq!(opening.len(), 9);

        let board = opening
            .apply(&grid, &stones, &Board::for_grid(&grid))
            .expect("placements fit");
        assert_eq!(
            board.to_signature(),
            "\
p y y y y o B B B · ·
p p G y o o B · · · ·
b p G G R o o · · · ·
b p G c R R l l · · ·
b b b c c R l l l · ·"
        );
        assert_eq!(board.empty_count(), 15);
    }

    #[test]
    fn test_from_text_reports_line_numbers() {
        let result = Opening::from_text(&planar(), "pink:4:0,0\n\nbogus\n");
        assert!(matches!(
            result,
            Err(SolverError::InvalidOpening { line: 3, .. })
        ));
    }

    #[test]
    fn test_apply_rejects_collisions_and_repeats() {
        let grid = planar();
        let stones = StoneSet::standard();
        let empty = Board::for_grid(&grid);

        let colliding = Opening::from_text(&grid, "pink:4:0,0\ncyan:1:0,0").expect("parses");
        assert!(matches!(
            colliding.apply(&grid, &stones, &empty),
            Err(SolverError::Placement {
                color: StoneColor::Cyan,
                source: PlacementError::Collision { .. },
            })
        ));

        let repeated = Opening::from_text(&grid, "pink:4:0,0\npink:1:5,0").expect("parses");
        assert!(matches!(
            repeated.apply(&grid, &stones, &empty),
            Err(SolverError::InvalidParameter { .. })
        ));

        let outside = Opening::from_text(&grid, "pink:1:9,3").expect("parses");
        assert!(matches!(
            outside.apply(&grid, &stones, &empty),
            Err(SolverError::Placement {
                source: PlacementError::OutOfBounds { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("opening.txt");
        fs::write(&path, DOCUMENTED_OPENING).expect("write opening");

        let opening = Opening::from_file(&planar(), &path).expect("valid opening");
        assert_eq!(opening.placements().len(), 9);
        assert!(Opening::from_file(&planar(), &dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_empty_opening_keeps_board() {
        let grid = planar();
        let opening = Opening::from_text(&grid, "# nothing yet\n").expect("parses");
        assert!(opening.is_empty());

        let board = Board::for_grid(&grid);
        let applied = opening
            .apply(&grid, &StoneSet::standard(), &board)
            .expect("nothing to place");
        assert_eq!(applied, board);
    }
}
