//! Tests for resume marker matching

#[cfg(test)]
mod tests {
    use stonetile::algorithm::resume::ResumeController;
    use stonetile::spatial::board::Board;
    use stonetile::spatial::grid::PlanarGrid;
    use stonetile::spatial::stones::StoneColor;

    const PAIR: [[i32; 3]; 2] = [[0, 0, 0], [1, 0, 0]];

    fn empty() -> Board {
        Board::for_grid(&PlanarGrid::new(4, 1).expect("valid grid"))
    }

    fn marker() -> Board {
        empty()
            .place(StoneColor::Cyan, &PAIR, [0, 0, 0])
            .and_then(|board| board.place(StoneColor::Red, &PAIR, [2, 0, 0]))
            .expect("fits")
    }

    #[test]
    fn test_controller_starts_active() {
        let mut resume = ResumeController::new(marker());
        assert!(resume.is_active());
        resume.finish();
        assert!(!resume.is_active());
        resume.finish();
        assert!(!resume.is_active());
    }

    #[test]
    fn test_constrains_placed_colors_only() {
        let resume = ResumeController::new(marker());
        assert!(resume.constrains(StoneColor::Cyan));
        assert!(resume.constrains(StoneColor::Red));
        assert!(!resume.constrains(StoneColor::Lime));
    }

    // Tests matching compares only the cells of the color just placed
    // Verified by comparing whole signatures
    #[test]
    fn test_matches_current_color_cells() {
        let resume = ResumeController::new(marker());
        let same = empty()
            .place(StoneColor::Cyan, &PAIR, [0, 0, 0])
            .expect("fits");
        let shifted = empty()
            .place(StoneColor::Cyan, &PAIR, [1, 0, 0])
            .expect("fits");

        assert!(resume.matches(&same, StoneColor::Cyan));
        assert!(!resume.matches(&shifted, StoneColor::Cyan));
    }

    #[test]
    fn test_before_placing_drops_the_last_color() {
        let resume = ResumeController::before_placing(&marker(), StoneColor::Red);
        assert!(resume.constrains(StoneColor::Cyan));
        assert!(!resume.constrains(StoneColor::Red));
        assert_eq!(resume.marker().to_signature(), "c c · ·");
    }

    // Tests a marker is only usable if it extends the starting board
    // Verified by accepting any marker of matching shape
    #[test]
    fn test_extends_starting_board() {
        let resume = ResumeController::new(marker());
        let compatible = empty()
            .place(StoneColor::Cyan, &PAIR, [0, 0, 0])
            .expect("fits");
        let conflicting = empty()
            .place(StoneColor::Cyan, &PAIR, [2, 0, 0])
            .expect("fits");
        let other_shape = Board::for_grid(&PlanarGrid::new(2, 2).expect("valid grid"));

        assert!(resume.extends(&empty()));
        assert!(resume.extends(&compatible));
        assert!(!resume.extends(&conflicting));
        assert!(!resume.extends(&other_shape));
    }
}
