//! Tests for PNG rendering of boards

#[cfg(test)]
mod tests {
    use image::Rgba;

    use stonetile::algorithm::registry::SolutionSink;
    use stonetile::io::configuration::{BACKGROUND_RGBA, EMPTY_CELL_RGBA, PNG_CELL_SIZE};
    use stonetile::io::image::{PngGallery, export_board_as_png, render_board};
    use stonetile::spatial::board::Board;
    use stonetile::spatial::grid::{PlanarGrid, PyramidGrid};
    use stonetile::spatial::stones::StoneColor;

    fn planar() -> Board {
        Board::for_grid(&PlanarGrid::new(11, 5).expect("valid grid"))
    }

    // Tests image size follows cell pitch and layer gaps
    // Verified by dropping the layer gap
    #[test]
    fn test_rendered_dimensions() {
        assert_eq!(render_board(&planar()).dimensions(), (284, 128));

        let pyramid = Board::for_grid(&PyramidGrid::new(2).expect("valid grid"));
        assert_eq!(render_board(&pyramid).dimensions(), (90, 50));
    }

    #[test]
    fn test_cells_use_stone_colors() {
        let board = planar()
            .place(StoneColor::Cyan, &[[0, 0, 0]], [0, 0, 0])
            .expect("fits");
        let img = render_board(&board);

        assert_eq!(img.get_pixel(0, 0), &Rgba(StoneColor::Cyan.rgba()));
        assert_eq!(img.get_pixel(30, 0), &Rgba(EMPTY_CELL_RGBA));
        assert_eq!(img.get_pixel(PNG_CELL_SIZE, 0), &Rgba(BACKGROUND_RGBA));
    }

    #[test]
    fn test_export_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("board.png");

        export_board_as_png(&planar(), &path).expect("export");
        let loaded = image::open(&path).expect("readable png");
        assert_eq!((loaded.width(), loaded.height()), (284, 128));
    }

    // Tests the gallery numbers images consecutively
    // Verified by restarting numbering on every write
    #[test]
    fn test_gallery_numbers_solutions() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut gallery = PngGallery::new(dir.path()).expect("gallery");

        gallery.persist("", &planar()).expect("write");
        gallery.persist("", &planar()).expect("write");

        assert_eq!(gallery.written(), 2);
        assert!(dir.path().join("solution_0001.png").exists());
        assert!(dir.path().join("solution_0002.png").exists());
    }

    #[test]
    fn test_gallery_continues_numbering() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut gallery = PngGallery::new(dir.path())
            .expect("gallery")
            .continuing_from(3);

        gallery.persist("", &planar()).expect("write");
        assert!(dir.path().join("solution_0004.png").exists());
        assert_eq!(gallery.image_path(7), dir.path().join("solution_0007.png"));
    }
}
