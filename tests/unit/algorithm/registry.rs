//! Tests for solution deduplication and sink persistence

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use stonetile::Result;
    use stonetile::algorithm::registry::{SolutionRegistry, SolutionSink};
    use stonetile::spatial::board::Board;
    use stonetile::spatial::grid::PlanarGrid;
    use stonetile::spatial::stones::StoneColor;

    #[derive(Default)]
    struct Recorder {
        persisted: Rc<RefCell<Vec<String>>>,
        flushes: Rc<RefCell<usize>>,
    }

    impl SolutionSink for Recorder {
        fn persist(&mut self, signature: &str, _board: &Board) -> Result<()> {
            self.persisted.borrow_mut().push(signature.to_string());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            *self.flushes.borrow_mut() += 1;
            Ok(())
        }
    }

    fn filled(color: StoneColor) -> Board {
        Board::for_grid(&PlanarGrid::new(2, 1).expect("valid grid"))
            .place(color, &[[0, 0, 0], [1, 0, 0]], [0, 0, 0])
            .expect("fits")
    }

    // Tests identical boards are recorded once
    // Verified by keying on the board address
    #[test]
    fn test_record_deduplicates_by_signature() {
        let mut registry = SolutionRegistry::new();
        assert!(registry.record(&filled(StoneColor::Red)).expect("no sinks"));
        assert!(!registry.record(&filled(StoneColor::Red)).expect("no sinks"));
        assert!(registry.record(&filled(StoneColor::Cyan)).expect("no sinks"));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.discovered(),
            &["R R".to_string(), "c c".to_string()]
        );
        assert!(registry.contains("R R"));
    }

    #[test]
    fn test_sinks_receive_only_new_solutions() {
        let recorder = Recorder::default();
        let persisted = Rc::clone(&recorder.persisted);
        let flushes = Rc::clone(&recorder.flushes);
        let mut registry = SolutionRegistry::new().with_sink(Box::new(recorder));

        registry.record(&filled(StoneColor::Red)).expect("sink accepts");
        registry.record(&filled(StoneColor::Red)).expect("sink accepts");
        registry.flush().expect("sink flushes");

        assert_eq!(*persisted.borrow(), vec!["R R".to_string()]);
        assert_eq!(*flushes.borrow(), 1);
    }

    // Tests seeded signatures count as known without being persisted again
    // Verified by persisting seeded signatures
    #[test]
    fn test_seeded_signatures_are_known() {
        let recorder = Recorder::default();
        let persisted = Rc::clone(&recorder.persisted);
        let mut registry = SolutionRegistry::new().with_sink(Box::new(recorder));
        registry.seed(["R R"]);

        assert!(!registry.record(&filled(StoneColor::Red)).expect("sink accepts"));
        assert!(registry.discovered().is_empty());
        assert!(persisted.borrow().is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = SolutionRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("R R"));
    }
}
