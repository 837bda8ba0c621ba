use salvo::{BitBoard, BitBoardError, Coord};

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    let ok = BitBoard::<u128, 10>::try_new();
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(
        err,
        Err(BitBoardError::SizeTooLarge { n: 3, capacity: 8 })
    ));
}

#[test]
fn test_insert_remove_contains() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.insert(Coord::new(1, 1)).unwrap();
    assert!(bb.contains(Coord::new(1, 1)));
    assert_eq!(bb.len(), 1);

    bb.remove(Coord::new(1, 1)).unwrap();
    assert!(!bb.contains(Coord::new(1, 1)));
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert_eq!(
        bb.insert(Coord::new(4, 0)),
        Err(BitBoardError::OutOfBounds { x: 4, y: 0 })
    );
    assert!(!bb.contains(Coord::new(0, 7)));
}

#[test]
fn test_from_coords_iterates_row_major() {
    let bb = BitBoard::<u16, 4>::from_coords([Coord::new(3, 3), Coord::new(1, 0), Coord::new(0, 1)])
        .unwrap();
    let cells: Vec<_> = bb.iter().collect();
    assert_eq!(cells, vec![Coord::new(1, 0), Coord::new(0, 1), Coord::new(3, 3)]);
}

#[test]
fn test_set_operations() {
    let a = BitBoard::<u128, 10>::from_coords([Coord::new(0, 0), Coord::new(5, 5)]).unwrap();
    let b = BitBoard::<u128, 10>::from_coords([Coord::new(5, 5), Coord::new(9, 9)]).unwrap();
    assert!(a.intersects(&b));
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![Coord::new(5, 5)]);
    assert_eq!((a | b).len(), 3);

    let full = BitBoard::<u128, 10>::full();
    assert_eq!(full.len(), 100);
    assert_eq!((!a).len(), 98);
    assert!((!full).is_empty());
}
