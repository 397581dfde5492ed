use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_startpos_depth_1() {
    let pos = Position::startpos();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_startpos_depth_2() {
    let pos = Position::startpos();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_startpos_depth_3() {
    let pos = Position::startpos();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_startpos_depth_4() {
    let pos = Position::startpos();
    assert_eq!(pos.perft(4), 197281);
}
