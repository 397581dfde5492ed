use super::*;

// ==================== MIDDLE GAME PERFT TESTS ====================
// Buggy-engine honeypot: promotion captures that change castle rights.

const FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn test_perft_middle_game_depth_1() {
    let pos = Position::from_fen(FEN).expect("valid FEN");
    assert_eq!(pos.perft(1), 44);
}

#[test]
fn test_perft_middle_game_depth_2() {
    let pos = Position::from_fen(FEN).expect("valid FEN");
    assert_eq!(pos.perft(2), 1486);
}

#[test]
fn test_perft_middle_game_depth_3() {
    let pos = Position::from_fen(FEN).expect("valid FEN");
    assert_eq!(pos.perft(3), 62379);
}

#[test]
fn test_perft_middle_game_depth_4() {
    let pos = Position::from_fen(FEN).expect("valid FEN");
    assert_eq!(pos.perft(4), 2103487);
}
