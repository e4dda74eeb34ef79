//! Integration tests for board play

use deal_calc::board::{presets, Board, Side};
use deal_calc::stats::{OfferCalculator, StatisticsEngine};

#[test]
fn test_play_rounds_on_standard_board() {
    let engine = StatisticsEngine::default();
    let mut board = Board::standard();

    // Open the six smallest amounts: the offer can only go up
    let before = engine.calculate(&board.remaining_amounts(), 6).unwrap();
    for index in 0..6 {
        board.toggle(Side::Left, index).unwrap();
    }
    let after = engine.calculate(&board.remaining_amounts(), 5).unwrap();

    assert_eq!(board.remaining_count(), 20);
    assert!(after.current_offer > before.current_offer);
    assert!((after.current_offer - before.best_offer).abs() < 1e-6);
}

#[test]
fn test_edited_amount_flows_into_offer() {
    let engine = StatisticsEngine::default();
    let mut board = Board::from_amounts("test", &[], &[]);
    board.reset();
    board.select_all();
    board.set_opened(Side::Right, 12, false).unwrap();
    board.set_opened(Side::Left, 0, false).unwrap();
    board.set_opened(Side::Left, 1, false).unwrap();
    board.set_amount(Side::Right, 12, "2,000,000").unwrap();

    let result = engine.calculate(&board.remaining_amounts(), 1).unwrap();
    assert!((result.current_offer - 2_000_001.01 / 3.0).abs() < 1e-6);
}

#[test]
fn test_every_preset_evaluates() {
    let engine = StatisticsEngine::default();
    for preset in presets::catalog() {
        let board = Board::from_preset(&preset);
        let result = engine.calculate(&board.remaining_amounts(), 1).unwrap();
        assert!(result.current_offer > 0.0, "{}", preset.id);
        assert_eq!(result.scenarios as usize, preset.case_count());
    }
}
