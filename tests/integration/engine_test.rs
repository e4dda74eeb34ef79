//! Integration tests for the statistics engine

use deal_calc::board::{presets, Board};
use deal_calc::stats::{
    combination_count, enumerate_reveals, OfferCalculator, StatisticsEngine, StatsError,
};

#[test]
fn test_concrete_scenario() {
    let engine = StatisticsEngine::default();
    let result = engine.calculate(&[10.0, 20.0, 30.0, 40.0], 1).unwrap();
    assert_eq!(result.current_offer, 25.0);
    assert_eq!(result.worst_offer, 20.0);
    assert_eq!(result.best_offer, 30.0);
    assert!((result.pct_decrease - 0.2).abs() < 1e-12);
    assert!((result.pct_increase - 0.2).abs() < 1e-12);
}

#[test]
fn test_degenerate_zero_board() {
    let engine = StatisticsEngine::default();
    let result = engine.calculate(&[0.0, 0.0, 0.0], 1).unwrap();
    assert_eq!(result.volatility, 0.0);
    assert_eq!(result.current_offer, 0.0);
}

#[test]
fn test_three_and_two_case_boundary() {
    let engine = StatisticsEngine::default();

    let three = engine.calculate(&[1.0, 50.0, 1_000.0], 1).unwrap();
    assert!(three.best_offer > 0.0);
    assert!(three.worst_offer > 0.0);
    assert!(three.pct_increase > 0.0);
    assert!(three.pct_decrease > 0.0);

    let two = engine.calculate(&[1.0, 1_000.0], 1).unwrap();
    assert_eq!(two.best_offer, 0.0);
    assert_eq!(two.worst_offer, 0.0);
    assert_eq!(two.pct_increase, 0.0);
    assert_eq!(two.pct_decrease, 0.0);
}

#[test]
fn test_reveal_all_rejected() {
    let engine = StatisticsEngine::default();
    let result = engine.calculate(&[1.0, 2.0, 3.0, 4.0, 5.0], 5);
    assert_eq!(
        result,
        Err(StatsError::InvalidRevealCount {
            requested: 5,
            remaining: 5
        })
    );
}

#[test]
fn test_double_deal_scales_exactly() {
    let engine = StatisticsEngine::default();
    let standard = Board::standard().remaining_amounts();
    let double = Board::from_preset(&presets::find("double-deal", 4).unwrap()).remaining_amounts();

    let a = engine.calculate(&standard, 2).unwrap();
    let b = engine.calculate(&double, 2).unwrap();

    assert_eq!(b.current_offer, a.current_offer * 2.0);
    assert_eq!(b.best_offer, a.best_offer * 2.0);
    assert_eq!(b.worst_offer, a.worst_offer * 2.0);
    assert!((a.volatility - b.volatility).abs() < 1e-12);
}

#[test]
fn test_standard_board_enumeration_count() {
    let remaining = Board::standard().remaining_amounts();
    let count = enumerate_reveals(&remaining, 3).unwrap().count() as u64;
    assert_eq!(Some(count), combination_count(26, 3));
    assert_eq!(count, 2_600);
}

#[test]
fn test_million_dollar_mission_counts_duplicates() {
    let board = Board::from_preset(&presets::million_dollar_mission(13).unwrap());
    let remaining = board.remaining_amounts();
    let count = enumerate_reveals(&remaining, 2).unwrap().count();
    assert_eq!(count, 325);
}

#[test]
fn test_standard_board_first_round() {
    let engine = StatisticsEngine::default();
    let remaining = Board::standard().remaining_amounts();
    let result = engine.calculate(&remaining, 6).unwrap();

    // Mean of the standard US board
    assert!((result.current_offer - 131_477.5388461538).abs() < 1e-6);
    assert_eq!(result.scenarios, 230_230);
    assert!(result.volatility > 0.0);
    assert!(result.worst_offer < result.current_offer);
    assert!(result.best_offer > result.current_offer);
}
