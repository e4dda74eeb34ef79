//! Preset board catalog
//!
//! The standard US board and the special boards used on the show. Amounts
//! follow https://deal.fandom.com/wiki/Deal_or_No_Deal_(USA)/Game_Board

use super::BoardError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Most $1,000,000 cases a Million Dollar Mission board can hold
pub const MAX_MILLION_CASES: usize = 13;

/// A named set of case amounts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardPreset {
    /// Lookup key
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description of the board
    pub description: String,
    /// Low column amounts
    pub left: Vec<Decimal>,
    /// High column amounts
    pub right: Vec<Decimal>,
}

impl BoardPreset {
    fn new(id: &str, name: &str, description: &str, left: Vec<Decimal>, right: Vec<Decimal>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            left,
            right,
        }
    }

    /// Number of cases on the board
    pub fn case_count(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Largest prize on the board
    pub fn top_prize(&self) -> Decimal {
        self.left
            .iter()
            .chain(self.right.iter())
            .copied()
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

fn standard_left() -> Vec<Decimal> {
    vec![
        dec!(0.01),
        dec!(1),
        dec!(5),
        dec!(10),
        dec!(25),
        dec!(50),
        dec!(75),
        dec!(100),
        dec!(200),
        dec!(300),
        dec!(400),
        dec!(500),
        dec!(750),
    ]
}

fn standard_right() -> Vec<Decimal> {
    vec![
        dec!(1000),
        dec!(5000),
        dec!(10000),
        dec!(25000),
        dec!(50000),
        dec!(75000),
        dec!(100000),
        dec!(200000),
        dec!(300000),
        dec!(400000),
        dec!(500000),
        dec!(750000),
        dec!(1000000),
    ]
}

/// First `keep` standard high amounts followed by `tops`
fn right_with_tops(keep: usize, tops: &[Decimal]) -> Vec<Decimal> {
    let mut right: Vec<Decimal> = standard_right().into_iter().take(keep).collect();
    right.extend_from_slice(tops);
    right
}

/// The standard US board, $0.01 to $1,000,000
pub fn standard() -> BoardPreset {
    BoardPreset::new(
        "standard",
        "Standard US Board",
        "The Standard US deal or no deal board, with amounts ranging from $0.01-$1,000,000",
        standard_left(),
        standard_right(),
    )
}

/// Standard board with the top `count` cases replaced by $1,000,000
pub fn million_dollar_mission(count: usize) -> Result<BoardPreset, BoardError> {
    if !(1..=MAX_MILLION_CASES).contains(&count) {
        return Err(BoardError::InvalidMillionCases {
            count,
            max: MAX_MILLION_CASES,
        });
    }

    let mut right = standard_right();
    let len = right.len();
    for amount in &mut right[len - count..] {
        *amount = dec!(1000000);
    }

    Ok(BoardPreset::new(
        "million-dollar-mission",
        &format!("Million Dollar Mission ({} cases)", count),
        &format!("Special board with {} cases containing $1,000,000", count),
        standard_left(),
        right,
    ))
}

fn premiere_week(id: &str, season: u8, name: &str, right: Vec<Decimal>) -> BoardPreset {
    BoardPreset::new(
        id,
        &format!("Premiere Week (Season {}) {}", season, name),
        "An increased maximum prize value that retains the $1,000,000 prize",
        standard_left(),
        right,
    )
}

/// Every preset, with a Million Dollar Mission of `million_cases` cases
pub fn catalog_with(million_cases: usize) -> Result<Vec<BoardPreset>, BoardError> {
    Ok(vec![
        standard(),
        million_dollar_mission(million_cases)?,
        premiere_week(
            "premiere-s1-1.5m",
            1,
            "$1,500,000",
            right_with_tops(11, &[dec!(1000000), dec!(1500000)]),
        ),
        premiere_week(
            "premiere-s1-2m",
            1,
            "$2,000,000",
            right_with_tops(11, &[dec!(1000000), dec!(2000000)]),
        ),
        premiere_week(
            "premiere-s1-2.5m",
            1,
            "$2,500,000",
            right_with_tops(11, &[dec!(1000000), dec!(2500000)]),
        ),
        premiere_week(
            "premiere-s1-3m",
            1,
            "$3,000,000",
            right_with_tops(11, &[dec!(1000000), dec!(3000000)]),
        ),
        premiere_week(
            "premiere-s2-2m",
            2,
            "$2,000,000",
            right_with_tops(11, &[dec!(1000000), dec!(2000000)]),
        ),
        premiere_week(
            "premiere-s2-3m",
            2,
            "$3,000,000",
            right_with_tops(11, &[dec!(1000000), dec!(3000000)]),
        ),
        premiere_week(
            "premiere-s2-4m",
            2,
            "$4,000,000",
            right_with_tops(10, &[dec!(100000), dec!(2000000), dec!(4000000)]),
        ),
        premiere_week(
            "premiere-s2-5m",
            2,
            "$5,000,000",
            right_with_tops(10, &[dec!(100000), dec!(2500000), dec!(5000000)]),
        ),
        premiere_week(
            "premiere-s2-6m",
            2,
            "$6,000,000",
            right_with_tops(10, &[dec!(100000), dec!(3000000), dec!(6000000)]),
        ),
        BoardPreset::new(
            "season1-finale",
            "Season 1 Finale",
            "Contains a $5,000,000 and $2,500,000 prize in addition to the $1,000,000 prize",
            standard_left(),
            right_with_tops(10, &[dec!(1000000), dec!(2500000), dec!(5000000)]),
        ),
        BoardPreset::new(
            "double-deal",
            "Double Deal",
            "Doubles all the values from the standard board",
            standard_left().into_iter().map(|x| x * dec!(2)).collect(),
            standard_right().into_iter().map(|x| x * dec!(2)).collect(),
        ),
        BoardPreset::new(
            "2m-month",
            "$2,000,000 Month",
            "A board used during the month of November 2008 where $2,000,000 becomes the top prize",
            standard_left(),
            right_with_tops(11, &[dec!(1000000), dec!(2000000)]),
        ),
        BoardPreset::new(
            "syndicated",
            "Syndicated Version",
            "Used for the syndicated version of the show, this board only had 22 cases and a max prize of $500,000",
            vec![
                dec!(0.01),
                dec!(1),
                dec!(5),
                dec!(10),
                dec!(25),
                dec!(50),
                dec!(100),
                dec!(200),
                dec!(300),
                dec!(400),
                dec!(500),
            ],
            vec![
                dec!(1000),
                dec!(2500),
                dec!(5000),
                dec!(7500),
                dec!(10000),
                dec!(25000),
                dec!(50000),
                dec!(75000),
                dec!(100000),
                dec!(250000),
                dec!(500000),
            ],
        ),
    ])
}

/// Every preset, with the default four-case Million Dollar Mission
pub fn catalog() -> Vec<BoardPreset> {
    // 4 is always within 1..=MAX_MILLION_CASES
    catalog_with(4).unwrap_or_else(|_| vec![standard()])
}

/// Look up a preset by id
pub fn find(id: &str, million_cases: usize) -> Result<BoardPreset, BoardError> {
    if id == "million-dollar-mission" {
        return million_dollar_mission(million_cases);
    }
    catalog()
        .into_iter()
        .find(|preset| preset.id == id)
        .ok_or_else(|| BoardError::UnknownPreset(id.to_string()))
}
