use crate::ledger::{ResultLedger, RoundResult};
use crate::util::{mean, round2};
use crate::vocabulary::Word;
use itertools::Itertools;

/// One row of the recent-results table. Rank 1 is the most recent win.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub rank: usize,
    pub word: Word,
    pub seconds: f64,
}

/// One word's share of the ledger, as a percentage of all recorded wins.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSlice {
    pub word: Word,
    pub percentage: f64,
}

/// Rank/word/time rows in ledger order. A ledger with fewer than five
/// wins yields fewer rows; there are no placeholder rows.
pub fn table_view(ledger: &ResultLedger) -> Vec<TableRow> {
    ledger
        .entries()
        .iter()
        .enumerate()
        .map(|(index, result)| TableRow {
            rank: index + 1,
            word: result.word().clone(),
            seconds: result.seconds(),
        })
        .collect()
}

/// Per-word percentage of the ledger, duplicates merged, ordered by each
/// word's first appearance. Percentages are rounded to two decimals and
/// sum to 100 within rounding when the ledger is non-empty. An empty
/// ledger yields no slices.
pub fn breakdown_view(ledger: &ResultLedger) -> Vec<BreakdownSlice> {
    let total = ledger.len();
    if total == 0 {
        return Vec::new();
    }

    ledger
        .entries()
        .iter()
        .map(RoundResult::word)
        .unique()
        .map(|word| {
            let count = ledger
                .entries()
                .iter()
                .filter(|result| result.word() == word)
                .count();
            BreakdownSlice {
                word: word.clone(),
                percentage: round2(count as f64 / total as f64 * 100.0),
            }
        })
        .collect()
}

/// Mean solve time across the ledger, if it holds any wins.
pub fn average_seconds(ledger: &ResultLedger) -> Option<f64> {
    let times: Vec<f64> = ledger.entries().iter().map(RoundResult::seconds).collect();
    mean(&times)
}
