//! Reveal enumeration
//!
//! Walks every k-element combination of case positions in lexicographic
//! order. Cases are combined by position, so boards holding several equal
//! amounts still produce C(n, k) scenarios.

use super::offer::validate;
use super::StatsError;

/// One possible outcome of opening k cases
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal<'a> {
    amounts: &'a [f64],
    /// Opened positions, strictly increasing
    opened: Vec<usize>,
}

impl<'a> Reveal<'a> {
    /// Positions opened in this scenario
    pub fn positions(&self) -> &[usize] {
        &self.opened
    }

    /// Amounts opened in this scenario
    pub fn opened(&self) -> impl Iterator<Item = f64> + '_ {
        self.opened.iter().map(move |&i| self.amounts[i])
    }

    /// Amounts left unopened after this scenario, in board order
    pub fn remaining(&self) -> impl Iterator<Item = f64> + '_ {
        let mut next_opened = self.opened.iter().peekable();
        self.amounts
            .iter()
            .enumerate()
            .filter_map(move |(i, &amount)| {
                if next_opened.peek() == Some(&&i) {
                    next_opened.next();
                    None
                } else {
                    Some(amount)
                }
            })
    }

    /// Fair offer after this scenario
    pub fn remaining_mean(&self) -> f64 {
        let count = self.amounts.len() - self.opened.len();
        self.remaining().sum::<f64>() / count as f64
    }
}

/// Lazy iterator over every reveal of k cases
#[derive(Debug, Clone)]
pub struct Reveals<'a> {
    amounts: &'a [f64],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Reveals<'a> {
    fn new(amounts: &'a [f64], k: usize) -> Self {
        Self {
            amounts,
            indices: (0..k).collect(),
            done: false,
        }
    }

    /// Step `indices` to the next combination in lexicographic order
    fn advance(&mut self) {
        let n = self.amounts.len();
        let k = self.indices.len();

        // Rightmost position that can still move right
        let pivot = (0..k).rev().find(|&i| self.indices[i] < n - k + i);
        match pivot {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
    }
}

impl<'a> Iterator for Reveals<'a> {
    type Item = Reveal<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let reveal = Reveal {
            amounts: self.amounts,
            opened: self.indices.clone(),
        };
        self.advance();
        Some(reveal)
    }
}

/// Enumerate every way of opening `k` of the `remaining` cases
pub fn enumerate_reveals(remaining: &[f64], k: usize) -> Result<Reveals<'_>, StatsError> {
    validate(remaining, k)?;
    Ok(Reveals::new(remaining, k))
}

/// Binomial coefficient C(n, k), `None` on overflow
pub fn combination_count(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut count: u64 = 1;
    for i in 0..k {
        // count * (n - i) is always divisible by (i + 1) at this step
        count = count.checked_mul(n - i)? / (i + 1);
    }
    Some(count)
}
