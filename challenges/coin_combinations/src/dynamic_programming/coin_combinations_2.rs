// https://cses.fi/problemset/task/1636
//
// One row per coin, one column per partial sum. Each row is swept left to right
// with a running `sum`, and the row above stands in for "without this coin":
//
//   tally[i][j] = tally[i][j - c] + tally[i - 1][j - c]   when j >= c
//   tally[i][j] = sum carried from j - 1                   when j <  c
//
// There is no row above row 0, so that term is 0 there. tally[0][0] is seeded
// with 1 before the sweep, but the sweep also writes column 0 of row 0. The seed
// only survives when the first coin is 0.
//
//   coins = {0, 1, 2}, x = 5:
//
//              j: 0  1  2  3  4  5
//   row 0 (c=0):  1  0  0  0  0  0   reads its own unswept cell, seed kept
//   row 1 (c=1):  0  1  1  1  1  1
//   row 2 (c=2):  0  0  0  1  1  2   ✓ answer tally[2][5] = 2
//
//   coins = {1, 2}, x = 3:
//
//   row 0 (c=1):  0  0  0  0         column 0 written with the carried 0
//   row 1 (c=2):  0  0  0  0         ✓ answer 0

use log::{debug, trace, warn};

use crate::{InputError, MOD, Scanner, Writer};

/// Upper bound on `n * (x + 1)` tally cells, the CSES limits of n <= 100 and x <= 10^6.
pub const MAX_TABLE_CELLS: usize = 100 * (1_000_000 + 1);

pub fn solve(input: &mut Scanner, out: &mut Writer) -> Result<(), InputError> {
    let t: usize = input.parse()?;

    for case in 1..=t {
        let n: usize = input.parse()?;
        let x: usize = input.parse()?;
        if n == 0 {
            return Err(InputError::NoDenominations { case });
        }
        let cells = x.checked_add(1).and_then(|width| width.checked_mul(n));
        if !cells.is_some_and(|cells| cells <= MAX_TABLE_CELLS) {
            return Err(InputError::TargetTooLarge {
                case,
                n,
                x,
                limit: MAX_TABLE_CELLS,
            });
        }
        let coins: Vec<usize> = input.parse_n(n)?;

        debug!("case {}: n={} x={}", case, n, x);
        if has_late_zero(&coins) {
            warn!("case {}: zero denomination after the first coin", case);
        }

        out.println(count_ways(x, &coins));
    }

    Ok(())
}

// A zero coin past row 0 copies the row above instead of adding to it. A zero
// first coin is the only way to keep tally[0][0], so it is not worth a warning.
fn has_late_zero(coins: &[usize]) -> bool {
    coins.iter().skip(1).any(|&coin| coin == 0)
}

/// Count the ways to reach `x` with `coins`, modulo [`MOD`].
///
/// Returns 0 for an empty coin list. The tally holds `coins.len() * (x + 1)`
/// cells; `solve` keeps that within [`MAX_TABLE_CELLS`].
pub fn count_ways(x: usize, coins: &[usize]) -> u32 {
    let mut tally = vec![vec![0u32; x + 1]; coins.len()];
    let Some(first) = tally.first_mut() else {
        return 0;
    };
    first[0] = 1;

    for (i, &coin) in coins.iter().enumerate() {
        let (above, rest) = tally.split_at_mut(i);
        let row = &mut rest[0];
        let prev = above.last();

        let mut sum = 0u32;
        for j in 0..=x {
            if let Some(remainder) = j.checked_sub(coin) {
                let without = prev.map_or(0, |p| p[remainder]);
                // both terms are below MOD, so the addition stays inside u32
                sum = (row[remainder] + without) % MOD;
            }
            row[j] = sum;
        }

        trace!("row {} (coin {}): {:?}", i, coin, row);
    }

    tally.last().map_or(0, |row| row[x])
}
