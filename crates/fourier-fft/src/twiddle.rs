// SPDX-License-Identifier: LGPL-3.0-or-later

//! Process-wide cache of trigonometric "twiddle" tables.
//!
//! Every transform of size `N` consumes the same table of
//! `cos(2*pi*k/N)` / `sin(2*pi*k/N)` values for `k < N/2`. Tables are
//! built on first use, shared behind an [`Arc`], and never evicted.
//! Entries are immutable once inserted, so concurrent transforms on
//! different threads may share them freely; only a first-use insert takes
//! the write lock.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, RwLock};

/// A twiddle table for one transform size.
pub(crate) struct TwiddleTable {
    pub(crate) cos: Vec<f64>,
    pub(crate) sin: Vec<f64>,
}

impl TwiddleTable {
    fn new(size: usize) -> Self {
        let half = size / 2;
        let mut cos = Vec::with_capacity(half);
        let mut sin = Vec::with_capacity(half);
        for k in 0..half {
            let phase = 2.0 * PI * k as f64 / size as f64;
            cos.push(phase.cos());
            sin.push(phase.sin());
        }
        Self { cos, sin }
    }
}

static TABLES: Lazy<RwLock<HashMap<usize, Arc<TwiddleTable>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Look up the twiddle table for a transform size, building it on a miss.
pub(crate) fn twiddle_table(size: usize) -> Arc<TwiddleTable> {
    if let Some(table) = TABLES.read().expect("twiddle cache poisoned").get(&size) {
        return Arc::clone(table);
    }

    let mut tables = TABLES.write().expect("twiddle cache poisoned");
    let table = tables
        .entry(size)
        .or_insert_with(|| Arc::new(TwiddleTable::new(size)));
    Arc::clone(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_table_values() {
        let table = twiddle_table(8);
        assert_eq!(table.cos.len(), 4);
        assert_eq!(table.sin.len(), 4);

        assert_approx_eq!(f64, table.cos[0], 1.0, ulps = 2);
        assert_approx_eq!(f64, table.sin[0], 0.0, ulps = 2);
        assert_approx_eq!(f64, table.cos[1], FRAC_1_SQRT_2, ulps = 2);
        assert_approx_eq!(f64, table.sin[1], FRAC_1_SQRT_2, ulps = 2);
        assert_approx_eq!(f64, table.cos[2], 0.0, epsilon = 1e-15);
        assert_approx_eq!(f64, table.sin[2], 1.0, ulps = 2);
    }

    #[test]
    fn test_tables_are_shared() {
        let first = twiddle_table(64);
        let second = twiddle_table(64);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
