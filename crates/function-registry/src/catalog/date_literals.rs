// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Relative date-range literals
//!
//! Parametric literals are spelled with a `:n` suffix standing for the
//! editable count, e.g. `LAST_N_DAYS:n`.

pub const DATE_RANGE_LITERALS: &[&str] = &[
    "YESTERDAY",
    "TODAY",
    "TOMORROW",
    "LAST_WEEK",
    "THIS_WEEK",
    "NEXT_WEEK",
    "LAST_MONTH",
    "THIS_MONTH",
    "NEXT_MONTH",
    "LAST_90_DAYS",
    "NEXT_90_DAYS",
    "THIS_QUARTER",
    "LAST_QUARTER",
    "NEXT_QUARTER",
    "THIS_YEAR",
    "LAST_YEAR",
    "NEXT_YEAR",
    "THIS_FISCAL_QUARTER",
    "LAST_FISCAL_QUARTER",
    "NEXT_FISCAL_QUARTER",
    "THIS_FISCAL_YEAR",
    "LAST_FISCAL_YEAR",
    "NEXT_FISCAL_YEAR",
];

pub const PARAMETRIC_DATE_RANGE_LITERALS: &[&str] = &[
    "LAST_N_DAYS:n",
    "NEXT_N_DAYS:n",
    "N_DAYS_AGO:n",
    "NEXT_N_WEEKS:n",
    "LAST_N_WEEKS:n",
    "N_WEEKS_AGO:n",
    "NEXT_N_MONTHS:n",
    "LAST_N_MONTHS:n",
    "N_MONTHS_AGO:n",
    "NEXT_N_QUARTERS:n",
    "LAST_N_QUARTERS:n",
    "N_QUARTERS_AGO:n",
    "NEXT_N_YEARS:n",
    "LAST_N_YEARS:n",
    "N_YEARS_AGO:n",
    "NEXT_N_FISCAL_QUARTERS:n",
    "LAST_N_FISCAL_QUARTERS:n",
    "N_FISCAL_QUARTERS_AGO:n",
    "NEXT_N_FISCAL_YEARS:n",
    "LAST_N_FISCAL_YEARS:n",
    "N_FISCAL_YEARS_AGO:n",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parametric_literals_end_with_count() {
        assert!(PARAMETRIC_DATE_RANGE_LITERALS.iter().all(|l| l.ends_with(":n")));
        assert!(DATE_RANGE_LITERALS.iter().all(|l| !l.contains(':')));
    }
}
