use crate::catalog::PriceCatalog;
use crate::types::balance::{BalanceRecord, DisplayRow};
use crate::types::priority::{DEFAULT_PRIORITY, PriorityTable};

/// Filter and stable-sort a raw balance snapshot.
///
/// Keeps balances with a strictly positive, finite amount on a chain the
/// priority table knows about, ordered by priority descending; ties keep
/// their input order. Re-run this only when balances or priorities change —
/// a price tick goes through [`format`] alone.
pub fn select(balances: &[BalanceRecord], priorities: &PriorityTable) -> Vec<BalanceRecord> {
    // Look priorities up once per record, before filtering and sorting.
    let mut ranked: Vec<(i32, &BalanceRecord)> = balances
        .iter()
        .map(|balance| (priorities.priority(&balance.chain), balance))
        .filter(|(priority, balance)| {
            *priority > DEFAULT_PRIORITY && balance.amount.is_finite() && balance.amount > 0.0
        })
        .collect();

    // Vec::sort_by is stable, so equal priorities keep input order.
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked.into_iter().map(|(_, balance)| balance.clone()).collect()
}

/// Price the selected balances against a catalog snapshot.
///
/// A currency missing from the catalog values at zero; it never produces a
/// NaN row.
pub fn format(
    selected: &[BalanceRecord],
    catalog: &PriceCatalog,
    decimals: usize,
) -> Vec<DisplayRow> {
    selected
        .iter()
        .map(|balance| DisplayRow {
            currency: balance.currency.clone(),
            chain: balance.chain.clone(),
            amount: balance.amount,
            usd_value: catalog.price(&balance.currency).unwrap_or(0.0) * balance.amount,
            formatted_amount: format!("{:.prec$}", balance.amount, prec = decimals),
        })
        .collect()
}

/// The full pass: select, then format.
pub fn render(
    balances: &[BalanceRecord],
    priorities: &PriorityTable,
    catalog: &PriceCatalog,
    decimals: usize,
) -> Vec<DisplayRow> {
    format(&select(balances, priorities), catalog, decimals)
}
