//! Results page view-model.
//!
//! Holds the fetched receipts and the display options. Everything shown in
//! the table is projected from the records on demand; the records
//! themselves are never modified.

use std::collections::HashSet;

use crate::types::{AppResult, ReceiptRecord, RecordItem};

/// How monetary amounts are displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurrencyMode {
    /// Amounts in the receipt's own currency.
    #[default]
    Original,
    /// Amounts converted to Canadian dollars.
    Cad,
}

impl CurrencyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyMode::Original => "original",
            CurrencyMode::Cad => "cad",
        }
    }

    /// Parse the value of the currency `<select>`. Unknown values fall back
    /// to [`CurrencyMode::Original`].
    pub fn from_value(value: &str) -> Self {
        match value {
            "cad" => CurrencyMode::Cad,
            _ => CurrencyMode::Original,
        }
    }
}

/// Ids of the rows currently expanded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedRows(HashSet<i64>);

impl ExpandedRows {
    pub fn toggle(&mut self, id: i64) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Records whose `person_id` equals `filter`. A blank filter keeps them all.
pub fn filter_by_person<'a>(records: &'a [ReceiptRecord], filter: &str) -> Vec<&'a ReceiptRecord> {
    let filter = filter.trim();
    records
        .iter()
        .filter(|record| filter.is_empty() || record.person_id == filter)
        .collect()
}

/// Factor turning an original-currency amount into CAD for this record.
///
/// Derived from the record totals; 1 when the original total is zero or
/// missing, or when no CAD total is known.
pub fn cad_ratio(record: &ReceiptRecord) -> f64 {
    match (record.total, record.total_cad) {
        (Some(total), Some(total_cad)) if total != 0.0 => total_cad / total,
        _ => 1.0,
    }
}

/// Receipt total as displayed in `mode`.
pub fn display_total(record: &ReceiptRecord, mode: CurrencyMode) -> String {
    let total = record.total.unwrap_or(0.0);
    match mode {
        CurrencyMode::Original => original_amount(record, total),
        CurrencyMode::Cad => cad_amount(record.total_cad.unwrap_or(total)),
    }
}

/// Item price as displayed in `mode`.
pub fn display_item_price(record: &ReceiptRecord, item: &RecordItem, mode: CurrencyMode) -> String {
    let price = item.price.unwrap_or(0.0);
    match mode {
        CurrencyMode::Original => original_amount(record, price),
        CurrencyMode::Cad => cad_amount(price * cad_ratio(record)),
    }
}

fn original_amount(record: &ReceiptRecord, amount: f64) -> String {
    match record.currency.as_deref().map(str::trim) {
        Some(currency) if !currency.is_empty() => format!("{} {:.2}", currency, amount),
        _ => format!("{:.2}", amount),
    }
}

fn cad_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// One item line of an expanded row.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub name: String,
    pub quantity: Option<f64>,
    pub price: String,
}

/// One table row, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptRow {
    pub id: i64,
    pub person_id: String,
    pub person: String,
    pub merchant: String,
    pub date: String,
    pub category: String,
    pub total: String,
    pub expanded: bool,
    pub items: Vec<ItemRow>,
}

/// State of one results page instance.
#[derive(Clone, Debug, Default)]
pub struct ReceiptsView {
    records: Vec<ReceiptRecord>,
    loading: bool,
    person_filter: String,
    currency: CurrencyMode,
    expanded: ExpandedRows,
}

impl ReceiptsView {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[ReceiptRecord] {
        &self.records
    }

    pub fn person_filter(&self) -> &str {
        &self.person_filter
    }

    pub fn currency(&self) -> CurrencyMode {
        self.currency
    }

    pub fn expanded(&self) -> &ExpandedRows {
        &self.expanded
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Store the listing outcome. A failure leaves the list empty.
    pub fn finish_loading(&mut self, outcome: AppResult<Vec<ReceiptRecord>>) {
        self.loading = false;
        match outcome {
            Ok(records) => {
                log::info!("Loaded {} receipts", records.len());
                self.records = records;
            }
            Err(e) => {
                log::error!("Failed to load receipts: {}", e);
                self.records.clear();
            }
        }
    }

    pub fn set_person_filter(&mut self, filter: impl Into<String>) {
        self.person_filter = filter.into();
    }

    pub fn set_currency(&mut self, mode: CurrencyMode) {
        self.currency = mode;
    }

    pub fn toggle_row(&mut self, id: i64) {
        self.expanded.toggle(id);
    }

    /// Visible rows for the current filter and currency mode.
    pub fn rows(&self) -> Vec<ReceiptRow> {
        filter_by_person(&self.records, &self.person_filter)
            .into_iter()
            .map(|record| ReceiptRow {
                id: record.id,
                person_id: record.person_id.clone(),
                person: record.person_name(),
                merchant: record.merchant.clone(),
                date: record.receipt_date.clone().unwrap_or_default(),
                category: record.category.clone().unwrap_or_default(),
                total: display_total(record, self.currency),
                expanded: self.expanded.contains(record.id),
                items: record
                    .items
                    .iter()
                    .map(|item| ItemRow {
                        name: item.name.clone(),
                        quantity: item.quantity,
                        price: display_item_price(record, item, self.currency),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Text under the table: count of visible receipts or the empty state.
    pub fn summary(&self) -> String {
        if self.loading {
            return "Loading receipts…".to_string();
        }
        match filter_by_person(&self.records, &self.person_filter).len() {
            0 if self.records.is_empty() => "No receipts yet.".to_string(),
            0 => "No receipts match this person id.".to_string(),
            1 => "1 receipt".to_string(),
            n => format!("{} receipts", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;

    fn record(id: i64, person_id: &str) -> ReceiptRecord {
        ReceiptRecord {
            id,
            person_id: person_id.to_string(),
            first_name: "Rowan".into(),
            last_name: "Lee".into(),
            merchant: format!("Shop {}", id),
            receipt_date: Some("2026-01-17".into()),
            created_at: None,
            category: Some("restaurant".into()),
            total: Some(20.0),
            total_cad: Some(27.0),
            currency: Some("USD".into()),
            items: vec![RecordItem {
                name: "Latte".into(),
                quantity: Some(1.0),
                price: Some(10.0),
            }],
        }
    }

    #[test]
    fn test_cad_projection() {
        let r = record(1, "6");

        assert_eq!(display_total(&r, CurrencyMode::Cad), "$27.00");
        assert_eq!(display_item_price(&r, &r.items[0], CurrencyMode::Cad), "$13.50");
        assert!((cad_ratio(&r) - 1.35).abs() < 1e-9);
    }

    #[test]
    fn test_original_projection() {
        let r = record(1, "6");

        assert_eq!(display_total(&r, CurrencyMode::Original), "USD 20.00");
        assert_eq!(display_item_price(&r, &r.items[0], CurrencyMode::Original), "USD 10.00");
    }

    #[test]
    fn test_ratio_defaults_to_one() {
        let mut r = record(1, "6");
        r.total = Some(0.0);
        assert_eq!(cad_ratio(&r), 1.0);
        assert_eq!(display_item_price(&r, &r.items[0], CurrencyMode::Cad), "$10.00");

        r.total = None;
        assert_eq!(cad_ratio(&r), 1.0);

        let mut r = record(2, "6");
        r.total_cad = None;
        assert_eq!(cad_ratio(&r), 1.0);
        assert_eq!(display_total(&r, CurrencyMode::Cad), "$20.00");
    }

    #[test]
    fn test_missing_currency_shows_bare_amount() {
        let mut r = record(1, "6");
        r.currency = None;
        assert_eq!(display_total(&r, CurrencyMode::Original), "20.00");
    }

    #[test]
    fn test_filter_by_person_id() {
        let records = vec![record(1, "6"), record(2, "7"), record(3, "6"), record(4, "66")];

        let ids: Vec<i64> = filter_by_person(&records, "6").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let ids: Vec<i64> = filter_by_person(&records, "").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        assert!(filter_by_person(&records, "8").is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut rows = ExpandedRows::default();
        rows.toggle(5);
        let before = rows.clone();

        rows.toggle(9);
        assert!(rows.contains(9));
        rows.toggle(9);

        assert_eq!(rows, before);
        assert!(rows.contains(5));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_expansion_survives_filter_and_currency_changes() {
        let mut view = ReceiptsView::default();
        view.finish_loading(Ok(vec![record(1, "6"), record(2, "7")]));
        view.toggle_row(2);

        view.set_person_filter("6");
        view.set_currency(CurrencyMode::Cad);
        let rows = view.rows();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].expanded);
        assert_eq!(rows[0].total, "$27.00");

        view.set_person_filter("");
        let rows = view.rows();
        assert!(rows[1].expanded);
        assert_eq!(rows[1].items[0].price, "$13.50");
        assert_eq!(rows[1].person, "Rowan Lee");
    }

    #[test]
    fn test_failed_load_leaves_empty_list() {
        let mut view = ReceiptsView::default();
        view.begin_loading();
        assert!(view.is_loading());
        assert_eq!(view.summary(), "Loading receipts…");

        view.finish_loading(Err(AppError::Network("refused".into())));

        assert!(!view.is_loading());
        assert!(view.records().is_empty());
        assert_eq!(view.summary(), "No receipts yet.");
    }

    #[test]
    fn test_summary_counts_visible_rows() {
        let mut view = ReceiptsView::default();
        view.finish_loading(Ok(vec![record(1, "6"), record(2, "7")]));
        assert_eq!(view.summary(), "2 receipts");

        view.set_person_filter("7");
        assert_eq!(view.summary(), "1 receipt");

        view.set_person_filter("9");
        assert_eq!(view.summary(), "No receipts match this person id.");
    }

    #[test]
    fn test_currency_mode_values() {
        assert_eq!(CurrencyMode::from_value("cad"), CurrencyMode::Cad);
        assert_eq!(CurrencyMode::from_value("original"), CurrencyMode::Original);
        assert_eq!(CurrencyMode::from_value("???"), CurrencyMode::Original);
        assert_eq!(CurrencyMode::Cad.as_str(), "cad");
    }
}
