//! In-memory month-by-month record keeping.
//!
//! Records are keyed by their natural (month, year) key and live only for
//! the session; a month is materialized on its first edit and mutated in
//! place by partial updates after that.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{MonthlyRecord, MonthlyRecordUpdate};

/// Session-scoped collection of monthly records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: HashMap<(u32, i32), MonthlyRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record for a month, or an unsaved zero-default one. Reading
    /// never materializes a record.
    pub fn get_or_default(
        &self,
        month0: u32,
        year: i32,
    ) -> MonthlyRecord {
        self.records
            .get(&(month0, year))
            .cloned()
            .unwrap_or_else(|| MonthlyRecord::empty(month0, year))
    }

    /// Applies a partial update, materializing the record with a fresh id
    /// on the first edit of that month.
    pub fn update(
        &mut self,
        month0: u32,
        year: i32,
        update: &MonthlyRecordUpdate,
    ) -> &MonthlyRecord {
        let record = self.records.entry((month0, year)).or_insert_with(|| {
            let mut record = MonthlyRecord::empty(month0, year);
            record.id = Uuid::new_v4().to_string();
            record
        });
        record.apply(update);
        record
    }

    /// All materialized records, in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &MonthlyRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn get_or_default_does_not_materialize_a_record() {
        let store = RecordStore::new();

        let record = store.get_or_default(3, 2024);

        assert_eq!(record.gross_revenue, dec!(0));
        assert!(store.is_empty());
    }

    #[test]
    fn update_materializes_the_record_with_a_fresh_id() {
        let mut store = RecordStore::new();

        let record = store.update(
            3,
            2024,
            &MonthlyRecordUpdate {
                gross_revenue: Some(dec!(4800.00)),
                ..MonthlyRecordUpdate::default()
            },
        );

        assert_eq!(record.gross_revenue, dec!(4800.00));
        assert!(!record.id.starts_with("temp-"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_preserves_fields_across_partial_edits() {
        let mut store = RecordStore::new();
        store.update(
            0,
            2024,
            &MonthlyRecordUpdate {
                gross_revenue: Some(dec!(5000.00)),
                ..MonthlyRecordUpdate::default()
            },
        );

        let record = store
            .update(
                0,
                2024,
                &MonthlyRecordUpdate {
                    inss_paid: Some(dec!(155.32)),
                    ..MonthlyRecordUpdate::default()
                },
            )
            .clone();

        assert_eq!(record.gross_revenue, dec!(5000.00));
        assert_eq!(record.inss_paid, dec!(155.32));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_keeps_the_id_stable_across_edits() {
        let mut store = RecordStore::new();
        let first_id = store
            .update(5, 2025, &MonthlyRecordUpdate::default())
            .id
            .clone();

        let second_id = store
            .update(
                5,
                2025,
                &MonthlyRecordUpdate {
                    gross_revenue: Some(dec!(100.00)),
                    ..MonthlyRecordUpdate::default()
                },
            )
            .id
            .clone();

        assert_eq!(first_id, second_id);
    }

    #[test]
    fn months_are_tracked_independently() {
        let mut store = RecordStore::new();
        store.update(0, 2024, &MonthlyRecordUpdate::default());
        store.update(1, 2024, &MonthlyRecordUpdate::default());
        store.update(0, 2025, &MonthlyRecordUpdate::default());

        assert_eq!(store.len(), 3);
        assert_eq!(store.records().count(), 3);
    }
}
