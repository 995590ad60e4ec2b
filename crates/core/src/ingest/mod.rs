//! Lenient adapter from host JSON to canonical records.
//!
//! Host stores and spreadsheet exports arrive with mixed naming
//! conventions and the occasional broken row. This boundary maps them
//! into the single canonical record shape; a record that is null, not an
//! object, or missing a required field is skipped and reported, never
//! fatal, so one bad row cannot blank an entire report.

mod fields;
mod records;

use serde_json::Value;
use thiserror::Error;

use fluxo_shared::types::Snapshot;

/// Why a record was skipped during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The record is null or not a JSON object.
    #[error("record is not an object")]
    NotAnObject,

    /// A required field is missing or unreadable.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The payment method name is not one of the known kinds.
    #[error("unrecognized payment method: {0}")]
    UnknownPaymentMethod(String),

    /// The status value is not one of the known states.
    #[error("unrecognized status: {0}")]
    UnknownStatus(String),
}

/// A record dropped during ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Entity array the record came from.
    pub entity: &'static str,
    /// Index within that array.
    pub index: usize,
    /// Why it was dropped.
    pub reason: SkipReason,
}

/// Result of ingesting a host JSON snapshot.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// The canonical snapshot built from the parseable records.
    pub snapshot: Snapshot,
    /// Records that were dropped, with reasons.
    pub skipped: Vec<SkippedRecord>,
}

impl IngestReport {
    /// Returns true when every record was ingested.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parses a host JSON document into a canonical [`Snapshot`].
///
/// The document is an object with per-entity arrays (`sales`, `debts`,
/// `checks`, `boletos`, `employee_payments`, `pix_fees`,
/// `cash_transactions`) and an optional `cash_balance` object; snake_case
/// and camelCase key variants are both accepted. Missing arrays ingest as
/// empty.
#[must_use]
pub fn parse_snapshot(root: &Value) -> IngestReport {
    let mut report = IngestReport::default();

    let Some(obj) = root.as_object() else {
        tracing::warn!("snapshot root is not an object; ingesting nothing");
        report.skipped.push(SkippedRecord {
            entity: "snapshot",
            index: 0,
            reason: SkipReason::NotAnObject,
        });
        return report;
    };

    report.snapshot.sales = ingest_array(obj, &["sales"], "sale", records::parse_sale, &mut report.skipped);
    report.snapshot.debts =
        ingest_array(obj, &["debts"], "debt", records::parse_debt, &mut report.skipped);
    report.snapshot.checks =
        ingest_array(obj, &["checks"], "check", records::parse_check, &mut report.skipped);
    report.snapshot.boletos =
        ingest_array(obj, &["boletos"], "boleto", records::parse_boleto, &mut report.skipped);
    report.snapshot.employee_payments = ingest_array(
        obj,
        &["employee_payments", "employeePayments"],
        "employee_payment",
        records::parse_employee_payment,
        &mut report.skipped,
    );
    report.snapshot.pix_fees = ingest_array(
        obj,
        &["pix_fees", "pixFees"],
        "pix_fee",
        records::parse_pix_fee,
        &mut report.skipped,
    );
    report.snapshot.cash_transactions = ingest_array(
        obj,
        &["cash_transactions", "cashTransactions"],
        "cash_transaction",
        records::parse_cash_transaction,
        &mut report.skipped,
    );

    if let Some(raw_balance) = fields::field(obj, &["cash_balance", "cashBalance"]) {
        match records::parse_cash_balance(raw_balance) {
            Ok(balance) => report.snapshot.cash_balance = Some(balance),
            Err(reason) => {
                tracing::warn!(%reason, "skipping malformed cash balance");
                report.skipped.push(SkippedRecord {
                    entity: "cash_balance",
                    index: 0,
                    reason,
                });
            }
        }
    }

    report
}

fn ingest_array<T>(
    obj: &serde_json::Map<String, Value>,
    names: &[&str],
    entity: &'static str,
    parse: impl Fn(&Value) -> Result<T, SkipReason>,
    skipped: &mut Vec<SkippedRecord>,
) -> Vec<T> {
    let Some(rows) = fields::field(obj, names).and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut parsed = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match parse(row) {
            Ok(record) => parsed.push(record),
            Err(reason) => {
                tracing::warn!(entity, index, %reason, "skipping malformed record");
                skipped.push(SkippedRecord {
                    entity,
                    index,
                    reason,
                });
            }
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use fluxo_shared::types::{CheckStatus, PaymentKind, SaleStatus};

    use crate::date::DateRange;
    use crate::event::{EventClassifier, EventKind};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn valid_sale() -> Value {
        json!({
            "id": "018f0d70-0000-7000-8000-000000000001",
            "client": "Acme Ltda",
            "date": "2024-03-08",
            "totalValue": 150.0,
            "paymentMethods": [
                {"type": "dinheiro", "amount": 100.0},
                {"type": "pix", "amount": 50.0}
            ],
            "receivedAmount": 150.0,
            "pendingAmount": 0.0,
            "status": "pago"
        })
    }

    #[test]
    fn test_malformed_rows_skip_without_blanking_batch() {
        let root = json!({
            "sales": [null, 42, {}, valid_sale()]
        });

        let report = parse_snapshot(&root);

        assert_eq!(report.snapshot.sales.len(), 1);
        assert_eq!(report.skipped.len(), 3);
        assert_eq!(report.skipped[0].reason, SkipReason::NotAnObject);
        assert_eq!(report.skipped[1].reason, SkipReason::NotAnObject);
        assert_eq!(
            report.skipped[2].reason,
            SkipReason::MissingField("client")
        );
    }

    #[test]
    fn test_malformed_rows_contribute_no_events() {
        let root = json!({
            "sales": [null, {}, valid_sale()]
        });

        let report = parse_snapshot(&root);
        let events = EventClassifier::default().classify(
            &report.snapshot,
            &DateRange::new(ymd(2024, 3, 1), ymd(2024, 3, 31)),
        );

        // Exactly the valid sale's events: one recorded entry plus two
        // immediate receipts.
        let received: Vec<_> = events
            .iter()
            .filter(|e| e.kind == EventKind::Received)
            .collect();
        assert_eq!(received.len(), 2);
        assert_eq!(
            received.iter().map(|e| e.amount).sum::<rust_decimal::Decimal>(),
            dec!(150)
        );
    }

    #[test]
    fn test_sale_without_payment_methods_is_skipped() {
        let root = json!({
            "sales": [{
                "client": "Acme",
                "date": "2024-03-08",
                "value": 100.0
            }]
        });

        let report = parse_snapshot(&root);
        assert!(report.snapshot.sales.is_empty());
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::MissingField("payment_methods")
        );
    }

    #[test]
    fn test_portuguese_field_variants() {
        let root = json!({
            "sales": [{
                "CLIENTE": "Dona Rosa",
                "data_da_venda": "10/03/2024",
                "valor_total": "R$ 1.234,56",
                "paymentMethods": [{"type": "Cartão Crédito", "amount": "1.234,56"}],
                "status": "PENDENTE"
            }]
        });

        let report = parse_snapshot(&root);

        assert!(report.is_clean());
        let sale = &report.snapshot.sales[0];
        assert_eq!(sale.client, "Dona Rosa");
        assert_eq!(sale.date, ymd(2024, 3, 10));
        assert_eq!(sale.total_value, dec!(1234.56));
        assert_eq!(sale.status, SaleStatus::Pending);
        assert_eq!(sale.payment_methods[0].kind(), PaymentKind::CreditCard);
    }

    #[test]
    fn test_check_with_anticipation_fields() {
        let root = json!({
            "checks": [{
                "client": "Acme",
                "value": 1000.0,
                "dueDate": "2024-03-20",
                "status": "pendente",
                "isDiscounted": true,
                "discountFee": 50.0,
                "discountDate": "2024-03-05"
            }]
        });

        let report = parse_snapshot(&root);
        let check = &report.snapshot.checks[0];

        assert_eq!(check.status, CheckStatus::Pending);
        let anticipation = check.anticipation.unwrap();
        assert_eq!(anticipation.fee, dec!(50));
        assert_eq!(anticipation.net_amount, dec!(950));
    }

    #[test]
    fn test_boleto_linked_to_debt_is_company_payable() {
        let root = json!({
            "boletos": [{
                "client": "Fornecedora Sul",
                "value": 300.0,
                "due_date": "2024-04-01",
                "status": "pendente",
                "debtId": "018f0d70-0000-7000-8000-000000000002"
            }]
        });

        let report = parse_snapshot(&root);
        assert!(report.snapshot.boletos[0].company_payable);
    }

    #[test]
    fn test_unknown_payment_method_drops_method_not_sale() {
        let root = json!({
            "sales": [{
                "client": "Acme",
                "date": "2024-03-08",
                "totalValue": 100.0,
                "paymentMethods": [
                    {"type": "criptomoeda", "amount": 60.0},
                    {"type": "pix", "amount": 40.0}
                ]
            }]
        });

        let report = parse_snapshot(&root);
        let sale = &report.snapshot.sales[0];
        assert_eq!(sale.payment_methods.len(), 1);
        assert_eq!(sale.payment_methods[0].kind(), PaymentKind::Pix);
    }

    #[test]
    fn test_cash_balance_and_transactions() {
        let root = json!({
            "cashTransactions": [{
                "date": "2024-02-01",
                "tipo": "entrada",
                "amount": 500.0,
                "categoria": "venda"
            }],
            "cashBalance": {
                "currentBalance": 2500.5,
                "initialBalance": 1000.0,
                "initialDate": "2024-01-01"
            }
        });

        let report = parse_snapshot(&root);

        assert_eq!(report.snapshot.cash_transactions.len(), 1);
        let balance = report.snapshot.cash_balance.unwrap();
        assert_eq!(balance.current_balance, dec!(2500.5));
        assert_eq!(balance.initial_date, ymd(2024, 1, 1));
    }

    #[test]
    fn test_non_object_root_ingests_nothing() {
        let report = parse_snapshot(&json!([1, 2, 3]));
        assert!(report.snapshot.sales.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].entity, "snapshot");
    }
}
