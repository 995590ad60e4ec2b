//! Event classification rules.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fluxo_shared::types::{
    Boleto, BoletoStatus, Check, CheckStatus, Debt, EmployeePayment, PaymentKind, PaymentMethod,
    PixFee, Sale, Snapshot,
};

use super::types::{
    EventCategory, EventKind, EventMetadata, FinancialEvent, InstallmentRef, SourceType,
};
use crate::date::DateRange;
use crate::installment::{ExpansionOptions, expand_method};

/// Classifies snapshot records into financial events.
///
/// Stateless apart from expansion options; every call recomputes from the
/// snapshot it is given.
#[derive(Debug, Clone, Default)]
pub struct EventClassifier {
    options: ExpansionOptions,
}

impl EventClassifier {
    /// Creates a classifier with the given expansion options.
    #[must_use]
    pub const fn new(options: ExpansionOptions) -> Self {
        Self { options }
    }

    /// Classifies every record in the snapshot against an inclusive date
    /// range.
    ///
    /// An empty (inverted) range yields no events. Records with
    /// inconsistent or missing values contribute nothing rather than
    /// aborting the batch.
    #[must_use]
    pub fn classify(&self, snapshot: &Snapshot, range: &DateRange) -> Vec<FinancialEvent> {
        if range.is_empty() {
            return Vec::new();
        }

        let mut events = Vec::new();
        for sale in &snapshot.sales {
            self.classify_sale(sale, range, &mut events);
        }
        for debt in &snapshot.debts {
            self.classify_debt(debt, range, &mut events);
        }
        for check in &snapshot.checks {
            Self::classify_check(check, range, &mut events);
        }
        for boleto in &snapshot.boletos {
            Self::classify_boleto(boleto, range, &mut events);
        }
        for payment in &snapshot.employee_payments {
            Self::classify_employee_payment(payment, range, &mut events);
        }
        for fee in &snapshot.pix_fees {
            Self::classify_pix_fee(fee, range, &mut events);
        }
        events
    }

    /// Classifies every record against a single day.
    #[must_use]
    pub fn classify_day(&self, snapshot: &Snapshot, date: NaiveDate) -> Vec<FinancialEvent> {
        self.classify(snapshot, &DateRange::single(date))
    }

    fn classify_sale(&self, sale: &Sale, range: &DateRange, events: &mut Vec<FinancialEvent>) {
        let source_id = sale.id.into_inner();

        if range.contains(sale.date) {
            events.push(FinancialEvent {
                date: sale.date,
                kind: EventKind::Calendar,
                category: EventCategory::SaleRecorded,
                amount: sale.total_value,
                source_type: SourceType::Sale,
                source_id,
                label: format!("Sale - {}", sale.client),
                metadata: EventMetadata::default(),
            });
        }

        for method in &sale.payment_methods {
            if settles_sale_on_the_spot(method) {
                if range.contains(sale.date) {
                    events.push(FinancialEvent {
                        date: sale.date,
                        kind: EventKind::Received,
                        category: EventCategory::SalePayment,
                        amount: method.amount(),
                        source_type: SourceType::Sale,
                        source_id,
                        label: format!("Sale payment - {}", sale.client),
                        metadata: EventMetadata {
                            payment_kind: Some(method.kind()),
                            ..EventMetadata::default()
                        },
                    });
                }
            } else if method.kind() == PaymentKind::CreditCard {
                self.classify_card_installments(sale, method, range, events);
            }
            // Check/boleto methods surface through their own instrument
            // records; emitting here as well would double count.
        }

        if let Some(delivery) = sale.delivery_date {
            if range.contains(delivery) {
                events.push(FinancialEvent {
                    date: delivery,
                    kind: EventKind::Calendar,
                    category: EventCategory::Delivery,
                    amount: sale.total_value,
                    source_type: SourceType::Sale,
                    source_id,
                    label: format!("Delivery - {}", sale.client),
                    metadata: EventMetadata::default(),
                });
            }
        }

        if sale.pending_amount > Decimal::ZERO && range.contains(sale.date) {
            events.push(FinancialEvent {
                date: sale.date,
                kind: EventKind::Pending,
                category: EventCategory::SaleOutstanding,
                amount: sale.pending_amount,
                source_type: SourceType::Sale,
                source_id,
                label: format!("Outstanding balance - {}", sale.client),
                metadata: EventMetadata::default(),
            });
        }
    }

    fn classify_card_installments(
        &self,
        sale: &Sale,
        method: &PaymentMethod,
        range: &DateRange,
        events: &mut Vec<FinancialEvent>,
    ) {
        let total = method.installment_count();
        for installment in expand_method(method, sale.date, &self.options) {
            // The first installment is assumed already folded into the
            // sale's received amount.
            if installment.sequence == 1 || !range.contains(installment.due_date) {
                continue;
            }
            events.push(FinancialEvent {
                date: installment.due_date,
                kind: EventKind::Pending,
                category: EventCategory::CardInstallment,
                amount: installment.amount,
                source_type: SourceType::Sale,
                source_id: sale.id.into_inner(),
                label: format!(
                    "Card installment {}/{} - {}",
                    installment.sequence, total, sale.client
                ),
                metadata: EventMetadata {
                    payment_kind: Some(PaymentKind::CreditCard),
                    installment: Some(InstallmentRef {
                        number: installment.sequence,
                        total,
                    }),
                    ..EventMetadata::default()
                },
            });
        }
    }

    fn classify_debt(&self, debt: &Debt, range: &DateRange, events: &mut Vec<FinancialEvent>) {
        let source_id = debt.id.into_inner();

        if range.contains(debt.date) {
            events.push(FinancialEvent {
                date: debt.date,
                kind: EventKind::Calendar,
                category: EventCategory::DebtRecorded,
                amount: debt.total_value,
                source_type: SourceType::Debt,
                source_id,
                label: format!("Debt - {}", debt.company),
                metadata: EventMetadata::default(),
            });
        }

        for method in &debt.payment_methods {
            let total = method.installment_count();
            for installment in expand_method(method, debt.date, &self.options) {
                if !range.contains(installment.due_date) {
                    continue;
                }
                events.push(FinancialEvent {
                    date: installment.due_date,
                    kind: EventKind::Calendar,
                    category: EventCategory::DebtInstallment,
                    amount: installment.amount,
                    source_type: SourceType::Debt,
                    source_id,
                    label: format!(
                        "{} - Installment {}/{}",
                        debt.company, installment.sequence, total
                    ),
                    metadata: EventMetadata {
                        payment_kind: Some(method.kind()),
                        installment: Some(InstallmentRef {
                            number: installment.sequence,
                            total,
                        }),
                        ..EventMetadata::default()
                    },
                });
            }

            // Paid recognition covers only the immediate components;
            // check/boleto/card components are recognized through their
            // own records to avoid double counting.
            if debt.is_paid && is_immediate_settlement(method) && range.contains(debt.date) {
                events.push(FinancialEvent {
                    date: debt.date,
                    kind: EventKind::Paid,
                    category: EventCategory::DebtPayment,
                    amount: method.amount(),
                    source_type: SourceType::Debt,
                    source_id,
                    label: format!("Payment - {}", debt.company),
                    metadata: EventMetadata {
                        payment_kind: Some(method.kind()),
                        ..EventMetadata::default()
                    },
                });
            }
        }
    }

    fn classify_check(check: &Check, range: &DateRange, events: &mut Vec<FinancialEvent>) {
        let source_id = check.id.into_inner();
        let installment = check
            .installment_number
            .zip(check.total_installments)
            .map(|(number, total)| InstallmentRef { number, total });
        let series = check
            .installment_label()
            .map_or_else(String::new, |label| format!(" {label}"));

        if check.own_check {
            match check.status {
                CheckStatus::Cleared if range.contains(check.due_date) => {
                    events.push(FinancialEvent {
                        date: check.due_date,
                        kind: EventKind::Paid,
                        category: EventCategory::OwnCheckPaid,
                        amount: check.value,
                        source_type: SourceType::Check,
                        source_id,
                        label: format!("Own check{series} paid - {}", check.client),
                        metadata: EventMetadata {
                            payment_kind: Some(PaymentKind::Check),
                            installment,
                            ..EventMetadata::default()
                        },
                    });
                }
                CheckStatus::Pending if range.contains(check.due_date) => {
                    events.push(FinancialEvent {
                        date: check.due_date,
                        kind: EventKind::Pending,
                        category: EventCategory::CheckPending,
                        amount: check.value,
                        source_type: SourceType::Check,
                        source_id,
                        label: format!("Own check{series} due - {}", check.client),
                        metadata: EventMetadata {
                            payment_kind: Some(PaymentKind::Check),
                            installment,
                            ..EventMetadata::default()
                        },
                    });
                }
                _ => {}
            }
            return;
        }

        if let Some(anticipation) = check.anticipation {
            let date = check.discount_date.unwrap_or(check.due_date);
            if range.contains(date) {
                events.push(FinancialEvent {
                    date,
                    kind: EventKind::Received,
                    category: EventCategory::CheckAnticipated,
                    amount: anticipation.net_amount,
                    source_type: SourceType::Check,
                    source_id,
                    label: format!("Check{series} anticipated - {}", check.client),
                    metadata: EventMetadata {
                        payment_kind: Some(PaymentKind::Check),
                        installment,
                        original_amount: Some(check.value),
                        fee: Some(anticipation.fee),
                        net_amount: Some(anticipation.net_amount),
                    },
                });
            }
            return;
        }

        if check.debt_id.is_some() && check.status != CheckStatus::Cleared {
            if range.contains(check.due_date) {
                events.push(FinancialEvent {
                    date: check.due_date,
                    kind: EventKind::Calendar,
                    category: EventCategory::CheckUsedForDebt,
                    amount: check.value,
                    source_type: SourceType::Check,
                    source_id,
                    label: format!("Check{series} used for debt - {}", check.client),
                    metadata: EventMetadata {
                        payment_kind: Some(PaymentKind::Check),
                        installment,
                        ..EventMetadata::default()
                    },
                });
            }
            return;
        }

        match check.status {
            CheckStatus::Cleared if range.contains(check.due_date) => {
                events.push(FinancialEvent {
                    date: check.due_date,
                    kind: EventKind::Received,
                    category: EventCategory::CheckCleared,
                    amount: check.value,
                    source_type: SourceType::Check,
                    source_id,
                    label: format!("Check{series} cleared - {}", check.client),
                    metadata: EventMetadata {
                        payment_kind: Some(PaymentKind::Check),
                        installment,
                        ..EventMetadata::default()
                    },
                });
            }
            CheckStatus::Pending if range.contains(check.due_date) => {
                events.push(FinancialEvent {
                    date: check.due_date,
                    kind: EventKind::Pending,
                    category: EventCategory::CheckPending,
                    amount: check.value,
                    source_type: SourceType::Check,
                    source_id,
                    label: format!("Check{series} due - {}", check.client),
                    metadata: EventMetadata {
                        payment_kind: Some(PaymentKind::Check),
                        installment,
                        ..EventMetadata::default()
                    },
                });
            }
            // Returned/represented checks have no cash effect until they
            // are resolved into one of the states above.
            _ => {}
        }
    }

    fn classify_boleto(boleto: &Boleto, range: &DateRange, events: &mut Vec<FinancialEvent>) {
        if !range.contains(boleto.due_date) {
            return;
        }

        let source_id = boleto.id.into_inner();
        let series = boleto.installment_label();
        let installment = Some(InstallmentRef {
            number: boleto.installment_number,
            total: boleto.total_installments,
        });

        if boleto.company_payable {
            match boleto.status {
                BoletoStatus::Cleared => {
                    events.push(FinancialEvent {
                        date: boleto.due_date,
                        kind: EventKind::Paid,
                        category: EventCategory::BoletoPaid,
                        amount: boleto.final_amount.unwrap_or(boleto.value),
                        source_type: SourceType::Boleto,
                        source_id,
                        label: format!("Boleto {series} paid - {}", boleto.client),
                        metadata: EventMetadata {
                            payment_kind: Some(PaymentKind::Boleto),
                            installment,
                            original_amount: Some(boleto.value),
                            ..EventMetadata::default()
                        },
                    });
                }
                BoletoStatus::Pending => {
                    events.push(FinancialEvent {
                        date: boleto.due_date,
                        kind: EventKind::Pending,
                        category: EventCategory::BoletoPending,
                        amount: boleto.value,
                        source_type: SourceType::Boleto,
                        source_id,
                        label: format!("Boleto {series} due - {}", boleto.client),
                        metadata: EventMetadata {
                            payment_kind: Some(PaymentKind::Boleto),
                            installment,
                            ..EventMetadata::default()
                        },
                    });
                }
                _ => {}
            }
            return;
        }

        match boleto.status {
            BoletoStatus::Cleared => {
                let net = boleto.net_cash_effect();
                events.push(FinancialEvent {
                    date: boleto.due_date,
                    kind: EventKind::Received,
                    category: EventCategory::BoletoReceived,
                    amount: net,
                    source_type: SourceType::Boleto,
                    source_id,
                    label: format!("Boleto {series} received - {}", boleto.client),
                    metadata: EventMetadata {
                        payment_kind: Some(PaymentKind::Boleto),
                        installment,
                        original_amount: Some(boleto.value),
                        fee: (boleto.notary_costs > Decimal::ZERO).then_some(boleto.notary_costs),
                        net_amount: Some(net),
                    },
                });
            }
            BoletoStatus::Pending => {
                events.push(FinancialEvent {
                    date: boleto.due_date,
                    kind: EventKind::Pending,
                    category: EventCategory::BoletoPending,
                    amount: boleto.value,
                    source_type: SourceType::Boleto,
                    source_id,
                    label: format!("Boleto {series} due - {}", boleto.client),
                    metadata: EventMetadata {
                        payment_kind: Some(PaymentKind::Boleto),
                        installment,
                        ..EventMetadata::default()
                    },
                });
            }
            // Overdue boletos are resolved through the CRUD layer into
            // cleared/cancelled/unpaid; until then they have no cash effect.
            _ => {}
        }
    }

    fn classify_employee_payment(
        payment: &EmployeePayment,
        range: &DateRange,
        events: &mut Vec<FinancialEvent>,
    ) {
        if !range.contains(payment.payment_date) {
            return;
        }
        events.push(FinancialEvent {
            date: payment.payment_date,
            kind: EventKind::Paid,
            category: EventCategory::Salary,
            amount: payment.amount,
            source_type: SourceType::EmployeePayment,
            source_id: payment.id.into_inner(),
            label: format!("Salary - {}", payment.employee_name),
            metadata: EventMetadata::default(),
        });
    }

    fn classify_pix_fee(fee: &PixFee, range: &DateRange, events: &mut Vec<FinancialEvent>) {
        if !range.contains(fee.date) {
            return;
        }
        events.push(FinancialEvent {
            date: fee.date,
            kind: EventKind::Paid,
            category: EventCategory::PixFee,
            amount: fee.amount,
            source_type: SourceType::PixFee,
            source_id: fee.id.into_inner(),
            label: format!("PIX fee - {}", fee.bank),
            metadata: EventMetadata::default(),
        });
    }
}

/// True for methods that settle a sale at the point of sale: cash, PIX,
/// debit card, and single-charge credit card.
fn settles_sale_on_the_spot(method: &PaymentMethod) -> bool {
    match method.kind() {
        PaymentKind::Cash | PaymentKind::Pix | PaymentKind::DebitCard => true,
        PaymentKind::CreditCard => method.installment_count() <= 1,
        _ => false,
    }
}

/// True for methods recognized as an immediate outflow when a debt is
/// settled: cash, PIX, debit card, and bank transfer.
fn is_immediate_settlement(method: &PaymentMethod) -> bool {
    matches!(
        method.kind(),
        PaymentKind::Cash | PaymentKind::Pix | PaymentKind::DebitCard | PaymentKind::Transfer
    )
}
