//! Per-record parsers from host JSON to canonical records.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use uuid::Uuid;

use fluxo_shared::types::{
    Anticipation, Boleto, BoletoId, BoletoStatus, CashBalance, CashCategory, CashDirection,
    CashTransaction, CashTransactionId, Check, CheckId, CheckStatus, Debt, DebtId, EmployeeId,
    EmployeePayment, EmployeePaymentId, InstallmentPlan, PaymentKind, PaymentMethod, PixFee,
    PixFeeId, Sale, SaleId, SaleStatus,
};

use super::SkipReason;
use super::fields::{
    amount_field, bool_field, date_field, field, i64_field, normalize_token, string_field,
    u32_field, uuid_field,
};

fn as_object(value: &Value) -> Result<&Map<String, Value>, SkipReason> {
    value.as_object().ok_or(SkipReason::NotAnObject)
}

/// Record ID, or a fresh one when the host did not provide a usable UUID.
fn record_id(obj: &Map<String, Value>) -> Uuid {
    uuid_field(obj, &["id"]).unwrap_or_else(Uuid::now_v7)
}

fn payment_kind(raw: &str) -> Option<PaymentKind> {
    match normalize_token(raw).as_str() {
        "dinheiro" | "cash" => Some(PaymentKind::Cash),
        "pix" => Some(PaymentKind::Pix),
        "cartao_credito" | "credit_card" => Some(PaymentKind::CreditCard),
        "cartao_debito" | "debit_card" => Some(PaymentKind::DebitCard),
        "cheque" | "check" => Some(PaymentKind::Check),
        "boleto" => Some(PaymentKind::Boleto),
        "transferencia" | "transfer" => Some(PaymentKind::Transfer),
        "permuta" | "barter" => Some(PaymentKind::Barter),
        "acerto" | "settlement" => Some(PaymentKind::Settlement),
        _ => None,
    }
}

fn installment_plan(obj: &Map<String, Value>) -> Option<InstallmentPlan> {
    let installments = u32_field(obj, &["installments", "parcelas"])?;
    Some(InstallmentPlan {
        installments,
        installment_value: amount_field(
            obj,
            &["installment_value", "installmentValue", "valor_parcela"],
        ),
        interval_days: i64_field(
            obj,
            &["interval_days", "installment_interval", "installmentInterval"],
        ),
        first_due_date: date_field(
            obj,
            &[
                "first_due_date",
                "firstDueDate",
                "first_installment_date",
                "firstInstallmentDate",
                "vencimento_inicial",
            ],
        ),
        start_date: date_field(obj, &["start_date", "startDate"]),
    })
}

pub(crate) fn parse_payment_method(value: &Value) -> Result<PaymentMethod, SkipReason> {
    let obj = as_object(value)?;

    let raw_kind = string_field(obj, &["type", "kind", "forma_de_pagamento"])
        .ok_or(SkipReason::MissingField("type"))?;
    let kind =
        payment_kind(&raw_kind).ok_or_else(|| SkipReason::UnknownPaymentMethod(raw_kind))?;
    let amount = amount_field(obj, &["amount", "value", "valor"])
        .ok_or(SkipReason::MissingField("amount"))?;

    Ok(match kind {
        PaymentKind::Cash => PaymentMethod::Cash { amount },
        PaymentKind::Pix => PaymentMethod::Pix { amount },
        PaymentKind::DebitCard => PaymentMethod::DebitCard { amount },
        PaymentKind::Transfer => PaymentMethod::Transfer { amount },
        PaymentKind::Barter => PaymentMethod::Barter { amount },
        PaymentKind::Settlement => PaymentMethod::Settlement { amount },
        PaymentKind::CreditCard => PaymentMethod::CreditCard {
            amount,
            plan: installment_plan(obj),
        },
        PaymentKind::Check => PaymentMethod::Check {
            amount,
            own_check: bool_field(obj, &["own_check", "is_own_check", "isOwnCheck"])
                .unwrap_or(false),
            plan: installment_plan(obj),
        },
        PaymentKind::Boleto => PaymentMethod::Boleto {
            amount,
            plan: installment_plan(obj),
        },
    })
}

fn payment_methods(obj: &Map<String, Value>) -> Result<Vec<PaymentMethod>, SkipReason> {
    let raw = field(
        obj,
        &["payment_methods", "paymentMethods", "formas_de_pagamento"],
    )
    .and_then(Value::as_array)
    .ok_or(SkipReason::MissingField("payment_methods"))?;

    // Malformed individual methods are dropped; the record keeps its
    // parseable ones.
    Ok(raw.iter().filter_map(|m| parse_payment_method(m).ok()).collect())
}

pub(crate) fn parse_sale(value: &Value) -> Result<Sale, SkipReason> {
    let obj = as_object(value)?;

    let client = string_field(obj, &["client", "cliente", "client_name"])
        .ok_or(SkipReason::MissingField("client"))?;
    let date = date_field(obj, &["date", "data", "data_da_venda", "sale_date"])
        .ok_or(SkipReason::MissingField("date"))?;
    let total_value = amount_field(obj, &["total_value", "totalValue", "valor_total", "value"])
        .ok_or(SkipReason::MissingField("total_value"))?;
    let methods = payment_methods(obj)?;

    let received_amount =
        amount_field(obj, &["received_amount", "receivedAmount"]).unwrap_or(Decimal::ZERO);
    let pending_amount =
        amount_field(obj, &["pending_amount", "pendingAmount"]).unwrap_or(Decimal::ZERO);

    let status = match string_field(obj, &["status"]).map(|s| normalize_token(&s)) {
        Some(token) => match token.as_str() {
            "pago" | "paid" => SaleStatus::Paid,
            "parcial" | "partial" => SaleStatus::Partial,
            "pendente" | "pending" => SaleStatus::Pending,
            _ => return Err(SkipReason::UnknownStatus(token)),
        },
        None if pending_amount.is_zero() => SaleStatus::Paid,
        None if received_amount.is_zero() => SaleStatus::Pending,
        None => SaleStatus::Partial,
    };

    Ok(Sale {
        id: SaleId::from_uuid(record_id(obj)),
        client,
        date,
        delivery_date: date_field(obj, &["delivery_date", "deliveryDate", "data_entrega"]),
        total_value,
        payment_methods: methods,
        received_amount,
        pending_amount,
        status,
        seller_id: uuid_field(obj, &["seller_id", "sellerId"]).map(EmployeeId::from_uuid),
    })
}

pub(crate) fn parse_debt(value: &Value) -> Result<Debt, SkipReason> {
    let obj = as_object(value)?;

    let company = string_field(obj, &["company", "empresa", "company_name"])
        .ok_or(SkipReason::MissingField("company"))?;
    let date =
        date_field(obj, &["date", "data"]).ok_or(SkipReason::MissingField("date"))?;
    let total_value = amount_field(obj, &["total_value", "totalValue", "valor_total", "value"])
        .ok_or(SkipReason::MissingField("total_value"))?;
    let methods = payment_methods(obj)?;

    let checks_used = field(obj, &["checks_used", "checksUsed"])
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .filter_map(|raw| Uuid::parse_str(raw).ok())
                .map(CheckId::from_uuid)
                .collect()
        })
        .unwrap_or_default();

    Ok(Debt {
        id: DebtId::from_uuid(record_id(obj)),
        company,
        description: string_field(obj, &["description", "descricao"]).unwrap_or_default(),
        date,
        total_value,
        payment_methods: methods,
        is_paid: bool_field(obj, &["is_paid", "isPaid"]).unwrap_or(false),
        paid_amount: amount_field(obj, &["paid_amount", "paidAmount"]).unwrap_or(Decimal::ZERO),
        pending_amount: amount_field(obj, &["pending_amount", "pendingAmount"])
            .unwrap_or(Decimal::ZERO),
        checks_used,
    })
}

fn check_status(obj: &Map<String, Value>) -> Result<CheckStatus, SkipReason> {
    match string_field(obj, &["status"]).map(|s| normalize_token(&s)) {
        None => Ok(CheckStatus::Pending),
        Some(token) => match token.as_str() {
            "pendente" | "pending" => Ok(CheckStatus::Pending),
            "compensado" | "cleared" => Ok(CheckStatus::Cleared),
            "devolvido" | "returned" => Ok(CheckStatus::Returned),
            "reapresentado" | "represented" => Ok(CheckStatus::Represented),
            _ => Err(SkipReason::UnknownStatus(token)),
        },
    }
}

pub(crate) fn parse_check(value: &Value) -> Result<Check, SkipReason> {
    let obj = as_object(value)?;

    let client = string_field(obj, &["client", "cliente", "company_name", "companyName"])
        .ok_or(SkipReason::MissingField("client"))?;
    let check_value = amount_field(obj, &["value", "valor"])
        .ok_or(SkipReason::MissingField("value"))?;
    let due_date = date_field(obj, &["due_date", "dueDate", "vencimento"])
        .ok_or(SkipReason::MissingField("due_date"))?;
    let status = check_status(obj)?;

    let own_check = bool_field(obj, &["own_check", "is_own_check", "isOwnCheck"])
        .unwrap_or(false)
        || bool_field(obj, &["is_company_payable", "isCompanyPayable"]).unwrap_or(false);

    let discount_fee = amount_field(obj, &["discount_fee", "discountFee"]);
    let discounted_amount = amount_field(obj, &["discounted_amount", "discountedAmount"]);
    let is_discounted = bool_field(obj, &["is_discounted", "isDiscounted"]).unwrap_or(false)
        || discount_fee.is_some();
    let anticipation = is_discounted.then(|| {
        let fee = discount_fee.unwrap_or(Decimal::ZERO);
        Anticipation {
            fee,
            net_amount: discounted_amount.unwrap_or(check_value - fee),
        }
    });

    Ok(Check {
        id: CheckId::from_uuid(record_id(obj)),
        sale_id: uuid_field(obj, &["sale_id", "saleId"]).map(SaleId::from_uuid),
        debt_id: uuid_field(obj, &["debt_id", "debtId", "used_in_debt", "usedInDebt"])
            .map(DebtId::from_uuid),
        client,
        value: check_value,
        due_date,
        status,
        own_check,
        installment_number: u32_field(obj, &["installment_number", "installmentNumber"]),
        total_installments: u32_field(obj, &["total_installments", "totalInstallments"]),
        used_for: string_field(obj, &["used_for", "usedFor"]),
        discount_date: date_field(obj, &["discount_date", "discountDate"]),
        anticipation,
    })
}

fn boleto_status(obj: &Map<String, Value>) -> Result<BoletoStatus, SkipReason> {
    match string_field(obj, &["status"]).map(|s| normalize_token(&s)) {
        None => Ok(BoletoStatus::Pending),
        Some(token) => match token.as_str() {
            "pendente" | "pending" => Ok(BoletoStatus::Pending),
            "compensado" | "cleared" => Ok(BoletoStatus::Cleared),
            "vencido" | "overdue" => Ok(BoletoStatus::Overdue),
            "cancelado" | "cancelled" => Ok(BoletoStatus::Cancelled),
            "nao_pago" | "unpaid" => Ok(BoletoStatus::Unpaid),
            _ => Err(SkipReason::UnknownStatus(token)),
        },
    }
}

pub(crate) fn parse_boleto(value: &Value) -> Result<Boleto, SkipReason> {
    let obj = as_object(value)?;

    let client = string_field(obj, &["client", "cliente", "company_name", "companyName"])
        .ok_or(SkipReason::MissingField("client"))?;
    let nominal = amount_field(obj, &["value", "valor"])
        .ok_or(SkipReason::MissingField("value"))?;
    let due_date = date_field(obj, &["due_date", "dueDate", "vencimento"])
        .ok_or(SkipReason::MissingField("due_date"))?;
    let status = boleto_status(obj)?;

    let debt_id = uuid_field(obj, &["debt_id", "debtId"]).map(DebtId::from_uuid);
    let company_payable = bool_field(obj, &["is_company_payable", "isCompanyPayable"])
        .unwrap_or(false)
        || debt_id.is_some();

    Ok(Boleto {
        id: BoletoId::from_uuid(record_id(obj)),
        sale_id: uuid_field(obj, &["sale_id", "saleId"]).map(SaleId::from_uuid),
        debt_id,
        client,
        value: nominal,
        due_date,
        status,
        installment_number: u32_field(obj, &["installment_number", "installmentNumber"])
            .unwrap_or(1),
        total_installments: u32_field(obj, &["total_installments", "totalInstallments"])
            .unwrap_or(1),
        final_amount: amount_field(obj, &["final_amount", "finalAmount"]),
        notary_costs: amount_field(obj, &["notary_costs", "notaryCosts"])
            .unwrap_or(Decimal::ZERO),
        interest_amount: amount_field(obj, &["interest_amount", "interestAmount", "interestPaid"]),
        penalty_amount: amount_field(obj, &["penalty_amount", "penaltyAmount"]),
        company_payable,
    })
}

pub(crate) fn parse_employee_payment(value: &Value) -> Result<EmployeePayment, SkipReason> {
    let obj = as_object(value)?;

    Ok(EmployeePayment {
        id: EmployeePaymentId::from_uuid(record_id(obj)),
        employee_id: uuid_field(obj, &["employee_id", "employeeId"])
            .map_or_else(EmployeeId::new, EmployeeId::from_uuid),
        employee_name: string_field(obj, &["employee_name", "employeeName", "name"])
            .unwrap_or_else(|| "Employee".to_string()),
        amount: amount_field(obj, &["amount", "value", "valor"])
            .ok_or(SkipReason::MissingField("amount"))?,
        payment_date: date_field(obj, &["payment_date", "paymentDate", "date"])
            .ok_or(SkipReason::MissingField("payment_date"))?,
    })
}

pub(crate) fn parse_pix_fee(value: &Value) -> Result<PixFee, SkipReason> {
    let obj = as_object(value)?;

    Ok(PixFee {
        id: PixFeeId::from_uuid(record_id(obj)),
        date: date_field(obj, &["date", "data"]).ok_or(SkipReason::MissingField("date"))?,
        amount: amount_field(obj, &["amount", "value", "valor"])
            .ok_or(SkipReason::MissingField("amount"))?,
        description: string_field(obj, &["description", "descricao"]).unwrap_or_default(),
        bank: string_field(obj, &["bank", "banco"]).unwrap_or_default(),
    })
}

pub(crate) fn parse_cash_transaction(value: &Value) -> Result<CashTransaction, SkipReason> {
    let obj = as_object(value)?;

    let raw_direction = string_field(obj, &["direction", "type", "tipo"])
        .ok_or(SkipReason::MissingField("direction"))?;
    let direction = match normalize_token(&raw_direction).as_str() {
        "entrada" | "inflow" => CashDirection::Inflow,
        "saida" | "outflow" => CashDirection::Outflow,
        token => return Err(SkipReason::UnknownStatus(token.to_string())),
    };

    let category = match string_field(obj, &["category", "categoria"])
        .map(|s| normalize_token(&s))
        .as_deref()
    {
        Some("venda" | "sale") => CashCategory::Sale,
        Some("divida" | "debt") => CashCategory::Debt,
        Some("adiantamento" | "advance") => CashCategory::Advance,
        Some("salario" | "salary") => CashCategory::Salary,
        Some("comissao" | "commission") => CashCategory::Commission,
        Some("cheque" | "check") => CashCategory::Check,
        Some("boleto") => CashCategory::Boleto,
        _ => CashCategory::Other,
    };

    Ok(CashTransaction {
        id: CashTransactionId::from_uuid(record_id(obj)),
        date: date_field(obj, &["date", "data"]).ok_or(SkipReason::MissingField("date"))?,
        direction,
        amount: amount_field(obj, &["amount", "value", "valor"])
            .ok_or(SkipReason::MissingField("amount"))?,
        description: string_field(obj, &["description", "descricao"]).unwrap_or_default(),
        category,
        related_id: uuid_field(obj, &["related_id", "relatedId"]),
    })
}

pub(crate) fn parse_cash_balance(value: &Value) -> Result<CashBalance, SkipReason> {
    let obj = as_object(value)?;

    let current_balance = amount_field(obj, &["current_balance", "currentBalance"])
        .ok_or(SkipReason::MissingField("current_balance"))?;

    Ok(CashBalance {
        current_balance,
        initial_balance: amount_field(obj, &["initial_balance", "initialBalance"])
            .unwrap_or(current_balance),
        initial_date: date_field(obj, &["initial_date", "initialDate"])
            .ok_or(SkipReason::MissingField("initial_date"))?,
    })
}
