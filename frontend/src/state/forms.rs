use chrono::Local;
use shared::{
    day_of_month, BudgetPayload, Frequency, RecurringPayload, RecurringRule,
    RecurringUpdatePayload, Transaction, TransactionPayload, TransactionType,
};
use thiserror::Error;

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn current_month() -> String {
    Local::now().format("%Y-%m").to_string()
}

/// Why a form could not be turned into an API payload. Shown inline next to
/// the form; nothing invalid ever reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Amount must be a number")]
    InvalidAmount,
    #[error("Please pick a valid date")]
    InvalidDate,
}

/// Coerce the free-text amount field. `parse` accepts the literal "NaN" and
/// infinities, so finiteness is checked explicitly; a `NaN` is rejected
/// here rather than serialized.
fn parse_amount(raw: &str) -> Result<f64, FormError> {
    let value: f64 = raw.trim().parse().map_err(|_| FormError::InvalidAmount)?;
    if !value.is_finite() {
        return Err(FormError::InvalidAmount);
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub amount: String,
    pub description: String,
    pub date: String,
    pub transaction_type: TransactionType,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            date: today(),
            transaction_type: TransactionType::Debit,
        }
    }
}

impl TransactionForm {
    /// Pre-populate the form for an edit session.
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            amount: tx.amount.to_string(),
            description: tx.description.clone(),
            date: tx.date.clone(),
            transaction_type: tx.transaction_type,
        }
    }

    pub fn to_payload(&self) -> Result<TransactionPayload, FormError> {
        Ok(TransactionPayload {
            amount: parse_amount(&self.amount)?,
            description: self.description.clone(),
            date: self.date.clone(),
            transaction_type: self.transaction_type,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecurringForm {
    pub amount: String,
    pub title: String,
    pub date: String,
    pub transaction_type: TransactionType,
    pub frequency: Frequency,
}

impl Default for RecurringForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            title: String::new(),
            date: today(),
            transaction_type: TransactionType::Debit,
            frequency: Frequency::Monthly,
        }
    }
}

impl RecurringForm {
    pub fn from_rule(rule: &RecurringRule) -> Self {
        Self {
            amount: rule.amount.to_string(),
            title: rule.title.clone(),
            date: rule.start_date.clone().unwrap_or_else(today),
            transaction_type: rule.transaction_type,
            frequency: rule.frequency,
        }
    }

    /// Creation derives the day-of-month from the chosen start date and
    /// submits an explicit open-ended schedule (`endDate: null`).
    pub fn to_create_payload(&self) -> Result<RecurringPayload, FormError> {
        let amount = parse_amount(&self.amount)?;
        let day = day_of_month(&self.date).ok_or(FormError::InvalidDate)?;
        Ok(RecurringPayload {
            title: self.title.clone(),
            amount,
            transaction_type: self.transaction_type,
            frequency: self.frequency,
            day,
            start_date: self.date.clone(),
            end_date: None,
        })
    }

    /// Edits resubmit the raw form fields; the server keeps the stored day.
    pub fn to_update_payload(&self) -> Result<RecurringUpdatePayload, FormError> {
        Ok(RecurringUpdatePayload {
            title: self.title.clone(),
            amount: parse_amount(&self.amount)?,
            date: self.date.clone(),
            transaction_type: self.transaction_type,
            frequency: self.frequency,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetForm {
    pub month: String,
    pub opening_balance: String,
}

impl Default for BudgetForm {
    fn default() -> Self {
        Self {
            month: current_month(),
            opening_balance: String::new(),
        }
    }
}

impl BudgetForm {
    pub fn to_payload(&self) -> Result<BudgetPayload, FormError> {
        Ok(BudgetPayload {
            month: self.month.clone(),
            opening_balance: parse_amount(&self.opening_balance)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_amounts_coerce_to_numbers() {
        let form = TransactionForm {
            amount: " 123.45 ".into(),
            description: "lunch".into(),
            date: "2024-05-01".into(),
            transaction_type: TransactionType::Debit,
        };
        assert_eq!(form.to_payload().unwrap().amount, 123.45);
    }

    #[test]
    fn nan_and_garbage_amounts_are_rejected() {
        for raw in ["NaN", "nan", "inf", "twelve", ""] {
            let form = TransactionForm {
                amount: raw.into(),
                ..TransactionForm::default()
            };
            assert_eq!(form.to_payload(), Err(FormError::InvalidAmount), "{raw}");
        }
    }

    #[test]
    fn recurring_creation_derives_day_from_start_date() {
        let form = RecurringForm {
            amount: "900".into(),
            title: "rent".into(),
            date: "2024-03-15".into(),
            transaction_type: TransactionType::Debit,
            frequency: Frequency::Monthly,
        };
        let payload = form.to_create_payload().unwrap();
        assert_eq!(payload.day, 15);
        assert_eq!(payload.start_date, "2024-03-15");
        assert_eq!(payload.end_date, None);
    }

    #[test]
    fn recurring_creation_rejects_bad_dates() {
        let form = RecurringForm {
            amount: "900".into(),
            date: "someday".into(),
            ..RecurringForm::default()
        };
        assert_eq!(form.to_create_payload(), Err(FormError::InvalidDate));
    }

    #[test]
    fn recurring_update_resubmits_form_fields_without_day() {
        let form = RecurringForm {
            amount: "55".into(),
            title: "gym".into(),
            date: "2024-06-02".into(),
            transaction_type: TransactionType::Debit,
            frequency: Frequency::Weekly,
        };
        let payload = form.to_update_payload().unwrap();
        assert_eq!(payload.amount, 55.0);
        assert_eq!(payload.frequency, Frequency::Weekly);
    }

    #[test]
    fn edit_prepopulates_then_default_restores() {
        let tx = Transaction {
            id: "t".into(),
            amount: 42.0,
            description: "books".into(),
            date: "2024-04-04".into(),
            transaction_type: TransactionType::Credit,
        };
        let form = TransactionForm::from_transaction(&tx);
        assert_eq!(form.amount, "42");
        assert_eq!(form.transaction_type, TransactionType::Credit);

        let reset = TransactionForm::default();
        assert!(reset.amount.is_empty());
        assert_eq!(reset.transaction_type, TransactionType::Debit);
    }

    #[test]
    fn budget_form_defaults_to_current_month() {
        let form = BudgetForm::default();
        assert_eq!(form.month.len(), "2024-06".len());
        assert!(form.opening_balance.is_empty());
    }
}
