use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single ledger entry as stored by the API server.
///
/// `amount` is a positive magnitude; the direction of money flow is carried
/// by `transaction_type`. Dates are calendar days in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Positive magnitude; sign is conveyed by `transaction_type`.
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    /// Calendar day (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Direction of a transaction or recurring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money out (expense).
    Debit,
    /// Money in (income).
    Credit,
}

impl TransactionType {
    pub fn is_credit(self) -> bool {
        matches!(self, TransactionType::Credit)
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Debit => write!(f, "debit"),
            TransactionType::Credit => write!(f, "credit"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debit" => Ok(TransactionType::Debit),
            "credit" => Ok(TransactionType::Credit),
            _ => Err(()),
        }
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Debit
    }
}

/// Schedule on which the server materializes a recurring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(()),
        }
    }
}

/// Server-side instruction to materialize a transaction on a schedule.
/// The client only authors and edits rules; it never runs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringRule {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub frequency: Frequency,
    /// Day of month the rule fires on, derived from the start date.
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Monthly budget record. The API returns at most one (the current month's).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub opening_balance: f64,
}

/// Server-computed aggregate accompanying the transaction list. This is the
/// authoritative balance source; the client never recomputes `net_balance`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStats {
    #[serde(default)]
    pub opening_balance: f64,
    #[serde(default)]
    pub total_credit: f64,
    #[serde(default)]
    pub total_debit: f64,
    #[serde(default)]
    pub net_balance: f64,
}

/// Response body of `GET /api/transactions`: the full list plus the
/// server-side stats, every field defaulted so a sparse body still parses.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TransactionSummary {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(flatten)]
    pub stats: BudgetStats,
}

/// `GET /api/recurring` answers with either a bare array or an object
/// wrapping the array under a `recurring` key, depending on server revision.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecurringListResponse {
    Wrapped { recurring: Vec<RecurringRule> },
    Bare(Vec<RecurringRule>),
    Other(serde_json::Value),
}

impl RecurringListResponse {
    /// Normalize both wire shapes to a plain list; anything else is empty.
    pub fn into_rules(self) -> Vec<RecurringRule> {
        match self {
            RecurringListResponse::Wrapped { recurring } => recurring,
            RecurringListResponse::Bare(rules) => rules,
            RecurringListResponse::Other(_) => Vec::new(),
        }
    }
}

/// `GET /api/transactions/last-six-months` has the same two-shape history.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SixMonthResponse {
    Bare(Vec<Transaction>),
    Wrapped { transactions: Vec<Transaction> },
    Other(serde_json::Value),
}

impl SixMonthResponse {
    pub fn into_transactions(self) -> Vec<Transaction> {
        match self {
            SixMonthResponse::Bare(transactions) => transactions,
            SixMonthResponse::Wrapped { transactions } => transactions,
            SixMonthResponse::Other(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body for `POST /api/transactions` and `PUT /api/transactions/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPayload {
    pub amount: f64,
    pub description: String,
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Body for `POST /api/recurring` and `PUT /api/recurring/:id`. `day` is
/// derived client-side from the chosen start date; `end_date` serializes as
/// an explicit `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPayload {
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub frequency: Frequency,
    pub day: u32,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Body for `PUT /api/recurring/:id`: the raw form fields with the amount
/// coerced. Unlike creation, edits do not re-derive `day`; the server keeps
/// the stored schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecurringUpdatePayload {
    pub title: String,
    pub amount: f64,
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub frequency: Frequency,
}

/// Body for `POST /api/budget`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPayload {
    pub month: String,
    pub opening_balance: f64,
}

/// Client-side income/expense sums over the visible transaction list.
///
/// These back the two summary cards and are deliberately independent of
/// [`BudgetStats`]: if the server ever paginates or filters the list the two
/// can diverge, and both readings stay on display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
}

pub fn income_expense_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for tx in transactions {
        if tx.transaction_type.is_credit() {
            totals.income += tx.amount;
        } else {
            totals.expenses += tx.amount;
        }
    }
    totals
}

/// Derive the day-of-month a recurring rule fires on from its start date.
/// Only called at rule-creation time; edits resubmit the stored fields.
pub fn day_of_month(date: &str) -> Option<u32> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credit(amount: f64) -> Transaction {
        Transaction {
            id: "t1".into(),
            amount,
            description: "salary".into(),
            date: "2024-03-01".into(),
            transaction_type: TransactionType::Credit,
        }
    }

    fn debit(amount: f64) -> Transaction {
        Transaction {
            id: "t2".into(),
            amount,
            description: "groceries".into(),
            date: "2024-03-02".into(),
            transaction_type: TransactionType::Debit,
        }
    }

    #[test]
    fn transaction_parses_mongo_wire_shape() {
        let tx: Transaction = serde_json::from_str(
            r#"{"_id":"abc123","amount":250.5,"description":"rent","date":"2024-04-01","type":"debit"}"#,
        )
        .unwrap();
        assert_eq!(tx.id, "abc123");
        assert_eq!(tx.amount, 250.5);
        assert_eq!(tx.transaction_type, TransactionType::Debit);
    }

    #[test]
    fn missing_amount_defaults_to_zero() {
        let tx: Transaction = serde_json::from_str(
            r#"{"_id":"abc","description":"x","date":"2024-04-01","type":"credit"}"#,
        )
        .unwrap();
        assert_eq!(tx.amount, 0.0);
    }

    #[test]
    fn summary_parses_stats_alongside_list() {
        let summary: TransactionSummary = serde_json::from_str(
            r#"{
                "transactions": [{"_id":"a","amount":10,"description":"d","date":"2024-01-01","type":"credit"}],
                "openingBalance": 100,
                "totalCredit": 10,
                "totalDebit": 0,
                "netBalance": 110
            }"#,
        )
        .unwrap();
        assert_eq!(summary.transactions.len(), 1);
        assert_eq!(summary.stats.net_balance, 110.0);
    }

    #[test]
    fn summary_tolerates_sparse_body() {
        let summary: TransactionSummary = serde_json::from_str("{}").unwrap();
        assert!(summary.transactions.is_empty());
        assert_eq!(summary.stats, BudgetStats::default());
    }

    #[test]
    fn recurring_list_normalizes_wrapped_shape() {
        let body = r#"{"recurring":[{"_id":"r1","title":"rent","amount":900,"type":"debit","frequency":"monthly","day":1,"startDate":"2024-01-01","endDate":null}]}"#;
        let rules: RecurringListResponse = serde_json::from_str(body).unwrap();
        let rules = rules.into_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].title, "rent");
        assert_eq!(rules[0].frequency, Frequency::Monthly);
    }

    #[test]
    fn recurring_list_normalizes_bare_shape() {
        let body = r#"[{"_id":"r1","title":"gym","amount":50,"type":"debit","frequency":"weekly"}]"#;
        let rules: RecurringListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(rules.into_rules().len(), 1);
    }

    #[test]
    fn recurring_list_defaults_other_shapes_to_empty() {
        let rules: RecurringListResponse = serde_json::from_str("{}").unwrap();
        assert!(rules.into_rules().is_empty());
        let rules: RecurringListResponse = serde_json::from_str("null").unwrap();
        assert!(rules.into_rules().is_empty());
    }

    #[test]
    fn six_month_response_accepts_both_shapes() {
        let bare = r#"[{"_id":"a","amount":1,"description":"d","date":"2024-01-01","type":"debit"}]"#;
        let wrapped = format!(r#"{{"transactions":{}}}"#, bare);
        let from_bare: SixMonthResponse = serde_json::from_str(bare).unwrap();
        let from_wrapped: SixMonthResponse = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(from_bare.into_transactions().len(), 1);
        assert_eq!(from_wrapped.into_transactions().len(), 1);
    }

    #[test]
    fn totals_split_by_type_and_ignore_stats() {
        let totals = income_expense_totals(&[credit(500.0), debit(200.0)]);
        assert_eq!(totals.income, 500.0);
        assert_eq!(totals.expenses, 200.0);
    }

    #[test]
    fn day_of_month_comes_from_start_date() {
        assert_eq!(day_of_month("2024-03-15"), Some(15));
        assert_eq!(day_of_month("2024-12-01"), Some(1));
        assert_eq!(day_of_month("not-a-date"), None);
    }

    #[test]
    fn recurring_payload_serializes_null_end_date() {
        let payload = RecurringPayload {
            title: "rent".into(),
            amount: 900.0,
            transaction_type: TransactionType::Debit,
            frequency: Frequency::Monthly,
            day: 15,
            start_date: "2024-03-15".into(),
            end_date: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["day"], 15);
        assert_eq!(json["startDate"], "2024-03-15");
        assert!(json["endDate"].is_null());
        assert_eq!(json["type"], "debit");
    }

    #[test]
    fn budget_payload_uses_camel_case() {
        let json = serde_json::to_value(BudgetPayload {
            month: "2024-06".into(),
            opening_balance: 1200.0,
        })
        .unwrap();
        assert_eq!(json["openingBalance"], 1200.0);
    }
}
