use shared::{Budget, BudgetStats, RecurringRule, Transaction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_periodic_refresh::{use_periodic_refresh, RefreshConfig};
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;
use crate::state::forms::{BudgetForm, RecurringForm, TransactionForm};
use crate::state::modal::ActiveModal;

/// Everything the dashboard view renders from. The hook owns the
/// authoritative copies for the lifetime of the mounted view; display
/// components receive them by reference and keep nothing of their own.
#[derive(Clone, PartialEq)]
pub struct DashboardState {
    pub transactions: Vec<Transaction>,
    pub stats: BudgetStats,
    pub recurring_rules: Vec<RecurringRule>,
    pub budget: Option<Budget>,
    pub loading: bool,
    pub active_modal: ActiveModal,
    pub transaction_form: TransactionForm,
    pub recurring_form: RecurringForm,
    pub budget_form: BudgetForm,
    /// Inline error for whichever modal is open.
    pub form_error: Option<String>,
}

#[derive(Clone)]
pub struct DashboardActions {
    pub refresh_all: Callback<()>,
    pub open_modal: Callback<ActiveModal>,
    pub close_modal: Callback<()>,
    pub set_transaction_form: Callback<TransactionForm>,
    pub set_recurring_form: Callback<RecurringForm>,
    pub set_budget_form: Callback<BudgetForm>,
    pub save_transaction: Callback<()>,
    pub save_recurring: Callback<()>,
    pub save_budget: Callback<()>,
    pub edit_transaction: Callback<Transaction>,
    pub edit_recurring: Callback<RecurringRule>,
    pub cancel_edit: Callback<()>,
    pub delete_transaction: Callback<String>,
    pub delete_recurring: Callback<String>,
    pub logout: Callback<()>,
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: DashboardActions,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Log a failed call and force a logout when the session turned invalid.
fn report_failure(context: &str, err: &ApiError, on_session_invalid: &Callback<()>) {
    Logger::error("dashboard", &format!("{}: {}", context, err));
    if err.is_unauthorized() {
        on_session_invalid.emit(());
    }
}

/// Dashboard container: fetch-on-mount, fixed-interval re-fetch, CRUD
/// dispatch and modal/form orchestration over the three API resources.
///
/// The three reads run as independent tasks; each one merges or degrades
/// only its own slice, so one failing resource never blocks the others.
/// `on_session_invalid` fires on any 401 and on logout.
#[hook]
pub fn use_dashboard(api: ApiClient, on_session_invalid: Callback<()>) -> UseDashboardResult {
    let transactions = use_state(Vec::<Transaction>::new);
    let stats = use_state(BudgetStats::default);
    let recurring_rules = use_state(Vec::<RecurringRule>::new);
    let budget = use_state(|| Option::<Budget>::None);
    let loading = use_state(|| true);

    let active_modal = use_state(ActiveModal::default);
    let transaction_form = use_state(TransactionForm::default);
    let recurring_form = use_state(RecurringForm::default);
    let budget_form = use_state(BudgetForm::default);
    let form_error = use_state(|| Option::<String>::None);

    let editing_transaction = use_state(|| Option::<String>::None);
    let editing_recurring = use_state(|| Option::<String>::None);

    let refresh_transactions = {
        let api = api.clone();
        let transactions = transactions.clone();
        let stats = stats.clone();
        let loading = loading.clone();
        let on_session_invalid = on_session_invalid.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let transactions = transactions.clone();
            let stats = stats.clone();
            let loading = loading.clone();
            let on_session_invalid = on_session_invalid.clone();
            spawn_local(async move {
                loading.set(true);
                match api.transactions().await {
                    Ok(summary) => {
                        transactions.set(summary.transactions);
                        stats.set(summary.stats);
                    }
                    Err(err) => {
                        report_failure("fetching transactions", &err, &on_session_invalid);
                        transactions.set(Vec::new());
                        stats.set(BudgetStats::default());
                    }
                }
                loading.set(false);
            });
        })
    };

    let refresh_recurring = {
        let api = api.clone();
        let recurring_rules = recurring_rules.clone();
        let on_session_invalid = on_session_invalid.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let recurring_rules = recurring_rules.clone();
            let on_session_invalid = on_session_invalid.clone();
            spawn_local(async move {
                match api.recurring().await {
                    Ok(rules) => recurring_rules.set(rules),
                    Err(err) => {
                        report_failure("fetching recurring rules", &err, &on_session_invalid);
                        recurring_rules.set(Vec::new());
                    }
                }
            });
        })
    };

    let refresh_budget = {
        let api = api.clone();
        let budget = budget.clone();
        let on_session_invalid = on_session_invalid.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let budget = budget.clone();
            let on_session_invalid = on_session_invalid.clone();
            spawn_local(async move {
                match api.budget().await {
                    Ok(current) => budget.set(current),
                    Err(err) => {
                        report_failure("fetching budget", &err, &on_session_invalid);
                        budget.set(None);
                    }
                }
            });
        })
    };

    // One entry point for mount, timer tick and refetch-after-mutation.
    let refresh_all = {
        let refresh_transactions = refresh_transactions.clone();
        let refresh_recurring = refresh_recurring.clone();
        let refresh_budget = refresh_budget.clone();
        Callback::from(move |_: ()| {
            refresh_transactions.emit(());
            refresh_recurring.emit(());
            refresh_budget.emit(());
        })
    };

    {
        let refresh_all = refresh_all.clone();
        use_effect_with((), move |_| {
            refresh_all.emit(());
            || ()
        });
    }

    use_periodic_refresh(RefreshConfig::default(), refresh_all.clone());

    let open_modal = {
        let active_modal = active_modal.clone();
        let form_error = form_error.clone();
        Callback::from(move |modal: ActiveModal| {
            form_error.set(None);
            active_modal.set(modal);
        })
    };

    // Plain close keeps typed-in values; only canceling an edit resets.
    let close_modal = {
        let active_modal = active_modal.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            form_error.set(None);
            active_modal.set(ActiveModal::None);
        })
    };

    let set_transaction_form = {
        let transaction_form = transaction_form.clone();
        Callback::from(move |form: TransactionForm| transaction_form.set(form))
    };
    let set_recurring_form = {
        let recurring_form = recurring_form.clone();
        Callback::from(move |form: RecurringForm| recurring_form.set(form))
    };
    let set_budget_form = {
        let budget_form = budget_form.clone();
        Callback::from(move |form: BudgetForm| budget_form.set(form))
    };

    let save_transaction = {
        let api = api.clone();
        let transaction_form = transaction_form.clone();
        let editing_transaction = editing_transaction.clone();
        let active_modal = active_modal.clone();
        let form_error = form_error.clone();
        let refresh_all = refresh_all.clone();
        let on_session_invalid = on_session_invalid.clone();
        Callback::from(move |_: ()| {
            let payload = match transaction_form.to_payload() {
                Ok(payload) => payload,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let api = api.clone();
            let transaction_form = transaction_form.clone();
            let editing_transaction = editing_transaction.clone();
            let active_modal = active_modal.clone();
            let form_error = form_error.clone();
            let refresh_all = refresh_all.clone();
            let on_session_invalid = on_session_invalid.clone();
            spawn_local(async move {
                let result = match editing_transaction.as_deref() {
                    Some(id) => api.update_transaction(id, &payload).await,
                    None => api.create_transaction(&payload).await,
                };
                match result {
                    Ok(()) => {
                        transaction_form.set(TransactionForm::default());
                        editing_transaction.set(None);
                        active_modal.set(ActiveModal::None);
                        form_error.set(None);
                        refresh_all.emit(());
                    }
                    Err(err) => {
                        report_failure("saving transaction", &err, &on_session_invalid);
                        form_error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let save_recurring = {
        let api = api.clone();
        let recurring_form = recurring_form.clone();
        let editing_recurring = editing_recurring.clone();
        let active_modal = active_modal.clone();
        let form_error = form_error.clone();
        let refresh_all = refresh_all.clone();
        let on_session_invalid = on_session_invalid.clone();
        Callback::from(move |_: ()| {
            // Creation and edit submit different payload shapes.
            enum Pending {
                Create(shared::RecurringPayload),
                Update(String, shared::RecurringUpdatePayload),
            }
            let pending = match editing_recurring.as_deref() {
                Some(id) => match recurring_form.to_update_payload() {
                    Ok(payload) => Pending::Update(id.to_string(), payload),
                    Err(err) => {
                        form_error.set(Some(err.to_string()));
                        return;
                    }
                },
                None => match recurring_form.to_create_payload() {
                    Ok(payload) => Pending::Create(payload),
                    Err(err) => {
                        form_error.set(Some(err.to_string()));
                        return;
                    }
                },
            };
            let api = api.clone();
            let recurring_form = recurring_form.clone();
            let editing_recurring = editing_recurring.clone();
            let active_modal = active_modal.clone();
            let form_error = form_error.clone();
            let refresh_all = refresh_all.clone();
            let on_session_invalid = on_session_invalid.clone();
            spawn_local(async move {
                let result = match pending {
                    Pending::Create(payload) => api.create_recurring(&payload).await,
                    Pending::Update(id, payload) => api.update_recurring(&id, &payload).await,
                };
                match result {
                    Ok(()) => {
                        recurring_form.set(RecurringForm::default());
                        editing_recurring.set(None);
                        active_modal.set(ActiveModal::None);
                        form_error.set(None);
                        refresh_all.emit(());
                    }
                    Err(err) => {
                        report_failure("saving recurring rule", &err, &on_session_invalid);
                        form_error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let save_budget = {
        let api = api.clone();
        let budget_form = budget_form.clone();
        let active_modal = active_modal.clone();
        let form_error = form_error.clone();
        let refresh_all = refresh_all.clone();
        let on_session_invalid = on_session_invalid.clone();
        Callback::from(move |_: ()| {
            let payload = match budget_form.to_payload() {
                Ok(payload) => payload,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let api = api.clone();
            let budget_form = budget_form.clone();
            let active_modal = active_modal.clone();
            let form_error = form_error.clone();
            let refresh_all = refresh_all.clone();
            let on_session_invalid = on_session_invalid.clone();
            spawn_local(async move {
                match api.save_budget(&payload).await {
                    Ok(()) => {
                        budget_form.set(BudgetForm::default());
                        active_modal.set(ActiveModal::None);
                        form_error.set(None);
                        refresh_all.emit(());
                    }
                    Err(err) => {
                        report_failure("saving budget", &err, &on_session_invalid);
                        form_error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let edit_transaction = {
        let transaction_form = transaction_form.clone();
        let editing_transaction = editing_transaction.clone();
        let active_modal = active_modal.clone();
        let form_error = form_error.clone();
        Callback::from(move |tx: Transaction| {
            transaction_form.set(TransactionForm::from_transaction(&tx));
            editing_transaction.set(Some(tx.id));
            form_error.set(None);
            active_modal.set(ActiveModal::EditTransaction);
        })
    };

    let edit_recurring = {
        let recurring_form = recurring_form.clone();
        let editing_recurring = editing_recurring.clone();
        let active_modal = active_modal.clone();
        let form_error = form_error.clone();
        Callback::from(move |rule: RecurringRule| {
            recurring_form.set(RecurringForm::from_rule(&rule));
            editing_recurring.set(Some(rule.id));
            form_error.set(None);
            active_modal.set(ActiveModal::EditRecurring);
        })
    };

    // Discards unsaved edits: both edit modals close, both forms reset.
    // Never touches the API.
    let cancel_edit = {
        let transaction_form = transaction_form.clone();
        let recurring_form = recurring_form.clone();
        let editing_transaction = editing_transaction.clone();
        let editing_recurring = editing_recurring.clone();
        let active_modal = active_modal.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            transaction_form.set(TransactionForm::default());
            recurring_form.set(RecurringForm::default());
            editing_transaction.set(None);
            editing_recurring.set(None);
            form_error.set(None);
            active_modal.set(ActiveModal::None);
        })
    };

    let delete_transaction = {
        let api = api.clone();
        let refresh_all = refresh_all.clone();
        let on_session_invalid = on_session_invalid.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this transaction?") {
                return;
            }
            let api = api.clone();
            let refresh_all = refresh_all.clone();
            let on_session_invalid = on_session_invalid.clone();
            spawn_local(async move {
                match api.delete_transaction(&id).await {
                    Ok(()) => refresh_all.emit(()),
                    Err(err) => report_failure("deleting transaction", &err, &on_session_invalid),
                }
            });
        })
    };

    let delete_recurring = {
        let api = api.clone();
        let refresh_all = refresh_all.clone();
        let on_session_invalid = on_session_invalid.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this recurring rule?") {
                return;
            }
            let api = api.clone();
            let refresh_all = refresh_all.clone();
            let on_session_invalid = on_session_invalid.clone();
            spawn_local(async move {
                match api.delete_recurring(&id).await {
                    Ok(()) => refresh_all.emit(()),
                    Err(err) => report_failure("deleting recurring rule", &err, &on_session_invalid),
                }
            });
        })
    };

    // Best-effort server call, then the token goes regardless.
    let logout = {
        let api = api.clone();
        let on_session_invalid = on_session_invalid.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let on_session_invalid = on_session_invalid.clone();
            spawn_local(async move {
                if let Err(err) = api.logout().await {
                    Logger::warn("dashboard", &format!("logout call failed: {}", err));
                }
                on_session_invalid.emit(());
            });
        })
    };

    let state = DashboardState {
        transactions: (*transactions).clone(),
        stats: (*stats).clone(),
        recurring_rules: (*recurring_rules).clone(),
        budget: (*budget).clone(),
        loading: *loading,
        active_modal: *active_modal,
        transaction_form: (*transaction_form).clone(),
        recurring_form: (*recurring_form).clone(),
        budget_form: (*budget_form).clone(),
        form_error: (*form_error).clone(),
    };

    let actions = DashboardActions {
        refresh_all,
        open_modal,
        close_modal,
        set_transaction_form,
        set_recurring_form,
        set_budget_form,
        save_transaction,
        save_recurring,
        save_budget,
        edit_transaction,
        edit_recurring,
        cancel_edit,
        delete_transaction,
        delete_recurring,
        logout,
    };

    UseDashboardResult { state, actions }
}
