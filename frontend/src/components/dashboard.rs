use shared::income_expense_totals;
use yew::prelude::*;

use crate::components::action_bar::ActionBar;
use crate::components::budget_panel::BudgetPanel;
use crate::components::header::Header;
use crate::components::modals::{BudgetModal, RecurringModal, TransactionModal};
use crate::components::recurring_panel::RecurringPanel;
use crate::components::stat_cards::StatCards;
use crate::components::transaction_list::TransactionList;
use crate::components::transaction_table::TransactionTable;
use crate::hooks::use_dashboard::use_dashboard;
use crate::services::api::ApiClient;
use crate::state::modal::ActiveModal;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api: ApiClient,
    pub on_session_invalid: Callback<()>,
    pub on_view_report: Callback<()>,
}

/// The authenticated landing view: summary cards, quick actions, the three
/// data panels, and whichever dialog is active.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let dashboard = use_dashboard(props.api.clone(), props.on_session_invalid.clone());
    let state = dashboard.state;
    let actions = dashboard.actions;

    let totals = income_expense_totals(&state.transactions);
    let balance = state.stats.net_balance;

    let modal = match state.active_modal {
        ActiveModal::None => html! {},
        ActiveModal::AddTransaction | ActiveModal::EditTransaction => html! {
            <TransactionModal
                editing={state.active_modal == ActiveModal::EditTransaction}
                form={state.transaction_form.clone()}
                error={state.form_error.clone()}
                on_change={actions.set_transaction_form.clone()}
                on_save={actions.save_transaction.clone()}
                on_cancel={if state.active_modal.is_edit() {
                    actions.cancel_edit.clone()
                } else {
                    actions.close_modal.clone()
                }}
            />
        },
        ActiveModal::AddRecurring | ActiveModal::EditRecurring => html! {
            <RecurringModal
                editing={state.active_modal == ActiveModal::EditRecurring}
                form={state.recurring_form.clone()}
                error={state.form_error.clone()}
                on_change={actions.set_recurring_form.clone()}
                on_save={actions.save_recurring.clone()}
                on_cancel={if state.active_modal.is_edit() {
                    actions.cancel_edit.clone()
                } else {
                    actions.close_modal.clone()
                }}
            />
        },
        ActiveModal::Budget => html! {
            <BudgetModal
                has_budget={state.budget.is_some()}
                form={state.budget_form.clone()}
                error={state.form_error.clone()}
                on_change={actions.set_budget_form.clone()}
                on_save={actions.save_budget.clone()}
                on_cancel={actions.close_modal.clone()}
            />
        },
    };

    html! {
        <div class="dashboard">
            <Header on_logout={actions.logout.clone()} />

            <main class="container">
                <StatCards {totals} {balance} />

                <ActionBar
                    has_budget={state.budget.is_some()}
                    on_open_modal={actions.open_modal.clone()}
                    on_view_report={props.on_view_report.clone()}
                />

                <div class="panel-grid">
                    <TransactionList
                        transactions={state.transactions.clone()}
                        on_edit={actions.edit_transaction.clone()}
                        on_delete={actions.delete_transaction.clone()}
                    />
                    <div class="panel-stack">
                        <BudgetPanel budget={state.budget.clone()} {balance} />
                        <RecurringPanel
                            rules={state.recurring_rules.clone()}
                            on_edit={actions.edit_recurring.clone()}
                            on_delete={actions.delete_recurring.clone()}
                        />
                    </div>
                </div>

                <TransactionTable
                    transactions={state.transactions.clone()}
                    loading={state.loading}
                    on_edit={actions.edit_transaction.clone()}
                    on_delete={actions.delete_transaction.clone()}
                />
            </main>

            {modal}
        </div>
    }
}
