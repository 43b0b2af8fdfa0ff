use shared::TransactionType;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::Modal;
use crate::state::forms::TransactionForm;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub editing: bool,
    pub form: TransactionForm,
    pub error: Option<String>,
    pub on_change: Callback<TransactionForm>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Add/edit dialog for a transaction. The form lives in the dashboard hook;
/// this component only mirrors field edits back through `on_change`.
#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let title = if props.editing { "Edit Transaction" } else { "Add New Transaction" };
    let save_label = if props.editing { "Update Transaction" } else { "Save Transaction" };

    let on_amount = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(TransactionForm { amount: input.value(), ..form.clone() });
        })
    };
    let on_type = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let transaction_type = select
                .value()
                .parse()
                .unwrap_or(TransactionType::Debit);
            on_change.emit(TransactionForm { transaction_type, ..form.clone() });
        })
    };
    let on_description = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(TransactionForm { description: input.value(), ..form.clone() });
        })
    };
    let on_date = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(TransactionForm { date: input.value(), ..form.clone() });
        })
    };
    let on_save = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };
    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let is_credit = props.form.transaction_type.is_credit();

    html! {
        <Modal title={title} on_close={props.on_cancel.clone()}>
            {if let Some(error) = &props.error {
                html! { <p class="form-error">{error}</p> }
            } else {
                html! {}
            }}
            <div class="form-grid">
                <input
                    type="number"
                    placeholder="Amount"
                    value={props.form.amount.clone()}
                    oninput={on_amount}
                />
                <select onchange={on_type}>
                    <option value="debit" selected={!is_credit}>{"Expense (Debit)"}</option>
                    <option value="credit" selected={is_credit}>{"Income (Credit)"}</option>
                </select>
            </div>
            <input
                type="text"
                placeholder="Description"
                value={props.form.description.clone()}
                oninput={on_description}
            />
            <input type="date" value={props.form.date.clone()} oninput={on_date} />
            <div class="modal-actions">
                <button class="btn btn-success" onclick={on_save}>{save_label}</button>
                <button class="btn btn-muted" onclick={on_cancel_click}>{"Cancel"}</button>
            </div>
        </Modal>
    }
}
