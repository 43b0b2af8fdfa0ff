use shared::{Frequency, TransactionType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::Modal;
use crate::state::forms::RecurringForm;

#[derive(Properties, PartialEq)]
pub struct RecurringModalProps {
    pub editing: bool,
    pub form: RecurringForm,
    pub error: Option<String>,
    pub on_change: Callback<RecurringForm>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(RecurringModal)]
pub fn recurring_modal(props: &RecurringModalProps) -> Html {
    let title = if props.editing { "Edit Recurring Rule" } else { "Add New Recurring Rule" };
    let save_label = if props.editing { "Update Rule" } else { "Save Rule" };

    let on_amount = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(RecurringForm { amount: input.value(), ..form.clone() });
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
            on_change.emit(RecurringForm { transaction_type, ..form.clone() });
        })
    };
    let on_title = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(RecurringForm { title: input.value(), ..form.clone() });
        })
    };
    let on_date = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(RecurringForm { date: input.value(), ..form.clone() });
        })
    };
    let on_frequency = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let frequency = select.value().parse().unwrap_or(Frequency::Monthly);
            on_change.emit(RecurringForm { frequency, ..form.clone() });
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
    let is_weekly = props.form.frequency == Frequency::Weekly;

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
                placeholder="Title"
                value={props.form.title.clone()}
                oninput={on_title}
            />
            <input type="date" value={props.form.date.clone()} oninput={on_date} />
            <select onchange={on_frequency}>
                <option value="weekly" selected={is_weekly}>{"Weekly"}</option>
                <option value="monthly" selected={!is_weekly}>{"Monthly"}</option>
            </select>
            <div class="modal-actions">
                <button class="btn btn-accent" onclick={on_save}>{save_label}</button>
                <button class="btn btn-muted" onclick={on_cancel_click}>{"Cancel"}</button>
            </div>
        </Modal>
    }
}
