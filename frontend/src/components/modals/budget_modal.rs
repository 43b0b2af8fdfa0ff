use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Modal;
use crate::state::forms::BudgetForm;

#[derive(Properties, PartialEq)]
pub struct BudgetModalProps {
    /// Flips the title between create and update wording.
    pub has_budget: bool,
    pub form: BudgetForm,
    pub error: Option<String>,
    pub on_change: Callback<BudgetForm>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(BudgetModal)]
pub fn budget_modal(props: &BudgetModalProps) -> Html {
    let title = if props.has_budget { "Update Budget" } else { "Create New Budget" };

    let on_month = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(BudgetForm { month: input.value(), ..form.clone() });
        })
    };
    let on_opening_balance = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(BudgetForm { opening_balance: input.value(), ..form.clone() });
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

    html! {
        <Modal title={title} on_close={props.on_cancel.clone()}>
            {if let Some(error) = &props.error {
                html! { <p class="form-error">{error}</p> }
            } else {
                html! {}
            }}
            <input type="month" value={props.form.month.clone()} oninput={on_month} />
            <input
                type="number"
                placeholder="Opening Balance"
                value={props.form.opening_balance.clone()}
                oninput={on_opening_balance}
            />
            <div class="modal-actions">
                <button class="btn btn-success" onclick={on_save}>{"Save Budget"}</button>
                <button class="btn btn-muted" onclick={on_cancel_click}>{"Cancel"}</button>
            </div>
        </Modal>
    }
}
