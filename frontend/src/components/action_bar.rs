use yew::prelude::*;

use crate::state::modal::ActiveModal;

#[derive(Properties, PartialEq)]
pub struct ActionBarProps {
    pub has_budget: bool,
    pub on_open_modal: Callback<ActiveModal>,
    pub on_view_report: Callback<()>,
}

/// Quick actions above the tables: open one of the three dialogs, or jump
/// to the six-month report.
#[function_component(ActionBar)]
pub fn action_bar(props: &ActionBarProps) -> Html {
    let open = |modal: ActiveModal| {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(modal))
    };
    let on_view_report = {
        let on_view_report = props.on_view_report.clone();
        Callback::from(move |_: MouseEvent| on_view_report.emit(()))
    };
    let budget_label = if props.has_budget { "Update Budget" } else { "Create Budget" };

    html! {
        <div class="action-bar">
            <button class="btn btn-primary" onclick={open(ActiveModal::AddTransaction)}>
                {"Add Transaction"}
            </button>
            <button class="btn btn-accent" onclick={open(ActiveModal::AddRecurring)}>
                {"Add Recurring Rule"}
            </button>
            <button class="btn btn-success" onclick={open(ActiveModal::Budget)}>
                {budget_label}
            </button>
            <button class="btn btn-accent" onclick={on_view_report}>
                {"View Last 6 Months Transactions"}
            </button>
        </div>
    }
}
