use shared::Budget;
use yew::prelude::*;

use crate::services::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct BudgetPanelProps {
    pub budget: Option<Budget>,
    /// Server-authoritative net balance.
    pub balance: f64,
}

#[function_component(BudgetPanel)]
pub fn budget_panel(props: &BudgetPanelProps) -> Html {
    let balance_tone = if props.balance >= 0.0 { "positive" } else { "negative" };
    html! {
        <div class="card panel">
            <div class="panel-header">
                <h3>{"Budget Overview"}</h3>
            </div>
            <div class="panel-body">
                {match &props.budget {
                    Some(budget) => html! {
                        <dl class="budget-rows">
                            <div class="budget-row">
                                <dt>{"Month"}</dt>
                                <dd>{&budget.month}</dd>
                            </div>
                            <div class="budget-row">
                                <dt>{"Opening Balance"}</dt>
                                <dd>{format_currency(budget.opening_balance)}</dd>
                            </div>
                            <div class="budget-row">
                                <dt>{"Current Balance"}</dt>
                                <dd class={balance_tone}>{format_currency(props.balance)}</dd>
                            </div>
                        </dl>
                    },
                    None => html! {
                        <p class="empty">{"No budget set. Create your first budget!"}</p>
                    },
                }}
            </div>
        </div>
    }
}
