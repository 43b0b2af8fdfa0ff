use shared::Transaction;
use yew::prelude::*;

use crate::services::format::{format_currency, format_date};

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
    pub on_edit: Callback<Transaction>,
    pub on_delete: Callback<String>,
}

/// Compact "Recent Transactions" panel: the ten most recent entries with
/// edit/delete controls.
#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    html! {
        <div class="card panel">
            <div class="panel-header">
                <h3>{"Recent Transactions"}</h3>
            </div>
            <div class="panel-body scrollable">
                {if props.transactions.is_empty() {
                    html! { <p class="empty">{"No transactions yet. Add your first transaction!"}</p> }
                } else {
                    html! {
                        <>
                            {for props.transactions.iter().take(10).map(|tx| {
                                let sign = if tx.transaction_type.is_credit() { "+" } else { "-" };
                                let tone = if tx.transaction_type.is_credit() { "positive" } else { "negative" };
                                let on_edit = {
                                    let on_edit = props.on_edit.clone();
                                    let tx = tx.clone();
                                    Callback::from(move |_: MouseEvent| on_edit.emit(tx.clone()))
                                };
                                let on_delete = {
                                    let on_delete = props.on_delete.clone();
                                    let id = tx.id.clone();
                                    Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                                };
                                html! {
                                    <div key={tx.id.clone()} class="list-row">
                                        <div class="list-main">
                                            <p class="list-title">{&tx.description}</p>
                                            <p class="list-meta">{format_date(&tx.date)}</p>
                                        </div>
                                        <span class={format!("list-amount {}", tone)}>
                                            {format!("{}{}", sign, format_currency(tx.amount))}
                                        </span>
                                        <div class="list-actions">
                                            <button class="icon-btn" title="Edit transaction" onclick={on_edit}>{"✎"}</button>
                                            <button class="icon-btn danger" title="Delete transaction" onclick={on_delete}>{"🗑"}</button>
                                        </div>
                                    </div>
                                }
                            })}
                        </>
                    }
                }}
            </div>
        </div>
    }
}
