use shared::Transaction;
use yew::prelude::*;

use crate::services::format::{format_currency, format_date};

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub on_edit: Callback<Transaction>,
    pub on_delete: Callback<String>,
}

/// Full "All Transactions" table with per-row edit/delete actions.
#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <div class="card panel table-panel">
            <div class="panel-header">
                <h3>{"All Transactions"}</h3>
            </div>
            {if props.loading {
                html! { <p class="empty">{"Loading transactions..."}</p> }
            } else if props.transactions.is_empty() {
                html! { <p class="empty">{"No transactions found. Add your first transaction above."}</p> }
            } else {
                html! {
                    <div class="table-container">
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Description"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.transactions.iter().map(|tx| {
                                    let badge = if tx.transaction_type.is_credit() {
                                        ("badge positive", "Income")
                                    } else {
                                        ("badge negative", "Expense")
                                    };
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
                                        <tr key={tx.id.clone()}>
                                            <td>{&tx.description}</td>
                                            <td class="muted">{format_date(&tx.date)}</td>
                                            <td><span class={badge.0}>{badge.1}</span></td>
                                            <td class="amount">{format_currency(tx.amount)}</td>
                                            <td>
                                                <button class="icon-btn" title="Edit transaction" onclick={on_edit}>{"✎"}</button>
                                                <button class="icon-btn danger" title="Delete transaction" onclick={on_delete}>{"🗑"}</button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </div>
    }
}
