use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="app-header">
            <div class="container">
                <div>
                    <h1>{"💰 Expense Tracker"}</h1>
                    <p class="subtitle">{"Manage your finances with ease"}</p>
                </div>
                <button class="btn btn-danger" {onclick}>{"Logout"}</button>
            </div>
        </header>
    }
}
