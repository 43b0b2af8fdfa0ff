use yew::prelude::*;

use crate::components::{Dashboard, Login, Report};
use crate::services::api::ApiClient;
use crate::services::session::{self, Session};

/// Views the client can show. Resolved per render from the requested view
/// plus token presence, so the gate flips the moment the session changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Dashboard,
    Report,
}

#[function_component(App)]
pub fn app() -> Html {
    let token = use_state(session::stored_token);
    let route = use_state(|| Route::Dashboard);

    let on_session_change = {
        let token = token.clone();
        Callback::from(move |next: Option<String>| token.set(next))
    };
    let session = Session::new((*token).clone(), on_session_change);
    let api = ApiClient::new(session.clone());

    // 401s and logout funnel through here: drop the token, land on the
    // dashboard route so the gate shows login.
    let on_session_invalid = {
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |_: ()| {
            session.clear();
            route.set(Route::Dashboard);
        })
    };
    let goto_report = {
        let route = route.clone();
        Callback::from(move |_: ()| route.set(Route::Report))
    };
    let goto_dashboard = {
        let route = route.clone();
        Callback::from(move |_: ()| route.set(Route::Dashboard))
    };

    match *route {
        // The report route is reachable without a token; it shows its own
        // inline error instead of data.
        Route::Report => html! {
            <Report
                api={api}
                session={session}
                on_back={goto_dashboard}
                on_session_invalid={on_session_invalid}
            />
        },
        Route::Dashboard if session.is_authenticated() => html! {
            <Dashboard
                api={api}
                on_session_invalid={on_session_invalid}
                on_view_report={goto_report}
            />
        },
        Route::Dashboard => html! {
            <Login api={api} session={session} />
        },
    }
}
