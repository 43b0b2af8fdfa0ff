use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session::Session;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub api: ApiClient,
    pub session: Session,
}

/// Rough shape check, not RFC compliance: something before the @, a domain
/// with a dot after it.
fn email_looks_valid(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Login screen. On success the token goes into the session, which flips
/// the route gate; on failure an inline error shows and no token is stored.
#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| Option::<String>::None);
    let password_error = use_state(|| Option::<String>::None);
    let general_error = use_state(|| Option::<String>::None);
    let is_loading = use_state(|| false);

    // Typing into a field clears that field's error.
    let on_email = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            email_error.set(None);
        })
    };
    let on_password = {
        let password = password.clone();
        let password_error = password_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            password_error.set(None);
        })
    };

    let on_submit = {
        let api = props.api.clone();
        let session = props.session.clone();
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let general_error = general_error.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut valid = true;
            if email.is_empty() {
                email_error.set(Some("Email is required".into()));
                valid = false;
            } else if !email_looks_valid(&email) {
                email_error.set(Some("Email is invalid".into()));
                valid = false;
            }
            if password.is_empty() {
                password_error.set(Some("Password is required".into()));
                valid = false;
            } else if password.len() < 2 {
                password_error.set(Some("Password must be at least 2 characters".into()));
                valid = false;
            }
            if !valid {
                return;
            }

            is_loading.set(true);
            general_error.set(None);

            let api = api.clone();
            let session = session.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let general_error = general_error.clone();
            let is_loading = is_loading.clone();
            spawn_local(async move {
                match api.login(email_value, password_value).await {
                    Ok(response) => {
                        // The session listener flips the route gate.
                        session.set(response.token);
                    }
                    Err(err) => {
                        Logger::warn("login", &format!("login failed: {}", err));
                        general_error.set(Some("Login failed. Please try again.".into()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-header">
                    <h1>{"💰 ExpenseTracker"}</h1>
                    <p class="subtitle">{"Welcome back! Please sign in to your account"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    {if let Some(error) = &*general_error {
                        html! { <div class="form-error general">{error}</div> }
                    } else {
                        html! {}
                    }}

                    <div class="form-group">
                        <label for="email">{"Email Address"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            oninput={on_email}
                            disabled={*is_loading}
                        />
                        {if let Some(error) = &*email_error {
                            html! { <span class="field-error">{error}</span> }
                        } else {
                            html! {}
                        }}
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            value={(*password).clone()}
                            oninput={on_password}
                            disabled={*is_loading}
                        />
                        {if let Some(error) = &*password_error {
                            html! { <span class="field-error">{error}</span> }
                        } else {
                            html! {}
                        }}
                    </div>

                    <button type="submit" class="btn btn-primary submit-btn" disabled={*is_loading}>
                        {if *is_loading { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="login-footer">
                    <p>{"Don't have an account? Contact Admin"}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plausible_addresses_pass() {
        assert!(email_looks_valid("user@example.com"));
        assert!(email_looks_valid("a.b@sub.domain.org"));
    }

    #[test]
    fn malformed_addresses_fail() {
        for email in ["", "plain", "@nouser.com", "user@nodot", "user@.com", "a@b@c.com"] {
            assert!(!email_looks_valid(email), "{email}");
        }
    }
}
