use yew::Callback;

/// Key the bearer token is persisted under in browser local storage. The
/// only client-side persistence in the app.
const TOKEN_KEY: &str = "token";

/// Read the persisted token, if any. Unreadable storage counts as absent.
pub fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok().flatten()
}

fn write_token(token: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

fn remove_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Explicit session context handed to the API gateway and the route gate.
///
/// Holds the token snapshot for the current render plus a listener that is
/// notified synchronously whenever token presence changes, so the gate flips
/// without a reload or navigation.
#[derive(Clone, PartialEq)]
pub struct Session {
    token: Option<String>,
    on_change: Callback<Option<String>>,
}

impl Session {
    pub fn new(token: Option<String>, on_change: Callback<Option<String>>) -> Self {
        Self { token, on_change }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Persist a freshly issued token and notify the listener.
    pub fn set(&self, token: String) {
        write_token(&token);
        self.on_change.emit(Some(token));
    }

    /// Drop the token. Idempotent; used by logout and by any 401.
    pub fn clear(&self) {
        remove_token();
        self.on_change.emit(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_exposes_token_presence() {
        let session = Session::new(Some("abc".into()), Callback::noop());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));

        let session = Session::new(None, Callback::noop());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }
}
