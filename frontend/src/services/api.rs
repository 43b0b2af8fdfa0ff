use gloo::net::http::{Request, RequestBuilder, Response};
use shared::{
    Budget, BudgetPayload, LoginRequest, LoginResponse, RecurringListResponse, RecurringPayload,
    RecurringRule, RecurringUpdatePayload, SixMonthResponse, Transaction, TransactionPayload,
    TransactionSummary,
};
use thiserror::Error;

use crate::services::session::Session;

/// The external API server every request goes to.
const API_BASE_URL: &str = "https://expense-server-neoq.onrender.com";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// A 401 anywhere means the session is invalid and forces a logout.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status(401))
    }
}

/// Gateway to the expense API. Builds authenticated JSON requests against a
/// fixed base URL; any status outside 2xx is an error carrying the status.
/// No retries here; callers decide recovery.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            session,
        }
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: String, session: Session) -> Self {
        Self { base_url, session }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when the session has one; otherwise the
    /// request goes out unauthenticated (the login call relies on this).
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn check(response: Result<Response, gloo::net::Error>) -> Result<Response, ApiError> {
        let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }

    async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let request = self.authorize(Request::get(&self.url(path)));
        Self::check(request.send().await).await
    }

    async fn send_json<B: serde::Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(request.send().await).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest { email, password };
        let response = self
            .send_json(Request::post(&self.url("/api/users/login")), &request)
            .await?;
        Self::decode(response).await
    }

    /// Best-effort: callers ignore the result beyond logging.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = self.authorize(Request::post(&self.url("/api/user/logout")));
        Self::check(request.send().await).await?;
        Ok(())
    }

    /// Full transaction list plus the server-computed budget stats.
    pub async fn transactions(&self) -> Result<TransactionSummary, ApiError> {
        let response = self.get("/api/transactions").await?;
        Self::decode(response).await
    }

    pub async fn create_transaction(&self, payload: &TransactionPayload) -> Result<(), ApiError> {
        self.send_json(Request::post(&self.url("/api/transactions")), payload)
            .await?;
        Ok(())
    }

    pub async fn update_transaction(
        &self,
        id: &str,
        payload: &TransactionPayload,
    ) -> Result<(), ApiError> {
        let path = format!("/api/transactions/{}", id);
        self.send_json(Request::put(&self.url(&path)), payload)
            .await?;
        Ok(())
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/transactions/{}", id);
        let request = self.authorize(Request::delete(&self.url(&path)));
        Self::check(request.send().await).await?;
        Ok(())
    }

    /// The six-month report slice, normalized from either wire shape.
    pub async fn last_six_months(&self) -> Result<Vec<Transaction>, ApiError> {
        let response = self.get("/api/transactions/last-six-months").await?;
        let body: SixMonthResponse = Self::decode(response).await?;
        Ok(body.into_transactions())
    }

    /// Recurring rules, normalized from either wire shape.
    pub async fn recurring(&self) -> Result<Vec<RecurringRule>, ApiError> {
        let response = self.get("/api/recurring").await?;
        let body: RecurringListResponse = Self::decode(response).await?;
        Ok(body.into_rules())
    }

    pub async fn create_recurring(&self, payload: &RecurringPayload) -> Result<(), ApiError> {
        self.send_json(Request::post(&self.url("/api/recurring")), payload)
            .await?;
        Ok(())
    }

    pub async fn update_recurring(
        &self,
        id: &str,
        payload: &RecurringUpdatePayload,
    ) -> Result<(), ApiError> {
        let path = format!("/api/recurring/{}", id);
        self.send_json(Request::put(&self.url(&path)), payload)
            .await?;
        Ok(())
    }

    pub async fn delete_recurring(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/recurring/{}", id);
        let request = self.authorize(Request::delete(&self.url(&path)));
        Self::check(request.send().await).await?;
        Ok(())
    }

    /// The current budget, or `None` when the server answers `null`.
    pub async fn budget(&self) -> Result<Option<Budget>, ApiError> {
        let response = self.get("/api/budget").await?;
        Self::decode(response).await
    }

    pub async fn save_budget(&self, payload: &BudgetPayload) -> Result<(), ApiError> {
        self.send_json(Request::post(&self.url("/api/budget")), payload)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::Callback;

    fn client() -> ApiClient {
        ApiClient::with_base_url(
            "http://localhost:5000".into(),
            Session::new(None, Callback::noop()),
        )
    }

    #[test]
    fn urls_join_base_and_path() {
        assert_eq!(
            client().url("/api/transactions"),
            "http://localhost:5000/api/transactions"
        );
    }

    #[test]
    fn only_401_counts_as_unauthorized() {
        assert!(ApiError::Status(401).is_unauthorized());
        assert!(!ApiError::Status(500).is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
