use leptos::prelude::*;

use crate::models::RegisterBody;

/// Creates an account from email, password and profile fields.
#[server]
pub async fn register(body: RegisterBody) -> Result<(), ServerFnError> {
    forward(crate::registration::Endpoint::Register, body).await
}

/// Completes the profile of a user who signed in through an OAuth provider.
#[server]
pub async fn register_oauth(body: RegisterBody) -> Result<(), ServerFnError> {
    forward(crate::registration::Endpoint::RegisterOauth, body).await
}

#[cfg(feature = "ssr")]
async fn forward(
    endpoint: crate::registration::Endpoint,
    body: RegisterBody,
) -> Result<(), ServerFnError> {
    use crate::services::backend::Credentials;
    use crate::state::AppState;
    use axum::http::HeaderMap;
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let headers = extract::<HeaderMap>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // OAuth continuation relies on the session cookie (or bearer token) the
    // browser sent along with the server function call.
    let credentials = Credentials::from_headers(&headers);

    tracing::info!(
        endpoint = endpoint.path(),
        has_session = credentials.cookie.is_some() || credentials.authorization.is_some(),
        "forwarding registration"
    );
    state
        .backend
        .post_json(endpoint.path(), &body, &credentials)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
