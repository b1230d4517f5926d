/// Shared-secret gate for the ingestion endpoint. The key can be supplied
/// either via the `X-Api-Key` header or the `api_key` query parameter.
pub struct ApiKey;

#[async_trait::async_trait]
impl axum::extract::FromRequestParts<std::sync::Arc<crate::api::ApiState>> for ApiKey {
    type Rejection = (
        axum::http::StatusCode,
        axum::response::Json<common::ErrorResponse>,
    );

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &std::sync::Arc<crate::api::ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get("x-api-key")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_owned())
            .or_else(|| query_api_key(parts.uri.query().unwrap_or("")));

        match provided {
            Some(key) if key == state.config.api_key => Ok(Self),
            _ => {
                tracing::error!("Rejecting request with missing or wrong api key");
                Err((
                    axum::http::StatusCode::UNAUTHORIZED,
                    axum::Json(common::ErrorResponse {
                        error: "Unauthorized".to_owned(),
                    }),
                ))
            }
        }
    }
}

fn query_api_key(query: &str) -> Option<String> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("api_key="))
        .map(|value| value.to_owned())
}
