//! HTTP handlers for the allowed port-range operations.
//!
//! - `PUT /v1/port-ranges/:scope/:protocol` : set (body `{"min","max"}`, `0,0` clears)
//! - `GET /v1/port-ranges/:scope/:protocol/effective` : resolved range
//! - `GET /v1/port-ranges` : explicit entries
//!
//! Path segments use the text forms (`default`, `web_rtc`, `udp`).

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use portscope_core::error::{ClientCode, PortScopeError, Result};
use portscope_core::{Protocol, Scope};

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetRangeReq {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RangeResp {
    pub scope: Scope,
    pub protocol: Protocol,
    pub min: u16,
    pub max: u16,
}

/// Error response wrapper: `{"code": ..., "msg": ...}`.
#[derive(Debug)]
pub struct ApiError(pub PortScopeError);

impl From<PortScopeError> for ApiError {
    fn from(e: PortScopeError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::InvalidArgument | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({
            "code": code.as_str(),
            "msg": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

fn parse_key(scope: &str, protocol: &str) -> Result<(Scope, Protocol)> {
    Ok((scope.parse()?, protocol.parse()?))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn put_range(
    State(state): State<AppState>,
    Path((scope, protocol)): Path<(String, String)>,
    body: std::result::Result<Json<SetRangeReq>, JsonRejection>,
) -> std::result::Result<StatusCode, ApiError> {
    let Json(req) = body.map_err(|rej| {
        tracing::warn!(%scope, %protocol, error = %rej.body_text(), "set port range body rejected");
        PortScopeError::InvalidArgument(rej.body_text())
    })?;
    let res = parse_key(&scope, &protocol)
        .and_then(|(s, p)| state.options().set_range(s, p, req.min, req.max));
    if let Err(e) = res {
        tracing::warn!(
            %scope, %protocol, min = req.min, max = req.max, error = %e,
            "set port range rejected"
        );
        return Err(e.into());
    }
    tracing::info!(%scope, %protocol, min = req.min, max = req.max, "port range updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_effective(
    State(state): State<AppState>,
    Path((scope, protocol)): Path<(String, String)>,
) -> std::result::Result<Json<RangeResp>, ApiError> {
    let (scope, protocol) = parse_key(&scope, &protocol)?;
    let range = state.options().effective_range(scope, protocol)?;
    Ok(Json(RangeResp {
        scope,
        protocol,
        min: range.min(),
        max: range.max(),
    }))
}

pub async fn list_ranges(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<RangeResp>>, ApiError> {
    let entries = state
        .options()
        .snapshot()?
        .into_iter()
        .map(|(key, range)| RangeResp {
            scope: key.scope,
            protocol: key.protocol,
            min: range.min(),
            max: range.max(),
        })
        .collect();
    Ok(Json(entries))
}
