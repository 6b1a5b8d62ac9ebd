#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use portscope_core::{Protocol, Scope};
use portscope_server::api::{self, RangeResp, SetRangeReq};
use portscope_server::{app_state::AppState, config};

fn state(yaml: &str) -> AppState {
    AppState::new(&config::load_from_str(yaml).unwrap()).unwrap()
}

fn key(scope: &str, protocol: &str) -> Path<(String, String)> {
    Path((scope.to_string(), protocol.to_string()))
}

const PRELOADED: &str = r#"
version: 1
port_ranges:
  - { scope: default, protocol: udp, min: 2000, max: 3000 }
"#;

#[tokio::test]
async fn preloaded_default_is_inherited() {
    let st = state(PRELOADED);

    let Json(resp) = api::get_effective(State(st), key("web_rtc", "udp"))
        .await
        .unwrap();
    assert_eq!(
        resp,
        RangeResp { scope: Scope::WebRtcOnly, protocol: Protocol::Udp, min: 2000, max: 3000 }
    );
}

#[tokio::test]
async fn put_then_get_effective() {
    let st = state("version: 1\n");

    let status = api::put_range(
        State(st.clone()),
        key("default", "udp"),
        Ok(Json(SetRangeReq { min: 1025, max: 65535 })),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);

    api::put_range(
        State(st.clone()),
        key("web_rtc", "udp"),
        Ok(Json(SetRangeReq { min: 2000, max: 2100 })),
    )
    .await
    .unwrap();

    let Json(rtc) = api::get_effective(State(st.clone()), key("web_rtc", "udp")).await.unwrap();
    assert_eq!((rtc.min, rtc.max), (2000, 2100));
    let Json(def) = api::get_effective(State(st.clone()), key("default", "udp")).await.unwrap();
    assert_eq!((def.min, def.max), (1025, 65535));

    let Json(all) = api::list_ranges(State(st)).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].scope, Scope::Default);
}

#[tokio::test]
async fn rejected_put_keeps_prior_value() {
    let st = state(PRELOADED);

    let err = api::put_range(
        State(st.clone()),
        key("default", "udp"),
        Ok(Json(SetRangeReq { min: 500, max: 3000 })),
    )
    .await
    .expect_err("must fail");
    assert_eq!(err.0.client_code().as_str(), "INVALID_ARGUMENT");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    let Json(def) = api::get_effective(State(st), key("default", "udp")).await.unwrap();
    assert_eq!((def.min, def.max), (2000, 3000));
}

#[tokio::test]
async fn unknown_scope_or_protocol() {
    let st = state(PRELOADED);

    let err = api::get_effective(State(st.clone()), key("media", "udp"))
        .await
        .expect_err("must fail");
    assert_eq!(err.0.client_code().as_str(), "INVALID_ARGUMENT");

    let err = api::put_range(
        State(st),
        key("default", "tcp"),
        Ok(Json(SetRangeReq { min: 2000, max: 3000 })),
    )
    .await
    .expect_err("must fail");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn explicit_clear_hides_default() {
    let st = state(PRELOADED);

    api::put_range(
        State(st.clone()),
        key("web_rtc", "udp"),
        Ok(Json(SetRangeReq { min: 0, max: 0 })),
    )
    .await
    .unwrap();

    let Json(rtc) = api::get_effective(State(st), key("web_rtc", "udp")).await.unwrap();
    assert_eq!((rtc.min, rtc.max), (0, 0));
}

#[test]
fn preload_shares_options() {
    let st = state(PRELOADED);
    assert_eq!(st.options().snapshot().unwrap().len(), 1);
}
