//! Web service integration tests
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`, no
//! network involved. Only built with the `web-service` feature.

#![cfg(feature = "web-service")]

use std::fs;
use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use ferro_sv::service::{create_app, ServiceConfig};

const SV_VCF: &str = "\
##INFO=<ID=END,Number=1,Type=Integer,Description=\"End\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
22\t100\tsv1\tA\t<DEL>\t30\tPASS\tEND=150;SVTYPE=DEL
21\t500\tsv2\tC\t<DUP>\t.\tPASS\tEND=900;SVTYPE=DUP
";

fn data_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ferro-sv-web-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("calls.vcf"), SV_VCF).unwrap();
    dir
}

fn app_for(name: &str) -> axum::Router {
    let config = ServiceConfig {
        data_root: data_dir(name),
        ..ServiceConfig::default()
    };
    let (app, _state) = create_app(&config);
    app
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app_for("health");
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn table_endpoint_returns_rows() {
    let app = app_for("table");
    let response = app
        .oneshot(
            Request::get("/api/v1/table?file=calls.vcf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["matched"], 2);
    assert_eq!(json["rows"][0]["chrom"], "22");
    assert_eq!(json["rows"][0]["length"], 50);
}

#[tokio::test]
async fn table_endpoint_applies_filter() {
    let app = app_for("filter");
    let response = app
        .oneshot(
            Request::get("/api/v1/table?file=calls.vcf&filter=CHR:21")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["matched"], 1);
    assert_eq!(json["rows"][0]["id"], "sv2");
}

#[tokio::test]
async fn missing_file_maps_to_404() {
    let app = app_for("missing");
    let response = app
        .oneshot(
            Request::get("/api/v1/table?file=absent.vcf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn unsupported_suffix_maps_to_415() {
    let dir = data_dir("suffix");
    fs::write(dir.join("notes.txt"), "hello").unwrap();
    let config = ServiceConfig {
        data_root: dir,
        ..ServiceConfig::default()
    };
    let (app, _state) = create_app(&config);

    let response = app
        .oneshot(
            Request::get("/api/v1/table?file=notes.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn generations_increase_per_request() {
    let config = ServiceConfig {
        data_root: data_dir("generations"),
        ..ServiceConfig::default()
    };
    let (app, _state) = create_app(&config);

    let first = app
        .clone()
        .oneshot(
            Request::get("/api/v1/table?file=calls.vcf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let second = app
        .oneshot(
            Request::get("/api/v1/table?file=calls.vcf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let first = body_json(first).await;
    let second = body_json(second).await;
    assert!(second["generation"].as_u64() > first["generation"].as_u64());
}
