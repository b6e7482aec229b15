use std::sync::Arc;

use assetdesk_api::{
    application::http::server::{app_state::AppState, http_server::app_router},
    args::Args,
};
use assetdesk_core::{
    application::build_service,
    domain::{common::InventoryConfig, device::Device},
    infrastructure::db::postgres::{Postgres, PostgresConfig},
};
use axum::http::StatusCode;
use axum_test::TestServer;
use base64::{Engine as _, engine::general_purpose};
use clap::Parser;
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};

const BASE_URL: &str = "http://assets.test";

async fn test_server(identity: &str) -> TestServer {
    let args = Args::parse_from([
        "assetdesk-api",
        "--public-base-url",
        BASE_URL,
        "--qr-identity",
        identity,
        "--qr-size",
        "120",
    ]);
    let config = InventoryConfig::from(args.clone());

    let postgres = Postgres::new(PostgresConfig {
        database_url: "sqlite::memory:".to_string(),
    })
    .await
    .unwrap();
    let service = build_service(postgres.get_db(), config.qr);

    TestServer::new(app_router(AppState::new(Arc::new(args), service))).unwrap()
}

fn decode_qr(data_url: &str) -> String {
    let encoded = data_url
        .strip_prefix("data:image/png;base64,")
        .expect("png data url");
    let bytes = general_purpose::STANDARD.decode(encoded).unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_luma8();

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    let (_, content) = grids[0].decode().unwrap();
    content
}

struct CodeContext {
    server: TestServer,
}

impl AsyncTestContext for CodeContext {
    async fn setup() -> CodeContext {
        CodeContext {
            server: test_server("code").await,
        }
    }
}

struct IdContext {
    server: TestServer,
}

impl AsyncTestContext for IdContext {
    async fn setup() -> IdContext {
        IdContext {
            server: test_server("id").await,
        }
    }
}

async fn create(server: &TestServer, code: &str) -> Device {
    let response = server
        .post("/api/devices")
        .json(&json!({
            "name": format!("เครื่อง {code}"),
            "code": code,
            "brand": "Dell",
            "model": "Latitude",
            "price": 25900.0
        }))
        .await;
    response.assert_status_ok();
    response.json::<Device>()
}

#[test_context(IdContext)]
#[tokio::test]
async fn test_create_with_custom_code_under_id_strategy(ctx: &mut IdContext) {
    let payload = json!({
        "brand": "Dell",
        "model": "Latitude",
        "customCode": "PC-001",
        "type": "คอมพิวเตอร์",
        "location": "พัสดุ"
    });

    let response = ctx.server.post("/api/devices").json(&payload).await;
    response.assert_status_ok();
    let device = response.json::<Value>();

    let id = device["id"].as_i64().expect("integer id");
    assert_eq!(device["code"], "PC-001");
    assert_eq!(device["type"], "คอมพิวเตอร์");
    let qr = device["qrCode"].as_str().expect("qr code attached");
    assert_eq!(decode_qr(qr), format!("{BASE_URL}/device/{id}"));

    let duplicate = ctx.server.post("/api/devices").json(&payload).await;
    duplicate.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.json::<Value>()["message"], "รหัสอุปกรณ์ซ้ำ ไม่สามารถบันทึกได้");
}

#[test_context(IdContext)]
#[tokio::test]
async fn test_public_page_by_id(ctx: &mut IdContext) {
    let response = ctx
        .server
        .post("/api/devices")
        .json(&json!({
            "brand": "HP",
            "model": "LaserJet",
            "code": "PR-001",
            "type": "ปริ้นเตอร์",
            "location": "การเงิน"
        }))
        .await;
    let device = response.json::<Device>();

    let page = ctx.server.get(&format!("/device/{}", device.id)).await;
    page.assert_status_ok();
    assert!(page.text().contains("PR-001"));

    let by_code = ctx.server.get("/device/PR-001").await;
    by_code.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_create_encodes_code_in_qr(ctx: &mut CodeContext) {
    let device = create(&ctx.server, "NB 01").await;

    let qr = device.qr_code.expect("qr code attached");
    assert_eq!(decode_qr(&qr), format!("{BASE_URL}/device/NB%2001"));
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_create_reports_missing_fields(ctx: &mut CodeContext) {
    let response = ctx
        .server
        .post("/api/devices")
        .json(&json!({ "code": "PC-009", "brand": "  " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["status"], 400);
    assert_eq!(
        body["message"],
        "กรุณาระบุข้อมูลให้ครบถ้วน: name, brand, model"
    );
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_create_rejects_negative_price(ctx: &mut CodeContext) {
    let response = ctx
        .server
        .post("/api/devices")
        .json(&json!({
            "name": "UPS",
            "code": "UPS-01",
            "brand": "APC",
            "model": "Back-UPS",
            "price": -10
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_list_is_newest_first(ctx: &mut CodeContext) {
    let first = create(&ctx.server, "PC-001").await;
    let second = create(&ctx.server, "PC-002").await;

    let devices = ctx.server.get("/api/devices").await.json::<Vec<Device>>();

    let ids: Vec<i32> = devices.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_get_by_id_and_code(ctx: &mut CodeContext) {
    let device = create(&ctx.server, "PC-001").await;

    let by_id = ctx.server.get(&format!("/api/devices/{}", device.id)).await;
    by_id.assert_status_ok();
    assert_eq!(by_id.json::<Device>().code, "PC-001");

    let by_code = ctx.server.get("/api/devices/code/PC-001").await;
    by_code.assert_status_ok();
    assert_eq!(by_code.json::<Device>().id, device.id);

    let missing = ctx.server.get("/api/devices/9999").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(missing.json::<Value>()["message"], "ไม่พบอุปกรณ์");

    ctx.server
        .get("/api/devices/code/NOPE")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_update_code_regenerates_qr(ctx: &mut CodeContext) {
    let device = create(&ctx.server, "PC-001").await;

    let response = ctx
        .server
        .put(&format!("/api/devices/{}", device.id))
        .json(&json!({ "code": "PC-100", "location": "ห้องไอที" }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Device>();

    assert_eq!(updated.code, "PC-100");
    assert_eq!(updated.brand, "Dell");
    assert_eq!(
        decode_qr(updated.qr_code.as_deref().unwrap()),
        format!("{BASE_URL}/device/PC-100")
    );
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_update_null_clears_optional_fields(ctx: &mut CodeContext) {
    let device = create(&ctx.server, "PC-001").await;
    assert_eq!(device.price, Some(25900.0));

    let response = ctx
        .server
        .put(&format!("/api/devices/{}", device.id))
        .json(&json!({ "price": null, "location": null }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();
    assert_eq!(updated["price"], Value::Null);
    assert_eq!(updated["location"], Value::Null);

    let untouched = ctx
        .server
        .put(&format!("/api/devices/{}", device.id))
        .json(&json!({ "price": 100, "createdAt": "2024-03-01T08:30:00Z" }))
        .await
        .json::<Device>();
    assert_eq!(untouched.price, Some(100.0));
    assert_eq!(untouched.created_at.to_rfc3339(), "2024-03-01T08:30:00+00:00");

    let kept = ctx
        .server
        .put(&format!("/api/devices/{}", device.id))
        .json(&json!({ "details": "ชั้น 3" }))
        .await
        .json::<Device>();
    assert_eq!(kept.price, Some(100.0));
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_non_numeric_id_is_json_bad_request(ctx: &mut CodeContext) {
    let response = ctx.server.get("/api/devices/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["status"], 400);
    assert!(body["message"].as_str().unwrap().starts_with("รหัสอุปกรณ์ไม่ถูกต้อง"));

    ctx.server
        .delete("/api/devices/abc")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_update_duplicate_code(ctx: &mut CodeContext) {
    let first = create(&ctx.server, "PC-001").await;
    let second = create(&ctx.server, "PC-002").await;

    ctx.server
        .put(&format!("/api/devices/{}", second.id))
        .json(&json!({ "code": "PC-001" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    ctx.server
        .put(&format!("/api/devices/{}", first.id))
        .json(&json!({ "code": "PC-001", "details": "ตั้งอยู่ชั้น 2" }))
        .await
        .assert_status_ok();

    ctx.server
        .put("/api/devices/9999")
        .json(&json!({ "brand": "Lenovo" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_delete_device(ctx: &mut CodeContext) {
    let device = create(&ctx.server, "PC-001").await;

    let response = ctx.server.delete(&format!("/api/devices/{}", device.id)).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "ลบข้อมูลอุปกรณ์เรียบร้อยแล้ว"
    );

    ctx.server
        .get(&format!("/api/devices/{}", device.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .delete(&format!("/api/devices/{}", device.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_regenerate_qr(ctx: &mut CodeContext) {
    let device = create(&ctx.server, "PC-001").await;

    let response = ctx
        .server
        .post(&format!("/api/devices/{}/qrcode", device.id))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["message"], "สร้าง QR Code ใหม่เรียบร้อย");
    assert_eq!(body["qrCode"], body["device"]["qrCode"]);
    assert_eq!(body["device"]["brand"], "Dell");
    assert_eq!(
        decode_qr(body["qrCode"].as_str().unwrap()),
        format!("{BASE_URL}/device/PC-001")
    );

    ctx.server
        .post("/api/devices/9999/qrcode")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_public_page_by_code(ctx: &mut CodeContext) {
    create(&ctx.server, "PC-001").await;

    let page = ctx.server.get("/device/PC-001").await;
    page.assert_status_ok();
    let html = page.text();
    assert!(html.contains("<title>เครื่อง PC-001</title>"));
    assert!(html.contains("data:image/png;base64,"));

    let missing = ctx.server.get("/device/PC-404").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert!(missing.text().contains("PC-404"));
}

#[test_context(CodeContext)]
#[tokio::test]
async fn test_config_and_health(ctx: &mut CodeContext) {
    let config = ctx.server.get("/config").await.json::<Value>();
    assert_eq!(config["publicBaseUrl"], BASE_URL);
    assert_eq!(config["identity"], "code");
    assert_eq!(config["deviceTypes"].as_array().map(Vec::len), Some(7));
    assert_eq!(config["locations"].as_array().map(Vec::len), Some(8));

    ctx.server.get("/health/live").await.assert_status_ok();
    let ready = ctx.server.get("/health/ready").await.json::<Value>();
    assert_eq!(ready["status"], "UP");
}
