//! Account flows: login, profile, orders, addresses, logout.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lavanta_core::{ChangePasswordRequest, DefaultAddressKind};
use lavanta_integration_tests::TestContext;

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "bearer"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_then_orders_uses_the_fresh_token() {
    let ctx = TestContext::new().await;
    mount_login(&ctx.server, "fresh-token").await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"_id": "u1", "name": "Ayşe", "surname": "Yılmaz"})),
        )
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(header("Authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [{"id": "o1", "status": "processing", "total": 550.0}]
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let session = ctx
        .storefront
        .auth()
        .login("ayse@example.com", "parola")
        .await
        .expect("login");
    assert_eq!(session.user.and_then(|u| u.name), Some("Ayşe".to_owned()));

    let orders = ctx.storefront.orders().list().await.expect("orders");
    assert_eq!(orders.len(), 1);
    assert_eq!(
        orders.first().and_then(|o| o.status.as_deref()),
        Some("processing")
    );
}

#[tokio::test]
async fn password_change_round_trips_the_backend_message() {
    let ctx = TestContext::new().await;
    ctx.login_as("abc");
    Mock::given(method("PUT"))
        .and(path("/user/change-password"))
        .and(body_json(json!({
            "currentPassword": "eski-parola",
            "newPassword": "yeni-parola"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Şifreniz başarıyla güncellendi."})),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let response = ctx
        .storefront
        .profile()
        .change_password(&ChangePasswordRequest {
            current_password: "eski-parola".into(),
            new_password: "yeni-parola".into(),
        })
        .await
        .expect("password change");
    assert_eq!(response.message, "Şifreniz başarıyla güncellendi.");
}

#[tokio::test]
async fn default_address_assignment_targets_the_default_path() {
    let ctx = TestContext::new().await;
    ctx.login_as("abc");
    Mock::given(method("PUT"))
        .and(path("/addresses/a1/default"))
        .and(body_json(json!({"type": "both"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Varsayılan adres başarıyla ayarlandı."})),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.storefront
        .addresses()
        .set_default("a1", DefaultAddressKind::Both)
        .await
        .expect("default set");
}

#[tokio::test]
async fn logout_clears_the_session_and_hits_the_endpoint() {
    let ctx = TestContext::new().await;
    ctx.login_as("abc");
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Çıkış yapıldı."})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.storefront.auth().logout().await.expect("logout");
    assert!(!ctx.session.is_authenticated());
}

#[tokio::test]
async fn catalog_is_reachable_without_a_session() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "c1", "name": "Elbise", "slug": "elbise"}
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let categories = ctx.storefront.catalog().categories().await.expect("categories");
    assert_eq!(
        categories.first().and_then(|c| c.slug.as_deref()),
        Some("elbise")
    );

    let requests = ctx.server.received_requests().await.expect("recorded");
    assert!(requests.first().expect("request").headers.get("authorization").is_none());
}
