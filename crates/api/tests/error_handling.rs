//! Tests for the JSON error envelope across the API surface.

mod common;

use axum::http::StatusCode;
use common::{delete, expect_json, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_resource_returns_not_found_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in [
        "/api/v1/clients/9999",
        "/api/v1/composants/9999",
        "/api/v1/produits/9999",
        "/api/v1/projets/9999",
    ] {
        let json = expect_json(get(app.clone(), uri).await, StatusCode::NOT_FOUND).await;
        assert_eq!(json["code"], "NOT_FOUND", "uri: {uri}");
        assert!(json["error"].is_string(), "uri: {uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn updating_a_missing_resource_returns_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = expect_json(
        put_json(
            app,
            "/api/v1/produits/9999",
            serde_json::json!({ "prix_vente_total": 100 }),
        )
        .await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_missing_resource_returns_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = expect_json(
        delete(app, "/api/v1/clients/9999").await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn creating_a_projet_for_a_missing_client_fails(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Foreign key violation on client_id; not a uq_ constraint, so it
    // surfaces as a sanitized internal error rather than a conflict.
    let json = expect_json(
        post_json(
            app,
            "/api/v1/projets",
            serde_json::json!({ "client_id": 9999, "nom": "Orphelin" }),
        )
        .await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_body_is_rejected(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = common::build_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/clients")
                .header("content-type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn link_delete_is_scoped_to_its_project(pool: PgPool) {
    let app = common::build_test_app(pool);

    let client = expect_json(
        post_json(
            app.clone(),
            "/api/v1/clients",
            serde_json::json!({ "nom": "Durand" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let produit = expect_json(
        post_json(
            app.clone(),
            "/api/v1/produits",
            serde_json::json!({ "nom": "Etagere", "prix_vente_total": 4500 }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let mut projet_ids = Vec::new();
    for nom in ["Projet A", "Projet B"] {
        let projet = expect_json(
            post_json(
                app.clone(),
                "/api/v1/projets",
                serde_json::json!({ "client_id": client["id"], "nom": nom }),
            )
            .await,
            StatusCode::CREATED,
        )
        .await;
        projet_ids.push(projet["id"].as_i64().unwrap());
    }

    let link = expect_json(
        post_json(
            app.clone(),
            &format!("/api/v1/projets/{}/produits", projet_ids[0]),
            serde_json::json!({ "produit_id": produit["id"] }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let link_id = link["id"].as_i64().unwrap();

    // Deleting through the wrong project must not find the link.
    let json = expect_json(
        delete(
            app.clone(),
            &format!("/api/v1/projets/{}/produits/{link_id}", projet_ids[1]),
        )
        .await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(json["code"], "NOT_FOUND");

    // Through the right project it works.
    let response = delete(
        app,
        &format!("/api/v1/projets/{}/produits/{link_id}", projet_ids[0]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
