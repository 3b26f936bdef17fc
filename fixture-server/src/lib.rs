//! REST fixture service for the contract-test suite.
//!
//! # Design
//! Serves the five seeded collections (users, posts, comments, albums,
//! todos) with the permissive semantics of the public fixture service:
//! reads are backed by real data, writes are faked. A create echoes the
//! submitted body with the next identifier, a replace echoes body plus id,
//! a patch merges into the stored record, and a delete answers 200 without
//! removing anything. Server state never mutates, so one instance can back
//! many concurrent test threads.
//!
//! Unknown-id behavior matches the live service: GET and DELETE answer
//! 404 `{}`, PUT answers 500 (the service fails replacing what is not
//! there), PATCH merges into an empty object.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

pub mod data;

use data::Fixtures;

type Shared = Arc<Fixtures>;

pub fn app() -> Router {
    let fixtures: Shared = Arc::new(Fixtures::seed());
    Router::new()
        .route("/{resource}", get(list_collection).post(create_item))
        .route(
            "/{resource}/{id}",
            get(get_item).put(replace_item).patch(patch_item).delete(delete_item),
        )
        .with_state(fixtures)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({})))
}

fn find<'a>(items: &'a [Value], id: i64) -> Option<&'a Value> {
    items.iter().find(|item| item["id"] == json!(id))
}

/// Treat the submitted body as an object, the way the live service does;
/// anything else contributes no fields.
fn as_object(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

async fn list_collection(
    State(fixtures): State<Shared>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let Some(items) = fixtures.collection(&resource) else {
        return not_found();
    };
    if let Some(key) = fixtures.owner_key(&resource) {
        if let Some(raw) = params.get(key) {
            // An unparseable owner id matches nothing.
            let filtered: Vec<Value> = match raw.parse::<i64>() {
                Ok(owner) => items
                    .iter()
                    .filter(|item| item[key] == json!(owner))
                    .cloned()
                    .collect(),
                Err(_) => Vec::new(),
            };
            return (StatusCode::OK, Json(Value::Array(filtered)));
        }
    }
    (StatusCode::OK, Json(Value::Array(items.to_vec())))
}

async fn get_item(
    State(fixtures): State<Shared>,
    Path((resource, id)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    let Some(items) = fixtures.collection(&resource) else {
        return not_found();
    };
    let Ok(id) = id.parse::<i64>() else {
        return not_found();
    };
    match find(items, id) {
        Some(item) => (StatusCode::OK, Json(item.clone())),
        None => not_found(),
    }
}

async fn create_item(
    State(fixtures): State<Shared>,
    Path(resource): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let Some(items) = fixtures.collection(&resource) else {
        return not_found();
    };
    let next_id = items.len() as i64 + 1;
    let mut created = as_object(body);
    created.insert("id".to_string(), json!(next_id));
    (StatusCode::CREATED, Json(Value::Object(created)))
}

async fn replace_item(
    State(fixtures): State<Shared>,
    Path((resource, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let Some(items) = fixtures.collection(&resource) else {
        return not_found();
    };
    let existing = id.parse::<i64>().ok().and_then(|id| find(items, id));
    match existing {
        Some(item) => {
            let mut replaced = as_object(body);
            replaced.insert("id".to_string(), item["id"].clone());
            (StatusCode::OK, Json(Value::Object(replaced)))
        }
        // The live service errors out replacing a record that is not there.
        None => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))),
    }
}

async fn patch_item(
    State(fixtures): State<Shared>,
    Path((resource, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let Some(items) = fixtures.collection(&resource) else {
        return not_found();
    };
    let mut merged = match id.parse::<i64>().ok().and_then(|id| find(items, id)) {
        Some(item) => as_object(item.clone()),
        None => Map::new(),
    };
    for (field, value) in as_object(body) {
        merged.insert(field, value);
    }
    (StatusCode::OK, Json(Value::Object(merged)))
}

async fn delete_item(
    State(fixtures): State<Shared>,
    Path((resource, id)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    let Some(items) = fixtures.collection(&resource) else {
        return not_found();
    };
    let existing = id.parse::<i64>().ok().and_then(|id| find(items, id));
    match existing {
        Some(_) => (StatusCode::OK, Json(json!({}))),
        None => not_found(),
    }
}
