pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::resume::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(handlers::handle_get_resume))
        .route("/api/v1/resume/markdown", get(handlers::handle_get_markdown))
        .route("/api/v1/resume/project", post(handlers::handle_project))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::models::resume::ResumeRecord;
    use crate::resume::projector::ProjectionConfig;

    const AUTHORED: &str = include_str!("../../content/resume.json");

    fn make_state(projection: ProjectionConfig) -> AppState {
        let raw: Value = serde_json::from_str(AUTHORED).unwrap();
        AppState {
            record: Arc::new(ResumeRecord::from_value(raw).unwrap()),
            config: Config {
                resume_path: "content/resume.json".into(),
                port: 8080,
                rust_log: "info".to_string(),
                projection,
                resume_heading: "Christian Danielsen".to_string(),
            },
        }
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let (status, body) = get_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_get_resume_full_form() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let (status, body) = get_json(app, "/api/v1/resume").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["experience"].as_array().unwrap().len(), 4);
        assert_eq!(body["education"][0]["date"], 2019);
        assert_eq!(
            body["personalInterests"],
            "Long Distance Backpacking | Urban Dodgeball | High Risk Juggling"
        );
        assert!(body.get("contactInformation").is_none());
    }

    #[tokio::test]
    async fn test_server_default_short_form() {
        let app = build_router(make_state(ProjectionConfig::short_form(2)));
        let (_, body) = get_json(app, "/api/v1/resume").await;
        let companies: Vec<_> = body["experience"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["company"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(companies, vec!["Insitu", "InComm"]);
    }

    #[tokio::test]
    async fn test_query_overrides_defaults() {
        let app = build_router(make_state(ProjectionConfig::short_form(2)));
        let (status, body) = get_json(
            app,
            "/api/v1/resume?max_recent=1&education_order=historical_reverse",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["experience"].as_array().unwrap().len(), 1);
        let years: Vec<_> = body["education"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["date"].as_i64().unwrap())
            .collect();
        assert_eq!(years, vec![2019, 2017, 2014, 2009, 2005]);
    }

    #[tokio::test]
    async fn test_negative_bound_is_400() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let (status, body) = get_json(app, "/api/v1/resume?max_recent=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_CONFIG");
    }

    #[tokio::test]
    async fn test_unknown_education_order_is_400() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let (status, _) = get_json(app, "/api/v1/resume?education_order=random").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_markdown_rendering() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let req = Request::get("/api/v1/resume/markdown")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );

        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let md = String::from_utf8(body.to_vec()).unwrap();
        assert!(md.starts_with("# Christian Danielsen\n"));
        assert!(md.contains(
            "2019 - GraphQL Intensive Workshop (16 hrs), Cascadia JS 2019, Seattle, WA\n"
        ));
    }

    fn post_project(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_project_supplied_record() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let record = json!({
            "tagLine": "Tester",
            "technicalSkills": [{ "label": "Testing", "content": ["A", "B", "C"] }],
            "webdevExperience": [],
            "education": [
                { "type": "degree", "title": "a", "institution": "i", "location": "l", "date": 2005 },
                { "type": "degree", "title": "b", "institution": "i", "location": "l", "date": 2019 },
                { "type": "degree", "title": "c", "institution": "i", "location": "l", "date": 2009 }
            ],
            "personalInterests": ["X", "Y"],
            "contactInformation": ["me@example.com"]
        });

        let (status, body) = send(app, post_project("/api/v1/resume/project", &record)).await;
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["technicalSkills"][0]["content"], "A, B, C");
        assert_eq!(body["personalInterests"], "X | Y");
        assert_eq!(body["contactInformation"], "me@example.com");
        assert_eq!(body["education"][1]["date"], 2009);
    }

    #[tokio::test]
    async fn test_project_malformed_record_is_422() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let record = json!({
            "tagLine": "Tester",
            "technicalSkills": [],
            "webdevExperience": [],
            "education": [
                { "type": "degree", "title": "a", "institution": "i", "location": "l", "date": "not-a-year" }
            ]
        });

        let (status, body) = send(app, post_project("/api/v1/resume/project", &record)).await;
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "MALFORMED_RECORD");
    }

    #[tokio::test]
    async fn test_non_integer_bound_is_invalid_config() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let (status, body) = get_json(app, "/api/v1/resume?max_recent=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_CONFIG");
        assert!(body["error"]["message"].as_str().unwrap().contains("query string"));
    }

    #[tokio::test]
    async fn test_markdown_non_integer_bound_is_invalid_config() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let (status, body) = get_json(app, "/api/v1/resume/markdown?max_recent=2.5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_CONFIG");
    }

    #[tokio::test]
    async fn test_project_unparseable_body_is_malformed_record() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let req = Request::post("/api/v1/resume/project")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ tagLine: "))
            .unwrap();

        let (status, body) = send(app, req).await;
        let body: Value = serde_json::from_slice(&body).expect("error body must be JSON");
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "MALFORMED_RECORD");
    }

    #[tokio::test]
    async fn test_project_without_json_content_type_is_malformed_record() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let req = Request::post("/api/v1/resume/project")
            .body(Body::from("tagLine=Tester"))
            .unwrap();

        let (status, body) = send(app, req).await;
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "MALFORMED_RECORD");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = build_router(make_state(ProjectionConfig::default()));
        let (status, body) = get_json(app, "/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
