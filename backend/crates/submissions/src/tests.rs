//! Crate-level tests for the submissions module

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(SubmissionError, StatusCode)> = vec![
            (SubmissionError::MissingFields, StatusCode::BAD_REQUEST),
            (SubmissionError::MissingField("code"), StatusCode::BAD_REQUEST),
            (SubmissionError::InvalidId, StatusCode::BAD_REQUEST),
            (
                SubmissionError::CodeTooLarge {
                    size: 2,
                    limit: 1,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (SubmissionError::NotFound, StatusCode::NOT_FOUND),
            (
                SubmissionError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SubmissionError::MissingFields.to_string(),
            "Missing required fields"
        );
        assert!(
            SubmissionError::MissingField("problemUrl")
                .to_string()
                .contains("problemUrl")
        );
        assert_eq!(SubmissionError::NotFound.to_string(), "No data found");
    }
}

#[cfg(test)]
mod router_tests {
    use crate::application::config::SubmissionsConfig;
    use crate::infra::memory::InMemorySubmissionRepository;
    use crate::presentation::router::submissions_router_generic;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        submissions_router_generic(
            InMemorySubmissionRepository::new(),
            SubmissionsConfig::default(),
        )
    }

    fn report(handle: &str, ip: &str, status: &str, problem: &str) -> Value {
        json!({
            "userData": {
                "userId": handle,
                "ip": ip,
                "city": "Dhaka",
                "region": "Dhaka Division",
                "country": "BD"
            },
            "codeInfo": {
                "status": status,
                "problemName": problem,
                "problemUrl": format!("https://codeforces.com/problemset/problem/{problem}"),
                "code": "#include <bits/stdc++.h>",
                "codeLanguage": "GNU C++17"
            }
        })
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_record_then_list() {
        let app = app();

        let (status, body) = send(
            &app,
            post_json("/usage", &report("tourist", "10.0.0.1", "Accepted", "1A")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Successfully saved");

        let (status, body) = send(&app, get("/usage")).await;
        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["problemName"], "1A");
        assert_eq!(data[0]["statusLabel"], "Accepted");
        assert_eq!(data[0]["user"]["handle"], "tourist");
        assert!(data[0].get("code").is_none());
    }

    #[tokio::test]
    async fn test_empty_list_is_not_an_error() {
        let (status, body) = send(&app(), get("/usage")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_missing_half_of_report() {
        let body = json!({ "userData": { "ip": "10.0.0.1" } });
        let (status, body) = send(&app(), post_json("/usage", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Missing required fields");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_missing_code_is_rejected() {
        let mut body = report("tourist", "10.0.0.1", "Accepted", "1A");
        body["codeInfo"]["code"] = json!("");
        let (status, _) = send(&app(), post_json("/usage", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_code_is_unprocessable() {
        let app = submissions_router_generic(
            InMemorySubmissionRepository::new(),
            SubmissionsConfig {
                max_code_bytes: 4,
                ..SubmissionsConfig::default()
            },
        );
        let (status, _) = send(
            &app,
            post_json("/usage", &report("tourist", "10.0.0.1", "Accepted", "1A")),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_blank_ip_falls_back_to_forwarded_for() {
        let app = app();
        let body = report("petr", "", "Accepted", "4A");
        let request = Request::builder()
            .method("POST")
            .uri("/usage")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", "198.51.100.7, 10.0.0.1")
            .body(Body::from(body.to_string()))
            .unwrap();

        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);

        let (_, listed) = send(&app, get("/usage")).await;
        assert_eq!(listed["data"][0]["user"]["ip"], "198.51.100.7");
    }

    #[tokio::test]
    async fn test_blank_ip_without_fallback_is_rejected() {
        let body = report("petr", " ", "Accepted", "4A");
        let (status, _) = send(&app(), post_json("/usage", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_same_ip_shares_device() {
        let app = app();
        send(&app, post_json("/usage", &report("tourist", "10.0.0.1", "Accepted", "1A"))).await;
        send(&app, post_json("/usage", &report("other", "10.0.0.1", "Accepted", "2A"))).await;

        let (_, body) = send(&app, get("/usage")).await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["user"]["id"], data[1]["user"]["id"]);
        assert_eq!(data[0]["user"]["handle"], "tourist");
        assert_eq!(data[1]["user"]["handle"], "tourist");
    }

    #[tokio::test]
    async fn test_code_lookup() {
        let app = app();
        send(&app, post_json("/usage", &report("tourist", "10.0.0.1", "Accepted", "1A"))).await;
        let (_, listed) = send(&app, get("/usage")).await;
        let id = listed["data"][0]["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, get(&format!("/code?id={id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], id.as_str());
        assert_eq!(body["data"]["code"], "#include <bits/stdc++.h>");
        assert_eq!(body["data"]["codeLanguage"], "GNU C++17");
    }

    #[tokio::test]
    async fn test_code_lookup_errors() {
        let app = app();

        let (status, _) = send(&app, get("/code?id=nope")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, get("/code")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let unknown = uuid::Uuid::new_v4();
        let (status, body) = send(&app, get(&format!("/code?id={unknown}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "No data found");
    }

    #[tokio::test]
    async fn test_dashboard_filters_and_stats() {
        let app = app();
        for (handle, ip, status, problem) in [
            ("tourist", "10.0.0.1", "Accepted", "Theatre Square"),
            ("petr", "10.0.0.2", "Wrong answer on test 2", "Watermelon"),
            ("petr", "10.0.0.2", "Accepted", "Watermelon"),
        ] {
            let (code, _) = send(&app, post_json("/usage", &report(handle, ip, status, problem))).await;
            assert_eq!(code, StatusCode::OK);
        }

        let (status, body) = send(&app, get("/dashboard?q=water&user=petr")).await;
        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["total"], 3);
        assert_eq!(data["submissions"].as_array().unwrap().len(), 2);
        assert_eq!(data["users"], json!(["petr", "tourist"]));
        assert_eq!(data["stats"]["totalSubmissions"], 3);
        assert_eq!(data["stats"]["acceptedSubmissions"], 2);
        assert_eq!(data["stats"]["uniqueProblems"], 2);
        assert_eq!(data["stats"]["uniqueUsers"], 2);
        assert_eq!(data["stats"]["statusCounts"]["Wrong Answer"], 1);
        assert_eq!(data["stats"]["languages"]["GNU C++17"], 3);
        assert_eq!(data["statuses"].as_array().unwrap().len(), 8);
        assert_eq!(data["statuses"][6]["shortName"], "AC");
    }

    #[tokio::test]
    async fn test_dashboard_all_users_sentinel() {
        let app = app();
        send(&app, post_json("/usage", &report("tourist", "10.0.0.1", "Accepted", "1A"))).await;
        send(&app, post_json("/usage", &report("petr", "10.0.0.2", "Accepted", "2A"))).await;

        let (_, body) = send(&app, get("/dashboard?user=All%20Users")).await;
        assert_eq!(body["data"]["submissions"].as_array().unwrap().len(), 2);

        let (_, body) = send(&app, get("/dashboard?user=nobody")).await;
        assert_eq!(body["data"]["submissions"], json!([]));
        assert_eq!(body["data"]["stats"]["totalSubmissions"], 2);
    }

    #[tokio::test]
    async fn test_dashboard_on_empty_store() {
        let (status, body) = send(&app(), get("/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["stats"]["successRate"], 0.0);
        assert_eq!(body["data"]["stats"]["activeStreak"], 0);
        assert_eq!(body["data"]["total"], 0);
    }
}
