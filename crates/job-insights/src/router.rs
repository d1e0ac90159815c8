use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::board::BoardSource;
use crate::error::AppError;
use crate::insights::{CompanyRollup, OverallSummary, StatusSummary, WorkflowList};
use crate::service::InsightsService;

/// Summary endpoints. `/cards` and `/closed-cards` are kept as aliases for
/// clients of the earlier paths.
pub fn insights_router<S>(service: Arc<InsightsService<S>>) -> Router
where
    S: BoardSource + 'static,
{
    Router::new()
        .route("/all-explores", get(overall_handler::<S>))
        .route("/cards", get(overall_handler::<S>))
        .route("/applications", get(applications_handler::<S>))
        .route("/interviews", get(interviews_handler::<S>))
        .route("/closed-explores", get(closed_handler::<S>))
        .route("/closed-cards", get(closed_handler::<S>))
        .route("/companies", get(companies_handler::<S>))
        .with_state(service)
}

pub(crate) async fn overall_handler<S>(
    State(service): State<Arc<InsightsService<S>>>,
) -> Result<Json<OverallSummary>, AppError>
where
    S: BoardSource + 'static,
{
    Ok(Json(service.overall().await?))
}

pub(crate) async fn applications_handler<S>(
    State(service): State<Arc<InsightsService<S>>>,
) -> Result<Json<StatusSummary>, AppError>
where
    S: BoardSource + 'static,
{
    Ok(Json(service.status(WorkflowList::Applied).await?))
}

pub(crate) async fn interviews_handler<S>(
    State(service): State<Arc<InsightsService<S>>>,
) -> Result<Json<StatusSummary>, AppError>
where
    S: BoardSource + 'static,
{
    Ok(Json(service.status(WorkflowList::Interviewing).await?))
}

pub(crate) async fn closed_handler<S>(
    State(service): State<Arc<InsightsService<S>>>,
) -> Result<Json<StatusSummary>, AppError>
where
    S: BoardSource + 'static,
{
    Ok(Json(service.status(WorkflowList::Closed).await?))
}

pub(crate) async fn companies_handler<S>(
    State(service): State<Arc<InsightsService<S>>>,
) -> Result<Json<CompanyRollup>, AppError>
where
    S: BoardSource + 'static,
{
    Ok(Json(service.companies().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BatchDocument, StaticBoard};
    use crate::error::UPSTREAM_ERROR_MESSAGE;
    use crate::insights::BoardLists;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOARD: &str = r#"[
        {"200": [
            {"id": "1", "name": "Acme - Backend Engineer", "idList": "la", "labels": [{"name": "Fintech"}]},
            {"id": "2", "name": "Globex - SRE", "idList": "la", "labels": []}
        ]},
        {"200": [
            {"id": "3", "name": "Acme - Platform", "idList": "li",
             "labels": [{"name": "Fintech"}, {"name": "Phone interview"}]}
        ]},
        {"200": [
            {"id": "4", "name": "Initech - Data", "idList": "lc", "labels": [{"name": "Offer"}]}
        ]}
    ]"#;

    fn lists() -> BoardLists {
        BoardLists {
            applied: "la".to_string(),
            interviewing: "li".to_string(),
            closed: "lc".to_string(),
        }
    }

    fn router_with(board: StaticBoard) -> Router {
        insights_router(Arc::new(InsightsService::new(Arc::new(board), lists())))
    }

    fn live_router() -> Router {
        let document: BatchDocument = serde_json::from_str(BOARD).expect("fixture parses");
        router_with(StaticBoard::new(document))
    }

    async fn get_json(router: Router, path: &str) -> (StatusCode, Value) {
        let response: Response = router
            .oneshot(Request::get(path).body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json payload"))
    }

    #[tokio::test]
    async fn all_explores_returns_overall_summary() {
        let (status, body) = get_json(live_router(), "/all-explores").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "totalCards": 4,
                "statusCounts": {"applied": 2, "interviewing": 1, "closed": 1},
                "industries": {"Fintech": 2},
                "outcomes": {"Offer": 1, "Phone interview": 1},
            })
        );
    }

    #[tokio::test]
    async fn applications_omit_outcomes() {
        let (status, body) = get_json(live_router(), "/applications").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "applied", "total": 2, "industries": {"Fintech": 1}})
        );
    }

    #[tokio::test]
    async fn interviews_include_outcomes() {
        let (_, body) = get_json(live_router(), "/interviews").await;

        assert_eq!(body["total"], 1);
        assert_eq!(body["outcomes"], json!({"Phone interview": 1}));
    }

    #[tokio::test]
    async fn closed_paths_share_a_handler() {
        let (_, current) = get_json(live_router(), "/closed-explores").await;
        let (_, legacy) = get_json(live_router(), "/closed-cards").await;

        assert_eq!(current, legacy);
        assert_eq!(current["outcomes"], json!({"Offer": 1}));
    }

    #[tokio::test]
    async fn companies_are_sorted_with_outcomes() {
        let (status, body) = get_json(live_router(), "/companies").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCompanies"], 3);
        assert_eq!(
            body["companies"][0],
            json!({"name": "Acme", "count": 2, "outcomes": {"Applied": 1, "Phone interview": 1}})
        );
        assert_eq!(body["companies"][1]["name"], "Globex");
        assert_eq!(body["companies"][2]["name"], "Initech");
    }

    #[tokio::test]
    async fn every_endpoint_reports_upstream_failure() {
        for path in [
            "/all-explores",
            "/cards",
            "/applications",
            "/interviews",
            "/closed-explores",
            "/closed-cards",
            "/companies",
        ] {
            let (status, body) = get_json(router_with(StaticBoard::unavailable()), path).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{path}");
            assert_eq!(body, json!({ "message": UPSTREAM_ERROR_MESSAGE }), "{path}");
        }
    }

    #[tokio::test]
    async fn empty_board_returns_zeroed_views() {
        let empty: BatchDocument =
            serde_json::from_str(r#"[{"200": []}, {"200": []}, {"200": []}]"#).expect("parses");

        let (status, body) =
            get_json(router_with(StaticBoard::new(empty.clone())), "/all-explores").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCards"], 0);
        assert_eq!(body["industries"], json!({}));

        let (_, body) = get_json(router_with(StaticBoard::new(empty)), "/companies").await;
        assert_eq!(body, json!({"companies": [], "totalCompanies": 0}));
    }
}
