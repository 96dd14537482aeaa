use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::export::ExportFormat;
use crate::query::{QueryResult, QUERY_HINT};
use crate::server::AppState;
use crate::{views, Error};

#[derive(Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct AnalyticsParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, e: impl ToString) -> ApiError {
    (status, Json(ErrorResponse { error: e.to_string() }))
}

fn to_json(value: impl Serialize) -> Result<Json<serde_json::Value>, ApiError> {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))
}

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    to_json(views::home(&state.dataset))
}

pub async fn search_quotes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let term = params.search.unwrap_or_default();
    let quotes = views::search_quotes(state.dataset.quotes(), &term);

    to_json(serde_json::json!({
        "search": term,
        "total": state.dataset.quotes().len(),
        "count": quotes.len(),
        "quotes": quotes,
    }))
}

pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    to_json(state.dataset.author_names())
}

pub async fn get_author(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match views::author_profile(&state.dataset, &name) {
        Ok(profile) => to_json(profile),
        Err(e @ Error::AuthorNotFound(_)) => Err(api_error(StatusCode::NOT_FOUND, e)),
        Err(e) => Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e)),
    }
}

pub async fn run_analytics(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let query = params.q.unwrap_or_default();
    let result = views::analytics(&state.dataset, &query);

    let hint = match &result {
        Some(QueryResult::Unrecognized) => {
            tracing::warn!("Unrecognized analytics request: {:?}", query);
            Some(QUERY_HINT)
        }
        _ => None,
    };

    to_json(serde_json::json!({
        "query": query,
        "intent": result.as_ref().map(QueryResult::intent),
        "result": result,
        "hint": hint,
    }))
}

pub async fn export(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<([(HeaderName, String); 2], Vec<u8>), ApiError> {
    let format: ExportFormat = format
        .parse()
        .map_err(|e| api_error(StatusCode::NOT_FOUND, e))?;

    let bytes = format
        .render(state.dataset.quotes())
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name()),
            ),
        ],
        bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    const QUOTES: &str = "Quote,Author,Tags\n\
        The world as we have created it,Albert Einstein,\"change, world\"\n\
        It is our choices,J.K. Rowling,choices\n\
        There are only two ways,Albert Einstein,\"life, miracle\"\n";
    const AUTHORS: &str = "Author,Born Date,Born Place,Description\n\
        Albert Einstein,\"March 14, 1879\",\"in Ulm, Germany\",Physicist\n\
        J.K. Rowling,\"July 31, 1965\",\"in Yate, United Kingdom\",Writer\n";

    fn state() -> AppState {
        let dataset = Dataset::from_readers(QUOTES.as_bytes(), AUTHORS.as_bytes()).unwrap();
        AppState::new(dataset)
    }

    #[tokio::test]
    async fn test_summary() {
        let Json(body) = get_summary(State(state())).await.unwrap();
        assert_eq!(body["summary"]["total_quotes"], 3);
        assert_eq!(body["summary"]["total_authors"], 2);
        assert_eq!(body["summary"]["total_tags"], 5);
    }

    #[tokio::test]
    async fn test_search_quotes() {
        let params = SearchParams {
            search: Some("einstein".into()),
        };
        let Json(body) = search_quotes(State(state()), Query(params)).await.unwrap();
        assert_eq!(body["count"], 2);
        assert_eq!(body["total"], 3);
        assert_eq!(body["quotes"][0]["author"], "Albert Einstein");
        assert_eq!(body["quotes"][0]["row"], 0);
        assert_eq!(body["quotes"][1]["row"], 2);
    }

    #[tokio::test]
    async fn test_get_author_not_found() {
        let err = get_author(State(state()), Path("Nobody".into())).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);

        let Json(body) = get_author(State(state()), Path("J.K. Rowling".into())).await.unwrap();
        assert_eq!(body["born"], "July 31, 1965 in Yate, United Kingdom");
    }

    #[tokio::test]
    async fn test_analytics() {
        let params = AnalyticsParams {
            q: Some("most popular author".into()),
        };
        let Json(body) = run_analytics(State(state()), Query(params)).await.unwrap();
        assert_eq!(body["intent"], "popular_author");
        assert_eq!(body["result"]["intent"], "popular_author");
        assert_eq!(body["result"]["data"]["author"], "Albert Einstein");
        assert!(body["hint"].is_null());

        let params = AnalyticsParams { q: Some("banana".into()) };
        let Json(body) = run_analytics(State(state()), Query(params)).await.unwrap();
        assert_eq!(body["intent"], "unrecognized");
        assert_eq!(body["result"]["intent"], "unrecognized");
        assert_eq!(body["hint"], QUERY_HINT);

        let params = AnalyticsParams { q: None };
        let Json(body) = run_analytics(State(state()), Query(params)).await.unwrap();
        assert!(body["intent"].is_null());
        assert!(body["result"].is_null());
    }

    #[tokio::test]
    async fn test_export_csv() {
        let (headers, bytes) = export(State(state()), Path("csv".into())).await.unwrap();
        assert_eq!(headers[0].1, "text/csv");
        assert!(headers[1].1.contains("quotes_data.csv"));
        assert!(bytes.starts_with(b"Quote,Author,Tags\n"));

        let err = export(State(state()), Path("pdf".into())).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }
}
