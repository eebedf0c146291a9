use anyhow::Context as _;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tokio::net::TcpListener;

use super::schema::FolioSchema;

/// Query-string form of a GraphQL request, per GraphQL-over-HTTP.
#[derive(Deserialize)]
struct GetRequest {
    query: String,

    #[serde(rename = "operationName")]
    operation_name: Option<String>,

    /// Variables as a JSON-encoded object
    variables: Option<String>,
}

async fn graphql_post(State(schema): State<FolioSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GET side of the endpoint. HTML-accepting clients (browsers) get the
/// interactive playground; everything else is executed as a
/// GraphQL-over-HTTP GET request.
async fn graphql_get(
    State(schema): State<FolioSchema>,
    headers: HeaderMap,
    params: Result<Query<GetRequest>, QueryRejection>,
) -> Response {
    if accepts_html(&headers) {
        return Html(playground_source(GraphQLPlaygroundConfig::new("/graphql"))).into_response();
    }

    let Ok(Query(params)) = params else {
        return (StatusCode::BAD_REQUEST, "missing query parameter").into_response();
    };

    let mut request = async_graphql::Request::new(params.query);
    if let Some(op) = params.operation_name {
        request = request.operation_name(op);
    }
    if let Some(raw) = params.variables {
        match serde_json::from_str(&raw) {
            Ok(vars) => request = request.variables(vars),
            Err(e) => {
                return (StatusCode::BAD_REQUEST, format!("invalid variables: {e}"))
                    .into_response();
            }
        }
    }

    Json(schema.execute(request).await).into_response()
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Build the application router: a single `/graphql` route.
pub fn router(schema: FolioSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphql_get).post(graphql_post))
        .with_state(schema)
}

/// Bind the listener and serve requests until the process is stopped.
pub async fn run_server(schema: FolioSchema, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("GraphQL endpoint ready on http://{addr}/graphql");
    axum::serve(listener, router(schema)).await?;
    Ok(())
}
