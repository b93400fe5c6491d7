use axum::{
    extract::{FromRequest, Query, Request, State},
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use torus_life_core::{CellCoord, Command, Event};
use torus_life_rendering::{AutoRunControl, CellFragment, GridFragment, PageView, StatusLine};
use torus_life_world::{self as world, query, World};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::debug;

use crate::{
    error::ApiError,
    routes::{Operation, Resolution},
    state::AppState,
};

/// Fallback handler that routes every request through the exact-match table.
pub(crate) async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let path = request.uri().path().to_owned();
    match state.routes().resolve(request.method(), &path) {
        Resolution::Operation(operation) => {
            let target = match operation {
                Operation::Toggle => match toggle_target(request).await {
                    Ok(cell) => Some(cell),
                    Err(error) => return error.into_response(),
                },
                _ => None,
            };
            state
                .with_world(|world| respond(world, &state, operation, target))
                .unwrap_or_else(IntoResponse::into_response)
        }
        Resolution::Static(rest) => serve_static(&state, rest, request).await,
        Resolution::NotFound => {
            debug!(method = %request.method(), %path, "no route matched");
            not_found()
        }
    }
}

/// Applies the operation and renders its response while the lock is held.
fn respond(
    world: &mut World,
    state: &AppState,
    operation: Operation,
    target: Option<CellCoord>,
) -> Result<Response, ApiError> {
    let command = match operation {
        Operation::Home => {
            let page = state.page().render(PageView {
                grid: query::grid(world),
                step: query::step(world),
                running: query::is_running(world),
            });
            return Ok(Html(page).into_response());
        }
        Operation::State => return Ok(Json(query::snapshot(world)).into_response()),
        Operation::StepCount => return Ok(query::step(world).to_string().into_response()),
        Operation::Status => {
            let status = StatusLine::new(query::is_running(world));
            return Ok(Html(status.to_string()).into_response());
        }
        Operation::ToggleAutoRun => {
            let _ = execute(world, Command::ToggleAutoRun);
            let control = AutoRunControl::new(query::is_running(world));
            return Ok(Html(control.to_string()).into_response());
        }
        Operation::Toggle => {
            let cell = target.ok_or(ApiError::InvalidCoordinates)?;
            return match execute(world, Command::ToggleCell { cell }).as_slice() {
                [Event::CellToggled { cell, alive }] => {
                    Ok(Html(CellFragment::new(*cell, *alive).to_string()).into_response())
                }
                _ => Err(ApiError::InvalidCoordinates),
            };
        }
        Operation::Step => Command::Step,
        Operation::AutoStep => Command::AutoStep,
        Operation::Clear => Command::Clear,
        Operation::Randomize => Command::Randomize,
    };

    let _ = execute(world, command);
    Ok(Html(GridFragment::new(query::grid(world)).render()).into_response())
}

fn execute(world: &mut World, command: Command) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(world, command, &mut events);
    events
}

#[derive(Debug, Default, Deserialize)]
struct ToggleForm {
    x: Option<String>,
    y: Option<String>,
}

impl ToggleForm {
    /// Fills fields missing from the body with those from the query string.
    fn or(self, fallback: Self) -> Self {
        Self {
            x: self.x.or(fallback.x),
            y: self.y.or(fallback.y),
        }
    }

    fn cell(&self) -> Result<CellCoord, ApiError> {
        Ok(CellCoord::new(
            coordinate(self.x.as_deref())?,
            coordinate(self.y.as_deref())?,
        ))
    }
}

fn coordinate(field: Option<&str>) -> Result<u32, ApiError> {
    let value: i64 = field
        .ok_or(ApiError::InvalidCoordinates)?
        .parse()
        .map_err(|_| ApiError::InvalidCoordinates)?;
    u32::try_from(value).map_err(|_| ApiError::InvalidCoordinates)
}

/// Decodes the `x` and `y` fields before the world lock is taken.
///
/// Body fields take precedence over query-string fields. A request without a
/// content type carries no form body.
async fn toggle_target(request: Request) -> Result<CellCoord, ApiError> {
    let Query(query) = Query::<ToggleForm>::try_from_uri(request.uri()).map_err(|rejection| {
        debug!(%rejection, "rejected toggle query");
        ApiError::InvalidForm
    })?;

    let body = if request.headers().contains_key(header::CONTENT_TYPE) {
        let Form(body) = Form::<ToggleForm>::from_request(request, &())
            .await
            .map_err(|rejection| {
                debug!(%rejection, "rejected toggle body");
                ApiError::InvalidForm
            })?;
        body
    } else {
        ToggleForm::default()
    };

    body.or(query).cell()
}

async fn serve_static(state: &AppState, rest: &str, request: Request) -> Response {
    let (mut parts, body) = request.into_parts();
    parts.uri = match Uri::try_from(format!("/{rest}")) {
        Ok(uri) => uri,
        Err(_) => return not_found(),
    };
    // Files are served whatever the method; HEAD keeps its empty body.
    if parts.method != Method::HEAD {
        parts.method = Method::GET;
    }

    match ServeDir::new(state.static_dir())
        .oneshot(Request::from_parts(parts, body))
        .await
    {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}
