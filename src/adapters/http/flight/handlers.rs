//! HTTP handlers for flight endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireActor;
use crate::adapters::render::FlightCardRenderer;
use crate::application::handlers::session::{
    ClaimRoleCommand, ClaimRoleHandler, CloseSessionCommand, CloseSessionHandler,
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
    ReleaseRoleCommand, ReleaseRoleHandler, ReleaseScope,
};
use crate::domain::foundation::{ActorId, CommandMetadata, SessionId};
use crate::domain::session::{SessionError, SessionSnapshot};
use crate::ports::{AccessChecker, EventPublisher, SessionRegistry};

use super::dto::{
    AssignmentResponse, CreateFlightRequest, ErrorResponse, FlightListResponse, FlightResponse,
    FlightSummaryResponse, ListFlightsQuery, RoleKindResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FlightHandlers {
    create_handler: Arc<CreateSessionHandler>,
    claim_handler: Arc<ClaimRoleHandler>,
    release_handler: Arc<ReleaseRoleHandler>,
    close_handler: Arc<CloseSessionHandler>,
    delete_handler: Arc<DeleteSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
    renderer: FlightCardRenderer,
}

impl FlightHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        claim_handler: Arc<ClaimRoleHandler>,
        release_handler: Arc<ReleaseRoleHandler>,
        close_handler: Arc<CloseSessionHandler>,
        delete_handler: Arc<DeleteSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
    ) -> Self {
        Self {
            create_handler,
            claim_handler,
            release_handler,
            close_handler,
            delete_handler,
            get_handler,
            list_handler,
            renderer: FlightCardRenderer::new(),
        }
    }

    /// Builds every handler over the same registry and event publisher.
    pub fn from_ports(
        registry: Arc<dyn SessionRegistry>,
        access_checker: Arc<dyn AccessChecker>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self::new(
            Arc::new(CreateSessionHandler::new(
                registry.clone(),
                access_checker,
                event_publisher.clone(),
            )),
            Arc::new(ClaimRoleHandler::new(registry.clone(), event_publisher.clone())),
            Arc::new(ReleaseRoleHandler::new(registry.clone(), event_publisher.clone())),
            Arc::new(CloseSessionHandler::new(registry.clone(), event_publisher.clone())),
            Arc::new(DeleteSessionHandler::new(registry.clone(), event_publisher)),
            Arc::new(GetSessionHandler::new(registry.clone())),
            Arc::new(ListSessionsHandler::new(registry)),
        )
    }

    fn flight(&self, snapshot: SessionSnapshot) -> FlightResponse {
        let card = self.renderer.render(&snapshot);
        FlightResponse::new(snapshot, card)
    }
}

fn command_metadata(actor: ActorId) -> CommandMetadata {
    CommandMetadata::new(actor).with_source("http")
}

fn parse_session_id(raw: String) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/catalog - Role kinds in display order
pub async fn get_catalog(State(handlers): State<FlightHandlers>) -> Response {
    let kinds: Vec<RoleKindResponse> = handlers
        .list_handler
        .catalog()
        .iter()
        .map(Into::into)
        .collect();
    (StatusCode::OK, Json(kinds)).into_response()
}

/// POST /api/flights - Open a new flight
pub async fn create_flight(
    State(handlers): State<FlightHandlers>,
    RequireActor(actor): RequireActor,
    Json(req): Json<CreateFlightRequest>,
) -> Response {
    let session_id = match parse_session_id(req.session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CreateSessionCommand {
        session_id,
        creator: actor.clone(),
        metadata: req.metadata,
    };

    match handlers.create_handler.handle(cmd, command_metadata(actor)).await {
        Ok(result) => (StatusCode::CREATED, Json(handlers.flight(result.snapshot))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/flights - Live flights with one-line summaries
pub async fn list_flights(
    State(handlers): State<FlightHandlers>,
    Query(params): Query<ListFlightsQuery>,
) -> Response {
    let sessions = handlers
        .list_handler
        .handle(ListSessionsQuery {
            status: params.status,
        })
        .await;

    let items: Vec<FlightSummaryResponse> = sessions
        .iter()
        .map(|s| FlightSummaryResponse {
            id: s.id.to_string(),
            status: s.status,
            summary: handlers.renderer.summary_line(s),
            assigned: s.assigned_count(),
        })
        .collect();

    let response = FlightListResponse {
        total: items.len(),
        items,
        text: handlers.renderer.summary_list(&sessions),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/flights/:id - Snapshot with rendered card
pub async fn get_flight(
    State(handlers): State<FlightHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(snapshot) => (StatusCode::OK, Json(handlers.flight(snapshot))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/flights/:id/roles/:role - Claim a role, swapping out of any held one
pub async fn claim_role(
    State(handlers): State<FlightHandlers>,
    RequireActor(actor): RequireActor,
    Path((session_id, role)): Path<(String, String)>,
) -> Response {
    let session_id = match parse_session_id(session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ClaimRoleCommand {
        session_id: session_id.clone(),
        actor: actor.clone(),
        role,
    };

    match handlers.claim_handler.handle(cmd, command_metadata(actor)).await {
        Ok(outcome) => {
            let response = AssignmentResponse {
                session_id: session_id.to_string(),
                role: outcome.change.role.to_string(),
                previous_role: outcome.change.previous.map(|r| r.to_string()),
                flight: handlers.flight(outcome.snapshot),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /api/flights/:id/roles - Release the caller's role in this flight
pub async fn release_role(
    State(handlers): State<FlightHandlers>,
    RequireActor(actor): RequireActor,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    release(handlers, actor, ReleaseScope::Session(session_id)).await
}

/// DELETE /api/roles - Release the caller's role wherever they hold one
pub async fn release_role_anywhere(
    State(handlers): State<FlightHandlers>,
    RequireActor(actor): RequireActor,
) -> Response {
    release(handlers, actor, ReleaseScope::Anywhere).await
}

async fn release(handlers: FlightHandlers, actor: ActorId, scope: ReleaseScope) -> Response {
    let cmd = ReleaseRoleCommand {
        actor: actor.clone(),
        scope,
    };

    match handlers.release_handler.handle(cmd, command_metadata(actor)).await {
        Ok(outcome) => {
            let response = AssignmentResponse {
                session_id: outcome.snapshot.id.to_string(),
                role: outcome.role.to_string(),
                previous_role: None,
                flight: handlers.flight(outcome.snapshot),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/flights/:id/close - Stop accepting role changes
pub async fn close_flight(
    State(handlers): State<FlightHandlers>,
    RequireActor(actor): RequireActor,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CloseSessionCommand { session_id };
    match handlers.close_handler.handle(cmd, command_metadata(actor)).await {
        Ok(snapshot) => (StatusCode::OK, Json(handlers.flight(snapshot))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /api/flights/:id - Remove a flight
pub async fn delete_flight(
    State(handlers): State<FlightHandlers>,
    RequireActor(actor): RequireActor,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteSessionCommand { session_id };
    match handlers.delete_handler.handle(cmd, command_metadata(actor)).await {
        Ok(snapshot) => (StatusCode::OK, Json(handlers.flight(snapshot))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn status_for(error: &SessionError) -> StatusCode {
    match error {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionError::AlreadyExists(_)
        | SessionError::RoleFull { .. }
        | SessionError::AlreadyHoldingRole(_)
        | SessionError::AssignedElsewhere { .. }
        | SessionError::AlreadyClosed(_)
        | SessionError::NotModifiable { .. } => StatusCode::CONFLICT,
        SessionError::UnknownRole(_) | SessionError::NotAssigned(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SessionError::AccessDenied(_) => StatusCode::FORBIDDEN,
        SessionError::Validation(_) => StatusCode::BAD_REQUEST,
        SessionError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_session_error(error: SessionError) -> Response {
    let status = status_for(&error);
    let message = match &error {
        SessionError::AccessDenied(reason) => reason.user_message().to_string(),
        SessionError::Unavailable(msg) => {
            tracing::error!(error = %msg, "Flight request failed");
            "Service temporarily unavailable".to_string()
        }
        other => other.to_string(),
    };

    (status, Json(ErrorResponse::new(error.code(), message))).into_response()
}
