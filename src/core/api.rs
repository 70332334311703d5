//! HTTP API for Omni-Genesis
//!
//! Endpoints:
//! - GET    /health                              - Health check
//! - POST   /api/detect                          - Full detection for one text
//! - POST   /api/detect/batch                    - Detection for many texts, order preserved
//! - POST   /api/analyze                         - Emotion/logic scores and strategy for a text
//! - POST   /api/balance                         - Raw Golden Ratio balancing of two scores
//! - POST   /api/chat                            - Detection + personality reply
//! - GET    /api/chat/:user_id                   - Personality state for a user
//! - DELETE /api/chat/:user_id                   - Erase a user's session and history
//! - GET    /api/chat/:user_id/export            - Portable export of a user's data
//! - GET    /api/analytics/:user_id/dashboard    - Interaction totals and top emotions
//! - GET    /api/analytics/:user_id/emotions     - Daily emotion counts (`?days=1..90`)
//!
//! Every error, including an unreadable body or query, is `{"error": "..."}`.

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request, State,
    },
    http::{request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::core::analytics::InteractionLog;
use crate::core::detector::EmotionDetector;
use crate::core::pdpa::{anonymize, redact_pii, user_data_export, DataExport};
use crate::core::personality::PersonalityConfig;
use crate::core::session::SessionStore;
use crate::types::{
    Adjustment, AnalysisContext, Dashboard, DetectionResult, Emotion, EmotionTrends,
    FormalityLevel, GoldenRatioResult, Idiom, Interaction, Mood, PersonalityState, TextAnalysis,
};
use crate::{OmniError, Result, DEFAULT_MAX_SESSIONS, MAX_MESSAGE_CHARS, TREND_DAYS_DEFAULT};

/// User id used when a chat request carries none
pub const GUEST_USER: &str = "guest";

const MAX_USER_ID_CHARS: usize = 50;

/// App state
pub struct AppState {
    pub detector: EmotionDetector,
    pub personality: PersonalityConfig,
    pub sessions: RwLock<SessionStore>,
}

impl AppState {
    pub fn new(detector: EmotionDetector) -> Self {
        Self {
            detector,
            personality: PersonalityConfig::default(),
            sessions: RwLock::new(SessionStore::new(DEFAULT_MAX_SESSIONS)),
        }
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.sessions = RwLock::new(SessionStore::new(max_sessions));
        self
    }
}

/// JSON body extractor whose rejection is an `OmniError`
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = OmniError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Query string extractor whose rejection is an `OmniError`
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = OmniError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for OmniError {
    fn from(rejection: JsonRejection) -> Self {
        OmniError::UnprocessableBody(rejection.body_text())
    }
}

impl From<QueryRejection> for OmniError {
    fn from(rejection: QueryRejection) -> Self {
        OmniError::InvalidRequest(rejection.body_text())
    }
}

/// Detect request
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

/// Detect response
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectResponse {
    #[serde(flatten)]
    pub detection: DetectionResult,
    pub idioms: Vec<Idiom>,
}

/// Batch detect request
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub texts: Vec<String>,
}

/// Batch detect response
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<DetectionResult>,
}

/// Text analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub context: AnalysisContext,
}

/// Balance request
#[derive(Debug, Deserialize)]
pub struct BalanceRequest {
    pub emotion_score: f64,
    pub logic_score: f64,
}

/// Balance response
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    #[serde(flatten)]
    pub result: GoldenRatioResult,
    pub adjustment: Adjustment,
}

/// Chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Free-form client context (voice or face features, profile, ...)
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Chat response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub emotion: Emotion,
    pub harmonic_score: f64,
    pub formality: FormalityLevel,
    pub mood: Mood,
    pub emoji: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Emotion trend query
#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    pub days: Option<i64>,
}

/// User data export
pub type UserExport = DataExport<PersonalityState, Interaction>;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for OmniError {
    fn into_response(self) -> Response {
        let status = match &self {
            OmniError::InvalidRequest(_)
            | OmniError::InvalidPhi(_)
            | OmniError::InvalidThreshold(_) => StatusCode::BAD_REQUEST,
            OmniError::UnprocessableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            OmniError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/detect", post(detect))
        .route("/api/detect/batch", post(detect_batch))
        .route("/api/analyze", post(analyze))
        .route("/api/balance", post(balance))
        .route("/api/chat", post(chat))
        .route("/api/chat/:user_id", get(get_chat_state).delete(delete_chat_state))
        .route("/api/chat/:user_id/export", get(export_user_data))
        .route("/api/analytics/:user_id/dashboard", get(dashboard))
        .route("/api/analytics/:user_id/emotions", get(emotion_trends))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
    })
}

async fn detect(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<DetectRequest>,
) -> Json<DetectResponse> {
    Json(DetectResponse {
        detection: state.detector.detect(&req.text),
        idioms: state.detector.detect_idioms(&req.text),
    })
}

async fn detect_batch(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<BatchRequest>,
) -> Json<BatchResponse> {
    Json(BatchResponse {
        results: state.detector.detect_batch(&req.texts),
    })
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AnalyzeRequest>,
) -> Json<TextAnalysis> {
    Json(state.detector.analyze_text(&req.text, req.context))
}

async fn balance(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<BalanceRequest>,
) -> Json<BalanceResponse> {
    let analyzer = state.detector.analyzer();
    Json(BalanceResponse {
        result: analyzer.analyze(req.emotion_score, req.logic_score),
        adjustment: analyzer.suggest_adjustment(req.emotion_score, req.logic_score),
    })
}

async fn chat(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let message = validate_message(&req.message)?;
    let user_id = match req.user_id.as_deref() {
        Some(id) => validate_user_id(id)?,
        None => GUEST_USER.to_string(),
    };

    info!(
        user = %anonymize(&user_id),
        message_length = message.chars().count(),
        "chat request"
    );
    if let Some(metadata) = &req.metadata {
        debug!(metadata = %redact_pii(metadata), "chat metadata");
    }

    let detection = state.detector.detect(&message);
    let timestamp = Utc::now();

    let reply = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.touch(&user_id, &state.personality);
        let reply = session.personality.respond_to(&message, &detection);
        session.interactions.record(Interaction {
            emotion: detection.emotion,
            harmonic_score: detection.harmonic_score(),
            timestamp,
        });
        reply
    };

    info!(
        user = %anonymize(&user_id),
        emotion = %detection.emotion,
        harmonic_score = detection.harmonic_score(),
        "chat success"
    );

    Ok(Json(ChatResponse {
        response: reply.message,
        emotion: detection.emotion,
        harmonic_score: detection.harmonic_score(),
        formality: detection.formality.level,
        mood: reply.mood,
        emoji: reply.emoji,
        user_id,
        timestamp,
    }))
}

async fn get_chat_state(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<PersonalityState>> {
    let user_id = validate_user_id(&user_id)?;
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&user_id)
        .ok_or_else(|| OmniError::SessionNotFound(user_id.clone()))?;
    Ok(Json(session.personality.state()))
}

/// Right to erasure: drop everything held for the user
async fn delete_chat_state(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<StatusCode> {
    let user_id = validate_user_id(&user_id)?;
    let mut sessions = state.sessions.write().await;
    match sessions.remove(&user_id) {
        Some(_) => {
            info!(user = %anonymize(&user_id), "chat session erased");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(OmniError::SessionNotFound(user_id)),
    }
}

/// Right to data portability
async fn export_user_data(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserExport>> {
    let user_id = validate_user_id(&user_id)?;
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&user_id)
        .ok_or_else(|| OmniError::SessionNotFound(user_id.clone()))?;
    info!(user = %anonymize(&user_id), "user data exported");
    Ok(Json(user_data_export(
        &user_id,
        session.personality.state(),
        session.interactions.to_vec(),
    )))
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Dashboard>> {
    let user_id = validate_user_id(&user_id)?;
    let sessions = state.sessions.read().await;
    let dashboard = match sessions.get(&user_id) {
        Some(session) => session.interactions.dashboard(&user_id),
        None => InteractionLog::new().dashboard(&user_id),
    };
    Ok(Json(dashboard))
}

async fn emotion_trends(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    ApiQuery(query): ApiQuery<TrendQuery>,
) -> Result<Json<EmotionTrends>> {
    let user_id = validate_user_id(&user_id)?;
    let days = query.days.unwrap_or(TREND_DAYS_DEFAULT);
    let now = Utc::now();
    let sessions = state.sessions.read().await;
    let trends = match sessions.get(&user_id) {
        Some(session) => session.interactions.emotion_trends(&user_id, days, now)?,
        None => InteractionLog::new().emotion_trends(&user_id, days, now)?,
    };
    Ok(Json(trends))
}

/// Trim and bound-check a chat message
pub fn validate_message(raw: &str) -> Result<String> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(OmniError::InvalidRequest("message must not be empty".to_string()));
    }
    let len = message.chars().count();
    if len > MAX_MESSAGE_CHARS {
        return Err(OmniError::InvalidRequest(format!(
            "message is {len} characters, limit is {MAX_MESSAGE_CHARS}"
        )));
    }
    Ok(message.to_string())
}

/// User ids are 1-50 characters of ASCII letters, digits, `-` or `_`
pub fn validate_user_id(raw: &str) -> Result<String> {
    let id = raw.trim();
    let valid = !id.is_empty()
        && id.chars().count() <= MAX_USER_ID_CHARS
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(OmniError::InvalidRequest(
            "user_id must be 1-50 alphanumeric characters (with optional - or _)".to_string(),
        ));
    }
    Ok(id.to_string())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Run the API server
pub async fn run_server(settings: &Settings, detector: EmotionDetector) -> Result<()> {
    let state = Arc::new(AppState::new(detector).with_max_sessions(settings.max_sessions));
    let router = create_router(state).layer(cors_layer(&settings.cors_origins));
    let listener = tokio::net::TcpListener::bind(&settings.addr).await?;

    info!(addr = %settings.addr, max_sessions = settings.max_sessions, "Omni-Genesis API running");
    info!("  GET    /health                            - Health check");
    info!("  POST   /api/detect                        - Detect emotion");
    info!("  POST   /api/detect/batch                  - Detect many");
    info!("  POST   /api/analyze                       - Emotion/logic strategy");
    info!("  POST   /api/balance                       - Golden Ratio balance");
    info!("  POST   /api/chat                          - Chat with NaMo");
    info!("  GET    /api/chat/:user_id                 - Personality state");
    info!("  DELETE /api/chat/:user_id                 - Erase session");
    info!("  GET    /api/chat/:user_id/export          - Export user data");
    info!("  GET    /api/analytics/:user_id/dashboard  - Dashboard");
    info!("  GET    /api/analytics/:user_id/emotions   - Emotion trends");

    axum::serve(listener, router).await?;
    Ok(())
}
