//! Request handlers and the form they share.
//!
//! Every generation route follows the same shape: resolve the caller's
//! session cookie, take the session map write lock for the handler body,
//! check the credential, run the requested pipeline stage, and re-render the
//! page from the mutated session.

use crate::page::PageView;
use crate::state::AppState;
use axum::Form;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use fabulist_core::prompt::{DEFAULT_IMAGE_STYLE, DEFAULT_STORY_TEMPLATE};
use fabulist_core::{ImageSize, Voice};
use fabulist_studio::{
    AUDIO_UNCHANGED_NOTICE, AudioOutcome, ImageOutcome, LiveStudio, STORY_FIRST_NOTICE,
    live_studio,
};
use serde::Deserialize;
use tracing::{error, info, instrument};
use uuid::Uuid;

const SESSION_COOKIE: &str = "fabulist_session";
const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// Where the OpenAI key comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum KeySource {
    /// Read `OPENAI_API_KEY` from the process environment.
    #[default]
    Env,
    /// Use the key typed into the form.
    Manual,
}

fn default_story_template() -> String {
    DEFAULT_STORY_TEMPLATE.to_string()
}

fn default_image_style() -> String {
    DEFAULT_IMAGE_STYLE.to_string()
}

/// Fields posted by the studio form.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StudioForm {
    #[serde(default)]
    pub(crate) idea: String,
    #[serde(default = "default_story_template")]
    pub(crate) story_template: String,
    #[serde(default = "default_image_style")]
    pub(crate) image_style: String,
    #[serde(default)]
    pub(crate) voice: Voice,
    #[serde(default)]
    pub(crate) size: ImageSize,
    #[serde(default)]
    pub(crate) key_source: KeySource,
    #[serde(default)]
    pub(crate) api_key: String,
}

fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            Uuid::parse_str(value).ok()
        } else {
            None
        }
    })
}

fn ensure_session(headers: &HeaderMap) -> (Uuid, Option<HeaderValue>) {
    match session_id(headers) {
        Some(id) => (id, None),
        None => {
            let id = Uuid::new_v4();
            let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, id);
            (id, HeaderValue::from_str(&cookie).ok())
        }
    }
}

fn respond(page: String, set_cookie: Option<HeaderValue>) -> (HeaderMap, Html<String>) {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = set_cookie {
        headers.insert(header::SET_COOKIE, cookie);
    }
    (headers, Html(page))
}

fn resolve_api_key(form: &StudioForm) -> Result<String, String> {
    match form.key_source {
        KeySource::Env => match std::env::var(OPENAI_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(format!(
                "No OpenAI API key found. Set {} or choose manual entry.",
                OPENAI_KEY_VAR
            )),
        },
        KeySource::Manual => {
            let key = form.api_key.trim();
            if key.is_empty() {
                Err("No OpenAI API key entered. Type one or switch to the environment key."
                    .to_string())
            } else {
                Ok(key.to_string())
            }
        }
    }
}

fn build_studio(state: &AppState, form: &StudioForm) -> Result<LiveStudio, String> {
    let key = resolve_api_key(form)?;
    live_studio(&state.openai, state.store.root(), &key).map_err(|e| e.to_string())
}

/// GET `/` - render the studio page for the caller's session.
pub(crate) async fn index(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let (session_id, set_cookie) = ensure_session(&headers);
    let session = state
        .sessions
        .read()
        .await
        .get(&session_id)
        .cloned()
        .unwrap_or_default();
    respond(PageView::new(&session).render(), set_cookie)
}

/// POST `/generate` - run the full story, image, and audio pipeline.
#[instrument(skip_all)]
pub(crate) async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<StudioForm>,
) -> impl IntoResponse {
    let (session_id, set_cookie) = ensure_session(&headers);
    let mut sessions = state.sessions.write().await;
    let session = sessions.entry(session_id).or_default();

    let studio = match build_studio(&state, &form) {
        Ok(studio) => studio,
        Err(message) => {
            let page = PageView::new(session).with_form(&form).with_error(message);
            return respond(page.render(), set_cookie);
        }
    };

    let outcome = studio
        .generate_all(
            session,
            &form.story_template,
            &form.idea,
            &form.image_style,
            form.size,
            form.voice,
        )
        .await;
    let page = PageView::new(session).with_form(&form);
    let page = match outcome {
        Ok(_) => page,
        Err(e) => {
            error!(error = %e, "Pipeline failed");
            page.with_error(e.to_string())
        }
    };
    respond(page.render(), set_cookie)
}

/// POST `/image` - regenerate the illustration for the current story.
#[instrument(skip_all)]
pub(crate) async fn image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<StudioForm>,
) -> impl IntoResponse {
    let (session_id, set_cookie) = ensure_session(&headers);
    let mut sessions = state.sessions.write().await;
    let session = sessions.entry(session_id).or_default();

    let studio = match build_studio(&state, &form) {
        Ok(studio) => studio,
        Err(message) => {
            let page = PageView::new(session).with_form(&form).with_error(message);
            return respond(page.render(), set_cookie);
        }
    };

    let outcome = studio
        .generate_image(session, &form.image_style, form.size)
        .await;
    let page = PageView::new(session).with_form(&form);
    let page = match outcome {
        Ok(ImageOutcome::Generated { .. }) => page,
        Ok(ImageOutcome::StoryMissing) => page.with_notice(STORY_FIRST_NOTICE),
        Err(e) => {
            error!(error = %e, "Illustration failed");
            page.with_error(e.to_string())
        }
    };
    respond(page.render(), set_cookie)
}

/// POST `/audio` - regenerate narration if the voice or story changed.
#[instrument(skip_all)]
pub(crate) async fn audio(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<StudioForm>,
) -> impl IntoResponse {
    let (session_id, set_cookie) = ensure_session(&headers);
    let mut sessions = state.sessions.write().await;
    let session = sessions.entry(session_id).or_default();

    let studio = match build_studio(&state, &form) {
        Ok(studio) => studio,
        Err(message) => {
            let page = PageView::new(session).with_form(&form).with_error(message);
            return respond(page.render(), set_cookie);
        }
    };

    let outcome = studio.regenerate_audio(session, form.voice).await;
    let page = PageView::new(session).with_form(&form);
    let page = match outcome {
        Ok(AudioOutcome::Generated { .. }) => page,
        Ok(AudioOutcome::Unchanged { .. }) => page.with_notice(AUDIO_UNCHANGED_NOTICE),
        Ok(AudioOutcome::StoryMissing) => page.with_notice(STORY_FIRST_NOTICE),
        Err(e) => {
            error!(error = %e, "Narration failed");
            page.with_error(e.to_string())
        }
    };
    respond(page.render(), set_cookie)
}

/// GET `/artifacts/*path` - serve a stored artifact file.
pub(crate) async fn artifact(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Response {
    let full = match state.store.resolve(&path) {
        Some(full) => full,
        None => return StatusCode::NOT_FOUND.into_response(),
    };
    match tokio::fs::read(&full).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(e) => {
            info!(path = %full.display(), error = %e, "Artifact not readable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn content_type(path: &str) -> &'static str {
    match std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
    {
        Some("png") => "image/png",
        Some("mp3") => "audio/mpeg",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
