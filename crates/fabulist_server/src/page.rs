//! Server-rendered studio page.
//!
//! One HTML document: a single form whose three submit buttons target the
//! generation routes, plus the output regions read from the session.

use crate::routes::{KeySource, StudioForm};
use fabulist_core::prompt::{DEFAULT_IMAGE_STYLE, DEFAULT_STORY_TEMPLATE};
use fabulist_core::{ImageSize, Voice};
use fabulist_studio::Session;
use strum::IntoEnumIterator;

const STYLE: &str = "\
body { max-width: 48rem; margin: 2rem auto; padding: 0 1rem; font-family: sans-serif; }
label { display: block; margin-top: 1rem; font-weight: bold; }
textarea, select, input { width: 100%; margin-top: 0.25rem; font: inherit; }
details { margin-top: 1rem; }
.buttons { margin-top: 1rem; display: flex; gap: 0.5rem; }
.buttons button { flex: 1; padding: 0.5rem; }
.banner { padding: 0.5rem; border-radius: 0.25rem; }
.banner.error { background: #fdd; }
.banner.notice { background: #ffd; }
.story { white-space: pre-wrap; background: #f6f6f6; padding: 1rem; border-radius: 0.25rem; }
.illustration { max-width: 100%; margin-top: 1rem; }
audio { width: 100%; margin-top: 1rem; }
";

/// Everything the page shows: form echo, output regions, and banners.
pub(crate) struct PageView {
    story: String,
    image_url: Option<String>,
    audio_src: Option<String>,
    idea: String,
    story_template: String,
    image_style: String,
    voice: Voice,
    size: ImageSize,
    key_source: KeySource,
    notice: Option<String>,
    error: Option<String>,
}

impl PageView {
    /// View of a session with pristine form controls.
    pub(crate) fn new(session: &Session) -> Self {
        let audio_src = session.audio_file().as_ref().and_then(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| format!("/artifacts/audios/{}", name))
        });
        Self {
            story: session.story().clone().unwrap_or_default(),
            image_url: session.image_url().clone(),
            audio_src,
            idea: String::new(),
            story_template: DEFAULT_STORY_TEMPLATE.to_string(),
            image_style: DEFAULT_IMAGE_STYLE.to_string(),
            voice: (*session.last_voice()).unwrap_or_default(),
            size: ImageSize::default(),
            key_source: KeySource::default(),
            notice: None,
            error: None,
        }
    }

    /// Echo the posted form values back into the controls.
    ///
    /// The API key is deliberately not echoed.
    pub(crate) fn with_form(mut self, form: &StudioForm) -> Self {
        self.idea = form.idea.clone();
        self.story_template = form.story_template.clone();
        self.image_style = form.image_style.clone();
        self.voice = form.voice;
        self.size = form.size;
        self.key_source = form.key_source;
        self
    }

    pub(crate) fn with_notice(mut self, message: impl Into<String>) -> Self {
        self.notice = Some(message.into());
        self
    }

    pub(crate) fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Render the full HTML document.
    pub(crate) fn render(&self) -> String {
        let mut html = String::with_capacity(8 * 1024);
        html.push_str(
            "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>Fabulist</title>\n<style>\n",
        );
        html.push_str(STYLE);
        html.push_str("</style>\n</head>\n<body>\n<h1>Toddler Picture Story Generator</h1>\n");

        if let Some(error) = &self.error {
            html.push_str(&format!(
                "<p class=\"banner error\">{}</p>\n",
                escape_html(error)
            ));
        }
        if let Some(notice) = &self.notice {
            html.push_str(&format!(
                "<p class=\"banner notice\">{}</p>\n",
                escape_html(notice)
            ));
        }

        html.push_str("<form method=\"post\" action=\"/generate\">\n");
        html.push_str(&format!(
            "<label for=\"idea\">Please input the Story Idea, keywords or short sentence:</label>\n\
             <textarea id=\"idea\" name=\"idea\" rows=\"2\">{}</textarea>\n",
            escape_html(&self.idea)
        ));

        html.push_str(&format!(
            "<details>\n<summary>Story prompt template</summary>\n\
             <textarea name=\"story_template\" rows=\"9\">{}</textarea>\n</details>\n",
            escape_html(&self.story_template)
        ));
        html.push_str(&format!(
            "<details>\n<summary>Image style</summary>\n\
             <textarea name=\"image_style\" rows=\"6\">{}</textarea>\n</details>\n",
            escape_html(&self.image_style)
        ));

        html.push_str(
            "<label for=\"voice\">Select a voice for the audio:</label>\n\
             <select id=\"voice\" name=\"voice\">\n",
        );
        for voice in Voice::iter() {
            html.push_str(&option(&voice.to_string(), voice == self.voice));
        }
        html.push_str("</select>\n");

        html.push_str(
            "<label for=\"size\">Image size:</label>\n<select id=\"size\" name=\"size\">\n",
        );
        for size in ImageSize::iter() {
            html.push_str(&option(&size.to_string(), size == self.size));
        }
        html.push_str("</select>\n");

        html.push_str(
            "<label for=\"key_source\">OpenAI API key:</label>\n\
             <select id=\"key_source\" name=\"key_source\">\n",
        );
        html.push_str(&labeled_option(
            "env",
            "From the environment",
            self.key_source == KeySource::Env,
        ));
        html.push_str(&labeled_option(
            "manual",
            "Entered below",
            self.key_source == KeySource::Manual,
        ));
        html.push_str("</select>\n");
        html.push_str("<input type=\"password\" name=\"api_key\" placeholder=\"sk-...\">\n");

        html.push_str(
            "<div class=\"buttons\">\n\
             <button formaction=\"/generate\">Generate/Regenerate Story</button>\n\
             <button formaction=\"/image\">Regenerate Image</button>\n\
             <button formaction=\"/audio\">Regenerate Audio</button>\n\
             </div>\n</form>\n",
        );

        html.push_str(&format!(
            "<h2>Generated Story:</h2>\n<div class=\"story\">{}</div>\n",
            escape_html(&self.story)
        ));
        if let Some(url) = &self.image_url {
            html.push_str(&format!(
                "<img class=\"illustration\" src=\"{}\" alt=\"Generated Image\">\n",
                escape_html(url)
            ));
        }
        if let Some(src) = &self.audio_src {
            html.push_str(&format!(
                "<audio controls src=\"{}\"></audio>\n",
                escape_html(src)
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

fn option(value: &str, selected: bool) -> String {
    labeled_option(value, value, selected)
}

fn labeled_option(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>\n",
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
