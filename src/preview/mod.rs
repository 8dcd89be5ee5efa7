//! Live preview of generated artifacts.
//!
//! DESIGN
//! ======
//! The preview is a small state machine driven by editor changes. Every
//! refresh splices the edited content region back into the full artifact's
//! marked region, renders the result against the fixed component registry,
//! and lands in `Rendered` or `Error`. Failures are contained here: a broken
//! edit shows an error panel and never touches history or the pipeline.

use tracing::debug;

use crate::pipeline::markers;

pub mod components;
pub mod parse;
pub mod render;

/// Where the preview currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    /// Nothing rendered yet.
    #[default]
    Idle,
    /// A render is in progress.
    Rendering,
    /// Last render succeeded; holds the emitted HTML.
    Rendered(String),
    /// Last render failed; holds the display message.
    Error(String),
}

/// The preview surface. Owns the current state and re-renders on demand.
#[derive(Debug, Default)]
pub struct Preview {
    state: PreviewState,
}

impl Preview {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Re-render from the edited content region.
    ///
    /// When a full artifact is available its marked region is replaced with
    /// `editable_code` so the shell stays intact; otherwise the edited code
    /// renders on its own. Never fails: parse or evaluation problems become
    /// [`PreviewState::Error`].
    pub fn refresh(&mut self, editable_code: &str, full_artifact: Option<&str>) {
        self.state = PreviewState::Rendering;

        let source = full_artifact
            .and_then(|artifact| markers::splice_content(artifact, editable_code))
            .unwrap_or_else(|| editable_code.to_string());

        self.state = match render::render_artifact(&source) {
            Ok(html) => {
                debug!(html_len = html.len(), "preview rendered");
                PreviewState::Rendered(html)
            }
            Err(message) => {
                debug!(%message, "preview render failed");
                PreviewState::Error(format!("Preview error: {message}"))
            }
        };
    }
}
