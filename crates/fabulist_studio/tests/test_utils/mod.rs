//! Test utilities for studio tests.
//!
//! Recording fakes for the three adapter traits. Each fake counts its calls
//! through a shared counter so cloned handles observe the studio's usage.

use async_trait::async_trait;
use fabulist_core::{ImageSize, Voice};
use fabulist_error::{ChatError, ChatErrorKind, FabulistResult};
use fabulist_interface::{Illustrator, Narrator, StoryTeller};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Story teller returning canned stories in order, or failing when
/// constructed with `new_error`.
///
/// The last canned story repeats once the sequence is exhausted.
#[derive(Clone)]
pub struct MockTeller {
    stories: Vec<String>,
    calls: Arc<Mutex<usize>>,
}

impl MockTeller {
    pub fn new_success(story: &str) -> Self {
        Self::new_sequence(&[story])
    }

    pub fn new_sequence(stories: &[&str]) -> Self {
        Self {
            stories: stories.iter().map(|s| s.to_string()).collect(),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn new_error() -> Self {
        Self {
            stories: Vec::new(),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl StoryTeller for MockTeller {
    async fn tell(&self, _prompt: &str) -> FabulistResult<String> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        let index = (*calls - 1).min(self.stories.len().saturating_sub(1));
        match self.stories.get(index) {
            Some(story) => Ok(story.clone()),
            None => Err(ChatError::new(ChatErrorKind::Status {
                status_code: 503,
                message: "mock overloaded".to_string(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-story"
    }
}

/// Illustrator returning a fixed URL and deterministic image bytes.
#[derive(Clone)]
pub struct MockIllustrator {
    url: String,
    calls: Arc<Mutex<usize>>,
}

impl MockIllustrator {
    pub fn new_success(url: &str) -> Self {
        Self {
            url: url.to_string(),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Illustrator for MockIllustrator {
    async fn illustrate(
        &self,
        _story: &str,
        _style: &str,
        _size: ImageSize,
    ) -> FabulistResult<String> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.url.clone())
    }

    async fn fetch(&self, url: &str) -> FabulistResult<Vec<u8>> {
        Ok(format!("png:{}", url).into_bytes())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }
}

/// Narrator writing the story bytes to the output path.
#[derive(Clone)]
pub struct MockNarrator {
    calls: Arc<Mutex<usize>>,
}

impl MockNarrator {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Narrator for MockNarrator {
    async fn narrate(&self, story: &str, _voice: Voice, output: &Path) -> FabulistResult<()> {
        *self.calls.lock().unwrap() += 1;
        tokio::fs::write(output, story.as_bytes()).await.unwrap();
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
