use crate::core::video_id::watch_url;
use crate::error::Result;
use derive_more::Display;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    #[display("INVALID_URL")]
    InvalidUrl,
    #[display("NO_TRANSCRIPT")]
    NoTranscript,
    #[display("TRANSCRIPT_DISABLED")]
    TranscriptDisabled,
    #[display("VIDEO_NOT_FOUND")]
    VideoNotFound,
    #[display("NETWORK_ERROR")]
    NetworkError,
}

/// One caption line as delivered by the transcript service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchedVideo {
    pub video_id: String,
    pub url: String,
    pub transcript: Vec<TranscriptEntry>,
    pub full_text: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub error: String,
    pub error_code: ErrorCode,
}

/// The single record every invocation prints.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(FetchedVideo),
    Failure(Failure),
}

#[derive(Serialize)]
struct Tagged<'a, T> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for FetchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Success(body) => Tagged {
                success: true,
                body,
            }
            .serialize(serializer),
            Self::Failure(body) => Tagged {
                success: false,
                body,
            }
            .serialize(serializer),
        }
    }
}

impl FetchOutcome {
    pub fn success(
        video_id: impl Into<String>,
        language: impl Into<String>,
        transcript: Vec<TranscriptEntry>,
    ) -> Self {
        let video_id = video_id.into();
        let full_text = full_text(&transcript);

        Self::Success(FetchedVideo {
            url: watch_url(&video_id),
            video_id,
            transcript,
            full_text,
            language: language.into(),
        })
    }

    pub fn failure(error_code: ErrorCode, error: impl Into<String>) -> Self {
        Self::Failure(Failure {
            error: error.into(),
            error_code,
        })
    }

    pub fn invalid_url(input: &str) -> Self {
        Self::failure(
            ErrorCode::InvalidUrl,
            format!("Could not extract video ID from: {input}"),
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.error_code),
        }
    }

    pub fn exit_status(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn full_text(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
