use crate::core::outcome::{ErrorCode, FetchOutcome, TranscriptEntry};
use derive_more::Display;
use tracing::{debug, info, warn};

pub const DEFAULT_LANGUAGES: &[&str] = &["en", "en-US", "en-GB"];

/// One language/origin variant offered by the transcript listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub language_code: String,
    pub language: String,
    pub is_generated: bool,
}

/// Upstream failures, flattened to the handful of cases we report on.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum UpstreamError {
    #[display("no transcripts are listed for this video")]
    NoTranscript,
    #[display("transcripts are disabled for this video")]
    TranscriptsDisabled,
    #[display("video is unavailable")]
    VideoUnavailable,
    #[display("{_0}")]
    Other(String),
}

impl std::error::Error for UpstreamError {}

/// Where transcripts come from. Tracks are returned in listing order.
#[allow(async_fn_in_trait)]
pub trait TranscriptSource {
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<TrackInfo>, UpstreamError>;

    async fn fetch_track(
        &self,
        video_id: &str,
        track: &TrackInfo,
    ) -> Result<Vec<TranscriptEntry>, UpstreamError>;
}

pub struct TranscriptService<S> {
    source: S,
    languages: Vec<String>,
}

impl<S: TranscriptSource> TranscriptService<S> {
    pub fn new(source: S, languages: Vec<String>) -> Self {
        let languages = if languages.is_empty() {
            DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
        } else {
            languages
        };
        Self { source, languages }
    }

    pub async fn fetch(&self, video_id: &str) -> FetchOutcome {
        let tracks = match self.source.list_tracks(video_id).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warn!(video_id, error = %e, "transcript listing failed");
                return listing_failure(e);
            }
        };
        debug!(video_id, count = tracks.len(), "transcripts listed");

        let Some(track) = select_track(&tracks, &self.languages) else {
            return listing_failure(UpstreamError::NoTranscript);
        };
        info!(
            video_id,
            language = %track.language_code,
            name = %track.language,
            generated = track.is_generated,
            "selected transcript track"
        );

        match self.source.fetch_track(video_id, track).await {
            Ok(entries) => FetchOutcome::success(video_id, &track.language_code, entries),
            Err(e) => {
                warn!(video_id, error = %e, "transcript fetch failed");
                FetchOutcome::failure(
                    ErrorCode::NetworkError,
                    format!("Failed to fetch transcript: {e}"),
                )
            }
        }
    }
}

/// Manual track in a preferred language, then a generated one, then whatever is listed first.
pub fn select_track<'a>(tracks: &'a [TrackInfo], languages: &[String]) -> Option<&'a TrackInfo> {
    let preferred = |generated: bool| {
        languages.iter().find_map(|code| {
            tracks
                .iter()
                .find(|t| t.is_generated == generated && &t.language_code == code)
        })
    };

    preferred(false)
        .or_else(|| preferred(true))
        .or_else(|| tracks.first())
}

fn listing_failure(err: UpstreamError) -> FetchOutcome {
    match err {
        UpstreamError::NoTranscript => FetchOutcome::failure(
            ErrorCode::NoTranscript,
            "No transcript available for this video",
        ),
        UpstreamError::TranscriptsDisabled => FetchOutcome::failure(
            ErrorCode::TranscriptDisabled,
            "Transcripts are disabled for this video",
        ),
        UpstreamError::VideoUnavailable => {
            FetchOutcome::failure(ErrorCode::VideoNotFound, "Video not found or unavailable")
        }
        UpstreamError::Other(msg) => FetchOutcome::failure(
            ErrorCode::NetworkError,
            format!("Network or API error: {msg}"),
        ),
    }
}
