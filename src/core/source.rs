use crate::core::outcome::TranscriptEntry;
use crate::core::transcript::{TrackInfo, TranscriptSource, UpstreamError};
use crate::error::{Error, Result};
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::TranscriptList;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};

/// Transcript source backed by `yt-transcript-rs`.
#[derive(Clone)]
pub struct YouTubeSource {
    api: YouTubeTranscriptApi,
    preserve_formatting: bool,
}

impl YouTubeSource {
    pub fn new(preserve_formatting: bool) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| Error::custom(format!("Failed to create transcript client: {e}")))?;
        Ok(Self {
            api,
            preserve_formatting,
        })
    }
}

impl TranscriptSource for YouTubeSource {
    async fn list_tracks(&self, video_id: &str) -> std::result::Result<Vec<TrackInfo>, UpstreamError> {
        let listing = self
            .api
            .list_transcripts(video_id)
            .await
            .map_err(classify)?;

        Ok(tracks_from_listing(&listing))
    }

    // `fetch_transcript` lists again and looks the code up manual-first, which
    // matches the order `tracks_from_listing` produces. That is a second round
    // trip: if the listing changes in between, the fetched track can differ
    // from the one `select_track` picked.
    async fn fetch_track(
        &self,
        video_id: &str,
        track: &TrackInfo,
    ) -> std::result::Result<Vec<TranscriptEntry>, UpstreamError> {
        let fetched = self
            .api
            .fetch_transcript(
                video_id,
                &[track.language_code.as_str()],
                self.preserve_formatting,
            )
            .await
            .map_err(|e| UpstreamError::Other(e.to_string()))?;

        Ok(fetched
            .snippets
            .into_iter()
            .map(|snippet| TranscriptEntry {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }
}

/// Tracks as manual first, then generated, each group sorted by language code.
/// `TranscriptList` keeps its tracks in hash maps, so YouTube's caption order
/// is already gone by the time we see it.
fn tracks_from_listing(listing: &TranscriptList) -> Vec<TrackInfo> {
    let mut tracks: Vec<TrackInfo> = listing
        .transcripts()
        .map(|t| TrackInfo {
            language_code: t.language_code.clone(),
            language: t.language.clone(),
            is_generated: t.is_generated,
        })
        .collect();

    tracks.sort_by(|a, b| {
        a.is_generated
            .cmp(&b.is_generated)
            .then_with(|| a.language_code.cmp(&b.language_code))
    });
    tracks
}

fn classify(err: CouldNotRetrieveTranscript) -> UpstreamError {
    match &err.reason {
        Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => {
            UpstreamError::NoTranscript
        }
        Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled { .. }) => {
            UpstreamError::TranscriptsDisabled
        }
        Some(
            CouldNotRetrieveTranscriptReason::VideoUnavailable
            | CouldNotRetrieveTranscriptReason::InvalidVideoId,
        ) => UpstreamError::VideoUnavailable,
        _ => UpstreamError::Other(err.to_string()),
    }
}
