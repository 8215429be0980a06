use regex::Regex;
use std::sync::LazyLock;

static RAW_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("valid raw id pattern"));

/// URL shapes we understand, in priority order. Each captures the 11-character ID.
static URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"youtube\.com/watch\?.*v=([a-zA-Z0-9_-]{11})",
        r"youtu\.be/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/embed/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/v/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid url pattern"))
    .collect()
});

/// Extract a video ID from a YouTube URL or a bare 11-character ID.
///
/// Patterns are tried in priority order, so a `watch?v=` match wins over a
/// `youtu.be/` match even when the latter appears earlier in the input.
/// Nothing checks that the ID exists; an unknown ID only fails at fetch time.
pub fn extract_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();

    if RAW_ID.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    URL_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://youtube.com/watch?v={video_id}")
}
