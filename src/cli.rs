use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "transcript-fetch")]
#[command(about = "Fetch a YouTube video transcript as JSON")]
#[command(version = "0.1.0")]
#[command(after_help = "Examples:
  transcript-fetch --url \"https://youtube.com/watch?v=dQw4w9WgXcQ\"
  transcript-fetch --url \"https://youtu.be/dQw4w9WgXcQ\"
  transcript-fetch --url \"dQw4w9WgXcQ\"")]
pub struct Cli {
    /// YouTube URL or video ID
    #[arg(long)]
    pub url: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Preferred transcript languages (comma-separated)
    #[arg(short, long, default_value = "en,en-US,en-GB")]
    pub languages: String,

    /// Preserve formatting in transcript
    #[arg(long)]
    pub preserve_formatting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
}

impl Cli {
    pub fn language_list(&self) -> Vec<String> {
        self.languages
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, OutputFormat};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_json_and_english() {
        let cli = Cli::try_parse_from(["transcript-fetch", "--url", "dQw4w9WgXcQ"]).expect("parses");
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.language_list(), vec!["en", "en-US", "en-GB"]);
        assert!(!cli.preserve_formatting);
    }

    #[test]
    fn url_is_required() {
        assert!(Cli::try_parse_from(["transcript-fetch"]).is_err());
    }

    #[test]
    fn rejects_unknown_output_format() {
        assert!(
            Cli::try_parse_from(["transcript-fetch", "--url", "x", "--output", "yaml"]).is_err()
        );
    }

    #[test]
    fn splits_language_list() {
        let cli = Cli::try_parse_from([
            "transcript-fetch",
            "--url",
            "dQw4w9WgXcQ",
            "--languages",
            " de , fr,,",
        ])
        .expect("parses");
        assert_eq!(cli.language_list(), vec!["de", "fr"]);
    }
}
