use clap::Parser;

use crate::config::KEY_ENV;

#[derive(Parser, Debug)]
#[command(name = "ytr")]
#[command(about = "Translate text with the Yandex.Translate API")]
#[command(version)]
pub struct Args {
    /// Text to translate (all arguments are joined with spaces)
    pub text: Vec<String>,

    /// API key
    #[arg(short = 'k', long, env = KEY_ENV, hide_env_values = true)]
    pub key: Option<String>,

    /// Destination language (two- or three-letter code) [default: ru]
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Source language; auto-detected by default
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Detect the language of the text instead of translating it
    #[arg(short = 'l', long = "lang")]
    pub detect: bool,

    /// List supported translation directions
    #[arg(long = "ls")]
    pub list_directions: bool,

    /// API endpoint root
    #[arg(long)]
    pub url: Option<String>,

    /// Suppress the progress spinner
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Log requests to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// The positional arguments joined into the input text.
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }

    /// Whether any non-blank input text was given.
    pub fn has_text(&self) -> bool {
        !self.joined_text().trim().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_text_is_joined() {
        let args = Args::try_parse_from(["ytr", "hello", "big", "world"]).unwrap();
        assert_eq!(args.joined_text(), "hello big world");
    }

    #[test]
    fn test_blank_arguments_are_not_text() {
        let cases: [&[&str]; 4] = [&["ytr"], &["ytr", ""], &["ytr", "", ""], &["ytr", " "]];
        for argv in cases {
            let args = Args::try_parse_from(argv.iter().copied()).unwrap();
            assert!(!args.has_text(), "{argv:?}");
        }

        let args = Args::try_parse_from(["ytr", "", "hi"]).unwrap();
        assert!(args.has_text());
    }

    #[test]
    fn test_mode_flags() {
        let args = Args::try_parse_from(["ytr", "--ls", "--lang", "-t", "de", "-f", "en"]).unwrap();

        assert!(args.list_directions);
        assert!(args.detect);
        assert_eq!(args.to.as_deref(), Some("de"));
        assert_eq!(args.from.as_deref(), Some("en"));
        assert!(args.text.is_empty());
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
