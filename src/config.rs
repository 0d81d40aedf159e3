const FORISMATIC_ENDPOINT: &str = "https://api.forismatic.com/api/1.0/";
const QUOTE_LANG: &str = "en";

#[cfg(target_os = "macos")]
const SPEECH_COMMAND: &str = "say";
#[cfg(not(target_os = "macos"))]
const SPEECH_COMMAND: &str = "espeak";

const WINDOW_TITLE: &str = "Quote of the Day";
const WINDOW_SIZE: (f32, f32) = (480., 640.);

#[derive(Debug, Clone)]
pub struct QuoteConfig {
    pub endpoint: String,
    pub lang: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            endpoint: FORISMATIC_ENDPOINT.to_string(),
            lang: QUOTE_LANG.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub command: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            command: SPEECH_COMMAND.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub quote: QuoteConfig,
    pub speech: SpeechConfig,
    pub window_title: String,
    pub window_size: (f32, f32),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quote: QuoteConfig::default(),
            speech: SpeechConfig::default(),
            window_title: WINDOW_TITLE.to_string(),
            window_size: WINDOW_SIZE,
        }
    }
}
