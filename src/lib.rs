use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

mod error;
mod session;

pub use error::{CliError, InputError};
pub use session::{pick_safe_message, Session, VerificationState, SAFE_MESSAGES};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Why a message was classified as dangerous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerReason {
    /// The text contains a phrase common in scam messages.
    SuspiciousKeyword,
    /// A link spells a sensitive word with digits or symbols in place of letters.
    CamouflagedUrl,
    /// A link goes through a URL shortener.
    ShortenedUrl,
}

impl DangerReason {
    /// The fixed user-facing warning for this reason.
    pub fn message(self) -> &'static str {
        match self {
            DangerReason::SuspiciousKeyword => KEYWORD_MESSAGE,
            DangerReason::CamouflagedUrl => CAMOUFLAGE_MESSAGE,
            DangerReason::ShortenedUrl => SHORTENER_MESSAGE,
        }
    }
}

/// What triggered a `Danger` classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evidence {
    /// The keyword, URL term or shortener domain that matched.
    #[serde(rename = "match")]
    pub match_text: String,
    /// The extracted URL, for URL-based reasons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisResult {
    Danger {
        reason: DangerReason,
        message: &'static str,
        evidence: Evidence,
    },
    Safe {
        message: &'static str,
    },
}

impl AnalysisResult {
    fn danger(reason: DangerReason, match_text: &str, url: Option<&str>) -> Self {
        AnalysisResult::Danger {
            reason,
            message: reason.message(),
            evidence: Evidence {
                match_text: match_text.to_string(),
                url: url.map(str::to_string),
            },
        }
    }

    pub fn is_danger(&self) -> bool {
        matches!(self, AnalysisResult::Danger { .. })
    }

    pub fn reason(&self) -> Option<DangerReason> {
        match self {
            AnalysisResult::Danger { reason, .. } => Some(*reason),
            AnalysisResult::Safe { .. } => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AnalysisResult::Danger { message, .. } | AnalysisResult::Safe { message } => *message,
        }
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const KEYWORD_MESSAGE: &str =
    "Cuidado! A mensagem contém palavras suspeitas que são comuns em golpes.";

pub const CAMOUFLAGE_MESSAGE: &str = "Alerta! O endereço do site usa táticas de camuflagem \
     (letras trocadas por números) para parecer legítimo.";

pub const SHORTENER_MESSAGE: &str =
    "Atenção: Este é um link encurtado. Golpistas os usam para esconder o site real. Desconfie!";

pub const SAFE_MESSAGE: &str =
    "Tudo certo! Não encontramos sinais óbvios de golpe nesta mensagem ou link.";

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Phrases matched as substrings of the lower-cased text.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "parabéns, você ganhou",
    "prêmio",
    "oferta imperdível",
    "clique aqui para resgatar",
    "senha",
    "banco",
    "atualize seus dados",
    "cartão de crédito",
    "grátis",
    "herança",
    "dívida",
];

/// Stems matched against the de-obfuscated, alphanumeric-only form of each URL.
pub const SUSPICIOUS_URL_TERMS: &[&str] = &[
    // Fraud
    "roub", "golp", "fraud",
    // Banking
    "banc", "bank", "cont", "kont",
    // Bait
    "grat", "prem", "ofert",
    // Account takeover
    "seguran", "verific", "login", "senh", "acess", "atualiz",
    // Targets
    "idoso", "dinh", "cart", "cred",
];

pub const URL_SHORTENERS: &[&str] = &["bit.ly", "tinyurl.com", "goo.gl", "is.gd", "t.co"];

// Digits and symbols that stand in for letters in camouflaged links.
const LEET_SUBSTITUTIONS: &[(char, char)] = &[
    ('4', 'a'),
    ('@', 'a'),
    ('3', 'e'),
    ('1', 'i'),
    ('!', 'i'),
    ('0', 'o'),
    ('5', 's'),
    ('$', 's'),
];

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lower-cases the text; every later check works on this form.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Every `http://` or `https://` run up to the next whitespace, in order.
pub fn extract_urls(text: &str) -> Vec<&str> {
    URL_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Reverses the digit/symbol-for-letter swaps, then drops everything that is
/// not an ASCII letter or digit.
pub fn deobfuscate_url(url: &str) -> String {
    url.chars()
        .map(|c| {
            LEET_SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |&(_, to)| to)
        })
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn first_match<'a>(haystack: &str, needles: &[&'a str]) -> Option<&'a str> {
    needles.iter().copied().find(|n| haystack.contains(n))
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Classifies `text` as dangerous or safe.
///
/// Checks run in a fixed order and the first hit wins: suspicious keywords,
/// camouflaged URLs (over every URL), then shortened URLs. The result depends
/// only on the input, so repeated calls agree.
pub fn analyze(text: &str) -> AnalysisResult {
    let lowered = normalize(text);

    if let Some(keyword) = first_match(&lowered, SUSPICIOUS_KEYWORDS) {
        log::debug!("Suspicious keyword found: {keyword:?}");
        return AnalysisResult::danger(DangerReason::SuspiciousKeyword, keyword, None);
    }

    let urls = extract_urls(&lowered);
    log::trace!("Extracted {} URL(s)", urls.len());

    for &url in &urls {
        let cleaned = deobfuscate_url(url);
        log::trace!("Cleaned {url:?} to {cleaned:?}");
        if let Some(term) = first_match(&cleaned, SUSPICIOUS_URL_TERMS) {
            log::debug!("Camouflaged URL {url:?} contains {term:?}");
            return AnalysisResult::danger(DangerReason::CamouflagedUrl, term, Some(url));
        }
    }

    for &url in &urls {
        if let Some(domain) = first_match(url, URL_SHORTENERS) {
            log::debug!("Shortened URL {url:?} uses {domain:?}");
            return AnalysisResult::danger(DangerReason::ShortenedUrl, domain, Some(url));
        }
    }

    log::debug!("No scam signals found");
    AnalysisResult::Safe {
        message: SAFE_MESSAGE,
    }
}

/// Rejects empty or whitespace-only text before it reaches [`analyze`].
pub fn validate_input(text: &str) -> Result<&str, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(text)
}
