//! Human-readable explanations accompanying a verdict.
//!
//! URL explanations come from a fixed, ordered set of structural checks on
//! the submitted string. The service returns no explanation of its own.

/// URLs longer than this many UTF-16 code units are flagged.
pub const MAX_URL_LENGTH: usize = 50;

/// URLs splitting into more than this many `.`-separated segments are flagged.
pub const MAX_DOT_SEGMENTS: usize = 3;

const PHISHING_URL_PREFIX: &str =
    "Our model identified patterns often found in fraudulent links, such as: ";

const FALLBACK_REASON: &str = "suspicious character combinations";

pub const LEGITIMATE_URL_RATIONALE: &str =
    "The URL structure appears standard and doesn't match known malicious patterns.";

pub const PHISHING_EMAIL_RATIONALE: &str =
    "The content contains linguistic patterns, urgency, or suspicious links typical of phishing attempts.";

pub const LEGITIMATE_EMAIL_RATIONALE: &str =
    "The email content appears legitimate based on our textual analysis.";

/// A structural trait of a URL that commonly shows up in fraudulent links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSignal {
    AtSymbol,
    ExcessiveLength,
    ManySubdomains,
}

impl UrlSignal {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::AtSymbol => "Contains unusual '@' symbol",
            Self::ExcessiveLength => "Unusually long URL",
            Self::ManySubdomains => "Too many subdomains",
        }
    }
}

/// Evaluate every check against `input`, in order. No check short-circuits another.
pub fn url_signals(input: &str) -> Vec<UrlSignal> {
    let mut signals = Vec::new();
    if input.contains('@') {
        signals.push(UrlSignal::AtSymbol);
    }
    if input.encode_utf16().count() > MAX_URL_LENGTH {
        signals.push(UrlSignal::ExcessiveLength);
    }
    if input.split('.').count() > MAX_DOT_SEGMENTS {
        signals.push(UrlSignal::ManySubdomains);
    }
    signals
}

/// Explanation for a URL verdict.
///
/// Signals only ever explain a phishing verdict; a legitimate verdict always
/// gets the same sentence, whatever the checks found.
pub fn url_rationale(input: &str, is_phishing: bool) -> String {
    let signals = url_signals(input);
    if !is_phishing {
        return LEGITIMATE_URL_RATIONALE.to_string();
    }

    let reasons = if signals.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        signals
            .iter()
            .map(UrlSignal::reason)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{}{}.", PHISHING_URL_PREFIX, reasons)
}

/// Explanation for an email verdict. The text itself is never inspected.
pub fn email_rationale(is_phishing: bool) -> &'static str {
    if is_phishing {
        PHISHING_EMAIL_RATIONALE
    } else {
        LEGITIMATE_EMAIL_RATIONALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_in_order() {
        let url = format!("http://user@{}.example.co.uk", "a".repeat(60));
        assert_eq!(
            url_signals(&url),
            vec![
                UrlSignal::AtSymbol,
                UrlSignal::ExcessiveLength,
                UrlSignal::ManySubdomains
            ]
        );
    }

    #[test]
    fn test_no_signals_for_plain_url() {
        assert!(url_signals("https://example.com").is_empty());
    }

    #[test]
    fn test_length_boundary() {
        let exactly = format!("http://{}", "a".repeat(MAX_URL_LENGTH - 7));
        assert_eq!(exactly.chars().count(), 50);
        assert!(!url_signals(&exactly).contains(&UrlSignal::ExcessiveLength));

        let over = format!("{}b", exactly);
        assert_eq!(over.chars().count(), 51);
        assert!(url_signals(&over).contains(&UrlSignal::ExcessiveLength));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // each emoji is two UTF-16 units: 7 + 22 * 2 = 51
        let emoji = format!("http://{}", "\u{1F600}".repeat(22));
        assert_eq!(emoji.chars().count(), 29);
        assert!(url_signals(&emoji).contains(&UrlSignal::ExcessiveLength));

        let at_limit = format!("http://{}a", "\u{1F600}".repeat(21));
        assert_eq!(at_limit.encode_utf16().count(), 50);
        assert!(!url_signals(&at_limit).contains(&UrlSignal::ExcessiveLength));
    }

    #[test]
    fn test_segment_boundary() {
        // 3 segments
        assert!(!url_signals("a.b.c").contains(&UrlSignal::ManySubdomains));
        // 4 segments
        assert!(url_signals("a.b.c.d").contains(&UrlSignal::ManySubdomains));
    }

    #[test]
    fn test_phishing_url_rationale_lists_reasons() {
        let rationale = url_rationale("http://a@b.com/x.y.z.w", true);
        assert_eq!(
            rationale,
            "Our model identified patterns often found in fraudulent links, such as: \
             Contains unusual '@' symbol, Too many subdomains."
        );
    }

    #[test]
    fn test_phishing_url_rationale_fallback() {
        assert_eq!(
            url_rationale("http://paypa1.com", true),
            "Our model identified patterns often found in fraudulent links, such as: \
             suspicious character combinations."
        );
    }

    #[test]
    fn test_legitimate_url_rationale_ignores_signals() {
        assert_eq!(url_rationale("http://a@b.c.d.e", false), LEGITIMATE_URL_RATIONALE);
        assert_eq!(url_rationale("https://example.com", false), LEGITIMATE_URL_RATIONALE);
    }

    #[test]
    fn test_email_rationale() {
        assert_eq!(email_rationale(true), PHISHING_EMAIL_RATIONALE);
        assert_eq!(email_rationale(false), LEGITIMATE_EMAIL_RATIONALE);
    }
}
