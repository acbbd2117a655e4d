use super::{CategoryProfile, Classification, Classifier, PROFILES};

/// Bytes of content inspected in addition to the filename.
const CONTENT_PREFIX_BYTES: usize = 4096;

/// Keyword-based classifier.
///
/// Counts keyword hits per category over the lowercased filename and the
/// first few KiB of content. The category with the most hits wins; ties go
/// to the earlier category. Without any hit the upload is treated as a
/// maintenance report.
#[derive(Debug, Default, Clone)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn best_profile(text: &str) -> &'static CategoryProfile {
        let mut best: Option<(&CategoryProfile, usize)> = None;
        for profile in PROFILES {
            let hits = profile
                .keywords
                .iter()
                .filter(|keyword| text.contains(*keyword))
                .count();
            if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
                best = Some((profile, hits));
            }
        }
        best.map(|(profile, _)| profile).unwrap_or(&PROFILES[0])
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, filename: &str, content: &[u8]) -> Classification {
        let prefix = &content[..content.len().min(CONTENT_PREFIX_BYTES)];
        let text = format!(
            "{} {}",
            filename.to_lowercase(),
            String::from_utf8_lossy(prefix).to_lowercase()
        );
        let profile = Self::best_profile(&text);
        log::debug!("Classified '{}' as {}", filename, profile.category);
        profile.classification(filename)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
