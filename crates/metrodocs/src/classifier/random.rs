use rand::seq::SliceRandom;

use super::{Classification, Classifier, PROFILES};

/// Picks a category uniformly at random, ignoring the input.
#[derive(Debug, Default, Clone)]
pub struct RandomClassifier;

impl RandomClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for RandomClassifier {
    fn classify(&self, filename: &str, _content: &[u8]) -> Classification {
        let profile = PROFILES
            .choose(&mut rand::thread_rng())
            .unwrap_or(&PROFILES[0]);
        profile.classification(filename)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_result_is_a_known_profile() {
        let classifier = RandomClassifier::new();
        for _ in 0..20 {
            let result = classifier.classify("upload.pdf", b"");
            assert!(PROFILES.iter().any(|p| p.label == result.label
                && p.category == result.category
                && p.department == result.department));
            assert!(result.summary.starts_with("upload.pdf - "));
        }
    }
}
