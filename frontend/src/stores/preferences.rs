// Pre-release feature toggles, persisted per browser

use std::collections::BTreeSet;

use gloo_storage::{LocalStorage, Storage};

const FEATURES_STORAGE_KEY: &str = "parlor_pre_release_features";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseFeature {
    MarkdownPreview,
    EmbedPreview,
    WebrtcPreview,
}

impl PreReleaseFeature {
    pub fn label(&self) -> &'static str {
        match self {
            PreReleaseFeature::MarkdownPreview => "markdown_preview",
            PreReleaseFeature::EmbedPreview => "embed_preview",
            PreReleaseFeature::WebrtcPreview => "webrtc_preview",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PreReleaseFeature::MarkdownPreview => "Show markdown preview option in message input box",
            PreReleaseFeature::EmbedPreview => "Show preview snippet of links below message",
            PreReleaseFeature::WebrtcPreview => "Enable WebRTC one on one calls",
        }
    }

    pub fn all() -> [PreReleaseFeature; 3] {
        [
            PreReleaseFeature::MarkdownPreview,
            PreReleaseFeature::EmbedPreview,
            PreReleaseFeature::WebrtcPreview,
        ]
    }

    pub fn from_label(s: &str) -> Option<PreReleaseFeature> {
        Self::all().into_iter().find(|f| f.label() == s)
    }
}

/// Set of pre-release features the viewer opted into.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreReleaseFeatures(BTreeSet<PreReleaseFeature>);

impl PreReleaseFeatures {
    /// Unknown labels (features since removed) are dropped.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self(
            labels
                .iter()
                .filter_map(|l| PreReleaseFeature::from_label(l.as_ref()))
                .collect(),
        )
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(|f| f.label()).collect()
    }

    pub fn is_enabled(&self, feature: PreReleaseFeature) -> bool {
        self.0.contains(&feature)
    }

    pub fn with(mut self, feature: PreReleaseFeature, enabled: bool) -> Self {
        if enabled {
            self.0.insert(feature);
        } else {
            self.0.remove(&feature);
        }
        self
    }

    pub fn load() -> Self {
        LocalStorage::get::<Vec<String>>(FEATURES_STORAGE_KEY)
            .map(|labels| Self::from_labels(&labels))
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = LocalStorage::set(FEATURES_STORAGE_KEY, self.labels()) {
            tracing::warn!(error = %e, "failed to persist pre-release features");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_and_skip_unknown() {
        let features = PreReleaseFeatures::from_labels(&["webrtc_preview", "loc_preview"]);

        assert!(features.is_enabled(PreReleaseFeature::WebrtcPreview));
        assert!(!features.is_enabled(PreReleaseFeature::MarkdownPreview));
        assert_eq!(features.labels(), vec!["webrtc_preview"]);
    }

    #[test]
    fn test_toggle_feature() {
        let features = PreReleaseFeatures::default()
            .with(PreReleaseFeature::WebrtcPreview, true)
            .with(PreReleaseFeature::EmbedPreview, true)
            .with(PreReleaseFeature::EmbedPreview, false);

        assert!(features.is_enabled(PreReleaseFeature::WebrtcPreview));
        assert!(!features.is_enabled(PreReleaseFeature::EmbedPreview));
    }
}
