//! Tick-driven gesture recognition.
//!
//! [`GestureRecognizer`] owns the symbol history and runs the whole pipeline
//! once per tick: sample the skeleton, classify each hand, fold the
//! observations into the history and look for a template completed by the
//! newest pairs. A tick either finishes completely or, when nobody is
//! tracked, does nothing at all, so a host sharing the recognizer between
//! threads only needs to hold a lock for the duration of one call.

use crate::{
    config::RecognitionConfig,
    library::{GestureKind, GestureLibrary, GestureTemplate},
    pose_classifier::{Observation, PoseClassifier},
    sequence::{SequenceAssembler, SequenceBuffer},
    skeleton::{JointFrame, JointSampler, SkeletonSource, UserId},
    Error, Result,
};
use log::{debug, info, warn};

/// Streaming complex-gesture recognizer for one primary user
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    library: GestureLibrary,
    classifier: PoseClassifier,
    assembler: SequenceAssembler,
    history: SequenceBuffer,
    reset_on_tracking_loss: bool,
}

impl GestureRecognizer {
    /// Create a recognizer
    ///
    /// # Errors
    ///
    /// Returns an error if the history capacity cannot hold the longest template
    pub fn new(library: GestureLibrary, config: &RecognitionConfig) -> Result<Self> {
        let longest = library.longest_template();
        if config.history_capacity < longest.max(1) {
            return Err(Error::ConfigError(format!(
                "History capacity {} is shorter than the longest template ({})",
                config.history_capacity, longest
            )));
        }

        Ok(Self::build(library, config))
    }

    fn build(library: GestureLibrary, config: &RecognitionConfig) -> Self {
        Self {
            classifier: PoseClassifier::standard(config.shoulder_touch_tests),
            library,
            assembler: SequenceAssembler::new(),
            history: SequenceBuffer::bounded(config.history_capacity),
            reset_on_tracking_loss: config.reset_on_tracking_loss,
        }
    }

    /// Replace the pose battery
    #[must_use]
    pub fn with_classifier(mut self, classifier: PoseClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// The template library, in priority order
    #[must_use]
    pub fn library(&self) -> &GestureLibrary {
        &self.library
    }

    /// The pose battery
    #[must_use]
    pub fn classifier(&self) -> &PoseClassifier {
        &self.classifier
    }

    /// Current symbol history
    #[must_use]
    pub fn history(&self) -> &SequenceBuffer {
        &self.history
    }

    /// Forget all history
    pub fn reset(&mut self) {
        self.history.clear();
        self.assembler.begin_tick();
    }

    /// Run one tick for the sensor's primary user
    pub fn tick<S>(&mut self, source: &S) -> Option<GestureKind>
    where
        S: SkeletonSource + ?Sized,
    {
        let user = source.primary_user_id();
        self.try_recognize(source, user)
    }

    /// Run one tick for `user`.
    ///
    /// When `user` is absent (see [`JointSampler::sample`]) the history is left
    /// as is, unless the recognizer was configured to reset on tracking loss.
    pub fn try_recognize<S>(&mut self, source: &S, user: UserId) -> Option<GestureKind>
    where
        S: SkeletonSource + ?Sized,
    {
        let Some(frame) = JointSampler::sample(source, user) else {
            if self.reset_on_tracking_loss && !self.history.is_empty() {
                warn!("No user tracked, dropping {} pairs of history", self.history.len());
                self.history.clear();
            }
            return None;
        };

        self.process_frame(&frame)
    }

    /// Run one tick on an already sampled frame
    pub fn process_frame(&mut self, frame: &JointFrame) -> Option<GestureKind> {
        let observations = self.classifier.classify(frame);
        self.process_observations(&observations)
    }

    /// Run one tick on already classified observations
    pub fn process_observations(&mut self, observations: &[Observation]) -> Option<GestureKind> {
        self.assembler.begin_tick();
        self.assembler.observe_all(&mut self.history, observations);
        self.match_history().map(GestureTemplate::kind)
    }

    fn match_history(&mut self) -> Option<&GestureTemplate> {
        let template = self.library.find_match(&self.history)?;
        info!("Recognized {} (template {})", template.kind(), template.name());
        debug!("Clearing {} pairs of history", self.history.len());
        self.history.clear();
        Some(template)
    }
}

impl Default for GestureRecognizer {
    /// Standard library and battery; the default capacity covers every standard template
    fn default() -> Self {
        Self::build(GestureLibrary::standard(), &RecognitionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{Hand, Symbol, SymbolPair};

    fn right(symbol: Symbol) -> Observation {
        Observation::new(Hand::Right, symbol)
    }

    fn left(symbol: Symbol) -> Observation {
        Observation::new(Hand::Left, symbol)
    }

    #[test]
    fn test_swipe_right_from_observations() {
        let mut recognizer = GestureRecognizer::default();

        assert_eq!(recognizer.process_observations(&[right(Symbol::RHSP)]), None);
        assert_eq!(recognizer.process_observations(&[right(Symbol::TRHR)]), None);
        assert_eq!(
            recognizer.process_observations(&[right(Symbol::RHSP)]),
            Some(GestureKind::SwipeRight)
        );
        assert!(recognizer.history().is_empty());
    }

    #[test]
    fn test_swipe_up2_reports_swipe_up() {
        let mut recognizer = GestureRecognizer::default();

        recognizer.process_observations(&[left(Symbol::LHSP)]);
        recognizer.process_observations(&[right(Symbol::TRHU), left(Symbol::TLHU)]);
        let recognized = recognizer.process_observations(&[left(Symbol::LHSP)]);
        assert_eq!(recognized, Some(GestureKind::SwipeUp));
    }

    #[test]
    fn test_run_from_observations() {
        let mut recognizer = GestureRecognizer::default();
        let strides = [
            [right(Symbol::RRHF), left(Symbol::RLHB)],
            [right(Symbol::RRHB), left(Symbol::RLHF)],
            [right(Symbol::RRHF), left(Symbol::RLHB)],
        ];
        for stride in &strides {
            assert_eq!(recognizer.process_observations(stride), None);
        }
        assert_eq!(
            recognizer.process_observations(&[right(Symbol::RRHB), left(Symbol::RLHF)]),
            Some(GestureKind::Run)
        );
    }

    #[test]
    fn test_history_survives_non_matching_ticks() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.process_observations(&[right(Symbol::RHSP)]);
        recognizer.process_observations(&[]);
        recognizer.process_observations(&[right(Symbol::TRHL)]);
        assert_eq!(recognizer.history().len(), 2);
        assert_eq!(
            recognizer.history().last(),
            Some(&SymbolPair::new(Symbol::None, Symbol::TRHL))
        );
    }

    #[test]
    fn test_capacity_must_cover_longest_template() {
        let config = RecognitionConfig { history_capacity: 3, ..RecognitionConfig::default() };
        assert!(GestureRecognizer::new(GestureLibrary::standard(), &config).is_err());

        let config = RecognitionConfig { history_capacity: 4, ..RecognitionConfig::default() };
        assert!(GestureRecognizer::new(GestureLibrary::standard(), &config).is_ok());
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let config = RecognitionConfig { history_capacity: usize::MAX, ..RecognitionConfig::default() };
        let mut recognizer = GestureRecognizer::new(GestureLibrary::standard(), &config).unwrap();
        assert_eq!(recognizer.history().capacity(), Some(usize::MAX));

        recognizer.process_observations(&[right(Symbol::RHSP)]);
        assert_eq!(recognizer.history().len(), 1);
    }

    #[test]
    fn test_default_matches_new_with_defaults() {
        let default = GestureRecognizer::default();
        let built = GestureRecognizer::new(GestureLibrary::standard(), &RecognitionConfig::default()).unwrap();

        assert_eq!(default.history().capacity(), built.history().capacity());
        assert_eq!(default.classifier().tests(), built.classifier().tests());
        assert_eq!(default.library().templates(), built.library().templates());
        assert_eq!(default.reset_on_tracking_loss, built.reset_on_tracking_loss);
    }

    #[test]
    fn test_reset() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.process_observations(&[right(Symbol::RHSP)]);
        recognizer.reset();
        assert!(recognizer.history().is_empty());
    }

    #[test]
    fn test_recognizer_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<GestureRecognizer>();
    }
}
