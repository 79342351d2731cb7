/// Maps text to a compound sentiment score.
///
/// Implementations must return a value in `[-1.0, 1.0]`; negative is
/// unfavourable, positive favourable, `0.0` neutral or unknown.
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> f32;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for std::sync::Arc<T> {
    fn compound(&self, text: &str) -> f32 {
        (**self).compound(text)
    }
}
