use chrono::{DateTime, Duration, Utc};

/// A value together with the moment it was last fetched from Trello.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    pub data: T,
    /// `None` until the first fetch, and again after [`expire`](Self::expire).
    pub cached_at: Option<DateTime<Utc>>,
}

impl<T> CachedData<T> {
    /// Placeholder data that must be fetched before it is trusted.
    pub fn unfetched(data: T) -> Self {
        Self {
            data,
            cached_at: None,
        }
    }

    pub fn touch(&mut self) {
        self.cached_at = Some(Utc::now());
    }

    pub fn expire(&mut self) {
        self.cached_at = None;
    }

    /// Stale when never fetched, explicitly expired, or at least `max_age` old.
    pub fn is_stale(&self, max_age: Duration) -> bool {
        match self.cached_at {
            Some(at) => Utc::now() - at >= max_age,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched<T>(data: T) -> CachedData<T> {
        let mut cached = CachedData::unfetched(data);
        cached.touch();
        cached
    }

    #[test]
    fn test_unfetched_is_stale() {
        let cached = CachedData::unfetched(0);
        assert!(cached.is_stale(Duration::hours(1)));
        assert_eq!(cached.cached_at, None);
    }

    #[test]
    fn test_cached_data_is_stale() {
        let fresh = fetched(vec![1]);
        assert!(!fresh.is_stale(Duration::seconds(30)));

        let mut old = fetched(vec![1]);
        old.cached_at = Some(Utc::now() - Duration::minutes(61));
        assert!(old.is_stale(Duration::minutes(60)));
    }

    #[test]
    fn test_zero_max_age_is_always_stale() {
        let fresh = fetched("board");
        assert!(fresh.is_stale(Duration::zero()));
    }

    #[test]
    fn test_expire_and_touch() {
        let mut cached = fetched(1);
        cached.expire();
        assert!(cached.is_stale(Duration::hours(1)));
        cached.touch();
        assert!(!cached.is_stale(Duration::hours(1)));
    }
}
