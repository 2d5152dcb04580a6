use serde::{Deserialize, Serialize};

/// Logical feed a cached tweet belongs to.
///
/// Not stored on its own; the numeric id is written into each tweet row's
/// `timeline_id` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineBucket {
    Home,
    Mentions,
    Retweets,
    Favorites,
}

impl TimelineBucket {
    pub const HOME_ID: i64 = 1;
    pub const MENTIONS_ID: i64 = 2;
    pub const RETWEETS_ID: i64 = 3;
    pub const FAVORITES_ID: i64 = 4;

    pub const ALL: [TimelineBucket; 4] = [
        TimelineBucket::Home,
        TimelineBucket::Mentions,
        TimelineBucket::Retweets,
        TimelineBucket::Favorites,
    ];

    /// Stable id stored in the `timeline_id` column.
    pub fn id(self) -> i64 {
        match self {
            TimelineBucket::Home => Self::HOME_ID,
            TimelineBucket::Mentions => Self::MENTIONS_ID,
            TimelineBucket::Retweets => Self::RETWEETS_ID,
            TimelineBucket::Favorites => Self::FAVORITES_ID,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            TimelineBucket::Home => "home",
            TimelineBucket::Mentions => "mentions",
            TimelineBucket::Retweets => "retweets",
            TimelineBucket::Favorites => "favorites",
        }
    }
}

impl std::fmt::Display for TimelineBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for bucket in TimelineBucket::ALL {
            assert_eq!(TimelineBucket::from_id(bucket.id()), Some(bucket));
        }
        assert_eq!(TimelineBucket::from_id(0), None);
        assert_eq!(TimelineBucket::from_id(99), None);
    }

    #[test]
    fn test_ids_are_stable() {
        assert_eq!(TimelineBucket::Home.id(), 1);
        assert_eq!(TimelineBucket::Mentions.id(), 2);
        assert_eq!(TimelineBucket::Retweets.id(), 3);
        assert_eq!(TimelineBucket::Favorites.id(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(TimelineBucket::Favorites.to_string(), "favorites");
    }
}
