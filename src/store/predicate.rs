use super::value::{Row, Value};

/// One comparison over a named column.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Eq(String, Value),
    Ne(String, Value),
}

impl Comparison {
    /// Null handling follows SQL: a `Null` column never satisfies `!=`, and
    /// only `= Null` matches a missing column.
    fn matches(&self, row: &Row) -> bool {
        match self {
            Comparison::Eq(column, expected) => row.get(column).matches(expected),
            Comparison::Ne(column, expected) => {
                let actual = row.get(column);
                !actual.is_null() && !expected.is_null() && !actual.matches(expected)
            }
        }
    }
}

/// A conjunction of comparisons. The empty predicate matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: Vec<Comparison>,
}

impl Predicate {
    /// Predicate matching every row.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.clauses
            .push(Comparison::Eq(column.to_string(), value.into()));
        self
    }

    pub fn ne(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.clauses
            .push(Comparison::Ne(column.to_string(), value.into()));
        self
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.clauses.iter().all(|clause| clause.matches(row))
    }

    pub fn clauses(&self) -> &[Comparison] {
        &self.clauses
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.clauses.is_empty() {
            return f.write_str("TRUE");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            match clause {
                Comparison::Eq(column, value) => write!(f, "{}={}", column, value)?,
                Comparison::Ne(column, value) => write!(f, "{}!={}", column, value)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet_row(tweet_id: i64, timeline_id: i64, favorited: bool) -> Row {
        Row::new()
            .with("tweet_id", tweet_id)
            .with("account_id", 1i64)
            .with("timeline_id", timeline_id)
            .with("favorited", favorited)
    }

    #[test]
    fn test_empty_predicate_matches_everything() {
        assert!(Predicate::all().matches(&Row::new()));
        assert!(Predicate::all().matches(&tweet_row(1, 1, false)));
    }

    #[test]
    fn test_conjunction() {
        let predicate = Predicate::all()
            .eq("tweet_id", 100i64)
            .eq("account_id", 1i64)
            .ne("timeline_id", 4i64)
            .eq("favorited", true);

        assert!(predicate.matches(&tweet_row(100, 1, true)));
        assert!(!predicate.matches(&tweet_row(100, 4, true)));
        assert!(!predicate.matches(&tweet_row(100, 1, false)));
        assert!(!predicate.matches(&tweet_row(101, 1, true)));
    }

    #[test]
    fn test_flag_stored_as_integer() {
        let row = Row::new().with("favorited", 1i64);
        assert!(Predicate::all().eq("favorited", true).matches(&row));
    }

    #[test]
    fn test_ne_does_not_match_null() {
        let row = Row::new().with("tweet_id", 1i64);
        assert!(!Predicate::all().ne("timeline_id", 4i64).matches(&row));
        assert!(Predicate::all().eq("timeline_id", Value::Null).matches(&row));
    }

    #[test]
    fn test_display() {
        let predicate = Predicate::all()
            .eq("tweet_id", 100i64)
            .ne("timeline_id", 4i64)
            .eq("favorited", true);
        assert_eq!(
            predicate.to_string(),
            "tweet_id=100 AND timeline_id!=4 AND favorited=1"
        );
        assert_eq!(Predicate::all().to_string(), "TRUE");
    }
}
