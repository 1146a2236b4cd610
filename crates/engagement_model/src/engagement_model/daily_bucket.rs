use std::collections::BTreeMap;

use crate::value_object::{day, Day};

/// Number of engagement events observed on one calendar day
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DailyBucket {
    pub day: Day,
    pub count: usize,
}

/// Groups timestamps by calendar day.
///
/// Buckets are ordered by day ascending. Days without events are not
/// synthesized.
pub fn bucket_by_day<I, S>(timestamps: I) -> Result<Vec<DailyBucket>, day::Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = BTreeMap::<Day, usize>::new();
    for timestamp in timestamps {
        let day = Day::from_timestamp(timestamp.as_ref())?;
        *counts.entry(day).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .map(|(day, count)| DailyBucket { day, count })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_bucket_by_day() -> anyhow::Result<()> {
        let buckets = bucket_by_day([
            "2024-01-01T10:00:00Z",
            "2024-01-01T23:00:00Z",
            "2024-01-02T00:00:01Z",
        ])?;
        assert_eq!(
            buckets,
            vec![
                DailyBucket {
                    day: Day::from_str("2024-01-01")?,
                    count: 2
                },
                DailyBucket {
                    day: Day::from_str("2024-01-02")?,
                    count: 1
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_unordered_input_with_gap() -> anyhow::Result<()> {
        let buckets = bucket_by_day(vec![
            "2024-03-05T00:00:00Z".to_owned(),
            "2024-03-01T12:00:00Z".to_owned(),
            "2024-03-05T08:30:00+09:00".to_owned(),
        ])?;
        assert_eq!(
            buckets
                .iter()
                .map(|bucket| (bucket.day.to_string(), bucket.count))
                .collect::<Vec<_>>(),
            vec![("2024-03-01".to_owned(), 1), ("2024-03-05".to_owned(), 2)]
        );
        Ok(())
    }

    #[test]
    fn test_empty() -> anyhow::Result<()> {
        assert!(bucket_by_day(Vec::<String>::new())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed() {
        assert!(bucket_by_day(["2024-01-01T10:00:00Z", "garbage"]).is_err());
    }
}
