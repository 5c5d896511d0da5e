use crate::core::{QueryError, VenueLookup};

/// A `/cafe` request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeQuery {
    pub city: String,
    /// `None` means no cap.
    pub count: Option<usize>,
    /// Empty means no filtering.
    pub search: String,
}

impl CafeQuery {
    /// Validates a raw, still percent-encoded query string.
    pub fn parse(raw: Option<&str>, catalog: &impl VenueLookup) -> Result<Self, QueryError> {
        let pairs = url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes());
        Self::from_pairs(pairs, catalog)
    }

    /// Validates decoded key/value pairs. The first occurrence of a key wins.
    ///
    /// `city` is checked before `count`, so a request missing both reports
    /// [`QueryError::UnknownCity`].
    pub fn from_pairs<I, K, V>(pairs: I, catalog: &impl VenueLookup) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut city = None;
        let mut count = None;
        let mut search = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "city" => &mut city,
                "count" => &mut count,
                "search" => &mut search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_string());
            }
        }

        let city = city
            .filter(|c| catalog.venues(c).is_some())
            .ok_or(QueryError::UnknownCity)?;
        let count = parse_count(count.as_deref())?;

        Ok(Self {
            city,
            count,
            search: search.unwrap_or_default(),
        })
    }
}

fn parse_count(raw: Option<&str>) -> Result<Option<usize>, QueryError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| QueryError::InvalidCount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    fn parse(raw: &str) -> Result<CafeQuery, QueryError> {
        CafeQuery::parse(Some(raw), &Catalog::builtin())
    }

    #[test]
    fn test_valid_query() {
        let query = parse("count=2&city=moscow").unwrap();
        assert_eq!(query.city, "moscow");
        assert_eq!(query.count, Some(2));
        assert_eq!(query.search, "");
    }

    #[test]
    fn test_missing_or_unknown_city() {
        assert_eq!(
            CafeQuery::parse(None, &Catalog::builtin()),
            Err(QueryError::UnknownCity)
        );
        assert_eq!(parse(""), Err(QueryError::UnknownCity));
        assert_eq!(parse("city=omsk"), Err(QueryError::UnknownCity));
        assert_eq!(parse("city=Moscow"), Err(QueryError::UnknownCity));
    }

    #[test]
    fn test_city_checked_before_count() {
        assert_eq!(parse("count=na"), Err(QueryError::UnknownCity));
        assert_eq!(parse("city=omsk&count=na"), Err(QueryError::UnknownCity));
    }

    #[test]
    fn test_invalid_count() {
        assert_eq!(parse("city=tula&count=na"), Err(QueryError::InvalidCount));
        assert_eq!(parse("city=tula&count=-1"), Err(QueryError::InvalidCount));
        assert_eq!(parse("city=tula&count=1.5"), Err(QueryError::InvalidCount));
        assert_eq!(
            parse("city=tula&count=99999999999999999999999999"),
            Err(QueryError::InvalidCount)
        );
    }

    #[test]
    fn test_absent_or_empty_count_is_unbounded() {
        assert_eq!(parse("city=tula").unwrap().count, None);
        assert_eq!(parse("city=tula&count=").unwrap().count, None);
        assert_eq!(parse("city=tula&count=0").unwrap().count, Some(0));
        assert_eq!(parse("city=tula&count=100").unwrap().count, Some(100));
    }

    #[test]
    fn test_search_is_percent_decoded() {
        let query = parse("city=moscow&search=%D0%BA%D0%BE%D0%A4%D0%B5").unwrap();
        assert_eq!(query.search, "коФе");

        let query = parse("city=moscow&search=coffee+like").unwrap();
        assert_eq!(query.search, "coffee like");
    }

    #[test]
    fn test_first_value_wins() {
        let query = parse("city=tula&city=omsk&count=1&count=x").unwrap();
        assert_eq!(query.city, "tula");
        assert_eq!(query.count, Some(1));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let query = parse("city=tula&page=3").unwrap();
        assert_eq!(query.city, "tula");
    }
}
