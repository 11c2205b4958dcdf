/// Filtering and sorting parameters for reading a playlist
use serde::{Deserialize, Serialize};

/// Column a playlist view can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Artist,
    Title,
}

impl SortField {
    /// Parse a sort field from a query parameter
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Some(Self::Date),
            "artist" => Some(Self::Artist),
            "title" => Some(Self::Title),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Artist => "artist",
            Self::Title => "title",
        }
    }

    /// `ORDER BY` expression over the `tracks` table aliased as `t`.
    ///
    /// Dates are free text and compare as stored; names compare without case.
    pub fn order_expr(self) -> &'static str {
        match self {
            Self::Date => "t.date",
            Self::Artist => "t.artist COLLATE NOCASE",
            Self::Title => "t.title COLLATE NOCASE",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction; anything other than a descending spelling is ascending
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Search text plus ordering for `read_playlist`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackQuery {
    /// Case-insensitive substring matched against artist or title
    pub search: Option<String>,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl TrackQuery {
    /// Build a query from raw request parameters.
    ///
    /// Blank search text means no filter. An unrecognised sort field falls
    /// back to date ascending regardless of the requested direction.
    pub fn from_params(search: Option<&str>, sort: Option<&str>, direction: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned);
        let direction = direction.map(SortDirection::parse).unwrap_or_default();

        let (sort, direction) = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            None => (SortField::Date, direction),
            Some(raw) => match SortField::parse(raw) {
                Some(field) => (field, direction),
                None => (SortField::Date, SortDirection::Asc),
            },
        };

        Self {
            search,
            sort,
            direction,
        }
    }

    /// The search text as a SQL `LIKE` pattern with wildcards escaped by `\`
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|s| {
            let mut pattern = String::with_capacity(s.len() + 2);
            pattern.push('%');
            for c in s.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_date_ascending() {
        let q = TrackQuery::from_params(None, None, None);
        assert_eq!(q.sort, SortField::Date);
        assert_eq!(q.direction, SortDirection::Asc);
        assert_eq!(q.search, None);
    }

    #[test]
    fn recognised_field_keeps_direction() {
        let q = TrackQuery::from_params(Some("  "), Some("Artist"), Some("desc"));
        assert_eq!(q.sort, SortField::Artist);
        assert_eq!(q.direction, SortDirection::Desc);
        assert_eq!(q.search, None);
    }

    #[test]
    fn unknown_field_falls_back_to_date_ascending() {
        let q = TrackQuery::from_params(None, Some("play_count"), Some("desc"));
        assert_eq!(q.sort, SortField::Date);
        assert_eq!(q.direction, SortDirection::Asc);
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        let q = TrackQuery::from_params(Some("100%_\\"), None, None);
        assert_eq!(q.like_pattern().as_deref(), Some("%100\\%\\_\\\\%"));
    }
}
