/*
 * Responsibility
 * - /apps request/response DTOs
 * - raw query strings → typed ListQuery (the offset policy lives here)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Query parameters as they arrive on `GET /apps`.
///
/// Both stay raw strings so the absent vs present-but-empty distinction
/// survives until ListQuery decides what each one means.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub offset: Option<String>,
    pub search: Option<String>,
}

/// Typed listing query handed to the gist lister.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub offset: i64,
    pub search: Option<String>,
}

impl TryFrom<ListParams> for ListQuery {
    type Error = AppError;

    // offset: absent → 0; present but not a base-10 non-negative integer → 400.
    // search: verbatim pass-through, `search=` stays Some("").
    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let offset = match params.offset.as_deref() {
            None => 0,
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|n| *n >= 0)
                .ok_or_else(|| {
                    AppError::bad_request(
                        "INVALID_OFFSET",
                        "offset must be a non-negative integer",
                    )
                })?,
        };

        Ok(Self {
            offset,
            search: params.search,
        })
    }
}

/// One gist as it appears in a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GistSummary {
    pub id: Uuid,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

/// One page of a user's gists, returned to the client unchanged.
///
/// `next` is the offset of the following page, absent on the last page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GistListPage {
    pub gists: Vec<GistSummary>,
    pub next: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(offset: Option<&str>, search: Option<&str>) -> ListParams {
        ListParams {
            offset: offset.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    #[test]
    fn absent_offset_defaults_to_zero() {
        let q = ListQuery::try_from(params(None, None)).unwrap();
        assert_eq!(q.offset, 0);
        assert_eq!(q.search, None);
    }

    #[test]
    fn offset_parses_base10() {
        let q = ListQuery::try_from(params(Some("5"), None)).unwrap();
        assert_eq!(q.offset, 5);
    }

    #[test]
    fn offset_tolerates_surrounding_whitespace() {
        let q = ListQuery::try_from(params(Some(" 10 "), None)).unwrap();
        assert_eq!(q.offset, 10);
    }

    #[test]
    fn non_numeric_offset_is_rejected() {
        let err = ListQuery::try_from(params(Some("abc"), None)).unwrap_err();
        assert!(matches!(
            err,
            AppError::BadRequest {
                code: "INVALID_OFFSET",
                ..
            }
        ));
    }

    #[test]
    fn trailing_garbage_is_rejected_not_truncated() {
        // "5x" must not parse as 5
        let err = ListQuery::try_from(params(Some("5x"), None)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn negative_offset_is_rejected() {
        let err = ListQuery::try_from(params(Some("-1"), None)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn search_passes_through_verbatim() {
        let q = ListQuery::try_from(params(None, Some("foo"))).unwrap();
        assert_eq!(q.search.as_deref(), Some("foo"));
    }

    #[test]
    fn empty_search_stays_distinct_from_absent() {
        let q = ListQuery::try_from(params(None, Some(""))).unwrap();
        assert_eq!(q.search.as_deref(), Some(""));
    }
}
