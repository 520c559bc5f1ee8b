//! Types shared by several resources

use serde::{Deserialize, Serialize};

/// Paging information attached to paged list results
///
/// Values are passed through exactly as the server reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page_size: u64,
}

impl Pagination {
    /// Offset of the page following this one, if the server reports more entries
    pub fn next_offset(&self) -> Option<u64> {
        let next = self.offset.checked_add(self.page_size)?;
        (self.page_size > 0 && next < self.total).then_some(next)
    }
}

/// Short acknowledgement returned by mutating calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_decodes_verbatim() {
        let pagination: Pagination =
            serde_json::from_str(r#"{"offset":0,"total":1292,"page_size":10}"#).unwrap();
        assert_eq!(
            pagination,
            Pagination {
                offset: 0,
                total: 1292,
                page_size: 10
            }
        );
    }

    #[test]
    fn test_next_offset() {
        let first = Pagination {
            offset: 0,
            total: 25,
            page_size: 10,
        };
        assert_eq!(first.next_offset(), Some(10));

        let last = Pagination {
            offset: 20,
            total: 25,
            page_size: 10,
        };
        assert_eq!(last.next_offset(), None);
        assert_eq!(Pagination::default().next_offset(), None);
    }

    #[test]
    fn test_next_offset_at_u64_limit() {
        let pagination: Pagination = serde_json::from_str(
            r#"{"offset":18446744073709551615,"total":18446744073709551615,"page_size":10}"#,
        )
        .unwrap();
        assert_eq!(pagination.next_offset(), None);
    }
}
