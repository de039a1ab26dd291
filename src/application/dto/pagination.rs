use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

/// Normalised 1-based page window. Page 0 clamps to 1, limit 0 clamps to
/// the default; negative values never reach this type because the HTTP
/// layer deserialises unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: u32,
    limit: u32,
}

impl PageParams {
    pub fn new(page: u32, limit: u32) -> Self {
        let page = page.max(1);
        let limit = if limit == 0 {
            DEFAULT_LIMIT
        } else {
            limit.min(MAX_LIMIT)
        };
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(1, DEFAULT_LIMIT)
    }
}

/// Offset-paginated response envelope. `size` echoes the requested limit,
/// not the number of items actually returned; the two differ on the last
/// page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, params: PageParams) -> Self {
        let limit = u64::from(params.limit());
        let pages = (total + limit - 1) / limit;
        Self {
            items,
            total,
            page: params.page(),
            size: params.limit(),
            pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
            pages: self.pages,
        }
    }
}
