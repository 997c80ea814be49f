//! Pagination and sorting shared by every listing endpoint.
//!
//! Listings accept `page` (zero-based), `size` and `sort`. `sort` holds one or more
//! `property[,asc|desc]` pairs separated by `;`, for example `name,asc;createdAt,desc`.
//! Each listing declares the properties it understands through [`SortField`].

use sea_orm::Order;

use crate::{
    model::api::PageDto,
    server::{config::MAX_PAGE_SIZE, error::AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub property: String,
    pub direction: SortDirection,
}

/// A property a listing can be ordered by.
pub trait SortField: Sized + Copy {
    /// Maps a camelCase wire property name to the field, `None` if unsupported.
    fn parse(property: &str) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    /// Builds a page request from raw query values.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index, defaults to 0
    /// - `size` - Page size, defaults to `default_size`; clamped to `1..=MAX_PAGE_SIZE`
    /// - `sort` - Raw `sort` query value
    /// - `default_size` - Configured default page size
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Normalized request
    /// - `Err(AppError::BadRequest)` - Malformed `sort` value, or a page whose row offset
    ///   does not fit in an `i64`
    pub fn new(
        page: Option<u64>,
        size: Option<u64>,
        sort: Option<&str>,
        default_size: u64,
    ) -> Result<Self, AppError> {
        let sort = match sort {
            Some(raw) => parse_sort(raw)?,
            None => Vec::new(),
        };

        let page = page.unwrap_or(0);
        let size = size.unwrap_or(default_size).clamp(1, MAX_PAGE_SIZE);

        // SQL offsets are signed 64-bit.
        match page.checked_mul(size) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Page index out of range: {}",
                    page
                )))
            }
        }

        Ok(Self { page, size, sort })
    }

    /// Resolves the requested sort against the fields a listing supports.
    ///
    /// Returns `default` when no sort was requested.
    pub fn resolve_sort<F: SortField>(
        &self,
        default: &[(F, SortDirection)],
    ) -> Result<Vec<(F, SortDirection)>, AppError> {
        if self.sort.is_empty() {
            return Ok(default.to_vec());
        }

        self.sort
            .iter()
            .map(|order| {
                F::parse(&order.property)
                    .map(|field| (field, order.direction))
                    .ok_or_else(|| {
                        AppError::BadRequest(format!(
                            "Unsupported sort property: {}",
                            order.property
                        ))
                    })
            })
            .collect()
    }
}

/// Parses a raw `sort` query value into ordered sort instructions.
pub fn parse_sort(raw: &str) -> Result<Vec<SortOrder>, AppError> {
    raw.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (property, direction) = match pair.split_once(',') {
                Some((property, direction)) => (property.trim(), Some(direction.trim())),
                None => (pair, None),
            };

            if property.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Missing sort property in '{}'",
                    pair
                )));
            }

            let direction = match direction.map(str::to_ascii_lowercase).as_deref() {
                None | Some("asc") => SortDirection::Asc,
                Some("desc") => SortDirection::Desc,
                Some(other) => {
                    return Err(AppError::BadRequest(format!(
                        "Invalid sort direction: {}",
                        other
                    )))
                }
            };

            Ok(SortOrder {
                property: property.to_string(),
                direction,
            })
        })
        .collect()
}

/// One page of domain items plus the size of the full result set.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            size: request.size,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.size.max(1))
    }

    /// Converts to the wire envelope, mapping each item with `f`.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        let total_pages = self.total_pages();

        PageDto {
            content: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total,
            total_pages,
            first: self.page == 0,
            last: self.page.saturating_add(1) >= total_pages,
        }
    }
}
