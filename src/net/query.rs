//! Query-string building for list endpoints.
//!
//! Optional filters are omitted entirely when unset. Sort maps use the
//! bracketed form the backend already parses (`sort[name]=asc`).

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::types::{DocumentStatus, DocumentType, ItemType};

/// Ordered list of query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Form-encoded string without the leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish()
    }
}

/// Types that can be sent as list-endpoint query parameters.
pub trait ToQuery {
    fn to_query(&self) -> Query;
}

impl ToQuery for Query {
    fn to_query(&self) -> Query {
        self.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Pagination, free-text search and server-side sort shared by catalog lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Matched server-side against code/name.
    pub search: Option<String>,
    /// Applied in order; e.g. `[("name", Asc), ("id", Desc)]`.
    pub sort: Vec<(String, SortDirection)>,
}

impl ListQuery {
    fn append_to(&self, query: &mut Query) {
        query.push_opt("limit", self.limit).push_opt("offset", self.offset);
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query.push("search", search);
        }
        for (field, direction) in &self.sort {
            query.push(format!("sort[{field}]"), direction.as_str());
        }
    }
}

impl ToQuery for ListQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        self.append_to(&mut query);
        query
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NomenclatureQuery {
    pub list: ListQuery,
    pub item_type: Option<ItemType>,
}

impl ToQuery for NomenclatureQuery {
    fn to_query(&self) -> Query {
        let mut query = self.list.to_query();
        query.push_opt("type", self.item_type.map(ItemType::as_str));
        query
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub doc_type: Option<DocumentType>,
    pub status: Option<DocumentStatus>,
    pub warehouse_id: Option<i64>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl ToQuery for DocumentListQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("limit", self.limit)
            .push_opt("offset", self.offset)
            .push_opt("type", self.doc_type.map(DocumentType::as_str))
            .push_opt("status", self.status.map(DocumentStatus::as_str))
            .push_opt("warehouseId", self.warehouse_id)
            .push_opt("dateFrom", self.date_from.as_deref())
            .push_opt("dateTo", self.date_to.as_deref());
        query
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StockQuery {
    pub warehouse_id: Option<i64>,
    pub item_id: Option<i64>,
    pub search: Option<String>,
}

impl ToQuery for StockQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("warehouseId", self.warehouse_id)
            .push_opt("itemId", self.item_id)
            .push_opt("search", self.search.as_deref());
        query
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UtilizationBreakdown {
    None,
    Type,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UtilizationQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub breakdown: Option<UtilizationBreakdown>,
}

impl ToQuery for UtilizationQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.push_opt("limit", self.limit).push_opt("offset", self.offset).push_opt(
            "breakdown",
            self.breakdown.map(|b| match b {
                UtilizationBreakdown::None => "none",
                UtilizationBreakdown::Type => "type",
            }),
        );
        query
    }
}

/// Movement window: either the last `days` or an explicit date range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovementsQuery {
    pub days: Option<u32>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl ToQuery for MovementsQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("days", self.days)
            .push_opt("dateFrom", self.date_from.as_deref())
            .push_opt("dateTo", self.date_to.as_deref());
        query
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LowStockQuery {
    pub limit: Option<u32>,
    pub warehouse_id: Option<i64>,
    pub only_below: Option<bool>,
}

impl ToQuery for LowStockQuery {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("limit", self.limit)
            .push_opt("warehouseId", self.warehouse_id)
            .push_opt("onlyBelow", self.only_below);
        query
    }
}
