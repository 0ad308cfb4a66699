use super::*;

#[test]
fn empty_query_encodes_to_empty_string() {
    assert!(Query::new().is_empty());
    assert_eq!(Query::new().encode(), "");
    assert_eq!(ListQuery::default().to_query().encode(), "");
}

#[test]
fn push_opt_skips_none() {
    let mut query = Query::new();
    query.push_opt("limit", Some(20)).push_opt::<u32>("offset", None);
    assert_eq!(query.pairs(), &[("limit".to_owned(), "20".to_owned())]);
}

#[test]
fn list_query_encodes_sort_brackets() {
    let query = ListQuery {
        limit: Some(50),
        offset: Some(100),
        search: Some("болт".to_owned()),
        sort: vec![("name".to_owned(), SortDirection::Asc), ("id".to_owned(), SortDirection::Desc)],
    };
    assert_eq!(
        query.to_query().encode(),
        "limit=50&offset=100&search=%D0%B1%D0%BE%D0%BB%D1%82&sort%5Bname%5D=asc&sort%5Bid%5D=desc"
    );
}

#[test]
fn list_query_drops_blank_search() {
    let query = ListQuery { search: Some("   ".to_owned()), ..ListQuery::default() };
    assert!(query.to_query().is_empty());
}

#[test]
fn nomenclature_query_appends_type() {
    let query = NomenclatureQuery { list: ListQuery { limit: Some(10), ..ListQuery::default() }, item_type: Some(ItemType::Material) };
    assert_eq!(query.to_query().encode(), "limit=10&type=material");
}

#[test]
fn document_query_uses_wire_names() {
    let query = DocumentListQuery {
        doc_type: Some(DocumentType::Production),
        status: Some(DocumentStatus::Draft),
        warehouse_id: Some(3),
        date_from: Some("2026-01-01".to_owned()),
        ..DocumentListQuery::default()
    };
    assert_eq!(query.to_query().encode(), "type=production&status=draft&warehouseId=3&dateFrom=2026-01-01");
}

#[test]
fn stats_queries_encode() {
    let util = UtilizationQuery { breakdown: Some(UtilizationBreakdown::Type), ..UtilizationQuery::default() };
    assert_eq!(util.to_query().encode(), "breakdown=type");

    let moves = MovementsQuery { days: Some(7), ..MovementsQuery::default() };
    assert_eq!(moves.to_query().encode(), "days=7");

    let low = LowStockQuery { limit: Some(5), warehouse_id: None, only_below: Some(true) };
    assert_eq!(low.to_query().encode(), "limit=5&onlyBelow=true");
}
