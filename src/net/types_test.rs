use super::*;

// =============================================================
// UserRole
// =============================================================

#[test]
fn user_role_wire_tags() {
    assert_eq!(serde_json::to_string(&UserRole::Manager).unwrap(), "\"manager\"");
    assert_eq!(serde_json::to_string(&UserRole::StoreKeeper).unwrap(), "\"storeKeeper\"");
}

#[test]
fn user_role_from_tag_is_exact() {
    assert_eq!(UserRole::from_tag("manager"), Some(UserRole::Manager));
    assert_eq!(UserRole::from_tag("storeKeeper"), Some(UserRole::StoreKeeper));
    assert_eq!(UserRole::from_tag("storekeeper"), None);
    assert_eq!(UserRole::from_tag("admin"), None);
    assert_eq!(UserRole::from_tag(""), None);
}

#[test]
fn user_role_as_str_matches_from_tag() {
    for role in UserRole::ALL {
        assert_eq!(UserRole::from_tag(role.as_str()), Some(role));
    }
}

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_deserializes_me_response() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000007",
        "login": "a.smirnov",
        "firstname": "Алексей",
        "lastname": "Смирнов",
        "role": "storeKeeper"
    }"#;
    let me: Identity = serde_json::from_str(json).unwrap();
    assert_eq!(me.login, "a.smirnov");
    assert_eq!(me.middlename, None);
    assert_eq!(me.role, UserRole::StoreKeeper);
}

#[test]
fn identity_accepts_non_uuid_id() {
    let json = r#"{"id":"42","login":"a.smirnov","firstname":"Алексей","lastname":"Смирнов","role":"manager"}"#;
    let me: Identity = serde_json::from_str(json).unwrap();
    assert_eq!(me.id, "42");
    assert_eq!(me.role, UserRole::Manager);
}

#[test]
fn identity_rejects_unknown_role() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000007",
        "login": "root",
        "firstname": "R",
        "lastname": "R",
        "role": "admin"
    }"#;
    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn identity_rejects_partial_payload() {
    let json = r#"{"id":"00000000-0000-0000-0000-000000000007","login":"x"}"#;
    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn identity_full_name_skips_missing_middlename() {
    let mut me: Identity = serde_json::from_str(
        r#"{"id":"00000000-0000-0000-0000-000000000007","login":"x","firstname":"Иван","lastname":"Петров","role":"manager"}"#,
    )
    .unwrap();
    assert_eq!(me.full_name(), "Петров Иван");
    me.middlename = Some("Иванович".to_owned());
    assert_eq!(me.full_name(), "Петров Иван Иванович");
}

// =============================================================
// Resources
// =============================================================

#[test]
fn item_type_field_is_named_type() {
    let json = r#"{
        "id": 2, "code": "PRD-100", "name": "Тележка Т-100", "type": "product", "unit": "шт",
        "purchasePrice": null, "sellPrice": "12500.00", "minQuantity": "2.000",
        "description": null, "createdAt": 1, "updatedAt": 2
    }"#;
    let item: Item = serde_json::from_str(json).unwrap();
    assert_eq!(item.item_type, ItemType::Product);
    assert_eq!(item.sell_price.as_deref(), Some("12500.00"));
}

#[test]
fn supplier_patch_omits_untouched_fields() {
    let patch = SupplierPatch { phone: Some("+7 900".to_owned()), ..SupplierPatch::default() };
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "phone": "+7 900" }));
}

#[test]
fn document_detail_flattens_header() {
    let json = r#"{
        "id": 5, "number": "IN-0005", "type": "incoming", "status": "draft", "date": "2026-01-15",
        "supplierId": 10, "userId": "u1",
        "items": [{"itemId": 1, "quantity": "10.000", "direction": "in"}]
    }"#;
    let doc: DocumentDetail = serde_json::from_str(json).unwrap();
    assert_eq!(doc.header.number, "IN-0005");
    assert_eq!(doc.header.supplier_id, Some(10));
    assert_eq!(doc.header.warehouse_to_id, None);
    assert_eq!(doc.items[0].direction, Some(Direction::In));
    assert_eq!(doc.comment, None);
}

#[test]
fn create_document_request_serializes_camel_case() {
    let req = CreateDocumentRequest {
        doc_type: DocumentType::Transfer,
        date: None,
        warehouse_from_id: Some(1),
        warehouse_to_id: Some(2),
        supplier_id: None,
        comment: None,
        items: vec![DocumentLine { id: None, item_id: 3, quantity: "5".to_owned(), direction: None }],
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "type": "transfer",
            "warehouseFromId": 1,
            "warehouseToId": 2,
            "items": [{ "itemId": 3, "quantity": "5" }]
        })
    );
}

#[test]
fn warehouse_capacity_is_optional() {
    let w: Warehouse = serde_json::from_str(r#"{"id":3,"name":"Сырьё","address":null}"#).unwrap();
    assert_eq!(w.capacity, None);
}

#[test]
fn utilization_fill_ratio() {
    let row = WarehouseUtilization { capacity: Some(500.0), current_count: 320.0, ..Default::default() };
    assert_eq!(row.fill_ratio(), Some(0.64));

    let over = WarehouseUtilization { capacity: Some(100.0), current_count: 150.0, ..Default::default() };
    assert_eq!(over.fill_ratio(), Some(1.0));

    let unknown = WarehouseUtilization { capacity: Some(0.0), current_count: 10.0, ..Default::default() };
    assert_eq!(unknown.fill_ratio(), None);
}
