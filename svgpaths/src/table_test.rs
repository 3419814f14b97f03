use super::*;

#[test]
fn single_path_scenario() {
    let (_, records) = build_table(r#"<svg><path d="M0,0 L10,0"/></svg>"#).expect("table");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.index, 0);
    assert_eq!(record.d.as_deref(), Some("M0,0 L10,0"));
    assert_eq!(record.start, "(0.000000, 0.000000)");
    assert_eq!(record.id, None);
    assert_eq!(record.class, None);
}

#[test]
fn indices_count_up_in_document_order() {
    let (_, records) = build_table(concat!(
        r#"<svg><path d="M0,0"/><g><path d="M1,1"/><path d="M2,2"/></g>"#,
        r#"<path d="M3,3"/></svg>"#,
    ))
    .expect("table");
    let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(records[2].start, "(2.000000, 2.000000)");
}

#[test]
fn path_without_d_is_listed_with_start_not_available() {
    let (_, records) = build_table(r#"<svg><path id="empty"/><path d="M5,5"/></svg>"#)
        .expect("table");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].d, None);
    assert_eq!(records[0].start, START_NOT_AVAILABLE);
    assert_eq!(records[0].id.as_deref(), Some("empty"));
    assert_eq!(records[1].index, 1);
}

#[test]
fn malformed_d_degrades_that_record_only() {
    let (_, records) =
        build_table(r#"<svg><path d="not path data"/><path d="M1,2"/></svg>"#).expect("table");
    assert_eq!(records[0].start, START_NOT_AVAILABLE);
    assert_eq!(records[0].d.as_deref(), Some("not path data"));
    assert_eq!(records[1].start, "(1.000000, 2.000000)");
}

#[test]
fn class_splits_into_visible_and_animation_fields() {
    let (_, records) =
        build_table(r#"<svg><path d="M0,0" class="fade duration-0_5 ease-in_out"/></svg>"#)
            .expect("table");
    let record = &records[0];
    assert_eq!(record.class.as_deref(), Some("fade"));
    assert_eq!(record.duration.as_deref(), Some("0.5"));
    assert_eq!(record.delay, None);
    assert_eq!(record.easing.as_deref(), Some("in.out"));
    // The raw attribute map still carries the full class value.
    assert_eq!(
        record.attributes.get("class").and_then(|v| v.as_str()),
        Some("fade duration-0_5 ease-in_out")
    );
}

#[test]
fn attributes_map_preserves_document_order() {
    let (_, records) = build_table(r#"<svg><path d="M0,0" stroke="red" id="p1"/></svg>"#)
        .expect("table");
    let keys: Vec<&str> = records[0].attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["d", "stroke", "id"]);
}

#[test]
fn bare_fragment_and_wrapped_document_produce_identical_records() {
    let fragment = r#"<path d="M0,0 L10,0" id="p"/>"#;
    let wrapped = format!(r#"<svg xmlns="http://www.w3.org/2000/svg">{fragment}</svg>"#);
    let (_, from_fragment) = build_table(fragment).expect("fragment");
    let (_, from_wrapped) = build_table(&wrapped).expect("wrapped");
    assert_eq!(from_fragment, from_wrapped);
}

#[test]
fn normalized_text_reparses_to_the_same_table() {
    let (normalized, records) =
        build_table(r#"<svg><g><path d="M0,0 L10,0" class="fade"/></g></svg>"#).expect("table");
    let (_, reparsed) = build_table(&normalized).expect("reparse");
    assert_eq!(records, reparsed);
}

#[test]
fn record_serializes_with_wire_field_names() {
    let (_, records) = build_table(r#"<svg><path d="M0,0" id="p" class="duration-2"/></svg>"#)
        .expect("table");
    let json = serde_json::to_value(&records[0]).expect("json");
    assert_eq!(json["d"], "M0,0");
    assert_eq!(json["start"], "(0.000000, 0.000000)");
    assert_eq!(json["index"], 0);
    assert_eq!(json["id"], "p");
    assert_eq!(json["duration"], "2");
    assert_eq!(json["attributes"]["id"], "p");
    // Empty optionals stay off the wire.
    assert!(json.get("class").is_none());
    assert!(json.get("delay").is_none());
}

#[test]
fn unparseable_document_is_an_error() {
    // An <svg-prefixed input is not wrapped, and this one cannot be salvaged.
    assert!(build_table("<svg").is_err());
}
