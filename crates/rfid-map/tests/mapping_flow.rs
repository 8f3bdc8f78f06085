use rfid_map::{LookupTable, MappingError, TagColumn, resolve_columns};
use rfid_model::{ColumnMapping, InputTable};

fn mer_export() -> InputTable {
    InputTable::from_text(
        ["Visible Number", "Key/Card number", "Kommentar"],
        [
            ["T1", "AABBCC11", "första"],
            ["", "FFFFFF00", "utan etikett"],
            ["T2", "AABBCC22", ""],
            ["T1", "AABBCC33", "omprogrammerad"],
        ],
    )
}

#[test]
fn indirect_mapping_resolves_through_mer_export() {
    let input = InputTable::from_text(
        ["Tagg-ID", "Regnummer"],
        [["T1", "ABC123"], ["T2", "XYZ789"], ["T3", "NOP000"]],
    );
    let mapping = ColumnMapping::indirect("tagg-id", "Regnummer");
    let columns = resolve_columns(&mapping, &input).unwrap();
    assert_eq!(columns.tag, TagColumn::Indirect(0));

    let lookup = LookupTable::build(&mer_export()).unwrap();
    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.overwritten(), 1);

    let resolved: Vec<Option<String>> = input
        .rows()
        .map(|row| lookup.resolve(&columns.tag_text(&row)).map(str::to_string))
        .collect();
    assert_eq!(
        resolved,
        vec![
            Some("AABBCC33".to_string()),
            Some("AABBCC22".to_string()),
            None
        ]
    );
}

#[test]
fn switching_tag_source_through_overrides() {
    let input = InputTable::from_text(["RFID", "TAGG ID", "Regnummer"], [["", "", ""]]);
    let from_file = ColumnMapping::direct("RFID", "Regnummer");
    let overridden = from_file.with_overrides(ColumnMapping {
        indirect_reference_column: Some("TAGG ID".to_string()),
        ..ColumnMapping::default()
    });
    let columns = resolve_columns(&overridden, &input).unwrap();
    assert_eq!(columns.tag, TagColumn::Indirect(1));
    assert_eq!(columns.business_id, 2);
}

#[test]
fn company_column_must_exist_when_configured() {
    let input = InputTable::from_text(["RFID", "Regnummer"], [["AABBCCDD", "ABC123"]]);
    let mapping = ColumnMapping::direct("RFID", "Regnummer").with_company("Företag");
    assert!(matches!(
        resolve_columns(&mapping, &input),
        Err(MappingError::ColumnNotFound { role: "company", .. })
    ));
}
