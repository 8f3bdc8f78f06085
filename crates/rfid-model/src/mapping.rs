use serde::{Deserialize, Serialize};

/// Which input columns feed the pipeline.
///
/// Exactly one of `direct_identifier_column` / `indirect_reference_column`
/// must be set, and `business_id_column` is always required. The invariant
/// is checked when the mapping is resolved against a table, so a partially
/// filled mapping (e.g. from a config file awaiting CLI overrides) can still
/// be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ColumnMapping {
    /// Column holding the RFID/HEX identifier itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_identifier_column: Option<String>,
    /// Column holding a TAGG ID resolved through the lookup table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indirect_reference_column: Option<String>,
    /// Column that becomes `Identifieringsnummer` in the output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id_column: Option<String>,
    /// Optional company column; one output file per company when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_column: Option<String>,
}

/// Where the tag identifier of a row comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSource<'a> {
    Direct(&'a str),
    Indirect(&'a str),
}

impl ColumnMapping {
    pub fn direct(tag_column: impl Into<String>, business_id_column: impl Into<String>) -> Self {
        Self {
            direct_identifier_column: Some(tag_column.into()),
            business_id_column: Some(business_id_column.into()),
            ..Self::default()
        }
    }

    pub fn indirect(
        reference_column: impl Into<String>,
        business_id_column: impl Into<String>,
    ) -> Self {
        Self {
            indirect_reference_column: Some(reference_column.into()),
            business_id_column: Some(business_id_column.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_company(mut self, company_column: impl Into<String>) -> Self {
        self.company_column = Some(company_column.into());
        self
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// A tag source in `overrides` replaces both tag slots, so switching from
    /// a direct to an indirect column never leaves both set.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ColumnMapping) -> Self {
        let ColumnMapping {
            direct_identifier_column,
            indirect_reference_column,
            business_id_column,
            company_column,
        } = overrides;
        if direct_identifier_column.is_some() || indirect_reference_column.is_some() {
            self.direct_identifier_column = direct_identifier_column;
            self.indirect_reference_column = indirect_reference_column;
        }
        if business_id_column.is_some() {
            self.business_id_column = business_id_column;
        }
        if company_column.is_some() {
            self.company_column = company_column;
        }
        self
    }

    /// The configured tag source, or `None` when zero or both slots are set.
    pub fn tag_source(&self) -> Option<TagSource<'_>> {
        match (
            non_blank(self.direct_identifier_column.as_deref()),
            non_blank(self.indirect_reference_column.as_deref()),
        ) {
            (Some(column), None) => Some(TagSource::Direct(column)),
            (None, Some(column)) => Some(TagSource::Indirect(column)),
            _ => None,
        }
    }

    pub fn business_id(&self) -> Option<&str> {
        non_blank(self.business_id_column.as_deref())
    }

    pub fn company(&self) -> Option<&str> {
        non_blank(self.company_column.as_deref())
    }

    pub fn uses_lookup(&self) -> bool {
        matches!(self.tag_source(), Some(TagSource::Indirect(_)))
    }
}

/// Blank column names count as "not selected".
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|name| !name.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_source_requires_exactly_one_column() {
        let direct = ColumnMapping::direct("RFID", "Regnr");
        assert_eq!(direct.tag_source(), Some(TagSource::Direct("RFID")));

        let indirect = ColumnMapping::indirect("TAGG ID", "Regnr");
        assert_eq!(indirect.tag_source(), Some(TagSource::Indirect("TAGG ID")));
        assert!(indirect.uses_lookup());

        let mut both = direct.clone();
        both.indirect_reference_column = Some("TAGG ID".to_string());
        assert_eq!(both.tag_source(), None);

        assert_eq!(ColumnMapping::default().tag_source(), None);
    }

    #[test]
    fn blank_column_names_are_unset() {
        let mut mapping = ColumnMapping::direct("  ", "Regnr");
        mapping.company_column = Some(String::new());
        assert_eq!(mapping.tag_source(), None);
        assert_eq!(mapping.company(), None);
        assert_eq!(mapping.business_id(), Some("Regnr"));
    }

    #[test]
    fn overrides_replace_tag_source_as_a_unit() {
        let base = ColumnMapping::direct("RFID", "Regnr").with_company("Företag");
        let merged = base.with_overrides(ColumnMapping {
            indirect_reference_column: Some("TAGG ID".to_string()),
            ..ColumnMapping::default()
        });
        assert_eq!(merged.direct_identifier_column, None);
        assert_eq!(merged.tag_source(), Some(TagSource::Indirect("TAGG ID")));
        assert_eq!(merged.business_id(), Some("Regnr"));
        assert_eq!(merged.company(), Some("Företag"));
    }

    #[test]
    fn deserializes_kebab_case_toml() {
        let mapping: ColumnMapping = toml::from_str(
            r#"
            indirect-reference-column = "TAGG ID"
            business-id-column = "Regnummer"
            company-column = "Företag"
            "#,
        )
        .unwrap();
        assert_eq!(mapping.tag_source(), Some(TagSource::Indirect("TAGG ID")));
        assert_eq!(mapping.company(), Some("Företag"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<ColumnMapping, _> = toml::from_str(r#"rfid = "RFID""#);
        assert!(result.is_err());
    }
}
