/// Column registry for the Medicina Legal suicide dataset.
///
/// Defines the canonical header names of the columns this service
/// requires, along with a short label used in logs and exports. This is
/// the single source of truth for header strings — all other modules
/// should reference columns from here rather than hardcoding names.

use crate::model::IncidentRecord;

// ---------------------------------------------------------------------------
// Sentinel and domain values
// ---------------------------------------------------------------------------

/// Marks an unreported categorical value in `department` and `reason`.
///
/// This is a real string in the source data, not a missing value: a row
/// carrying it is "complete" and survives cleaning, but some aggregates
/// exclude it explicitly.
pub const NO_INFORMATION: &str = "Sin informacion";

/// Sex values as spelled in the source data.
pub const SEX_MALE: &str = "Hombre";
pub const SEX_FEMALE: &str = "Mujer";

// ---------------------------------------------------------------------------
// Required column headers
// ---------------------------------------------------------------------------

pub const COL_YEAR: &str = "Año del hecho";
pub const COL_LIFE_CYCLE: &str = "Ciclo Vital";
pub const COL_SEX: &str = "Sexo de la victima";
pub const COL_DEPARTMENT: &str = "Departamento del hecho DANE";
pub const COL_SCENE: &str = "Escenario del Hecho";
pub const COL_MECHANISM: &str = "Mecanismo Causal de la Lesion Fatal";
pub const COL_REASON: &str = "Razon del Suicidio";

/// Metadata for a single required column.
pub struct Column {
    /// Exact header string as it appears in the export. Matching is
    /// case-sensitive; the export does not vary its headers.
    pub header: &'static str,
    /// Short English label for logs and reports.
    pub label: &'static str,
}

/// All columns the pipeline requires, in source-file order.
///
/// The export carries more columns than these (e.g. country of birth);
/// extra columns still participate in the row-complete filter but are
/// not carried into `IncidentRecord`.
pub static REQUIRED_COLUMNS: &[Column] = &[
    Column {
        header: COL_YEAR,
        label: "year of event",
    },
    Column {
        header: COL_LIFE_CYCLE,
        label: "life cycle stage",
    },
    Column {
        header: COL_SEX,
        label: "victim sex",
    },
    Column {
        header: COL_DEPARTMENT,
        label: "department",
    },
    Column {
        header: COL_SCENE,
        label: "scene of event",
    },
    Column {
        header: COL_MECHANISM,
        label: "fatal injury mechanism",
    },
    Column {
        header: COL_REASON,
        label: "suicide reason",
    },
];

/// Returns the required header strings, suitable for schema validation.
pub fn required_headers() -> Vec<&'static str> {
    REQUIRED_COLUMNS.iter().map(|c| c.header).collect()
}

/// Looks up a required column by its header. Returns `None` if the
/// header is not one this service requires.
pub fn find_column(header: &str) -> Option<&'static Column> {
    REQUIRED_COLUMNS.iter().find(|c| c.header == header)
}

// ---------------------------------------------------------------------------
// Field selector
// ---------------------------------------------------------------------------

/// The categorical fields selectable for aggregation.
///
/// `year` is deliberately absent — it is numeric and has its own
/// time-series aggregator in `analysis::temporal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LifeCycleStage,
    Sex,
    Department,
    Scene,
    Mechanism,
    Reason,
}

impl Field {
    /// The source header this field was loaded from.
    pub fn header(self) -> &'static str {
        match self {
            Field::LifeCycleStage => COL_LIFE_CYCLE,
            Field::Sex => COL_SEX,
            Field::Department => COL_DEPARTMENT,
            Field::Scene => COL_SCENE,
            Field::Mechanism => COL_MECHANISM,
            Field::Reason => COL_REASON,
        }
    }

    /// Reads this field's value out of a record.
    pub fn value(self, record: &IncidentRecord) -> &str {
        match self {
            Field::LifeCycleStage => &record.life_cycle_stage,
            Field::Sex => &record.sex,
            Field::Department => &record.department,
            Field::Scene => &record.scene,
            Field::Mechanism => &record.mechanism,
            Field::Reason => &record.reason,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FIELDS: [Field; 6] = [
        Field::LifeCycleStage,
        Field::Sex,
        Field::Department,
        Field::Scene,
        Field::Mechanism,
        Field::Reason,
    ];

    #[test]
    fn test_no_duplicate_headers_in_registry() {
        let mut seen = std::collections::HashSet::new();
        for column in REQUIRED_COLUMNS {
            assert!(
                seen.insert(column.header),
                "duplicate header '{}' found in REQUIRED_COLUMNS",
                column.header
            );
        }
    }

    #[test]
    fn test_registry_contains_all_expected_columns() {
        let expected = [
            COL_YEAR,
            COL_LIFE_CYCLE,
            COL_SEX,
            COL_DEPARTMENT,
            COL_SCENE,
            COL_MECHANISM,
            COL_REASON,
        ];
        let headers = required_headers();
        for header in &expected {
            assert!(
                headers.contains(header),
                "REQUIRED_COLUMNS missing expected header '{}'",
                header
            );
        }
        assert_eq!(headers.len(), expected.len());
    }

    #[test]
    fn test_find_column_returns_correct_entry() {
        let column = find_column(COL_REASON).expect("reason column should be in registry");
        assert_eq!(column.header, COL_REASON);
        assert_eq!(column.label, "suicide reason");
    }

    #[test]
    fn test_find_column_returns_none_for_unknown_header() {
        assert!(find_column("Pais de Nacimiento").is_none());
    }

    #[test]
    fn test_every_field_maps_to_a_registered_header() {
        for field in ALL_FIELDS {
            assert!(
                find_column(field.header()).is_some(),
                "field {:?} maps to header '{}' which is not in the registry",
                field,
                field.header()
            );
        }
    }

    #[test]
    fn test_field_value_reads_the_matching_attribute() {
        let record = IncidentRecord {
            year: 2020,
            life_cycle_stage: "Juventud".to_string(),
            sex: SEX_FEMALE.to_string(),
            department: "Cundinamarca".to_string(),
            scene: "Via publica".to_string(),
            mechanism: "Caida de altura".to_string(),
            reason: NO_INFORMATION.to_string(),
        };
        assert_eq!(Field::LifeCycleStage.value(&record), "Juventud");
        assert_eq!(Field::Sex.value(&record), SEX_FEMALE);
        assert_eq!(Field::Department.value(&record), "Cundinamarca");
        assert_eq!(Field::Scene.value(&record), "Via publica");
        assert_eq!(Field::Mechanism.value(&record), "Caida de altura");
        assert_eq!(Field::Reason.value(&record), NO_INFORMATION);
    }
}
