//! Converter Data Types
//!
//! Defines the raw GeoJSON input structures, the flattened output record, and
//! the administrative level descriptor that parameterizes the conversion.

use serde::{Deserialize, Serialize};

/// One of the five nesting tiers of the Malagasy administrative hierarchy.
///
/// Each level knows its source filename, its output document name, and the
/// HTTP route that serves it, so the converter and the server can both be
/// driven by the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminLevel {
    Country,
    Region,
    District,
    Commune,
    Fokontany,
}

impl AdminLevel {
    /// All levels, in nesting order (adm0 through adm4).
    pub const ALL: [AdminLevel; 5] = [
        AdminLevel::Country,
        AdminLevel::Region,
        AdminLevel::District,
        AdminLevel::Commune,
        AdminLevel::Fokontany,
    ];

    /// Name of the OCHA source file for this level.
    pub fn input_filename(self) -> &'static str {
        match self {
            AdminLevel::Country => "mdg_admbnda_adm0_BNGRC_OCHA_20181031.json",
            AdminLevel::Region => "mdg_admbnda_adm1_BNGRC_OCHA_20181031.json",
            AdminLevel::District => "mdg_admbnda_adm2_BNGRC_OCHA_20181031.json",
            AdminLevel::Commune => "mdg_admbnda_adm3_BNGRC_OCHA_20181031.json",
            AdminLevel::Fokontany => "mdg_admbnda_adm4_BNGRC_OCHA_20181031.json",
        }
    }

    /// Name of the generated document for this level.
    pub fn output_filename(self) -> &'static str {
        match self {
            AdminLevel::Country => "country.json",
            AdminLevel::Region => "regions.json",
            AdminLevel::District => "districts.json",
            AdminLevel::Commune => "communes.json",
            AdminLevel::Fokontany => "fokontany.json",
        }
    }

    /// HTTP route serving this level's document.
    pub fn route(self) -> &'static str {
        match self {
            AdminLevel::Country => "/country",
            AdminLevel::Region => "/regions",
            AdminLevel::District => "/districts",
            AdminLevel::Commune => "/communes",
            AdminLevel::Fokontany => "/fokontany",
        }
    }

    /// Short label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            AdminLevel::Country => "country",
            AdminLevel::Region => "regions",
            AdminLevel::District => "districts",
            AdminLevel::Commune => "communes",
            AdminLevel::Fokontany => "fokontany",
        }
    }
}

/// A GeoJSON geometry: a type tag plus an opaque coordinate payload.
///
/// Coordinates are kept as raw `serde_json::Value` and copied verbatim into
/// the output records. The converter never reprojects or validates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: serde_json::Value,
}

/// Raw OCHA properties attached to every boundary feature.
///
/// Each source file carries the fields for its own level plus those of its
/// ancestors; fields for deeper levels are simply absent and default to
/// empty. Keys not listed here are ignored during parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    #[serde(rename = "ADM0_PCODE")]
    pub adm0_pcode: String,
    #[serde(rename = "ADM0_EN")]
    pub adm0_en: String,
    #[serde(rename = "ADM1_PCODE")]
    pub adm1_pcode: String,
    #[serde(rename = "ADM1_EN")]
    pub adm1_en: String,
    #[serde(rename = "ADM1_TYPE")]
    pub adm1_type: String,
    #[serde(rename = "ADM2_PCODE")]
    pub adm2_pcode: String,
    #[serde(rename = "ADM2_EN")]
    pub adm2_en: String,
    #[serde(rename = "ADM2_TYPE")]
    pub adm2_type: String,
    #[serde(rename = "ADM3_PCODE")]
    pub adm3_pcode: String,
    #[serde(rename = "ADM3_EN")]
    pub adm3_en: String,
    #[serde(rename = "ADM3_TYPE")]
    pub adm3_type: String,
    #[serde(rename = "ADM4_PCODE")]
    pub adm4_pcode: String,
    #[serde(rename = "ADM4_EN")]
    pub adm4_en: String,
    #[serde(rename = "ADM4_TYPE")]
    pub adm4_type: String,
    #[serde(rename = "PROV_CODE_")]
    pub prov_code: i64,
    #[serde(rename = "OLD_PROVIN")]
    pub old_provin: String,
}

/// One geographic entity from a source file: properties plus geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

/// The top-level shape of a source document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// Unique identifier assigned to every converted boundary record.
///
/// Wrapper around a UUIDv7 string: time-ordered, so identifiers sort by
/// creation, and collision-free within and across conversion runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RecordId(pub String);

impl RecordId {
    /// Generates a fresh time-ordered identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

/// The flattened output record, one shape for all five levels.
///
/// `province` carries the legacy grouping name for sub-country levels and is
/// omitted from serialized output at the country level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryRecord {
    pub id: RecordId,
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    pub geometry: Geometry,
}
