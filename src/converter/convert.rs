//! Feature Flattening and Document Assembly
//!
//! One generic mapping loop turns a parsed feature collection into the reduced
//! record shape for any administrative level; the level only contributes its
//! field-extraction rule. Assembled documents are serialized with 2-space
//! indentation and staged through a temporary file so readers never observe a
//! partial write.

use super::types::{AdminLevel, BoundaryRecord, Feature, FeatureCollection, Properties, RecordId};
use anyhow::Result;
use std::path::Path;

/// Field-extraction rule: (code, name, province) for one feature at a level.
fn level_fields(level: AdminLevel, props: &Properties) -> (String, String, Option<String>) {
    match level {
        AdminLevel::Country => (props.adm0_pcode.clone(), props.adm0_en.clone(), None),
        AdminLevel::Region => (
            props.adm1_pcode.clone(),
            props.adm1_en.clone(),
            Some(props.old_provin.clone()),
        ),
        AdminLevel::District => (
            props.adm2_pcode.clone(),
            props.adm2_en.clone(),
            Some(props.old_provin.clone()),
        ),
        AdminLevel::Commune => (
            props.adm3_pcode.clone(),
            props.adm3_en.clone(),
            Some(props.old_provin.clone()),
        ),
        AdminLevel::Fokontany => (
            props.adm4_pcode.clone(),
            props.adm4_en.clone(),
            Some(props.old_provin.clone()),
        ),
    }
}

/// Flattens a single feature into the output record for `level`.
///
/// Geometry is copied verbatim; the record receives a fresh identifier.
pub fn map_feature(level: AdminLevel, feature: &Feature) -> BoundaryRecord {
    let (code, name, province) = level_fields(level, &feature.properties);
    BoundaryRecord {
        id: RecordId::new(),
        name,
        code,
        province,
        geometry: feature.geometry.clone(),
    }
}

/// Flattens every feature of a collection, one record per feature.
pub fn map_collection(level: AdminLevel, collection: &FeatureCollection) -> Vec<BoundaryRecord> {
    collection
        .features
        .iter()
        .map(|feature| map_feature(level, feature))
        .collect()
}

/// Assembles the serialized output document for a level.
///
/// The country level is a single object built from the first feature and
/// fails explicitly when the collection is empty. Every other level is an
/// array with one entry per feature; an empty collection yields an empty
/// array.
pub fn build_document(level: AdminLevel, collection: &FeatureCollection) -> Result<Vec<u8>> {
    match level {
        AdminLevel::Country => {
            let feature = collection.features.first().ok_or_else(|| {
                anyhow::anyhow!("country input contains no features")
            })?;
            let record = map_feature(level, feature);
            Ok(serde_json::to_vec_pretty(&record)?)
        }
        _ => {
            let records = map_collection(level, collection);
            Ok(serde_json::to_vec_pretty(&records)?)
        }
    }
}

/// Writes a serialized document to `path`, overwriting any previous file.
///
/// The bytes are staged in a temporary sibling and renamed into place, so a
/// concurrent reader sees either the old document or the new one, never a
/// truncated file.
pub async fn write_document(path: &Path, bytes: &[u8]) -> Result<()> {
    let staging = path.with_extension("json.tmp");

    tokio::fs::write(&staging, bytes)
        .await
        .map_err(|e| anyhow::anyhow!("failed to write {}: {}", staging.display(), e))?;

    tokio::fs::rename(&staging, path)
        .await
        .map_err(|e| anyhow::anyhow!("failed to move {} into place: {}", path.display(), e))?;

    Ok(())
}
