use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Document category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Project,
    Template,
    Report,
    /// Design documentation (input)
    Design,
    /// Executive documentation (output)
    Executive,
}

/// Processing state of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Uploaded,
    Processing,
    Completed,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AxisDirection {
    Horizontal,
    Vertical,
}

/// A grid line of an engineering drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AxisData {
    pub direction: AxisDirection,
    /// Axis identifier, e.g. "А" or "1"
    pub label: String,
    /// Coordinate in millimeters
    pub position: f64,
}

/// Bill of materials entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BomEntry {
    pub position: String,
    pub name: String,
    /// Unit weight in kg
    pub weight: f64,
    pub quantity: u32,
    pub total_weight: f64,
}

/// Metadata extracted from a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub customer: String,
    pub project_object: String,
    pub address: String,
    pub axes: Vec<AxisData>,
    pub elevation_marks: Vec<f64>,
    pub bill_of_materials: Vec<BomEntry>,
}

/// A stored document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    /// File name with extension
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub upload_date: DateTime<Utc>,
    pub status: DocumentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
    pub section_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
}
