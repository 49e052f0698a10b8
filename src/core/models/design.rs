use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GarmentCategory {
    #[default]
    Shirts,
    Pants,
    Shoes,
}

impl std::fmt::Display for GarmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GarmentCategory::Shirts => "shirts",
            GarmentCategory::Pants => "pants",
            GarmentCategory::Shoes => "shoes",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for GarmentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shirts" => Ok(GarmentCategory::Shirts),
            "pants" => Ok(GarmentCategory::Pants),
            "shoes" => Ok(GarmentCategory::Shoes),
            other => Err(format!("unknown garment category `{}`", other)),
        }
    }
}

const SHIRT_COLORS: &[&str] = &["#8B5CF6", "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#6B7280"];
const SHIRT_MATERIALS: &[&str] = &["cotton", "silk", "linen", "polyester"];
const SHIRT_PATTERNS: &[&str] = &["solid", "stripes", "dots", "floral"];

const PANTS_COLORS: &[&str] = &["#1F2937", "#3B82F6", "#6B7280", "#92400E", "#374151", "#111827"];
const PANTS_MATERIALS: &[&str] = &["denim", "cotton", "wool", "polyester"];
const PANTS_PATTERNS: &[&str] = &["solid", "checkered", "stripes"];

const SHOE_COLORS: &[&str] = &["#000000", "#FFFFFF", "#8B4513", "#DC2626", "#1F2937", "#3B82F6"];
const SHOE_MATERIALS: &[&str] = &["leather", "canvas", "synthetic", "suede"];
const SHOE_PATTERNS: &[&str] = &["solid", "textured", "mixed"];

pub const DEFAULT_PATTERN: &str = "solid";

/// Choices the customizer offers for one garment category.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct GarmentOptions {
    pub category: GarmentCategory,
    pub colors: Vec<String>,
    pub materials: Vec<String>,
    pub patterns: Vec<String>,
}

impl GarmentCategory {
    pub const ALL: [GarmentCategory; 3] = [
        GarmentCategory::Shirts,
        GarmentCategory::Pants,
        GarmentCategory::Shoes,
    ];

    fn palette(&self) -> (&'static [&'static str], &'static [&'static str], &'static [&'static str]) {
        match self {
            GarmentCategory::Shirts => (SHIRT_COLORS, SHIRT_MATERIALS, SHIRT_PATTERNS),
            GarmentCategory::Pants => (PANTS_COLORS, PANTS_MATERIALS, PANTS_PATTERNS),
            GarmentCategory::Shoes => (SHOE_COLORS, SHOE_MATERIALS, SHOE_PATTERNS),
        }
    }

    pub fn options(&self) -> GarmentOptions {
        let (colors, materials, patterns) = self.palette();
        let owned = |values: &[&str]| -> Vec<String> { values.iter().map(|v| v.to_string()).collect() };
        GarmentOptions {
            category: *self,
            colors: owned(colors),
            materials: owned(materials),
            patterns: owned(patterns),
        }
    }
}

/// The customizer's working selection before it is saved.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DesignDraft {
    pub category: GarmentCategory,
    pub color: String,
    pub material: String,
    pub pattern: String,
}

impl Default for DesignDraft {
    fn default() -> Self {
        DesignDraft::for_category(GarmentCategory::Shirts)
    }
}

impl DesignDraft {
    /// First color, first material and a solid pattern for `category`.
    pub fn for_category(category: GarmentCategory) -> Self {
        let (colors, materials, _) = category.palette();
        DesignDraft {
            category,
            color: colors[0].to_string(),
            material: materials[0].to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    /// Switches category and keeps the current color, material and pattern.
    pub fn with_category(self, category: GarmentCategory) -> Self {
        DesignDraft { category, ..self }
    }

    pub fn reset(&self) -> Self {
        DesignDraft::for_category(self.category)
    }

    /// Overwrites whichever selections are present.
    pub fn apply(self, selection: DraftSelection) -> Self {
        DesignDraft {
            category: self.category,
            color: selection.color.unwrap_or(self.color),
            material: selection.material.unwrap_or(self.material),
            pattern: selection.pattern.unwrap_or(self.pattern),
        }
    }
}

/// A partial change to the draft. Missing fields keep their current value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DraftSelection {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
}

/// A saved customizer snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,
    pub category: GarmentCategory,
    pub color: String,
    pub material: String,
    pub pattern: String,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}
