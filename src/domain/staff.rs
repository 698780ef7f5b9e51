//! Staff directory entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::media::MediaRef;

/// Normalized staff directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
    pub position: String,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    /// Manual display order maintained in the CMS.
    pub order: Option<i64>,
    pub photo: Option<MediaRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStaffFields {
    name: Option<String>,
    position: Option<String>,
    department: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    bio: Option<String>,
    order: Option<i64>,
    photo: Option<Value>,
    // Some deployments named the relation in Indonesian.
    foto: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawStaffEntry {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    attributes: Option<RawStaffFields>,
    #[serde(flatten)]
    flat: RawStaffFields,
}

impl StaffMember {
    /// Normalize one raw staff entry, flat fields first, then `attributes`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw: RawStaffEntry = serde_json::from_value(value.clone()).ok()?;
        let id = raw.id?;
        let flat = raw.flat;
        let nested = raw.attributes.unwrap_or_default();

        let photo = flat
            .photo
            .as_ref()
            .or(flat.foto.as_ref())
            .or(nested.photo.as_ref())
            .or(nested.foto.as_ref())
            .and_then(MediaRef::from_value);

        Some(Self {
            id,
            name: flat.name.or(nested.name).unwrap_or_default(),
            position: flat.position.or(nested.position).unwrap_or_default(),
            department: flat.department.or(nested.department),
            email: flat.email.or(nested.email),
            phone: flat.phone.or(nested.phone),
            bio: flat.bio.or(nested.bio),
            order: flat.order.or(nested.order),
            photo,
        })
    }
}
