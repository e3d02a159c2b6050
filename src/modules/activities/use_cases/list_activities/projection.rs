use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityRow {
    pub activity_name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub scheduled_at: i64,
    pub updated_at: i64,
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityView {
    #[serde(skip)]
    pub activity_name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<ActivityRow> for ActivityView {
    fn from(row: ActivityRow) -> Self {
        Self {
            activity_name: row.activity_name,
            description: row.description,
            schedule: row.schedule,
            max_participants: row.max_participants,
            participants: row.participants,
        }
    }
}

/// The full catalog in scheduling order, serialized as an object keyed by
/// activity name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityCatalog(pub Vec<ActivityView>);

impl ActivityCatalog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for view in &self.0 {
            map.serialize_entry(&view.activity_name, view)?;
        }
        map.end()
    }
}
