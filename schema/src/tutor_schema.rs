use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// What one tutor move costs in each of the four shard colours, and where it
/// is taught.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorMove {
    pub red_cost: u8,
    pub blue_cost: u8,
    pub yellow_cost: u8,
    pub green_cost: u8,
    pub location: String,
}

/// The tutor schema document. Entry order is significant: it is the bit
/// order of every species' tutor mask, so the move map is read into a
/// `Vec` rather than a hashed map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TutorSchema {
    #[serde(deserialize_with = "ordered_entries")]
    pub moves: Vec<(String, TutorMove)>,
}

impl TutorSchema {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn ordered_entries<'de, D>(deserializer: D) -> Result<Vec<(String, TutorMove)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, TutorMove)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a map of move names to tutor entries")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, entry)) = map.next_entry::<String, TutorMove>()? {
                entries.push((name, entry));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}
