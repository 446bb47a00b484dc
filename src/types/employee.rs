use serde::{Deserialize, Deserializer, Serialize};

/// A stored employee record as returned by the backend.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Older records may have been stored without one.
    #[serde(default)]
    pub position: String,
    #[serde(deserialize_with = "salary_from_json")]
    pub salary: f64,
}

/// Body of a create request. The backend assigns the identifier.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub salary: f64,
}

impl NewEmployee {
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            position: self.position,
            salary: self.salary,
        }
    }
}

/// Salaries posted from a text field may have been stored as strings.
fn salary_from_json<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid salary {s:?}"))),
    }
}
