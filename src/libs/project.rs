use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One row of the `project` table.
///
/// `project_id` is `None` until the store assigns it on insert and is always
/// `Some` on a project read back from the database. The remaining fields are
/// optional as well: a column missing from a query and a NULL column both
/// leave the field unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: Option<i32>,
    pub project_name: Option<String>,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

impl Project {
    pub fn new(
        name: &str,
        estimated_hours: Option<Decimal>,
        actual_hours: Option<Decimal>,
        difficulty: Option<i32>,
        notes: Option<&str>,
    ) -> Self {
        Project {
            project_id: None,
            project_name: Some(name.to_string()),
            estimated_hours,
            actual_hours,
            difficulty,
            notes: notes.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        self.project_name.as_deref().unwrap_or_default()
    }
}

fn or_null<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| "null".to_string(), |v| v.to_string())
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\n   ID= {}", or_null(&self.project_id))?;
        write!(f, "\n   Project Name= {}", or_null(&self.project_name))?;
        write!(f, "\n   Estimated Hours= {}", or_null(&self.estimated_hours))?;
        write!(f, "\n   Actual Hours= {}", or_null(&self.actual_hours))?;
        write!(f, "\n   Difficulty= {}", or_null(&self.difficulty))?;
        write!(f, "\n   Notes= {}", or_null(&self.notes))
    }
}
