//! Employee model.

use serde::{Deserialize, Serialize};

/// A worker whose absences are tracked by the dashboard.
///
/// Sourced entirely from the API; the engine never constructs or mutates
/// employees on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
}

impl Employee {
    /// Returns the display name, `"<first> <last>"`.
    ///
    /// This is also the string the name filter matches against.
    ///
    /// # Examples
    ///
    /// ```
    /// use absence_engine::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: "42".to_string(),
    ///     first_name: "Rahaf".to_string(),
    ///     last_name: "Deckard".to_string(),
    /// };
    /// assert_eq!(employee.full_name(), "Rahaf Deckard");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
