use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Drop and recreate all tables on startup. Destroys existing data;
    /// only honored together with the explicit CLI flag, never by default.
    #[serde(default)]
    pub reset_on_start: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            reset_on_start: false,
        }
    }
}

fn default_db_path() -> String {
    "./classwatch.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}
