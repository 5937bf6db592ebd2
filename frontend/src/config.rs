use thiserror::Error;

pub const AIRTABLE_API_ROOT: &str = "https://api.airtable.com/v0";
const DEFAULT_TABLE: &str = "database";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} was not set when the site was built")]
    Missing(&'static str),
}

/// Credentials for the portfolio table. Baked in by `trunk build`, so the
/// variables must be exported in the shell that runs the build.
#[derive(Debug, Clone, PartialEq)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table: String,
}

impl AirtableConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            option_env!("AIRTABLE_API_KEY"),
            option_env!("AIRTABLE_BASE_ID"),
            option_env!("AIRTABLE_TABLE"),
        )
    }

    fn from_parts(
        api_key: Option<&str>,
        base_id: Option<&str>,
        table: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_key = non_empty(api_key).ok_or(ConfigError::Missing("AIRTABLE_API_KEY"))?;
        let base_id = non_empty(base_id).ok_or(ConfigError::Missing("AIRTABLE_BASE_ID"))?;
        let table = non_empty(table).unwrap_or(DEFAULT_TABLE);

        Ok(Self {
            api_key: api_key.to_string(),
            base_id: base_id.to_string(),
            table: table.to_string(),
        })
    }

    pub fn records_url(&self, offset: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}/{}",
            AIRTABLE_API_ROOT,
            urlencoding::encode(&self.base_id),
            urlencoding::encode(&self.table)
        );
        if let Some(offset) = offset {
            url.push_str("?offset=");
            url.push_str(&urlencoding::encode(offset));
        }
        url
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
