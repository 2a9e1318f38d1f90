//! YAML configuration for seed runs.
//!
//! Supports a connection block, a default row count and per-table overrides.

use crate::error::SeedError;
use hospital_data::Table;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Database connection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Full connection URL; takes precedence over the individual fields
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
}

impl ConnectionConfig {
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.user.is_none()
            && self.password.is_none()
            && self.host.is_none()
            && self.port.is_none()
            && self.database.is_none()
    }
}

/// Per-table seeding configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Row count for this table (overrides every other setting)
    pub rows: Option<usize>,
    /// Skip this table entirely
    pub skip: bool,
}

/// Default seeding settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultConfig {
    /// Row count for tables without their own setting
    pub rows: Option<usize>,
}

/// Complete YAML configuration for the seed command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedYamlConfig {
    pub connection: ConnectionConfig,
    /// RNG seed for reproducible runs
    pub seed: Option<u64>,
    pub default: DefaultConfig,
    /// Per-table settings
    pub tables: HashMap<String, TableConfig>,
}

impl SeedYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: SeedYamlConfig = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject table sections that name no hospital table
    pub fn validate(&self) -> Result<(), SeedError> {
        for name in self.tables.keys() {
            name.parse::<Table>()
                .map_err(|_| SeedError::UnknownTable(name.clone()))?;
        }
        Ok(())
    }

    /// Get configuration for a specific table
    pub fn get_table_config(&self, table: Table) -> Option<&TableConfig> {
        self.tables.get(table.name()).or_else(|| {
            // Try case-insensitive match
            self.tables
                .iter()
                .find(|(k, _)| k.to_lowercase() == table.name())
                .map(|(_, v)| v)
        })
    }

    /// Check if a table should be skipped
    pub fn should_skip(&self, table: Table) -> bool {
        self.get_table_config(table).is_some_and(|c| c.skip)
    }

    /// Row count for `table`: table setting, then `--rows`, then the config
    /// default, then the built-in default
    pub fn rows_for(&self, table: Table, cli_rows: Option<usize>) -> usize {
        self.get_table_config(table)
            .and_then(|c| c.rows)
            .or(cli_rows)
            .or(self.default.rows)
            .unwrap_or_else(|| table.default_rows())
    }

    /// Ordered (table, row count) list for a seed run.
    ///
    /// `only` restricts the run to the named tables; the generation order is
    /// kept either way.
    pub fn plan(&self, cli_rows: Option<usize>, only: Option<&[Table]>) -> Vec<(Table, usize)> {
        Table::SEED_ORDER
            .iter()
            .copied()
            .filter(|t| only.map_or(true, |only| only.contains(t)))
            .filter(|t| !self.should_skip(*t))
            .map(|t| (t, self.rows_for(t, cli_rows)))
            .collect()
    }
}

/// Parse a comma-separated table list such as `patient,doctor`
pub fn parse_table_list(list: &str) -> Result<Vec<Table>, SeedError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Table>()
                .map_err(|_| SeedError::UnknownTable(s.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
connection:
  user: hospital_db
  password: secret
  host: localhost
  port: 5432
  database: hospital_db
seed: 42
default:
  rows: 1000
tables:
  patient:
    rows: 5000
  Parking:
    skip: true
"#;

    #[test]
    fn test_parse_full_config() {
        let config = SeedYamlConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.connection.port, Some(5432));
        assert!(!config.connection.is_empty());
        assert_eq!(config.default.rows, Some(1000));
    }

    #[test]
    fn test_rows_precedence() {
        let config = SeedYamlConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.rows_for(Table::Patient, Some(10)), 5000);
        assert_eq!(config.rows_for(Table::Doctor, Some(10)), 10);
        assert_eq!(config.rows_for(Table::Doctor, None), 1000);
        assert_eq!(
            SeedYamlConfig::default().rows_for(Table::Room, None),
            Table::Room.default_rows()
        );
    }

    #[test]
    fn test_plan_keeps_order_and_skips() {
        let config = SeedYamlConfig::parse(SAMPLE).unwrap();
        let plan = config.plan(None, None);
        assert_eq!(plan.len(), 14);
        assert!(plan.iter().all(|(t, _)| *t != Table::Parking));
        assert_eq!(plan[0], (Table::Patient, 5000));

        let only = [Table::Payment, Table::Patient];
        let plan = config.plan(Some(3), Some(&only));
        assert_eq!(plan, vec![(Table::Patient, 5000), (Table::Payment, 3)]);
    }

    #[test]
    fn test_unknown_table_in_config_is_rejected() {
        let err = SeedYamlConfig::parse("tables:\n  patients:\n    rows: 1\n").unwrap_err();
        assert!(err.to_string().contains("patients"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SeedYamlConfig::parse("{}").unwrap();
        assert!(config.connection.is_empty());
        assert_eq!(config.plan(None, None).len(), 15);
    }

    #[test]
    fn test_parse_table_list() {
        assert_eq!(
            parse_table_list("patient, doctor,").unwrap(),
            vec![Table::Patient, Table::Doctor]
        );
        assert!(matches!(
            parse_table_list("patient,wards"),
            Err(SeedError::UnknownTable(name)) if name == "wards"
        ));
    }
}
