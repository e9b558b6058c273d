//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::collection::Collection;
use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use crate::frequency::{get_frequencies, FrequencyTable};
use crate::handler::HandlerRegistry;
use crate::http::HttpClient;
use crate::naming;
use crate::registry::{self, Category};
use serde_json::{json, Value};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Classes { category } => self.classes(category.as_deref()),
            Commands::Resolve { class } => self.resolve(class),
            Commands::Records { class, limit } => self.records(class, *limit).await,
            Commands::Count { class } => self.count(class).await,
            Commands::Frequencies {
                classes,
                from,
                to,
                value,
                output,
            } => {
                self.frequencies(classes, *from, *to, value, output.as_deref())
                    .await
            }
        }
    }

    /// Load settings from the settings file, environment and flags
    fn settings(&self) -> Result<Settings> {
        let settings = match &self.cli.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        }
        .with_env_overrides()?;

        match &self.cli.base_url {
            Some(base_url) => settings.with_base_url(base_url.as_str()),
            None => Ok(settings),
        }
    }

    /// Build the HTTP client from settings
    fn client(&self) -> Result<HttpClient> {
        HttpClient::with_config(self.settings()?.http_client_config())
    }

    /// List registered classes, optionally of one category
    fn classes(&self, category: Option<&str>) -> Result<()> {
        let categories = match category {
            Some(name) => vec![name.parse::<Category>()?],
            None => Category::ALL.to_vec(),
        };

        for category in categories {
            let classes: Vec<&str> = registry::classes_in(category).collect();
            self.output(&json!({
                "category": category,
                "classes": classes,
            }));
        }
        Ok(())
    }

    /// Show how a class name resolves
    fn resolve(&self, class: &str) -> Result<()> {
        let variable_name = naming::variable_name(class);
        let handler = HandlerRegistry::builtin().resolve(class).ok();

        self.output(&json!({
            "class_name": class,
            "variable_name": variable_name,
            "registered": handler.is_some(),
            "category": handler.as_ref().map(|h| h.category()),
            "endpoint": handler.as_ref().map(|h| h.endpoint()),
            "value_field": handler.as_ref().and_then(|h| h.value_field()),
        }));
        Ok(())
    }

    /// Print records of a class
    async fn records(&self, class: &str, limit: Option<usize>) -> Result<()> {
        let client = self.client()?;
        let collection = Collection::open(&client, class)?;
        let mut pager = collection.records();

        let mut emitted = 0usize;
        while limit.map_or(true, |max| emitted < max) {
            let Some(record) = pager.next_record().await? else {
                break;
            };
            self.output(&Value::Object(record.into_inner()));
            emitted += 1;
        }

        info!(
            "Printed {} records of '{}' from {} pages",
            emitted,
            class,
            pager.pages_fetched()
        );
        Ok(())
    }

    /// Print the record count of a class
    async fn count(&self, class: &str) -> Result<()> {
        let client = self.client()?;
        let collection = Collection::open(&client, class)?;
        let count = collection.count().await?;

        self.output(&json!({
            "class_name": class,
            "count": count,
        }));
        Ok(())
    }

    /// Aggregate per-year frequencies
    async fn frequencies(
        &self,
        classes: &[String],
        from: i64,
        to: i64,
        value: &str,
        output: Option<&Path>,
    ) -> Result<()> {
        let years = year_range(from, to)?;
        let client = self.client()?;

        let start = Instant::now();
        let table = get_frequencies(&client, classes, &years, value).await?;
        info!(
            "Aggregated {} classes over {} years in {:?}",
            classes.len(),
            years.len(),
            start.elapsed()
        );

        match output {
            Some(path) => {
                let rows = table
                    .write_parquet(path)
                    .with_context(|| format!("Writing {}", path.display()))?;
                self.output(&json!({
                    "output": path.display().to_string(),
                    "rows": rows,
                    "total": table.total(),
                }));
            }
            None => {
                for row in table_rows(&table) {
                    self.output(&row);
                }
            }
        }
        Ok(())
    }

    /// Output a message
    fn output(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Inclusive year range, rejecting reversed bounds
fn year_range(from: i64, to: i64) -> Result<Vec<i64>> {
    if from > to {
        return Err(Error::config(format!(
            "--from ({from}) must not be after --to ({to})"
        )));
    }
    Ok((from..=to).collect())
}

/// One JSON object per table row, keyed by year then class name
fn table_rows(table: &FrequencyTable) -> Vec<Value> {
    table
        .years()
        .iter()
        .filter_map(|year| {
            let counts = table.row(*year)?;
            let mut row = serde_json::Map::new();
            row.insert("year".to_string(), json!(year));
            for (class_name, count) in table.class_names().iter().zip(counts) {
                row.insert(class_name.clone(), json!(count));
            }
            Some(Value::Object(row))
        })
        .collect()
}
