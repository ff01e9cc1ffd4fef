use super::types::{Script, Step};
use crate::catalog::{timed_sort_by_price, Catalog, Record, SortReport};
use crate::error::CatalogError;
use crate::report::Console;
use crate::Result;
use std::io::Write;
use tracing::{debug, info};

/// What happened during a script run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub steps_run: usize,
    /// Steps whose key matched nothing
    pub not_found: usize,
    pub last_sort: Option<SortReport>,
}

/// Executes a [`Script`] against a catalog, reporting through a [`Console`]
///
/// Not-found outcomes are reported and skipped. Only a failing output stream
/// stops the run.
pub struct ScriptRunner<O: Write, E: Write> {
    console: Console<O, E>,
}

impl<O: Write, E: Write> ScriptRunner<O, E> {
    pub fn new(console: Console<O, E>) -> Self {
        Self { console }
    }

    pub fn into_console(self) -> Console<O, E> {
        self.console
    }

    pub fn run(&mut self, catalog: &mut Catalog, script: &Script) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, step) in script.steps.iter().enumerate() {
            debug!(step = step.name(), index, mutates = step.mutates(), "Running step");
            if let Step::Display { .. } = step {
                if index > 0 {
                    self.console.say("")?;
                }
            }

            match self.run_step(catalog, step) {
                Ok(Some(report)) => summary.last_sort = Some(report),
                Ok(None) => {}
                Err(e) if e.is_not_found() => summary.not_found += 1,
                Err(e) => return Err(e),
            }
            summary.steps_run += 1;
        }

        self.console.flush()?;
        info!(
            steps = summary.steps_run,
            not_found = summary.not_found,
            records = catalog.len(),
            "Script finished"
        );
        Ok(summary)
    }

    /// Run one step; a sort hands back its timing
    fn run_step(&mut self, catalog: &mut Catalog, step: &Step) -> Result<Option<SortReport>> {
        match step {
            Step::Display { title } => {
                self.console.say(&format!("{}:", title))?;
                self.console.records(catalog.records())?;
            }
            Step::Insert {
                id,
                name,
                price,
                category,
            } => {
                let record = Record::new(*id, name.as_str(), *price, category.as_str());
                self.console.say("Inserting product:")?;
                self.console.record(&record)?;
                catalog.insert(record);
                self.console.say("Product inserted successfully.")?;
            }
            Step::Update {
                id,
                name,
                price,
                category,
            } => {
                self.console
                    .say(&format!("Updating product with ID {}:", id))?;
                let update = catalog
                    .update(*id, name.as_str(), *price, category.as_str())
                    .or_else(|e| self.not_found(e, " for updating."))?;
                self.console.say("Old details:")?;
                self.console.record(&update.before)?;
                self.console.say("Updated details:")?;
                self.console.record(&update.after)?;
                self.console.say("Product updated successfully.")?;
            }
            Step::Delete { id } => {
                self.console
                    .say(&format!("Deleting product with ID {}:", id))?;
                catalog
                    .delete(*id)
                    .or_else(|e| self.not_found(e, " for deletion."))?;
                self.console.say("Product deleted successfully.")?;
            }
            Step::FindById { id } => {
                self.console
                    .say(&format!("Searching for product with ID {}:", id))?;
                let found = catalog
                    .find_by_id(*id)
                    .or_else(|e| self.not_found(e, "."))?;
                self.console.say("Product found:")?;
                self.console.record(found)?;
            }
            Step::FindByName { name } => {
                self.console
                    .say(&format!("Searching for product with Name \"{}\":", name))?;
                let found = catalog
                    .find_by_name(name)
                    .or_else(|e| self.not_found(e, "."))?;
                self.console.say("Product found:")?;
                self.console.record(found)?;
            }
            Step::SortByPrice => {
                self.console.say("Sorting products by price...")?;
                let report = timed_sort_by_price(catalog);
                self.console.say(&format!(
                    "Time taken for sorting: {} microseconds",
                    report.micros()
                ))?;
                return Ok(Some(report));
            }
        }

        Ok(None)
    }

    /// Report a not-found outcome on the diagnostic stream, then pass it on
    fn not_found<T>(&mut self, error: CatalogError, suffix: &str) -> Result<T> {
        if error.is_not_found() {
            self.console.warn(&format!("{}{}", error, suffix))?;
        }
        Err(error)
    }
}
