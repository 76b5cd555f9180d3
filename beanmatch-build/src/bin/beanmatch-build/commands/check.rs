use anyhow::Result;
use beanmatch_build::{CheckReport, CheckStatus, MatcherGenerator};
use clap::Args;
use comfy_table::{Cell, Table};
use serde::Serialize;
use std::path::Path;

use super::{SourceArgs, display_path};
use crate::context::ProjectContext;
use crate::output::{OutputManager, TableDisplay};

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Serialize)]
struct CheckSummary {
    up_to_date: usize,
    problems: usize,
    files: Vec<CheckedFile>,
}

#[derive(Serialize)]
struct CheckedFile {
    type_name: String,
    file: String,
    status: CheckStatus,
}

impl CheckSummary {
    fn new(reports: Vec<CheckReport>, project_root: &Path) -> Self {
        let problems = reports.iter().filter(|r| r.status.is_problem()).count();
        Self {
            up_to_date: reports.len() - problems,
            problems,
            files: reports
                .into_iter()
                .map(|report| CheckedFile {
                    file: display_path(&report.file, project_root),
                    type_name: report.type_name,
                    status: report.status,
                })
                .collect(),
        }
    }
}

impl TableDisplay for CheckSummary {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.create_table(&["Type", "File", "Status"]);
        for file in &self.files {
            table.add_row(vec![
                Cell::new(&file.type_name),
                Cell::new(&file.file),
                output.status_cell(&file.status.to_string(), !file.status.is_problem()),
            ]);
        }
        table
    }
}

pub fn handle_check(args: CheckArgs, output: &OutputManager) -> Result<()> {
    let ctx = ProjectContext::find()?;
    let config = args.source.apply(ctx.config.clone());

    output.heading("Checking generated matchers");
    let reports = MatcherGenerator::from_config(&config, &ctx.project_root).check()?;
    let summary = CheckSummary::new(reports, &ctx.project_root);
    output.display(&summary)?;

    if summary.problems > 0 {
        output.info("Run 'beanmatch-build generate' to bring them up to date");
        anyhow::bail!("{} of {} matcher files need attention", summary.problems, summary.files.len());
    }

    output.success(&format!("All {} matchers are up to date", summary.up_to_date));
    Ok(())
}
