use anyhow::Result;
use beanmatch_build::MatcherGenerator;
use clap::Args;
use comfy_table::{Cell, Table};
use serde::Serialize;

use super::{SourceArgs, display_path};
use crate::context::ProjectContext;
use crate::output::{OutputManager, TableDisplay};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Serialize)]
struct GeneratedFiles {
    files: Vec<String>,
}

impl TableDisplay for GeneratedFiles {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.create_table(&["#", "Generated file"]);
        for (i, file) in self.files.iter().enumerate() {
            table.add_row(vec![Cell::new(i + 1), Cell::new(file)]);
        }
        table
    }
}

pub fn handle_generate(args: GenerateArgs, output: &OutputManager) -> Result<()> {
    let ctx = ProjectContext::find()?;
    if !ctx.has_config_file() {
        output.verbose(&format!("No {} found, using defaults", ctx.config_path.display()));
    }
    let config = args.source.apply(ctx.config.clone());

    output.heading("Generating matchers");
    let written = MatcherGenerator::from_config(&config, &ctx.project_root).run()?;

    let files = GeneratedFiles {
        files: written.iter().map(|path| display_path(path, &ctx.project_root)).collect(),
    };
    if files.files.is_empty() {
        output.warning("No structs found in the configured packages");
        return output.display(&files);
    }

    output.display(&files)?;
    output.success(&format!("Generated {} matchers", files.files.len()));
    Ok(())
}
