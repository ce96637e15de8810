//! # CLI Layer
//!
//! This module is one UI client for mspcat. It is the only place that knows
//! about terminal I/O and argument parsing.
//!
//! - `run()`: parses arguments, sets up logging, builds the context, dispatches
//! - `handle_*()`: per-command handlers that call the API and print results
//!
//! Business rules live in the library's command layer; handlers here only
//! translate between shell arguments and API calls.

use super::render::{
    print_messages, render_categories, render_service_details, render_service_list,
    render_stats, render_text_list,
};
use super::setup::{
    get_grouped_help, help_for_command, CatalogCommands, Cli, Commands, DataCommands,
    ExportFormatArg, FormArgs, MiscCommands, ServiceCommands,
};
use clap::Parser;
use mspcat::api::{CategoryFilter, ConfigAction};
use mspcat::error::Result;
use mspcat::filter::ServiceFilter;
use mspcat::form::ServiceForm;
use mspcat::init::{initialize, CatalogContext};
use mspcat::logging::init_logging;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Help needs no catalog on disk
    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.as_deref());
    }

    let mut ctx = initialize(cli.home)?;
    print_messages(ctx.api.notices());

    match cli.command {
        Some(Commands::Catalog(cmd)) => match cmd {
            CatalogCommands::List { search, category } => handle_list(&ctx, search, category),
            CatalogCommands::Add { form } => handle_add(&mut ctx, form),
            CatalogCommands::Stats => handle_stats(&ctx),
            CatalogCommands::Categories => handle_categories(&ctx),
        },
        Some(Commands::Service(cmd)) => match cmd {
            ServiceCommands::Show { id } => handle_show(&ctx, &id),
            ServiceCommands::Edit { id, form } => handle_edit(&mut ctx, &id, form),
            ServiceCommands::Delete { id } => handle_delete(&mut ctx, &id),
            ServiceCommands::Duplicate { id } => handle_duplicate(&mut ctx, &id),
            ServiceCommands::Feature { ids } => {
                let result = ctx.api.feature_services(&ids)?;
                print_messages(&result.messages);
                Ok(())
            }
            ServiceCommands::Unfeature { ids } => {
                let result = ctx.api.unfeature_services(&ids)?;
                print_messages(&result.messages);
                Ok(())
            }
            ServiceCommands::Activate { ids } => {
                let result = ctx.api.activate_services(&ids)?;
                print_messages(&result.messages);
                Ok(())
            }
            ServiceCommands::Deactivate { ids } => {
                let result = ctx.api.deactivate_services(&ids)?;
                print_messages(&result.messages);
                Ok(())
            }
        },
        Some(Commands::Data(DataCommands::Export { format, out })) => {
            handle_export(&ctx, format, out)
        }
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Help { command } => handle_help(command.as_deref()),
        },
        None => handle_list(&ctx, None, None),
    }
}

fn handle_list(ctx: &CatalogContext, search: Option<String>, category: Option<String>) -> Result<()> {
    let category = match category {
        Some(label) => label.parse::<CategoryFilter>()?,
        None => ctx.config.category_filter(),
    };
    let filter = ServiceFilter {
        search_term: search,
        category,
    };

    let result = ctx.api.get_services(&filter)?;
    print!("{}", render_service_list(&result.listed_services));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut CatalogContext, args: FormArgs) -> Result<()> {
    let mut form = ServiceForm::default();
    args.apply(&mut form);

    let result = ctx.api.create_service(&form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &CatalogContext, id: &str) -> Result<()> {
    let result = ctx.api.view_service(id)?;
    print!("{}", render_service_details(&result.listed_services));
    Ok(())
}

fn handle_edit(ctx: &mut CatalogContext, id: &str, args: FormArgs) -> Result<()> {
    let mut form = ctx.api.edit_form(id)?;
    args.apply(&mut form);

    let result = ctx.api.update_service(id, &form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut CatalogContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_service(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_duplicate(ctx: &mut CatalogContext, id: &str) -> Result<()> {
    let result = ctx.api.duplicate_service(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &CatalogContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    Ok(())
}

fn handle_categories(ctx: &CatalogContext) -> Result<()> {
    print!("{}", render_categories(ctx.api.catalog().services()));
    Ok(())
}

fn handle_export(ctx: &CatalogContext, format: ExportFormatArg, out: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export(format.into(), out)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &CatalogContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(name) => print!("{}", help_for_command(name)),
        None => print!("{}", get_grouped_help()),
    }
    Ok(())
}
