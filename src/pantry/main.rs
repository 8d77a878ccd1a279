use clap::Parser;
use pantry::api::{CmdMessage, ConfigAction, InventoryService, PantryPaths};
use pantry::config::PantryConfig;
use pantry::error::Result;
use pantry::store::fs::FileStore;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::print::{
    print_categories, print_config, print_counts, print_items, print_messages, print_summary,
};

fn main() {
    let cli = Cli::parse();
    cli::setup::init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    service: InventoryService<FileStore>,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { name, category }) => handle_add(&mut ctx, &name, category),
        Some(Commands::Remove { name }) => handle_remove(&mut ctx, &name),
        Some(Commands::List { search }) => handle_list(&mut ctx, search.as_deref()),
        Some(Commands::Search { query }) => handle_search(&mut ctx, &query),
        Some(Commands::Summary) => handle_summary(&mut ctx),
        Some(Commands::Categories) => {
            print_categories();
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = cli::setup::data_dir()?;
    let config = PantryConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), collection = %config.collection, "loaded config");

    let store = FileStore::new(data_dir.clone()).with_collection(&config.collection);
    let service = InventoryService::new(store, PantryPaths::new(data_dir))
        .with_default_category(config.default_category);

    Ok(AppContext { service })
}

fn handle_add(ctx: &mut AppContext, name: &str, category: Option<String>) -> Result<()> {
    let result = ctx.service.increment(name.trim(), category.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.service.decrement(name.trim())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, query: Option<&str>) -> Result<()> {
    ctx.service.refresh()?;
    let filtered = ctx.service.search(query.unwrap_or(""));
    print_items(&filtered.items);
    if !ctx.service.snapshot().is_empty() {
        print_counts(filtered.items.len(), &ctx.service.summary());
    }
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: &str) -> Result<()> {
    ctx.service.refresh()?;
    let filtered = ctx.service.search(query);
    print_items(&filtered.items);
    if query.is_empty() {
        return Ok(());
    }
    let message = if filtered.found {
        CmdMessage::success("Item Found")
    } else {
        CmdMessage::error("No Item Found")
    };
    print_messages(&[message]);
    Ok(())
}

fn handle_summary(ctx: &mut AppContext) -> Result<()> {
    ctx.service.refresh()?;
    print_summary(&ctx.service.summary());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.service.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
