use std::sync::Arc;

use anyhow::Context;

use mfgerp_app::pages::{bom_page, dashboard_page, manufacturing_orders_page, stock_ledger_page, work_orders_page};
use mfgerp_app::{AppConfig, Catalog, PageError};
use mfgerp_auth::{
    FileSessionStorage, InMemorySessionStorage, SessionStorage, SessionStore, visible_navigation_for,
};
use mfgerp_inventory::{BomFilter, StockMovementFilter};
use mfgerp_production::{OrderFilter, WorkOrderFilter};

/// Usage: `mfgerp-demo [role] [--logout]`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    mfgerp_observability::tracing::init(&config.tracing_options());

    let catalog = Catalog::demo().context("failed to load demo fixtures")?;

    let storage: Arc<dyn SessionStorage> = match &config.session_dir {
        Some(dir) => Arc::new(
            FileSessionStorage::open(dir)
                .with_context(|| format!("failed to open session directory {}", dir.display()))?,
        ),
        None => Arc::new(InMemorySessionStorage::new()),
    };

    let mut session = SessionStore::restore(storage).with_login_latency(config.login_latency());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--logout") {
        session.logout();
        println!("signed out");
        return Ok(());
    }

    if !session.is_authenticated() {
        let role = args.first().map(String::as_str).unwrap_or("admin");
        session
            .try_login("demo@company.com", "demo", role)
            .await
            .with_context(|| format!("sign-in as '{role}' failed"))?;
    }

    let user = session.current_user();
    if let Some(u) = user {
        println!("signed in as {} ({}) [{}]", u.name(), u.role().label(), u.initials());
    }

    let nav: Vec<&str> = visible_navigation_for(user).into_iter().map(|i| i.title).collect();
    println!("navigation: {}", nav.join(" | "));

    print_page("dashboard", dashboard_page(user, &catalog))?;
    print_page(
        "manufacturing orders",
        manufacturing_orders_page(user, &catalog, &OrderFilter::new()),
    )?;
    print_page("work orders", work_orders_page(user, &catalog, &WorkOrderFilter::new()))?;
    print_page("bill of materials", bom_page(user, &catalog, &BomFilter::default(), None))?;
    print_page(
        "stock ledger",
        stock_ledger_page(user, &catalog, &StockMovementFilter::new()),
    )?;

    Ok(())
}

fn print_page<T: serde::Serialize>(name: &str, page: Result<T, PageError>) -> anyhow::Result<()> {
    match page {
        Ok(view) => {
            let json = serde_json::to_string_pretty(&view).with_context(|| format!("failed to render {name}"))?;
            println!("== {name} ==\n{json}");
        }
        Err(e) if e.is_forbidden() => println!("== {name} == (not available for this role)"),
        Err(e) => return Err(e).with_context(|| format!("failed to build {name}")),
    }
    Ok(())
}
