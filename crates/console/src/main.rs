use anyhow::Context;
use serde_json::json;

use relaydesk_console::{Console, ConsoleConfig};
use relaydesk_directory::Station;

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env().context("reading RELAYDESK_* configuration")?;
    relaydesk_observability::init_with(&config.log_filter);

    let (user, role, password) = (config.demo_user.clone(), config.demo_role, config.demo_password.clone());
    let mut console = Console::demo(config);
    console
        .login(&user, &password, role)
        .with_context(|| format!("demo login as {user} ({role})"))?;

    let session = console.session()?;
    tracing::info!(role = session.role().as_str(), organization = session.organization_name(), "demo session ready");

    let report = json!({
        "session": session,
        "sidebar": console.sidebar()?,
        "route": console.route_state()?,
        "stations": console.visible::<Station>()?,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
