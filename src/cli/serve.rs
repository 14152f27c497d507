//! Web server command.

use console::style;

use crate::config::Settings;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: Option<&str>) -> anyhow::Result<()> {
    let (host, port) = match bind {
        Some(bind) => parse_bind_address(bind, settings.default_port)?,
        None => ("127.0.0.1".to_string(), settings.default_port),
    };

    println!(
        "{} Starting Icon Forge server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "3000" -> 127.0.0.1:3000
/// - Just a host: "0.0.0.0" -> 0.0.0.0:<default>
/// - Host and port: "0.0.0.0:3000" -> 0.0.0.0:3000
fn parse_bind_address(bind: &str, default_port: u16) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use the default port
    Ok((bind.to_string(), default_port))
}
