//! agconv MCP Server
//!
//! Line-delimited JSON-RPC over stdin/stdout. Logs go to stderr.
//!
//! Tools:
//! - convert_value: Convert between units of one kind, or between per-area rates
//! - convert_crop_yield: Crop-aware rate conversion (mass per area to bushels or bales per area)
//! - standard_label: Canonical label for any accepted unit spelling
//! - describe_unit: Resolve a label and describe the unit
//! - application_rate: Product rate of a diluted spray over an area
//! - list_units: Registered units per category
//! - list_crops: Crops and their weight per bushel or bale

mod config;
mod protocol;
mod tools;

use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use protocol::{handle_request, McpRequest, McpResponse, PROTOCOL_VERSION, SERVER_VERSION};

fn init_logging(config: &ServerConfig) {
    let (filter, invalid) = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
    if invalid {
        tracing::warn!(filter = %config.log_filter, "invalid log filter, using info");
    }
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response_json)?;
    stdout.flush()
}

fn main() {
    let config = ServerConfig::from_env();
    init_logging(&config);
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "agconv MCP server started");
    tracing::debug!(
        stdin_terminal = io::stdin().is_terminal(),
        stdout_terminal = io::stdout().is_terminal(),
        round_places = ?config.round_places,
        "io setup"
    );

    // Use BufReader for stdin (line-based protocol)
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                tracing::info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let request: McpRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        tracing::warn!(error = %e, "error parsing request");
                        let response = McpResponse::parse_error(format!("Parse error: {}", e));
                        if let Err(e) = write_response(&response) {
                            tracing::error!(error = %e, "error writing response");
                            break;
                        }
                        continue;
                    }
                };

                tracing::debug!(method = %request.method, "processing");
                let response = handle_request(&config, &request);

                // Notifications (no id) get no response
                if request.id.is_none() {
                    continue;
                }

                if let Err(e) = write_response(&response) {
                    tracing::error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error reading input");
                break;
            }
        }
    }

    tracing::info!("server shutting down");
}
