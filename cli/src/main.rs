mod commands;
mod terminal;

use commands::CommandLine;
use servdoc_common::config::Config;
use servdoc_common::server::{self, ServerRecord};
use servdoc_core::net::{ping, tcp};
use servdoc_core::report;
use terminal::{input, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: CommandLine = CommandLine::parse_args();

    let cfg = Config {
        file: args.file,
        disable_input: args.no_input,
        quiet: args.quiet,
    };

    logging::init(cfg.quiet);

    let servers: Vec<ServerRecord> = server::load_servers(&cfg.file)?;

    let ping_section: String = report::run_section(
        "PING TEST",
        &servers,
        |server: ServerRecord| async move { ping::echo_probe(&server.address).await },
        report::ping_line,
    )
    .await;

    let tcp_section: String = report::run_section(
        "TCP CONNECTION TEST",
        &servers,
        |server: ServerRecord| async move {
            tcp::handshake_probe(&server.address, server.port).await
        },
        report::connect_line,
    )
    .await;

    println!("{ping_section}\n{tcp_section}");

    if !cfg.disable_input {
        input::wait_for_enter();
    }

    Ok(())
}
