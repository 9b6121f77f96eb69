// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info};
use std::io::Write;

mod api;
mod app_state;
mod bootstrap;
mod config;
mod query;
mod runtime_paths;
mod store;
mod util;

use app_state::AppState;
use config::ValidatedConfig;
use runtime_paths::RuntimePaths;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if matches!(parsed_args.mode, RunMode::Help) {
        print!("{}", help_text());
        return 0;
    }

    let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Bootstrap error: {}", error);
            eprintln!("❌ Application cannot start without a valid configuration and article snapshot.");
            return 1;
        }
    };

    let result = System::new().block_on(run_server(bootstrap));
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

async fn run_server(bootstrap: bootstrap::BootstrapResult) -> std::io::Result<()> {
    let validated_config = bootstrap.validated_config;

    let log_level = match validated_config.logging.level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    // Configure logging with a stable format
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let app_state = web::Data::new(AppState::new(bootstrap.articles, bootstrap.runtime_paths));
    log_startup_info(&validated_config, &app_state.runtime_paths);

    if bootstrap.created_config {
        info!("First run: created default config.yaml");
    }
    if bootstrap.created_snapshot {
        info!("First run: created empty article snapshot");
    }
    info!(
        "✅ Article store initialized with {} articles",
        app_state.store.len()
    );

    let host = validated_config.server.host.clone();
    let port = validated_config.server.port;
    let workers = validated_config.server.workers;

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
            ))
            .configure(api::configure)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

fn log_startup_info(config: &ValidatedConfig, runtime_paths: &RuntimePaths) {
    info!("Starting {} - {}", config.app.name, config.app.description);
    info!("Workers: {}", config.server.workers);
    info!(
        "Listening on {}:{}",
        config.server.host, config.server.port
    );
    info!("Config file: {}", runtime_paths.config_file.display());
    info!(
        "Articles snapshot: {}",
        runtime_paths.articles_file.display()
    );
    info!("Runtime root: {}", runtime_paths.root.display());
}

fn help_text() -> String {
    [
        "Newswire - a lightweight article wire service",
        "",
        "Usage: newswire [-C <root>]",
        "",
        "  -C <root>    Run with <root> as the runtime directory (default: current directory).",
        "  -h, --help   Show this help text.",
        "",
        "On first run a default config.yaml and an empty articles.json are",
        "created in the runtime directory.",
        "",
    ]
    .join("\n")
}

enum RunMode {
    Serve,
    Help,
}

struct ParsedArgs {
    runtime_root: std::path::PathBuf,
    mode: RunMode,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.iter().any(|arg| is_help_flag(arg)) {
        return Ok(ParsedArgs {
            runtime_root: std::path::PathBuf::from("."),
            mode: RunMode::Help,
        });
    }

    let mut args = args.into_iter();
    let mut runtime_root = std::path::PathBuf::from(".");

    while let Some(arg) = args.next() {
        if arg == "--" {
            continue;
        } else if arg == "-C" {
            let value = args
                .next()
                .ok_or_else(|| "Missing value for -C".to_string())?;
            runtime_root = std::path::PathBuf::from(value);
        } else if arg.eq_ignore_ascii_case("help") {
            return Ok(ParsedArgs {
                runtime_root,
                mode: RunMode::Help,
            });
        } else {
            return Err(format!("Unknown argument '{}'", arg));
        }
    }

    let runtime_root = make_runtime_root_absolute(runtime_root)?;

    Ok(ParsedArgs {
        runtime_root,
        mode: RunMode::Serve,
    })
}

fn is_help_flag(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}

fn make_runtime_root_absolute(
    runtime_root: std::path::PathBuf,
) -> Result<std::path::PathBuf, String> {
    if runtime_root.is_absolute() {
        return Ok(runtime_root);
    }

    let current_dir = std::env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {}", error))?;
    Ok(current_dir.join(runtime_root))
}
