// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use all_units::api::run_serve_mode;
use all_units::cli::{Cli, Commands, ServeArgs};
use clap::Parser;
use tokio::signal;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up signal handler for clean shutdown
    tokio::spawn(async {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        std::process::exit(0);
    });

    match cli.command {
        Some(Commands::Serve(args)) => run_serve_mode(&args).await,
        None => run_serve_mode(&ServeArgs::default()).await,
    }
}
