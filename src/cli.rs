// Copyright 2025 Fernando Borretti
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

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::check::check_sets;
use crate::cmd::export::export_sets;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::error::Fallible;

#[derive(Parser, Debug, PartialEq)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the study page for a directory of sets.
    Serve {
        /// Path to the set directory. Defaults to the current directory.
        directory: Option<String>,
        /// The port to listen on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// The wasm-pack output directory holding the browser bundle.
        #[arg(long, default_value = "pkg")]
        pkg: String,
        /// Don't open the browser once the server is up.
        #[arg(long)]
        no_open: bool,
    },
    /// Check that every set file parses.
    Check {
        /// Path to the set directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Print the set table as JSON.
    Export {
        /// Path to the set directory. Defaults to the current directory.
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            directory,
            port,
            pkg,
            no_open,
        } => {
            let config = ServerConfig {
                directory,
                port,
                pkg: PathBuf::from(pkg),
                open_browser: !no_open,
            };
            start_server(config).await
        }
        Command::Check { directory } => check_sets(directory),
        Command::Export { directory } => export_sets(directory),
    }
}
