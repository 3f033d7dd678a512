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

mod asset;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use std::fs::write;
    use std::path::PathBuf;
    use std::time::Duration;

    use reqwest::StatusCode;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::time::sleep;

    use crate::cmd::serve::server::ServerConfig;
    use crate::cmd::serve::server::start_server;
    use crate::error::Fallible;
    use crate::helper::create_tmp_copy_of_test_directory;
    use crate::helper::create_tmp_directory;

    fn config(directory: PathBuf, port: u16, pkg: PathBuf) -> ServerConfig {
        ServerConfig {
            directory: Some(directory.display().to_string()),
            port,
            pkg,
            open_browser: false,
        }
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_directory() -> Fallible<()> {
        let pkg = create_tmp_directory()?;
        let result = start_server(config(PathBuf::from("./derpherp"), 0, pkg)).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
        Ok(())
    }

    #[tokio::test]
    async fn test_start_server_on_empty_directory() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let pkg = create_tmp_directory()?;
        let result = start_server(config(directory, 0, pkg)).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: no sets found.");
        Ok(())
    }

    #[tokio::test]
    async fn test_e2e() -> Fallible<()> {
        let directory = create_tmp_copy_of_test_directory()?;
        let pkg = create_tmp_directory()?;
        write(pkg.join("flashdeck_wasm.js"), "export default function init() {}")?;
        write(pkg.join("flashdeck_wasm_bg.wasm"), b"\0asm")?;
        write(pkg.join("package.json"), "{}")?;

        let port = portpicker::pick_unused_port().unwrap();
        spawn(async move { start_server(config(directory, port, pkg)).await });
        loop {
            if let Ok(stream) = TcpStream::connect(("127.0.0.1", port)).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        let base = format!("http://127.0.0.1:{port}");

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("{base}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the `sets.js` endpoint.
        let response = reqwest::get(format!("{base}/sets.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );
        let script = response.text().await?;
        assert!(script.starts_with("window.allFlashcardSets = {"));
        assert!(script.contains("ঢাকা"));
        assert!(script.contains("\"2\":["));

        // Hit the bundle.
        let response = reqwest::get(format!("{base}/pkg/flashdeck_wasm.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );
        let response = reqwest::get(format!("{base}/pkg/flashdeck_wasm_bg.wasm")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/wasm"
        );

        // Files the page never loads, missing files, and escapes are not found.
        let response = reqwest::get(format!("{base}/pkg/package.json")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = reqwest::get(format!("{base}/pkg/missing.js")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = reqwest::get(format!("{base}/pkg/..%2F1.toml.js")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Hit the not found endpoint.
        let response = reqwest::get(format!("{base}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Hit the root endpoint.
        let response = reqwest::get(format!("{base}/")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains("id=\"card-front-text\""));
        assert!(html.contains("/pkg/flashdeck_wasm.js"));

        Ok(())
    }
}
