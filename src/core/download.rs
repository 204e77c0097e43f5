//! Blocking HTTP download with a single bounded redirect follow.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_LENGTH, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{StatusCode, Url};

use crate::core::progress::DownloadProgress;
use crate::error::{InstallerError, Result};

/// The download service answers with one redirect to a CDN; nothing deeper is followed.
pub const MAX_REDIRECTS: usize = 1;

const BUFFER_SIZE: usize = 64 * 1024;

pub struct Downloader {
    client: Client,
    show_progress: bool,
}

impl Downloader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::none())
            .user_agent(concat!("vscode-installer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            show_progress: true,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// GET `url`, following at most [`MAX_REDIRECTS`] `302 Found` responses.
    pub fn fetch(&self, url: &str) -> Result<Response> {
        let mut current = Url::parse(url).map_err(|e| InstallerError::download_error(url, e))?;
        let mut redirects = 0;

        loop {
            debug!("GET {current}");
            let response = self.client.get(current.clone()).send()?;
            let status = response.status();

            if status != StatusCode::FOUND {
                if !status.is_success() {
                    return Err(InstallerError::download_error(
                        current.as_str(),
                        format!("server responded with {status}"),
                    ));
                }
                return Ok(response);
            }

            if redirects == MAX_REDIRECTS {
                return Err(InstallerError::download_error(
                    url,
                    format!("gave up after {MAX_REDIRECTS} redirect(s)"),
                ));
            }

            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| {
                    InstallerError::download_error(current.as_str(), "redirect without a Location header")
                })?;
            let next = current
                .join(location)
                .map_err(|e| InstallerError::download_error(location, e))?;

            println!("Redirecting to {next}");
            // Dropping the redirect response closes the original request.
            drop(response);
            current = next;
            redirects += 1;
        }
    }

    /// Stream `url` into `destination`, returning the number of bytes written.
    pub fn download_file(&self, url: &str, destination: &Path, label: &str) -> Result<u64> {
        let mut response = self.fetch(url)?;
        let total = content_length(&response);

        println!("Downloading {label} ({total} bytes)");

        let mut progress = if self.show_progress {
            DownloadProgress::new(label, total)
        } else {
            DownloadProgress::hidden(total)
        };

        let mut file = BufWriter::new(File::create(destination)?);
        let mut buffer = vec![0u8; BUFFER_SIZE];

        loop {
            let read = response
                .read(&mut buffer)
                .map_err(|e| InstallerError::download_error(url, e))?;
            if read == 0 {
                break;
            }
            file.write_all(&buffer[..read])?;
            progress.advance(read as u64);
        }

        file.flush()?;
        progress.finish();
        debug!(
            "wrote {} of {} bytes ({}%)",
            progress.written(),
            progress.total(),
            progress.percent()
        );

        Ok(progress.written())
    }
}

fn content_length(response: &Response) -> u64 {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(0)
}
