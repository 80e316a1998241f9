//! Purpose: Read explorer source content for the CLI (HTTP, local files, stdin).
//! Exports: `FetchConfig`, `FetchedContent`, `read_source`, `read_stdin`.
//! Role: Transport collaborator selected by `FetchStrategy`; the library never fetches.
//! Invariants: Content is capped at `max_bytes`; larger sources fail with a usage error.
//! Invariants: `s3://` sources are rejected (no object-store client in this binary).
//! Notes: Non-UTF-8 bytes are decoded lossily so sniffing always sees text.
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;

use bstr::ByteSlice;
use dataexplorer::api::{Error, ErrorKind, FetchStrategy, SourcePlan};
use url::Url;

pub const DEFAULT_MAX_BYTES: u64 = 16 * 1024 * 1024;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Copy, Clone, Debug)]
pub struct FetchConfig {
    pub max_bytes: u64,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FetchedContent {
    pub text: String,
    pub bytes: usize,
    pub lossy: bool,
}

pub fn read_source(plan: &SourcePlan, config: FetchConfig) -> Result<FetchedContent, Error> {
    match plan.strategy {
        FetchStrategy::Http => fetch_http(&plan.locator, config),
        FetchStrategy::S3 => Err(Error::new(ErrorKind::Unsupported)
            .with_message("s3 sources cannot be fetched by the CLI")
            .with_hint("Download the object (e.g. `aws s3 cp`) and pass the local path or `-`.")),
        FetchStrategy::Local if plan.locator == "-" => read_stdin(config),
        FetchStrategy::Local => read_file(Path::new(&plan.locator), config),
    }
}

pub fn read_stdin(config: FetchConfig) -> Result<FetchedContent, Error> {
    read_capped(io::stdin().lock(), config.max_bytes, "stdin")
}

fn read_file(path: &Path, config: FetchConfig) -> Result<FetchedContent, Error> {
    let file = File::open(path).map_err(|err| {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::Permission,
            _ => ErrorKind::Io,
        };
        Error::new(kind)
            .with_message(format!("failed to open {}", path.display()))
            .with_hint("Sources are http(s):// URLs, local paths, or `-` for stdin.")
            .with_source(err)
    })?;
    read_capped(file, config.max_bytes, "file")
}

fn fetch_http(locator: &str, config: FetchConfig) -> Result<FetchedContent, Error> {
    let url = Url::parse(locator).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid http source url")
            .with_source(err)
    })?;
    tracing::debug!(url = %url, "fetching http source");
    let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
    match agent.request("GET", url.as_str()).call() {
        Ok(resp) => read_capped(resp.into_reader(), config.max_bytes, "response"),
        Err(ureq::Error::Status(code, _)) => {
            let kind = if code == 404 {
                ErrorKind::NotFound
            } else if code == 401 || code == 403 {
                ErrorKind::Permission
            } else {
                ErrorKind::Remote
            };
            Err(Error::new(kind).with_message(format!("remote error status {code}")))
        }
        Err(ureq::Error::Transport(err)) => Err(Error::new(ErrorKind::Io)
            .with_message("request failed")
            .with_source(err)),
    }
}

fn read_capped<R: Read>(reader: R, max_bytes: u64, label: &str) -> Result<FetchedContent, Error> {
    let mut buf = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message(format!("failed to read {label}"))
                .with_source(err)
        })?;
    if buf.len() as u64 > max_bytes {
        return Err(Error::new(ErrorKind::Usage)
            .with_message(format!("{label} exceeds {max_bytes} bytes"))
            .with_hint("Raise --max-bytes to sniff larger sources."));
    }
    Ok(decode(buf))
}

fn decode(buf: Vec<u8>) -> FetchedContent {
    let bytes = buf.len();
    match String::from_utf8(buf) {
        Ok(text) => FetchedContent {
            text,
            bytes,
            lossy: false,
        },
        Err(err) => FetchedContent {
            text: err.as_bytes().to_str_lossy().into_owned(),
            bytes,
            lossy: true,
        },
    }
}
