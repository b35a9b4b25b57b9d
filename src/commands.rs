//! One handler per subcommand.
//!
//! Handlers wire a [`Session`] to the HTTP transport and the terminal
//! notifier, run one workflow step, and translate the outcome into an exit
//! code. Session-level failures (validation, upload, delete) have already
//! notified the user, so they map to a bare failure code; anything the
//! session never saw surfaces as an `anyhow` error instead.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use dialoguer::Confirm;

use crate::cli::Cli;
use crate::client::{HttpTransport, Transport};
use crate::config::Config;
use crate::media::mime;
use crate::media::preview::PreviewKind;
use crate::media::schema::{Candidate, MediaRecord};
use crate::notify::TerminalNotifier;
use crate::session::Session;

fn build_session(config: &Config) -> (Session, Arc<HttpTransport>) {
    let transport = Arc::new(HttpTransport::new(&config.server.base_url));
    let session = Session::new(
        transport.clone(),
        Arc::new(TerminalNotifier),
        config.server.base_url.clone(),
    );
    (session, transport)
}

/// Stat a local path into an upload candidate.
async fn candidate_from_path(path: &Path) -> Result<Candidate> {
    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if !meta.is_file() {
        bail!("{} is not a regular file", path.display());
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    let mime = mime::guess_type(&name);
    Ok(Candidate {
        path: path.to_path_buf(),
        name,
        size: meta.len(),
        mime,
    })
}

pub async fn up(config: &Config, paths: &[PathBuf]) -> Result<ExitCode> {
    let mut batch = Vec::with_capacity(paths.len());
    for path in paths {
        batch.push(candidate_from_path(path).await?);
    }

    let (mut session, _transport) = build_session(config);
    if !session.select(batch) {
        return Ok(ExitCode::FAILURE);
    }
    if !session.upload().await {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn ls(config: &Config, json: bool) -> Result<ExitCode> {
    let (mut session, _transport) = build_session(config);
    if !session.refresh().await {
        bail!(
            "could not fetch the file list from {}",
            config.server.base_url
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(session.files())?);
        return Ok(ExitCode::SUCCESS);
    }

    if session.files().is_empty() {
        println!("no files uploaded yet");
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{:>5}  {:<32} {:<10} {:>9}  {:<12} {}",
        "ID", "NAME", "CATEGORY", "SIZE", "TYPE", "UPLOADED"
    );
    for record in session.files() {
        println!("{}", record_row(record));
    }
    Ok(ExitCode::SUCCESS)
}

/// One `ls` table line: id, name, category, size in KB, type, upload date.
fn record_row(record: &MediaRecord) -> String {
    format!(
        "{:>5}  {:<32} {:<10} {:>6} KB  {:<12} {}",
        record.id,
        record.file_name,
        record.category,
        record.file_size / 1024,
        record.file_type,
        record.uploaded_at.format("%Y-%m-%d %H:%M"),
    )
}

pub async fn rm(config: &Config, id: u64, yes: bool) -> Result<ExitCode> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove file {id} from the server?"))
            .default(false)
            .interact()
            .context("Failed to read the confirmation prompt")?;
        if !confirmed {
            println!("aborted");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let (mut session, _transport) = build_session(config);
    if session.delete(id).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

pub async fn view(config: &Config, id: u64) -> Result<ExitCode> {
    let (mut session, _transport) = build_session(config);
    if !session.refresh().await {
        bail!(
            "could not fetch the file list from {}",
            config.server.base_url
        );
    }

    Ok(if render_preview(&mut session, id) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Open the dialog for `id`, print the plan, then close the dialog again.
fn render_preview(session: &mut Session, id: u64) -> bool {
    if !session.open_preview(id) {
        return false;
    }
    let plan = session.preview_plan();
    let record = session.dialog().target().cloned();
    let rendered = match (plan, record) {
        (Some(plan), Some(record)) => {
            match plan.kind {
                PreviewKind::Download => {
                    println!(
                        "{} ({}) cannot be previewed directly; download it from:",
                        record.file_name, record.file_type
                    );
                }
                kind => {
                    println!("{} previews as {}:", record.file_name, kind.label());
                }
            }
            println!("{}", plan.url);
            true
        }
        _ => false,
    };
    session.close_preview();
    rendered
}

pub async fn get(config: &Config, id: u64, output: Option<PathBuf>) -> Result<ExitCode> {
    let (mut session, transport) = build_session(config);
    if !session.refresh().await {
        bail!(
            "could not fetch the file list from {}",
            config.server.base_url
        );
    }
    let Some(record) = session.record(id).cloned() else {
        bail!("no file with id {id}");
    };

    let bytes = transport
        .download(&record)
        .await
        .with_context(|| format!("Failed to download {}", record.file_name))?;

    let dest = output.unwrap_or_else(|| config.download_dir().join(&record.file_name));
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    tokio::fs::write(&dest, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    println!(
        "saved {} ({} bytes) to {}",
        record.file_name,
        bytes.len(),
        dest.display()
    );
    Ok(ExitCode::SUCCESS)
}

pub fn show_config(config: &Config) -> Result<ExitCode> {
    match Config::path() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no config directory available"),
    }
    print!("{}", toml::to_string(config).context("Failed to render the config")?);
    Ok(ExitCode::SUCCESS)
}

pub fn completions(shell: clap_complete::Shell) -> ExitCode {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "mediabin", &mut std::io::stdout());
    ExitCode::SUCCESS
}
