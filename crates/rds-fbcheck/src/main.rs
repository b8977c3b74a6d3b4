//! RDS framebuffer check — entry point.
//!
//! A deployment diagnostic: proves the session's shared framebuffer region
//! exists, is readable from another process, and matches the published layout
//! contract (800×600 RGBA8, 1,920,000 bytes).  Run it after starting the
//! session, before pointing a viewer at it.
//!
//! # Usage
//!
//! ```text
//! rds-fbcheck [OPTIONS]
//!
//! Options:
//!   --shm-name <NAME>  Shared-memory region name
//!                      [default: /dev/shm/winerds_framebuffer on unix,
//!                       Global\winerds_framebuffer on windows]
//!   --dump <PATH>      Write the captured frame as raw RGBA bytes to PATH
//! ```
//!
//! The region name can also come from the `RDS_SHM_NAME` environment
//! variable; the CLI flag wins when both are set.
//!
//! Exit status is zero only when a full frame was read; any failure prints a
//! diagnostic naming the exact problem (missing region, permissions, size
//! mismatch) and exits non-zero.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rds_core::framebuffer::default_shm_name;
use rds_fbcheck::reader::read_frame;
use rds_fbcheck::shm::SharedFramebuffer;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Shared framebuffer validation tool.
#[derive(Debug, Parser)]
#[command(
    name = "rds-fbcheck",
    about = "Validates the session's shared framebuffer region and reads one frame",
    version
)]
struct Cli {
    /// Shared-memory region name (a tmpfs path on unix, a mapping-object name
    /// on windows).  Defaults to the session's well-known name.
    #[arg(long, env = "RDS_SHM_NAME")]
    shm_name: Option<String>,

    /// Write the captured frame to this path as raw RGBA bytes.
    #[arg(long)]
    dump: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let shm_name = cli
        .shm_name
        .unwrap_or_else(|| default_shm_name().to_string());

    info!("validating shared framebuffer {shm_name:?}");

    let region = SharedFramebuffer::open(&shm_name)
        .with_context(|| format!("cannot open shared framebuffer {shm_name:?}"))?;

    let snapshot = read_frame(&region)
        .with_context(|| format!("cannot read a frame from {shm_name:?}"))?;

    info!("framebuffer read successfully ({} bytes)", snapshot.len());

    if let Some(path) = cli.dump {
        std::fs::write(&path, snapshot.as_bytes())
            .with_context(|| format!("cannot write frame dump to {}", path.display()))?;
        info!("raw RGBA frame written to {}", path.display());
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
