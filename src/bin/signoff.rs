use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use signoff::adapters::DiskOracle;
use signoff::api::errors::{error_id_for, exit_code_for, ErrorId};
use signoff::api::ApiBuilder;
use signoff::logging::{JsonlSink, NullSink};
use signoff::policy::{DependencyBase, Policy, Quorum};
use signoff::types::{ChangeSet, RepoPath};

#[derive(Parser, Debug)]
#[command(name = "signoff")]
#[command(
    about = "Validate that claimed approvers cover every ownership obligation for a change.",
    long_about = None
)]
struct Cli {
    /// Claimed approver identifiers.
    #[arg(short = 'v', long, num_args = 1.., required = true)]
    validators: Vec<String>,

    /// Changed file or directory paths, relative to the repository root.
    #[arg(short = 'c', long = "changed-files", num_args = 1.., required = true)]
    changed_files: Vec<PathBuf>,

    /// Repository root directory.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Interpretation base for DEPENDENCIES entries.
    #[arg(long, value_enum, default_value_t = DepsBase::RootRelative)]
    deps_base: DepsBase,

    /// Distinct approvers required per affected directory.
    #[arg(long, default_value_t = 1)]
    quorum: usize,

    /// Print the per-directory coverage report as JSON on stdout.
    #[arg(long, default_value_t = false)]
    report: bool,

    /// Emit run facts as JSON lines on stderr.
    #[arg(long, default_value_t = false)]
    facts: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DepsBase {
    RootRelative,
    DeclaringDir,
}

impl From<DepsBase> for DependencyBase {
    fn from(b: DepsBase) -> Self {
        match b {
            DepsBase::RootRelative => DependencyBase::RootRelative,
            DepsBase::DeclaringDir => DependencyBase::DeclaringDir,
        }
    }
}

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("signoff: {err:#}");
            exit_code(ErrorId::E_GENERIC)
        }
    }
}

fn try_main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let root = std::fs::canonicalize(&cli.root)
        .with_context(|| format!("repository root not accessible: {}", cli.root.display()))?;

    let mut policy = Policy::default();
    policy.dependency_base = cli.deps_base.into();
    policy.quorum = Quorum::AtLeast(cli.quorum);

    let mut input = ChangeSet {
        changed: Vec::with_capacity(cli.changed_files.len()),
        approvers: cli.validators,
    };
    for path in &cli.changed_files {
        match RepoPath::from_rooted(&root, path) {
            Ok(rp) => input.changed.push(rp),
            Err(e) => {
                eprintln!("signoff: {e}");
                return Ok(exit_code(ErrorId::E_INVALID_PATH));
            }
        }
    }

    // Facts go to stderr when requested; the one-line verdict owns stdout.
    let verdict = if cli.facts {
        let api = ApiBuilder::new(JsonlSink, JsonlSink, policy, Box::new(DiskOracle))
            .with_live_timestamps()
            .build();
        api.validate(&input)
    } else {
        ApiBuilder::new(NullSink, NullSink, policy, Box::new(DiskOracle))
            .build()
            .validate(&input)
    };

    let verdict = match verdict {
        Ok(v) => v,
        Err(e) => {
            eprintln!("signoff: {e}");
            return Ok(exit_code(error_id_for(&e)));
        }
    };

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    }

    if verdict.approved {
        println!("Approved");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Insufficient approvals");
        for dir in &verdict.uncovered {
            eprintln!("uncovered: {dir}");
        }
        Ok(exit_code(ErrorId::E_INSUFFICIENT))
    }
}

// Codes are defined in 0..=255; the cast is lossless for every ErrorId.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn exit_code(id: ErrorId) -> ExitCode {
    ExitCode::from(exit_code_for(id) as u8)
}
