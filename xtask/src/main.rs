use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "wild_rydes_lambda";
const LAMBDA_BINARY: &str = "request_unicorn";
const DIST_DIR: &str = "infra/wild_rydes/dist";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the Wild Rydes workspace",
    long_about = "A unified CLI for CI checks, DynamoDB integration tests,\n\
                  and Lambda packaging in the Wild Rydes workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Run the ignored DynamoDB-backed tests against an emulator
    IntegrationTest {
        /// Endpoint of DynamoDB Local or LocalStack
        #[arg(long, env = "DYNAMO_ENDPOINT_URL", default_value = "http://localhost:4566")]
        endpoint_url: String,
    },
    /// Build and package the ride booking Lambda for Terraform inputs
    ServerlessPackage {
        /// Compilation target triple for Lambda binaries
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for binaries
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting and clippy
    Lint,
    /// Unit and integration tests
    Test,
    /// Lint + test
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn run_cargo(args: &[&str]) {
    run_cargo_with_env(args, &[]);
}

fn run_cargo_with_env(args: &[&str], envs: &[(&str, &str)]) {
    eprintln!("+ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .envs(envs.iter().copied())
        .status()
        .unwrap_or_else(|error| fail(&format!("failed to execute cargo: {error}")));
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    exit(1);
}

fn package_serverless_lambda(target: &str, profile: BuildProfile) {
    if !target.ends_with("-linux-gnu") && !target.ends_with("-linux-musl") {
        fail(&format!("lambda target must be a linux triple, got `{target}`"));
    }
    warn_if_target_missing(target);

    step("Build ride booking lambda binary");
    let mut cargo_args = vec![
        "build",
        "-p",
        LAMBDA_PACKAGE,
        "--bin",
        LAMBDA_BINARY,
        "--target",
        target,
    ];
    cargo_args.extend(profile.as_cargo_flag());
    run_cargo(&cargo_args);

    step("Package Terraform lambda zip artifact");
    let binary_path = Path::new("target")
        .join(target)
        .join(profile.dir_name())
        .join(LAMBDA_BINARY);
    let zip_path = Path::new(DIST_DIR).join(format!("{LAMBDA_BINARY}.zip"));

    if let Err(error) = write_bootstrap_zip(&binary_path, &zip_path) {
        fail(&format!(
            "could not package '{}' into '{}': {error}",
            binary_path.display(),
            zip_path.display()
        ));
    }

    eprintln!("\nPackaged artifact:\n- {}", zip_path.display());
}

/// `rustup` is optional; cargo reports a missing target on its own.
fn warn_if_target_missing(target: &str) {
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    else {
        return;
    };

    let installed = String::from_utf8_lossy(&output.stdout);
    if output.status.success() && !installed.lines().any(|line| line.trim() == target) {
        eprintln!(
            "warning: rust target `{target}` is not installed; try `rustup target add {target}`"
        );
    }
}

/// Lambda's `provided.al2023` runtime expects the executable as `bootstrap`.
fn write_bootstrap_zip(binary_path: &Path, zip_path: &Path) -> std::io::Result<()> {
    let binary = fs::read(binary_path)?;
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut zip = ZipWriter::new(fs::File::create(zip_path)?);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)?;
    zip.write_all(&binary)?;
    zip.finish()?;
    Ok(())
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_lint() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);
}

fn ci_test() {
    step("Test wild_rydes_core");
    run_cargo(&["test", "-p", "wild_rydes_core"]);

    step("Test wild_rydes_lambda");
    run_cargo(&["test", "-p", LAMBDA_PACKAGE]);
}

fn integration_test(endpoint_url: &str) {
    step("DynamoDB integration tests");
    run_cargo_with_env(
        &[
            "test",
            "-p",
            LAMBDA_PACKAGE,
            "--test",
            "dynamodb_store_tests",
            "--",
            "--ignored",
        ],
        &[
            ("DYNAMO_ENDPOINT_URL", endpoint_url),
            ("AWS_REGION", "eu-central-1"),
            ("AWS_ACCESS_KEY_ID", "000000000000"),
            ("AWS_SECRET_ACCESS_KEY", "test"),
        ],
    );
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { job } => {
            match job {
                CiJob::Lint => ci_lint(),
                CiJob::Test => ci_test(),
                CiJob::Check => {
                    ci_lint();
                    ci_test();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::IntegrationTest { endpoint_url } => {
            integration_test(&endpoint_url);
        }
        Commands::ServerlessPackage { target, profile } => {
            package_serverless_lambda(&target, profile);
        }
    }
}
