mod display;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use logoguard_ai::gemini::DEFAULT_MODEL;
use logoguard_ai::{AnalysisClient, GeminiModel};
use logoguard_core::{ImageAsset, Verdict};
use logoguard_workflow::{InspectionWorkflow, WorkflowState};

#[derive(Parser)]
#[command(name = "logoguard", version, about = "Visual quality inspection for printed logos")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare a reference master image against a factory photo.
    Inspect {
        /// Reference master image (PNG/JPEG/WebP/GIF).
        #[arg(long)]
        reference: PathBuf,

        /// Inspection photo of the manufactured part.
        #[arg(long)]
        photo: PathBuf,

        /// API credential for the vision model.
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Output language for the model's report.
        #[arg(long, default_value = "Japanese")]
        language: String,

        /// Vision model name.
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Emit a machine-readable JSON report instead of the card view.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("logoguard v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            reference,
            photo,
            api_key,
            language,
            model,
            json,
        } => inspect(&reference, &photo, api_key, language, model, json).await,
    }
}

async fn inspect(
    reference: &Path,
    photo: &Path,
    api_key: Option<String>,
    language: String,
    model: String,
    json: bool,
) -> anyhow::Result<()> {
    let reference_asset = load_asset(reference)?;
    let photo_asset = load_asset(photo)?;

    let client =
        AnalysisClient::new(GeminiModel::new(model.as_str()), api_key).with_output_language(language);
    let mut workflow = InspectionWorkflow::new(client);
    workflow.set_reference_asset(Some(reference_asset));
    workflow.set_inspection_asset(Some(photo_asset));
    workflow.trigger().await;

    match workflow.state() {
        WorkflowState::Success(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&display::json_report(result, &model))?);
            } else {
                display::print_report(result);
            }
            if result.verdict == Verdict::Fail {
                // Distinct exit code so scripts can gate on the verdict.
                std::process::exit(2);
            }
            Ok(())
        }
        WorkflowState::Error(message) => anyhow::bail!("inspection failed: {message}"),
        state => anyhow::bail!("inspection did not run (state: {state:?})"),
    }
}

fn load_asset(path: &Path) -> anyhow::Result<ImageAsset> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading image {}", path.display()))?;
    Ok(ImageAsset::from_bytes(&bytes, mime_for_path(path)))
}

/// Media type from the file extension. Content is never validated here; the
/// pipeline only requires a non-empty encoded payload.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for_path(Path::new("master.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("shot.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("shot.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("shot.webp")), "image/webp");
        assert_eq!(
            mime_for_path(Path::new("unknown.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_path(Path::new("no-extension")),
            "application/octet-stream"
        );
    }
}
