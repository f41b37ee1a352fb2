//! Command execution - pipeline wiring and dispatch.

use crate::cli::{CheckArgs, ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use claimlens_domain::traits::{KnowledgeSource, LlmProvider};
use claimlens_extractor::ClaimExtractor;
use claimlens_knowledge::WikipediaSource;
use claimlens_llm::OllamaProvider;
use claimlens_pipeline::{Pipeline, PipelineConfig};
use claimlens_transcript::{extract_video_id, TranscriptAcquirer, YoutubeTranscriptSource};
use claimlens_verifier::{LlmVerifier, VerificationStrategy, Verifier};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Run a fact-check on a video URL or id.
pub async fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let video_id = extract_video_id(&args.video)
        .ok_or_else(|| CliError::InvalidInput(format!("unrecognized video URL or id: {}", args.video)))?;

    config.pipeline.validate().map_err(CliError::Config)?;
    let pipeline = build_pipeline(&config.pipeline)?;

    info!(video_id, "running fact-check");
    let report = pipeline.check(&video_id).await;

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

/// Show or initialize the configuration file.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    formatter: &Formatter,
    path: Option<&Path>,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Init => {
            let written = Config::default().save(path)?;
            println!("{}", formatter.success(&format!("wrote {}", written.display())));
        }
    }
    Ok(())
}

// Wire concrete collaborators from configuration. The model and knowledge
// base are each constructed once here; disabled means the corresponding
// stages run on their deterministic fallbacks.
fn build_pipeline(config: &PipelineConfig) -> Result<Pipeline> {
    let llm: Option<Arc<dyn LlmProvider>> = if config.llm.enabled {
        let provider = OllamaProvider::with_timeout(
            &config.llm.endpoint,
            &config.llm.model,
            Duration::from_secs(config.llm.timeout_secs),
        )
        .map_err(|e| CliError::Config(e.to_string()))?;
        Some(Arc::new(provider))
    } else {
        None
    };

    let source = YoutubeTranscriptSource::new().map_err(|e| CliError::Config(e.to_string()))?;
    let acquirer = TranscriptAcquirer::new(Arc::new(source));

    let extractor = ClaimExtractor::new(llm.clone())
        .with_max_claims(config.max_claims)
        .with_temperature(config.extraction_temperature)
        .with_timeout(Duration::from_secs(config.llm.timeout_secs));

    let knowledge: Option<Arc<dyn KnowledgeSource>> = if config.knowledge.enabled {
        let source = WikipediaSource::new().map_err(|e| CliError::Config(e.to_string()))?;
        Some(Arc::new(source))
    } else {
        None
    };

    let strategy: Option<Arc<dyn VerificationStrategy>> = llm.map(|provider| {
        let verifier = LlmVerifier::new(provider)
            .with_temperature(config.verification_temperature)
            .with_timeout(Duration::from_secs(config.llm.timeout_secs));
        Arc::new(verifier) as Arc<dyn VerificationStrategy>
    });

    Ok(Pipeline::new(acquirer, extractor, knowledge, Verifier::new(strategy)))
}
