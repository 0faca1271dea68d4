//! CLI route: single route table and run context. Dispatches to library services and
//! presentation.

use crate::backend::{Backend, HttpBackend};
use crate::cli::parse::{Commands, ConfigCommands, GenerateCommands, PostArgs};
use crate::cli::presentation::{
    format_config, format_demo_info, format_generation_json, format_generation_text,
    format_post_outcome_json, format_post_outcome_text, format_schedule_event,
    format_schedule_report_json, format_schedule_report_text,
};
use crate::cli::command_name;
use crate::config::LinkpostConfig;
use crate::error::ApiError;
use crate::fallback::demo_info;
use crate::generation::{GenerationRequest, GenerationResult, Generator, Payload};
use crate::post::{post_once, render_preview, ImageRef, PostDraft};
use crate::schedule::{ScheduleReport, Scheduler};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Runtime context for CLI execution: effective config plus the services built from it.
pub struct RunContext {
    config: LinkpostConfig,
    backend: Arc<dyn Backend>,
    generator: Generator,
    scheduler: Arc<Scheduler>,
}

impl RunContext {
    /// Build the context from an already-merged configuration.
    pub fn new(config: LinkpostConfig) -> Result<Self, ApiError> {
        config.ensure_valid()?;
        let backend = HttpBackend::with_timeouts(
            config.backend.base_url.clone(),
            config.backend.connect_timeout(),
            config.backend.request_timeout(),
        )?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    /// Build the context around a specific backend.
    pub fn with_backend(config: LinkpostConfig, backend: Arc<dyn Backend>) -> Self {
        let generator = Generator::new(Arc::clone(&backend));
        let scheduler = Arc::new(Scheduler::new(
            Arc::clone(&backend),
            config.schedule.interval(),
            config.schedule.image_path.clone(),
        ));
        Self {
            config,
            backend,
            generator,
            scheduler,
        }
    }

    pub fn config(&self) -> &LinkpostConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let started = Instant::now();
        info!(command = %name, "Executing command");
        let result = self.execute_inner(command);
        match &result {
            Ok(_) => info!(
                command = %name,
                duration_ms = started.elapsed().as_millis() as u64,
                "Command finished"
            ),
            Err(e) => warn!(command = %name, error = %e, "Command failed"),
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate { command } => self.handle_generate(command),
            Commands::Preview { post, days } => {
                let draft = load_draft(post)?;
                Ok(render_preview(&draft, *days))
            }
            Commands::Post { post, format } => {
                let draft = load_draft(post)?;
                self.handle_post(&draft, format)
            }
            Commands::Schedule { post, days, format } => {
                let draft = load_draft(post)?;
                let report = self.handle_schedule(&draft, *days)?;
                if format == "json" {
                    format_schedule_report_json(&report)
                } else {
                    Ok(format_schedule_report_text(&report))
                }
            }
            Commands::Compose {
                content_prompt,
                image_prompt,
                days,
                image_output,
                yes,
            } => self.handle_compose(
                content_prompt,
                image_prompt,
                *days,
                image_output.as_deref(),
                *yes,
            ),
            Commands::Demo => Ok(format_demo_info(&demo_info())),
            Commands::Config { command } => match command {
                ConfigCommands::Show { format } => format_config(&self.config, format),
            },
        }
    }

    fn handle_generate(&self, command: &GenerateCommands) -> Result<String, ApiError> {
        let rt = runtime()?;
        match command {
            GenerateCommands::Content { prompt, format } => {
                let request = GenerationRequest::content(prompt.as_str())?;
                let result = rt.block_on(self.generator.generate(&request));
                render_generation(&result, format)
            }
            GenerateCommands::Image {
                prompt,
                output,
                format,
            } => {
                let request = GenerationRequest::image(prompt.as_str())?;
                let result = rt.block_on(self.generator.generate(&request));
                let target = output
                    .clone()
                    .unwrap_or_else(|| self.config.schedule.image_path.clone().into());
                let result = save_generated_image(result, &target)?;
                render_generation(&result, format)
            }
        }
    }

    fn handle_post(&self, draft: &PostDraft, format: &str) -> Result<String, ApiError> {
        let rt = runtime()?;
        let outcome = rt.block_on(post_once(
            self.backend.as_ref(),
            draft,
            &self.config.schedule.image_path,
        ))?;
        if format == "json" {
            format_post_outcome_json(&outcome)
        } else {
            Ok(format_post_outcome_text(&outcome))
        }
    }

    /// Run a schedule in the foreground, printing each status line as it happens.
    fn handle_schedule(&self, draft: &PostDraft, days: i64) -> Result<ScheduleReport, ApiError> {
        let rt = runtime()?;
        rt.block_on(async {
            let mut handle = self.scheduler.spawn(draft, days)?;
            while let Some(event) = handle.events.recv().await {
                println!("{}", format_schedule_event(&event));
            }
            handle
                .task
                .await
                .map_err(|e| ApiError::BackendError(format!("Schedule task failed: {}", e)))
        })
    }

    fn handle_compose(
        &self,
        content_prompt: &str,
        image_prompt: &str,
        days: Option<i64>,
        image_output: Option<&Path>,
        yes: bool,
    ) -> Result<String, ApiError> {
        let content_request = GenerationRequest::content(content_prompt)?;
        let image_request = GenerationRequest::image(image_prompt)?;
        if let Some(days) = days {
            crate::schedule::ScheduleConfig::new(days)?;
        }

        let rt = runtime()?;
        let (content, image) = rt.block_on(async {
            futures::join!(
                self.generator.generate(&content_request),
                self.generator.generate(&image_request)
            )
        });
        if content.is_fallback() || image.is_fallback() {
            println!("Backend not available, using demo data.");
        }
        let image = match image_output {
            Some(path) => save_generated_image(image, path)?,
            None => image,
        };

        let draft = PostDraft::new(
            content.into_payload().as_content().map(str::to_string),
            image.into_payload().as_image().cloned(),
        );
        println!("{}", render_preview(&draft, days.unwrap_or(1)));

        if !yes && !confirm(days)? {
            return Ok("Cancelled; nothing was posted.".to_string());
        }

        match days {
            Some(days) => {
                let report = self.handle_schedule(&draft, days)?;
                Ok(format_schedule_report_text(&report))
            }
            None => self.handle_post(&draft, "text"),
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, ApiError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(ApiError::BackendError(
            "Cannot run CLI commands from within an async runtime".to_string(),
        ));
    }
    tokio::runtime::Runtime::new()
        .map_err(|e| ApiError::BackendError(format!("Failed to create runtime: {}", e)))
}

fn render_generation(result: &GenerationResult, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        format_generation_json(result)
    } else {
        Ok(format_generation_text(result))
    }
}

/// Persist backend image bytes so later commands can reference the file.
fn save_generated_image(result: GenerationResult, path: &Path) -> Result<GenerationResult, ApiError> {
    Ok(match result {
        GenerationResult::Remote(Payload::Image(image)) => {
            GenerationResult::Remote(Payload::Image(image.save_to(path)?))
        }
        other => other,
    })
}

fn load_draft(args: &PostArgs) -> Result<PostDraft, ApiError> {
    let content = match (&args.content, &args.content_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(std::fs::read_to_string(path)?),
        (None, None) => None,
    };
    let image = args.image.as_deref().map(ImageRef::parse);
    Ok(PostDraft::new(content, image))
}

fn confirm(days: Option<i64>) -> Result<bool, ApiError> {
    let prompt = match days {
        Some(days) => format!("Schedule this post for {} day(s)?", days),
        None => "Post this to LinkedIn now?".to_string(),
    };
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ApiError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))
}
