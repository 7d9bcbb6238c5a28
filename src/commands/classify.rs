use anyhow::Result;
use std::path::PathBuf;
use triagem::config::Config;
use triagem::service::TriageService;

pub fn run(config: Config, pdf: Option<PathBuf>, format: &str) -> Result<()> {
    let service = TriageService::new(config);
    let outcome = service.classify(pdf.as_deref())?;

    match format {
        "json" => {
            let json = serde_json::json!({
                "path": outcome.path,
                "specialty": outcome.specialty,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!("{} -> {}", outcome.path.display(), outcome.specialty);
        }
    }
    Ok(())
}
