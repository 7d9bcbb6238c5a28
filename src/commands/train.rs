use anyhow::Result;
use triagem::config::Config;
use triagem::service::TriageService;

pub fn run(config: Config) -> Result<()> {
    let service = TriageService::new(config);
    let outcome = service.train()?;

    println!(
        "Trained on {} documents ({} skipped); model saved to {}",
        outcome.documents,
        outcome.skipped,
        outcome.model_path.display()
    );
    println!("\n{}", outcome.report);
    Ok(())
}
