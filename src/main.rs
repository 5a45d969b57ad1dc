use clap::Parser;
use tutoring_site::adapters::mail::{PrintHandoff, SystemMailHandoff};
use tutoring_site::config::Command;
use tutoring_site::core::catalog::load_catalog;
use tutoring_site::domain::model::ServiceId;
use tutoring_site::domain::ports::MailHandoff;
use tutoring_site::render::AssetResolver;
use tutoring_site::utils::error::ErrorSeverity;
use tutoring_site::utils::{logger, validation::Validate};
use tutoring_site::{
    compose, Browser, CliConfig, LocalStorage, SiteConfig, SiteEngine, SiteError, StaticSitePipeline,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // Initialize logging
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting tutoring-site");
    tracing::debug!("CLI config: {:?}", cli);

    // Load configuration, then let command-line flags override it
    let mut config = match cli.load_site_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    // Validate before touching the catalog or the output directory
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // Run the command and map failures to exit codes
    if let Err(e) = run(&cli, config).await {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: SiteConfig) -> Result<(), SiteError> {
    match &cli.command {
        Command::Build { dry_run, .. } => build(config, *dry_run).await,
        Command::Compose { id, open } => compose_request(&config, ServiceId(*id), *open).await,
        Command::Browse { dry_run } => browse(&config, *dry_run).await,
        Command::Catalog => list_catalog(&config).await,
    }
}

async fn build(config: SiteConfig, dry_run: bool) -> Result<(), SiteError> {
    let source = config.catalog_source()?;
    let storage = LocalStorage::new(config.output.path.clone());
    let pipeline = StaticSitePipeline::new(storage, config, source);
    let engine = SiteEngine::new(pipeline);

    // Dry run: render in memory and list what would be written
    if dry_run {
        tracing::info!("DRY RUN - nothing will be written");
        let bundle = engine.render().await?;
        for file in &bundle.files {
            println!("{:>8}  {}", file.contents.len(), file.path);
        }
        println!("{} files would be written", bundle.len());
        return Ok(());
    }

    let output_path = engine.run().await?;
    println!("✅ Site built successfully!");
    println!("📁 Output saved to: {}", output_path);
    Ok(())
}

async fn compose_request(config: &SiteConfig, id: ServiceId, open: bool) -> Result<(), SiteError> {
    let source = config.catalog_source()?;
    let catalog = load_catalog(source.as_ref()).await?;
    let service = catalog.require(id)?;
    let request = compose(service, &config.contact.email);
    let uri = request.mailto_uri();

    // Hand-off failures fall back to printing the link
    if open {
        if let Err(e) = SystemMailHandoff.hand_off(&uri) {
            tracing::warn!("{}", e);
            println!("{}", uri);
        }
        return Ok(());
    }

    println!("To: {}", request.recipient);
    println!("Subject: {}", request.subject);
    println!();
    println!("{}", request.body);
    println!();
    println!("{}", uri);
    Ok(())
}

async fn browse(config: &SiteConfig, dry_run: bool) -> Result<(), SiteError> {
    let source = config.catalog_source()?;
    let catalog = load_catalog(source.as_ref()).await?;
    let assets = AssetResolver::new(config.output.assets_dir.as_deref()).resolve_all(&catalog);
    let year = chrono::Datelike::year(&chrono::Local::now());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    // --dry-run prints mailto links instead of opening the mail client
    if dry_run {
        let mut browser = Browser::new(
            &catalog,
            &config.site,
            &config.contact,
            assets,
            PrintHandoff::new(std::io::stdout()),
            year,
        );
        browser.run(stdin.lock(), &mut stdout)
    } else {
        let mut browser = Browser::new(
            &catalog,
            &config.site,
            &config.contact,
            assets,
            SystemMailHandoff,
            year,
        );
        browser.run(stdin.lock(), &mut stdout)
    }
}

async fn list_catalog(config: &SiteConfig) -> Result<(), SiteError> {
    let source = config.catalog_source()?;
    let catalog = load_catalog(source.as_ref()).await?;

    for service in &catalog {
        println!(
            "{:>3}  {:<40} {:>6}/month  {}",
            service.id.0,
            service.title,
            service.price.to_string(),
            service.details.schedule
        );
    }
    println!("✅ Catalog valid: {} services", catalog.len());
    Ok(())
}
