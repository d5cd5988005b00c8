use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use session_manager::application::{
    AuthResultNormalizer, AuthTokenDtoMapper, LoginUseCase, RegisterUseCase, ResolveSessionUseCase,
};
use session_manager::domain::entities::{AuthLoginRequest, AuthRegistrationRequest};
use session_manager::domain::{AuthToken, AuthTokenStorePort, Resource};
#[cfg(feature = "keyring")]
use session_manager::infrastructure::KeyringAuthTokenStore;
use session_manager::infrastructure::{
    AppConfig, CliArgs, Command, ConfigManager, FileAuthTokenStore, HttpAuthRemote,
    InMemoryAuthTokenStore, StoreBackend,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn open_store(config: &AppConfig) -> Result<Arc<dyn AuthTokenStorePort>> {
    match config.store.backend {
        StoreBackend::File => {
            let path = config
                .effective_store_path()
                .ok_or_else(|| eyre!("cannot determine token store location, pass --store-path"))?;
            info!(path = %path.display(), "Using file token store");
            Ok(Arc::new(FileAuthTokenStore::new(path)))
        }
        StoreBackend::Memory => Ok(Arc::new(InMemoryAuthTokenStore::new())),
        #[cfg(feature = "keyring")]
        StoreBackend::Keyring => Ok(Arc::new(KeyringAuthTokenStore::new())),
        #[cfg(not(feature = "keyring"))]
        StoreBackend::Keyring => Err(eyre!("built without keyring support")),
    }
}

fn report(result: &Resource<AuthToken>) -> ExitCode {
    match result {
        Resource::Success { data } => {
            println!("ok: token {}", data.masked());
            ExitCode::SUCCESS
        }
        Resource::Error { message, data } => {
            match data.error_response() {
                Some(state) => eprintln!("error [{}]: {message}", state.error_response_type),
                None => eprintln!("error: {message}"),
            }
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = session_manager::VERSION, "Starting session-manager");

    let remote = Arc::new(HttpAuthRemote::new(&config.api)?);
    let store = open_store(&config)?;
    let normalizer = AuthResultNormalizer::new(Arc::clone(&store), AuthTokenDtoMapper);

    let code = match args.command {
        Command::Login { email, password } => {
            let result = LoginUseCase::new(remote, normalizer)
                .execute(AuthLoginRequest::new(email, password))
                .await;
            report(&result)
        }
        Command::Register {
            email,
            username,
            password,
            password2,
        } => {
            let password2 = password2.unwrap_or_else(|| password.clone());
            let result = RegisterUseCase::new(remote, normalizer)
                .execute(AuthRegistrationRequest::new(
                    email, password, password2, username,
                ))
                .await;
            report(&result)
        }
        Command::Session { email } => {
            match ResolveSessionUseCase::new(store).execute(&email).await? {
                Some(record) => {
                    println!(
                        "{} logged in at {} (token {})",
                        record.email,
                        record.created_at.to_rfc3339(),
                        AuthToken::new(record.token.as_str()).masked()
                    );
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("no stored session for {email}");
                    ExitCode::FAILURE
                }
            }
        }
    };

    Ok(code)
}
