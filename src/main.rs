//! MedAssyst v0.3.0 - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use medassyst::analytics::AnalyticsData;
use medassyst::api::types::ServiceStatus;
use medassyst::api::ApiClient;
use medassyst::auth::{CredentialVerifier, DemoCredentials, DEMO_TOKEN};
use medassyst::chat::{consult_once, ChatSession};
use medassyst::cli::{display, Args, Commands};
use medassyst::config::Config;
use medassyst::directory;
use medassyst::store::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = args.verbosity();
    let progress = verbosity.show_progress();

    // Composition root: one immutable config, one client, one store
    let mut config = Config::load()?;
    if let Some(url) = &args.api_url {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }

    let client = ApiClient::new(&config)?;
    let store = SessionStore::new(Config::session_path()?);

    if verbosity.show_requests() {
        display::show_info(&format!("API: {}", client.base_url()));
        if client.is_demo() {
            display::show_info("Demo mode: responses are generated locally");
        }
    }

    let result = match &args.command {
        Commands::Consult { symptoms, direct } => {
            consult_once(&client, symptoms, *direct, progress).await
        }
        Commands::Chat => ChatSession::new(&client, progress).run().await,
        Commands::History => show_history(&client, progress).await,
        Commands::Delete { id } => delete_consultation(&client, id).await,
        Commands::Clear { yes } => clear_history(&client, *yes).await,
        Commands::Doctors { specialization } => list_doctors(specialization.as_deref()),
        Commands::Analytics => {
            display::print_analytics(&AnalyticsData::mock());
            Ok(())
        }
        Commands::Status => run_status(&client, &config, &store, progress).await,
        Commands::Theme { mode } => set_theme(&store, mode),
        Commands::Login { email } => login(&store, email),
        Commands::Logout => logout(&store),
        Commands::Config => show_config(&config),
    };

    if let Err(e) = result {
        display::show_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

async fn show_history(client: &ApiClient, progress: bool) -> medassyst::Result<()> {
    let pb = display::spinner("Загружаем историю...", progress);
    let items = client.history().await;
    pb.finish_and_clear();

    let items = items?;
    if items.is_empty() {
        display::show_info("История консультаций пуста.");
        return Ok(());
    }

    println!("{}\n", format!("Консультаций: {}", items.len()).bold());
    for consultation in &items {
        display::print_consultation(consultation, false);
    }

    Ok(())
}

async fn delete_consultation(client: &ApiClient, id: &str) -> medassyst::Result<()> {
    client.delete_consultation(id).await?;
    display::show_success(&format!("Консультация {} удалена.", id));
    Ok(())
}

async fn clear_history(client: &ApiClient, skip_confirm: bool) -> medassyst::Result<()> {
    if !skip_confirm {
        print!("Удалить всю историю консультаций? [y/N] ");
        use std::io::Write;
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да") {
            display::show_info("Отменено.");
            return Ok(());
        }
    }

    client.clear_history().await?;
    display::show_success("История консультаций очищена.");
    Ok(())
}

fn list_doctors(specialization: Option<&str>) -> medassyst::Result<()> {
    use medassyst::analysis::SpecialistMatcher;

    let doctors: Vec<&directory::Doctor> = match specialization {
        Some(code) => {
            let matcher = SpecialistMatcher::default();
            if matcher.by_code(code).is_none() {
                let known: Vec<&str> =
                    matcher.entries().iter().map(|s| s.code).collect();
                return Err(medassyst::AssistError::ValidationError(format!(
                    "unknown specialization '{}'; expected one of: {}",
                    code,
                    known.join(", ")
                )));
            }
            directory::by_specialization(code)
        }
        None => directory::all().iter().collect(),
    };

    if doctors.is_empty() {
        display::show_info("В каталоге нет врачей этой специализации.");
        return Ok(());
    }

    for doctor in doctors {
        display::print_doctor(doctor);
    }

    Ok(())
}

/// Connectivity and environment diagnostics
async fn run_status(
    client: &ApiClient,
    config: &Config,
    store: &SessionStore,
    progress: bool,
) -> medassyst::Result<()> {
    println!("{}\n", "MedAssyst diagnostics".bold());

    // Backend reachability
    let pb = display::spinner("Проверяем backend...", progress);
    let healthy = client.check_health().await;
    pb.finish_and_clear();
    print_check("Backend", healthy, client.base_url());

    // Full pipeline status (backend + external diagnosis proxy)
    let pb = display::spinner("Проверяем диагностический сервис...", progress);
    let (status, message) = client.api_status().await;
    pb.finish_and_clear();
    let detail = message.unwrap_or_else(|| status.to_string());
    print_check("Diagnosis API", status == ServiceStatus::Online, &detail);
    print_check("External proxy", true, medassyst::config::EXTERNAL_API_URL);

    // Local environment
    let config_path = Config::config_path()?;
    print_check(
        "Config file",
        config_path.exists(),
        &config_path.display().to_string(),
    );

    let session = store.load();
    match &session {
        Ok(data) => {
            let detail = match &data.user {
                Some(user) => format!("signed in as {}", user.email),
                None => "no active session".to_string(),
            };
            print_check("Session store", true, &detail);
        }
        Err(e) => print_check("Session store", false, &e.to_string()),
    }

    print_check("Demo mode", true, if config.demo_mode { "on" } else { "off" });

    Ok(())
}

fn print_check(name: &str, ok: bool, detail: &str) {
    let mark = if ok {
        "✓".green().bold().to_string()
    } else {
        "✗".red().bold().to_string()
    };
    println!("  {} {:14} {}", mark, name, detail.dimmed());
}

fn set_theme(store: &SessionStore, mode: &str) -> medassyst::Result<()> {
    use medassyst::store::ThemeMode;

    let theme = match mode.to_lowercase().as_str() {
        "light" => ThemeMode::Light,
        "dark" => ThemeMode::Dark,
        other => {
            return Err(medassyst::AssistError::ValidationError(format!(
                "unknown theme '{}'; expected light or dark",
                other
            )))
        }
    };

    store.set_theme(theme)?;
    display::show_success(&format!("Тема сохранена: {}.", mode.to_lowercase()));
    Ok(())
}

fn login(store: &SessionStore, email: &str) -> medassyst::Result<()> {
    use rustyline::DefaultEditor;

    let mut editor = DefaultEditor::new()
        .map_err(|e| medassyst::AssistError::Generic(e.to_string()))?;
    let password = editor
        .readline("Пароль: ")
        .map_err(|e| medassyst::AssistError::Generic(e.to_string()))?;

    let verifier = DemoCredentials;
    let user = verifier
        .verify(email, password.trim())
        .ok_or_else(|| {
            medassyst::AssistError::AuthError("invalid email or password".to_string())
        })?;

    let email = user.email.clone();
    store.save_session(user, DEMO_TOKEN.to_string())?;
    display::show_success(&format!("Вы вошли как {}.", email));

    Ok(())
}

fn logout(store: &SessionStore) -> medassyst::Result<()> {
    store.clear_session()?;
    display::show_success("Сессия завершена.");
    Ok(())
}

fn show_config(config: &Config) -> medassyst::Result<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| medassyst::AssistError::ConfigError(e.to_string()))?;
    println!("{}", rendered);
    Ok(())
}
