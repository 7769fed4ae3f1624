//! Interactive symptom-assistant session
//!
//! A rustyline loop: each line of free text becomes a diagnosis request;
//! the reply is annotated with the local severity level, a specialist
//! recommendation, and matching doctors from the directory. Network
//! failures print an inline error and the loop continues.

use crate::analysis::{Severity, SeverityClassifier, SpecialistMatcher};
use crate::api::ApiClient;
use crate::cli::display;
use crate::directory;
use crate::errors::{AssistError, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const GREETING: &str =
    "Опишите ваши симптомы. Команды: /history, /clear, /exit (или Ctrl-D).";

/// One consultation round: request a diagnosis and render it with the
/// severity badge, a specialist recommendation and matching doctors.
///
/// Shared by the one-shot `consult` command and the interactive chat.
/// `progress` gates the in-flight spinner (off in quiet mode).
pub async fn consult_once(
    client: &ApiClient,
    symptoms: &str,
    direct: bool,
    progress: bool,
) -> Result<()> {
    let pb = display::spinner("Запрашиваем диагноз...", progress);
    let response = if direct {
        client.diagnose_direct(symptoms).await
    } else {
        client.diagnose(symptoms).await
    };
    pb.finish_and_clear();

    let response = response?;

    println!("\n{}\n", response.diagnosis);

    // Prefer the backend's severity; fall back to the local heuristic
    let severity = match response.severity {
        Some(code) if code != 0 => Severity::from_code(code),
        _ => SeverityClassifier::default().classify(symptoms, &response.diagnosis),
    };
    println!("Срочность: {}", display::severity_badge(Some(severity.code())));

    if let Some(spec) = SpecialistMatcher::default().recommend(symptoms, &response.diagnosis) {
        println!(
            "Рекомендуемый специалист: {} ({})",
            spec.name_ru.bold(),
            spec.code
        );

        let doctors = directory::by_specialization(spec.code);
        if !doctors.is_empty() {
            println!();
            for doctor in doctors.iter().take(2) {
                display::print_doctor(doctor);
            }
        }
    }

    Ok(())
}

/// Interactive chat session over one API client
pub struct ChatSession<'a> {
    client: &'a ApiClient,
    show_progress: bool,
}

impl<'a> ChatSession<'a> {
    pub fn new(client: &'a ApiClient, show_progress: bool) -> Self {
        Self {
            client,
            show_progress,
        }
    }

    /// Run the read-eval loop until /exit or EOF
    pub async fn run(&self) -> Result<()> {
        let mut editor =
            DefaultEditor::new().map_err(|e| AssistError::Generic(e.to_string()))?;

        display::show_info(GREETING);

        loop {
            match editor.readline(&"вы> ".green().to_string()) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(line);

                    match line {
                        "/exit" | "/quit" => break,
                        "/history" => self.show_history().await,
                        "/clear" => self.clear_history().await,
                        _ => {
                            if let Err(e) =
                                consult_once(self.client, line, false, self.show_progress).await
                            {
                                display::show_error(&format!(
                                    "Не удалось получить диагноз: {}",
                                    e
                                ));
                            }
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    display::show_error(&format!("input error: {}", e));
                    break;
                }
            }
        }

        Ok(())
    }

    async fn show_history(&self) {
        match self.client.history().await {
            Ok(items) if items.is_empty() => display::show_info("История пуста."),
            Ok(items) => {
                for consultation in &items {
                    display::print_consultation(consultation, false);
                }
            }
            Err(e) => display::show_error(&format!("Не удалось загрузить историю: {}", e)),
        }
    }

    async fn clear_history(&self) {
        match self.client.clear_history().await {
            Ok(()) => display::show_success("История очищена."),
            Err(e) => display::show_error(&format!("Не удалось очистить историю: {}", e)),
        }
    }
}
