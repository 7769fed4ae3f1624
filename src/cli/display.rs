//! Terminal rendering helpers
//!
//! Severity badges, consultation cards, doctor cards and simple bar charts
//! for the analytics view. All output degrades to plain text when colors
//! are unsupported; `colored` handles that detection.

use crate::analysis::Severity;
use crate::analytics::AnalyticsData;
use crate::api::types::Consultation;
use crate::directory::Doctor;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Colored label for a severity code
pub fn severity_badge(code: Option<u8>) -> String {
    let severity = Severity::from_code(code.unwrap_or(0));
    let label = severity.label();

    match severity {
        Severity::Urgent => label.red().bold().to_string(),
        Severity::Attention => label.yellow().bold().to_string(),
        Severity::NotUrgent => label.blue().to_string(),
        Severity::Undefined => label.dimmed().to_string(),
    }
}

/// Spinner shown while a request is in flight
///
/// Hidden in quiet mode so only results reach the terminal.
pub fn spinner(message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn show_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn show_info(message: &str) {
    println!("{} {}", "ℹ".cyan(), message);
}

pub fn show_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Render one consultation card
pub fn print_consultation(consultation: &Consultation, full: bool) {
    let date = consultation
        .created_at
        .format("%Y-%m-%d %H:%M")
        .to_string();

    println!(
        "{}  {}  [{}]",
        consultation.id.bold(),
        date.dimmed(),
        severity_badge(consultation.severity)
    );
    println!("  {} {}", "Симптомы:".bold(), consultation.symptoms);

    let diagnosis = if full {
        consultation.diagnosis.clone()
    } else {
        truncate(&consultation.diagnosis, 150)
    };
    println!("  {} {}", "Диагноз:".bold(), diagnosis);
    println!();
}

/// Render one doctor card
pub fn print_doctor(doctor: &Doctor) {
    println!(
        "{}  {}  {}",
        doctor.name.bold(),
        format!("★ {:.1}", doctor.rating).yellow(),
        format!("стаж {} лет", doctor.experience_years).dimmed()
    );
    println!("  {} — {}", doctor.city, doctor.hospital);
    print!("  {} ", doctor.phone);
    if let Some(telegram) = doctor.telegram {
        print!("{} ", telegram.cyan());
    }
    println!(
        "{}",
        format!("свободных слотов: {}", doctor.available_slots).dimmed()
    );
    println!();
}

/// Render the analytics dashboard as text bar charts
pub fn print_analytics(data: &AnalyticsData) {
    println!("{}", "Консультации за 30 дней".bold());
    let recent: Vec<_> = data.daily_counts.iter().rev().take(7).collect();
    for day in recent.into_iter().rev() {
        println!("  {}  {}", day.date.dimmed(), bar(day.count, 5));
    }
    println!();

    println!("{}", "Частые симптомы".bold());
    for item in data.top_symptoms.iter().take(5) {
        println!("  {:28} {}", item.label, bar(item.count, 50));
    }
    println!();

    println!("{}", "Распределение по срочности".bold());
    for item in &data.severity_distribution {
        println!("  {:28} {}", item.label, bar(item.count, 70));
    }
}

fn bar(count: u32, max: u32) -> String {
    let width = if max == 0 {
        0
    } else {
        (count * 20 / max.max(1)).min(20) as usize
    };
    format!("{} {}", "█".repeat(width.max(1)).cyan(), count)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}
