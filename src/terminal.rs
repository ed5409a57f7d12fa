use crate::pagination::{ControlKind, PaginationStrip};
use crate::render::{ProfileCard, RepoCard, RepoGrid};
use crate::view::ViewPort;
use colored::*;
use std::fmt::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Screen {
    profile: Option<ProfileCard>,
    repos: Option<RepoGrid>,
    pagination: Option<PaginationStrip>,
    alerts: Vec<String>,
}

/// Collects the latest fragments and prints them as coloured text.
#[derive(Debug, Default)]
pub struct TerminalView {
    screen: Mutex<Screen>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    fn screen(&self) -> MutexGuard<'_, Screen> {
        self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_screen(&mut out, &self.screen());
        out
    }
}

fn write_screen(out: &mut String, screen: &Screen) -> fmt::Result {
    for alert in &screen.alerts {
        writeln!(out, "{} {}", "✗".red().bold(), alert.red())?;
    }

    if let Some(profile) = &screen.profile {
        write_profile(out, profile)?;
    }

    if let Some(grid) = &screen.repos {
        writeln!(out, "{}", "=".repeat(50).dimmed())?;
        if grid.is_empty() {
            writeln!(out, "{}", "No repositories on this page".dimmed())?;
        }
        for card in grid.cards() {
            write_card(out, card)?;
        }
    }

    if let Some(strip) = &screen.pagination {
        writeln!(out, "{}", "=".repeat(50).dimmed())?;
        let controls: Vec<String> = strip
            .controls
            .iter()
            .map(|c| match (c.kind, c.active) {
                (ControlKind::Page, true) => format!("[{}]", c.label()).bold().green().to_string(),
                (ControlKind::Page, false) => c.label(),
                _ => c.label().dimmed().to_string(),
            })
            .collect();
        writeln!(
            out,
            "{}  (page {} of {})",
            controls.join(" "),
            strip.current_page,
            strip.total_pages
        )?;
    }

    Ok(())
}

fn write_profile(out: &mut String, profile: &ProfileCard) -> fmt::Result {
    let title = if profile.name.is_empty() {
        profile.login.clone()
    } else {
        format!("{} ({})", profile.name, profile.login)
    };
    writeln!(out, "{}", title.bold().green())?;
    writeln!(out, "🔗 {}", profile.profile_url.cyan())?;
    writeln!(out, "🖼  {}", profile.avatar_url.dimmed())?;
    if !profile.bio.is_empty() {
        writeln!(out, "{}", profile.bio)?;
    }
    writeln!(out, "📍 {}", profile.location)?;
    writeln!(out, "Twitter: {}", profile.twitter)
}

fn write_card(out: &mut String, card: &RepoCard) -> fmt::Result {
    match &card.created {
        Some(created) => writeln!(out, "{} {}", card.name.bold().blue(), format!("({})", created).dimmed())?,
        None => writeln!(out, "{}", card.name.bold().blue())?,
    }
    writeln!(out, "  {}", card.description)?;
    if !card.tags.is_empty() {
        let tags: Vec<String> = card
            .tags
            .iter()
            .map(|tag| format!("[{}]", tag.label()).yellow().to_string())
            .collect();
        writeln!(out, "  {}", tags.join(" "))?;
    }
    Ok(())
}

impl ViewPort for TerminalView {
    fn show_profile(&self, card: &ProfileCard) {
        self.screen().profile = Some(card.clone());
    }

    fn show_repositories(&self, grid: &RepoGrid) {
        self.screen().repos = Some(grid.clone());
    }

    fn show_pagination(&self, strip: &PaginationStrip) {
        self.screen().pagination = Some(strip.clone());
    }

    // Output is printed once the command finishes, so there is nothing to toggle.
    fn set_loading(&self, _visible: bool) {}

    fn alert(&self, message: &str) {
        self.screen().alerts.push(message.to_string());
    }
}
