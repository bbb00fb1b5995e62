use super::ui;
use crate::core::config::AppConfig;
use crate::core::{AttentionLevel, Finding, screen_entity};
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

/// Screens every configured entity and prints a per-entity attention
/// report. An entity whose ratios cannot be computed is reported and
/// skipped; the remaining entities are still screened.
pub fn run(config: &AppConfig) -> Result<()> {
    if config.entities.is_empty() {
        println!("No entities found in configuration to screen.");
        return Ok(());
    }

    let num_entities = config.entities.len();
    let mut flagged = 0usize;

    for (i, entity) in config.entities.iter().enumerate() {
        debug!("Screening entity: {}", entity.name);

        println!(
            "\nEntity: {}",
            ui::style_text(&entity.name, ui::StyleType::Title)
        );
        if !entity.industry_code.is_empty() {
            println!(
                "{}",
                ui::style_text(
                    &format!("Industry: {}", entity.industry_code),
                    ui::StyleType::Subtle
                )
            );
        }

        match screen_entity(entity, &config.thresholds, &config.exemptions) {
            Ok(findings) => {
                if findings.is_empty() {
                    println!(
                        "{}",
                        ui::style_text("No applicable rules for this entity.", ui::StyleType::Subtle)
                    );
                } else {
                    flagged += findings
                        .iter()
                        .filter(|f| f.level > AttentionLevel::Normal)
                        .count();
                    display_findings(&findings);
                }
            }
            Err(e) => {
                println!(
                    "{}",
                    ui::style_text(&format!("Screening failed: {e}"), ui::StyleType::Error)
                );
            }
        }

        if i < num_entities - 1 {
            ui::print_separator();
        }
    }

    println!(
        "\n{} {}",
        ui::style_text("Flagged subjects:", ui::StyleType::TotalLabel),
        flagged
    );
    Ok(())
}

fn display_findings(findings: &[Finding]) {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Subject"),
        ui::header_cell("Attention"),
    ]);

    for finding in findings {
        table.add_row(vec![
            Cell::new(finding.label),
            ui::level_cell(finding.level),
        ]);
    }

    println!("{table}");
}
