// src/services/skills.rs

//! Skill and leader skill extraction.

use scraper::{ElementRef, Html};

use super::selectors::CardSelectors;
use crate::models::SkillEntry;
use crate::utils::html::{element_text, image_src};

/// The regular skill and leader skill of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSkills {
    pub skill: SkillEntry,
    pub leader_skill: SkillEntry,
}

/// Extract skill blocks from every skill table and classify them.
///
/// When a page has several blocks of the same kind, the last one is kept.
pub fn extract_skills(document: &Html, selectors: &CardSelectors) -> CardSkills {
    let mut skills = CardSkills::default();

    let blocks = document
        .select(&selectors.article_table)
        .filter(|table| table.select(&selectors.skill_header_row).next().is_some())
        .flat_map(|table| table_blocks(table, selectors));

    for block in blocks {
        if block.is_leader() {
            skills.leader_skill = block;
        } else {
            skills.skill = block;
        }
    }

    skills
}

/// Split a skill table into blocks, one per header row.
fn table_blocks(table: ElementRef, selectors: &CardSelectors) -> Vec<SkillEntry> {
    let mut blocks = Vec::new();
    let mut current: Option<SkillEntry> = None;

    for row in table.select(&selectors.row) {
        if is_header_row(&row) {
            if let Some(done) = current.take() {
                blocks.push(done);
            }
            current = Some(SkillEntry {
                name: Some(element_text(&row)),
                description: Some(String::new()),
                icon: None,
            });
            continue;
        }

        // Rows before the first header belong to no block
        let Some(block) = current.as_mut() else {
            continue;
        };

        let text = element_text(&row);
        if !text.is_empty() {
            let description = block.description.get_or_insert_with(String::new);
            if !description.is_empty() {
                description.push('\n');
            }
            description.push_str(&text);
        }

        if block.icon.is_none() {
            block.icon = row
                .select(&selectors.img)
                .next()
                .and_then(|img| image_src(&img));
        }
    }

    if let Some(done) = current {
        blocks.push(done);
    }
    blocks
}

fn is_header_row(row: &ElementRef) -> bool {
    row.value().classes().any(|class| class == "article-table")
}
