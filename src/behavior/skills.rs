//! Skill list data and the blocks rendered from it.

use serde::Deserialize;

use crate::error::{BehaviorError, Result};

/// One skill as listed on the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillEntry {
    /// Font Awesome classes, e.g. `fab fa-html5`
    pub icon: String,
    pub name: String,
    /// Proficiency as a percentage string, e.g. `90%`
    pub level: String,
}

impl SkillEntry {
    pub fn new(icon: &str, name: &str, level: &str) -> Self {
        Self {
            icon: icon.to_string(),
            name: name.to_string(),
            level: level.to_string(),
        }
    }

    /// Numeric percentage, if `level` is a well-formed `0%`..`100%`.
    pub fn percent(&self) -> Option<u8> {
        let digits = self.level.strip_suffix('%')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u8>().ok().filter(|p| *p <= 100)
    }

    pub fn validate(&self) -> Result<()> {
        match self.percent() {
            Some(_) => Ok(()),
            None => Err(BehaviorError::InvalidSkillLevel {
                name: self.name.clone(),
                level: self.level.clone(),
            }),
        }
    }
}

/// The skills shown when no config overrides them.
pub fn default_skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry::new("fab fa-html5", "HTML5", "90%"),
        SkillEntry::new("fab fa-css3-alt", "CSS3", "85%"),
        SkillEntry::new("fab fa-js", "JavaScript", "80%"),
        SkillEntry::new("fab fa-react", "React", "75%"),
        SkillEntry::new("fab fa-node-js", "Node.js", "70%"),
        SkillEntry::new("fab fa-git-alt", "Git", "85%"),
    ]
}

/// Everything a rendered skill block needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBlock {
    pub icon_class: String,
    pub name: String,
    /// CSS width of the progress indicator
    pub progress_width: String,
    /// Text of the percentage label
    pub label: String,
}

/// Build the blocks for a skill list, in list order.
///
/// Pure function of its input: rendering the same list again yields the
/// same blocks, so the container never ends up with duplicates.
pub fn skill_blocks(skills: &[SkillEntry]) -> Vec<SkillBlock> {
    skills
        .iter()
        .map(|skill| SkillBlock {
            icon_class: skill.icon.clone(),
            name: skill.name.clone(),
            progress_width: skill.level.clone(),
            label: skill.level.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_entry_produces_one_block() {
        let blocks = skill_blocks(&[SkillEntry::new("fab fa-html5", "HTML5", "90%")]);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].icon_class, "fab fa-html5");
        assert_eq!(blocks[0].name, "HTML5");
        assert_eq!(blocks[0].progress_width, "90%");
        assert_eq!(blocks[0].label, "90%");
    }

    #[test]
    fn blocks_keep_list_order() {
        let skills = default_skills();
        let names: Vec<_> = skill_blocks(&skills).into_iter().map(|b| b.name).collect();
        let expected: Vec<_> = skills.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn default_skills_are_valid() {
        for skill in default_skills() {
            skill.validate().expect("default skill should be valid");
        }
    }

    #[test]
    fn level_parsing() {
        assert_eq!(SkillEntry::new("i", "n", "0%").percent(), Some(0));
        assert_eq!(SkillEntry::new("i", "n", "100%").percent(), Some(100));
        assert_eq!(SkillEntry::new("i", "n", "101%").percent(), None);
        assert_eq!(SkillEntry::new("i", "n", "90").percent(), None);
        assert_eq!(SkillEntry::new("i", "n", "%").percent(), None);
        assert_eq!(SkillEntry::new("i", "n", "-5%").percent(), None);
        assert!(SkillEntry::new("i", "Rust", "lots").validate().is_err());
    }
}
