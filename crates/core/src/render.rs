//! Text for the pick-history panels.

pub const SECTION_DIVIDER: &str = "--------------------------------------------------";

fn section(modifier: &str) -> u8 {
    if modifier.contains("[Player]") {
        0
    } else if modifier.contains("[Ghost]") {
        1
    } else {
        2
    }
}

/// Modifiers in descending order, one per line, with a divider wherever the
/// `[Player]` / `[Ghost]` / other grouping changes.
pub fn format_modifiers(modifiers: &[String]) -> String {
    let mut sorted: Vec<&str> = modifiers.iter().map(String::as_str).collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut lines = Vec::with_capacity(sorted.len() + 2);
    let mut previous = None;
    for modifier in sorted {
        let current = section(modifier);
        if previous.is_some_and(|previous| previous != current) {
            lines.push(SECTION_DIVIDER);
        }
        lines.push(modifier);
        previous = Some(current);
    }
    lines.join("\n")
}

pub fn format_challenges(challenges: &[String]) -> String {
    challenges.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn groups_player_before_ghost_before_rest() {
        let modifiers = strings(&[
            "[Ghost] Evidence given: 2",
            "Weather: Heavy rain",
            "[Player] Sprint duration: 2s",
            "[Ghost] Fingerprint chance: 50%",
        ]);
        let text = format_modifiers(&modifiers);
        let expected = [
            "[Player] Sprint duration: 2s",
            SECTION_DIVIDER,
            "[Ghost] Fingerprint chance: 50%",
            "[Ghost] Evidence given: 2",
            SECTION_DIVIDER,
            "Weather: Heavy rain",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn single_section_has_no_divider() {
        let modifiers = strings(&["[Ghost] Evidence given: 1"]);
        assert_eq!(format_modifiers(&modifiers), "[Ghost] Evidence given: 1");
        assert_eq!(format_modifiers(&[]), "");
    }

    #[test]
    fn challenges_keep_pick_order() {
        let challenges = strings(&["No sound", "Can't use any items used last round"]);
        assert_eq!(
            format_challenges(&challenges),
            "No sound\nCan't use any items used last round"
        );
    }
}
