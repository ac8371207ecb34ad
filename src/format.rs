const GROUP_SIZE: usize = 4;

/// Splits `value` into groups of at most four characters separated by single
/// spaces. Only an empty input yields `None`; invalid IBANs are grouped too.
pub fn format_groups(value: &str) -> Option<String> {
    let chars: Vec<char> = value.chars().collect();
    if chars.is_empty() {
        return None;
    }
    let groups: Vec<String> = chars
        .chunks(GROUP_SIZE)
        .map(|group| group.iter().collect())
        .collect();
    Some(groups.join(" "))
}
