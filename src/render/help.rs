use super::Formatter;

/// Renders a command listing from (label, order key) pairs: labels are
/// stable-sorted ascending by key (ties keep input order), tab-prefixed
/// and newline-joined. The input is never mutated.
pub struct CommandListFormatter;

impl<L: AsRef<str>, K: Ord> Formatter<[(L, K)]> for CommandListFormatter {
    fn render(&self, commands: &[(L, K)]) -> String {
        let mut sorted: Vec<&(L, K)> = commands.iter().collect();
        sorted.sort_by(|a, b| a.1.cmp(&b.1));

        let labels: Vec<&str> = sorted.iter().map(|c| c.0.as_ref()).collect();
        format!("\t{}", labels.join("\n\t"))
    }
}
