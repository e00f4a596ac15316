use crate::commands::{truncation_messages, CmdResult};
use crate::config::GeneratorConfig;
use crate::document::assemble_document;
use crate::draft::{DocumentDraft, Overrides};
use crate::error::Result;

pub fn run(
    draft: &DocumentDraft,
    config: &GeneratorConfig,
    overrides: &Overrides,
) -> Result<CmdResult> {
    let plan = draft.resolve(config, overrides);
    let document = assemble_document(&plan.blocks, plan.separator)?;

    let reports = document.reports().into_iter().cloned().collect::<Vec<_>>();
    let mut result = CmdResult::default()
        .with_output(document.render())
        .with_reports(reports);
    for message in truncation_messages(&result.reports) {
        result.add_message(message);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::draft::DraftBlock;

    fn draft(blocks: Vec<DraftBlock>) -> DocumentDraft {
        DocumentDraft {
            blocks,
            ..DocumentDraft::default()
        }
    }

    fn block(title: &str, points: &[&str], target: usize) -> DraftBlock {
        DraftBlock {
            title: title.to_string(),
            points: points.iter().map(|s| s.to_string()).collect(),
            target_lines: Some(target),
            ..DraftBlock::default()
        }
    }

    #[test]
    fn test_generate_renders_document() {
        let d = draft(vec![block("A", &["a"], 3), block("B", &["b"], 2)]);
        let result = run(&d, &GeneratorConfig::default(), &Overrides::default()).unwrap();
        assert_eq!(
            result.output.as_deref(),
            Some("### A\na\n// PADDING-LINE-003\n\n### B\nb")
        );
        assert_eq!(result.reports.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_generate_warns_about_dropped_points() {
        let d = draft(vec![block("A", &["a", "b", "c"], 2)]);
        let result = run(&d, &GeneratorConfig::default(), &Overrides::default()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("2 point(s) dropped"));
    }

    #[test]
    fn test_generate_rejects_zero_target() {
        let d = draft(vec![block("A", &["a"], 0)]);
        assert!(run(&d, &GeneratorConfig::default(), &Overrides::default()).is_err());
    }
}
