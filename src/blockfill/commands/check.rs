use crate::commands::{truncation_messages, CmdMessage, CmdResult};
use crate::config::GeneratorConfig;
use crate::document::assemble_document;
use crate::draft::{DocumentDraft, Overrides};
use crate::error::Result;

/// Builds the document without emitting it and reports how each block came out.
pub fn run(
    draft: &DocumentDraft,
    config: &GeneratorConfig,
    overrides: &Overrides,
) -> Result<CmdResult> {
    let plan = draft.resolve(config, overrides);
    let document = assemble_document(&plan.blocks, plan.separator)?;
    let reports: Vec<_> = document.reports().into_iter().cloned().collect();

    let warnings = truncation_messages(&reports);
    let mut result = CmdResult::default().with_reports(reports);
    if warnings.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "{} block(s), {} lines, nothing dropped",
            document.blocks().len(),
            document.line_count()
        )));
    } else {
        for warning in warnings {
            result.add_message(warning);
        }
    }
    Ok(result)
}
