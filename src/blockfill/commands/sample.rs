use crate::commands::CmdResult;
use crate::draft::DocumentDraft;
use crate::error::Result;

pub fn run() -> Result<CmdResult> {
    let json = DocumentDraft::sample().to_json()?;
    Ok(CmdResult::default().with_output(json))
}
