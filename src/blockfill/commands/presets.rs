use crate::commands::CmdResult;
use crate::preset::Preset;

pub fn run() -> CmdResult {
    CmdResult::default().with_presets(Preset::all().to_vec())
}
