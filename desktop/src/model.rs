use std::path::PathBuf;

/// The currently chosen image. Overwritten on each new selection.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

/// Worker-to-UI messages, tagged with the generation that started the work
/// so stale results can be discarded.
pub enum UiMessage {
    PreviewReady {
        generation: u64,
        size: [usize; 2],
        pixels: Vec<u8>,
    },
    PredictDone {
        generation: u64,
        text: String,
    },
}
