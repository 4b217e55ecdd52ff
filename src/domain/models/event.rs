use std::path::PathBuf;

use tui_textarea::Input;

use super::GenerationRequest;
use super::StatusSnapshot;

pub enum Event {
    ClipboardCopied(u64, Result<(), String>),
    GenerationFinished(u64, GenerationRequest, Result<String, String>),
    ResultDownloaded(u64, Result<PathBuf, String>),
    ScrollToResult(u64),
    StatusChecked(u64, Result<StatusSnapshot, String>),
    StatusPollTick(u64),
    SuccessExpired(u64),
    KeyboardBackTab(),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLE(),
    KeyboardCTRLG(),
    KeyboardCTRLL(),
    KeyboardCTRLO(),
    KeyboardCTRLP(),
    KeyboardCTRLR(),
    KeyboardCTRLY(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardTab(),
    UIResize(),
    UIScrollDown(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UIScrollUp(),
    UITick(),
}

impl Event {
    /// Mount token for events that answer an action or a scheduled task.
    pub fn token(&self) -> Option<u64> {
        match self {
            Event::ClipboardCopied(token, _)
            | Event::GenerationFinished(token, _, _)
            | Event::ResultDownloaded(token, _)
            | Event::ScrollToResult(token)
            | Event::StatusChecked(token, _)
            | Event::StatusPollTick(token)
            | Event::SuccessExpired(token) => return Some(*token),
            _ => return None,
        }
    }

    pub fn is_keyboard(&self) -> bool {
        return matches!(
            self,
            Event::KeyboardBackTab()
                | Event::KeyboardCharInput(_)
                | Event::KeyboardCTRLE()
                | Event::KeyboardCTRLG()
                | Event::KeyboardCTRLL()
                | Event::KeyboardCTRLO()
                | Event::KeyboardCTRLR()
                | Event::KeyboardCTRLY()
                | Event::KeyboardEnter()
                | Event::KeyboardEsc()
                | Event::KeyboardTab()
        );
    }

    pub fn is_scroll(&self) -> bool {
        return matches!(
            self,
            Event::UIScrollDown()
                | Event::UIScrollUp()
                | Event::UIScrollPageDown()
                | Event::UIScrollPageUp()
        );
    }
}
