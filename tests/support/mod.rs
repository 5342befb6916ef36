use hsi_lightbulb::{Channel, Level, OutputDriver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Digital(Channel, Level),
    Analog(Channel, u8),
}

/// Driver double remembering every call
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub calls: Vec<Call>,
}

impl RecordingDriver {
    pub const fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Drop recorded calls, returning them
    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl OutputDriver for RecordingDriver {
    fn set_digital(&mut self, channel: Channel, level: Level) {
        self.calls.push(Call::Digital(channel, level));
    }

    fn set_analog(&mut self, channel: Channel, duty: u8) {
        self.calls.push(Call::Analog(channel, duty));
    }
}

pub const ALL_DARK: [Call; 3] = [
    Call::Digital(Channel::Red, Level::High),
    Call::Digital(Channel::Green, Level::High),
    Call::Digital(Channel::Blue, Level::High),
];
