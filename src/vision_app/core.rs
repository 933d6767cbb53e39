use crate::config::Config;
use crate::device_camera::interface::Frame;
use crate::device_display::interface::DeviceDisplayEvent;
use crate::mode::Mode;
use crate::vision_app::analysis::FrameAnalysis;

/// Last frame that made it through analysis, shown until the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub frame: Frame,
    pub analysis: FrameAnalysis,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    WaitingForTick,
    Capturing,
    Analyzing { frame: Frame },
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Starting {
        mode: Mode,
    },
    Streaming {
        mode: Mode,
        stage: Stage,
        latest: Option<Snapshot>,
    },
    Failed {
        mode: Mode,
        message: String,
    },
    Stopping,
    Stopped,
}

#[derive(Debug)]
pub enum Event {
    Tick,
    DisplayEvent(DeviceDisplayEvent),
    CameraStartDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    FrameCaptureDone(Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>>),
    FrameAnalyzeDone(Result<FrameAnalysis, Box<dyn std::error::Error + Send + Sync>>),
    CameraStopDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeToDisplayEvents,
    SubscribeTick,
    StartCamera,
    CaptureFrame,
    AnalyzeFrame { mode: Mode, frame: Frame },
    StopCamera,
}

pub fn init(config: &Config) -> (State, Vec<Effect>) {
    (
        State::Starting {
            mode: config.initial_mode,
        },
        vec![
            Effect::SubscribeToDisplayEvents,
            Effect::SubscribeTick,
            Effect::StartCamera,
        ],
    )
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        // Shutdown
        (State::Stopping | State::Stopped, Event::CameraStopDone(_)) => (State::Stopped, vec![]),
        (state @ (State::Stopping | State::Stopped), _) => (state, vec![]),
        (_, Event::DisplayEvent(DeviceDisplayEvent::ExitRequested)) => {
            (State::Stopping, vec![Effect::StopCamera])
        }

        // Camera startup
        (State::Starting { mode }, Event::CameraStartDone(Ok(()))) => (
            State::Streaming {
                mode,
                stage: Stage::WaitingForTick,
                latest: None,
            },
            vec![],
        ),
        (State::Starting { mode }, Event::CameraStartDone(Err(e))) => (
            State::Failed {
                mode,
                message: e.to_string(),
            },
            vec![],
        ),

        // Mode switching
        (State::Starting { .. }, Event::DisplayEvent(DeviceDisplayEvent::ModeSelected(mode))) => {
            (State::Starting { mode }, vec![])
        }
        (
            State::Streaming { stage, latest, .. },
            Event::DisplayEvent(DeviceDisplayEvent::ModeSelected(mode)),
        ) => (
            State::Streaming {
                mode,
                stage,
                latest,
            },
            vec![],
        ),
        (
            State::Failed { message, .. },
            Event::DisplayEvent(DeviceDisplayEvent::ModeSelected(mode)),
        ) => (State::Failed { mode, message }, vec![]),

        // Frame loop
        (
            State::Streaming {
                mode,
                stage: Stage::WaitingForTick,
                latest,
            },
            Event::Tick,
        ) => (
            State::Streaming {
                mode,
                stage: Stage::Capturing,
                latest,
            },
            vec![Effect::CaptureFrame],
        ),
        (
            State::Streaming {
                mode,
                stage: Stage::Capturing,
                latest,
            },
            Event::FrameCaptureDone(Ok(Some(frame))),
        ) => match mode {
            Mode::Idle => (
                State::Streaming {
                    mode,
                    stage: Stage::WaitingForTick,
                    latest: Some(Snapshot {
                        frame,
                        analysis: FrameAnalysis::empty(mode),
                    }),
                },
                vec![],
            ),
            _ => (
                State::Streaming {
                    mode,
                    stage: Stage::Analyzing {
                        frame: frame.clone(),
                    },
                    latest,
                },
                vec![Effect::AnalyzeFrame { mode, frame }],
            ),
        },
        // No frame this tick, or the read failed: try again on the next tick.
        (
            State::Streaming {
                mode,
                stage: Stage::Capturing,
                latest,
            },
            Event::FrameCaptureDone(_),
        ) => (
            State::Streaming {
                mode,
                stage: Stage::WaitingForTick,
                latest,
            },
            vec![],
        ),
        (
            State::Streaming {
                mode,
                stage: Stage::Analyzing { frame },
                ..
            },
            Event::FrameAnalyzeDone(result),
        ) => (
            State::Streaming {
                mode,
                stage: Stage::WaitingForTick,
                latest: Some(Snapshot {
                    frame,
                    analysis: result.unwrap_or_else(|_| FrameAnalysis::empty(mode)),
                }),
            },
            vec![],
        ),

        // Default case
        (state, _) => (state, vec![]),
    }
}
